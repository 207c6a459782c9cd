//! Notification target identifiers and backend selection.

use std::collections::HashMap;
use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use strum::{Display, EnumString};

use crate::config::NotificationConfig;
use crate::error::{BeaconError, BeaconResult};

/// General grammar for notification identifiers: a scheme prefix followed by
/// a non-empty, whitespace-free resource.
static IDENTIFIER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9+.-]*:\S+$").expect("identifier grammar regex"));

/// Delivery mechanisms a notification target can name.
///
/// Only `PubSub` has a working implementation; the others are selectable in
/// configuration and fail at dispatch time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum BackendKind {
    /// Publish to a pub/sub topic.
    PubSub,
    /// Invoke a serverless function.
    Function,
    /// Append to a log stream.
    LogStream,
    /// Call a gateway endpoint.
    Gateway,
}

/// A notification identifier parsed once into scheme, backend kind, and
/// resource.
///
/// An unrecognized scheme is not a parse error: the identifier is kept with
/// `kind() == None`, and registration against such a target yields zero
/// bindings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetUri {
    raw: String,
    scheme: String,
    resource: String,
    kind: Option<BackendKind>,
}

impl TargetUri {
    /// Parse an identifier of the form `scheme:resource`.
    pub fn parse(raw: &str) -> BeaconResult<Self> {
        if raw.is_empty() {
            return Err(BeaconError::configuration(
                "`notification_uri` is a required field",
            ));
        }
        if !IDENTIFIER_RE.is_match(raw) {
            return Err(BeaconError::configuration(format!(
                "invalid notification identifier: {}",
                raw
            )));
        }

        let (scheme, resource) = raw.split_once(':').ok_or_else(|| {
            BeaconError::configuration(format!("invalid notification identifier: {}", raw))
        })?;

        Ok(Self {
            raw: raw.to_string(),
            scheme: scheme.to_string(),
            resource: resource.to_string(),
            kind: scheme.parse::<BackendKind>().ok(),
        })
    }

    /// Backend kind named by the scheme, if any backend recognizes it.
    pub fn kind(&self) -> Option<BackendKind> {
        self.kind
    }

    /// Scheme prefix of the identifier.
    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    /// Resource part of the identifier (everything after the scheme).
    pub fn resource(&self) -> &str {
        &self.resource
    }

    /// The identifier as configured.
    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl fmt::Display for TargetUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// A configured notification destination: the parsed identifier plus extra
/// parameters merged into every outgoing message.
///
/// Created once at startup; immutable thereafter.
#[derive(Debug, Clone)]
pub struct NotificationTarget {
    uri: TargetUri,
    parameters: HashMap<String, serde_json::Value>,
}

impl NotificationTarget {
    /// Validate and parse the configured identifier.
    ///
    /// Fails with a configuration error before any registration can happen.
    pub fn new(
        notification_uri: &str,
        parameters: HashMap<String, serde_json::Value>,
    ) -> BeaconResult<Self> {
        let uri = TargetUri::parse(notification_uri)?;
        Ok(Self { uri, parameters })
    }

    /// Build a target from a notification configuration block.
    pub fn from_config(config: &NotificationConfig) -> BeaconResult<Self> {
        Self::new(&config.notification_uri, config.parameters.clone())
    }

    /// The parsed notification identifier.
    pub fn uri(&self) -> &TargetUri {
        &self.uri
    }

    /// Extra parameters bound into every registration for this target.
    pub fn parameters(&self) -> &HashMap<String, serde_json::Value> {
        &self.parameters
    }
}
