//! Client configuration.
//!
//! A [`ClientConfig`] is the validated, ready-to-connect form of a
//! [`Profile`](crate::Profile). It is produced by
//! [`ClientConfig::from_profile`] and handed to a
//! [`Connector`](crate::transport::Connector), either directly or through
//! [`connect`].

mod builder;

pub use builder::connect;

use std::net::Ipv6Addr;
use std::time::Duration;

use bytes::Bytes;

use crate::v3::{SecurityModel, SecurityParameters};
use crate::version::Version;

/// Timeout used by connectors when a profile leaves it at zero.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Credentials for one protocol generation.
///
/// Exactly one form exists per config, so a v1/v2c config can never carry
/// USM parameters and a v3 config always does.
#[derive(Clone, PartialEq, Eq)]
pub enum Auth {
    /// Community string (SNMPv1 or v2c), copied verbatim from the profile.
    Community(Bytes),
    /// User-based Security Model (SNMPv3).
    Usm {
        /// Security model tag (always USM)
        security_model: SecurityModel,
        /// Validated USM parameters
        params: SecurityParameters,
    },
}

impl std::fmt::Debug for Auth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Community(_) => f.debug_tuple("Community").field(&"[REDACTED]").finish(),
            Self::Usm {
                security_model,
                params,
            } => f
                .debug_struct("Usm")
                .field("security_model", security_model)
                .field("params", params)
                .finish(),
        }
    }
}

/// Validated client configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Agent host name or address
    pub host: String,
    /// Agent port (never zero)
    pub port: u16,
    /// Request timeout; zero means the engine's default
    pub timeout: Duration,
    /// Retry count; zero means the engine's default
    pub retries: u32,
    /// Protocol generation
    pub version: Version,
    /// Credentials matching `version`
    pub auth: Auth,
}

impl ClientConfig {
    /// Target in `host:port` form, bracketing IPv6 literals.
    ///
    /// # Example
    ///
    /// ```rust
    /// use snmp_profile::{ClientConfig, Profile};
    ///
    /// let config = ClientConfig::from_profile(&Profile::community("::1", "2c", "public")).unwrap();
    /// assert_eq!(config.target(), "[::1]:161");
    /// ```
    pub fn target(&self) -> String {
        if self.host.parse::<Ipv6Addr>().is_ok() {
            format!("[{}]:{}", self.host, self.port)
        } else {
            format!("{}:{}", self.host, self.port)
        }
    }

    /// Community string, for v1/v2c configs.
    pub fn community(&self) -> Option<&[u8]> {
        match &self.auth {
            Auth::Community(community) => Some(&community[..]),
            Auth::Usm { .. } => None,
        }
    }

    /// USM parameters, for v3 configs.
    pub fn security_parameters(&self) -> Option<&SecurityParameters> {
        match &self.auth {
            Auth::Usm { params, .. } => Some(params),
            Auth::Community(_) => None,
        }
    }

    /// Security model tag, for v3 configs.
    pub fn security_model(&self) -> Option<SecurityModel> {
        match &self.auth {
            Auth::Usm { security_model, .. } => Some(*security_model),
            Auth::Community(_) => None,
        }
    }

    /// Timeout a connector should apply, substituting [`DEFAULT_TIMEOUT`]
    /// for zero.
    pub fn effective_timeout(&self) -> Duration {
        if self.timeout.is_zero() {
            DEFAULT_TIMEOUT
        } else {
            self.timeout
        }
    }

    /// Worst-case time a request may take: `timeout * (retries + 1)`.
    pub fn max_request_time(&self) -> Duration {
        self.effective_timeout()
            .saturating_mul(self.retries.saturating_add(1))
    }
}
