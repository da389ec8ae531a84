//! Profile to client configuration.
//!
//! This module holds the version dispatch that turns a
//! [`Profile`] into a [`ClientConfig`], and the [`connect`] handoff to a
//! [`Connector`].

use std::time::Duration;

use bytes::Bytes;

use crate::client::{Auth, ClientConfig};
use crate::error::{Error, ProfileErrorKind, Result};
use crate::profile::Profile;
use crate::transport::Connector;
use crate::v3::{self, SecurityModel};
use crate::version::{DEFAULT_PORT, Version};

impl ClientConfig {
    /// Validate a profile and build the client configuration.
    ///
    /// - An unknown version tag fails with
    ///   [`ProfileErrorKind::Version`] before any v3 field is looked at.
    /// - v1/v2c copy the community string verbatim; an empty community is
    ///   passed through for the engine to judge.
    /// - v3 derives [`SecurityParameters`](crate::v3::SecurityParameters)
    ///   with [`v3::security_parameters`]; any failure there fails the build.
    /// - Port 0 becomes [`DEFAULT_PORT`]. Timeout and retries are copied,
    ///   zero included.
    ///
    /// No I/O is performed. Rejections are logged at `warn` with the host.
    ///
    /// # Example
    ///
    /// ```rust
    /// use snmp_profile::{ClientConfig, Profile, Version};
    /// use std::time::Duration;
    ///
    /// let profile = Profile::community("192.0.2.1", "2", "public").timing(3, 2);
    /// let config = ClientConfig::from_profile(&profile).unwrap();
    ///
    /// assert_eq!(config.version, Version::V2c);
    /// assert_eq!(config.port, 161);
    /// assert_eq!(config.timeout, Duration::from_secs(3));
    /// assert_eq!(config.retries, 2);
    /// assert_eq!(config.community(), Some(&b"public"[..]));
    /// ```
    pub fn from_profile(profile: &Profile) -> Result<Self> {
        let Some(version) = Version::from_tag(&profile.version) else {
            tracing::warn!(target: "snmp_profile::profile", { snmp.host = %profile.host, snmp.version = %profile.version }, "invalid SNMP version");
            return Err(Error::invalid_profile(&profile.host, ProfileErrorKind::Version));
        };

        let port = if profile.port == 0 {
            DEFAULT_PORT
        } else {
            profile.port
        };

        let auth = match version {
            Version::V1 | Version::V2c => {
                Auth::Community(Bytes::copy_from_slice(profile.community.as_bytes()))
            }
            Version::V3 => {
                let params = v3::security_parameters(profile)
                    .map_err(|kind| Error::invalid_profile(&profile.host, kind))?;
                Auth::Usm {
                    security_model: SecurityModel::Usm,
                    params,
                }
            }
        };

        let config = ClientConfig {
            host: profile.host.clone(),
            port,
            timeout: Duration::from_secs(profile.timeout),
            retries: profile.retries,
            version,
            auth,
        };

        tracing::debug!(target: "snmp_profile::profile", { snmp.host = %config.host, snmp.port = config.port, snmp.version = %config.version }, "profile validated");

        Ok(config)
    }
}

/// Validate `profile` and hand the resulting config to `connector`.
///
/// Validation errors are returned without invoking the connector. The
/// connector's outcome, success or failure, is returned unchanged.
///
/// # Example
///
/// ```rust,no_run
/// use snmp_profile::{Profile, client, transport::UdpConnector};
///
/// # async fn example() -> snmp_profile::Result<()> {
/// let profile = Profile::usm("192.0.2.1", "AuthNoPriv", "monitor").auth("SHA", "authpass123");
/// let session = client::connect(&profile, &UdpConnector).await?;
/// println!("connected to {}", session.peer_addr());
/// # Ok(())
/// # }
/// ```
pub async fn connect<C: Connector>(profile: &Profile, connector: &C) -> Result<C::Session> {
    let config = ClientConfig::from_profile(profile)?;
    connector.connect(config).await
}
