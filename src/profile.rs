//! Connection profiles.
//!
//! A [`Profile`] is the flat, user-facing description of how to reach one
//! SNMP agent. It is validated and turned into a
//! [`ClientConfig`](crate::ClientConfig) by
//! [`ClientConfig::from_profile`](crate::ClientConfig::from_profile).
//!
//! With the `serde` feature, profiles deserialize from any serde format.
//! Every field except `host` may be omitted:
//!
//! ```toml
//! host = "192.0.2.10"
//! version = "3"
//! security_level = "AuthPriv"
//! username = "monitor"
//! auth_protocol = "SHA"
//! auth_passphrase = "authpass123"
//! priv_protocol = "AES"
//! priv_passphrase = "privpass123"
//! ```

/// Connection profile for one SNMP agent.
///
/// Protocol, level and algorithm fields are kept as the raw strings the
/// operator wrote so that validation can report exactly what was wrong.
#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Profile {
    /// Agent host name or address
    pub host: String,
    /// Version tag: "1", "2", "2c" or "3" (default: "2c")
    pub version: String,
    /// Community string for v1/v2c (default: "public")
    pub community: String,
    /// Agent port; 0 selects [`DEFAULT_PORT`](crate::DEFAULT_PORT)
    pub port: u16,
    /// Timeout in seconds; 0 leaves the choice to the engine
    pub timeout: u64,
    /// Retry count; 0 leaves the choice to the engine
    pub retries: u32,
    /// v3 security level tag: "NoAuthNoPriv", "AuthNoPriv" or "AuthPriv"
    pub security_level: String,
    /// v3 user name
    pub username: String,
    /// v3 authentication passphrase
    #[cfg_attr(feature = "serde", serde(skip_serializing))]
    pub auth_passphrase: String,
    /// v3 authentication protocol name: "NoAuth", "MD5" or "SHA"
    pub auth_protocol: String,
    /// v3 privacy protocol name: "NoPriv", "DES" or "AES"
    pub priv_protocol: String,
    /// v3 privacy passphrase
    #[cfg_attr(feature = "serde", serde(skip_serializing))]
    pub priv_passphrase: String,
}

impl Default for Profile {
    /// An SNMPv2c profile with community "public" and no host.
    fn default() -> Self {
        Self {
            host: String::new(),
            version: "2c".into(),
            community: "public".into(),
            port: 0,
            timeout: 0,
            retries: 0,
            security_level: String::new(),
            username: String::new(),
            auth_passphrase: String::new(),
            auth_protocol: String::new(),
            priv_protocol: String::new(),
            priv_passphrase: String::new(),
        }
    }
}

impl Profile {
    /// Create a v1/v2c profile.
    ///
    /// # Example
    ///
    /// ```rust
    /// use snmp_profile::Profile;
    ///
    /// let profile = Profile::community("192.0.2.1", "2c", "public");
    /// assert_eq!(profile.version, "2c");
    /// ```
    pub fn community(
        host: impl Into<String>,
        version: impl Into<String>,
        community: impl Into<String>,
    ) -> Self {
        Self {
            host: host.into(),
            version: version.into(),
            community: community.into(),
            ..Default::default()
        }
    }

    /// Create a v3 profile with the given security level and user name.
    ///
    /// Authentication and privacy settings are filled in with
    /// [`auth`](Self::auth) and [`privacy`](Self::privacy).
    ///
    /// # Example
    ///
    /// ```rust
    /// use snmp_profile::Profile;
    ///
    /// let profile = Profile::usm("192.0.2.1", "AuthPriv", "monitor")
    ///     .auth("SHA", "authpass123")
    ///     .privacy("AES", "privpass123");
    /// assert_eq!(profile.version, "3");
    /// ```
    pub fn usm(
        host: impl Into<String>,
        security_level: impl Into<String>,
        username: impl Into<String>,
    ) -> Self {
        Self {
            host: host.into(),
            version: "3".into(),
            community: String::new(),
            security_level: security_level.into(),
            username: username.into(),
            ..Default::default()
        }
    }

    /// Set the authentication protocol name and passphrase.
    pub fn auth(mut self, protocol: impl Into<String>, passphrase: impl Into<String>) -> Self {
        self.auth_protocol = protocol.into();
        self.auth_passphrase = passphrase.into();
        self
    }

    /// Set the privacy protocol name and passphrase.
    pub fn privacy(mut self, protocol: impl Into<String>, passphrase: impl Into<String>) -> Self {
        self.priv_protocol = protocol.into();
        self.priv_passphrase = passphrase.into();
        self
    }

    /// Set the agent port.
    pub fn port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Set the timeout (seconds) and retry count.
    pub fn timing(mut self, timeout: u64, retries: u32) -> Self {
        self.timeout = timeout;
        self.retries = retries;
        self
    }
}

impl std::fmt::Debug for Profile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Profile")
            .field("host", &self.host)
            .field("version", &self.version)
            .field("community", &"[REDACTED]")
            .field("port", &self.port)
            .field("timeout", &self.timeout)
            .field("retries", &self.retries)
            .field("security_level", &self.security_level)
            .field("username", &self.username)
            .field("auth_protocol", &self.auth_protocol)
            .field("auth_passphrase", &"[REDACTED]")
            .field("priv_protocol", &self.priv_protocol)
            .field("priv_passphrase", &"[REDACTED]")
            .finish()
    }
}
