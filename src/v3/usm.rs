//! USM security parameter derivation.
//!
//! [`security_parameters`] is the security-level decision for a v3 profile.
//! Checks run in a fixed order and the first failure wins:
//!
//! 1. username present ([`BadUser`](ProfileErrorKind::BadUser))
//! 2. security level tag known ([`Level`](ProfileErrorKind::Level))
//! 3. for authNoPriv/authPriv: auth passphrase present
//!    ([`BadPassword`](ProfileErrorKind::BadPassword)), then auth protocol
//!    name known ([`BadProtocol`](ProfileErrorKind::BadProtocol))
//! 4. for authPriv: privacy passphrase present
//!    ([`Privacy`](ProfileErrorKind::Privacy)), then privacy protocol name
//!    known ([`BadPassword`](ProfileErrorKind::BadPassword))
//!
//! Fields a level does not use are never inspected.

use zeroize::{Zeroize, ZeroizeOnDrop};

use super::{AuthProtocol, MsgFlags, PrivProtocol, SecurityLevel};
use crate::error::ProfileErrorKind;
use crate::profile::Profile;

/// Resolved USM parameters handed to the protocol engine.
///
/// Passphrases are zeroized on drop and never shown by `Debug`.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct SecurityParameters {
    /// USM user name
    pub username: String,
    /// Resolved authentication protocol
    #[zeroize(skip)]
    pub auth_protocol: AuthProtocol,
    /// Authentication passphrase (empty for noAuthNoPriv)
    pub auth_passphrase: String,
    /// Resolved privacy protocol
    #[zeroize(skip)]
    pub priv_protocol: PrivProtocol,
    /// Privacy passphrase (empty unless authPriv)
    pub priv_passphrase: String,
    /// Message flags for the effective security level
    #[zeroize(skip)]
    pub msg_flags: MsgFlags,
}

impl SecurityParameters {
    /// noAuthNoPriv parameters for `username`.
    pub fn no_auth(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            auth_protocol: AuthProtocol::NoAuth,
            auth_passphrase: String::new(),
            priv_protocol: PrivProtocol::NoPriv,
            priv_passphrase: String::new(),
            msg_flags: SecurityLevel::NoAuthNoPriv.into(),
        }
    }

    /// The effective security level.
    pub fn security_level(&self) -> SecurityLevel {
        self.msg_flags.security_level
    }
}

impl std::fmt::Debug for SecurityParameters {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecurityParameters")
            .field("username", &self.username)
            .field("auth_protocol", &self.auth_protocol)
            .field("auth_passphrase", &"[REDACTED]")
            .field("priv_protocol", &self.priv_protocol)
            .field("priv_passphrase", &"[REDACTED]")
            .field("msg_flags", &self.msg_flags)
            .finish()
    }
}

/// Derive the USM parameters for a v3 profile.
///
/// Only the v3 fields of `profile` are consulted; `host` is used for
/// diagnostics. Every rejection is logged at `warn` under the
/// `snmp_profile::profile` target before it is returned.
///
/// # Example
///
/// ```rust
/// use snmp_profile::{Profile, ProfileErrorKind};
/// use snmp_profile::v3::{AuthProtocol, PrivProtocol, SecurityLevel, security_parameters};
///
/// let profile = Profile::usm("192.0.2.1", "AuthPriv", "monitor")
///     .auth("SHA", "authpass123")
///     .privacy("AES", "privpass123");
/// let params = security_parameters(&profile).unwrap();
/// assert_eq!(params.auth_protocol, AuthProtocol::Sha);
/// assert_eq!(params.priv_protocol, PrivProtocol::Aes);
/// assert_eq!(params.security_level(), SecurityLevel::AuthPriv);
///
/// let profile = Profile::usm("192.0.2.1", "AuthPriv", "");
/// assert_eq!(security_parameters(&profile), Err(ProfileErrorKind::BadUser));
/// ```
pub fn security_parameters(profile: &Profile) -> Result<SecurityParameters, ProfileErrorKind> {
    if profile.username.is_empty() {
        tracing::warn!(target: "snmp_profile::profile", { snmp.host = %profile.host }, "no SNMPv3 username");
        return Err(ProfileErrorKind::BadUser);
    }

    let Some(level) = SecurityLevel::from_tag(&profile.security_level) else {
        tracing::warn!(target: "snmp_profile::profile", { snmp.host = %profile.host, snmp.security_level = %profile.security_level }, "invalid security level");
        return Err(ProfileErrorKind::Level);
    };

    let mut params = SecurityParameters::no_auth(profile.username.as_str());
    params.msg_flags = level.into();

    if level.requires_auth() {
        params.auth_protocol = resolve_auth(profile)?;
        params.auth_passphrase = profile.auth_passphrase.clone();
    }

    if level.requires_priv() {
        params.priv_protocol = resolve_priv(profile)?;
        params.priv_passphrase = profile.priv_passphrase.clone();
    }

    tracing::debug!(
        target: "snmp_profile::profile",
        { snmp.host = %profile.host, snmp.username = %params.username, snmp.security_level = %level, snmp.auth_protocol = %params.auth_protocol, snmp.priv_protocol = %params.priv_protocol },
        "resolved USM parameters"
    );

    Ok(params)
}

/// Passphrase first, then protocol name.
fn resolve_auth(profile: &Profile) -> Result<AuthProtocol, ProfileErrorKind> {
    if profile.auth_passphrase.is_empty() {
        tracing::warn!(target: "snmp_profile::profile", { snmp.host = %profile.host }, "no SNMPv3 auth passphrase");
        return Err(ProfileErrorKind::BadPassword);
    }
    AuthProtocol::from_name(&profile.auth_protocol).ok_or_else(|| {
        tracing::warn!(target: "snmp_profile::profile", { snmp.host = %profile.host, snmp.auth_protocol = %profile.auth_protocol }, "invalid auth protocol");
        ProfileErrorKind::BadProtocol
    })
}

/// Passphrase first, then protocol name. An unknown name reports
/// `BadPassword`, not a protocol error.
fn resolve_priv(profile: &Profile) -> Result<PrivProtocol, ProfileErrorKind> {
    if profile.priv_passphrase.is_empty() {
        tracing::warn!(target: "snmp_profile::profile", { snmp.host = %profile.host }, "no SNMPv3 privacy passphrase");
        return Err(ProfileErrorKind::Privacy);
    }
    PrivProtocol::from_name(&profile.priv_protocol).ok_or_else(|| {
        tracing::warn!(target: "snmp_profile::profile", { snmp.host = %profile.host, snmp.priv_protocol = %profile.priv_protocol }, "invalid privacy protocol");
        ProfileErrorKind::BadPassword
    })
}
