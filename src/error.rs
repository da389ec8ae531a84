//! Error types for snmp-profile.
//!
//! This module provides:
//!
//! - [`Error`] - The main error type for building and connecting profiles
//! - [`ProfileErrorKind`] - The closed set of profile validation failures
//!
//! # Error Handling
//!
//! Errors are boxed for efficiency: `Result<T> = Result<T, Box<Error>>`.
//!
//! Validation failures are terminal: they describe a defect in the caller's
//! configuration and retrying with the same [`Profile`](crate::Profile) always
//! fails the same way. Transport failures from the final connect step are
//! surfaced as-is.
//!
//! ```rust
//! use snmp_profile::{ClientConfig, Error, Profile, ProfileErrorKind};
//!
//! let profile = Profile {
//!     host: "192.0.2.10".into(),
//!     version: "3".into(),
//!     security_level: "AuthNoPriv".into(),
//!     username: "admin".into(),
//!     ..Default::default()
//! };
//!
//! match ClientConfig::from_profile(&profile) {
//!     Ok(config) => println!("ready: {}:{}", config.host, config.port),
//!     Err(e) => match &*e {
//!         Error::InvalidProfile { host, kind } => {
//!             assert_eq!(*kind, ProfileErrorKind::BadPassword);
//!             println!("{}: {}", host, kind);
//!         }
//!         _ => println!("error: {}", e),
//!     },
//! }
//! ```

use std::net::SocketAddr;
use std::time::Duration;

/// Result type alias using the library's boxed Error type.
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Profile validation failures.
///
/// Each kind has a fixed meaning and is never used for transient conditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProfileErrorKind {
    /// v3 username missing.
    BadUser,
    /// v3 auth passphrase missing, or privacy protocol name unrecognized.
    ///
    /// The second use is historical; match on [`Privacy`](Self::Privacy) for
    /// the missing privacy passphrase case instead.
    BadPassword,
    /// v3 auth protocol name unrecognized.
    BadProtocol,
    /// v3 security level tag unrecognized.
    Level,
    /// v3 privacy passphrase missing.
    Privacy,
    /// Protocol version tag unrecognized.
    Version,
}

impl std::fmt::Display for ProfileErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BadUser => write!(f, "missing snmp v3 username"),
            Self::BadPassword => write!(f, "missing snmp v3 user password"),
            Self::BadProtocol => write!(f, "invalid snmp v3 auth protocol"),
            Self::Level => write!(f, "invalid snmp v3 security level"),
            Self::Privacy => write!(f, "missing snmp v3 privacy password"),
            Self::Version => write!(f, "invalid snmp version"),
        }
    }
}

impl std::error::Error for ProfileErrorKind {}

/// The main error type for all snmp-profile operations.
///
/// # Common Patterns
///
/// ```
/// use snmp_profile::{Error, ProfileErrorKind};
///
/// fn is_config_defect(error: &Error) -> bool {
///     matches!(error, Error::InvalidProfile { .. } | Error::Config(_))
/// }
///
/// fn is_missing_secret(error: &Error) -> bool {
///     matches!(
///         error.profile_error_kind(),
///         Some(ProfileErrorKind::BadPassword | ProfileErrorKind::Privacy)
///     )
/// }
/// ```
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// Profile failed validation before any I/O was attempted.
    #[error("invalid profile for {host}: {kind}")]
    InvalidProfile {
        host: Box<str>,
        kind: ProfileErrorKind,
    },

    /// Network failure while connecting (bind, connect, etc.)
    #[error("network error communicating with {target}: {source}")]
    Network {
        target: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    /// Connection attempt did not complete in time.
    #[error("timeout after {elapsed:?} connecting to {target}")]
    Timeout { target: Box<str>, elapsed: Duration },

    /// Invalid configuration outside the profile itself (address resolution,
    /// profile files).
    #[error("configuration error: {0}")]
    Config(Box<str>),
}

impl Error {
    /// Box this error (convenience for constructing boxed errors).
    pub fn boxed(self) -> Box<Self> {
        Box::new(self)
    }

    /// Create a validation error for `host`.
    pub fn invalid_profile(host: &str, kind: ProfileErrorKind) -> Box<Self> {
        Error::InvalidProfile {
            host: host.into(),
            kind,
        }
        .boxed()
    }

    /// The validation kind, if this is a profile validation error.
    pub fn profile_error_kind(&self) -> Option<ProfileErrorKind> {
        match self {
            Self::InvalidProfile { kind, .. } => Some(*kind),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_messages() {
        assert_eq!(
            ProfileErrorKind::BadUser.to_string(),
            "missing snmp v3 username"
        );
        assert_eq!(
            ProfileErrorKind::BadPassword.to_string(),
            "missing snmp v3 user password"
        );
        assert_eq!(
            ProfileErrorKind::BadProtocol.to_string(),
            "invalid snmp v3 auth protocol"
        );
        assert_eq!(
            ProfileErrorKind::Level.to_string(),
            "invalid snmp v3 security level"
        );
        assert_eq!(
            ProfileErrorKind::Privacy.to_string(),
            "missing snmp v3 privacy password"
        );
        assert_eq!(ProfileErrorKind::Version.to_string(), "invalid snmp version");
    }

    #[test]
    fn invalid_profile_display_includes_host() {
        let err = Error::invalid_profile("core-sw1", ProfileErrorKind::Level);
        assert_eq!(
            err.to_string(),
            "invalid profile for core-sw1: invalid snmp v3 security level"
        );
        assert_eq!(err.profile_error_kind(), Some(ProfileErrorKind::Level));
    }

    #[test]
    fn transport_errors_have_no_profile_kind() {
        let err = Error::Config("could not resolve address 'nowhere:161'".into()).boxed();
        assert_eq!(err.profile_error_kind(), None);
    }

    #[test]
    fn error_size_budget() {
        // Result<(), Box<Error>> should be pointer-sized (8 bytes on 64-bit).
        assert_eq!(
            std::mem::size_of::<Result<()>>(),
            std::mem::size_of::<*const ()>(),
            "Result<()> should be pointer-sized"
        );
    }
}
