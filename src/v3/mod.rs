//! SNMPv3 security configuration.
//!
//! This module derives the User-based Security Model (USM, RFC 3414)
//! parameters a protocol engine needs from a [`Profile`](crate::Profile):
//!
//! - Named authentication and privacy protocol tables
//! - Security levels and msgFlags (RFC 3412 Section 6.4)
//! - The security-level decision logic producing [`SecurityParameters`]
//!
//! Key localization, HMAC computation and encryption are left to the engine.

mod security;
mod usm;

pub use security::{MsgFlags, SecurityLevel, SecurityModel};
pub use usm::{SecurityParameters, security_parameters};

/// Authentication protocols accepted in a profile, by name.
///
/// Names are matched exactly; `"md5"` is not `"MD5"`.
static AUTH_PROTOCOLS: [(&str, AuthProtocol); 3] = [
    ("NoAuth", AuthProtocol::NoAuth),
    ("MD5", AuthProtocol::Md5),
    ("SHA", AuthProtocol::Sha),
];

/// Privacy protocols accepted in a profile, by name.
static PRIV_PROTOCOLS: [(&str, PrivProtocol); 3] = [
    ("NoPriv", PrivProtocol::NoPriv),
    ("DES", PrivProtocol::Des),
    ("AES", PrivProtocol::Aes),
];

/// Authentication protocol identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AuthProtocol {
    /// No authentication (noAuthNoPriv)
    NoAuth,
    /// HMAC-MD5-96 (RFC 3414)
    Md5,
    /// HMAC-SHA-96 (RFC 3414)
    Sha,
}

impl AuthProtocol {
    /// Resolve a profile protocol name (`"NoAuth"`, `"MD5"`, `"SHA"`).
    pub fn from_name(name: &str) -> Option<Self> {
        AUTH_PROTOCOLS
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, p)| *p)
    }

    /// Canonical profile name of this protocol.
    pub fn name(self) -> &'static str {
        AUTH_PROTOCOLS
            .iter()
            .find(|(_, p)| *p == self)
            .map(|(n, _)| *n)
            .unwrap_or("NoAuth")
    }
}

impl std::fmt::Display for AuthProtocol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Privacy protocol identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PrivProtocol {
    /// No encryption
    NoPriv,
    /// DES-CBC (RFC 3414)
    Des,
    /// AES-128-CFB (RFC 3826)
    Aes,
}

impl PrivProtocol {
    /// Resolve a profile protocol name (`"NoPriv"`, `"DES"`, `"AES"`).
    pub fn from_name(name: &str) -> Option<Self> {
        PRIV_PROTOCOLS
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, p)| *p)
    }

    /// Canonical profile name of this protocol.
    pub fn name(self) -> &'static str {
        PRIV_PROTOCOLS
            .iter()
            .find(|(_, p)| *p == self)
            .map(|(n, _)| *n)
            .unwrap_or("NoPriv")
    }
}

impl std::fmt::Display for PrivProtocol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
