//! # snmp-profile
//!
//! Validated SNMP connection profiles for v1, v2c and v3.
//!
//! A [`Profile`] is the flat record an operator writes down for one agent:
//! host, version, community, and for SNMPv3 a security level, user name,
//! passphrases and named algorithms. This crate turns it into a
//! [`ClientConfig`] whose credentials match the requested security level
//! exactly, or rejects it with a [`ProfileErrorKind`] before any I/O.
//!
//! Packet encoding, key localization and the crypto primitives belong to the
//! protocol engine behind a [`Connector`](transport::Connector).
//!
//! ## Features
//!
//! - Deterministic USM security-level decision (noAuthNoPriv, authNoPriv,
//!   authPriv)
//! - Closed, exact-match auth/privacy protocol tables
//! - Structured diagnostics through `tracing`, silent unless a subscriber is
//!   installed
//! - Optional `serde` support for loading profiles from configuration
//!
//! ## Quick Start
//!
//! ```rust
//! use snmp_profile::{ClientConfig, Profile, v3::SecurityLevel};
//!
//! let profile = Profile::usm("192.0.2.1", "AuthPriv", "monitor")
//!     .auth("SHA", "authpass123")
//!     .privacy("AES", "privpass123");
//!
//! let config = ClientConfig::from_profile(&profile)?;
//! assert_eq!(config.port, 161);
//! assert_eq!(
//!     config.security_parameters().unwrap().security_level(),
//!     SecurityLevel::AuthPriv
//! );
//! # Ok::<(), Box<snmp_profile::Error>>(())
//! ```
//!
//! ## Connecting
//!
//! ```rust,no_run
//! use snmp_profile::{Profile, client, transport::UdpConnector};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<snmp_profile::Error>> {
//!     let profile = Profile::community("192.0.2.1", "2c", "public");
//!     let session = client::connect(&profile, &UdpConnector).await?;
//!     println!("local socket {}", session.local_addr());
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod error;
pub mod profile;
pub mod transport;
pub mod v3;
pub mod version;

pub(crate) mod util;

#[cfg(feature = "cli")]
pub mod cli;

// Re-exports for convenience
pub use client::{Auth, ClientConfig, DEFAULT_TIMEOUT};
pub use error::{Error, ProfileErrorKind, Result};
pub use profile::Profile;
pub use v3::{
    AuthProtocol, MsgFlags, PrivProtocol, SecurityLevel, SecurityModel, SecurityParameters,
};
pub use version::{DEFAULT_PORT, Version};
