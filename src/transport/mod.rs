//! Connector abstraction.
//!
//! Provides the [`Connector`] trait, the boundary between validated
//! configuration and the protocol engine, and a UDP implementation.

mod udp;

pub use udp::*;

use crate::client::ClientConfig;
use crate::error::Result;
use std::future::Future;

/// Opens a session to the agent described by a [`ClientConfig`].
///
/// Implementations own everything past validation: address resolution,
/// sockets, engine discovery, and their own timeout and cancellation. A
/// connect attempt is made once; retrying is the caller's decision.
///
/// # Example
///
/// A connector that only records what it was asked to do:
///
/// ```rust
/// use snmp_profile::{ClientConfig, Result, transport::Connector};
/// use std::sync::Mutex;
///
/// #[derive(Default)]
/// struct Recorder(Mutex<Vec<ClientConfig>>);
///
/// impl Connector for Recorder {
///     type Session = ClientConfig;
///
///     async fn connect(&self, config: ClientConfig) -> Result<ClientConfig> {
///         self.0.lock().unwrap().push(config.clone());
///         Ok(config)
///     }
/// }
/// ```
pub trait Connector: Send + Sync {
    /// Live session handle returned on success. Dropping it closes the
    /// session.
    type Session: Send;

    /// Attempt to connect using `config`.
    fn connect(&self, config: ClientConfig) -> impl Future<Output = Result<Self::Session>> + Send;
}
