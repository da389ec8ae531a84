//! UDP connector implementation.

use super::Connector;
use crate::client::ClientConfig;
use crate::error::{Error, Result};
use crate::util::bind_ephemeral_udp_socket;
use std::net::SocketAddr;
use tokio::net::{UdpSocket, lookup_host};
use tokio::time::timeout;

/// Connector that opens a connected UDP socket to the agent.
///
/// Resolution, bind and connect together are bounded by the config's
/// [`effective_timeout`](ClientConfig::effective_timeout). No SNMP traffic
/// is sent; the returned [`UdpSession`] is ready for a protocol engine.
#[derive(Debug, Clone, Copy, Default)]
pub struct UdpConnector;

/// A UDP socket connected to one agent, plus the config it was opened with.
///
/// Dropping the session closes the socket.
#[derive(Debug)]
pub struct UdpSession {
    socket: UdpSocket,
    config: ClientConfig,
    peer_addr: SocketAddr,
    local_addr: SocketAddr,
}

impl UdpSession {
    /// The connected socket.
    pub fn socket(&self) -> &UdpSocket {
        &self.socket
    }

    /// The configuration this session was opened with.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// The resolved agent address.
    pub fn peer_addr(&self) -> SocketAddr {
        self.peer_addr
    }

    /// Local bind address.
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Split into socket and config.
    pub fn into_parts(self) -> (UdpSocket, ClientConfig) {
        (self.socket, self.config)
    }
}

impl Connector for UdpConnector {
    type Session = UdpSession;

    async fn connect(&self, config: ClientConfig) -> Result<UdpSession> {
        let target = config.target();
        let limit = config.effective_timeout();

        tracing::debug!(target: "snmp_profile::connector", { snmp.target = %target, snmp.version = %config.version, snmp.timeout_ms = limit.as_millis() as u64 }, "connecting UDP transport");

        let (socket, peer_addr, local_addr) = match timeout(limit, open(&target)).await {
            Ok(result) => result?,
            Err(_) => {
                tracing::debug!(target: "snmp_profile::connector", { snmp.target = %target }, "connect timed out");
                return Err(Error::Timeout {
                    target: target.into(),
                    elapsed: limit,
                }
                .boxed());
            }
        };

        tracing::debug!(
            target: "snmp_profile::connector",
            { snmp.target = %peer_addr, snmp.local_addr = %local_addr },
            "UDP transport connected"
        );

        Ok(UdpSession {
            socket,
            config,
            peer_addr,
            local_addr,
        })
    }
}

/// Resolve, bind and connect.
async fn open(target: &str) -> Result<(UdpSocket, SocketAddr, SocketAddr)> {
    let peer_addr = lookup_host(target)
        .await
        .map_err(|e| {
            Error::Config(format!("could not resolve address '{}': {}", target, e).into()).boxed()
        })?
        .next()
        .ok_or_else(|| {
            Error::Config(format!("could not resolve address '{}'", target).into()).boxed()
        })?;

    tracing::trace!(target: "snmp_profile::connector", { snmp.target = %target, snmp.peer = %peer_addr }, "resolved target");

    let io_err = |source| {
        Error::Network {
            target: peer_addr,
            source,
        }
        .boxed()
    };

    let socket = bind_ephemeral_udp_socket(peer_addr).map_err(io_err)?;
    socket.connect(peer_addr).await.map_err(io_err)?;
    let local_addr = socket.local_addr().map_err(io_err)?;

    Ok((socket, peer_addr, local_addr))
}
