//! Recording connector.
//!
//! Stands in for the protocol engine: records every config it is handed and
//! answers with queued outcomes, connecting successfully when the queue is
//! empty.

use snmp_profile::transport::Connector;
use snmp_profile::{ClientConfig, Error, Result};
use std::collections::VecDeque;
use std::io;
use std::sync::{Arc, Mutex};

/// Outcome of one connect attempt.
#[derive(Clone, Debug)]
pub enum Outcome {
    /// Succeed, returning the config as the session.
    Connected,
    /// Fail with a connection-refused network error.
    Refused(String),
    /// Fail with a timeout.
    Timeout,
}

#[derive(Default)]
struct Inner {
    outcomes: VecDeque<Outcome>,
    configs: Vec<ClientConfig>,
}

/// Connector that records configs instead of opening sockets.
#[derive(Clone, Default)]
pub struct RecordingConnector {
    inner: Arc<Mutex<Inner>>,
}

impl RecordingConnector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the outcome of the next connect attempt.
    pub fn queue(&self, outcome: Outcome) {
        self.inner.lock().unwrap().outcomes.push_back(outcome);
    }

    /// Configs received so far, in order.
    pub fn configs(&self) -> Vec<ClientConfig> {
        self.inner.lock().unwrap().configs.clone()
    }

    /// Number of connect attempts.
    pub fn calls(&self) -> usize {
        self.inner.lock().unwrap().configs.len()
    }
}

impl Connector for RecordingConnector {
    type Session = ClientConfig;

    async fn connect(&self, config: ClientConfig) -> Result<ClientConfig> {
        let outcome = {
            let mut inner = self.inner.lock().unwrap();
            inner.configs.push(config.clone());
            inner.outcomes.pop_front().unwrap_or(Outcome::Connected)
        };

        match outcome {
            Outcome::Connected => Ok(config),
            Outcome::Refused(msg) => Err(Error::Network {
                target: "192.0.2.10:161".parse().unwrap(),
                source: io::Error::new(io::ErrorKind::ConnectionRefused, msg),
            }
            .boxed()),
            Outcome::Timeout => Err(Error::Timeout {
                target: config.target().into(),
                elapsed: config.effective_timeout(),
            }
            .boxed()),
        }
    }
}
