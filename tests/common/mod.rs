//! Shared test infrastructure for snmp-profile.
//!
//! Provides a recording connector and profile fixtures.

// Allow dead code since not all test files use all utilities
#![allow(dead_code)]

pub mod connector;
pub mod fixtures;

pub use connector::{Outcome, RecordingConnector};
pub use fixtures::{
    AUTH_PASS, COMMUNITY, HOST, PRIV_PASS, USER, auth_no_priv, auth_priv, no_auth, v2c,
};
