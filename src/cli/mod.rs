//! Support code for the `snmp-profile` command-line tool.

pub mod args;
pub mod fleet;
pub mod report;
