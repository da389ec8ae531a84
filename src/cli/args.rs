//! Command-line argument structures for the `snmp-profile` tool.

use clap::{Parser, ValueEnum};

use crate::Profile;

/// Output format for CLI tools.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable, one line per profile.
    #[default]
    Human,
    /// JSON lines, one object per profile.
    Json,
}

/// A single profile given on the command line.
///
/// Values are passed through as written so the tool reports the same
/// validation errors a configuration file would produce.
#[derive(Debug, Parser)]
pub struct ProfileArgs {
    /// Target host (omit when using --file).
    #[arg(value_name = "HOST")]
    pub host: Option<String>,

    /// SNMP version: 1, 2, 2c, or 3.
    #[arg(short = 'v', long = "snmp-version", default_value = "2c")]
    pub version: String,

    /// Community string (v1/v2c).
    #[arg(short = 'c', long = "community", default_value = "public")]
    pub community: String,

    /// Agent port (0 selects 161).
    #[arg(short = 'p', long = "port", default_value_t = 0)]
    pub port: u16,

    /// Timeout in seconds (0 selects the engine default).
    #[arg(short = 't', long = "timeout", default_value_t = 0)]
    pub timeout: u64,

    /// Retry count (0 selects the engine default).
    #[arg(short = 'r', long = "retries", default_value_t = 0)]
    pub retries: u32,

    /// Security level: NoAuthNoPriv, AuthNoPriv, or AuthPriv.
    #[arg(short = 'l', long = "level", default_value = "")]
    pub security_level: String,

    /// Security name/username.
    #[arg(short = 'u', long = "username", default_value = "")]
    pub username: String,

    /// Authentication protocol: NoAuth, MD5, or SHA.
    #[arg(short = 'a', long = "auth-protocol", default_value = "")]
    pub auth_protocol: String,

    /// Authentication passphrase.
    #[arg(short = 'A', long = "auth-password", default_value = "")]
    pub auth_passphrase: String,

    /// Privacy protocol: NoPriv, DES, or AES.
    #[arg(short = 'x', long = "priv-protocol", default_value = "")]
    pub priv_protocol: String,

    /// Privacy passphrase.
    #[arg(short = 'X', long = "priv-password", default_value = "")]
    pub priv_passphrase: String,
}

impl ProfileArgs {
    /// Build a profile from the arguments, if a host was given.
    pub fn profile(&self) -> Option<Profile> {
        let host = self.host.as_ref()?;
        Some(Profile {
            host: host.clone(),
            version: self.version.clone(),
            community: self.community.clone(),
            port: self.port,
            timeout: self.timeout,
            retries: self.retries,
            security_level: self.security_level.clone(),
            username: self.username.clone(),
            auth_passphrase: self.auth_passphrase.clone(),
            auth_protocol: self.auth_protocol.clone(),
            priv_protocol: self.priv_protocol.clone(),
            priv_passphrase: self.priv_passphrase.clone(),
        })
    }
}

/// Output control arguments.
#[derive(Debug, Parser)]
pub struct OutputArgs {
    /// Output format: human or json.
    #[arg(short = 'O', long = "output", default_value = "human")]
    pub format: OutputFormat,

    /// Enable debug logging (snmp_profile=debug).
    #[arg(short = 'd', long = "debug")]
    pub debug: bool,

    /// Enable trace logging (snmp_profile=trace).
    #[arg(short = 'D', long = "trace")]
    pub trace: bool,
}

impl OutputArgs {
    /// Log filter selected by the debug/trace flags.
    pub fn log_filter(&self) -> &'static str {
        if self.trace {
            "snmp_profile=trace"
        } else if self.debug {
            "snmp_profile=debug"
        } else {
            "snmp_profile=warn"
        }
    }

    /// Initialize tracing to stderr based on debug/trace flags.
    pub fn init_tracing(&self) {
        use tracing_subscriber::EnvFilter;

        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::new(self.log_filter()))
            .with_writer(std::io::stderr)
            .try_init();
    }
}
