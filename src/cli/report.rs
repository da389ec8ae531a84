//! Per-profile check results.

use std::net::SocketAddr;

use serde::Serialize;

use crate::cli::args::OutputFormat;
use crate::client::ClientConfig;
use crate::error::Error;
use crate::profile::Profile;
use crate::transport::{Connector, UdpConnector};

/// Outcome of checking one profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    /// Profile validated; no connection attempted.
    Valid,
    /// Profile validated and the connector succeeded.
    Connected,
    /// Profile failed validation.
    Invalid,
    /// Profile validated but the connector failed.
    Unreachable,
}

/// Summary of one profile check. Never contains secrets.
#[derive(Debug, Clone, Serialize)]
pub struct ProfileReport {
    /// Host as written in the profile
    pub host: String,
    /// Check outcome
    pub status: Status,
    /// Resolved `host:port` target
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    /// Effective SNMP version
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// v3 security level
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security_level: Option<String>,
    /// v3 user name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// v3 authentication protocol
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth_protocol: Option<String>,
    /// v3 privacy protocol
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priv_protocol: Option<String>,
    /// Local socket address after `--connect`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub local_addr: Option<String>,
    /// Validation or transport error message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ProfileReport {
    fn valid(config: &ClientConfig) -> Self {
        let params = config.security_parameters();
        Self {
            host: config.host.clone(),
            status: Status::Valid,
            target: Some(config.target()),
            version: Some(config.version.to_string()),
            security_level: params.map(|p| p.security_level().to_string()),
            username: params.map(|p| p.username.clone()),
            auth_protocol: params.map(|p| p.auth_protocol.to_string()),
            priv_protocol: params.map(|p| p.priv_protocol.to_string()),
            local_addr: None,
            error: None,
        }
    }

    fn connected(config: &ClientConfig, local_addr: SocketAddr) -> Self {
        Self {
            status: Status::Connected,
            local_addr: Some(local_addr.to_string()),
            ..Self::valid(config)
        }
    }

    fn unreachable(config: &ClientConfig, error: &Error) -> Self {
        Self {
            status: Status::Unreachable,
            error: Some(error.to_string()),
            ..Self::valid(config)
        }
    }

    fn invalid(profile: &Profile, error: &Error) -> Self {
        Self {
            host: profile.host.clone(),
            status: Status::Invalid,
            target: None,
            version: None,
            security_level: None,
            username: None,
            auth_protocol: None,
            priv_protocol: None,
            local_addr: None,
            error: Some(
                error
                    .profile_error_kind()
                    .map(|kind| kind.to_string())
                    .unwrap_or_else(|| error.to_string()),
            ),
        }
    }

    /// Whether the check failed.
    pub fn is_failure(&self) -> bool {
        matches!(self.status, Status::Invalid | Status::Unreachable)
    }

    /// Render as one line in the given format.
    pub fn render(&self, format: OutputFormat) -> String {
        match format {
            OutputFormat::Json => match serde_json::to_string(self) {
                Ok(line) => line,
                Err(e) => {
                    tracing::error!(target: "snmp_profile::cli", { snmp.host = %self.host, error = %e }, "could not encode report as JSON");
                    self.render_human()
                }
            },
            OutputFormat::Human => self.render_human(),
        }
    }

    fn render_human(&self) -> String {
        let status = match self.status {
            Status::Valid => "OK",
            Status::Connected => "CONNECTED",
            Status::Invalid => "INVALID",
            Status::Unreachable => "UNREACHABLE",
        };
        let mut line = format!("{}\t{}", self.host, status);
        if let Some(version) = &self.version {
            line.push_str(&format!("\tv{}", version));
        }
        if let Some(level) = &self.security_level {
            line.push_str(&format!(" {}", level));
        }
        if let Some(user) = &self.username {
            line.push_str(&format!(" user={}", user));
        }
        if let (Some(auth), Some(privacy)) = (&self.auth_protocol, &self.priv_protocol) {
            line.push_str(&format!(" auth={} priv={}", auth, privacy));
        }
        if let Some(target) = &self.target {
            line.push_str(&format!(" target={}", target));
        }
        if let Some(local) = &self.local_addr {
            line.push_str(&format!(" local={}", local));
        }
        if let Some(error) = &self.error {
            line.push_str(&format!("\t{}", error));
        }
        line
    }
}

/// Validate `profile` and, if `connect` is set, open a UDP session to it.
pub async fn check_profile(profile: &Profile, connect: bool) -> ProfileReport {
    let config = match ClientConfig::from_profile(profile) {
        Ok(config) => config,
        Err(e) => return ProfileReport::invalid(profile, &e),
    };

    if !connect {
        return ProfileReport::valid(&config);
    }

    match UdpConnector.connect(config.clone()).await {
        Ok(session) => ProfileReport::connected(&config, session.local_addr()),
        Err(e) => ProfileReport::unreachable(&config, &e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_valid_v3_report() {
        let profile = Profile::usm("192.0.2.1", "AuthPriv", "monitor")
            .auth("SHA", "authpass")
            .privacy("AES", "privpass");
        let report = check_profile(&profile, false).await;

        assert_eq!(report.status, Status::Valid);
        assert!(!report.is_failure());
        assert_eq!(report.target.as_deref(), Some("192.0.2.1:161"));
        assert_eq!(report.security_level.as_deref(), Some("AuthPriv"));
        assert_eq!(
            report.render(OutputFormat::Human),
            "192.0.2.1\tOK\tv3 AuthPriv user=monitor auth=SHA priv=AES target=192.0.2.1:161"
        );

        let json = report.render(OutputFormat::Json);
        assert!(json.contains("\"status\":\"valid\""));
        assert!(!json.contains("authpass"));
        assert!(!json.contains("privpass"));
        assert!(!json.contains("local_addr"));
    }

    #[tokio::test]
    async fn test_invalid_report() {
        let profile = Profile::usm("192.0.2.9", "AuthNoPriv", "");
        let report = check_profile(&profile, true).await;

        assert_eq!(report.status, Status::Invalid);
        assert!(report.is_failure());
        assert_eq!(report.error.as_deref(), Some("missing snmp v3 username"));
        assert_eq!(
            report.render(OutputFormat::Human),
            "192.0.2.9\tINVALID\tmissing snmp v3 username"
        );
    }

    #[tokio::test]
    async fn test_community_report_has_no_secret() {
        let profile = Profile::community("192.0.2.3", "1", "topsecret");
        let report = check_profile(&profile, false).await;
        let json = report.render(OutputFormat::Json);
        assert!(json.contains("\"version\":\"1\""));
        assert!(!json.contains("topsecret"));
        assert!(report.username.is_none());
    }

    #[tokio::test]
    async fn test_json_render_is_one_object() {
        let profile = Profile::usm("192.0.2.4", "Paranoid", "monitor");
        let report = check_profile(&profile, false).await;
        let line = report.render(OutputFormat::Json);

        assert!(!line.is_empty());
        assert!(!line.contains('\n'));
        let value: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(value["host"], "192.0.2.4");
        assert_eq!(value["status"], "invalid");
        assert_eq!(value["error"], "invalid snmp v3 security level");
    }

    #[tokio::test]
    async fn test_connected_report() {
        let profile = Profile::community("127.0.0.1", "2c", "public").port(16161);
        let report = check_profile(&profile, true).await;
        assert_eq!(report.status, Status::Connected);
        assert!(report.local_addr.is_some());
    }
}
