//! Profile files.
//!
//! A profile file is TOML with one `[[profile]]` table per agent:
//!
//! ```toml
//! [[profile]]
//! host = "192.0.2.1"
//! community = "public"
//!
//! [[profile]]
//! host = "192.0.2.2"
//! version = "3"
//! security_level = "AuthNoPriv"
//! username = "monitor"
//! auth_protocol = "SHA"
//! auth_passphrase = "authpass123"
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::Profile;
use crate::error::{Error, Result};

/// Profiles loaded from one file, in file order.
#[derive(Debug, Default, Deserialize)]
pub struct ProfileSet {
    /// The `[[profile]]` entries.
    #[serde(default, rename = "profile")]
    pub profiles: Vec<Profile>,
}

impl ProfileSet {
    /// Parse a profile set from TOML text.
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text)
            .map_err(|e| Error::Config(format!("invalid profile file: {}", e).into()).boxed())
    }

    /// Read and parse a profile file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("could not read '{}': {}", path.display(), e).into()).boxed()
        })?;
        let set = Self::from_toml(&text)?;
        tracing::debug!(target: "snmp_profile::cli", { path = %path.display(), count = set.profiles.len() }, "loaded profile file");
        Ok(set)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_profiles() {
        let set = ProfileSet::from_toml(
            r#"
            [[profile]]
            host = "192.0.2.1"

            [[profile]]
            host = "192.0.2.2"
            version = "3"
            port = 1161
            timeout = 2
            retries = 1
            security_level = "AuthPriv"
            username = "monitor"
            auth_protocol = "MD5"
            auth_passphrase = "a"
            priv_protocol = "DES"
            priv_passphrase = "p"
            "#,
        )
        .unwrap();

        assert_eq!(set.profiles.len(), 2);
        assert_eq!(set.profiles[0].host, "192.0.2.1");
        assert_eq!(set.profiles[0].version, "2c");
        assert_eq!(set.profiles[0].community, "public");

        let v3 = &set.profiles[1];
        assert_eq!(v3.version, "3");
        assert_eq!(v3.port, 1161);
        assert_eq!(v3.timeout, 2);
        assert_eq!(v3.retries, 1);
        assert_eq!(v3.security_level, "AuthPriv");
        assert_eq!(v3.priv_passphrase, "p");
    }

    #[test]
    fn test_empty_file() {
        let set = ProfileSet::from_toml("").unwrap();
        assert!(set.profiles.is_empty());
    }

    #[test]
    fn test_malformed_file() {
        let err = ProfileSet::from_toml("[[profile]]\nport = \"not a number\"").unwrap_err();
        assert!(matches!(*err, Error::Config(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = ProfileSet::load(Path::new("/nonexistent/profiles.toml")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/profiles.toml"));
    }
}
