//! Connector handoff tests using a recording connector.

mod common;

use common::{Outcome, RecordingConnector, auth_no_priv, auth_priv, no_auth, v2c};
use snmp_profile::{ClientConfig, Error, Profile, ProfileErrorKind, client};
use std::io;
use std::time::Duration;

/// A valid profile reaches the connector exactly once with the built config.
#[tokio::test]
async fn valid_profile_is_handed_off() {
    let connector = RecordingConnector::new();
    let profile = auth_priv();

    let session = client::connect(&profile, &connector).await.unwrap();

    assert_eq!(connector.calls(), 1);
    assert_eq!(session, ClientConfig::from_profile(&profile).unwrap());
    assert_eq!(connector.configs()[0], session);
}

/// Validation errors are returned without invoking the connector.
#[tokio::test]
async fn invalid_profiles_never_reach_connector() {
    let connector = RecordingConnector::new();

    let mut bad_version = v2c();
    bad_version.version = "5".into();

    let mut bad_user = auth_priv();
    bad_user.username.clear();

    let mut bad_level = auth_priv();
    bad_level.security_level = "Paranoid".into();

    let mut bad_password = auth_no_priv();
    bad_password.auth_passphrase.clear();

    let mut bad_protocol = auth_no_priv();
    bad_protocol.auth_protocol = "SHA-256".into();

    let mut bad_privacy = auth_priv();
    bad_privacy.priv_passphrase.clear();

    let cases = [
        (bad_version, ProfileErrorKind::Version),
        (bad_user, ProfileErrorKind::BadUser),
        (bad_level, ProfileErrorKind::Level),
        (bad_password, ProfileErrorKind::BadPassword),
        (bad_protocol, ProfileErrorKind::BadProtocol),
        (bad_privacy, ProfileErrorKind::Privacy),
    ];

    for (profile, expected) in cases {
        let err = client::connect(&profile, &connector).await.unwrap_err();
        assert_eq!(err.profile_error_kind(), Some(expected), "{:?}", profile);
    }

    assert_eq!(connector.calls(), 0);
}

/// Transport failures come back as-is and are not retried.
#[tokio::test]
async fn network_error_is_surfaced_verbatim() {
    let connector = RecordingConnector::new();
    connector.queue(Outcome::Refused("agent said no".into()));

    let err = client::connect(&v2c(), &connector).await.unwrap_err();

    match *err {
        Error::Network { ref source, .. } => {
            assert_eq!(source.kind(), io::ErrorKind::ConnectionRefused);
            assert_eq!(source.to_string(), "agent said no");
        }
        ref other => panic!("expected network error, got {}", other),
    }
    assert_eq!(connector.calls(), 1);
}

#[tokio::test]
async fn timeout_is_surfaced_verbatim() {
    let connector = RecordingConnector::new();
    connector.queue(Outcome::Timeout);

    let profile = no_auth().timing(3, 2);
    let err = client::connect(&profile, &connector).await.unwrap_err();

    match *err {
        Error::Timeout { ref target, elapsed } => {
            assert_eq!(&**target, "192.0.2.10:161");
            assert_eq!(elapsed, Duration::from_secs(3));
        }
        ref other => panic!("expected timeout, got {}", other),
    }
    assert_eq!(connector.calls(), 1);
}

/// Building twice from the same profile yields equal configs.
#[tokio::test]
async fn repeated_connects_are_idempotent() {
    let connector = RecordingConnector::new();

    for profile in [v2c(), no_auth(), auth_no_priv(), auth_priv()] {
        let first = client::connect(&profile, &connector).await.unwrap();
        let second = client::connect(&profile, &connector).await.unwrap();
        assert_eq!(first, second);
    }

    assert_eq!(connector.calls(), 8);
}

/// Concurrent builds for different hosts do not interfere.
#[tokio::test]
async fn concurrent_connects_are_independent() {
    let connector = RecordingConnector::new();
    let a = Profile::community("192.0.2.1", "1", "alpha");
    let b = Profile::usm("192.0.2.2", "AuthNoPriv", "beta").auth("MD5", "secret");

    let (ra, rb) = tokio::join!(
        client::connect(&a, &connector),
        client::connect(&b, &connector)
    );

    let ra = ra.unwrap();
    let rb = rb.unwrap();
    assert_eq!(ra.host, "192.0.2.1");
    assert_eq!(ra.community(), Some(&b"alpha"[..]));
    assert_eq!(rb.host, "192.0.2.2");
    assert_eq!(rb.security_parameters().unwrap().username, "beta");
    assert_eq!(connector.calls(), 2);
}
