//! Profile fixtures.

use snmp_profile::Profile;

pub const HOST: &str = "192.0.2.10";
pub const COMMUNITY: &str = "public";
pub const USER: &str = "monitor";
pub const AUTH_PASS: &str = "authpassword123";
pub const PRIV_PASS: &str = "privpassword123";

pub fn v2c() -> Profile {
    Profile::community(HOST, "2c", COMMUNITY)
}

pub fn no_auth() -> Profile {
    Profile::usm(HOST, "NoAuthNoPriv", USER)
}

pub fn auth_no_priv() -> Profile {
    Profile::usm(HOST, "AuthNoPriv", USER).auth("SHA", AUTH_PASS)
}

pub fn auth_priv() -> Profile {
    Profile::usm(HOST, "AuthPriv", USER)
        .auth("SHA", AUTH_PASS)
        .privacy("AES", PRIV_PASS)
}
