//! SNMP protocol version.

/// Well-known SNMP agent port.
pub const DEFAULT_PORT: u16 = 161;

/// SNMP protocol generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Version {
    /// SNMPv1 (community-based)
    V1,
    /// SNMPv2c (community-based)
    V2c,
    /// SNMPv3 (user-based security)
    V3,
}

impl Version {
    /// Parse a profile version tag.
    ///
    /// Accepts `"1"`, `"2"`, `"2c"` and `"3"`. Both `"2"` and `"2c"` select
    /// SNMPv2c. Matching is exact.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "1" => Some(Self::V1),
            "2" | "2c" => Some(Self::V2c),
            "3" => Some(Self::V3),
            _ => None,
        }
    }

    /// Value carried in the msgVersion field on the wire.
    pub fn as_i32(self) -> i32 {
        match self {
            Self::V1 => 0,
            Self::V2c => 1,
            Self::V3 => 3,
        }
    }
}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::V1 => write!(f, "1"),
            Self::V2c => write!(f, "2c"),
            Self::V3 => write!(f, "3"),
        }
    }
}
