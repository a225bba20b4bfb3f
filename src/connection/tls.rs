//! Transport security mode for MySQL connections.

use crate::Error;
use serde::{Deserialize, Serialize};

/// SSL/TLS mode matching the MySQL client `SslMode` option.
///
/// Controls whether and how TLS is negotiated with the server.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SslMode {
    /// No TLS (plaintext connection)
    #[default]
    None,
    /// TLS used when the server supports it
    Preferred,
    /// TLS required, server certificate is not verified
    Required,
    /// TLS required, server certificate must be signed by a trusted CA
    #[serde(rename = "VerifyCA")]
    VerifyCa,
    /// TLS required, server certificate must be signed by a trusted CA and hostname must match
    VerifyFull,
}

impl SslMode {
    /// All members, in declaration order
    pub const ALL: [SslMode; 5] = [
        Self::None,
        Self::Preferred,
        Self::Required,
        Self::VerifyCa,
        Self::VerifyFull,
    ];

    /// Token written to the connection string, `None` for the default mode.
    pub fn token(&self) -> Option<&'static str> {
        match self {
            Self::None => None,
            Self::Preferred => Some("Preferred"),
            Self::Required => Some("Required"),
            Self::VerifyCa => Some("VerifyCA"),
            Self::VerifyFull => Some("VerifyFull"),
        }
    }

    /// Token as written by the historical builder.
    ///
    /// Identical to [`token`](Self::token) except for `VerifyFull`, which
    /// carried a trailing space.
    pub fn legacy_token(&self) -> Option<&'static str> {
        match self {
            Self::VerifyFull => Some("VerifyFull "),
            other => other.token(),
        }
    }

    /// Whether this mode requires certificate verification (CA or full)
    pub fn requires_verification(&self) -> bool {
        matches!(self, Self::VerifyCa | Self::VerifyFull)
    }
}

impl std::fmt::Display for SslMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::None => write!(f, "None"),
            Self::Preferred => write!(f, "Preferred"),
            Self::Required => write!(f, "Required"),
            Self::VerifyCa => write!(f, "VerifyCA"),
            Self::VerifyFull => write!(f, "VerifyFull"),
        }
    }
}

impl std::str::FromStr for SslMode {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "none" => Ok(Self::None),
            "preferred" => Ok(Self::Preferred),
            "required" => Ok(Self::Required),
            "verifyca" => Ok(Self::VerifyCa),
            "verifyfull" => Ok(Self::VerifyFull),
            _ => Err(Error::Config(format!(
                "invalid sslmode '{}': expected None, Preferred, Required, VerifyCA, or VerifyFull",
                s
            ))),
        }
    }
}
