//! Connection transport kind

use crate::Error;
use serde::{Deserialize, Serialize};

/// Transport used by the MySQL client to reach the server.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectionProtocol {
    /// Client library picks the socket transport
    #[default]
    Socket,
    /// TCP/IP socket
    Tcp,
    /// Windows named pipe
    Pipe,
    /// Unix domain socket
    Unix,
    /// Shared memory
    Memory,
}

impl ConnectionProtocol {
    /// All members, in declaration order
    pub const ALL: [ConnectionProtocol; 5] = [
        Self::Socket,
        Self::Tcp,
        Self::Pipe,
        Self::Unix,
        Self::Memory,
    ];

    /// Token written to the connection string, `None` for the default transport.
    pub fn token(&self) -> Option<&'static str> {
        match self {
            Self::Socket => None,
            Self::Tcp => Some("tcp"),
            Self::Pipe => Some("pipe"),
            Self::Unix => Some("unix"),
            Self::Memory => Some("memory"),
        }
    }
}

impl std::fmt::Display for ConnectionProtocol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Socket => write!(f, "socket"),
            Self::Tcp => write!(f, "tcp"),
            Self::Pipe => write!(f, "pipe"),
            Self::Unix => write!(f, "unix"),
            Self::Memory => write!(f, "memory"),
        }
    }
}

impl std::str::FromStr for ConnectionProtocol {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "socket" => Ok(Self::Socket),
            "tcp" => Ok(Self::Tcp),
            "pipe" => Ok(Self::Pipe),
            "unix" => Ok(Self::Unix),
            "memory" => Ok(Self::Memory),
            _ => Err(Error::Config(format!(
                "invalid connection protocol '{}': expected socket, tcp, pipe, unix, or memory",
                s
            ))),
        }
    }
}
