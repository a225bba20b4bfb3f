//! Connection options
//!
//! This module handles:
//! * The option record and its builder
//! * Transport kind
//! * TLS mode

mod options;
mod protocol;
mod tls;

pub use options::{ConnectionOptions, ConnectionOptionsBuilder};
pub use protocol::ConnectionProtocol;
pub use tls::SslMode;
