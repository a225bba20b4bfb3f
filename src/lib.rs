//! sqlbuilder-mysql: typed MySQL connection options
//!
//! Holds every option understood by the MySQL client library in a plain
//! [`ConnectionOptions`] record and renders it as the `Key=Value;Key=Value`
//! connection string the client expects. Options left at their library default
//! are omitted, so a default record renders as an empty string.
//!
//! ```
//! use sqlbuilder_mysql::{ConnectionOptions, ConnectionProtocol, SslMode};
//!
//! let options = ConnectionOptions::builder()
//!     .host("db.internal")
//!     .database("orders")
//!     .username("app")
//!     .connection_protocol(ConnectionProtocol::Tcp)
//!     .ssl_mode(SslMode::Required)
//!     .build();
//!
//! assert_eq!(
//!     options.to_string(),
//!     "Host=db.internal;Database=orders;ConnectionProtocol=tcp;SslMode=Required;Username=app"
//! );
//! ```

#![warn(missing_docs)]

pub mod connection;
pub mod descriptor;
pub mod error;
pub mod metrics;
pub mod query;

pub use connection::{ConnectionOptions, ConnectionOptionsBuilder, ConnectionProtocol, SslMode};
pub use descriptor::{encode_descriptor, encode_descriptor_with, Compatibility, Fragment};
pub use error::{Error, Result};
pub use query::{Connector, Operator, OrderDirection};
