//! MySQL connection option record and its builder

use super::protocol::ConnectionProtocol;
use super::tls::SslMode;
use crate::descriptor::rules::OPTIONS;
use crate::descriptor::{write_descriptor, Compatibility};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Every option understood by the MySQL client library.
///
/// Fields are public and accept any value; nothing is validated when a field
/// is assigned. `Default` yields the client library defaults, which render as
/// an empty connection string. Field order is the order in which options are
/// written by [`encode_descriptor`](crate::encode_descriptor).
///
/// # Examples
///
/// ```
/// use sqlbuilder_mysql::ConnectionOptions;
///
/// let mut options = ConnectionOptions::default();
/// options.host = "db.internal".into();
/// options.connection_timeout = 42;
/// assert_eq!(options.to_string(), "ConnectionTimeout=42;Host=db.internal");
/// ```
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConnectionOptions {
    /// Allow multiple statements in one command execution (default: true)
    pub allow_batch: bool,
    /// Provider expects user variables in SQL
    pub allow_user_variables: bool,
    /// Return MySQL date objects for disallowed date values such as zero dates
    pub allow_zero_date_time: bool,
    /// Enlist in an ambient transaction scope (default: true)
    pub auto_enlist: bool,
    /// Regex matching BLOB columns that do not hold UTF-8 data
    pub blob_as_utf8_exclude_pattern: String,
    /// Regex matching BLOB columns holding UTF-8 data
    pub blob_as_utf8_include_pattern: String,
    /// Path to a PKCS #12 client certificate
    pub certificate_file: String,
    /// Password for `certificate_file`
    pub certificate_password: String,
    /// Certificate store holding the client certificate
    pub certificate_store_location: String,
    /// Thumbprint identifying the certificate within its store
    pub certificate_thumbprint: String,
    /// Character set used to encode queries
    pub character_set: String,
    /// Check stored routine parameters against the server (default: true)
    pub check_parameters: bool,
    /// Interceptors for SQL command operations
    pub command_interceptors: String,
    /// Seconds to wait while connecting (default: 15)
    pub connection_timeout: u32,
    /// Application-defined connection attributes sent to the server
    pub connect_attrs: String,
    /// Return the minimum date for disallowed date values
    pub convert_zero_date_time: bool,
    /// Default command timeout in seconds (default: 30)
    pub default_command_timeout: u32,
    /// Seconds a TableDirect result stays cached (default: 60)
    pub default_table_cache_age: u32,
    /// Raise the session end event before expired session data is deleted
    pub enable_session_expire_callback: bool,
    /// Encrypt traffic when the server has a certificate installed
    pub use_ssl: bool,
    /// Interceptors for thrown server exceptions
    pub exception_interceptors: String,
    /// Return binary values as strings when they have no table name
    pub functions_return_string: bool,
    /// Server host name, address, or socket path (default: `localhost`)
    pub host: String,
    /// Ignore client-side prepare calls (default: true)
    pub ignore_prepare: bool,
    /// Required for partial trust environments
    pub include_security_asserts: bool,
    /// Initial database (default: `mysql`)
    pub database: String,
    /// Mark the client as interactive
    pub interactive_session: bool,
    /// Use Windows authentication
    pub integrated_security: bool,
    /// Idle seconds before the first TCP keepalive packet, 0 disables keepalive
    pub keep_alive: u32,
    /// Output diagnostic information to trace listeners
    pub logging: bool,
    /// Store GUIDs as `BINARY(16)`
    pub old_guids: bool,
    /// Accept the deprecated parameter marker syntax
    pub use_old_syntax: bool,
    /// Account password
    pub password: String,
    /// Return security-sensitive values as part of the open connection
    pub persist_security_info: bool,
    /// Named pipe to connect through (default: `mysql`)
    pub pipe_name: String,
    /// Server port (default: 3306)
    pub port: u32,
    /// Number of cached stored procedure definitions (default: 25)
    pub procedure_cache_size: u32,
    /// Transport used to reach the server
    pub connection_protocol: ConnectionProtocol,
    /// Connect to replicated servers
    pub replication: bool,
    /// Honor column binary flags set by the server (default: true)
    pub respect_binary_flags: bool,
    /// Shared memory object name (default: `MYSQL`)
    pub shared_memory_name: String,
    /// Accept square-bracket quoted identifiers
    pub sql_server_mode: bool,
    /// SSL/TLS mode
    pub ssl_mode: SslMode,
    /// Cache TableDirect commands
    pub table_caching: bool,
    /// Treat BLOB columns as UTF-8 text
    pub treat_blobs_as_utf8: bool,
    /// Treat `TINYINT(1)` as boolean (default: true)
    pub treat_tiny_as_boolean: bool,
    /// Report changed rows instead of found rows
    pub use_affected_rows: bool,
    /// Read procedure bodies to resolve parameters (default: true)
    pub use_procedure_bodies: bool,
    /// Account name
    pub username: String,
    /// Compress packets exchanged with the server
    pub use_compression: bool,
    /// Log inefficient database operations
    pub use_usage_advisor: bool,
    /// Update performance counters during execution
    pub use_performance_monitor: bool,
    /// Skip refreshing server variables when a pooled connection is returned
    pub cache_server_properties: bool,
    /// Seconds a pooled connection may live, 0 for no limit
    pub connection_lifetime: u32,
    /// Reset connection state when taken from the pool
    pub connection_reset: bool,
    /// Maximum pooled connections (default: 100)
    pub maximum_pool_size: u32,
    /// Minimum pooled connections
    pub minimum_pool_size: u32,
    /// Draw connections from a pool (default: true)
    pub pooling: bool,
}

impl Default for ConnectionOptions {
    fn default() -> Self {
        Self {
            allow_batch: true,
            allow_user_variables: false,
            allow_zero_date_time: false,
            auto_enlist: true,
            blob_as_utf8_exclude_pattern: String::new(),
            blob_as_utf8_include_pattern: String::new(),
            certificate_file: String::new(),
            certificate_password: String::new(),
            certificate_store_location: String::new(),
            certificate_thumbprint: String::new(),
            character_set: String::new(),
            check_parameters: true,
            command_interceptors: String::new(),
            connection_timeout: 15,
            connect_attrs: String::new(),
            convert_zero_date_time: false,
            default_command_timeout: 30,
            default_table_cache_age: 60,
            enable_session_expire_callback: false,
            use_ssl: false,
            exception_interceptors: String::new(),
            functions_return_string: false,
            host: String::new(),
            ignore_prepare: true,
            include_security_asserts: false,
            database: String::new(),
            interactive_session: false,
            integrated_security: false,
            keep_alive: 0,
            logging: false,
            old_guids: false,
            use_old_syntax: false,
            password: String::new(),
            persist_security_info: false,
            pipe_name: String::new(),
            port: 3306,
            procedure_cache_size: 25,
            connection_protocol: ConnectionProtocol::default(),
            replication: false,
            respect_binary_flags: true,
            shared_memory_name: String::new(),
            sql_server_mode: false,
            ssl_mode: SslMode::default(),
            table_caching: false,
            treat_blobs_as_utf8: false,
            treat_tiny_as_boolean: true,
            use_affected_rows: false,
            use_procedure_bodies: true,
            username: String::new(),
            use_compression: false,
            use_usage_advisor: false,
            use_performance_monitor: false,
            cache_server_properties: false,
            connection_lifetime: 0,
            connection_reset: false,
            maximum_pool_size: 100,
            minimum_pool_size: 0,
            pooling: true,
        }
    }
}

impl ConnectionOptions {
    /// Create options with every field at its library default
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder for fluent configuration
    ///
    /// # Examples
    ///
    /// ```
    /// use sqlbuilder_mysql::ConnectionOptions;
    ///
    /// let options = ConnectionOptions::builder()
    ///     .username("app")
    ///     .password("secret")
    ///     .pooling(false)
    ///     .build();
    /// assert_eq!(options.to_string(), "Password=secret;Username=app;Pooling=false");
    /// ```
    pub fn builder() -> ConnectionOptionsBuilder {
        ConnectionOptionsBuilder::default()
    }

    /// Load options from a JSON document.
    ///
    /// Keys are the field names of this struct; missing keys keep their
    /// defaults and unknown keys are rejected.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let options: Self = serde_json::from_str(json)?;
        tracing::debug!(bytes = json.len(), "loaded connection options from json");
        Ok(options)
    }

    /// Load options from a JSON file, see [`from_json_str`](Self::from_json_str).
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            tracing::debug!(
                path = %path.display(),
                error = %e,
                "failed to read options file"
            );
            Error::Io(e)
        })?;
        let options: Self = serde_json::from_str(&contents)?;
        tracing::debug!(
            path = %path.display(),
            "loaded connection options from file"
        );
        Ok(options)
    }
}

// Secret-bearing fields are redacted from debug output
impl std::fmt::Debug for ConnectionOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut s = f.debug_struct("ConnectionOptions");
        for spec in OPTIONS.iter() {
            s.field(spec.field, &spec.debug_value(self));
        }
        s.finish()
    }
}

impl std::fmt::Display for ConnectionOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write_descriptor(self, Compatibility::Standard, f)?;
        Ok(())
    }
}

/// Builder for [`ConnectionOptions`]
///
/// Starts from the library defaults. Setters never validate; `build` returns
/// the accumulated snapshot.
#[derive(Debug, Clone, Default)]
pub struct ConnectionOptionsBuilder {
    options: ConnectionOptions,
}

macro_rules! setters {
    ($($field:ident: $ty:ident),* $(,)?) => {
        $( setters!(@one $field: $ty); )*
    };
    (@one $field:ident: String) => {
        #[doc = concat!("Set `", stringify!($field), "`")]
        pub fn $field(mut self, value: impl Into<String>) -> Self {
            self.options.$field = value.into();
            self
        }
    };
    (@one $field:ident: $ty:ident) => {
        #[doc = concat!("Set `", stringify!($field), "`")]
        pub fn $field(mut self, value: $ty) -> Self {
            self.options.$field = value;
            self
        }
    };
}

impl ConnectionOptionsBuilder {
    setters! {
        allow_batch: bool,
        allow_user_variables: bool,
        allow_zero_date_time: bool,
        auto_enlist: bool,
        blob_as_utf8_exclude_pattern: String,
        blob_as_utf8_include_pattern: String,
        certificate_file: String,
        certificate_password: String,
        certificate_store_location: String,
        certificate_thumbprint: String,
        character_set: String,
        check_parameters: bool,
        command_interceptors: String,
        connection_timeout: u32,
        connect_attrs: String,
        convert_zero_date_time: bool,
        default_command_timeout: u32,
        default_table_cache_age: u32,
        enable_session_expire_callback: bool,
        use_ssl: bool,
        exception_interceptors: String,
        functions_return_string: bool,
        host: String,
        ignore_prepare: bool,
        include_security_asserts: bool,
        database: String,
        interactive_session: bool,
        integrated_security: bool,
        keep_alive: u32,
        logging: bool,
        old_guids: bool,
        use_old_syntax: bool,
        password: String,
        persist_security_info: bool,
        pipe_name: String,
        port: u32,
        procedure_cache_size: u32,
        connection_protocol: ConnectionProtocol,
        replication: bool,
        respect_binary_flags: bool,
        shared_memory_name: String,
        sql_server_mode: bool,
        ssl_mode: SslMode,
        table_caching: bool,
        treat_blobs_as_utf8: bool,
        treat_tiny_as_boolean: bool,
        use_affected_rows: bool,
        use_procedure_bodies: bool,
        username: String,
        use_compression: bool,
        use_usage_advisor: bool,
        use_performance_monitor: bool,
        cache_server_properties: bool,
        connection_lifetime: u32,
        connection_reset: bool,
        maximum_pool_size: u32,
        minimum_pool_size: u32,
        pooling: bool,
    }

    /// Build the options
    pub fn build(self) -> ConnectionOptions {
        self.options
    }
}

impl From<ConnectionOptions> for ConnectionOptionsBuilder {
    fn from(options: ConnectionOptions) -> Self {
        Self { options }
    }
}
