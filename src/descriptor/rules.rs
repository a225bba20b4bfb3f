//! Option table driving connection string emission
//!
//! One entry per option, in emission order. Each entry pairs the key written
//! to the connection string with the rule deciding whether the option is
//! written at all.

use crate::connection::{ConnectionOptions, ConnectionProtocol, SslMode};

/// Emission rule for one option
#[derive(Clone, Copy)]
pub(crate) enum Rule {
    /// Written as `on` when true or `false` when false, only if different from `default`
    Flag {
        get: fn(&ConnectionOptions) -> bool,
        default: bool,
        on: &'static str,
    },
    /// Written only if different from `default`
    Number {
        get: fn(&ConnectionOptions) -> u32,
        default: u32,
    },
    /// Written only if not blank and not equal to `default`
    Text {
        get: fn(&ConnectionOptions) -> &str,
        default: Option<&'static str>,
    },
    /// Written as the transport token unless it is the default transport
    Protocol(fn(&ConnectionOptions) -> ConnectionProtocol),
    /// Written as the TLS mode token unless it is the default mode
    Ssl(fn(&ConnectionOptions) -> SslMode),
}

/// Historical emission quirk applied in legacy mode
#[derive(Clone, Copy)]
pub(crate) enum Legacy {
    /// Option was written under another key
    Key(&'static str),
    /// Option value was read from another field
    Number(fn(&ConnectionOptions) -> u32),
}

/// One row of the option table
#[derive(Clone, Copy)]
pub(crate) struct OptionSpec {
    /// Field name in [`ConnectionOptions`]
    pub(crate) field: &'static str,
    /// Key written to the connection string
    pub(crate) key: &'static str,
    pub(crate) rule: Rule,
    pub(crate) legacy: Option<Legacy>,
    /// Value must not appear in debug output
    pub(crate) secret: bool,
}

impl OptionSpec {
    const fn new(field: &'static str, key: &'static str, rule: Rule) -> Self {
        Self {
            field,
            key,
            rule,
            legacy: None,
            secret: false,
        }
    }

    /// Boolean option written as `Key=true` when set
    const fn flag(
        field: &'static str,
        key: &'static str,
        get: fn(&ConnectionOptions) -> bool,
    ) -> Self {
        Self::flag_as(field, key, "true", get)
    }

    /// Boolean option written as `Key=<on>` when set
    const fn flag_as(
        field: &'static str,
        key: &'static str,
        on: &'static str,
        get: fn(&ConnectionOptions) -> bool,
    ) -> Self {
        let rule = Rule::Flag {
            get,
            default: false,
            on,
        };
        Self::new(field, key, rule)
    }

    /// Boolean option defaulting to true, written as `Key=false` when cleared
    const fn flag_on(
        field: &'static str,
        key: &'static str,
        get: fn(&ConnectionOptions) -> bool,
    ) -> Self {
        let rule = Rule::Flag {
            get,
            default: true,
            on: "true",
        };
        Self::new(field, key, rule)
    }

    const fn number(
        field: &'static str,
        key: &'static str,
        default: u32,
        get: fn(&ConnectionOptions) -> u32,
    ) -> Self {
        Self::new(field, key, Rule::Number { get, default })
    }

    const fn text(
        field: &'static str,
        key: &'static str,
        get: fn(&ConnectionOptions) -> &str,
    ) -> Self {
        let rule = Rule::Text { get, default: None };
        Self::new(field, key, rule)
    }

    const fn text_or(
        field: &'static str,
        key: &'static str,
        default: &'static str,
        get: fn(&ConnectionOptions) -> &str,
    ) -> Self {
        let rule = Rule::Text {
            get,
            default: Some(default),
        };
        Self::new(field, key, rule)
    }

    const fn protocol(
        field: &'static str,
        key: &'static str,
        get: fn(&ConnectionOptions) -> ConnectionProtocol,
    ) -> Self {
        Self::new(field, key, Rule::Protocol(get))
    }

    const fn ssl(
        field: &'static str,
        key: &'static str,
        get: fn(&ConnectionOptions) -> SslMode,
    ) -> Self {
        Self::new(field, key, Rule::Ssl(get))
    }

    const fn with_legacy(self, legacy: Legacy) -> Self {
        Self {
            legacy: Some(legacy),
            ..self
        }
    }

    const fn secret(self) -> Self {
        Self {
            secret: true,
            ..self
        }
    }

    /// Current value of this option, for debug output
    pub(crate) fn debug_value<'a>(&self, options: &'a ConnectionOptions) -> DebugValue<'a> {
        if self.secret {
            return DebugValue::Redacted;
        }
        match self.rule {
            Rule::Flag { get, .. } => DebugValue::Flag(get(options)),
            Rule::Number { get, .. } => DebugValue::Number(get(options)),
            Rule::Text { get, .. } => DebugValue::Text(get(options)),
            Rule::Protocol(get) => DebugValue::Protocol(get(options)),
            Rule::Ssl(get) => DebugValue::Ssl(get(options)),
        }
    }
}

/// Option value as shown by `Debug`
pub(crate) enum DebugValue<'a> {
    Flag(bool),
    Number(u32),
    Text(&'a str),
    Protocol(ConnectionProtocol),
    Ssl(SslMode),
    Redacted,
}

impl std::fmt::Debug for DebugValue<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Flag(v) => std::fmt::Debug::fmt(v, f),
            Self::Number(v) => std::fmt::Debug::fmt(v, f),
            Self::Text(v) => std::fmt::Debug::fmt(v, f),
            Self::Protocol(v) => std::fmt::Debug::fmt(v, f),
            Self::Ssl(v) => std::fmt::Debug::fmt(v, f),
            Self::Redacted => f.write_str("<redacted>"),
        }
    }
}

/// Every option, in emission order
pub(crate) static OPTIONS: [OptionSpec; 58] = [
    OptionSpec::flag_on("allow_batch", "AllowBatch", |o| o.allow_batch),
    OptionSpec::flag("allow_user_variables", "AllowUserVariables", |o| {
        o.allow_user_variables
    }),
    OptionSpec::flag("allow_zero_date_time", "AllowZeroDateTime", |o| {
        o.allow_zero_date_time
    }),
    OptionSpec::flag_on("auto_enlist", "AutoEnlist", |o| o.auto_enlist),
    OptionSpec::text("blob_as_utf8_exclude_pattern", "BlobAsUTF8ExcludePattern", |o| {
        o.blob_as_utf8_exclude_pattern.as_str()
    }),
    OptionSpec::text("blob_as_utf8_include_pattern", "BlobAsUTF8IncludePattern", |o| {
        o.blob_as_utf8_include_pattern.as_str()
    }),
    OptionSpec::text("certificate_file", "CertificateFile", |o| {
        o.certificate_file.as_str()
    }),
    OptionSpec::text("certificate_password", "CertificatePassword", |o| {
        o.certificate_password.as_str()
    })
    .secret(),
    OptionSpec::text("certificate_store_location", "CertificateStoreLocation", |o| {
        o.certificate_store_location.as_str()
    }),
    OptionSpec::text("certificate_thumbprint", "CertificateThumbprint", |o| {
        o.certificate_thumbprint.as_str()
    }),
    OptionSpec::text("character_set", "CharacterSet", |o| {
        o.character_set.as_str()
    }),
    OptionSpec::flag_on("check_parameters", "CheckParameters", |o| {
        o.check_parameters
    }),
    OptionSpec::text("command_interceptors", "CommandInterceptors", |o| {
        o.command_interceptors.as_str()
    }),
    OptionSpec::number("connection_timeout", "ConnectionTimeout", 15, |o| {
        o.connection_timeout
    }),
    OptionSpec::text("connect_attrs", "Connect_Attrs", |o| {
        o.connect_attrs.as_str()
    }),
    OptionSpec::flag("convert_zero_date_time", "ConvertZeroDateTime", |o| {
        o.convert_zero_date_time
    }),
    OptionSpec::number("default_command_timeout", "DefaultCommandTimeout", 30, |o| {
        o.default_command_timeout
    }),
    OptionSpec::number("default_table_cache_age", "DefaultTableCacheAge", 60, |o| {
        o.default_table_cache_age
    }),
    OptionSpec::flag("enable_session_expire_callback", "enableSessionExpireCallback", |o| {
        o.enable_session_expire_callback
    }),
    OptionSpec::flag("use_ssl", "UseSSL", |o| o.use_ssl),
    OptionSpec::text("exception_interceptors", "ExceptionInterceptors", |o| {
        o.exception_interceptors.as_str()
    }),
    OptionSpec::flag("functions_return_string", "FunctionsReturnString", |o| {
        o.functions_return_string
    }),
    OptionSpec::text_or("host", "Host", "localhost", |o| o.host.as_str()),
    OptionSpec::flag_on("ignore_prepare", "IgnorePrepare", |o| o.ignore_prepare),
    OptionSpec::flag("include_security_asserts", "includesecurityasserts", |o| {
        o.include_security_asserts
    }),
    OptionSpec::text_or("database", "Database", "mysql", |o| o.database.as_str()),
    OptionSpec::flag("interactive_session", "InteractiveSession", |o| {
        o.interactive_session
    }),
    OptionSpec::flag_as("integrated_security", "IntegratedSecurity", "yes", |o| {
        o.integrated_security
    }),
    OptionSpec::number("keep_alive", "Keepalive", 0, |o| o.keep_alive),
    OptionSpec::flag("logging", "Logging", |o| o.logging),
    OptionSpec::flag("old_guids", "OldGuids", |o| o.old_guids),
    OptionSpec::flag("use_old_syntax", "UseOldSyntax", |o| o.use_old_syntax),
    OptionSpec::text("password", "Password", |o| o.password.as_str())
        .secret(),
    OptionSpec::flag("persist_security_info", "PersistSecurityInfo", |o| {
        o.persist_security_info
    }),
    OptionSpec::text_or("pipe_name", "PipeName", "mysql", |o| o.pipe_name.as_str()),
    OptionSpec::number("port", "Port", 3306, |o| o.port)
        .with_legacy(Legacy::Key("Keepalive")),
    OptionSpec::number("procedure_cache_size", "ProcedureCacheSize", 25, |o| {
        o.procedure_cache_size
    }),
    OptionSpec::protocol("connection_protocol", "ConnectionProtocol", |o| {
        o.connection_protocol
    }),
    OptionSpec::flag("replication", "Replication", |o| o.replication),
    OptionSpec::flag_on("respect_binary_flags", "RespectBinaryFlags", |o| {
        o.respect_binary_flags
    }),
    OptionSpec::text_or("shared_memory_name", "SharedMemoryName", "MYSQL", |o| {
        o.shared_memory_name.as_str()
    }),
    OptionSpec::flag("sql_server_mode", "sqlservermode", |o| o.sql_server_mode),
    OptionSpec::ssl("ssl_mode", "SslMode", |o| o.ssl_mode),
    OptionSpec::flag("table_caching", "tablecaching", |o| o.table_caching),
    OptionSpec::flag("treat_blobs_as_utf8", "TreatBlobsAsUTF8", |o| {
        o.treat_blobs_as_utf8
    }),
    OptionSpec::flag_on("treat_tiny_as_boolean", "TreatTinyAsBoolean", |o| {
        o.treat_tiny_as_boolean
    }),
    OptionSpec::flag("use_affected_rows", "UseAffectedRows", |o| {
        o.use_affected_rows
    }),
    OptionSpec::flag_on("use_procedure_bodies", "UseProcedureBodies", |o| {
        o.use_procedure_bodies
    }),
    OptionSpec::text("username", "Username", |o| o.username.as_str()),
    OptionSpec::flag("use_compression", "UseCompression", |o| o.use_compression),
    OptionSpec::flag("use_usage_advisor", "UseUsageAdvisor", |o| {
        o.use_usage_advisor
    }),
    OptionSpec::flag("use_performance_monitor", "UsePerformanceMonitor", |o| {
        o.use_performance_monitor
    }),
    OptionSpec::flag("cache_server_properties", "CacheServerProperties", |o| {
        o.cache_server_properties
    }),
    OptionSpec::number("connection_lifetime", "ConnectionLifeTime", 0, |o| {
        o.connection_lifetime
    }),
    OptionSpec::flag("connection_reset", "ConnectionReset", |o| {
        o.connection_reset
    }),
    OptionSpec::number("maximum_pool_size", "MaximumPoolsize", 100, |o| {
        o.maximum_pool_size
    }),
    OptionSpec::number("minimum_pool_size", "MinimumPoolSize", 0, |o| {
        o.minimum_pool_size
    })
    .with_legacy(Legacy::Number(|o| o.maximum_pool_size)),
    OptionSpec::flag_on("pooling", "Pooling", |o| o.pooling),
];
