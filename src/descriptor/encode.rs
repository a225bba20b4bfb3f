//! Connection string encoding

use super::rules::{Legacy, OptionSpec, Rule, OPTIONS};
use crate::connection::ConnectionOptions;
use std::borrow::Cow;
use std::fmt::Write;

/// Separator between fragments
pub const FRAGMENT_SEPARATOR: char = ';';

/// Separator between a key and its value
pub const KEY_VALUE_SEPARATOR: char = '=';

/// Emission behavior of the encoder.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Compatibility {
    /// Every option under its own key with its own value
    #[default]
    Standard,
    /// Byte-for-byte output of the historical builder: `Port` written under
    /// `Keepalive`, `MinimumPoolSize` carrying the maximum pool size, and
    /// `SslMode=VerifyFull ` with a trailing space.
    Legacy,
}

impl std::fmt::Display for Compatibility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Standard => write!(f, "standard"),
            Self::Legacy => write!(f, "legacy"),
        }
    }
}

/// One `Key=Value` unit of a connection string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment<'a> {
    key: &'static str,
    value: Cow<'a, str>,
}

impl<'a> Fragment<'a> {
    /// Key as written to the connection string
    pub fn key(&self) -> &'static str {
        self.key
    }

    /// Value as written to the connection string
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Whether the value contains a separator and would be split by a parser
    pub fn is_ambiguous(&self) -> bool {
        self.value
            .contains([FRAGMENT_SEPARATOR, KEY_VALUE_SEPARATOR])
    }
}

impl std::fmt::Display for Fragment<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}{}", self.key, KEY_VALUE_SEPARATOR, self.value)
    }
}

/// Build the connection string for `options`.
///
/// Options at their default are omitted; a default record yields `""`.
/// Values are embedded verbatim, without escaping.
///
/// # Examples
///
/// ```
/// use sqlbuilder_mysql::{encode_descriptor, ConnectionOptions};
///
/// assert_eq!(encode_descriptor(&ConnectionOptions::default()), "");
///
/// let mut options = ConnectionOptions::default();
/// options.allow_batch = false;
/// options.connect_attrs = "app=billing".into();
/// assert_eq!(
///     encode_descriptor(&options),
///     "AllowBatch=false;Connect_Attrs=app=billing"
/// );
/// ```
pub fn encode_descriptor(options: &ConnectionOptions) -> String {
    encode_descriptor_with(options, Compatibility::Standard)
}

/// Build the connection string for `options` using the given compatibility mode.
///
/// Each call is counted in the encoder metrics. Formatting
/// [`ConnectionOptions`] with `Display` produces the same string without
/// recording anything.
pub fn encode_descriptor_with(options: &ConnectionOptions, compatibility: Compatibility) -> String {
    let mut descriptor = String::new();
    let count = match write_descriptor(options, compatibility, &mut descriptor) {
        Ok(count) => count,
        // Writing into a String cannot fail
        Err(_) => 0,
    };

    tracing::debug!(
        fragments = count,
        compatibility = %compatibility,
        "encoded connection descriptor"
    );
    crate::metrics::counters::descriptor_encoded(compatibility);
    crate::metrics::histograms::descriptor_fragments(count);

    descriptor
}

/// Write the connection string for `options` into `out`, returning the
/// number of fragments written.
pub(crate) fn write_descriptor<W: Write>(
    options: &ConnectionOptions,
    compatibility: Compatibility,
    out: &mut W,
) -> Result<usize, std::fmt::Error> {
    let mut count = 0;
    for fragment in iter_fragments(options, compatibility) {
        if count > 0 {
            out.write_char(FRAGMENT_SEPARATOR)?;
        }
        write!(out, "{}", fragment)?;
        count += 1;
    }
    Ok(count)
}

/// Fragments that `options` would be written as, in emission order.
pub fn fragments(options: &ConnectionOptions, compatibility: Compatibility) -> Vec<Fragment<'_>> {
    iter_fragments(options, compatibility).collect()
}

fn iter_fragments(
    options: &ConnectionOptions,
    compatibility: Compatibility,
) -> impl Iterator<Item = Fragment<'_>> {
    OPTIONS.iter().filter_map(move |spec| {
        let value = emit(spec, options, compatibility)?;
        let key = match (compatibility, spec.legacy) {
            (Compatibility::Legacy, Some(Legacy::Key(key))) => key,
            _ => spec.key,
        };
        tracing::trace!(key, "option emitted");
        Some(Fragment { key, value })
    })
}

/// Keys whose values contain a separator, making the connection string
/// ambiguous to parse. The connection string itself is never altered.
///
/// Logs a warning for each key found.
pub fn ambiguous_keys(options: &ConnectionOptions) -> Vec<&'static str> {
    let keys: Vec<_> = iter_fragments(options, Compatibility::Standard)
        .filter(Fragment::is_ambiguous)
        .map(|f| f.key())
        .collect();

    for &key in &keys {
        tracing::warn!(key, "option value contains a connection string separator");
    }
    keys
}

/// Keys of every option, in emission order
pub fn option_keys() -> impl Iterator<Item = &'static str> {
    OPTIONS.iter().map(|spec| spec.key)
}

fn emit<'a>(
    spec: &OptionSpec,
    options: &'a ConnectionOptions,
    compatibility: Compatibility,
) -> Option<Cow<'a, str>> {
    match spec.rule {
        Rule::Flag { get, default, on } => {
            let value = get(options);
            if value == default {
                return None;
            }
            Some(Cow::Borrowed(if value { on } else { "false" }))
        }
        Rule::Number { get, default } => {
            let value = get(options);
            if value == default {
                return None;
            }
            let written = match (compatibility, spec.legacy) {
                (Compatibility::Legacy, Some(Legacy::Number(source))) => source(options),
                _ => value,
            };
            Some(Cow::Owned(written.to_string()))
        }
        Rule::Text { get, default } => {
            let value = get(options);
            if value.trim().is_empty() || default == Some(value) {
                return None;
            }
            Some(Cow::Borrowed(value))
        }
        Rule::Protocol(get) => get(options).token().map(Cow::Borrowed),
        Rule::Ssl(get) => {
            let mode = get(options);
            let token = match compatibility {
                Compatibility::Standard => mode.token(),
                Compatibility::Legacy => mode.legacy_token(),
            };
            token.map(Cow::Borrowed)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connection::{ConnectionProtocol, SslMode};

    #[test]
    fn test_default_options_encode_empty() {
        assert_eq!(encode_descriptor(&ConnectionOptions::default()), "");
        let defaults = ConnectionOptions::default();
        assert!(fragments(&defaults, Compatibility::Legacy).is_empty());
    }

    #[test]
    fn test_flag_default_false_emits_true() {
        let mut options = ConnectionOptions::default();
        options.use_compression = true;
        assert_eq!(encode_descriptor(&options), "UseCompression=true");
    }

    #[test]
    fn test_flag_default_true_emits_false() {
        let mut options = ConnectionOptions::default();
        options.treat_tiny_as_boolean = false;
        assert_eq!(encode_descriptor(&options), "TreatTinyAsBoolean=false");
    }

    #[test]
    fn test_integrated_security_emits_yes() {
        let mut options = ConnectionOptions::default();
        options.integrated_security = true;
        assert_eq!(encode_descriptor(&options), "IntegratedSecurity=yes");
    }

    #[test]
    fn test_lowercase_keys() {
        let options = ConnectionOptions::builder()
            .include_security_asserts(true)
            .sql_server_mode(true)
            .table_caching(true)
            .build();
        assert_eq!(
            encode_descriptor(&options),
            "includesecurityasserts=true;sqlservermode=true;tablecaching=true"
        );
    }

    #[test]
    fn test_number_default_suppressed() {
        let mut options = ConnectionOptions::default();
        options.default_command_timeout = 30;
        assert_eq!(encode_descriptor(&options), "");
        options.default_command_timeout = 0;
        assert_eq!(encode_descriptor(&options), "DefaultCommandTimeout=0");
    }

    #[test]
    fn test_text_blank_suppressed() {
        let mut options = ConnectionOptions::default();
        options.character_set = "   ".into();
        assert_eq!(encode_descriptor(&options), "");
        options.character_set = "utf8mb4".into();
        assert_eq!(encode_descriptor(&options), "CharacterSet=utf8mb4");
    }

    #[test]
    fn test_text_embedded_verbatim() {
        let mut options = ConnectionOptions::default();
        options.username = " app ".into();
        assert_eq!(encode_descriptor(&options), "Username= app ");
    }

    #[test]
    fn test_text_named_defaults_suppressed() {
        let options = ConnectionOptions::builder()
            .host("localhost")
            .database("mysql")
            .pipe_name("mysql")
            .shared_memory_name("MYSQL")
            .build();
        assert_eq!(encode_descriptor(&options), "");
    }

    #[test]
    fn test_text_named_defaults_case_sensitive() {
        let options = ConnectionOptions::builder()
            .pipe_name("MYSQL")
            .shared_memory_name("mysql")
            .build();
        assert_eq!(
            encode_descriptor(&options),
            "PipeName=MYSQL;SharedMemoryName=mysql"
        );
    }

    #[test]
    fn test_protocol_and_ssl_tokens() {
        let options = ConnectionOptions::builder()
            .connection_protocol(ConnectionProtocol::Memory)
            .ssl_mode(SslMode::VerifyCa)
            .build();
        assert_eq!(
            encode_descriptor(&options),
            "ConnectionProtocol=memory;SslMode=VerifyCA"
        );
    }

    #[test]
    fn test_standard_port_and_pool_sizes() {
        let options = ConnectionOptions::builder()
            .port(3307)
            .maximum_pool_size(50)
            .minimum_pool_size(5)
            .build();
        assert_eq!(
            encode_descriptor(&options),
            "Port=3307;MaximumPoolsize=50;MinimumPoolSize=5"
        );
    }

    #[test]
    fn test_legacy_quirks() {
        let options = ConnectionOptions::builder()
            .port(3307)
            .ssl_mode(SslMode::VerifyFull)
            .maximum_pool_size(50)
            .minimum_pool_size(5)
            .build();
        assert_eq!(
            encode_descriptor_with(&options, Compatibility::Legacy),
            "Keepalive=3307;SslMode=VerifyFull ;MaximumPoolsize=50;MinimumPoolSize=50"
        );
    }

    #[test]
    fn test_legacy_minimum_pool_size_only_when_set() {
        let options = ConnectionOptions::builder().maximum_pool_size(50).build();
        assert_eq!(
            encode_descriptor_with(&options, Compatibility::Legacy),
            "MaximumPoolsize=50"
        );
    }

    #[test]
    fn test_legacy_matches_standard_without_quirky_fields() {
        let options = ConnectionOptions::builder()
            .host("db")
            .ssl_mode(SslMode::Required)
            .keep_alive(10)
            .build();
        assert_eq!(
            encode_descriptor_with(&options, Compatibility::Legacy),
            encode_descriptor(&options)
        );
    }

    #[test]
    fn test_fragment_accessors() {
        let options = ConnectionOptions::builder().username("app").build();
        let fragments = fragments(&options, Compatibility::Standard);
        assert_eq!(fragments.len(), 1);
        assert_eq!(fragments[0].key(), "Username");
        assert_eq!(fragments[0].value(), "app");
        assert_eq!(fragments[0].to_string(), "Username=app");
    }

    #[test]
    fn test_ambiguous_keys() {
        let options = ConnectionOptions::builder()
            .password("p;w")
            .connect_attrs("a=b")
            .username("app")
            .build();
        assert_eq!(
            ambiguous_keys(&options),
            vec!["Connect_Attrs", "Password"]
        );
        assert_eq!(
            encode_descriptor(&options),
            "Connect_Attrs=a=b;Password=p;w;Username=app"
        );
    }

    #[test]
    fn test_option_keys_order() {
        let keys: Vec<_> = option_keys().collect();
        assert_eq!(
            keys,
            vec![
                "AllowBatch",
                "AllowUserVariables",
                "AllowZeroDateTime",
                "AutoEnlist",
                "BlobAsUTF8ExcludePattern",
                "BlobAsUTF8IncludePattern",
                "CertificateFile",
                "CertificatePassword",
                "CertificateStoreLocation",
                "CertificateThumbprint",
                "CharacterSet",
                "CheckParameters",
                "CommandInterceptors",
                "ConnectionTimeout",
                "Connect_Attrs",
                "ConvertZeroDateTime",
                "DefaultCommandTimeout",
                "DefaultTableCacheAge",
                "enableSessionExpireCallback",
                "UseSSL",
                "ExceptionInterceptors",
                "FunctionsReturnString",
                "Host",
                "IgnorePrepare",
                "includesecurityasserts",
                "Database",
                "InteractiveSession",
                "IntegratedSecurity",
                "Keepalive",
                "Logging",
                "OldGuids",
                "UseOldSyntax",
                "Password",
                "PersistSecurityInfo",
                "PipeName",
                "Port",
                "ProcedureCacheSize",
                "ConnectionProtocol",
                "Replication",
                "RespectBinaryFlags",
                "SharedMemoryName",
                "sqlservermode",
                "SslMode",
                "tablecaching",
                "TreatBlobsAsUTF8",
                "TreatTinyAsBoolean",
                "UseAffectedRows",
                "UseProcedureBodies",
                "Username",
                "UseCompression",
                "UseUsageAdvisor",
                "UsePerformanceMonitor",
                "CacheServerProperties",
                "ConnectionLifeTime",
                "ConnectionReset",
                "MaximumPoolsize",
                "MinimumPoolSize",
                "Pooling",
            ]
        );
    }

    #[test]
    fn test_write_descriptor_counts_fragments() {
        let options = ConnectionOptions::builder()
            .username("app")
            .pooling(false)
            .build();
        let mut out = String::new();
        let count = write_descriptor(&options, Compatibility::Standard, &mut out);
        assert_eq!(count, Ok(2));
        assert_eq!(out, "Username=app;Pooling=false");

        let defaults = ConnectionOptions::default();
        let mut out = String::new();
        let count = write_descriptor(&defaults, Compatibility::Legacy, &mut out);
        assert_eq!(count, Ok(0));
        assert!(out.is_empty());
    }

    #[test]
    fn test_compatibility_display() {
        assert_eq!(Compatibility::Standard.to_string(), "standard");
        assert_eq!(Compatibility::Legacy.to_string(), "legacy");
        assert_eq!(Compatibility::default(), Compatibility::Standard);
    }
}
