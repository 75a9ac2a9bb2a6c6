//! String coercion for path-based overrides.
//!
//! Override values always arrive as strings; these helpers convert them to
//! the target field's type and report failures as `ConfigError::Coercion`.
//! The message names only the expected type: neither the raw value nor the
//! parser's own error text is echoed, since `FromStr` errors may quote the
//! input.

use std::any::type_name;
use std::str::FromStr;

use crate::error::ConfigError;

/// Parses `raw` into the field type `T` addressed by `path`.
///
/// Surrounding whitespace is ignored for every type except `String`, which
/// keeps the value as written.
pub fn parse_value<T>(path: &str, raw: &str) -> Result<T, ConfigError>
where
    T: FromStr + 'static,
{
    let input = if std::any::TypeId::of::<T>() == std::any::TypeId::of::<String>() {
        raw
    } else {
        raw.trim()
    };
    input.parse::<T>().map_err(|_| ConfigError::Coercion {
        path: path.to_string(),
        message: format!("expected {}", short_type_name::<T>()),
    })
}

/// Parses a boolean flag.
///
/// Accepts `true/false`, `1/0`, `yes/no` and `on/off`, case-insensitively.
pub fn parse_flag(path: &str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::Coercion {
            path: path.to_string(),
            message: "must be true or false".to_string(),
        }),
    }
}

fn short_type_name<T>() -> &'static str {
    let full = type_name::<T>();
    full.rsplit("::").next().unwrap_or(full)
}
