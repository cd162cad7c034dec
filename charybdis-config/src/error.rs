//! Failures while loading `keyboard.toml`, bad user input never panics.

use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    FileRead { path: String, message: String },
    /// Not TOML, or an unknown section/field
    TomlParse { path: String, message: String },
    /// Inconsistent layout: bad `matrix_map`, duplicate layer names, key count mismatch
    Validation { field: String, message: String },
    /// `[layout]` or its `matrix_map` is absent
    MissingField { field: String },
    /// Number outside its range: layout sizes, CPI, scroll divisors
    InvalidValue {
        field: String,
        value: String,
        expected: String,
    },
    /// Neither a keycode nor an alias
    UnknownKey { key: String },
    UnknownLayer { layer: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::FileRead { path, message } => write!(f, "Cannot read {}: {}", path, message),
            ConfigError::TomlParse { path, message } => write!(f, "Malformed keyboard config {}: {}", path, message),
            ConfigError::Validation { field, message } => write!(f, "{}: {}", field, message),
            ConfigError::MissingField { field } => write!(f, "Missing {} in keyboard config", field),
            ConfigError::InvalidValue { field, value, expected } => {
                write!(f, "{} = {} is out of range, expected {}", field, value, expected)
            }
            ConfigError::UnknownKey { key } => write!(f, "Unknown keycode or alias: {}", key),
            ConfigError::UnknownLayer { layer } => write!(f, "Unknown layer: {}", layer),
        }
    }
}

impl std::error::Error for ConfigError {}

pub type ConfigResult<T> = Result<T, ConfigError>;
