//! Document loading.
//!
//! Responsibilities:
//! - Resolve the base and environment-specific document paths.
//! - Open, validate and deserialize a YAML document into a caller-chosen type.
//!
//! Does NOT handle:
//! - Merging documents (see `mergeable.rs`).
//! - Environment variable overrides (see `env.rs`).
//!
//! Invariants:
//! - A document is decoded onto the target's current value: keys the
//!   document names overwrite, keys it omits keep what the target held.
//! - The target is only replaced after the layered value deserialized.
//! - The file handle is dropped on every exit path.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_yaml::Value;

use crate::constants::BASE_DOCUMENT_NAME;
use crate::error::ConfigError;
use crate::path::{document_path, validate_config_path};

/// Reads and deserializes the document at `path`.
///
/// # Errors
///
/// - `ConfigError::Io` if the file cannot be opened.
/// - `ConfigError::InvalidPath` if the path is a directory.
/// - `ConfigError::Parse` if the content is not valid YAML for `T`.
pub fn read_document<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T, ConfigError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| ConfigError::io(path, e))?;
    validate_config_path(path)?;

    tracing::debug!(path = %path.display(), "Reading configuration document");

    serde_yaml::from_reader(BufReader::new(file)).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Decodes the document at `path` onto `config`.
///
/// Mappings are layered key by key, so fields the document does not mention
/// keep their current values. Scalars and sequences named by the document
/// replace the current value, and `null` leaves it alone.
///
/// # Errors
///
/// Same as [`read_document`]. `config` is unchanged on any error.
pub fn decode_into<T>(path: impl AsRef<Path>, config: &mut T) -> Result<(), ConfigError>
where
    T: Serialize + DeserializeOwned,
{
    let path = path.as_ref();
    let document: Value = read_document(path)?;
    let parse_error = |source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    };

    let mut layered = serde_yaml::to_value(&*config).map_err(parse_error)?;
    overlay_document(&mut layered, document);
    *config = serde_yaml::from_value(layered).map_err(parse_error)?;
    Ok(())
}

/// Loads `<base_path>/base.yaml` onto `config`.
pub fn load_base<T>(base_path: impl AsRef<Path>, config: &mut T) -> Result<(), ConfigError>
where
    T: Serialize + DeserializeOwned,
{
    decode_into(document_path(base_path, BASE_DOCUMENT_NAME), config)
}

/// Loads `<base_path>/<environment>.yaml` onto `config`.
///
/// The environment name must be non-empty and must not contain a path
/// separator.
pub fn load_from<T>(
    base_path: impl AsRef<Path>,
    environment: &str,
    config: &mut T,
) -> Result<(), ConfigError>
where
    T: Serialize + DeserializeOwned,
{
    validate_environment_name(environment)?;
    decode_into(document_path(base_path, environment), config)
}

fn overlay_document(target: &mut Value, document: Value) {
    match (target, document) {
        (_, Value::Null) => {}
        (Value::Mapping(current), Value::Mapping(document)) => {
            for (key, next) in document {
                match current.get_mut(&key) {
                    Some(slot) => overlay_document(slot, next),
                    None => {
                        current.insert(key, next);
                    }
                }
            }
        }
        (target, document) => *target = document,
    }
}

fn validate_environment_name(environment: &str) -> Result<(), ConfigError> {
    if environment.trim().is_empty() {
        return Err(ConfigError::invalid_argument(
            "environment name",
            "must not be empty",
        ));
    }
    if environment.contains(['/', '\\']) {
        return Err(ConfigError::invalid_argument(
            "environment name",
            format!("'{environment}' must not contain a path separator"),
        ));
    }
    Ok(())
}
