//! The contract a configuration type implements to take part in merging and
//! environment overrides.
//!
//! Concrete types list their own fields: `merge_with` applies
//! [`merge_field`](crate::zero::merge_field) per field and `set_path_value`
//! matches on the known dotted paths.

use std::any::{Any, type_name};

use crate::error::ConfigError;

/// A configuration type that can be merged with an overlay and updated by
/// dotted path.
///
/// # Example
///
/// ```
/// use strata_config::{ConfigError, MergeableConfig, merge_field, parse_value};
///
/// #[derive(Default)]
/// struct Database {
///     url: String,
///     pool_size: u32,
/// }
///
/// impl MergeableConfig for Database {
///     fn merge_with(&mut self, overlay: &Self) -> Result<(), ConfigError> {
///         merge_field(&mut self.url, &overlay.url);
///         merge_field(&mut self.pool_size, &overlay.pool_size);
///         Ok(())
///     }
///
///     fn set_path_value(&mut self, path: &str, value: &str) -> Result<(), ConfigError> {
///         match path {
///             "url" => self.url = value.to_string(),
///             "pool_size" => self.pool_size = parse_value(path, value)?,
///             _ => return Err(ConfigError::UnknownPath(path.to_string())),
///         }
///         Ok(())
///     }
/// }
///
/// let mut db = Database::default();
/// db.set_path_value("pool_size", "8").unwrap();
/// assert_eq!(db.pool_size, 8);
/// ```
pub trait MergeableConfig {
    /// Copies every non-zero field of `overlay` into `self`.
    fn merge_with(&mut self, overlay: &Self) -> Result<(), ConfigError>
    where
        Self: Sized;

    /// Assigns `value`, coerced to the field's type, to the field at `path`.
    ///
    /// Implementations must leave `self` unchanged when returning an error:
    /// `ConfigError::UnknownPath` for unrecognized paths and
    /// `ConfigError::Coercion` for values that do not parse.
    fn set_path_value(&mut self, path: &str, value: &str) -> Result<(), ConfigError>;
}

/// Merges a type-erased overlay into `target`.
///
/// # Errors
///
/// Returns `ConfigError::TypeMismatch` if `overlay` is not a `C`.
pub fn merge_any<C>(target: &mut C, overlay: &dyn Any) -> Result<(), ConfigError>
where
    C: MergeableConfig + 'static,
{
    let overlay = overlay
        .downcast_ref::<C>()
        .ok_or(ConfigError::TypeMismatch {
            expected: type_name::<C>(),
        })?;
    target.merge_with(overlay)
}
