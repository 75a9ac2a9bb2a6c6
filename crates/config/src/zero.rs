//! Zero-value detection for non-zero-wins merging.
//!
//! A field at its type's zero value counts as "absent": merging never lets
//! it overwrite a present value.

use std::collections::{BTreeMap, HashMap};
use std::path::PathBuf;
use std::time::Duration;

/// Reports whether a value is its type's zero value.
pub trait IsZero {
    fn is_zero(&self) -> bool;
}

macro_rules! impl_is_zero_for_integers {
    ($($t:ty),* $(,)?) => {
        $(
            impl IsZero for $t {
                fn is_zero(&self) -> bool {
                    *self == 0
                }
            }
        )*
    };
}

impl_is_zero_for_integers!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize
);

// Numeric equality: -0.0 is zero, NaN is not.
impl IsZero for f32 {
    fn is_zero(&self) -> bool {
        *self == 0.0
    }
}

impl IsZero for f64 {
    fn is_zero(&self) -> bool {
        *self == 0.0
    }
}

impl IsZero for bool {
    fn is_zero(&self) -> bool {
        !*self
    }
}

impl IsZero for char {
    fn is_zero(&self) -> bool {
        *self == '\0'
    }
}

impl IsZero for () {
    fn is_zero(&self) -> bool {
        true
    }
}

impl IsZero for String {
    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl IsZero for &str {
    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl IsZero for PathBuf {
    fn is_zero(&self) -> bool {
        self.as_os_str().is_empty()
    }
}

impl IsZero for Duration {
    fn is_zero(&self) -> bool {
        Duration::is_zero(self)
    }
}

impl<T> IsZero for Option<T> {
    fn is_zero(&self) -> bool {
        self.is_none()
    }
}

impl<T> IsZero for Vec<T> {
    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl<K, V> IsZero for BTreeMap<K, V> {
    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl<K, V, S> IsZero for HashMap<K, V, S> {
    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

/// Structural zero check for any type with a meaningful `Default`.
pub fn is_default<T: Default + PartialEq>(value: &T) -> bool {
    *value == T::default()
}

/// Copies `overlay` into `target` unless `overlay` is zero.
///
/// Returns `true` if `target` was replaced.
pub fn merge_field<T: IsZero + Clone>(target: &mut T, overlay: &T) -> bool {
    if overlay.is_zero() {
        return false;
    }
    target.clone_from(overlay);
    true
}
