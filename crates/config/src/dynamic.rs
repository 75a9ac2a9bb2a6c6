//! Schemaless configuration backed by a YAML value tree.
//!
//! Responsibilities:
//! - Hold any YAML document without a hand-written Rust type.
//! - Implement `MergeableConfig` over the tree: recursive mapping merge and
//!   dotted-path assignment with type-directed coercion.
//!
//! Does NOT handle:
//! - Schema validation; any key is accepted.
//!
//! Invariants:
//! - Path segments match existing keys case-insensitively; new keys are
//!   inserted lowercase.
//! - `set_path_value` never modifies the tree when it returns an error.

use serde::{Deserialize, Serialize};
use serde_yaml::{Mapping, Number, Value};

use crate::coerce::{parse_flag, parse_value};
use crate::constants::PATH_SEPARATOR;
use crate::error::ConfigError;
use crate::mergeable::MergeableConfig;
use crate::zero::IsZero;

/// A configuration document kept as a `serde_yaml::Value`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DynamicConfig {
    root: Value,
}

impl DynamicConfig {
    /// Wraps an existing value tree.
    pub fn new(root: Value) -> Self {
        Self { root }
    }

    /// Borrow the underlying value tree.
    pub fn as_value(&self) -> &Value {
        &self.root
    }

    pub fn into_value(self) -> Value {
        self.root
    }

    /// Looks up the value at a dotted path.
    pub fn get_path(&self, path: &str) -> Option<&Value> {
        let segments = split_path(path).ok()?;
        segments
            .iter()
            .try_fold(&self.root, |node, segment| lookup(node, segment))
    }
}

impl IsZero for Value {
    fn is_zero(&self) -> bool {
        match self {
            Value::Null => true,
            Value::Bool(b) => !b,
            Value::Number(n) => n.as_f64() == Some(0.0),
            Value::String(s) => s.is_empty(),
            Value::Sequence(seq) => seq.is_empty(),
            Value::Mapping(map) => map.is_empty(),
            Value::Tagged(tagged) => tagged.value.is_zero(),
        }
    }
}

impl MergeableConfig for DynamicConfig {
    fn merge_with(&mut self, overlay: &Self) -> Result<(), ConfigError> {
        merge_values(&mut self.root, &overlay.root);
        Ok(())
    }

    fn set_path_value(&mut self, path: &str, value: &str) -> Result<(), ConfigError> {
        let segments = split_path(path)?;
        let existing = resolve_existing(&self.root, &segments, path)?;
        let coerced = coerce_like(existing, path, value)?;
        assign(&mut self.root, &segments, coerced);
        Ok(())
    }
}

fn merge_values(target: &mut Value, overlay: &Value) {
    match (target, overlay) {
        (Value::Mapping(target), Value::Mapping(overlay)) => {
            for (key, next) in overlay {
                let slot = match key.as_str() {
                    Some(segment) => existing_key(target, segment),
                    None => target.contains_key(key).then(|| key.clone()),
                };
                match slot {
                    Some(slot) => {
                        if let Some(current) = target.get_mut(&slot) {
                            merge_values(current, next);
                        }
                    }
                    None if !next.is_zero() => {
                        target.insert(key.clone(), next.clone());
                    }
                    None => {}
                }
            }
        }
        (target, overlay) => {
            if !overlay.is_zero() {
                *target = overlay.clone();
            }
        }
    }
}

fn split_path(path: &str) -> Result<Vec<&str>, ConfigError> {
    let segments: Vec<&str> = path.split(PATH_SEPARATOR).collect();
    if segments.iter().any(|s| s.is_empty()) {
        return Err(ConfigError::UnknownPath(path.to_string()));
    }
    Ok(segments)
}

fn key_matches(key: &Value, segment: &str) -> bool {
    key.as_str()
        .is_some_and(|k| k.eq_ignore_ascii_case(segment))
}

fn lookup<'a>(node: &'a Value, segment: &str) -> Option<&'a Value> {
    node.as_mapping()?
        .iter()
        .find(|(k, _)| key_matches(k, segment))
        .map(|(_, v)| v)
}

/// Walks `segments` without creating anything.
///
/// Returns `Ok(None)` when the leaf (or an intermediate section) does not
/// exist yet, and `UnknownPath` when the walk runs into a scalar or when the
/// leaf itself is a section.
fn resolve_existing<'a>(
    root: &'a Value,
    segments: &[&str],
    path: &str,
) -> Result<Option<&'a Value>, ConfigError> {
    let mut node = root;
    for segment in segments {
        match node {
            Value::Null => return Ok(None),
            Value::Mapping(_) => match lookup(node, segment) {
                Some(child) => node = child,
                None => return Ok(None),
            },
            _ => return Err(ConfigError::UnknownPath(path.to_string())),
        }
    }
    if node.is_mapping() {
        return Err(ConfigError::UnknownPath(path.to_string()));
    }
    Ok(Some(node))
}

fn coerce_like(existing: Option<&Value>, path: &str, raw: &str) -> Result<Value, ConfigError> {
    match existing {
        Some(Value::Bool(_)) => Ok(Value::Bool(parse_flag(path, raw)?)),
        Some(Value::Number(n)) if n.is_i64() => {
            Ok(Value::Number(parse_value::<i64>(path, raw)?.into()))
        }
        Some(Value::Number(n)) if n.is_u64() => {
            Ok(Value::Number(parse_value::<u64>(path, raw)?.into()))
        }
        Some(Value::Number(_)) => Ok(Value::Number(parse_value::<f64>(path, raw)?.into())),
        Some(Value::String(_)) => Ok(Value::String(raw.to_string())),
        Some(Value::Sequence(_)) => Err(ConfigError::Coercion {
            path: path.to_string(),
            message: "cannot assign a scalar to a sequence".to_string(),
        }),
        Some(Value::Tagged(tagged)) => coerce_like(Some(&tagged.value), path, raw),
        Some(Value::Null) | Some(Value::Mapping(_)) | None => Ok(infer_scalar(raw)),
    }
}

fn infer_scalar(raw: &str) -> Value {
    let trimmed = raw.trim();
    if let Ok(flag) = trimmed.parse::<bool>() {
        return Value::Bool(flag);
    }
    if let Ok(int) = trimmed.parse::<i64>() {
        return Value::Number(int.into());
    }
    if let Ok(uint) = trimmed.parse::<u64>() {
        return Value::Number(uint.into());
    }
    if let Ok(float) = trimmed.parse::<f64>()
        && float.is_finite()
    {
        return Value::Number(Number::from(float));
    }
    Value::String(raw.to_string())
}

/// Writes `value` at `segments`, creating sections as needed.
///
/// Callers must have run `resolve_existing` first, so every node on the way
/// is a mapping, null, or absent.
fn assign(root: &mut Value, segments: &[&str], value: Value) {
    let Some((leaf, sections)) = segments.split_last() else {
        return;
    };

    let mut node = root;
    for segment in sections {
        node = child_section(node, segment);
    }

    let map = ensure_mapping(node);
    let key = existing_key(map, leaf).unwrap_or_else(|| Value::String(leaf.to_lowercase()));
    map.insert(key, value);
}

fn child_section<'a>(node: &'a mut Value, segment: &str) -> &'a mut Value {
    let map = ensure_mapping(node);
    let key = existing_key(map, segment).unwrap_or_else(|| Value::String(segment.to_lowercase()));
    let child = map
        .entry(key)
        .or_insert_with(|| Value::Mapping(Mapping::new()));
    if child.is_null() {
        *child = Value::Mapping(Mapping::new());
    }
    child
}

fn ensure_mapping(node: &mut Value) -> &mut Mapping {
    if !node.is_mapping() {
        *node = Value::Mapping(Mapping::new());
    }
    match node {
        Value::Mapping(map) => map,
        _ => unreachable!("node was just replaced with a mapping"),
    }
}

fn existing_key(map: &Mapping, segment: &str) -> Option<Value> {
    map.keys().find(|k| key_matches(k, segment)).cloned()
}
