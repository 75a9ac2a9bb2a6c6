//! Property-based tests for non-zero-wins merging and path overrides.
//!
//! Test coverage:
//! - merge_field: non-zero overlay values replace, zero overlay values never do
//! - DynamicConfig merge: same rule over scalar leaves of a YAML tree
//! - DynamicConfig overrides: an integer leaf always ends up at the override value

use proptest::prelude::*;
use serde_yaml::{Mapping, Value};

use strata_config::{DynamicConfig, IsZero, MergeableConfig, merge_field};

fn leaf_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        (-1000i64..1000).prop_map(Value::from),
        "[a-z]{0,8}".prop_map(Value::from),
    ]
}

fn section(pairs: &[(&str, Value)]) -> DynamicConfig {
    let mut map = Mapping::new();
    for (key, value) in pairs {
        map.insert(Value::from(*key), value.clone());
    }
    DynamicConfig::new(Value::Mapping(map))
}

proptest! {
    #[test]
    fn merge_field_u32_non_zero_wins(base in any::<u32>(), overlay in any::<u32>()) {
        let mut target = base;
        merge_field(&mut target, &overlay);
        if overlay == 0 {
            prop_assert_eq!(target, base);
        } else {
            prop_assert_eq!(target, overlay);
        }
    }

    #[test]
    fn merge_field_string_non_zero_wins(base in "[a-z]{0,12}", overlay in "[a-z]{0,12}") {
        let mut target = base.clone();
        merge_field(&mut target, &overlay);
        let expected = if overlay.is_empty() { base } else { overlay };
        prop_assert_eq!(target, expected);
    }

    #[test]
    fn dynamic_merge_non_zero_wins(
        base_host in leaf_strategy(),
        base_port in leaf_strategy(),
        next_host in leaf_strategy(),
        next_port in leaf_strategy(),
    ) {
        let mut config = section(&[("host", base_host.clone()), ("port", base_port.clone())]);
        let overlay = section(&[("host", next_host.clone()), ("port", next_port.clone())]);

        config.merge_with(&overlay).unwrap();

        let expected_host = if next_host.is_zero() { base_host } else { next_host };
        let expected_port = if next_port.is_zero() { base_port } else { next_port };
        prop_assert_eq!(config.get_path("host"), Some(&expected_host));
        prop_assert_eq!(config.get_path("port"), Some(&expected_port));
    }

    #[test]
    fn dynamic_integer_override_wins(base in -1000i64..1000, next in any::<i64>()) {
        let mut config = section(&[("port", Value::from(base))]);
        config.set_path_value("port", &next.to_string()).unwrap();
        prop_assert_eq!(config.get_path("port"), Some(&Value::from(next)));
    }
}
