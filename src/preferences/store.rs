use super::registry::{self, PreferenceDefinition};
use std::collections::BTreeMap;

const TRUTHY_VALUES: [&str; 3] = ["yes", "true", "1"];

/// Result of a best-effort integer read.
///
/// Unparsable values coerce to `value == 0` with `used_fallback == true`; callers that only
/// want the number use [`PreferenceStore::get_int`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntCoercion {
    pub value: i64,
    pub used_fallback: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreferenceStore {
    definitions: &'static [PreferenceDefinition],
    values: BTreeMap<&'static str, String>,
}

impl Default for PreferenceStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PreferenceStore {
    pub fn new() -> Self {
        Self::with_definitions(registry::definitions())
    }

    pub fn with_definitions(definitions: &'static [PreferenceDefinition]) -> Self {
        let values = definitions
            .iter()
            .map(|def| (def.key, def.default_value.to_string()))
            .collect();
        Self {
            definitions,
            values,
        }
    }

    pub fn definitions(&self) -> &'static [PreferenceDefinition] {
        self.definitions
    }

    pub fn get(&self, key: &str) -> &str {
        debug_assert!(
            self.values.contains_key(key),
            "preference `{key}` is not registered"
        );
        self.values.get(key).map(String::as_str).unwrap_or_default()
    }

    pub fn get_bool(&self, key: &str) -> bool {
        TRUTHY_VALUES.contains(&self.get(key))
    }

    pub fn get_int(&self, key: &str) -> i64 {
        self.coerce_int(key).value
    }

    pub fn coerce_int(&self, key: &str) -> IntCoercion {
        match self.get(key).parse::<i64>() {
            Ok(value) => IntCoercion {
                value,
                used_fallback: false,
            },
            Err(_) => IntCoercion {
                value: 0,
                used_fallback: true,
            },
        }
    }

    /// Overwrites without checking the value against the preference kind.
    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        let Some(def) = self.definitions.iter().find(|def| def.key == key) else {
            debug_assert!(false, "preference `{key}` is not registered");
            return;
        };
        self.values.insert(def.key, value.into());
    }

    pub fn entries(&self) -> impl Iterator<Item = (&'static PreferenceDefinition, &str)> + '_ {
        self.definitions
            .iter()
            .map(move |def| (def, self.get(def.key)))
    }

    pub fn summary(&self) -> String {
        self.entries()
            .map(|(def, value)| format!("{}={value}", def.key))
            .collect::<Vec<_>>()
            .join(",")
    }
}
