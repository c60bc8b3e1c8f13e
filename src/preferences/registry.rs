pub const MIN_RUNS: &str = "min_runs";
pub const SAVE_RESULTS: &str = "save_results";

pub const BOOL_YES: &str = "yes";
pub const BOOL_NO: &str = "no";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreferenceKind {
    Boolean,
    Text,
}

impl PreferenceKind {
    /// Classifies a bare default value: the yes/no tokens are boolean, everything else is text.
    pub fn infer_from_default(default_value: &str) -> Self {
        if default_value == BOOL_YES || default_value == BOOL_NO {
            Self::Boolean
        } else {
            Self::Text
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreferenceDefinition {
    pub key: &'static str,
    pub display_name: &'static str,
    pub description: &'static str,
    pub default_value: &'static str,
    pub kind: PreferenceKind,
}

// Slice order is the display and navigation order.
const PREFERENCE_DEFINITIONS: [PreferenceDefinition; 2] = [
    PreferenceDefinition {
        key: MIN_RUNS,
        display_name: "Minimum Runs",
        description: "Minimum number of benchmark iterations",
        default_value: "300",
        kind: PreferenceKind::Text,
    },
    PreferenceDefinition {
        key: SAVE_RESULTS,
        display_name: "Save Results",
        description: "Export to results.md (yes/no)",
        default_value: BOOL_YES,
        kind: PreferenceKind::Boolean,
    },
];

pub fn definitions() -> &'static [PreferenceDefinition] {
    &PREFERENCE_DEFINITIONS
}

pub fn ordered_keys() -> Vec<&'static str> {
    PREFERENCE_DEFINITIONS.iter().map(|def| def.key).collect()
}

pub fn definition(key: &str) -> Option<&'static PreferenceDefinition> {
    PREFERENCE_DEFINITIONS.iter().find(|def| def.key == key)
}
