pub mod registry;
pub mod store;

pub use registry::{
    definition, definitions, ordered_keys, PreferenceDefinition, PreferenceKind, BOOL_NO,
    BOOL_YES, MIN_RUNS, SAVE_RESULTS,
};
pub use store::{IntCoercion, PreferenceStore};
