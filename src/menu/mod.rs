pub mod benchmark;
pub mod keys;
pub mod language;
pub mod list;
pub mod next_action;
pub mod overlay;
pub mod view;

use crate::preferences::PreferenceStore;

pub use benchmark::{BenchmarkMode, BenchmarkPicker};
pub use keys::{parse_scripted_keys, MenuKey};
pub use language::LanguagePicker;
pub use list::{ListExit, ListSelector};
pub use next_action::{NextAction, NextActionPicker, NEXT_ACTION_OPTIONS};
pub use overlay::{EditOverlay, OverlayTransition};
pub use view::{MenuRow, MenuViewModel, PreferencePanel, RowStyle};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuExit<T> {
    Chosen(T),
    Cancelled,
}

/// A screen as a pure state machine: keys in, an optional terminal result out.
///
/// Rendering reads state through [`Menu::view_model`] and never mutates it.
pub trait Menu {
    type Output;

    fn handle_key(
        &mut self,
        key: MenuKey,
        prefs: &mut PreferenceStore,
    ) -> Option<MenuExit<Self::Output>>;

    fn view_model(&self, prefs: &PreferenceStore) -> MenuViewModel;
}
