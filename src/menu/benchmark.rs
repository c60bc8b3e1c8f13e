use super::list::{ListExit, ListSelector};
use super::overlay::{EditOverlay, OverlayTransition};
use super::view::{
    cursor_marker, ordinal_rows, selection_line, MenuRow, MenuViewModel, PreferencePanel,
    RowStyle, EDIT_CARET,
};
use super::{Menu, MenuExit, MenuKey};
use crate::preferences::{PreferenceKind, PreferenceStore};

pub const OPEN_PREFERENCES_KEY: char = 'p';

const SELECT_HINT: &str = "↑/↓: navigate • [num]+enter: select • p: preferences • q: quit";
const EDIT_BOOLEAN_HINT: &str = "↑/↓: navigate • space/y/n: toggle • enter: save • esc: cancel";
const EDIT_TEXT_HINT: &str = "↑/↓: navigate • enter: save • esc: cancel";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BenchmarkMode {
    Navigating,
    Editing(EditOverlay),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchmarkPicker {
    language: String,
    list: ListSelector,
    mode: BenchmarkMode,
    exit: Option<MenuExit<String>>,
}

impl BenchmarkPicker {
    pub fn new(language: impl Into<String>, benchmarks: Vec<String>) -> Self {
        Self {
            language: language.into(),
            list: ListSelector::new(benchmarks),
            mode: BenchmarkMode::Navigating,
            exit: None,
        }
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn list(&self) -> &ListSelector {
        &self.list
    }

    pub fn mode(&self) -> &BenchmarkMode {
        &self.mode
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.mode, BenchmarkMode::Editing(_))
    }

    fn handle_navigation(
        &mut self,
        key: MenuKey,
        prefs: &PreferenceStore,
    ) -> Option<MenuExit<String>> {
        if key == MenuKey::Char(OPEN_PREFERENCES_KEY) {
            self.list.clear_error();
            if let Some(overlay) = EditOverlay::open(prefs) {
                self.list.clear_numeric_buffer();
                self.mode = BenchmarkMode::Editing(overlay);
            }
            return None;
        }
        match self.list.handle_key(key)? {
            ListExit::Selected(idx) => self
                .list
                .item(idx)
                .map(|name| MenuExit::Chosen(name.to_string())),
            ListExit::Cancelled => Some(MenuExit::Cancelled),
        }
    }

    fn preference_panel(&self, prefs: &PreferenceStore) -> PreferencePanel {
        let editing = match &self.mode {
            BenchmarkMode::Editing(overlay) => Some(overlay),
            BenchmarkMode::Navigating => None,
        };
        let rows = prefs
            .entries()
            .enumerate()
            .map(|(idx, (def, value))| {
                let focused = editing.is_some_and(|overlay| overlay.focus() == idx);
                let mut row = match editing {
                    Some(overlay) if focused => MenuRow::new(
                        format!(
                            "{}{}: {}{EDIT_CARET}",
                            cursor_marker(true),
                            def.display_name,
                            overlay.buffer()
                        ),
                        RowStyle::Editing,
                    ),
                    _ => MenuRow::new(
                        format!("{}{}: {value}", cursor_marker(false), def.display_name),
                        RowStyle::Dimmed,
                    ),
                };
                if editing.is_some() && !def.description.is_empty() {
                    row.note = Some(format!("({})", def.description));
                }
                row
            })
            .collect();
        PreferencePanel {
            title: if editing.is_some() {
                "Preferences (editing)".to_string()
            } else {
                "Preferences".to_string()
            },
            active: editing.is_some(),
            rows,
        }
    }

    fn hint(&self, prefs: &PreferenceStore) -> &'static str {
        match &self.mode {
            BenchmarkMode::Navigating => SELECT_HINT,
            BenchmarkMode::Editing(overlay) => match overlay.focused_definition(prefs) {
                Some(def) if def.kind == PreferenceKind::Boolean => EDIT_BOOLEAN_HINT,
                _ => EDIT_TEXT_HINT,
            },
        }
    }
}

impl Menu for BenchmarkPicker {
    type Output = String;

    fn handle_key(
        &mut self,
        key: MenuKey,
        prefs: &mut PreferenceStore,
    ) -> Option<MenuExit<String>> {
        if self.exit.is_some() {
            return self.exit.clone();
        }
        let exit = if let BenchmarkMode::Editing(overlay) = &mut self.mode {
            let transition = overlay.handle_key(key, prefs);
            match transition {
                OverlayTransition::Continue => None,
                OverlayTransition::Committed { .. } | OverlayTransition::Closed => {
                    self.mode = BenchmarkMode::Navigating;
                    None
                }
                OverlayTransition::Cancelled => Some(MenuExit::Cancelled),
            }
        } else {
            self.handle_navigation(key, prefs)
        };
        self.exit = exit.clone();
        exit
    }

    fn view_model(&self, prefs: &PreferenceStore) -> MenuViewModel {
        let editing = self.is_editing();
        MenuViewModel {
            title: format!("Select a benchmark ({})", self.language),
            rows: ordinal_rows(&self.list, editing),
            preferences: Some(self.preference_panel(prefs)),
            selection_line: if editing {
                None
            } else {
                selection_line(&self.list)
            },
            error_line: self.list.error_message().map(str::to_string),
            hint: self.hint(prefs).to_string(),
        }
    }
}
