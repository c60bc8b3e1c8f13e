use super::list::{ListExit, ListSelector};
use super::view::{ordinal_rows, selection_line, MenuViewModel};
use super::{Menu, MenuExit, MenuKey};
use crate::preferences::PreferenceStore;

pub const LANGUAGE_TITLE: &str = "Select a language";
const LANGUAGE_HINT: &str = "↑/↓: navigate • [num]+enter: select • q: quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguagePicker {
    list: ListSelector,
}

impl LanguagePicker {
    pub fn new(languages: Vec<String>) -> Self {
        Self {
            list: ListSelector::new(languages),
        }
    }

    pub fn list(&self) -> &ListSelector {
        &self.list
    }
}

impl Menu for LanguagePicker {
    type Output = String;

    fn handle_key(
        &mut self,
        key: MenuKey,
        _prefs: &mut PreferenceStore,
    ) -> Option<MenuExit<String>> {
        match self.list.handle_key(key)? {
            ListExit::Selected(idx) => self
                .list
                .item(idx)
                .map(|name| MenuExit::Chosen(name.to_string())),
            ListExit::Cancelled => Some(MenuExit::Cancelled),
        }
    }

    fn view_model(&self, _prefs: &PreferenceStore) -> MenuViewModel {
        MenuViewModel {
            title: LANGUAGE_TITLE.to_string(),
            rows: ordinal_rows(&self.list, false),
            preferences: None,
            selection_line: selection_line(&self.list),
            error_line: self.list.error_message().map(str::to_string),
            hint: LANGUAGE_HINT.to_string(),
        }
    }
}
