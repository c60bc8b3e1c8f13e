use super::{MenuFrontend, TuiError};
use crate::menu::{Menu, MenuExit, MenuKey};
use crate::preferences::PreferenceStore;
use std::collections::VecDeque;

/// Feeds a fixed key sequence to successive menus without touching the terminal.
#[derive(Debug, Clone, Default)]
pub struct ScriptedFrontend {
    keys: VecDeque<MenuKey>,
    screens: Vec<String>,
}

impl ScriptedFrontend {
    pub fn new(keys: impl IntoIterator<Item = MenuKey>) -> Self {
        Self {
            keys: keys.into_iter().collect(),
            screens: Vec::new(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.keys.len()
    }

    /// Titles of every menu shown so far, in order.
    pub fn screens(&self) -> &[String] {
        &self.screens
    }
}

impl MenuFrontend for ScriptedFrontend {
    fn run_menu<M: Menu>(
        &mut self,
        menu: &mut M,
        prefs: &mut PreferenceStore,
    ) -> Result<MenuExit<M::Output>, TuiError> {
        let title = menu.view_model(prefs).title;
        self.screens.push(title.clone());
        while let Some(key) = self.keys.pop_front() {
            if let Some(exit) = menu.handle_key(key, prefs) {
                return Ok(exit);
            }
        }
        Err(TuiError::ScriptExhausted { title })
    }
}
