use super::list::{ListExit, ListSelector};
use super::view::{cursor_marker, selection_line, MenuRow, MenuViewModel, RowStyle};
use super::{Menu, MenuExit, MenuKey};
use crate::preferences::PreferenceStore;

const NEXT_ACTION_TITLE: &str = "What next?";
const NEXT_ACTION_HINT: &str = "↑/↓: navigate • [num]+enter: select • r/c/l/e/q: quick select";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NextAction {
    RunAnother,
    ChangeLanguage,
    Exit,
}

impl NextAction {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::RunAnother => "run_another",
            Self::ChangeLanguage => "change_language",
            Self::Exit => "exit",
        }
    }

    pub fn from_mnemonic(ch: char) -> Option<Self> {
        match ch {
            'r' => Some(Self::RunAnother),
            'c' | 'l' => Some(Self::ChangeLanguage),
            'q' | 'e' => Some(Self::Exit),
            _ => None,
        }
    }
}

pub struct NextActionOption {
    pub mnemonic: char,
    pub label: &'static str,
    pub action: NextAction,
}

pub const NEXT_ACTION_OPTIONS: [NextActionOption; 3] = [
    NextActionOption {
        mnemonic: 'r',
        label: "Run another benchmark (same language)",
        action: NextAction::RunAnother,
    },
    NextActionOption {
        mnemonic: 'c',
        label: "Change language",
        action: NextAction::ChangeLanguage,
    },
    NextActionOption {
        mnemonic: 'q',
        label: "Exit",
        action: NextAction::Exit,
    },
];

/// Post-run menu. It never reports [`MenuExit::Cancelled`]: every quit path means exit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NextActionPicker {
    list: ListSelector,
    chosen: Option<NextAction>,
}

impl Default for NextActionPicker {
    fn default() -> Self {
        Self::new()
    }
}

impl NextActionPicker {
    pub fn new() -> Self {
        Self {
            list: ListSelector::new(
                NEXT_ACTION_OPTIONS
                    .iter()
                    .map(|option| option.label.to_string())
                    .collect(),
            ),
            chosen: None,
        }
    }

    pub fn cursor(&self) -> usize {
        self.list.cursor()
    }

    fn choose(&mut self, action: NextAction) -> Option<MenuExit<NextAction>> {
        self.chosen = Some(action);
        Some(MenuExit::Chosen(action))
    }
}

impl Menu for NextActionPicker {
    type Output = NextAction;

    fn handle_key(
        &mut self,
        key: MenuKey,
        _prefs: &mut PreferenceStore,
    ) -> Option<MenuExit<NextAction>> {
        if let Some(action) = self.chosen {
            return Some(MenuExit::Chosen(action));
        }
        if let MenuKey::Char(ch) = key {
            if let Some(action) = NextAction::from_mnemonic(ch) {
                return self.choose(action);
            }
        }
        match self.list.handle_key(key)? {
            ListExit::Selected(idx) => {
                let action = NEXT_ACTION_OPTIONS
                    .get(idx)
                    .map_or(NextAction::Exit, |option| option.action);
                self.choose(action)
            }
            ListExit::Cancelled => self.choose(NextAction::Exit),
        }
    }

    fn view_model(&self, _prefs: &PreferenceStore) -> MenuViewModel {
        let rows = NEXT_ACTION_OPTIONS
            .iter()
            .enumerate()
            .map(|(idx, option)| {
                let active = idx == self.list.cursor();
                MenuRow::new(
                    format!(
                        "{}[{}] {}",
                        cursor_marker(active),
                        option.mnemonic,
                        option.label
                    ),
                    if active {
                        RowStyle::Selected
                    } else {
                        RowStyle::Normal
                    },
                )
            })
            .collect();
        MenuViewModel {
            title: NEXT_ACTION_TITLE.to_string(),
            rows,
            preferences: None,
            selection_line: selection_line(&self.list),
            error_line: self.list.error_message().map(str::to_string),
            hint: NEXT_ACTION_HINT.to_string(),
        }
    }
}
