use super::keys::{step_index, MenuKey};
use crate::preferences::{PreferenceDefinition, PreferenceKind, PreferenceStore, BOOL_NO, BOOL_YES};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OverlayTransition {
    Continue,
    Committed { key: &'static str, value: String },
    Closed,
    Cancelled,
}

/// Draft editor for one preference at a time.
///
/// The buffer is never written to the store except by Enter; moving focus reloads it from
/// the store and drops the draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditOverlay {
    focus: usize,
    buffer: String,
}

impl EditOverlay {
    /// Returns `None` when the store has no preferences to edit.
    pub fn open(store: &PreferenceStore) -> Option<Self> {
        let first = store.definitions().first()?;
        Some(Self {
            focus: 0,
            buffer: store.get(first.key).to_string(),
        })
    }

    pub fn focus(&self) -> usize {
        self.focus
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    pub fn focused_definition<'a>(
        &self,
        store: &'a PreferenceStore,
    ) -> Option<&'a PreferenceDefinition> {
        store.definitions().get(self.focus)
    }

    pub fn handle_key(&mut self, key: MenuKey, store: &mut PreferenceStore) -> OverlayTransition {
        let Some(def) = store.definitions().get(self.focus) else {
            return OverlayTransition::Closed;
        };

        if let Some(step) = key.vertical_step() {
            let next = step_index(self.focus, step, store.definitions().len());
            if next != self.focus {
                self.focus = next;
                self.buffer = store.get(store.definitions()[next].key).to_string();
            }
            return OverlayTransition::Continue;
        }

        match key {
            MenuKey::Interrupt => OverlayTransition::Cancelled,
            MenuKey::Escape => OverlayTransition::Closed,
            MenuKey::Enter => {
                if self.buffer.is_empty() {
                    return OverlayTransition::Closed;
                }
                store.set(def.key, self.buffer.clone());
                OverlayTransition::Committed {
                    key: def.key,
                    value: self.buffer.clone(),
                }
            }
            _ => {
                match def.kind {
                    PreferenceKind::Boolean => self.edit_boolean(key),
                    PreferenceKind::Text => self.edit_text(key),
                }
                OverlayTransition::Continue
            }
        }
    }

    fn edit_boolean(&mut self, key: MenuKey) {
        match key {
            MenuKey::Char(' ') | MenuKey::Tab => {
                let next = if self.buffer == BOOL_YES {
                    BOOL_NO
                } else {
                    BOOL_YES
                };
                self.buffer = next.to_string();
            }
            MenuKey::Char('y') => self.buffer = BOOL_YES.to_string(),
            MenuKey::Char('n') => self.buffer = BOOL_NO.to_string(),
            _ => {}
        }
    }

    fn edit_text(&mut self, key: MenuKey) {
        if let Some(digit) = key.digit() {
            self.buffer.push(digit);
        } else if key == MenuKey::Backspace {
            self.buffer.pop();
        }
    }
}
