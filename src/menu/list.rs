use super::keys::{step_index, MenuKey};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListExit {
    Selected(usize),
    Cancelled,
}

/// Cursor navigation plus numeric quick-select over a fixed list of labels.
///
/// Once a key produces a [`ListExit`] the selector is finished: further keys are not
/// processed and the same exit is reported again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListSelector {
    items: Vec<String>,
    cursor: usize,
    numeric_buffer: String,
    error_message: Option<String>,
    exit: Option<ListExit>,
}

impl ListSelector {
    pub fn new(items: Vec<String>) -> Self {
        Self {
            items,
            cursor: 0,
            numeric_buffer: String::new(),
            error_message: None,
            exit: None,
        }
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn item(&self, index: usize) -> Option<&str> {
        self.items.get(index).map(String::as_str)
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn numeric_buffer(&self) -> &str {
        &self.numeric_buffer
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn exit(&self) -> Option<ListExit> {
        self.exit
    }

    pub fn clear_numeric_buffer(&mut self) {
        self.numeric_buffer.clear();
    }

    pub fn clear_error(&mut self) {
        self.error_message = None;
    }

    pub fn handle_key(&mut self, key: MenuKey) -> Option<ListExit> {
        if self.exit.is_some() {
            return self.exit;
        }
        self.error_message = None;

        if matches!(key, MenuKey::Interrupt | MenuKey::Char('q')) {
            return self.finish(ListExit::Cancelled);
        }
        if let Some(step) = key.vertical_step() {
            self.numeric_buffer.clear();
            self.cursor = step_index(self.cursor, step, self.items.len());
            return None;
        }
        if let Some(digit) = key.digit() {
            self.numeric_buffer.push(digit);
            return None;
        }
        match key {
            MenuKey::Backspace => {
                self.numeric_buffer.pop();
                None
            }
            MenuKey::Escape => {
                self.numeric_buffer.clear();
                None
            }
            MenuKey::Enter => self.commit(),
            _ => None,
        }
    }

    fn commit(&mut self) -> Option<ListExit> {
        if self.numeric_buffer.is_empty() {
            if self.items.is_empty() {
                return None;
            }
            return self.finish(ListExit::Selected(self.cursor));
        }
        let count = self.items.len();
        match self.numeric_buffer.parse::<usize>() {
            Ok(ordinal) if (1..=count).contains(&ordinal) => {
                self.numeric_buffer.clear();
                self.finish(ListExit::Selected(ordinal - 1))
            }
            _ => {
                self.error_message = Some(format!(
                    "Invalid selection: {} (valid: 1-{count})",
                    self.numeric_buffer
                ));
                self.numeric_buffer.clear();
                None
            }
        }
    }

    fn finish(&mut self, exit: ListExit) -> Option<ListExit> {
        self.exit = Some(exit);
        self.exit
    }
}
