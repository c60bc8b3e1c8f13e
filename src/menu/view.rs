use super::list::ListSelector;

pub const CURSOR_MARKER: &str = "> ";
pub const NO_CURSOR_MARKER: &str = "  ";
pub const EDIT_CARET: char = '█';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowStyle {
    Normal,
    Selected,
    Dimmed,
    Editing,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuRow {
    pub text: String,
    pub style: RowStyle,
    pub note: Option<String>,
}

impl MenuRow {
    pub fn new(text: String, style: RowStyle) -> Self {
        Self {
            text,
            style,
            note: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreferencePanel {
    pub title: String,
    pub active: bool,
    pub rows: Vec<MenuRow>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuViewModel {
    pub title: String,
    pub rows: Vec<MenuRow>,
    pub preferences: Option<PreferencePanel>,
    pub selection_line: Option<String>,
    pub error_line: Option<String>,
    pub hint: String,
}

pub fn cursor_marker(active: bool) -> &'static str {
    if active {
        CURSOR_MARKER
    } else {
        NO_CURSOR_MARKER
    }
}

/// Ordinal rows for a list; `dimmed` drops the cursor highlight entirely.
pub fn ordinal_rows(list: &ListSelector, dimmed: bool) -> Vec<MenuRow> {
    list.items()
        .iter()
        .enumerate()
        .map(|(idx, item)| {
            let on_cursor = !dimmed && idx == list.cursor();
            let style = match (dimmed, on_cursor) {
                (true, _) => RowStyle::Dimmed,
                (false, true) => RowStyle::Selected,
                (false, false) => RowStyle::Normal,
            };
            MenuRow::new(
                format!("{}{}. {item}", cursor_marker(on_cursor), idx + 1),
                style,
            )
        })
        .collect()
}

pub fn selection_line(list: &ListSelector) -> Option<String> {
    if list.numeric_buffer().is_empty() {
        None
    } else {
        Some(format!("Selection: {}", list.numeric_buffer()))
    }
}
