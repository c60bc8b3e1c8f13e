use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

const SCRIPT_TOKENS_HINT: &str = "up,down,enter,esc,backspace,tab,space,ctrl-c or one character";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuKey {
    Up,
    Down,
    Enter,
    Backspace,
    Escape,
    Tab,
    Interrupt,
    Char(char),
}

impl MenuKey {
    pub fn from_key_event(key: KeyEvent) -> Option<Self> {
        if key.kind == KeyEventKind::Release {
            return None;
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('c') => Some(Self::Interrupt),
                _ => None,
            };
        }
        match key.code {
            KeyCode::Up => Some(Self::Up),
            KeyCode::Down => Some(Self::Down),
            KeyCode::Enter | KeyCode::Char('\n') | KeyCode::Char('\r') => Some(Self::Enter),
            KeyCode::Backspace => Some(Self::Backspace),
            KeyCode::Esc => Some(Self::Escape),
            KeyCode::Tab => Some(Self::Tab),
            KeyCode::Char(ch) => Some(Self::Char(ch)),
            _ => None,
        }
    }

    pub fn digit(self) -> Option<char> {
        match self {
            Self::Char(ch) if ch.is_ascii_digit() => Some(ch),
            _ => None,
        }
    }

    /// Up/Down including the `k`/`j` aliases.
    pub fn vertical_step(self) -> Option<Step> {
        match self {
            Self::Up | Self::Char('k') => Some(Step::Prev),
            Self::Down | Self::Char('j') => Some(Step::Next),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Prev,
    Next,
}

pub fn step_index(current: usize, step: Step, len: usize) -> usize {
    match step {
        Step::Prev => current.saturating_sub(1),
        Step::Next => std::cmp::min(current + 1, len.saturating_sub(1)),
    }
}

pub fn parse_scripted_keys(raw: &str) -> Result<Vec<MenuKey>, String> {
    let mut keys = Vec::new();
    for token in raw.split(',') {
        let trimmed = token.trim();
        if trimmed.is_empty() {
            continue;
        }
        let key = match trimmed.to_ascii_lowercase().as_str() {
            "up" => MenuKey::Up,
            "down" => MenuKey::Down,
            "enter" => MenuKey::Enter,
            "esc" => MenuKey::Escape,
            "backspace" => MenuKey::Backspace,
            "tab" => MenuKey::Tab,
            "space" => MenuKey::Char(' '),
            "ctrl-c" => MenuKey::Interrupt,
            _ => {
                let mut chars = trimmed.chars();
                match (chars.next(), chars.next()) {
                    (Some(ch), None) => MenuKey::Char(ch),
                    _ => {
                        return Err(format!(
                            "invalid scripted key token `{trimmed}`; valid tokens: {SCRIPT_TOKENS_HINT}"
                        ));
                    }
                }
            }
        };
        keys.push(key);
    }
    Ok(keys)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key_event(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn maps_navigation_and_editing_keys() {
        assert_eq!(MenuKey::from_key_event(key_event(KeyCode::Up)), Some(MenuKey::Up));
        assert_eq!(
            MenuKey::from_key_event(key_event(KeyCode::Down)),
            Some(MenuKey::Down)
        );
        assert_eq!(
            MenuKey::from_key_event(key_event(KeyCode::Enter)),
            Some(MenuKey::Enter)
        );
        assert_eq!(
            MenuKey::from_key_event(key_event(KeyCode::Esc)),
            Some(MenuKey::Escape)
        );
        assert_eq!(
            MenuKey::from_key_event(key_event(KeyCode::Char('7'))),
            Some(MenuKey::Char('7'))
        );
        assert_eq!(MenuKey::from_key_event(key_event(KeyCode::F(2))), None);
    }

    #[test]
    fn ctrl_c_is_interrupt_and_other_control_chords_are_ignored() {
        assert_eq!(
            MenuKey::from_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(MenuKey::Interrupt)
        );
        assert_eq!(
            MenuKey::from_key_event(KeyEvent::new(KeyCode::Char('p'), KeyModifiers::CONTROL)),
            None
        );
    }

    #[test]
    fn release_events_are_ignored() {
        let mut key = key_event(KeyCode::Enter);
        key.kind = KeyEventKind::Release;
        assert_eq!(MenuKey::from_key_event(key), None);
    }

    #[test]
    fn vim_aliases_step_vertically() {
        assert_eq!(MenuKey::Char('k').vertical_step(), Some(Step::Prev));
        assert_eq!(MenuKey::Char('j').vertical_step(), Some(Step::Next));
        assert_eq!(MenuKey::Char('x').vertical_step(), None);
    }

    #[test]
    fn step_index_clamps_at_both_ends() {
        assert_eq!(step_index(0, Step::Prev, 3), 0);
        assert_eq!(step_index(2, Step::Next, 3), 2);
        assert_eq!(step_index(1, Step::Next, 3), 2);
        assert_eq!(step_index(0, Step::Next, 0), 0);
    }

    #[test]
    fn parses_scripted_tokens_and_single_characters() {
        let keys = parse_scripted_keys("2, enter,,p,SPACE,ctrl-c,Esc,q").expect("parse keys");
        assert_eq!(
            keys,
            vec![
                MenuKey::Char('2'),
                MenuKey::Enter,
                MenuKey::Char('p'),
                MenuKey::Char(' '),
                MenuKey::Interrupt,
                MenuKey::Escape,
                MenuKey::Char('q'),
            ]
        );
    }

    #[test]
    fn rejects_unknown_multi_character_tokens() {
        let err = parse_scripted_keys("down,pageup").expect_err("unknown token");
        assert!(err.contains("`pageup`"), "{err}");
        assert!(err.contains("ctrl-c"), "{err}");
    }
}
