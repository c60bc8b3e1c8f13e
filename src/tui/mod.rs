pub mod render;
pub mod scripted;
pub mod terminal;

use crate::config::SCRIPT_KEYS_ENV;
use crate::menu::{Menu, MenuExit, MenuKey};
use crate::preferences::PreferenceStore;
use std::io::{self, IsTerminal};

pub use render::draw_menu;
pub use scripted::ScriptedFrontend;
pub use terminal::TerminalFrontend;

#[derive(Debug, thiserror::Error)]
pub enum TuiError {
    #[error("failed to enable raw mode: {0}")]
    RawMode(#[source] io::Error),
    #[error("failed to enter menu screen: {0}")]
    EnterScreen(#[source] io::Error),
    #[error("failed to leave menu screen: {0}")]
    LeaveScreen(#[source] io::Error),
    #[error("failed to create menu terminal: {0}")]
    Terminal(#[source] io::Error),
    #[error("failed to render menu: {0}")]
    Render(#[source] io::Error),
    #[error("failed to read menu input: {0}")]
    Input(#[source] io::Error),
    #[error("scripted keys ran out before `{title}` finished")]
    ScriptExhausted { title: String },
    #[error("an interactive terminal is required; set {SCRIPT_KEYS_ENV} to run without one")]
    NotInteractive,
}

pub trait MenuFrontend {
    fn run_menu<M: Menu>(
        &mut self,
        menu: &mut M,
        prefs: &mut PreferenceStore,
    ) -> Result<MenuExit<M::Output>, TuiError>;
}

/// `Pending` becomes a terminal front end when the first menu is shown, so sessions that end
/// before any menu never require a terminal.
pub enum Frontend {
    Pending,
    Terminal(TerminalFrontend),
    Scripted(ScriptedFrontend),
}

impl MenuFrontend for Frontend {
    fn run_menu<M: Menu>(
        &mut self,
        menu: &mut M,
        prefs: &mut PreferenceStore,
    ) -> Result<MenuExit<M::Output>, TuiError> {
        match self {
            Self::Pending => {
                if !is_interactive_terminal() {
                    return Err(TuiError::NotInteractive);
                }
                *self = Self::Terminal(TerminalFrontend::new());
                self.run_menu(menu, prefs)
            }
            Self::Terminal(frontend) => frontend.run_menu(menu, prefs),
            Self::Scripted(frontend) => frontend.run_menu(menu, prefs),
        }
    }
}

pub fn is_interactive_terminal() -> bool {
    io::stdin().is_terminal() && io::stdout().is_terminal()
}

pub fn select_frontend(scripted_keys: Option<Vec<MenuKey>>) -> Frontend {
    match scripted_keys {
        Some(keys) => Frontend::Scripted(ScriptedFrontend::new(keys)),
        None => Frontend::Pending,
    }
}
