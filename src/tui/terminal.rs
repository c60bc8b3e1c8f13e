use super::{draw_menu, MenuFrontend, TuiError};
use crate::menu::{Menu, MenuExit, MenuKey};
use crate::preferences::PreferenceStore;
use crossterm::cursor::{Hide, Show};
use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::{self, Stdout};
use std::time::Duration;

const INPUT_POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Raw mode + alternate screen for the lifetime of one menu.
///
/// Dropping without [`MenuTerminal::leave`] still restores the terminal, ignoring errors.
struct MenuTerminal {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    active: bool,
}

impl MenuTerminal {
    fn enter() -> Result<Self, TuiError> {
        enable_raw_mode().map_err(TuiError::RawMode)?;
        let mut stdout = io::stdout();
        if let Err(err) = execute!(stdout, EnterAlternateScreen, Hide) {
            let _ = disable_raw_mode();
            return Err(TuiError::EnterScreen(err));
        }
        let terminal = match Terminal::new(CrosstermBackend::new(stdout)) {
            Ok(terminal) => terminal,
            Err(err) => {
                restore_best_effort(&mut io::stdout());
                return Err(TuiError::Terminal(err));
            }
        };
        Ok(Self {
            terminal,
            active: true,
        })
    }

    fn leave(mut self) -> Result<(), TuiError> {
        self.active = false;
        disable_raw_mode().map_err(TuiError::LeaveScreen)?;
        execute!(self.terminal.backend_mut(), Show, LeaveAlternateScreen)
            .map_err(TuiError::LeaveScreen)
    }
}

impl Drop for MenuTerminal {
    fn drop(&mut self) {
        if self.active {
            restore_best_effort(self.terminal.backend_mut());
        }
    }
}

fn restore_best_effort<W: io::Write>(out: &mut W) {
    let _ = disable_raw_mode();
    let _ = execute!(out, Show, LeaveAlternateScreen);
}

#[derive(Debug, Default)]
pub struct TerminalFrontend;

impl TerminalFrontend {
    pub fn new() -> Self {
        Self
    }
}

fn run_menu_loop<M: Menu>(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    menu: &mut M,
    prefs: &mut PreferenceStore,
) -> Result<MenuExit<M::Output>, TuiError> {
    loop {
        let view = menu.view_model(prefs);
        terminal
            .draw(|frame| draw_menu(frame, &view))
            .map_err(TuiError::Render)?;
        if !event::poll(INPUT_POLL_INTERVAL).map_err(TuiError::Input)? {
            continue;
        }
        let Event::Key(key) = event::read().map_err(TuiError::Input)? else {
            continue;
        };
        let Some(key) = MenuKey::from_key_event(key) else {
            continue;
        };
        if let Some(exit) = menu.handle_key(key, prefs) {
            return Ok(exit);
        }
    }
}

impl MenuFrontend for TerminalFrontend {
    fn run_menu<M: Menu>(
        &mut self,
        menu: &mut M,
        prefs: &mut PreferenceStore,
    ) -> Result<MenuExit<M::Output>, TuiError> {
        let mut screen = MenuTerminal::enter()?;
        let result = run_menu_loop(&mut screen.terminal, menu, prefs);
        screen.leave()?;
        result
    }
}
