use benchmark_runner::config::{load_settings, scripted_keys};
use benchmark_runner::discovery::Discovery;
use benchmark_runner::launcher::ScriptLauncher;
use benchmark_runner::session::{Session, SessionEnd, SessionOutput};
use benchmark_runner::shared::SessionLog;
use benchmark_runner::tui::select_frontend;
use std::io;

fn run() -> Result<SessionEnd, String> {
    let settings = load_settings().map_err(|err| err.to_string())?;
    let keys = scripted_keys(&settings).map_err(|err| err.to_string())?;
    let mut frontend = select_frontend(keys);
    let mut launcher = ScriptLauncher::from_settings(&settings);
    let mut session = Session::new(
        Discovery::from_settings(&settings),
        SessionLog::new(settings.log_path.clone()),
    );

    let mut stdout = io::stdout();
    let mut stderr = io::stderr();
    session
        .run(
            &mut frontend,
            &mut launcher,
            SessionOutput {
                messages: &mut stdout,
                errors: &mut stderr,
            },
        )
        .map_err(|err| err.to_string())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
