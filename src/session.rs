use crate::discovery::{Discovery, DiscoveryError};
use crate::launcher::{BenchmarkLauncher, LaunchRequest};
use crate::menu::{BenchmarkPicker, LanguagePicker, MenuExit, NextAction, NextActionPicker};
use crate::preferences::{PreferenceStore, MIN_RUNS};
use crate::shared::SessionLog;
use crate::tui::{MenuFrontend, TuiError};
use std::io::{self, Write};

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("Error discovering languages: {0}")]
    Languages(#[source] DiscoveryError),
    #[error("Error discovering benchmarks: {0}")]
    Benchmarks(#[source] DiscoveryError),
    #[error(transparent)]
    Frontend(#[from] TuiError),
    #[error("failed to write session output: {0}")]
    Output(#[from] io::Error),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEnd {
    Quit,
    NoLanguages,
    NoBenchmarks { language: String },
}

impl SessionEnd {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Quit => "quit",
            Self::NoLanguages => "no_languages",
            Self::NoBenchmarks { .. } => "no_benchmarks",
        }
    }
}

/// Where user-facing session messages go. Failures of the benchmark itself use `errors`.
pub struct SessionOutput<'a> {
    pub messages: &'a mut dyn Write,
    pub errors: &'a mut dyn Write,
}

pub struct Session {
    discovery: Discovery,
    log: SessionLog,
    prefs: PreferenceStore,
}

impl Session {
    pub fn new(discovery: Discovery, log: SessionLog) -> Self {
        Self {
            discovery,
            log,
            prefs: PreferenceStore::new(),
        }
    }

    pub fn prefs(&self) -> &PreferenceStore {
        &self.prefs
    }

    pub fn run<F, L>(
        &mut self,
        frontend: &mut F,
        launcher: &mut L,
        output: SessionOutput<'_>,
    ) -> Result<SessionEnd, SessionError>
    where
        F: MenuFrontend,
        L: BenchmarkLauncher,
    {
        self.log.info(
            "session.start",
            &format!("root={}", self.discovery.root().display()),
        );
        let result = self.run_loop(frontend, launcher, output);
        match &result {
            Ok(end) => self.log.info(
                "session.end",
                &format!("reason={} prefs={}", end.as_str(), self.prefs.summary()),
            ),
            Err(err) => self.log.error("session.end", &err.to_string()),
        }
        result
    }

    fn run_loop<F, L>(
        &mut self,
        frontend: &mut F,
        launcher: &mut L,
        output: SessionOutput<'_>,
    ) -> Result<SessionEnd, SessionError>
    where
        F: MenuFrontend,
        L: BenchmarkLauncher,
    {
        let SessionOutput { messages, errors } = output;
        let languages = self
            .discovery
            .list_languages()
            .map_err(SessionError::Languages)?;
        if languages.is_empty() {
            writeln!(messages, "No language folders with benchmarks found.")?;
            return Ok(SessionEnd::NoLanguages);
        }

        let Some(mut language) = self.pick_language(frontend, &languages)? else {
            return Ok(SessionEnd::Quit);
        };

        loop {
            let benchmarks = self
                .discovery
                .list_benchmarks(&language)
                .map_err(SessionError::Benchmarks)?;
            if benchmarks.is_empty() {
                writeln!(messages, "No benchmarks found in {language}.")?;
                return Ok(SessionEnd::NoBenchmarks { language });
            }

            let mut picker = BenchmarkPicker::new(language.clone(), benchmarks);
            let benchmark = match frontend.run_menu(&mut picker, &mut self.prefs)? {
                MenuExit::Chosen(benchmark) => benchmark,
                MenuExit::Cancelled => return Ok(SessionEnd::Quit),
            };
            self.log.info(
                "benchmark.selected",
                &format!("{language}/{benchmark} prefs={}", self.prefs.summary()),
            );

            write!(
                messages,
                "\n🚀 Running benchmark: {language}/{benchmark} (min-runs: {})\n\n",
                self.prefs.get(MIN_RUNS)
            )?;
            messages.flush()?;
            self.log.info("benchmark.launch", &format!("{language}/{benchmark}"));
            let request = LaunchRequest {
                language: &language,
                benchmark: &benchmark,
                prefs: &self.prefs,
            };
            match launcher.launch(&request) {
                Ok(()) => self
                    .log
                    .info("benchmark.completed", &format!("{language}/{benchmark}")),
                Err(err) => {
                    writeln!(errors, "\n❌ Benchmark failed: {err}")?;
                    self.log.warn("benchmark.failed", &err.to_string());
                }
            }

            let mut next = NextActionPicker::new();
            match frontend.run_menu(&mut next, &mut self.prefs)? {
                MenuExit::Chosen(NextAction::RunAnother) => {}
                MenuExit::Chosen(NextAction::ChangeLanguage) => {
                    match self.pick_language(frontend, &languages)? {
                        Some(next_language) => language = next_language,
                        None => return Ok(SessionEnd::Quit),
                    }
                }
                MenuExit::Chosen(NextAction::Exit) | MenuExit::Cancelled => {
                    return Ok(SessionEnd::Quit)
                }
            }
        }
    }

    fn pick_language<F: MenuFrontend>(
        &mut self,
        frontend: &mut F,
        languages: &[String],
    ) -> Result<Option<String>, SessionError> {
        let mut picker = LanguagePicker::new(languages.to_vec());
        match frontend.run_menu(&mut picker, &mut self.prefs)? {
            MenuExit::Chosen(language) => {
                self.log.info("language.selected", &language);
                Ok(Some(language))
            }
            MenuExit::Cancelled => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::launcher::LaunchError;
    use crate::menu::MenuKey;
    use crate::preferences::SAVE_RESULTS;
    use crate::tui::ScriptedFrontend;
    use std::fs;
    use std::path::Path;
    use tempfile::tempdir;

    #[derive(Default)]
    struct RecordingLauncher {
        launches: Vec<(String, String, String, bool)>,
        fail: bool,
    }

    impl BenchmarkLauncher for RecordingLauncher {
        fn launch(&mut self, request: &LaunchRequest<'_>) -> Result<(), LaunchError> {
            self.launches.push((
                request.language.to_string(),
                request.benchmark.to_string(),
                request.prefs.get(MIN_RUNS).to_string(),
                request.prefs.get_bool(SAVE_RESULTS),
            ));
            if self.fail {
                return Err(LaunchError::Failed {
                    language: request.language.to_string(),
                    benchmark: request.benchmark.to_string(),
                    code: Some(3),
                });
            }
            Ok(())
        }
    }

    fn make_language(root: &Path, name: &str, benchmarks: &[&str]) {
        let dir = root.join(name);
        fs::create_dir_all(&dir).expect("language dir");
        fs::write(dir.join("run.sh"), "#!/bin/bash\n").expect("run.sh");
        for bench in benchmarks {
            fs::create_dir_all(dir.join(bench)).expect("benchmark dir");
        }
    }

    fn keys(raw: &str) -> Vec<MenuKey> {
        crate::menu::parse_scripted_keys(raw).expect("keys")
    }

    struct Captured {
        messages: Vec<u8>,
        errors: Vec<u8>,
    }

    fn run_session(
        root: &Path,
        log_path: Option<&Path>,
        frontend: &mut ScriptedFrontend,
        launcher: &mut RecordingLauncher,
    ) -> (Result<SessionEnd, SessionError>, Captured, Session) {
        let mut session = Session::new(
            Discovery::new(root, "run.sh", "benchmark_runner"),
            SessionLog::new(log_path.map(Path::to_path_buf)),
        );
        let mut captured = Captured {
            messages: Vec::new(),
            errors: Vec::new(),
        };
        let result = session.run(
            frontend,
            launcher,
            SessionOutput {
                messages: &mut captured.messages,
                errors: &mut captured.errors,
            },
        );
        (result, captured, session)
    }

    #[test]
    fn empty_root_prints_message_and_ends() {
        let dir = tempdir().expect("tempdir");
        let mut frontend = ScriptedFrontend::new(Vec::new());
        let mut launcher = RecordingLauncher::default();
        let (result, captured, _) = run_session(dir.path(), None, &mut frontend, &mut launcher);
        assert_eq!(result.expect("session"), SessionEnd::NoLanguages);
        assert_eq!(
            String::from_utf8_lossy(&captured.messages),
            "No language folders with benchmarks found.\n"
        );
        assert!(frontend.screens().is_empty());
    }

    #[test]
    fn missing_root_is_a_language_discovery_error() {
        let dir = tempdir().expect("tempdir");
        let mut frontend = ScriptedFrontend::new(Vec::new());
        let mut launcher = RecordingLauncher::default();
        let (result, _, _) = run_session(
            &dir.path().join("missing"),
            None,
            &mut frontend,
            &mut launcher,
        );
        let err = result.expect_err("missing root");
        assert!(matches!(err, SessionError::Languages(_)));
        assert!(err.to_string().starts_with("Error discovering languages:"));
    }

    #[test]
    fn language_without_benchmarks_ends_with_message() {
        let dir = tempdir().expect("tempdir");
        make_language(dir.path(), "go", &[]);
        let mut frontend = ScriptedFrontend::new(keys("enter"));
        let mut launcher = RecordingLauncher::default();
        let (result, captured, _) = run_session(dir.path(), None, &mut frontend, &mut launcher);
        assert_eq!(
            result.expect("session"),
            SessionEnd::NoBenchmarks {
                language: "go".to_string()
            }
        );
        assert_eq!(
            String::from_utf8_lossy(&captured.messages),
            "No benchmarks found in go.\n"
        );
    }

    #[test]
    fn quitting_the_language_menu_ends_quietly() {
        let dir = tempdir().expect("tempdir");
        make_language(dir.path(), "go", &["sort"]);
        let mut frontend = ScriptedFrontend::new(keys("q"));
        let mut launcher = RecordingLauncher::default();
        let (result, captured, _) = run_session(dir.path(), None, &mut frontend, &mut launcher);
        assert_eq!(result.expect("session"), SessionEnd::Quit);
        assert!(captured.messages.is_empty());
        assert!(launcher.launches.is_empty());
    }

    #[test]
    fn runs_benchmarks_and_keeps_preferences_across_languages() {
        let dir = tempdir().expect("tempdir");
        make_language(dir.path(), "go", &["json", "sort"]);
        make_language(dir.path(), "rust", &["alloc"]);
        let log_path = dir.path().join("logs/session.log");
        // rust/alloc with min_runs edited to 3005, run again, then go/sort, then exit.
        let mut frontend = ScriptedFrontend::new(keys(
            "2,enter,p,5,enter,1,enter,r,enter,c,1,enter,2,enter,e",
        ));
        let mut launcher = RecordingLauncher::default();
        let (result, captured, session) = run_session(
            dir.path(),
            Some(&log_path),
            &mut frontend,
            &mut launcher,
        );

        assert_eq!(result.expect("session"), SessionEnd::Quit);
        assert_eq!(frontend.remaining(), 0);
        assert_eq!(
            launcher.launches,
            vec![
                ("rust".into(), "alloc".into(), "3005".into(), true),
                ("rust".into(), "alloc".into(), "3005".into(), true),
                ("go".into(), "sort".into(), "3005".into(), true),
            ]
        );
        assert_eq!(session.prefs().get(MIN_RUNS), "3005");
        let messages = String::from_utf8_lossy(&captured.messages);
        assert!(messages.contains("🚀 Running benchmark: rust/alloc (min-runs: 3005)"));
        assert!(messages.contains("🚀 Running benchmark: go/sort (min-runs: 3005)"));
        assert!(captured.errors.is_empty());
        assert_eq!(
            frontend.screens(),
            [
                "Select a language",
                "Select a benchmark (rust)",
                "What next?",
                "Select a benchmark (rust)",
                "What next?",
                "Select a language",
                "Select a benchmark (go)",
                "What next?",
            ]
        );

        let log = fs::read_to_string(&log_path).expect("log");
        let events: Vec<String> = log
            .lines()
            .map(|line| {
                let value: serde_json::Value = serde_json::from_str(line).expect("json line");
                value["event"].as_str().unwrap_or_default().to_string()
            })
            .collect();
        assert_eq!(events.first().map(String::as_str), Some("session.start"));
        assert_eq!(events.last().map(String::as_str), Some("session.end"));
        assert_eq!(
            events.iter().filter(|e| *e == "benchmark.completed").count(),
            3
        );
        assert!(log.contains("reason=quit prefs=min_runs=3005,save_results=yes"));
    }

    #[test]
    fn failed_benchmark_is_reported_and_session_continues() {
        let dir = tempdir().expect("tempdir");
        make_language(dir.path(), "go", &["sort"]);
        let mut frontend = ScriptedFrontend::new(keys("enter,enter,q"));
        let mut launcher = RecordingLauncher {
            fail: true,
            ..RecordingLauncher::default()
        };
        let (result, captured, _) = run_session(dir.path(), None, &mut frontend, &mut launcher);
        assert_eq!(result.expect("session"), SessionEnd::Quit);
        assert_eq!(launcher.launches.len(), 1);
        assert_eq!(
            String::from_utf8_lossy(&captured.errors),
            "\n❌ Benchmark failed: go/sort exited with status 3\n"
        );
        assert_eq!(frontend.screens().last().map(String::as_str), Some("What next?"));
    }

    #[test]
    fn running_out_of_scripted_keys_is_an_error() {
        let dir = tempdir().expect("tempdir");
        make_language(dir.path(), "go", &["sort"]);
        let mut frontend = ScriptedFrontend::new(keys("enter"));
        let mut launcher = RecordingLauncher::default();
        let (result, _, _) = run_session(dir.path(), None, &mut frontend, &mut launcher);
        let err = result.expect_err("exhausted");
        assert!(matches!(
            err,
            SessionError::Frontend(TuiError::ScriptExhausted { .. })
        ));
    }
}
