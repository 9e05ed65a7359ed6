use std::fs;
use std::io::{self, Read};
use std::path::Path;
use std::time::Duration;

use anyhow::{bail, Context};
use console::Term;
use form_core::{update, AppState, FilterName, Msg};
use form_engine::EngineHandle;
use form_logging::{form_info, form_warn};
use indicatif::{ProgressBar, ProgressStyle};

use super::cli::Cli;
use super::config::{self, AppConfig};
use super::effects::EffectRunner;
use super::ui;
use super::ui::prompts::Action;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

pub fn run_app(cli: Cli) -> anyhow::Result<()> {
    let config = match config::load(&cli.config) {
        Ok(config) => {
            form_logging::initialize(config.log_destination, config.log_level.into());
            config
        }
        Err(err) => {
            let config = AppConfig::default();
            form_logging::initialize(config.log_destination, config.log_level.into());
            form_warn!("{}; using defaults", err);
            eprintln!("Warning: {err}; using defaults");
            config
        }
    };

    let settings = config.post_settings();
    form_info!("Starting with endpoint {}", settings.endpoint);
    let engine = EngineHandle::new(settings).context("failed to start network runtime")?;
    let mut app = FormApp::new(AppState::with_title(config.default_title), engine);

    match cli.input {
        Some(path) => {
            let text = read_input(&path)?;
            app.run_once(text, cli.filters)
        }
        None => app.run_interactive(),
    }
}

fn read_input(path: &Path) -> anyhow::Result<String> {
    if path == Path::new("-") {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .context("failed to read JSON from stdin")?;
        return Ok(text);
    }
    fs::read_to_string(path).with_context(|| format!("failed to read JSON from {path:?}"))
}

struct FormApp {
    state: AppState,
    effects: EffectRunner,
    term: Term,
}

impl FormApp {
    fn new(state: AppState, engine: EngineHandle) -> Self {
        let effects = EffectRunner::new(engine);
        effects.set_title(state.title());
        Self {
            state,
            effects,
            term: Term::stdout(),
        }
    }

    fn dispatch(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;
        self.effects.enqueue(effects);
    }

    /// Block until the latest request resolves, showing a spinner meanwhile.
    fn wait_for_response(&mut self) -> anyhow::Result<()> {
        if self.state.in_flight().is_none() {
            return Ok(());
        }

        let spinner = ProgressBar::new_spinner();
        spinner.enable_steady_tick(POLL_INTERVAL);
        spinner.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
        spinner.set_message(ui::constants::PENDING_TEXT);

        while let Some(request_id) = self.state.in_flight() {
            if let Some(msg) = self.effects.next_msg(POLL_INTERVAL, Some(request_id)) {
                self.dispatch(msg);
            }
        }

        spinner.finish_and_clear();
        Ok(())
    }

    fn draw(&self) -> io::Result<()> {
        let view = self.state.view();
        self.term.clear_screen()?;
        for line in ui::render::render(&view) {
            self.term.write_line(&line)?;
        }
        self.term.write_line("")
    }

    fn run_interactive(&mut self) -> anyhow::Result<()> {
        loop {
            self.draw()?;
            let view = self.state.view();
            let Some(action) = ui::prompts::ask_action(&view)? else {
                break;
            };

            match action {
                Action::EditInput => {
                    if let Some(text) = ui::prompts::ask_input(self.state.input())? {
                        self.dispatch(Msg::InputChanged(text));
                    }
                }
                Action::Submit => {
                    self.dispatch(Msg::Submitted);
                    self.wait_for_response()?;
                }
                Action::ChooseFields => {
                    if let Some(selection) = ui::prompts::ask_filters(&view)? {
                        self.dispatch(Msg::SelectionChanged(Some(selection)));
                    }
                }
                Action::Quit => break,
            }
        }
        Ok(())
    }

    fn run_once(&mut self, text: String, filters: Vec<FilterName>) -> anyhow::Result<()> {
        self.dispatch(Msg::InputChanged(text));
        self.dispatch(Msg::SelectionChanged(Some(filters)));
        self.dispatch(Msg::Submitted);
        self.wait_for_response()?;

        let view = self.state.view();
        if let Some(message) = view.error_message {
            bail!(message);
        }
        for line in ui::render::render_response(&view) {
            self.term.write_line(&line)?;
        }
        Ok(())
    }
}
