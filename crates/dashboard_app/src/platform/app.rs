use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::mpsc;

use anyhow::Context;
use dashboard_core::{update, DashboardState, Effect, JobStatus, Location, Msg};
use dashboard_logging::{dash_error, dash_info, dash_warn, set_render_pass};

use super::config::{DashboardConfig, DEFAULT_CONFIG_PATH};
use super::effects::EffectRunner;
use super::input::{self, Command, InputError};
use super::{logging, persistence, ui};

/// Everything the app loop reacts to.
#[derive(Debug)]
pub enum AppEvent {
    /// A message for the core, produced by the poller.
    Core(Msg),
    Input(Command),
    InputRejected(InputError),
}

enum Flow {
    Continue,
    Quit,
}

pub fn run_app() -> anyhow::Result<()> {
    let config_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));
    let config = DashboardConfig::load(&config_path)
        .with_context(|| format!("loading {}", config_path.display()))?;
    logging::initialize(config.log_destination);
    dash_info!("Starting dashboard with config {:?}", config_path);

    let location = persistence::load_location(&config.state_dir)
        .unwrap_or_else(|| config.initial_location());

    let (tx, rx) = mpsc::channel::<AppEvent>();
    let mut runner = EffectRunner::new(location.clone(), config.state_dir.clone());
    let mut startup_failure = None;
    match config.poll_settings() {
        Some(settings) => {
            if let Err(err) = runner.start_polling(settings, tx.clone()) {
                dash_error!("Could not start polling: {}", err);
                startup_failure = Some(err.to_string());
            }
        }
        None => dash_warn!("No model_uuid configured; polling disabled"),
    }
    input::spawn_reader(tx);

    let mut dashboard = Dashboard::new(location, runner, io::stdout());
    dashboard.print(input::HELP);
    match startup_failure {
        Some(reason) => dashboard.dispatch_msg(Msg::PollFailed { reason }),
        None => dashboard.render_if_dirty(),
    }

    for event in rx {
        if let Flow::Quit = dashboard.handle_event(event) {
            break;
        }
    }

    dashboard.shutdown();
    Ok(())
}

struct Dashboard<W: Write> {
    state: DashboardState,
    runner: EffectRunner,
    out: W,
    render_pass: u64,
}

impl<W: Write> Dashboard<W> {
    fn new(location: Location, runner: EffectRunner, out: W) -> Self {
        Self {
            state: DashboardState::new(location),
            runner,
            out,
            render_pass: 0,
        }
    }

    fn handle_event(&mut self, event: AppEvent) -> Flow {
        match event {
            AppEvent::Core(msg) => self.dispatch_msg(msg),
            AppEvent::Input(Command::Tab(key)) => self.dispatch_msg(Msg::TabChanged(key)),
            AppEvent::Input(Command::Open(href)) => {
                let location = Location::parse(&href);
                if &location == self.state.location() {
                    self.print("already there");
                } else {
                    self.runner.open(location.clone());
                    self.dispatch_msg(Msg::LocationChanged(location));
                }
            }
            AppEvent::Input(Command::Back) => match self.runner.back() {
                Some(location) => self.dispatch_msg(Msg::LocationChanged(location)),
                None => self.print("already at the oldest entry"),
            },
            AppEvent::Input(Command::Forward) => match self.runner.forward() {
                Some(location) => self.dispatch_msg(Msg::LocationChanged(location)),
                None => self.print("already at the newest entry"),
            },
            AppEvent::Input(Command::Status(raw)) => {
                self.dispatch_msg(Msg::StatusPolled(JobStatus::from_wire(&raw)))
            }
            AppEvent::Input(Command::Help) => self.print(input::HELP),
            AppEvent::Input(Command::Quit) => return Flow::Quit,
            AppEvent::InputRejected(err) => self.print(&err.to_string()),
        }
        Flow::Continue
    }

    fn dispatch_msg(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;
        self.run_effects(effects);
        self.render_if_dirty();
    }

    fn run_effects(&mut self, effects: Vec<Effect>) {
        if !effects.is_empty() {
            self.runner.run(effects);
        }
    }

    fn render_if_dirty(&mut self) {
        if !self.state.consume_dirty() {
            return;
        }
        self.render_pass += 1;
        set_render_pass(self.render_pass);

        let view = self.state.view();
        for line in ui::render::render(&view, ui::subviews::build) {
            self.print(&line);
        }
    }

    fn print(&mut self, line: &str) {
        if let Err(err) = writeln!(self.out, "{line}") {
            dash_warn!("Failed to write to terminal: {}", err);
        }
    }

    fn shutdown(&mut self) {
        dash_info!(
            "Shutting down at {} with status {:?}",
            self.runner.current_location(),
            self.state.job_status()
        );
        self.runner.shutdown();
        let _ = self.out.flush();
    }
}
