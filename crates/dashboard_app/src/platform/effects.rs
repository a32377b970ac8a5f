use std::path::PathBuf;
use std::sync::{mpsc, Arc};

use dashboard_core::{Effect, JobStatus, Location, Msg};
use dashboard_engine::{
    PollError, PollEvent, PollEventSink, PollSettings, PollerHandle, ReqwestStatusSource,
    StopReason,
};
use dashboard_logging::{dash_info, dash_warn};

use super::app::AppEvent;
use super::history::History;
use super::persistence;

/// Executes core effects against the outside world: navigation history,
/// address persistence and the status poller.
pub struct EffectRunner {
    history: History,
    state_dir: PathBuf,
    poller: Option<PollerHandle>,
}

impl EffectRunner {
    pub fn new(initial: Location, state_dir: PathBuf) -> Self {
        Self {
            history: History::new(initial),
            state_dir,
            poller: None,
        }
    }

    pub fn start_polling(
        &mut self,
        settings: PollSettings,
        tx: mpsc::Sender<AppEvent>,
    ) -> Result<(), PollError> {
        dash_info!(
            "Polling {} every {:?}",
            settings.endpoint,
            settings.interval
        );
        let source = Arc::new(ReqwestStatusSource::new(settings.clone())?);
        self.poller = Some(PollerHandle::spawn(
            source,
            settings,
            Box::new(MsgSink { tx }),
        ));
        Ok(())
    }

    pub fn run(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::Navigate { location } => {
                    dash_info!("Navigate {}", location);
                    self.history.push(location);
                    persistence::save_location(&self.state_dir, self.history.current());
                }
            }
        }
    }

    /// Walks history back; the caller feeds the result to the core.
    pub fn back(&mut self) -> Option<Location> {
        let location = self.history.back().cloned();
        self.persist_current();
        location
    }

    pub fn forward(&mut self) -> Option<Location> {
        let location = self.history.forward().cloned();
        self.persist_current();
        location
    }

    /// Navigation typed by the user rather than produced by the core.
    pub fn open(&mut self, location: Location) {
        self.run(vec![Effect::Navigate { location }]);
    }

    pub fn current_location(&self) -> &Location {
        self.history.current()
    }

    pub fn shutdown(&mut self) {
        if let Some(poller) = self.poller.take() {
            poller.stop();
        }
        self.persist_current();
    }

    fn persist_current(&self) {
        persistence::save_location(&self.state_dir, self.history.current());
    }
}

/// Forwards poller output to the app loop as core messages.
struct MsgSink {
    tx: mpsc::Sender<AppEvent>,
}

impl PollEventSink for MsgSink {
    fn emit(&self, event: PollEvent) -> bool {
        let msg = match event {
            PollEvent::Status(snapshot) => {
                Msg::StatusPolled(JobStatus::from_wire(&snapshot.job_status))
            }
            PollEvent::Failed(err) => Msg::PollFailed {
                reason: err.to_string(),
            },
            PollEvent::Stopped(reason) => {
                match reason {
                    StopReason::Terminal => dash_info!("Job reached a terminal status"),
                    StopReason::Cancelled => dash_info!("Polling cancelled"),
                    StopReason::Aborted => dash_warn!("Polling aborted"),
                }
                return true;
            }
        };
        self.tx.send(AppEvent::Core(msg)).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dashboard_engine::{PollFailure, StatusSnapshot};
    use tempfile::TempDir;

    #[test]
    fn navigate_pushes_history_and_persists() {
        let temp = TempDir::new().unwrap();
        let mut runner = EffectRunner::new(Location::parse("/r"), temp.path().to_path_buf());

        runner.run(vec![Effect::Navigate {
            location: Location::parse("/r?tab-metrics=import"),
        }]);

        assert_eq!(runner.current_location().href(), "/r?tab-metrics=import");
        assert_eq!(
            persistence::load_location(temp.path()),
            Some(Location::parse("/r?tab-metrics=import"))
        );
        assert_eq!(runner.back(), Some(Location::parse("/r")));
        assert_eq!(persistence::load_location(temp.path()), Some(Location::parse("/r")));
    }

    #[test]
    fn sink_maps_poll_events_to_messages() {
        let (tx, rx) = mpsc::channel();
        let sink = MsgSink { tx };

        assert!(sink.emit(PollEvent::Status(StatusSnapshot {
            job_status: "SUCCEEDED".to_string(),
            byte_len: 10,
        })));
        assert!(sink.emit(PollEvent::Failed(PollError::new(
            PollFailure::Timeout,
            "slow"
        ))));
        assert!(sink.emit(PollEvent::Stopped(StopReason::Terminal)));

        let received: Vec<_> = rx.try_iter().collect();
        assert_eq!(received.len(), 2);
        assert!(matches!(
            &received[0],
            AppEvent::Core(Msg::StatusPolled(JobStatus::Succeeded))
        ));
        assert!(matches!(
            &received[1],
            AppEvent::Core(Msg::PollFailed { reason }) if reason == "timeout: slow"
        ));
    }
}
