use std::sync::{mpsc, Arc};
use std::thread;

use dashboard_logging::{dash_debug, dash_error, dash_info};
use tokio_util::sync::CancellationToken;

use crate::{PollEvent, PollSettings, StatusSource, StopReason};

/// Receives poller output. Returns `false` once nobody is listening anymore.
pub trait PollEventSink: Send + Sync {
    fn emit(&self, event: PollEvent) -> bool;
}

pub struct ChannelEventSink {
    tx: mpsc::Sender<PollEvent>,
}

impl ChannelEventSink {
    pub fn new(tx: mpsc::Sender<PollEvent>) -> Self {
        Self { tx }
    }
}

impl PollEventSink for ChannelEventSink {
    fn emit(&self, event: PollEvent) -> bool {
        self.tx.send(event).is_ok()
    }
}

/// Owns a background thread that polls a [`StatusSource`] on an interval
/// until a terminal status is seen. Dropping the handle stops polling.
pub struct PollerHandle {
    cancel: CancellationToken,
    thread: Option<thread::JoinHandle<()>>,
}

impl PollerHandle {
    pub fn spawn(
        source: Arc<dyn StatusSource>,
        settings: PollSettings,
        sink: Box<dyn PollEventSink>,
    ) -> Self {
        let cancel = CancellationToken::new();
        let token = cancel.clone();

        let thread = thread::spawn(move || {
            let runtime = match tokio::runtime::Runtime::new() {
                Ok(runtime) => runtime,
                Err(err) => {
                    dash_error!("failed to start poller runtime: {}", err);
                    sink.emit(PollEvent::Stopped(StopReason::Aborted));
                    return;
                }
            };
            let reason = runtime.block_on(poll_loop(
                source.as_ref(),
                &settings,
                sink.as_ref(),
                &token,
            ));
            dash_info!("status poller stopped: {:?}", reason);
            sink.emit(PollEvent::Stopped(reason));
        });

        Self {
            cancel,
            thread: Some(thread),
        }
    }

    pub fn stop(&self) {
        self.cancel.cancel();
    }
}

impl Drop for PollerHandle {
    fn drop(&mut self) {
        self.cancel.cancel();
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }
}

async fn poll_loop(
    source: &dyn StatusSource,
    settings: &PollSettings,
    sink: &dyn PollEventSink,
    cancel: &CancellationToken,
) -> StopReason {
    let mut round: u64 = 0;
    loop {
        round += 1;
        let result = tokio::select! {
            _ = cancel.cancelled() => return StopReason::Cancelled,
            result = source.fetch_status() => result,
        };

        match result {
            Ok(snapshot) => {
                dash_debug!("poll round {} returned {}", round, snapshot.job_status);
                let terminal = settings.is_terminal(&snapshot.job_status);
                if !sink.emit(PollEvent::Status(snapshot)) {
                    return StopReason::Aborted;
                }
                if terminal {
                    return StopReason::Terminal;
                }
            }
            Err(err) => {
                dash_debug!("poll round {} failed: {}", round, err);
                if !sink.emit(PollEvent::Failed(err)) {
                    return StopReason::Aborted;
                }
            }
        }

        tokio::select! {
            _ = cancel.cancelled() => return StopReason::Cancelled,
            _ = tokio::time::sleep(settings.interval) => {}
        }
    }
}
