//! Background request execution
//!
//! Runs one blocking API call on a spawned thread and reports its single
//! result over an mpsc channel, polled from the Tick action. While a request
//! is pending the runner is busy, which is what disables the submit control.

use crate::model::{ApiStatus, PredictionResponse};
use crate::services::api::ApiError;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;
use std::time::Instant;

/// Terminal result of a background API call
#[derive(Debug)]
pub enum ApiEvent {
    Health(ApiStatus),
    Prediction(Result<PredictionResponse, ApiError>),
}

/// What the pending request was for, so a dead worker can still be reported
/// on the right surface: health failures only ever move the pill.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    Health,
    Prediction,
}

struct PendingRequest {
    kind: RequestKind,
    receiver: Receiver<ApiEvent>,
    started: Instant,
}

/// Runner for at most one in-flight request
#[derive(Default)]
pub struct RequestRunner {
    pending: Option<PendingRequest>,
}

impl RequestRunner {
    pub fn new() -> Self {
        Self { pending: None }
    }

    pub fn is_busy(&self) -> bool {
        self.pending.is_some()
    }

    /// Seconds the current request has been running, if any.
    pub fn elapsed_secs(&self) -> Option<f64> {
        self.pending
            .as_ref()
            .map(|p| p.started.elapsed().as_secs_f64())
    }

    /// Spawn `work` on a background thread. Ignored if already busy; the
    /// caller is expected to check `is_busy` first.
    pub fn spawn<F>(&mut self, kind: RequestKind, work: F)
    where
        F: FnOnce() -> ApiEvent + Send + 'static,
    {
        if self.pending.is_some() {
            return;
        }

        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            let _ = tx.send(work());
        });

        self.pending = Some(PendingRequest {
            kind,
            receiver: rx,
            started: Instant::now(),
        });
    }

    /// Poll for the result. Returns it at most once, after which the runner
    /// is idle again. A disconnected channel (worker panicked) also frees
    /// the runner.
    pub fn poll(&mut self) -> Option<ApiEvent> {
        let pending = self.pending.as_ref()?;

        match pending.receiver.try_recv() {
            Ok(event) => {
                self.pending = None;
                Some(event)
            }
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                let kind = pending.kind;
                self.pending = None;
                Some(match kind {
                    RequestKind::Health => ApiEvent::Health(ApiStatus::Offline),
                    RequestKind::Prediction => ApiEvent::Prediction(Err(ApiError::Network(
                        "the request worker stopped unexpectedly".to_string(),
                    ))),
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_runner_reports_result_once() {
        let mut runner = RequestRunner::new();
        assert!(!runner.is_busy());

        runner.spawn(RequestKind::Health, || ApiEvent::Health(ApiStatus::Online));
        assert!(runner.is_busy());

        // The worker thread is near-instant, but give it a moment.
        let mut event = None;
        for _ in 0..50 {
            event = runner.poll();
            if event.is_some() {
                break;
            }
            thread::sleep(Duration::from_millis(10));
        }

        match event {
            Some(ApiEvent::Health(status)) => assert_eq!(status, ApiStatus::Online),
            other => panic!("unexpected event: {:?}", other),
        }
        assert!(!runner.is_busy());
        assert!(runner.poll().is_none());
    }

    #[test]
    fn test_spawn_while_busy_is_ignored() {
        let mut runner = RequestRunner::new();
        let (_keep_alive_tx, keep_alive_rx) = mpsc::channel::<()>();

        runner.spawn(RequestKind::Health, move || {
            // Block until the test drops the sender.
            let _ = keep_alive_rx.recv();
            ApiEvent::Health(ApiStatus::Offline)
        });
        assert!(runner.is_busy());

        runner.spawn(RequestKind::Health, || ApiEvent::Health(ApiStatus::Online));
        assert!(runner.is_busy());
        assert!(runner.poll().is_none());
    }

    #[test]
    fn test_dead_health_worker_degrades_instead_of_erroring() {
        let mut runner = RequestRunner::new();
        runner.spawn(RequestKind::Health, || panic!("worker died"));

        let mut event = None;
        for _ in 0..50 {
            event = runner.poll();
            if event.is_some() {
                break;
            }
            thread::sleep(Duration::from_millis(10));
        }

        match event {
            Some(ApiEvent::Health(status)) => assert_eq!(status, ApiStatus::Offline),
            other => panic!("unexpected event: {:?}", other),
        }
        assert!(!runner.is_busy());
    }

    #[test]
    fn test_dead_prediction_worker_reports_an_error() {
        let mut runner = RequestRunner::new();
        runner.spawn(RequestKind::Prediction, || panic!("worker died"));

        let mut event = None;
        for _ in 0..50 {
            event = runner.poll();
            if event.is_some() {
                break;
            }
            thread::sleep(Duration::from_millis(10));
        }

        match event {
            Some(ApiEvent::Prediction(Err(ApiError::Network(message)))) => {
                assert!(message.contains("stopped unexpectedly"));
            }
            other => panic!("unexpected event: {:?}", other),
        }
    }
}
