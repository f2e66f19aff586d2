use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::watch;
use tracing::Instrument;

use crate::application::ports::{TabFactory, TabStore};
use crate::domain::{Job, RunId, RunPhase, TabRecord};

/// Drives one generation run at a time: validates the requested target,
/// produces records in fixed-size batches, commits each batch through the
/// store, and publishes progress through a watch channel.
///
/// Cancellation is cooperative. The flag is checked once per batch, after the
/// commit, so an in-flight batch always lands fully and no commit is ever
/// torn.
pub struct GenerationController {
    store: Arc<dyn TabStore>,
    factory: Arc<dyn TabFactory>,
    batch_size: u64,
    state: watch::Sender<Job>,
    cancel_requested: Arc<AtomicBool>,
}

impl GenerationController {
    pub fn new(store: Arc<dyn TabStore>, factory: Arc<dyn TabFactory>, batch_size: usize) -> Self {
        assert!(batch_size > 0, "batch size must be positive");
        let (state, _) = watch::channel(Job::idle());
        Self {
            store,
            factory,
            batch_size: batch_size as u64,
            state,
            cancel_requested: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Accepts a run and returns immediately; progress is observed through
    /// [`subscribe`](Self::subscribe) or [`job`](Self::job), not the return
    /// value.
    pub fn start(&self, requested_count: &str) -> Result<RunId, StartError> {
        if self.state.borrow().is_running() {
            return Err(StartError::RunInProgress);
        }

        let Some(target) = parse_target(requested_count) else {
            tracing::warn!(input = requested_count, "Rejected generation request");
            self.state.send_if_modified(|job| {
                if job.is_running() {
                    return false;
                }
                job.last_error = Some("Invalid target tab count".to_string());
                true
            });
            return Err(StartError::InvalidTarget(requested_count.to_string()));
        };

        let run_id = RunId::new();
        let accepted = self.state.send_if_modified(|job| {
            if job.is_running() {
                return false;
            }
            self.cancel_requested.store(false, Ordering::SeqCst);
            *job = Job::started(run_id, target);
            true
        });
        if !accepted {
            return Err(StartError::RunInProgress);
        }

        let worker = BatchWorker {
            store: Arc::clone(&self.store),
            factory: Arc::clone(&self.factory),
            batch_size: self.batch_size,
            state: self.state.clone(),
            cancel_requested: Arc::clone(&self.cancel_requested),
        };
        let span = tracing::info_span!("generation_run", run_id = %run_id.as_uuid(), target);
        tokio::spawn(worker.run().instrument(span));

        Ok(run_id)
    }

    /// Requests termination of the active run. Idempotent and non-blocking;
    /// takes effect at the next batch boundary. The phase moves to `Stopping`
    /// right away so observers see that a stop is underway.
    pub fn cancel(&self) {
        self.cancel_requested.store(true, Ordering::SeqCst);
        self.state.send_if_modified(|job| {
            if job.phase == RunPhase::Running {
                job.phase = RunPhase::Stopping;
                true
            } else {
                false
            }
        });
    }

    /// Snapshot of the published job state.
    pub fn job(&self) -> Job {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<Job> {
        self.state.subscribe()
    }
}

fn parse_target(requested_count: &str) -> Option<u64> {
    match requested_count.trim().parse::<i64>() {
        Ok(n) if n > 0 => Some(n as u64),
        _ => None,
    }
}

struct BatchWorker {
    store: Arc<dyn TabStore>,
    factory: Arc<dyn TabFactory>,
    batch_size: u64,
    state: watch::Sender<Job>,
    cancel_requested: Arc<AtomicBool>,
}

impl BatchWorker {
    async fn run(self) {
        let initial_count = self.store.current_count().await;
        tracing::info!(initial_count, "Generation run started");

        loop {
            let (current, target, active) = {
                let job = self.state.borrow();
                (job.current, job.target, job.is_running())
            };

            if !active {
                break;
            }

            if current >= target {
                self.finish(RunPhase::Completed, None);
                tracing::info!(total = current, "Generation run completed");
                break;
            }

            let count = self.batch_size.min(target - current);
            let batch: Vec<TabRecord> = (current..current + count)
                .map(|index| self.factory.produce(index))
                .collect();

            self.store.append(&batch).await;
            if let Err(e) = self.store.persist().await {
                tracing::error!(error = %e, batch_start = current, "Batch persist failed");
                self.finish(RunPhase::Failed, Some(e.to_string()));
                break;
            }

            // Progress advances only once the batch is durable.
            self.state.send_modify(|job| job.current += count);
            tracing::debug!(current = current + count, target, "Batch committed");

            if self.cancel_requested.load(Ordering::SeqCst) {
                self.finish(RunPhase::Cancelled, None);
                tracing::info!(committed = current + count, "Generation run cancelled");
                break;
            }

            // Sole suspension point of the loop; cancel() and observers
            // interleave here, never mid-batch.
            tokio::task::yield_now().await;
        }
    }

    fn finish(&self, phase: RunPhase, error: Option<String>) {
        self.state.send_modify(|job| {
            job.phase = phase;
            if let Some(message) = &error {
                job.last_error = Some(message.clone());
            }
        });
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StartError {
    #[error("invalid target tab count: {0:?}")]
    InvalidTarget(String),
    #[error("a generation run is already in progress")]
    RunInProgress,
}
