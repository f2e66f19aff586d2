use super::{RunId, RunPhase};

/// Published state of the generation job. One live run at a time; a fresh
/// `Job` replaces the previous one when a new run is accepted.
///
/// Invariant: `current <= target`, and `current` only reflects durably
/// persisted records.
#[derive(Debug, Clone, PartialEq)]
pub struct Job {
    pub run_id: Option<RunId>,
    pub target: u64,
    pub current: u64,
    pub phase: RunPhase,
    pub last_error: Option<String>,
}

impl Job {
    pub fn idle() -> Self {
        Self {
            run_id: None,
            target: 0,
            current: 0,
            phase: RunPhase::Idle,
            last_error: None,
        }
    }

    pub fn started(run_id: RunId, target: u64) -> Self {
        Self {
            run_id: Some(run_id),
            target,
            current: 0,
            phase: RunPhase::Running,
            last_error: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.phase.is_active()
    }

    /// Fraction of the target committed so far; `0.0` before any run starts.
    pub fn progress_ratio(&self) -> f64 {
        if self.target == 0 {
            0.0
        } else {
            self.current as f64 / self.target as f64
        }
    }
}

impl Default for Job {
    fn default() -> Self {
        Self::idle()
    }
}
