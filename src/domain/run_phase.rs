use std::fmt;
use std::str::FromStr;

/// Lifecycle of a generation run. `Stopping` means cancellation has been
/// requested but the in-flight batch has not yet reached its boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RunPhase {
    Idle,
    Running,
    Stopping,
    Completed,
    Cancelled,
    Failed,
}

impl RunPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            RunPhase::Idle => "IDLE",
            RunPhase::Running => "RUNNING",
            RunPhase::Stopping => "STOPPING",
            RunPhase::Completed => "COMPLETED",
            RunPhase::Cancelled => "CANCELLED",
            RunPhase::Failed => "FAILED",
        }
    }

    /// A run is active from `start` acceptance until a terminal phase.
    pub fn is_active(&self) -> bool {
        matches!(self, RunPhase::Running | RunPhase::Stopping)
    }

    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            RunPhase::Completed | RunPhase::Cancelled | RunPhase::Failed
        )
    }
}

impl FromStr for RunPhase {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "IDLE" => Ok(RunPhase::Idle),
            "RUNNING" => Ok(RunPhase::Running),
            "STOPPING" => Ok(RunPhase::Stopping),
            "COMPLETED" => Ok(RunPhase::Completed),
            "CANCELLED" => Ok(RunPhase::Cancelled),
            "FAILED" => Ok(RunPhase::Failed),
            _ => Err(format!("Invalid run phase: {}", s)),
        }
    }
}

impl fmt::Display for RunPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
