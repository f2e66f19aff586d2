use std::str::FromStr;

use tabforge::domain::RunPhase;

const ALL_PHASES: [RunPhase; 6] = [
    RunPhase::Idle,
    RunPhase::Running,
    RunPhase::Stopping,
    RunPhase::Completed,
    RunPhase::Cancelled,
    RunPhase::Failed,
];

#[test]
fn given_any_phase_when_formatting_then_parsing_round_trips() {
    for phase in ALL_PHASES {
        assert_eq!(RunPhase::from_str(phase.as_str()), Ok(phase));
        assert_eq!(phase.to_string(), phase.as_str());
    }
}

#[test]
fn given_unknown_string_when_parsing_then_returns_error() {
    assert!(RunPhase::from_str("PAUSED").is_err());
    assert!(RunPhase::from_str("running").is_err());
}

#[test]
fn given_each_phase_then_active_and_terminal_are_disjoint() {
    for phase in ALL_PHASES {
        assert!(!(phase.is_active() && phase.is_terminal()), "{}", phase);
    }
    assert!(RunPhase::Running.is_active());
    assert!(RunPhase::Stopping.is_active());
    assert!(!RunPhase::Idle.is_active());
    assert!(RunPhase::Completed.is_terminal());
    assert!(RunPhase::Cancelled.is_terminal());
    assert!(RunPhase::Failed.is_terminal());
}
