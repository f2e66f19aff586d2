use tabforge::domain::{Job, RunId, RunPhase};

#[test]
fn given_idle_job_then_progress_is_zero() {
    let job = Job::idle();

    assert_eq!(job.phase, RunPhase::Idle);
    assert!(!job.is_running());
    assert_eq!(job.progress_ratio(), 0.0);
    assert_eq!(job.run_id, None);
}

#[test]
fn given_started_job_then_counters_are_reset() {
    let run_id = RunId::new();
    let job = Job::started(run_id, 250);

    assert_eq!(job.run_id, Some(run_id));
    assert_eq!(job.target, 250);
    assert_eq!(job.current, 0);
    assert_eq!(job.phase, RunPhase::Running);
    assert!(job.is_running());
    assert_eq!(job.last_error, None);
    assert_eq!(job.progress_ratio(), 0.0);
}

#[test]
fn given_partial_progress_then_ratio_is_fractional() {
    let mut job = Job::started(RunId::new(), 250);
    job.current = 100;

    assert!((job.progress_ratio() - 0.4).abs() < 1e-9);
}

#[test]
fn given_stopping_job_then_it_still_counts_as_running() {
    let mut job = Job::started(RunId::new(), 10);
    job.phase = RunPhase::Stopping;

    assert!(job.is_running());
    assert!(!job.phase.is_terminal());
}
