mod job;
mod run_id;
mod run_phase;
mod tab_locator;
mod tab_record;

pub use job::Job;
pub use run_id::RunId;
pub use run_phase::RunPhase;
pub use tab_locator::TabLocator;
pub use tab_record::TabRecord;
