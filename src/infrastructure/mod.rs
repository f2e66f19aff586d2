pub mod generation;
pub mod observability;
pub mod persistence;
