mod generation_controller;

pub use generation_controller::{GenerationController, StartError};
