mod cancel;
mod generate;
mod health;
mod status;

pub use cancel::cancel_handler;
pub use generate::generate_handler;
pub use health::health_handler;
pub use status::status_handler;
