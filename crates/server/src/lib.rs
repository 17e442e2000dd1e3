pub mod routes;
pub mod startup;
pub mod errors;
pub mod openapi;
pub mod state;

pub use startup::{run, run_with_config};
