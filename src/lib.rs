pub mod cluster;
pub mod config;
pub mod errors;
pub mod index;
pub mod pipeline;
mod runner;
pub mod seq;
pub mod tools;
pub mod workdir;

use crate::errors::OgError;

pub fn run() -> Result<(), OgError> {
    runner::run()
}
