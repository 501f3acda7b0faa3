pub mod commands;
pub mod contracts;
pub mod error;
pub mod filter;
mod ingest;
pub mod records;
pub mod schedule;
pub mod seed;
pub mod summary;

pub use contracts::envelope::{FailureEnvelope, SuccessEnvelope};
pub use error::{EngineError, EngineResult};

pub const API_VERSION: &str = env!("CARGO_PKG_VERSION");
