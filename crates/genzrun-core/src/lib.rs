//! Core pipeline for templated Dakota sampling sweeps.
//!
//! A sweep renders a `dakota.in.template` with keyword substitutions
//! derived from a [`SweepConfig`], runs the external sampler inside a
//! scoped working directory with captured logs, and reduces the response
//! dataset of the resulting `dakota_results.h5` to its arithmetic mean.

pub mod config;
pub mod errors;
pub mod extract;
pub mod keywords;
pub mod pipeline;
pub mod runner;
pub mod template;

pub use config::SweepConfig;
pub use errors::{SweepError, SweepResult};
pub use pipeline::Pipeline;
pub use runner::ProcessRunner;
