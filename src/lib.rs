//! NEAT over dense, layered, feed-forward networks.
//!
//! A [`Population`] owns a fixed-size set of [`Genome`]s, each wrapping one
//! [`FFNet`]. Callers drive evaluation and fitness assignment from the
//! outside and call [`Population::epoch`] to advance a generation; the crate
//! never schedules its own evaluation loop.

mod activation;
mod config;
mod error;
mod ffnet;
mod genome;
mod population;
mod reproduction;
mod species;

pub use activation::Activation;
pub use config::NeatConfig;
pub use error::{NeatError, NeatResult};
pub use ffnet::FFNet;
pub use genome::Genome;
pub use population::Population;
pub use species::{SpeciesRecord, SpeciesRegistry};
