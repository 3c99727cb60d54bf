use serde::{Deserialize, Serialize};

use crate::error::{NeatError, NeatResult};

/// Recognized NEAT configuration options, copied by value into a [`crate::Population`]
/// at creation time — later mutation of the caller's original value has no effect.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NeatConfig {
    pub network_inputs: usize,
    pub network_outputs: usize,
    pub network_hidden_nodes: usize,
    pub network_hidden_layers: usize,

    pub population_size: usize,

    pub speciate: bool,
    pub species_crossover_probability: f32,
    pub interspecies_crossover_probability: f32,
    pub mutate_species_crossover_probability: f32,

    pub genome_add_neuron_mutation_probability: f32,
    pub genome_add_link_mutation_probability: f32,
    pub genome_weight_mutation_probability: f32,
    pub genome_all_weights_mutation_probability: f32,

    pub genome_minimum_ticks_alive: u64,
    pub minimum_time_before_replacement: u64,
    pub genome_compatibility_threshold: f32,
}

impl Default for NeatConfig {
    fn default() -> Self {
        NeatConfig {
            network_inputs: 1,
            network_outputs: 1,
            network_hidden_nodes: 1,
            network_hidden_layers: 1,

            population_size: 150,

            speciate: true,
            species_crossover_probability: 0.3,
            interspecies_crossover_probability: 0.1,
            mutate_species_crossover_probability: 0.5,

            genome_add_neuron_mutation_probability: 0.03,
            genome_add_link_mutation_probability: 0.05,
            genome_weight_mutation_probability: 0.8,
            genome_all_weights_mutation_probability: 0.1,

            genome_minimum_ticks_alive: 10,
            minimum_time_before_replacement: 10,
            genome_compatibility_threshold: 3.0,
        }
    }
}

impl NeatConfig {
    /// Validates the configuration, matching the "configuration invalidity" error
    /// taxonomy: zero inputs, zero outputs, zero population, or a non-positive
    /// compatibility threshold are all rejected before a population is built.
    pub fn validate(&self) -> NeatResult<()> {
        if self.network_inputs == 0 {
            return Err(NeatError::InvalidConfig("network_inputs must be non-zero"));
        }
        if self.network_outputs == 0 {
            return Err(NeatError::InvalidConfig("network_outputs must be non-zero"));
        }
        if self.network_hidden_layers > 0 && self.network_hidden_nodes == 0 {
            return Err(NeatError::InvalidConfig(
                "network_hidden_nodes must be non-zero when network_hidden_layers > 0",
            ));
        }
        if self.population_size == 0 {
            return Err(NeatError::InvalidConfig("population_size must be non-zero"));
        }
        if self.genome_compatibility_threshold <= 0.0 {
            return Err(NeatError::InvalidConfig(
                "genome_compatibility_threshold must be positive",
            ));
        }
        Ok(())
    }
}
