use crate::error::NeatResult;
use crate::ffnet::FFNet;

/// One candidate solution: an [`FFNet`] plus the evolutionary bookkeeping the
/// population and species registry need. A genome never mutates or evaluates
/// itself — all of that is driven externally by [`crate::population::Population`]
/// and [`crate::reproduction`].
#[derive(Debug, Clone)]
pub struct Genome {
    pub(crate) network: FFNet,
    pub(crate) fitness: f32,
    pub(crate) species_id: u64,
    pub(crate) ticks_alive: u64,
    pub(crate) times_mutated: u64,
}

impl Genome {
    pub(crate) fn new(network: FFNet) -> Self {
        Genome {
            network,
            fitness: 0.0,
            species_id: 0,
            ticks_alive: 0,
            times_mutated: 0,
        }
    }

    pub fn network(&self) -> &FFNet {
        &self.network
    }

    pub fn fitness(&self) -> f32 {
        self.fitness
    }

    pub fn species_id(&self) -> u64 {
        self.species_id
    }

    pub fn ticks_alive(&self) -> u64 {
        self.ticks_alive
    }

    pub fn times_mutated(&self) -> u64 {
        self.times_mutated
    }

    pub(crate) fn run(&mut self, inputs: &[f32]) -> NeatResult<&[f32]> {
        self.network.run(inputs)
    }

    pub(crate) fn set_fitness(&mut self, fitness: f32) {
        self.fitness = fitness;
    }

    pub(crate) fn increase_time_alive(&mut self) {
        self.ticks_alive += 1;
    }
}
