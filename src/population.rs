use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::NeatConfig;
use crate::error::{NeatError, NeatResult};
use crate::ffnet::FFNet;
use crate::genome::Genome;
use crate::reproduction::reproduce;
use crate::species::SpeciesRegistry;

/// The full evolving pool: a fixed-size set of genomes, a species registry,
/// and the RNG reproduction draws from. Owns every network it manages --
/// callers interact with genomes only through index-addressed accessors,
/// never a direct `&mut Genome`.
pub struct Population {
    config: NeatConfig,
    genomes: Vec<Genome>,
    registry: SpeciesRegistry,
    rng: StdRng,
}

impl Population {
    /// Builds a population of `config.population_size` randomly initialized
    /// genomes, seeded from the OS entropy source.
    pub fn create(config: NeatConfig) -> NeatResult<Self> {
        Self::create_with_rng(config, StdRng::from_entropy())
    }

    /// Same as [`Population::create`] but with an explicit RNG, for
    /// reproducible runs (tests, benchmarks, replay).
    #[tracing::instrument(skip(rng), fields(population_size = config.population_size))]
    pub fn create_with_rng(config: NeatConfig, mut rng: StdRng) -> NeatResult<Self> {
        config.validate()?;

        let mut genomes = Vec::with_capacity(config.population_size);
        for _ in 0..config.population_size {
            let mut net = FFNet::new(
                config.network_inputs,
                config.network_hidden_nodes,
                config.network_outputs,
                config.network_hidden_layers,
            )?;
            net.randomize(&mut rng);
            genomes.push(Genome::new(net));
        }

        let mut registry = SpeciesRegistry::new();
        if config.speciate {
            registry.speciate(&mut genomes, config.genome_compatibility_threshold);
        }

        Ok(Population {
            config,
            genomes,
            registry,
            rng,
        })
    }

    pub fn population_size(&self) -> usize {
        self.genomes.len()
    }

    pub fn config(&self) -> &NeatConfig {
        &self.config
    }

    fn check_index(&self, index: usize) -> NeatResult<()> {
        if index >= self.genomes.len() {
            return Err(NeatError::IndexOutOfRange {
                index,
                population_size: self.genomes.len(),
            });
        }
        Ok(())
    }

    /// Runs genome `index`'s network forward on `inputs`.
    pub fn run(&mut self, index: usize, inputs: &[f32]) -> NeatResult<&[f32]> {
        self.check_index(index)?;
        self.genomes[index].run(inputs)
    }

    pub fn network(&self, index: usize) -> NeatResult<&FFNet> {
        self.check_index(index)?;
        Ok(self.genomes[index].network())
    }

    pub fn species_id(&self, index: usize) -> NeatResult<u64> {
        self.check_index(index)?;
        Ok(self.genomes[index].species_id())
    }

    pub fn fitness(&self, index: usize) -> NeatResult<f32> {
        self.check_index(index)?;
        Ok(self.genomes[index].fitness())
    }

    /// Records an external fitness evaluation for genome `index`. Fitness
    /// must be finite and non-negative -- the same constraint the
    /// fitness-proportional selection in [`crate::reproduction`] relies on.
    pub fn set_fitness(&mut self, index: usize, fitness: f32) -> NeatResult<()> {
        self.check_index(index)?;
        if !fitness.is_finite() || fitness < 0.0 {
            return Err(NeatError::NonFiniteFitness(fitness));
        }
        self.genomes[index].set_fitness(fitness);
        Ok(())
    }

    pub fn increase_time_alive(&mut self, index: usize) -> NeatResult<()> {
        self.check_index(index)?;
        self.genomes[index].increase_time_alive();
        Ok(())
    }

    /// Advances one generation: re-speciates, then replaces the single worst
    /// eligible genome with a freshly reproduced child.
    ///
    /// A genome is eligible for replacement only once it has accumulated at
    /// least `genome_minimum_ticks_alive` ticks and its species is not still
    /// within `minimum_time_before_replacement` epochs of having been
    /// founded. If no genome is eligible, the epoch still advances species
    /// bookkeeping but returns `None` -- nothing was replaced.
    #[tracing::instrument(skip(self), fields(population_size = self.genomes.len()))]
    pub fn epoch(&mut self) -> Option<usize> {
        if self.config.speciate {
            self.registry
                .speciate(&mut self.genomes, self.config.genome_compatibility_threshold);
        }

        let worst = self
            .genomes
            .iter()
            .enumerate()
            .filter(|(_, g)| g.ticks_alive() >= self.config.genome_minimum_ticks_alive)
            .filter(|(_, g)| {
                !self
                    .registry
                    .is_protected(g.species_id(), self.config.minimum_time_before_replacement)
            })
            .min_by(|(ia, a), (ib, b)| {
                a.fitness()
                    .partial_cmp(&b.fitness())
                    .unwrap_or(std::cmp::Ordering::Equal)
                    .then(ia.cmp(ib))
            })
            .map(|(idx, _)| idx)?;

        let child = reproduce(&self.genomes, &self.registry, &self.config, &mut self.rng);

        let mut replacement = Genome::new(child.network);
        if child.structurally_mutated {
            replacement.times_mutated = 1;
        }
        self.genomes[worst] = replacement;

        self.registry.advance_epoch();
        if self.config.speciate {
            self.registry
                .speciate(&mut self.genomes, self.config.genome_compatibility_threshold);
        }

        Some(worst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_config() -> NeatConfig {
        NeatConfig {
            network_inputs: 2,
            network_outputs: 1,
            network_hidden_nodes: 2,
            network_hidden_layers: 1,
            population_size: 10,
            genome_minimum_ticks_alive: 0,
            minimum_time_before_replacement: 0,
            ..NeatConfig::default()
        }
    }

    #[test]
    fn create_rejects_invalid_config() {
        let mut config = small_config();
        config.population_size = 0;
        assert!(Population::create(config).is_err());
    }

    #[test]
    fn fresh_population_has_requested_size() {
        let population = Population::create_with_rng(small_config(), StdRng::seed_from_u64(1)).unwrap();
        assert_eq!(population.population_size(), 10);
    }

    #[test]
    fn run_rejects_out_of_range_index() {
        let mut population = Population::create_with_rng(small_config(), StdRng::seed_from_u64(2)).unwrap();
        assert_eq!(
            population.run(50, &[0.0, 0.0]),
            Err(NeatError::IndexOutOfRange {
                index: 50,
                population_size: 10,
            })
        );
    }

    #[test]
    fn set_fitness_rejects_non_finite() {
        let mut population = Population::create_with_rng(small_config(), StdRng::seed_from_u64(3)).unwrap();
        assert!(population.set_fitness(0, f32::NAN).is_err());
        assert!(population.set_fitness(0, -1.0).is_err());
        assert!(population.set_fitness(0, 1.0).is_ok());
    }

    #[test]
    fn epoch_replaces_the_worst_eligible_genome() {
        let mut population = Population::create_with_rng(small_config(), StdRng::seed_from_u64(4)).unwrap();
        for i in 0..population.population_size() {
            population.set_fitness(i, i as f32).unwrap();
            population.increase_time_alive(i).unwrap();
        }
        let replaced = population.epoch();
        assert_eq!(replaced, Some(0));
        assert_eq!(population.fitness(0).unwrap(), 0.0);
    }

    #[test]
    fn epoch_returns_none_when_nothing_is_eligible() {
        let mut config = small_config();
        config.genome_minimum_ticks_alive = 100;
        let mut population = Population::create_with_rng(config, StdRng::seed_from_u64(5)).unwrap();
        assert_eq!(population.epoch(), None);
    }

    #[test]
    fn protected_species_is_skipped_for_replacement() {
        let mut config = small_config();
        config.minimum_time_before_replacement = 100;
        let mut population = Population::create_with_rng(config, StdRng::seed_from_u64(6)).unwrap();
        for i in 0..population.population_size() {
            population.increase_time_alive(i).unwrap();
        }
        assert_eq!(population.epoch(), None);
    }
}
