use crate::ffnet::FFNet;
use crate::genome::Genome;

/// One species: a cluster of genomes within compatibility distance of a
/// representative network. The representative is an owned snapshot, not a
/// reference back into the population — see the ownership note in
/// `DESIGN.md`.
#[derive(Debug, Clone)]
pub struct SpeciesRecord {
    pub id: u64,
    representative: FFNet,
    pub member_count: usize,
    pub mean_fitness: f32,
    pub generations_since_improvement: u64,
    created_epoch: u64,
}

/// Partitions a population into species by compatibility distance and tracks
/// per-species fitness statistics across epochs.
#[derive(Debug, Clone)]
pub struct SpeciesRegistry {
    species: Vec<SpeciesRecord>,
    next_id: u64,
    current_epoch: u64,
}

impl SpeciesRegistry {
    pub fn new() -> Self {
        SpeciesRegistry {
            species: Vec::new(),
            next_id: 1,
            current_epoch: 0,
        }
    }

    pub fn records(&self) -> &[SpeciesRecord] {
        &self.species
    }

    pub fn mean_fitness(&self, species_id: u64) -> Option<f32> {
        self.species
            .iter()
            .find(|s| s.id == species_id)
            .map(|s| s.mean_fitness)
    }

    /// True if `species_id` was created fewer than `minimum_time_before_replacement`
    /// epochs ago — the shelter new structures get from immediate replacement
    /// pressure.
    pub fn is_protected(&self, species_id: u64, minimum_time_before_replacement: u64) -> bool {
        self.species
            .iter()
            .find(|s| s.id == species_id)
            .map(|s| self.current_epoch.saturating_sub(s.created_epoch) < minimum_time_before_replacement)
            .unwrap_or(false)
    }

    /// Assigns every genome to a species (first compatible representative, in
    /// species-id order; unmatched genomes found a new species) and refreshes
    /// per-species member counts and mean-fitness statistics. Empty species are
    /// garbage-collected.
    #[tracing::instrument(skip(self, genomes), fields(population_size = genomes.len()))]
    pub fn speciate(&mut self, genomes: &mut [Genome], threshold: f32) {
        for genome in genomes.iter_mut() {
            let mut assigned = None;
            for species in self.species.iter() {
                let distance = genome.network().compatibility_distance(species.representative());
                if distance < threshold {
                    assigned = Some(species.id);
                    break;
                }
            }
            let species_id = assigned.unwrap_or_else(|| {
                let id = self.next_id;
                self.next_id += 1;
                self.species.push(SpeciesRecord {
                    id,
                    representative: genome.network().clone(),
                    member_count: 0,
                    mean_fitness: 0.0,
                    generations_since_improvement: 0,
                    created_epoch: self.current_epoch,
                });
                id
            });
            genome.species_id = species_id;
        }

        self.refresh_stats(genomes);
        self.species.retain(|s| s.member_count > 0);
    }

    fn refresh_stats(&mut self, genomes: &[Genome]) {
        for species in self.species.iter_mut() {
            let members: Vec<&Genome> = genomes.iter().filter(|g| g.species_id == species.id).collect();
            species.member_count = members.len();
            if members.is_empty() {
                continue;
            }

            let mean = members.iter().map(|g| g.fitness()).sum::<f32>() / members.len() as f32;
            if mean > species.mean_fitness {
                species.generations_since_improvement = 0;
            } else {
                species.generations_since_improvement += 1;
            }
            species.mean_fitness = mean;

            if let Some(best) = members
                .iter()
                .max_by(|a, b| {
                    a.fitness()
                        .partial_cmp(&b.fitness())
                        .unwrap_or(std::cmp::Ordering::Equal)
                })
            {
                species.representative = best.network().clone();
            }
        }
    }

    pub fn advance_epoch(&mut self) {
        self.current_epoch += 1;
    }
}

impl SpeciesRecord {
    pub fn representative(&self) -> &FFNet {
        &self.representative
    }
}

impl Default for SpeciesRegistry {
    fn default() -> Self {
        Self::new()
    }
}
