use rand::Rng;

use crate::config::NeatConfig;
use crate::ffnet::FFNet;
use crate::genome::Genome;
use crate::species::SpeciesRegistry;

/// Result of one reproduction call: a freshly synthesized network plus whether
/// a structural mutation (add-link or add-neuron) fired, which
/// [`crate::population::Population::epoch`] uses to decide whether to bump the
/// replacement slot's `times_mutated`.
pub struct Child {
    pub network: FFNet,
    pub structurally_mutated: bool,
}

enum Mode {
    Interspecies,
    SpeciesCrossover,
    Clone,
}

fn select_mode(config: &NeatConfig, rng: &mut impl Rng) -> Mode {
    if rng.gen::<f32>() < config.interspecies_crossover_probability {
        return Mode::Interspecies;
    }
    if config.speciate && rng.gen::<f32>() < config.species_crossover_probability {
        return Mode::SpeciesCrossover;
    }
    Mode::Clone
}

/// Picks an index from `candidates` weighted by each genome's fitness. Falls
/// back to a uniform pick when every candidate has non-positive fitness (e.g.
/// at generation zero, before any fitness has been reported).
fn fitness_proportional_pick(candidates: &[usize], genomes: &[Genome], rng: &mut impl Rng) -> usize {
    let total: f32 = candidates.iter().map(|&i| genomes[i].fitness().max(0.0)).sum();
    if total <= 0.0 {
        return candidates[rng.gen_range(0..candidates.len())];
    }
    let mut roll = rng.gen::<f32>() * total;
    for &idx in candidates {
        roll -= genomes[idx].fitness().max(0.0);
        if roll <= 0.0 {
            return idx;
        }
    }
    *candidates.last().unwrap()
}

/// Picks a species id weighted by mean fitness, falling back to a uniform pick
/// when every species has non-positive mean fitness.
fn species_weighted_pick(registry: &SpeciesRegistry, rng: &mut impl Rng) -> Option<u64> {
    let records = registry.records();
    if records.is_empty() {
        return None;
    }
    let total: f32 = records.iter().map(|s| s.mean_fitness.max(0.0)).sum();
    if total <= 0.0 {
        return Some(records[rng.gen_range(0..records.len())].id);
    }
    let mut roll = rng.gen::<f32>() * total;
    for record in records {
        roll -= record.mean_fitness.max(0.0);
        if roll <= 0.0 {
            return Some(record.id);
        }
    }
    records.last().map(|r| r.id)
}

fn uniform_pick(candidates: &[usize], rng: &mut impl Rng) -> usize {
    candidates[rng.gen_range(0..candidates.len())]
}

fn members_of(genomes: &[Genome], species_id: u64) -> Vec<usize> {
    genomes
        .iter()
        .enumerate()
        .filter(|(_, g)| g.species_id() == species_id)
        .map(|(i, _)| i)
        .collect()
}

/// Per-slot coin-flip crossover. The larger (by weight count) parent is the
/// backbone; every homologous slot, up to the smaller parent's length, is
/// coin-flipped between the two. Extra slots on the backbone are left as-is.
/// When both parents have identical weight counts this degenerates exactly to
/// a uniform 0.5-probability-per-slot crossover.
fn crossover(parent_a: &FFNet, parent_b: &FFNet, rng: &mut impl Rng) -> FFNet {
    let (backbone, other) = if parent_a.weight_count() >= parent_b.weight_count() {
        (parent_a, parent_b)
    } else {
        (parent_b, parent_a)
    };
    let mut child = backbone.clone();

    let shared_weights = other.weight_count();
    for i in 0..shared_weights {
        if rng.gen_bool(0.5) {
            child.weights_mut()[i] = other.weights()[i];
        }
    }

    let shared_activations = other.activation_count();
    for i in 0..shared_activations {
        if rng.gen_bool(0.5) {
            child.activations_mut()[i] = other.activations()[i];
        }
    }

    child
}

fn mutate_weights(child: &mut FFNet, config: &NeatConfig, rng: &mut impl Rng) {
    if rng.gen::<f32>() < config.genome_all_weights_mutation_probability {
        for w in child.weights_mut() {
            *w = rng.gen_range(-1.0..=1.0);
        }
    } else if rng.gen::<f32>() < config.genome_weight_mutation_probability {
        let idx = rng.gen_range(0..child.weight_count());
        child.weights_mut()[idx] = rng.gen_range(-1.0..=1.0);
    }
}

/// Applies add-link and add-neuron structural mutation, gated first by
/// `mutate_species_crossover_probability`. Only called for crossover-derived
/// children, never plain clones.
fn mutate_structure(child: &mut FFNet, config: &NeatConfig, rng: &mut impl Rng) -> bool {
    if rng.gen::<f32>() >= config.mutate_species_crossover_probability {
        return false;
    }

    let mut mutated = false;

    if rng.gen::<f32>() < config.genome_add_link_mutation_probability {
        let zero_non_bias: Vec<usize> = (0..child.weight_count())
            .filter(|&i| child.weights()[i] == 0.0 && !child.is_bias_weight_index(i))
            .collect();
        if let Some(&idx) = zero_non_bias.get(rng.gen_range(0..zero_non_bias.len().max(1))) {
            if !zero_non_bias.is_empty() {
                child.weights_mut()[idx] = rng.gen_range(-1.0..=1.0);
                mutated = true;
            }
        }
    }

    if rng.gen::<f32>() < config.genome_add_neuron_mutation_probability {
        child.insert_hidden_layer(1.0);
        mutated = true;
    }

    mutated
}

/// Synthesizes one child network: selects parents via the mode gate in
/// [`select_mode`], crosses them (or clones a single parent), then applies
/// weight and structural mutation.
#[tracing::instrument(skip(genomes, registry, config, rng), fields(population_size = genomes.len()))]
pub fn reproduce(
    genomes: &[Genome],
    registry: &SpeciesRegistry,
    config: &NeatConfig,
    rng: &mut impl Rng,
) -> Child {
    let all_indices: Vec<usize> = (0..genomes.len()).collect();

    let (mut child, came_from_crossover) = match select_mode(config, rng) {
        Mode::Interspecies => {
            let a = uniform_pick(&all_indices, rng);
            let b = uniform_pick(&all_indices, rng);
            (
                crossover(genomes[a].network(), genomes[b].network(), rng),
                true,
            )
        }
        Mode::SpeciesCrossover => match species_weighted_pick(registry, rng) {
            Some(species_id) => {
                let members = members_of(genomes, species_id);
                if members.len() >= 2 {
                    let a = fitness_proportional_pick(&members, genomes, rng);
                    let b = fitness_proportional_pick(&members, genomes, rng);
                    (
                        crossover(genomes[a].network(), genomes[b].network(), rng),
                        true,
                    )
                } else {
                    let a = fitness_proportional_pick(&all_indices, genomes, rng);
                    (genomes[a].network().clone(), false)
                }
            }
            None => {
                let a = fitness_proportional_pick(&all_indices, genomes, rng);
                (genomes[a].network().clone(), false)
            }
        },
        Mode::Clone => {
            let records = registry.records();
            let parent = if records.is_empty() {
                uniform_pick(&all_indices, rng)
            } else {
                let species_id = records[rng.gen_range(0..records.len())].id;
                let members = members_of(genomes, species_id);
                fitness_proportional_pick(&members, genomes, rng)
            };
            (genomes[parent].network().clone(), false)
        }
    };

    mutate_weights(&mut child, config, rng);
    let structurally_mutated = came_from_crossover && mutate_structure(&mut child, config, rng);

    Child {
        network: child,
        structurally_mutated,
    }
}
