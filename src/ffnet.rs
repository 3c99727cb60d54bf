use rand::Rng;

use crate::activation::Activation;
use crate::error::{NeatError, NeatResult};

/// Layout metadata for one downstream layer (a hidden layer or the output layer).
///
/// `weight_offset` and `activation_offset` are prefix sums recomputed whenever the
/// topology changes (currently only by [`FFNet::insert_hidden_layer`]).
#[derive(Debug, Clone, Copy, PartialEq)]
struct LayerMeta {
    width: usize,
    prev_width: usize,
    weight_offset: usize,
    activation_offset: usize,
}

/// A fixed-topology, dense, layered feed-forward network.
///
/// Three contiguous arrays back every network: `weights` (layer-major, then
/// receiving-neuron-major, then source-slot-major with the bias slot first),
/// `outputs` (last-computed activation of every neuron including inputs), and
/// `activations` (one activation tag per non-input neuron). See the weight
/// layout invariant this crate relies on at `src/ffnet.rs` module level — it is
/// exercised directly by [`FFNet::neuron_is_connected`] and by reproduction's
/// positional crossover.
#[derive(Debug, Clone, PartialEq)]
pub struct FFNet {
    nin: usize,
    nhid: usize,
    nout: usize,
    nhlayers: usize,

    weights: Vec<f32>,
    outputs: Vec<f32>,
    activations: Vec<Activation>,

    bias: f32,
    default_hidden_activation: Activation,
    default_output_activation: Activation,

    layers: Vec<LayerMeta>,
}

fn build_layers(nin: usize, nhid: usize, nout: usize, nhlayers: usize) -> Vec<LayerMeta> {
    let mut layers = Vec::with_capacity(nhlayers + 1);
    let mut prev_width = nin;
    let mut weight_offset = 0;
    let mut activation_offset = 0;
    for layer_idx in 0..=nhlayers {
        let width = if layer_idx < nhlayers { nhid } else { nout };
        layers.push(LayerMeta {
            width,
            prev_width,
            weight_offset,
            activation_offset,
        });
        weight_offset += width * (prev_width + 1);
        activation_offset += width;
        prev_width = width;
    }
    layers
}

impl FFNet {
    /// Allocates and zeroes a new network. Activation tags default to `Sigmoid`,
    /// bias defaults to `1.0`, weights start at zero.
    pub fn new(nin: usize, nhid: usize, nout: usize, nhlayers: usize) -> NeatResult<Self> {
        if nin == 0 {
            return Err(NeatError::InvalidConfig("nin must be non-zero"));
        }
        if nout == 0 {
            return Err(NeatError::InvalidConfig("nout must be non-zero"));
        }
        if nhlayers > 0 && nhid == 0 {
            return Err(NeatError::InvalidConfig(
                "nhid must be non-zero when nhlayers > 0",
            ));
        }

        let layers = build_layers(nin, nhid, nout, nhlayers);
        let total_weights = layers
            .last()
            .map(|l| l.weight_offset + l.width * (l.prev_width + 1))
            .unwrap_or(0);
        let total_activations = layers
            .last()
            .map(|l| l.activation_offset + l.width)
            .unwrap_or(0);
        let neuron_count = nin + total_activations;

        Ok(FFNet {
            nin,
            nhid,
            nout,
            nhlayers,
            weights: vec![0.0; total_weights],
            outputs: vec![0.0; neuron_count],
            activations: vec![Activation::Sigmoid; total_activations],
            bias: 1.0,
            default_hidden_activation: Activation::Sigmoid,
            default_output_activation: Activation::Sigmoid,
            layers,
        })
    }

    pub fn input_count(&self) -> usize {
        self.nin
    }

    pub fn hidden_width(&self) -> usize {
        self.nhid
    }

    pub fn output_count(&self) -> usize {
        self.nout
    }

    pub fn hidden_layer_count(&self) -> usize {
        self.nhlayers
    }

    pub fn weight_count(&self) -> usize {
        self.weights.len()
    }

    pub fn neuron_count(&self) -> usize {
        self.outputs.len()
    }

    pub fn activation_count(&self) -> usize {
        self.activations.len()
    }

    pub fn weights(&self) -> &[f32] {
        &self.weights
    }

    pub fn weights_mut(&mut self) -> &mut [f32] {
        &mut self.weights
    }

    pub fn activations(&self) -> &[Activation] {
        &self.activations
    }

    pub fn activations_mut(&mut self) -> &mut [Activation] {
        &mut self.activations
    }

    pub fn bias(&self) -> f32 {
        self.bias
    }

    /// Bulk-assigns every weight to `v`.
    pub fn set_all_weights(&mut self, v: f32) {
        self.weights.iter_mut().for_each(|w| *w = v);
    }

    /// Replaces the full weight array. Fails if `weights.len()` doesn't match
    /// [`FFNet::weight_count`].
    pub fn set_weights(&mut self, weights: &[f32]) -> NeatResult<()> {
        if weights.len() != self.weights.len() {
            return Err(NeatError::InvalidConfig(
                "weight slice length does not match network weight count",
            ));
        }
        self.weights.copy_from_slice(weights);
        Ok(())
    }

    pub fn set_bias(&mut self, bias: f32) {
        self.bias = bias;
    }

    /// Bulk-assigns the activation tag used for every hidden and every output
    /// neuron, and records the defaults used to stamp neurons created later by
    /// [`FFNet::insert_hidden_layer`].
    pub fn set_activations(&mut self, hidden: Activation, output: Activation) {
        self.default_hidden_activation = hidden;
        self.default_output_activation = output;
        let hidden_count = self.nhlayers * self.nhid;
        for (i, tag) in self.activations.iter_mut().enumerate() {
            *tag = if i < hidden_count { hidden } else { output };
        }
    }

    /// Draws every weight independently from the uniform distribution on `[-1, 1]`.
    pub fn randomize(&mut self, rng: &mut impl Rng) {
        for w in self.weights.iter_mut() {
            *w = rng.gen_range(-1.0..=1.0);
        }
    }

    fn input_offset(&self, layer_idx: usize) -> usize {
        if layer_idx == 0 {
            0
        } else {
            self.nin + self.layers[layer_idx - 1].activation_offset
        }
    }

    /// Runs the forward pass and returns a slice over the final `nout` entries of
    /// the outputs array. The slice borrows `self`; it is invalidated by any
    /// subsequent mutating call (including another `run`), which the borrow
    /// checker enforces since this method takes `&mut self`.
    #[tracing::instrument(skip(self, inputs), fields(nin = self.nin, nout = self.nout))]
    pub fn run(&mut self, inputs: &[f32]) -> NeatResult<&[f32]> {
        if inputs.len() != self.nin {
            return Err(NeatError::InputLengthMismatch {
                expected: self.nin,
                got: inputs.len(),
            });
        }
        self.outputs[..self.nin].copy_from_slice(inputs);

        for layer_idx in 0..self.layers.len() {
            let layer = self.layers[layer_idx];
            let input_offset = self.input_offset(layer_idx);
            for j in 0..layer.width {
                let base = layer.weight_offset + j * (layer.prev_width + 1);
                let mut sum = self.weights[base] * self.bias;
                for k in 0..layer.prev_width {
                    sum += self.weights[base + 1 + k] * self.outputs[input_offset + k];
                }
                let tag = self.activations[layer.activation_offset + j];
                self.outputs[self.nin + layer.activation_offset + j] = tag.apply(sum);
            }
        }

        let output_offset = self.outputs.len() - self.nout;
        Ok(&self.outputs[output_offset..])
    }

    /// Inserts a new hidden layer as an identity pass-through of the previous
    /// layer's width, initialized with weight `w`. Grows the weight, output and
    /// activation arrays in place and bumps `nhlayers` by one.
    ///
    /// New hidden neuron `j` receives weight `w` from source neuron `j` of the
    /// previous last layer (and zero from every other source, including bias);
    /// this is only a true identity when that previous layer's width equals
    /// `nhid` — with `Relu` activation and zero bias this is exactly the
    /// architecture every documented scenario exercises. The downstream
    /// (previously-last) layer's weight block is preserved positionally,
    /// zero-padded or truncated if the new source width differs from the old one.
    #[tracing::instrument(skip(self), fields(w, nhlayers_before = self.nhlayers))]
    pub fn insert_hidden_layer(&mut self, w: f32) {
        let old_last_idx = self.layers.len() - 1;
        let old_last = self.layers[old_last_idx];
        let insert_prev_width = old_last.prev_width;

        // New inserted hidden layer: identity pass-through from the old last
        // layer's source width.
        let mut inserted_weights = vec![0.0f32; self.nhid * (insert_prev_width + 1)];
        for j in 0..self.nhid {
            if j < insert_prev_width {
                let base = j * (insert_prev_width + 1);
                inserted_weights[base + 1 + j] = w;
            }
        }
        let inserted_activations = vec![self.default_hidden_activation; self.nhid];

        // Remap the old last layer's block onto the new prev_width (= nhid).
        let old_weight_start = old_last.weight_offset;
        let old_block_len = old_last.width * (insert_prev_width + 1);
        let old_block = self.weights[old_weight_start..old_weight_start + old_block_len].to_vec();

        let copy_width = insert_prev_width.min(self.nhid);
        let mut remapped_weights = vec![0.0f32; old_last.width * (self.nhid + 1)];
        for r in 0..old_last.width {
            let old_base = r * (insert_prev_width + 1);
            let new_base = r * (self.nhid + 1);
            remapped_weights[new_base] = old_block[old_base]; // bias slot
            for k in 0..copy_width {
                remapped_weights[new_base + 1 + k] = old_block[old_base + 1 + k];
            }
        }

        // Rebuild the full weight/activation/output arrays with the new layer
        // spliced in just before the old last layer.
        let mut new_weights = self.weights[..old_weight_start].to_vec();
        new_weights.extend_from_slice(&inserted_weights);
        new_weights.extend_from_slice(&remapped_weights);

        let mut new_activation_tags = self.activations[..old_last.activation_offset].to_vec();
        new_activation_tags.extend_from_slice(&inserted_activations);
        new_activation_tags.extend_from_slice(
            &self.activations[old_last.activation_offset..old_last.activation_offset + old_last.width],
        );

        self.nhlayers += 1;
        self.layers = build_layers(self.nin, self.nhid, self.nout, self.nhlayers);
        self.weights = new_weights;
        self.activations = new_activation_tags;
        self.outputs = vec![0.0; self.nin + self.activations.len()];
    }

    /// True iff `weight_idx` addresses a receiving neuron's bias slot (the
    /// leading entry of its fan-in block) rather than a source-neuron weight.
    pub fn is_bias_weight_index(&self, weight_idx: usize) -> bool {
        self.layers
            .iter()
            .find(|l| {
                weight_idx >= l.weight_offset
                    && weight_idx < l.weight_offset + l.width * (l.prev_width + 1)
            })
            .map(|l| (weight_idx - l.weight_offset) % (l.prev_width + 1) == 0)
            .unwrap_or(false)
    }

    /// True iff the neuron is an input, or some incoming non-bias weight is
    /// non-zero and its activation tag is not `Passthrough`.
    pub fn neuron_is_connected(&self, neuron_idx: usize) -> bool {
        if neuron_idx < self.nin {
            return true;
        }
        let rel = neuron_idx - self.nin;
        let layer = match self
            .layers
            .iter()
            .find(|l| rel >= l.activation_offset && rel < l.activation_offset + l.width)
        {
            Some(l) => *l,
            None => return false,
        };
        let j = rel - layer.activation_offset;
        if self.activations[layer.activation_offset + j] == Activation::Passthrough {
            return false;
        }
        let base = layer.weight_offset + j * (layer.prev_width + 1);
        (0..layer.prev_width).any(|k| self.weights[base + 1 + k] != 0.0)
    }

    /// Single-step supervised weight update. Not invoked anywhere in the NEAT
    /// engine; retained as a utility for callers that want to fine-tune a
    /// genome's weights directly.
    pub fn train(&mut self, inputs: &[f32], wanted_outputs: &[f32], learning_rate: f32) -> NeatResult<()> {
        if inputs.len() != self.nin {
            return Err(NeatError::InputLengthMismatch {
                expected: self.nin,
                got: inputs.len(),
            });
        }
        if wanted_outputs.len() != self.nout {
            return Err(NeatError::InputLengthMismatch {
                expected: self.nout,
                got: wanted_outputs.len(),
            });
        }

        let mut pre = vec![0.0f32; self.activations.len()];
        self.outputs[..self.nin].copy_from_slice(inputs);
        for layer_idx in 0..self.layers.len() {
            let layer = self.layers[layer_idx];
            let input_offset = self.input_offset(layer_idx);
            for j in 0..layer.width {
                let base = layer.weight_offset + j * (layer.prev_width + 1);
                let mut sum = self.weights[base] * self.bias;
                for k in 0..layer.prev_width {
                    sum += self.weights[base + 1 + k] * self.outputs[input_offset + k];
                }
                pre[layer.activation_offset + j] = sum;
                let tag = self.activations[layer.activation_offset + j];
                self.outputs[self.nin + layer.activation_offset + j] = tag.apply(sum);
            }
        }

        let mut delta = vec![0.0f32; self.activations.len()];
        let output_layer = *self.layers.last().unwrap();
        let output_neuron_offset = self.outputs.len() - self.nout;
        for j in 0..self.nout {
            let y = self.outputs[output_neuron_offset + j];
            let x = pre[output_layer.activation_offset + j];
            let tag = self.activations[output_layer.activation_offset + j];
            let err = y - wanted_outputs[j];
            delta[output_layer.activation_offset + j] = err * tag.derivative(x, y);
        }

        for layer_idx in (0..self.layers.len() - 1).rev() {
            let layer = self.layers[layer_idx];
            let next_layer = self.layers[layer_idx + 1];
            for j in 0..layer.width {
                let mut sum = 0.0;
                for k in 0..next_layer.width {
                    let w = self.weights
                        [next_layer.weight_offset + k * (next_layer.prev_width + 1) + 1 + j];
                    sum += w * delta[next_layer.activation_offset + k];
                }
                let x = pre[layer.activation_offset + j];
                let y = self.outputs[self.nin + layer.activation_offset + j];
                let tag = self.activations[layer.activation_offset + j];
                delta[layer.activation_offset + j] = sum * tag.derivative(x, y);
            }
        }

        for layer_idx in 0..self.layers.len() {
            let layer = self.layers[layer_idx];
            let input_offset = self.input_offset(layer_idx);
            for j in 0..layer.width {
                let base = layer.weight_offset + j * (layer.prev_width + 1);
                let d = delta[layer.activation_offset + j];
                self.weights[base] -= learning_rate * d * self.bias;
                for k in 0..layer.prev_width {
                    let source_output = self.outputs[input_offset + k];
                    self.weights[base + 1 + k] -= learning_rate * d * source_output;
                }
            }
        }

        Ok(())
    }

    /// Mean absolute weight difference between two networks of identical
    /// `nhlayers`, or `f32::INFINITY` if `nhlayers` differs.
    pub fn compatibility_distance(&self, other: &FFNet) -> f32 {
        if self.nhlayers != other.nhlayers || self.weights.len() != other.weights.len() {
            return f32::INFINITY;
        }
        let total: f32 = self
            .weights
            .iter()
            .zip(other.weights.iter())
            .map(|(a, b)| (a - b).abs())
            .sum();
        total / self.weights.len() as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weight_count_matches_formula_no_hidden() {
        let net = FFNet::new(2, 3, 1, 0).unwrap();
        assert_eq!(net.weight_count(), (2 + 1) * 1);
    }

    #[test]
    fn weight_count_matches_formula_with_hidden() {
        let net = FFNet::new(10, 3, 10, 2).unwrap();
        let expected = (10 + 1) * 3 + (2 - 1) * (3 + 1) * 3 + (3 + 1) * 10;
        assert_eq!(net.weight_count(), expected);
    }

    #[test]
    fn activation_count_excludes_inputs() {
        let net = FFNet::new(4, 2, 1, 2).unwrap();
        assert_eq!(net.activation_count(), 2 * 2 + 1);
        assert_eq!(net.neuron_count(), 4 + 2 * 2 + 1);
    }

    #[test]
    fn new_rejects_zero_dimensions() {
        assert!(FFNet::new(0, 1, 1, 0).is_err());
        assert!(FFNet::new(1, 1, 0, 0).is_err());
        assert!(FFNet::new(1, 0, 1, 2).is_err());
    }

    #[test]
    fn run_rejects_mismatched_input_length() {
        let mut net = FFNet::new(2, 1, 1, 0).unwrap();
        let err = net.run(&[1.0]).unwrap_err();
        assert_eq!(
            err,
            NeatError::InputLengthMismatch { expected: 2, got: 1 }
        );
    }

    #[test]
    fn sigmoid_baseline() {
        let mut net = FFNet::new(1, 1, 1, 0).unwrap();
        net.set_activations(Activation::Sigmoid, Activation::Sigmoid);
        net.set_bias(0.0);
        net.set_all_weights(1.0);
        let out = net.run(&[1.0]).unwrap();
        assert!((out[0] - 0.73).abs() < 0.1);
    }

    #[test]
    fn relu_identity_chain() {
        let mut net = FFNet::new(1, 1, 1, 0).unwrap();
        net.set_activations(Activation::Relu, Activation::Relu);
        net.set_bias(0.0);
        net.set_all_weights(1.0);
        for x in [-1.0f32, 0.0, 1.0, 2.0, 3.0, 4.0] {
            let out = net.run(&[x]).unwrap();
            assert_eq!(out[0], x.max(0.0));
        }
    }

    #[test]
    fn xor_solution() {
        let mut net = FFNet::new(2, 2, 1, 1).unwrap();
        net.set_activations(Activation::Relu, Activation::Relu);
        net.set_weights(&[0.0, -1.0, 1.0, 0.0, 1.0, -1.0, 0.0, 1.0, 1.0])
            .unwrap();

        let cases = [
            ([0.0, 0.0], 0.0),
            ([0.0, 1.0], 1.0),
            ([1.0, 0.0], 1.0),
            ([1.0, 1.0], 0.0),
        ];
        for (inputs, expected) in cases {
            let out = net.run(&inputs).unwrap();
            assert_eq!(out[0], expected);
        }
    }

    #[test]
    fn neuron_is_connected_matches_weight_layout() {
        let mut net = FFNet::new(4, 2, 1, 2).unwrap();
        net.set_activations(Activation::Sigmoid, Activation::Sigmoid);

        for i in 0..4 {
            assert!(net.neuron_is_connected(i));
        }
        for i in 4..net.neuron_count() {
            assert!(!net.neuron_is_connected(i));
        }

        for i in 0..4usize {
            net.weights_mut()[5 * 0 + i + 1] = 1.0;
            assert!(net.neuron_is_connected(4));
            net.set_all_weights(0.0);

            net.weights_mut()[5 * 1 + i + 1] = 1.0;
            assert!(net.neuron_is_connected(5));
            net.set_all_weights(0.0);
        }

        for i in 0..2usize {
            net.weights_mut()[5 * 2 + 3 * 0 + i + 1] = 1.0;
            assert!(net.neuron_is_connected(6));
            net.set_all_weights(0.0);

            net.weights_mut()[5 * 2 + 3 * 1 + i + 1] = 1.0;
            assert!(net.neuron_is_connected(7));
            net.set_all_weights(0.0);
        }

        for i in 0..2usize {
            net.weights_mut()[5 * 2 + 3 * 2 + i + 1] = 1.0;
            assert!(net.neuron_is_connected(8));
            net.set_all_weights(0.0);
        }
    }

    #[test]
    fn insert_hidden_layer_zero_layers() {
        let mut net = FFNet::new(1, 1, 1, 0).unwrap();
        net.weights_mut()[1] = 1.0;
        net.insert_hidden_layer(2.0);
        assert_eq!(net.weights(), &[0.0, 2.0, 0.0, 1.0]);
    }

    #[test]
    fn insert_hidden_layer_identity_square() {
        let mut net = FFNet::new(3, 3, 3, 0).unwrap();
        net.weights_mut()[1] = 1.0;
        net.weights_mut()[6] = 1.0;
        net.weights_mut()[11] = 1.0;
        net.set_activations(Activation::Relu, Activation::Relu);
        net.set_bias(0.0);

        net.insert_hidden_layer(1.0);

        let inputs = [1.0f32, 10.25, 0.01];
        let out = net.run(&inputs).unwrap();
        for (o, i) in out.iter().zip(inputs.iter()) {
            assert!((o - i).abs() < 0.01);
        }
    }

    #[test]
    fn insert_hidden_layer_single() {
        let mut net = FFNet::new(1, 1, 1, 1).unwrap();
        net.set_activations(Activation::Relu, Activation::Relu);
        net.set_bias(0.0);
        net.weights_mut()[1] = 1.0;
        net.weights_mut()[3] = 2.0;

        net.insert_hidden_layer(3.0);

        let out = net.run(&[1.0]).unwrap();
        assert_eq!(out[0], 6.0);
    }

    #[test]
    fn insert_hidden_layer_leaves_earlier_layers_untouched() {
        let mut net = FFNet::new(2, 2, 2, 2).unwrap();
        let mut rng = rand::thread_rng();
        net.randomize(&mut rng);
        let before = net.clone();

        // The first two hidden layers sit entirely before the spliced-in layer.
        let preserved_len = before.weight_count() - 2 * (2 + 1);
        net.insert_hidden_layer(2.0);

        assert_eq!(&net.weights()[..preserved_len], &before.weights()[..preserved_len]);
    }

    #[test]
    fn insert_hidden_layer_chain_is_identity() {
        for size in 1..=10usize {
            let mut net = FFNet::new(size, size, size, 0).unwrap();
            net.set_activations(Activation::Relu, Activation::Relu);
            net.set_bias(0.0);
            for i in 0..size {
                net.weights_mut()[i * (size + 2) + 1] = 1.0;
            }
            for _ in 0..size {
                net.insert_hidden_layer(1.0);
            }
            let inputs = vec![1.0f32; size];
            let out = net.run(&inputs).unwrap();
            for o in out {
                assert_eq!(*o, 1.0);
            }
        }
    }

    #[test]
    fn copy_diverges_only_after_mutation() {
        let mut net = FFNet::new(10, 3, 10, 2).unwrap();
        let mut rng = rand::thread_rng();
        net.randomize(&mut rng);

        let input = [1.0f32, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0];
        let mut copy = net.clone();

        let before = net.run(&input).unwrap().to_vec();
        let before_copy = copy.run(&input).unwrap().to_vec();
        assert_eq!(before, before_copy);

        net.set_all_weights(0.0);
        let after = net.run(&input).unwrap().to_vec();
        let after_copy = copy.run(&input).unwrap().to_vec();
        assert_ne!(after, after_copy);
    }

    #[test]
    fn set_weights_roundtrip_and_zero_idempotence() {
        let mut net = FFNet::new(4, 3, 2, 1).unwrap();
        let mut rng = rand::thread_rng();
        net.randomize(&mut rng);
        net.set_all_weights(0.0);
        assert!(net.weights().iter().all(|&w| w == 0.0));

        let values: Vec<f32> = (0..net.weight_count()).map(|i| i as f32 * 0.01).collect();
        net.set_weights(&values).unwrap();
        assert_eq!(net.weights(), values.as_slice());
    }

    #[test]
    fn train_reduces_error_over_iterations() {
        let mut net = FFNet::new(2, 3, 1, 1).unwrap();
        net.set_activations(Activation::Sigmoid, Activation::Sigmoid);
        let mut rng = rand::thread_rng();
        net.randomize(&mut rng);

        let inputs = [0.5, -0.5];
        let wanted = [0.9];

        let before = {
            let out = net.run(&inputs).unwrap();
            (out[0] - wanted[0]).abs()
        };
        for _ in 0..200 {
            net.train(&inputs, &wanted, 0.5).unwrap();
        }
        let after = {
            let out = net.run(&inputs).unwrap();
            (out[0] - wanted[0]).abs()
        };
        assert!(after < before);
    }

    #[test]
    fn compatibility_distance_is_infinite_across_topologies() {
        let a = FFNet::new(2, 2, 1, 0).unwrap();
        let b = FFNet::new(2, 2, 1, 1).unwrap();
        assert_eq!(a.compatibility_distance(&b), f32::INFINITY);
    }

    #[test]
    fn bias_weight_indices_match_layout() {
        let net = FFNet::new(4, 2, 1, 2).unwrap();
        // layer0 blocks of 5 at offsets 0 and 5; layer1 blocks of 3 at 10 and 13;
        // output block of 3 at 16.
        for &bias_idx in &[0usize, 5, 10, 13, 16] {
            assert!(net.is_bias_weight_index(bias_idx));
        }
        for &non_bias in &[1usize, 2, 3, 4, 11, 17] {
            assert!(!net.is_bias_weight_index(non_bias));
        }
    }

    #[test]
    fn compatibility_distance_is_mean_abs_difference() {
        let mut a = FFNet::new(1, 1, 1, 0).unwrap();
        let mut b = FFNet::new(1, 1, 1, 0).unwrap();
        a.set_all_weights(1.0);
        b.set_all_weights(0.0);
        assert_eq!(a.compatibility_distance(&b), 1.0);
    }
}
