//! Shuffle engine.
//!
//! Produces a new arrangement of a [`KeySequence`] that moves at least a
//! configured fraction of labels. Candidates come from uniformly random
//! permutations of slot indices (Fisher-Yates driven by the injected
//! [`Environment`]) and are accepted by [`is_valid_shuffle`].
//!
//! # Termination
//!
//! Rejection sampling on its own never terminates for thresholds the labels
//! cannot reach (one key, all labels identical, a dominant label). The engine
//! therefore:
//!
//! 1. rejects such configurations before sampling ([`check`]),
//! 2. samples at most [`ShuffleConfig::max_attempts`] candidates,
//! 3. falls back to a deterministic arrangement that changes the maximum
//!    number of positions the labels allow.
//!
//! Step 1 guarantees the fallback in step 3 meets the threshold.
//!
//! # Invariants
//!
//! - Slot ids never move; only labels do
//! - The label multiset is conserved by construction
//! - An accepted result changes at least [`required_changes`] positions

use std::cmp::Reverse;

use crate::{env::Environment, error::ShuffleError, key::KeySequence};

/// Default retry cap for rejection sampling.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 1000;

/// Default minimum fraction of positions that must change.
pub const DEFAULT_MINIMUM_CHANGE_FRACTION: f64 = 0.3;

/// Shuffle acceptance settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShuffleConfig {
    /// Lower bound on the fraction of positions whose label must change.
    /// Must be finite and in `[0, 1)`.
    pub minimum_change_fraction: f64,
    /// Candidates sampled before falling back. Must be at least 1.
    pub max_attempts: u32,
}

impl Default for ShuffleConfig {
    fn default() -> Self {
        Self {
            minimum_change_fraction: DEFAULT_MINIMUM_CHANGE_FRACTION,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

impl ShuffleConfig {
    /// Config with the given fraction and the default retry cap.
    pub fn with_fraction(minimum_change_fraction: f64) -> Self {
        Self { minimum_change_fraction, ..Self::default() }
    }

    /// Check the settings independent of any key sequence.
    pub fn validate(&self) -> Result<(), ShuffleError> {
        let fraction = self.minimum_change_fraction;
        if !fraction.is_finite() || !(0.0..1.0).contains(&fraction) {
            return Err(ShuffleError::InvalidFraction { fraction });
        }
        if self.max_attempts == 0 {
            return Err(ShuffleError::InvalidAttempts);
        }
        Ok(())
    }
}

/// How an accepted arrangement was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShuffleStrategy {
    /// A random candidate passed the threshold.
    Sampled,
    /// The retry cap ran out; the maximal deterministic arrangement was used.
    Fallback,
}

/// Result of a successful shuffle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShuffleOutcome {
    /// The new arrangement.
    pub keys: KeySequence,
    /// Positions whose label changed.
    pub changed: usize,
    /// Candidates sampled.
    pub attempts: u32,
    /// How `keys` was produced.
    pub strategy: ShuffleStrategy,
}

/// Whether `new` changes enough positions of `old`.
///
/// Valid iff `changed / len >= fraction`. An empty sequence only satisfies a
/// zero fraction.
#[allow(clippy::cast_precision_loss)]
pub fn is_valid_shuffle(old: &KeySequence, new: &KeySequence, fraction: f64) -> bool {
    if old.is_empty() {
        return fraction <= 0.0;
    }
    old.changed_positions(new) as f64 / old.len() as f64 >= fraction
}

/// Smallest number of changed positions accepted for `len` keys.
///
/// Computed with the same division [`is_valid_shuffle`] uses, so the two never
/// disagree at a rounding boundary.
#[allow(clippy::cast_precision_loss)]
pub fn required_changes(len: usize, fraction: f64) -> usize {
    if len == 0 {
        return 0;
    }
    (0..=len).find(|&c| c as f64 / len as f64 >= fraction).unwrap_or(len)
}

/// Most positions any permutation of the labels can change.
///
/// With `m` the highest label multiplicity, every slot can change when
/// `m <= len / 2`; otherwise only the `len - m` other labels can enter slots
/// of the dominant label, giving `2 * (len - m)`.
pub fn achievable_changes(keys: &KeySequence) -> usize {
    let len = keys.len();
    let dominant = keys.value_counts().into_values().max().unwrap_or(0);
    len.min(2 * (len - dominant))
}

/// Validate a shuffle request and return the required number of changes.
pub fn check(keys: &KeySequence, config: &ShuffleConfig) -> Result<usize, ShuffleError> {
    config.validate()?;
    if keys.is_empty() {
        return Err(ShuffleError::EmptySequence);
    }

    let required = required_changes(keys.len(), config.minimum_change_fraction);
    let achievable = achievable_changes(keys);
    if required > achievable {
        return Err(ShuffleError::Unsatisfiable { required, achievable, len: keys.len() });
    }
    Ok(required)
}

/// Shuffle `current` until enough positions change.
///
/// Pure apart from consuming randomness from `env`.
pub fn shuffle<E: Environment>(
    current: &KeySequence,
    config: &ShuffleConfig,
    env: &E,
) -> Result<ShuffleOutcome, ShuffleError> {
    let required = check(current, config)?;
    let mut order: Vec<usize> = (0..current.len()).collect();

    for attempt in 1..=config.max_attempts {
        fisher_yates(&mut order, env);
        let candidate = current.permuted(&order);

        if is_valid_shuffle(current, &candidate, config.minimum_change_fraction) {
            let changed = current.changed_positions(&candidate);
            tracing::debug!(attempt, changed, required, "shuffle accepted");
            return Ok(ShuffleOutcome {
                keys: candidate,
                changed,
                attempts: attempt,
                strategy: ShuffleStrategy::Sampled,
            });
        }
    }

    let keys = fallback_arrangement(current);
    let changed = current.changed_positions(&keys);
    tracing::warn!(
        attempts = config.max_attempts,
        changed,
        required,
        "shuffle retry cap reached, using fallback arrangement"
    );

    Ok(ShuffleOutcome {
        keys,
        changed,
        attempts: config.max_attempts,
        strategy: ShuffleStrategy::Fallback,
    })
}

/// In-place Fisher-Yates shuffle.
fn fisher_yates<E: Environment>(order: &mut [usize], env: &E) {
    for i in (1..order.len()).rev() {
        let j = env.random_index(i + 1);
        order.swap(i, j);
    }
}

/// Deterministic arrangement changing [`achievable_changes`] positions.
///
/// Slots are grouped by label, largest group first (ties in order of first
/// appearance), and labels are rotated along that ordering by the size of the
/// largest group. No label lands in a slot of its own group unless the
/// largest group holds more than half the keys.
pub(crate) fn fallback_arrangement(current: &KeySequence) -> KeySequence {
    let mut groups: Vec<(&str, Vec<usize>)> = Vec::new();
    for (slot, value) in current.values().enumerate() {
        match groups.iter().position(|(label, _)| *label == value) {
            Some(idx) => groups[idx].1.push(slot),
            None => groups.push((value, vec![slot])),
        }
    }
    groups.sort_by_key(|(_, slots)| Reverse(slots.len()));

    let shift = groups.first().map_or(0, |(_, slots)| slots.len());
    let sorted: Vec<usize> = groups.into_iter().flat_map(|(_, slots)| slots).collect();
    let len = sorted.len();

    let mut order = vec![0; len];
    for (k, &source) in sorted.iter().enumerate() {
        order[sorted[(k + shift) % len]] = source;
    }
    current.permuted(&order)
}
