//! Weighted random choice
//!
//! Outcomes are laid out back to back on [0, total) in table order, so a
//! uniform roll maps to exactly one of them. `pick` takes the roll directly,
//! which keeps selection testable without an RNG.

use rand::Rng;

#[derive(Debug, Clone)]
pub struct WeightedTable<T> {
    entries: Vec<(f64, T)>,
    total: f64,
}

impl<T: Copy> WeightedTable<T> {
    /// Build a table from (weight, outcome) pairs. Non-positive weights are dropped.
    pub fn new(entries: impl IntoIterator<Item = (f64, T)>) -> Self {
        let entries: Vec<(f64, T)> = entries
            .into_iter()
            .filter(|(w, _)| w.is_finite() && *w > 0.0)
            .collect();
        let total: f64 = entries.iter().map(|(w, _)| w).sum();
        Self { entries, total }
    }

    /// Outcome for a uniform roll in [0, 1). Rolls outside the range are clamped.
    pub fn pick(&self, roll: f64) -> Option<T> {
        let mut cursor = roll.clamp(0.0, 1.0) * self.total;
        for (weight, outcome) in &self.entries {
            if cursor < *weight {
                return Some(*outcome);
            }
            cursor -= weight;
        }
        // roll == 1.0 or float drift lands past the end
        self.entries.last().map(|(_, outcome)| *outcome)
    }

    /// Draw an outcome using `rng`
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<T> {
        self.pick(rng.random::<f64>())
    }
}
