//! Scripted random source for deterministic tests.

use crate::random::RandomSource;

/// Replays fixed draws, cycling when a script runs out.
///
/// An empty index script yields `0`, an empty unit script `0.0`. Index
/// draws are clamped below the requested bound.
pub(crate) struct ScriptedSource {
    indices: Vec<usize>,
    units: Vec<f64>,
    index_cursor: usize,
    unit_cursor: usize,
}

impl ScriptedSource {
    pub(crate) fn new(indices: &[usize], units: &[f64]) -> Self {
        Self {
            indices: indices.to_vec(),
            units: units.to_vec(),
            index_cursor: 0,
            unit_cursor: 0,
        }
    }

    pub(crate) fn units(units: &[f64]) -> Self {
        Self::new(&[], units)
    }
}

impl RandomSource for ScriptedSource {
    fn next_index(&mut self, bound: usize) -> usize {
        if self.indices.is_empty() {
            return 0;
        }
        let value = self.indices[self.index_cursor % self.indices.len()];
        self.index_cursor += 1;
        value.min(bound - 1)
    }

    fn next_unit(&mut self) -> f64 {
        if self.units.is_empty() {
            return 0.0;
        }
        let value = self.units[self.unit_cursor % self.units.len()];
        self.unit_cursor += 1;
        value
    }
}
