use crate::constants::*;
use crate::mutation::MutCounts;
use crate::seq::Codon;
use crate::usage::{CodonUsage, Usage};

/// Weight of the mutation type.
/// Any transition at all earns the transition weight.
#[inline]
pub fn mutation_type_weight(counts: &MutCounts) -> f64 {
    if counts.transitions > 0 {
        TRANSITION_WEIGHT
    } else {
        TRANSVERSION_WEIGHT
    }
}

/// Weight of the number of changed positions.
#[inline]
pub fn change_size_weight(change_size: u32) -> f64 {
    match change_size {
        1 => SINGLE_CHANGE_WEIGHT,
        2 => DOUBLE_CHANGE_WEIGHT,
        _ => OTHER_CHANGE_WEIGHT,
    }
}

/// Heuristic plausibility score of a mutation.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Score {
    pub value: f64,
    /// Usage lookup of the destination codon
    pub usage: Usage,
}

/// Scores mutations against a fixed codon usage table.
pub struct Scorer<'a> {
    usage: &'a CodonUsage,
}

impl<'a> Scorer<'a> {
    pub fn new(usage: &'a CodonUsage) -> Scorer<'a> {
        Scorer { usage: usage }
    }

    /// Score a mutation into codon `to`.
    pub fn score(&self, counts: &MutCounts, change_size: u32, to: &Codon) -> Score {
        let usage = self.usage.get(to);
        // the order of multiplication is fixed so that scores are reproducible
        let value = mutation_type_weight(counts) * change_size_weight(change_size) * usage.value();

        Score { value: value, usage: usage }
    }

    /// Upper bound of any score this scorer can produce.
    pub fn max_score(&self) -> f64 {
        TRANSITION_WEIGHT * SINGLE_CHANGE_WEIGHT * self.usage.max_weight()
    }
}
