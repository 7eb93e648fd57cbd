pub mod score;
pub mod enumerate;

use std::fmt;
use std::slice;

use crate::seq::{self, Codon, Nucleotide};

/// Class of a single base substitution.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SubstitutionClass {
    /// Purine to purine, or pyrimidine to pyrimidine
    Transition,
    /// Purine to pyrimidine, or vice versa
    Transversion,
}

impl SubstitutionClass {
    pub fn iter() -> slice::Iter<'static, SubstitutionClass> {
        use self::SubstitutionClass::*;
        static SUBSTITUTION_CLASSES: [SubstitutionClass; 2] = [Transition, Transversion];
        SUBSTITUTION_CLASSES.iter()
    }

    /// Classify the substitution of `nt_ref` by `nt_alt`.
    /// Returns `None` if the nucleotides are identical.
    pub fn of(nt_ref: Nucleotide, nt_alt: Nucleotide) -> Option<SubstitutionClass> {
        if nt_ref == nt_alt {
            None
        } else if (seq::is_purine(nt_ref) && seq::is_purine(nt_alt)) ||
                (seq::is_pyrimidine(nt_ref) && seq::is_pyrimidine(nt_alt)) {
            Some(SubstitutionClass::Transition)
        } else {
            Some(SubstitutionClass::Transversion)
        }
    }
}

impl fmt::Display for SubstitutionClass {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let c = match *self {
            SubstitutionClass::Transition => "ts",
            SubstitutionClass::Transversion => "tv",
        };

        write!(f, "{}", c)
    }
}

/// Substitution counts between two codons.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct MutCounts {
    pub transitions: u32,
    pub transversions: u32,
}

impl MutCounts {
    #[inline]
    pub fn total(&self) -> u32 {
        self.transitions + self.transversions
    }

    /// Whether the codons differ at any position.
    #[inline]
    pub fn is_mutation(&self) -> bool {
        self.transitions > 0 || self.transversions > 0
    }
}

/// Count transitions and transversions from `from` to `to`.
pub fn classify(from: &Codon, to: &Codon) -> MutCounts {
    let mut counts = MutCounts::default();
    for (&nt_ref, &nt_alt) in from.as_bytes().iter().zip(to.as_bytes()) {
        match SubstitutionClass::of(nt_ref, nt_alt) {
            Some(SubstitutionClass::Transition) => counts.transitions += 1,
            Some(SubstitutionClass::Transversion) => counts.transversions += 1,
            None => {},
        }
    }
    counts
}

/// Number of positions at which the codons differ.
pub fn change_size(from: &Codon, to: &Codon) -> u32 {
    from.as_bytes().iter()
        .zip(to.as_bytes())
        .filter(|&(a, b)| a != b)
        .count() as u32
}
