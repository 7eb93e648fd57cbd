use std::fmt;

use crate::constants::*;
use crate::error::{Error, Result};
use crate::seq::Codon;

/// Result of a codon usage lookup.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Usage {
    /// Frequency recorded in the table
    Observed(f64),
    /// Codon absent from the table; fallback weight used
    Default(f64),
}

impl Usage {
    #[inline]
    pub fn value(&self) -> f64 {
        match *self {
            Usage::Observed(x) | Usage::Default(x) => x,
        }
    }

    #[inline]
    pub fn is_default(&self) -> bool {
        match *self {
            Usage::Default(_) => true,
            Usage::Observed(_) => false,
        }
    }
}

impl fmt::Display for Usage {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Usage::Observed(x) => write!(f, "{}", x),
            Usage::Default(x) => write!(f, "{} (default)", x),
        }
    }
}

/// Codon usage frequencies, indexed by `Codon::index`.
#[derive(Clone, PartialEq)]
pub struct CodonUsage([Option<f64>; N_CODONS]);

impl CodonUsage {
    /// Empty table: every lookup falls back to the default weight.
    #[inline]
    pub fn new() -> CodonUsage {
        CodonUsage([None; N_CODONS])
    }

    /// Construct from (codon, frequency) pairs.
    pub fn from_pairs<I, S>(pairs: I) -> Result<CodonUsage>
        where I: IntoIterator<Item = (S, f64)>, S: AsRef<str>
    {
        let mut usage = CodonUsage::new();
        for (codon, freq) in pairs {
            usage.insert(codon.as_ref().parse()?, freq)?;
        }
        Ok(usage)
    }

    /// Record the frequency of a codon.
    /// Each codon may only be recorded once, and frequencies must be non-negative.
    pub fn insert(&mut self, codon: Codon, freq: f64) -> Result<()> {
        if !(freq >= 0.0) {
            return Err(Error::NegativeFrequency { codon: codon.to_string(), value: freq });
        }
        let slot = &mut self.0[codon.index()];
        if slot.is_some() {
            return Err(Error::DuplicateCodon(codon.to_string()));
        }
        *slot = Some(freq);
        Ok(())
    }

    /// Look up the usage weight of a codon.
    #[inline]
    pub fn get(&self, codon: &Codon) -> Usage {
        match self.0[codon.index()] {
            Some(x) => Usage::Observed(x),
            None => Usage::Default(DEFAULT_USAGE),
        }
    }

    /// Number of codons with a recorded frequency.
    pub fn len(&self) -> usize {
        self.0.iter().filter(|x| x.is_some()).count()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether every one of the 64 codons has a recorded frequency.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.len() == N_CODONS
    }

    /// Largest usage weight any lookup can return, including the default.
    pub fn max_weight(&self) -> f64 {
        self.0.iter()
            .filter_map(|&x| x)
            .fold(DEFAULT_USAGE, f64::max)
    }

    /// Iterate over recorded (codon, frequency) pairs in codon index order.
    pub fn iter<'a>(&'a self) -> impl Iterator<Item = (Codon, f64)> + 'a {
        Codon::all().filter_map(move |c| self.0[c.index()].map(|x| (c, x)))
    }
}

impl Default for CodonUsage {
    fn default() -> CodonUsage {
        CodonUsage::new()
    }
}

impl fmt::Debug for CodonUsage {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_map().entries(self.iter().map(|(c, x)| (c.to_string(), x))).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codon(s: &str) -> Codon {
        s.parse().unwrap()
    }

    #[test]
    fn test_lookup() {
        let usage = CodonUsage::from_pairs([("ACU", 23.4), ("ACG", 0.0)]).unwrap();

        assert_eq!(usage.get(&codon("ACU")), Usage::Observed(23.4));
        // recorded zero is not a fallback
        assert_eq!(usage.get(&codon("ACG")), Usage::Observed(0.0));

        let missing = usage.get(&codon("GGG"));
        assert!(missing.is_default());
        assert_eq!(missing.value(), DEFAULT_USAGE);

        assert_eq!(usage.len(), 2);
        assert!(!usage.is_complete());
    }

    #[test]
    fn test_usage_display() {
        assert_eq!(Usage::Observed(23.4).to_string(), "23.4");
        assert_eq!(Usage::Default(DEFAULT_USAGE).to_string(), "0.5 (default)");
    }

    #[test]
    fn test_insert_invalid() {
        let mut usage = CodonUsage::new();
        usage.insert(codon("AAA"), 1.0).unwrap();

        match usage.insert(codon("AAA"), 2.0) {
            Err(Error::DuplicateCodon(c)) => assert_eq!(c, "AAA"),
            _ => panic!("expected duplicate codon error"),
        }
        match usage.insert(codon("AAC"), -1.0) {
            Err(Error::NegativeFrequency { codon, .. }) => assert_eq!(codon, "AAC"),
            _ => panic!("expected negative frequency error"),
        }
        assert!(usage.insert(codon("AAG"), ::std::f64::NAN).is_err());
        assert_eq!(usage.get(&codon("AAA")), Usage::Observed(1.0));
    }

    #[test]
    fn test_max_weight() {
        assert_eq!(CodonUsage::new().max_weight(), DEFAULT_USAGE);

        let usage = CodonUsage::from_pairs([("ACU", 23.4), ("ACA", 47.1)]).unwrap();
        assert_eq!(usage.max_weight(), 47.1);

        let small = CodonUsage::from_pairs([("ACG", 0.1)]).unwrap();
        assert_eq!(small.max_weight(), DEFAULT_USAGE);
    }

    #[test]
    fn test_iter_order() {
        let usage = CodonUsage::from_pairs([("UUU", 1.0), ("AAA", 2.0)]).unwrap();
        let xs: Vec<(String, f64)> = usage.iter().map(|(c, x)| (c.to_string(), x)).collect();
        assert_eq!(xs, vec![(String::from("AAA"), 2.0), (String::from("UUU"), 1.0)]);
    }
}
