use linked_hash_map::{self, LinkedHashMap};

use crate::error::{Error, Result};
use crate::seq::Codon;

/// Codons of one amino acid.
#[derive(Debug, Clone, PartialEq)]
pub struct CodonGroup {
    /// One-letter amino acid code
    pub label: String,
    /// Full amino acid name
    pub name: String,
    /// Codons in report order
    pub codons: Vec<Codon>,
}

impl CodonGroup {
    /// Construct a group from codon strings, validating each codon.
    pub fn new<S: AsRef<str>>(label: &str, name: &str, codons: &[S]) -> Result<CodonGroup> {
        let codons = codons.iter()
            .map(|x| x.as_ref().parse())
            .collect::<Result<Vec<Codon>>>()?;

        Ok(CodonGroup {
            label: label.to_owned(),
            name: name.to_owned(),
            codons: codons,
        })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.codons.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.codons.is_empty()
    }
}

/// Codon groups keyed by label, kept in insertion order.
#[derive(Debug, Clone, Default)]
pub struct CodonGroups {
    inner: LinkedHashMap<String, CodonGroup>,
}

impl CodonGroups {
    pub fn new() -> CodonGroups {
        CodonGroups { inner: LinkedHashMap::new() }
    }

    /// Insert a group, replacing any previous group with the same label.
    pub fn insert(&mut self, group: CodonGroup) -> Option<CodonGroup> {
        self.inner.insert(group.label.clone(), group)
    }

    /// Look up a group by label.
    pub fn get(&self, label: &str) -> Result<&CodonGroup> {
        self.inner.get(label).ok_or_else(|| Error::MissingGroup(label.to_owned()))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn iter(&self) -> linked_hash_map::Values<'_, String, CodonGroup> {
        self.inner.values()
    }
}
