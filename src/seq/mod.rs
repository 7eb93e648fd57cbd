pub mod group;

use std::fmt;
use std::str;

use crate::constants::*;
use crate::error::{Error, Result};

pub type Nucleotide = u8;

#[inline]
pub fn is_purine(x: Nucleotide) -> bool {
    PURINES.contains(&x)
}

#[inline]
pub fn is_pyrimidine(x: Nucleotide) -> bool {
    PYRIMIDINES.contains(&x)
}

/// Subscript of an RNA nucleotide in the order A, C, G, U.
fn nucleotide_index(x: Nucleotide) -> Option<usize> {
    match x {
        b'A' => Some(0),
        b'C' => Some(1),
        b'G' => Some(2),
        b'U' => Some(3),
        _ => None,
    }
}

/// RNA codon.
/// Always holds exactly three upper-case nucleotides from {A, C, G, U}.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Codon([Nucleotide; CODON_LEN]);

impl Codon {
    /// Construct a codon from raw bytes.
    /// Lower-case nucleotides are accepted and converted to upper case.
    pub fn from_bytes(xs: &[u8]) -> Result<Codon> {
        if xs.len() != CODON_LEN {
            return Err(Error::CodonLength(String::from_utf8_lossy(xs).into_owned()));
        }

        let mut nts = [0u8; CODON_LEN];
        for (i, &x) in xs.iter().enumerate() {
            let nt = x.to_ascii_uppercase();
            if nucleotide_index(nt).is_none() {
                return Err(Error::Nucleotide {
                    codon: String::from_utf8_lossy(xs).into_owned(),
                    nt: x as char,
                });
            }
            nts[i] = nt;
        }

        Ok(Codon(nts))
    }

    // codons are indexed by their three nucleotides in the order A, C, G, U
    // the first nucleotide varies slowest, so AAA = 0, AAC = 1, ..., UUU = 63
    #[inline]
    pub fn index(&self) -> usize {
        const K: usize = N_NUCLEOTIDES;
        self.0.iter().fold(0, |i, &nt| {
            // nucleotides are validated on construction
            i * K + nucleotide_index(nt).unwrap_or(0)
        })
    }

    /// Inverse of `index`; `None` if `i` is out of range.
    pub fn from_index(i: usize) -> Option<Codon> {
        if i >= N_CODONS {
            return None;
        }
        const K: usize = N_NUCLEOTIDES;
        Some(Codon([
            NUCLEOTIDES[i / (K * K)],
            NUCLEOTIDES[(i / K) % K],
            NUCLEOTIDES[i % K],
        ]))
    }

    /// Iterate over all 64 codons in index order.
    pub fn all() -> impl Iterator<Item = Codon> {
        (0 .. N_CODONS).filter_map(Codon::from_index)
    }

    #[inline]
    pub fn as_bytes(&self) -> &[Nucleotide] {
        &self.0
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        // contents are always ASCII
        str::from_utf8(&self.0).unwrap_or("")
    }
}

impl str::FromStr for Codon {
    type Err = Error;

    fn from_str(s: &str) -> Result<Codon> {
        Codon::from_bytes(s.as_bytes())
    }
}

impl fmt::Display for Codon {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for Codon {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Codon({})", self.as_str())
    }
}
