use std::io;
use std::num;
use std::result;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("codon `{0}` does not have exactly 3 nucleotides")]
    CodonLength(String),

    #[error("invalid nucleotide `{nt}` in codon `{codon}`")]
    Nucleotide { codon: String, nt: char },

    #[error("codon group `{0}` is not defined")]
    MissingGroup(String),

    #[error("error reading codon usage table: {0}")]
    Csv(#[from] csv::Error),

    #[error("missing field `{0}` in codon usage record")]
    MissingField(String),

    #[error("invalid frequency for codon {codon}: {source}")]
    ParseFloat { codon: String, source: num::ParseFloatError },

    #[error("negative frequency {value} for codon {codon}")]
    NegativeFrequency { codon: String, value: f64 },

    #[error("codon {0} is listed more than once")]
    DuplicateCodon(String),

    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<T> = result::Result<T, Error>;
