pub const NUCLEOTIDES: [u8; 4] = [b'A', b'C', b'G', b'U'];
pub const N_NUCLEOTIDES: usize = 4;

pub const CODON_LEN: usize = 3;
pub const N_CODONS: usize = N_NUCLEOTIDES * N_NUCLEOTIDES * N_NUCLEOTIDES;

pub const PURINES: [u8; 2] = [b'A', b'G'];
pub const PYRIMIDINES: [u8; 2] = [b'C', b'U'];

// mutation type weights
pub const TRANSITION_WEIGHT: f64 = 0.8;
pub const TRANSVERSION_WEIGHT: f64 = 0.2;

// change size weights
pub const SINGLE_CHANGE_WEIGHT: f64 = 0.6;
pub const DOUBLE_CHANGE_WEIGHT: f64 = 0.3;
pub const OTHER_CHANGE_WEIGHT: f64 = 0.1;

/// Usage weight of a codon missing from the frequency table
pub const DEFAULT_USAGE: f64 = 0.5;
