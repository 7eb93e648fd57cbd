pub mod seq;
pub mod mutation;
pub mod usage;
pub mod io;
pub mod data;
pub mod error;

mod constants;

pub use crate::error::{Error, Result};
pub use crate::mutation::enumerate::{MutRecord, Report};
pub use crate::mutation::score::Scorer;
pub use crate::seq::Codon;
pub use crate::seq::group::{CodonGroup, CodonGroups};
pub use crate::usage::{CodonUsage, Usage};
