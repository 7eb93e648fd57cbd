use crate::error::Result;
use crate::seq::group::{CodonGroup, CodonGroups};
use crate::usage::CodonUsage;

/// Codon usage of RSV-A fusion (F) protein genes, per thousand codons.
pub const RSV_A_F_USAGE: [(&str, f64); 64] = [
    ("UUU", 18.7333333333333), ("UUC", 10.9333333333333), ("UUA", 41.1), ("UUG", 13.2666666666667),
    ("CUU", 6.5), ("CUC", 11.8), ("CUA", 23.4333333333333), ("CUG", 6.66666666666667),
    ("AUU", 22.6666666666667), ("AUC", 21.9666666666667), ("AUA", 40.4), ("AUG", 17.7),
    ("GUU", 15.9333333333333), ("GUC", 13.3), ("GUA", 35.2), ("GUG", 13.7666666666667),
    ("UCU", 15.9), ("UCC", 15.8), ("UCA", 19.9666666666667), ("UCG", 1.6),
    ("CCU", 9.86666666666667), ("CCC", 3.53333333333333), ("CCA", 13.6), ("CCG", 0.933333333333333),
    ("ACU", 23.4), ("ACC", 16.2), ("ACA", 47.1333333333333), ("ACG", 0.0666666666666667),
    ("GCU", 16.9), ("GCC", 8.3), ("GCA", 22.7666666666667), ("GCG", 0.0666666666666667),
    ("UAU", 26.6666666666667), ("UAC", 6.96666666666667), ("UAA", 1.06666666666667), ("UAG", 0.466666666666667),
    ("CAU", 2.13333333333333), ("CAC", 3.96666666666667), ("CAA", 24.0), ("CAG", 10.4666666666667),
    ("AAU", 51.8333333333333), ("AAC", 33.4666666666667), ("AAA", 48.7666666666667), ("AAG", 27.4333333333333),
    ("GAU", 21.6666666666667), ("GAC", 12.8), ("GAA", 34.1333333333333), ("GAG", 8.8),
    ("UGU", 16.5), ("UGC", 10.7), ("UGA", 0.3), ("UGG", 5.3),
    ("CGU", 3.1), ("CGC", 0.766666666666667), ("CGA", 3.36666666666667), ("CGG", 0.5),
    ("AGU", 28.8333333333333), ("AGC", 21.4333333333333), ("AGA", 17.3333333333333), ("AGG", 5.16666666666667),
    ("GGU", 14.1), ("GGC", 8.0), ("GGA", 14.5666666666667), ("GGG", 6.16666666666667),
];

/// Built-in codon usage table.
pub fn rsv_a_f_usage() -> Result<CodonUsage> {
    CodonUsage::from_pairs(RSV_A_F_USAGE.iter().cloned())
}

/// Label of the default source group
pub const SOURCE_LABEL: &str = "N";
/// Label of the default target group
pub const TARGET_LABEL: &str = "T";

/// Default codon groups: asparagine (source) and threonine (target).
pub fn default_groups() -> Result<CodonGroups> {
    let mut groups = CodonGroups::new();
    groups.insert(CodonGroup::new(SOURCE_LABEL, "Asparagine", &["AAU", "AAC"])?);
    groups.insert(CodonGroup::new(TARGET_LABEL, "Threonine", &["ACU", "ACC", "ACA", "ACG"])?);
    Ok(groups)
}
