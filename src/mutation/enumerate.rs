use std::fmt;
use std::io;

use tracing::{debug, info, trace};

use crate::error::Result;
use crate::mutation::{self, MutCounts};
use crate::mutation::score::{Score, Scorer};
use crate::seq::Codon;
use crate::seq::group::CodonGroup;

/// Point mutation from one codon to another.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MutRecord {
    pub from: Codon,
    pub to: Codon,
    pub counts: MutCounts,
    pub change_size: u32,
    pub score: Score,
}

impl fmt::Display for MutRecord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} -> {} | Transitions: {}, Transversions: {}, Score: {:.4}",
            self.from, self.to,
            self.counts.transitions, self.counts.transversions,
            self.score.value)
    }
}

/// Enumerate mutations from every codon in `source` to every codon in `target`.
///
/// Records are ordered by source codon first, then by target codon, following
/// the order of each group. Pairs of identical codons are dropped.
pub fn enumerate(source: &[Codon], target: &[Codon], scorer: &Scorer) -> Vec<MutRecord> {
    let mut records = Vec::with_capacity(source.len() * target.len());

    for from in source.iter() {
        for to in target.iter() {
            let counts = mutation::classify(from, to);
            let change_size = mutation::change_size(from, to);
            let score = scorer.score(&counts, change_size, to);

            if !counts.is_mutation() {
                debug!(codon = %from, "skipping identical codon pair");
                continue;
            }

            if score.usage.is_default() {
                debug!(codon = %to, usage = %score.usage, "codon missing from usage table");
            }
            trace!(%from, %to,
                transitions = counts.transitions,
                transversions = counts.transversions,
                change_size = change_size,
                score = score.value,
                "scored mutation");

            records.push(MutRecord {
                from: *from,
                to: *to,
                counts: counts,
                change_size: change_size,
                score: score,
            });
        }
    }

    records
}

/// Mutation report between two codon groups.
pub struct Report<'a> {
    pub source: &'a CodonGroup,
    pub target: &'a CodonGroup,
    pub records: Vec<MutRecord>,
}

impl<'a> Report<'a> {
    pub fn new(source: &'a CodonGroup, target: &'a CodonGroup, scorer: &Scorer) -> Report<'a> {
        let records = enumerate(&source.codons, &target.codons, scorer);

        let report = Report { source: source, target: target, records: records };
        info!(source = %source.label, target = %target.label,
            pairs = report.pairs_enumerated(),
            reported = report.records.len(),
            fallbacks = report.fallback_count(),
            "enumerated mutations");

        report
    }

    /// Number of codon pairs considered, including identical pairs.
    #[inline]
    pub fn pairs_enumerated(&self) -> usize {
        self.source.len() * self.target.len()
    }

    /// Number of reported mutations scored with the default usage weight.
    pub fn fallback_count(&self) -> usize {
        self.records.iter().filter(|r| r.score.usage.is_default()).count()
    }

    pub fn write_to<W: io::Write>(&self, out: &mut W) -> Result<()> {
        write!(out, "{}", self)?;
        Ok(())
    }
}

impl<'a> fmt::Display for Report<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Mutations between codons of {} ({}) and {} ({}):",
            self.source.label, self.source.name,
            self.target.label, self.target.name)?;
        for record in self.records.iter() {
            writeln!(f, "{}", record)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use crate::usage::CodonUsage;

    fn codons(xs: &[&str]) -> Vec<Codon> {
        xs.iter().map(|x| x.parse().unwrap()).collect()
    }

    #[test]
    fn test_record_display() {
        let usage = CodonUsage::from_pairs([("ACU", 23.4)]).unwrap();
        let scorer = Scorer::new(&usage);

        let records = enumerate(&codons(&["AAU"]), &codons(&["ACU"]), &scorer);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].to_string(),
            "AAU -> ACU | Transitions: 0, Transversions: 1, Score: 2.8080");
        assert_eq!(records[0].change_size, 1);
    }

    #[test]
    fn test_enumerate_order() {
        let usage = CodonUsage::new();
        let scorer = Scorer::new(&usage);

        let records = enumerate(&codons(&["AAU", "AAC"]), &codons(&["ACU", "ACC", "ACA"]), &scorer);
        let pairs: Vec<String> = records.iter()
            .map(|r| format!("{}>{}", r.from, r.to))
            .collect();
        assert_eq!(pairs, vec!["AAU>ACU", "AAU>ACC", "AAU>ACA", "AAC>ACU", "AAC>ACC", "AAC>ACA"]);
    }

    #[test]
    fn test_enumerate_skips_identical() {
        let usage = CodonUsage::new();
        let scorer = Scorer::new(&usage);

        let records = enumerate(&codons(&["AAU", "AAC"]), &codons(&["AAC", "AAU", "GAU"]), &scorer);
        assert_eq!(records.len(), 4);
        for r in records.iter() {
            assert!(r.from != r.to);
            assert_eq!(r.counts.total(), r.change_size);
        }
    }

    #[test]
    fn test_enumerate_empty() {
        let usage = CodonUsage::new();
        let scorer = Scorer::new(&usage);

        assert!(enumerate(&[], &codons(&["AAU"]), &scorer).is_empty());
        assert!(enumerate(&codons(&["AAU"]), &[], &scorer).is_empty());

        let source = CodonGroup::new::<&str>("X", "None", &[]).unwrap();
        let target = CodonGroup::new("T", "Threonine", &["ACU"]).unwrap();
        let report = Report::new(&source, &target, &scorer);
        assert_eq!(report.to_string(), "Mutations between codons of X (None) and T (Threonine):\n");
    }

    #[test]
    fn test_report_fallbacks() {
        let usage = CodonUsage::from_pairs([("ACU", 23.4)]).unwrap();
        let scorer = Scorer::new(&usage);

        let source = CodonGroup::new("N", "Asparagine", &["AAU", "AAC"]).unwrap();
        let target = CodonGroup::new("T", "Threonine", &["ACU", "ACG"]).unwrap();
        let report = Report::new(&source, &target, &scorer);

        assert_eq!(report.pairs_enumerated(), 4);
        assert_eq!(report.records.len(), 4);
        assert_eq!(report.fallback_count(), 2);

        // AAC -> ACG falls back to the default usage weight
        let r = &report.records[3];
        assert!(r.score.usage.is_default());
        assert_eq!(r.change_size, 2);
        assert_abs_diff_eq!(r.score.value, 0.2 * 0.3 * 0.5, epsilon = 1.0e-12);
    }

    #[test]
    fn test_report_write_to() {
        let usage = CodonUsage::from_pairs([("ACU", 23.4)]).unwrap();
        let scorer = Scorer::new(&usage);

        let source = CodonGroup::new("N", "Asparagine", &["AAU"]).unwrap();
        let target = CodonGroup::new("T", "Threonine", &["ACU"]).unwrap();
        let report = Report::new(&source, &target, &scorer);

        let mut out = Vec::new();
        report.write_to(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(),
            "Mutations between codons of N (Asparagine) and T (Threonine):\n\
             AAU -> ACU | Transitions: 0, Transversions: 1, Score: 2.8080\n");
    }
}
