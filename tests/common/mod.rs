/// Report printed by a default run.
pub const EXPECTED_REPORT: &str = "\
Mutations between codons of N (Asparagine) and T (Threonine):
AAU -> ACU | Transitions: 0, Transversions: 1, Score: 2.8080
AAU -> ACC | Transitions: 1, Transversions: 1, Score: 3.8880
AAU -> ACA | Transitions: 0, Transversions: 2, Score: 2.8280
AAU -> ACG | Transitions: 0, Transversions: 2, Score: 0.0040
AAC -> ACU | Transitions: 1, Transversions: 1, Score: 5.6160
AAC -> ACC | Transitions: 0, Transversions: 1, Score: 1.9440
AAC -> ACA | Transitions: 0, Transversions: 2, Score: 2.8280
AAC -> ACG | Transitions: 0, Transversions: 2, Score: 0.0040
";
