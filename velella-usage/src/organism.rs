//! Reference organism codon frequency profiles.
//!
//! Each profile records observed codon usage (occurrences per thousand
//! codons, from reference gene sets) for one expression host. Profiles are
//! registered under one or more alias names and resolved by [`lookup`];
//! unknown names fall back to the default *E. coli* profile so every engine
//! operation stays self-consistent for an unrecognized organism.

use std::sync::OnceLock;

use velella_core::Annotated;
use velella_seq::Codon;

/// Name of the fallback profile used when an organism is not registered.
pub const DEFAULT_ORGANISM: &str = "E.coli";

// ---------------------------------------------------------------------------
// Frequency data (per thousand codons)
// ---------------------------------------------------------------------------

/// E. coli codon frequencies, from highly expressed genes.
const ECOLI_FREQ: [(&str, f64); 64] = [
    ("TTT", 22.0), ("TTC", 16.8), ("TTA", 13.5), ("TTG", 13.0),
    ("TCT", 15.2), ("TCC", 8.8), ("TCA", 7.8), ("TCG", 14.4),
    ("TAT", 16.2), ("TAC", 12.2), ("TAA", 2.0), ("TAG", 0.2),
    ("TGT", 5.2), ("TGC", 6.2), ("TGA", 1.0), ("TGG", 15.2),

    ("CTT", 11.2), ("CTC", 10.8), ("CTA", 3.8), ("CTG", 52.6),
    ("CCT", 7.2), ("CCC", 5.8), ("CCA", 8.8), ("CCG", 23.0),
    ("CAT", 13.2), ("CAC", 9.8), ("CAA", 15.2), ("CAG", 29.2),
    ("CGT", 38.4), ("CGC", 22.2), ("CGA", 3.8), ("CGG", 5.8),

    ("ATT", 30.2), ("ATC", 25.2), ("ATA", 4.8), ("ATG", 27.2),
    ("ACT", 15.2), ("ACC", 25.2), ("ACA", 7.2), ("ACG", 14.8),
    ("AAT", 17.2), ("AAC", 22.2), ("AAA", 33.2), ("AAG", 10.8),
    ("AGT", 15.2), ("AGC", 16.2), ("AGA", 2.2), ("AGG", 1.8),

    ("GTT", 18.2), ("GTC", 20.8), ("GTA", 11.2), ("GTG", 26.2),
    ("GCT", 18.8), ("GCC", 27.2), ("GCA", 21.2), ("GCG", 33.8),
    ("GAT", 32.2), ("GAC", 19.2), ("GAA", 39.2), ("GAG", 18.8),
    ("GGT", 24.8), ("GGC", 29.2), ("GGA", 8.8), ("GGG", 11.2),
];

/// Preferred codons for E. coli, used as CAI reference weights.
const ECOLI_OPTIMAL: [(&str, f64); 19] = [
    ("CTG", 1.0), ("CGT", 1.0), ("GCG", 1.0), ("GAA", 1.0),
    ("TTC", 1.0), ("GGC", 1.0), ("CAC", 1.0), ("ATC", 1.0),
    ("AAG", 1.0), ("TTG", 1.0), ("ATG", 1.0), ("AAC", 1.0),
    ("CCG", 1.0), ("CAG", 1.0), ("AGC", 1.0), ("ACC", 1.0),
    ("GTG", 1.0), ("TGG", 1.0), ("TAC", 1.0),
];

/// S. cerevisiae codon frequencies.
const YEAST_FREQ: [(&str, f64); 64] = [
    ("TTT", 26.1), ("TTC", 18.4), ("TTA", 28.1), ("TTG", 27.2),
    ("TCT", 26.2), ("TCC", 16.8), ("TCA", 21.8), ("TCG", 8.8),
    ("TAT", 19.2), ("TAC", 14.8), ("TAA", 1.1), ("TAG", 0.5),
    ("TGT", 8.1), ("TGC", 4.8), ("TGA", 0.7), ("TGG", 10.4),

    ("CTT", 12.3), ("CTC", 5.4), ("CTA", 14.2), ("CTG", 10.5),
    ("CCT", 13.5), ("CCC", 6.8), ("CCA", 18.2), ("CCG", 5.3),
    ("CAT", 13.8), ("CAC", 7.8), ("CAA", 27.3), ("CAG", 12.1),
    ("CGT", 6.4), ("CGC", 2.6), ("CGA", 3.0), ("CGG", 1.7),

    ("ATT", 30.1), ("ATC", 17.2), ("ATA", 17.8), ("ATG", 20.9),
    ("ACT", 20.3), ("ACC", 12.7), ("ACA", 18.2), ("ACG", 8.0),
    ("AAT", 35.8), ("AAC", 24.8), ("AAA", 42.0), ("AAG", 30.8),
    ("AGT", 14.2), ("AGC", 9.8), ("AGA", 21.3), ("AGG", 9.2),

    ("GTT", 22.1), ("GTC", 11.8), ("GTA", 12.1), ("GTG", 10.8),
    ("GCT", 21.2), ("GCC", 12.6), ("GCA", 16.2), ("GCG", 6.2),
    ("GAT", 37.8), ("GAC", 20.2), ("GAA", 45.6), ("GAG", 19.2),
    ("GGT", 24.0), ("GGC", 9.8), ("GGA", 10.8), ("GGG", 6.2),
];

/// Human codon frequencies.
const HUMAN_FREQ: [(&str, f64); 64] = [
    ("TTT", 17.2), ("TTC", 20.4), ("TTA", 7.2), ("TTG", 12.8),
    ("TCT", 15.2), ("TCC", 17.8), ("TCA", 12.2), ("TCG", 4.8),
    ("TAT", 12.2), ("TAC", 15.8), ("TAA", 0.7), ("TAG", 0.6),
    ("TGT", 10.2), ("TGC", 12.8), ("TGA", 1.3), ("TGG", 13.2),

    ("CTT", 13.2), ("CTC", 19.8), ("CTA", 7.2), ("CTG", 39.8),
    ("CCT", 17.8), ("CCC", 19.8), ("CCA", 16.8), ("CCG", 6.8),
    ("CAT", 10.8), ("CAC", 15.2), ("CAA", 12.2), ("CAG", 34.2),
    ("CGT", 4.8), ("CGC", 10.8), ("CGA", 6.2), ("CGG", 11.8),

    ("ATT", 16.2), ("ATC", 21.2), ("ATA", 7.2), ("ATG", 22.2),
    ("ACT", 13.2), ("ACC", 18.8), ("ACA", 15.2), ("ACG", 6.2),
    ("AAT", 17.2), ("AAC", 19.2), ("AAA", 24.2), ("AAG", 32.8),
    ("AGT", 12.2), ("AGC", 19.2), ("AGA", 12.2), ("AGG", 12.2),

    ("GTT", 11.2), ("GTC", 14.8), ("GTA", 7.2), ("GTG", 28.2),
    ("GCT", 18.8), ("GCC", 27.8), ("GCA", 15.8), ("GCG", 7.2),
    ("GAT", 22.2), ("GAC", 25.8), ("GAA", 29.2), ("GAG", 40.8),
    ("GGT", 16.8), ("GGC", 22.2), ("GGA", 16.2), ("GGG", 16.2),
];

/// Arabidopsis thaliana codon frequencies.
const THALIANA_FREQ: [(&str, f64); 64] = [
    ("TTT", 22.4), ("TTC", 18.8), ("TTA", 8.8), ("TTG", 13.8),
    ("TCT", 18.4), ("TCC", 14.8), ("TCA", 13.8), ("TCG", 11.8),
    ("TAT", 15.2), ("TAC", 13.8), ("TAA", 1.2), ("TAG", 0.8),
    ("TGT", 12.8), ("TGC", 9.8), ("TGA", 1.8), ("TGG", 12.8),

    ("CTT", 16.8), ("CTC", 14.8), ("CTA", 8.8), ("CTG", 24.8),
    ("CCT", 16.8), ("CCC", 13.8), ("CCA", 17.8), ("CCG", 8.8),
    ("CAT", 14.8), ("CAC", 12.8), ("CAA", 18.8), ("CAG", 22.8),
    ("CGT", 8.8), ("CGC", 7.8), ("CGA", 7.8), ("CGG", 6.8),

    ("ATT", 19.8), ("ATC", 16.8), ("ATA", 9.8), ("ATG", 23.8),
    ("ACT", 16.8), ("ACC", 15.8), ("ACA", 16.8), ("ACG", 9.8),
    ("AAT", 19.8), ("AAC", 17.8), ("AAA", 26.8), ("AAG", 25.8),
    ("AGT", 14.8), ("AGC", 12.8), ("AGA", 14.8), ("AGG", 10.8),

    ("GTT", 16.8), ("GTC", 13.8), ("GTA", 9.8), ("GTG", 22.8),
    ("GCT", 22.8), ("GCC", 18.8), ("GCA", 17.8), ("GCG", 9.8),
    ("GAT", 25.8), ("GAC", 19.8), ("GAA", 32.8), ("GAG", 26.8),
    ("GGT", 19.8), ("GGC", 16.8), ("GGA", 17.8), ("GGG", 12.8),
];

// ---------------------------------------------------------------------------
// OrganismTable
// ---------------------------------------------------------------------------

/// Codon usage profile of a reference organism.
///
/// Frequencies are per-thousand-codons from empirical reference sets; they
/// are not required to sum to exactly 1000. Constructed once at registry
/// initialization and never mutated.
#[derive(Debug, Clone)]
pub struct OrganismTable {
    name: &'static str,
    freq: [f64; 64],
    optimal: Option<[f64; 64]>,
}

impl OrganismTable {
    fn build(
        name: &'static str,
        freq_pairs: &[(&str, f64); 64],
        optimal_pairs: Option<&[(&str, f64)]>,
    ) -> Self {
        let index_of = |codon: &str| -> usize {
            Codon::new(codon.as_bytes())
                .expect("embedded table codon literals are valid")
                .index()
        };
        let mut freq = [0.0f64; 64];
        for &(codon, value) in freq_pairs {
            freq[index_of(codon)] = value;
        }
        let optimal = optimal_pairs.map(|pairs| {
            let mut weights = [0.0f64; 64];
            for &(codon, w) in pairs {
                weights[index_of(codon)] = w;
            }
            weights
        });
        OrganismTable { name, freq, optimal }
    }

    /// Display name of the organism this profile describes.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Observed usage of `codon`, in occurrences per thousand codons.
    pub fn frequency(&self, codon: Codon) -> f64 {
        self.freq[codon.index()]
    }

    /// CAI reference weight in [0, 1] for `codon`, if this profile defines
    /// an optimal codon set. Non-preferred codons weigh 0.0.
    pub fn optimal_weight(&self, codon: Codon) -> Option<f64> {
        self.optimal.map(|w| w[codon.index()])
    }

    /// Whether this profile carries an optimal codon set.
    pub fn has_optimal_codons(&self) -> bool {
        self.optimal.is_some()
    }
}

impl Annotated for OrganismTable {
    fn name(&self) -> &str {
        self.name
    }
}

// ---------------------------------------------------------------------------
// Registry
// ---------------------------------------------------------------------------

struct Registry {
    tables: Vec<OrganismTable>,
    // Alias -> index into `tables`. Several aliases may share one profile.
    aliases: Vec<(&'static str, usize)>,
}

static REGISTRY: OnceLock<Registry> = OnceLock::new();

fn registry() -> &'static Registry {
    REGISTRY.get_or_init(|| Registry {
        tables: vec![
            OrganismTable::build("E.coli", &ECOLI_FREQ, Some(&ECOLI_OPTIMAL[..])),
            OrganismTable::build("S.cerevisiae", &YEAST_FREQ, None),
            OrganismTable::build("Human", &HUMAN_FREQ, None),
            OrganismTable::build("A.thaliana", &THALIANA_FREQ, None),
        ],
        aliases: vec![
            ("E.coli", 0),
            ("yeast", 1),
            ("S.cerevisiae", 1),
            ("human", 2),
            ("Human", 2),
            ("plant", 3),
            ("A.thaliana", 3),
        ],
    })
}

/// Resolve an organism name to its codon usage profile.
///
/// Lookup is by exact alias match. Unregistered names resolve to the
/// [`DEFAULT_ORGANISM`] profile; callers never see a failure, so all
/// engine operations agree on the fallback.
pub fn lookup(name: &str) -> &'static OrganismTable {
    let reg = registry();
    let idx = reg
        .aliases
        .iter()
        .find(|(alias, _)| *alias == name)
        .or_else(|| reg.aliases.iter().find(|(alias, _)| *alias == DEFAULT_ORGANISM))
        .map(|&(_, idx)| idx)
        .unwrap_or(0);
    &reg.tables[idx]
}

/// Every registered organism alias.
///
/// Aliases pointing at the same underlying profile are all listed; name
/// uniqueness does not imply distinct profiles.
pub fn supported_organisms() -> Vec<&'static str> {
    registry().aliases.iter().map(|&(alias, _)| alias).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codon(s: &str) -> Codon {
        Codon::new(s.as_bytes()).unwrap()
    }

    #[test]
    fn lookup_by_name_and_alias() {
        assert_eq!(lookup("E.coli").name(), "E.coli");
        assert_eq!(lookup("yeast").name(), "S.cerevisiae");
        assert_eq!(lookup("S.cerevisiae").name(), "S.cerevisiae");
        assert_eq!(lookup("human").name(), "Human");
        assert_eq!(lookup("plant").name(), "A.thaliana");
    }

    #[test]
    fn unknown_name_falls_back_to_default() {
        assert_eq!(lookup("B.subtilis").name(), DEFAULT_ORGANISM);
        assert_eq!(lookup("").name(), DEFAULT_ORGANISM);
        // Lookup is case-sensitive: an unregistered casing falls back too.
        assert_eq!(lookup("YEAST").name(), DEFAULT_ORGANISM);
    }

    #[test]
    fn frequency_spot_checks() {
        let ecoli = lookup("E.coli");
        assert!((ecoli.frequency(codon("CTG")) - 52.6).abs() < 1e-12);
        assert!((ecoli.frequency(codon("TAG")) - 0.2).abs() < 1e-12);
        let yeast = lookup("yeast");
        assert!((yeast.frequency(codon("GAA")) - 45.6).abs() < 1e-12);
        let human = lookup("human");
        assert!((human.frequency(codon("GAG")) - 40.8).abs() < 1e-12);
        let plant = lookup("plant");
        assert!((plant.frequency(codon("GCT")) - 22.8).abs() < 1e-12);
    }

    #[test]
    fn all_64_codons_have_frequencies() {
        for name in ["E.coli", "yeast", "human", "plant"] {
            let table = lookup(name);
            for idx in 0..64 {
                assert!(
                    table.frequency(Codon::from_index(idx)) > 0.0,
                    "{} has no frequency for {}",
                    name,
                    Codon::from_index(idx)
                );
            }
        }
    }

    #[test]
    fn optimal_codons_only_for_default() {
        let ecoli = lookup("E.coli");
        assert!(ecoli.has_optimal_codons());
        assert_eq!(ecoli.optimal_weight(codon("CTG")), Some(1.0));
        assert_eq!(ecoli.optimal_weight(codon("CTA")), Some(0.0));
        assert!(!lookup("yeast").has_optimal_codons());
        assert_eq!(lookup("human").optimal_weight(codon("CTG")), None);
    }

    #[test]
    fn alias_list_includes_duplicated_profiles() {
        let names = supported_organisms();
        assert_eq!(names.len(), 7);
        for expected in ["E.coli", "yeast", "S.cerevisiae", "human", "Human", "plant", "A.thaliana"] {
            assert!(names.contains(&expected), "missing alias {}", expected);
        }
    }
}
