//! Codon usage analysis: counts, CAI, RSCU, ENC, bias, rare codons,
//! expression prediction, and optimization suggestions.
//!
//! Every metric is built on one canonical codon extraction pass
//! ([`CodonCounts::from_sequence`]): the sequence is split into
//! non-overlapping triplets from index 0 and a triplet is kept only if all
//! three bases are `{A,C,G,T}` (case-insensitive). Malformed or ambiguous
//! triplets and trailing fragments are silently dropped, never errors.
//!
//! The engine degrades gracefully on malformed input: empty and codon-less
//! sequences produce a sentinel report, unknown organisms fall back to the
//! default profile, and every division-by-zero case resolves to 0.0.

use std::collections::BTreeMap;

use velella_core::{Scored, Summarizable};
use velella_seq::{Codon, GeneticCode, AMINO_ACIDS, STOP_SYMBOL};

use crate::organism::{self, OrganismTable};

/// Default rare-codon threshold: a codon is rare when its reference usage,
/// as a fraction (per-thousand value / 1000), falls strictly below this.
pub const DEFAULT_RARE_CODON_THRESHOLD: f64 = 0.05;

/// Label used when a sequence yields no valid codons.
pub const EMPTY_SEQUENCE_LABEL: &str = "Cannot analyze empty sequence";

// ---------------------------------------------------------------------------
// Codon extraction and counting
// ---------------------------------------------------------------------------

/// Iterate the valid codons of a sequence, in order.
fn codons(seq: &[u8]) -> impl Iterator<Item = Codon> + '_ {
    seq.chunks_exact(3).filter_map(Codon::new)
}

/// Codon occurrence counts for one coding sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodonCounts {
    counts: [u32; 64],
    total: u32,
}

impl CodonCounts {
    /// Count codons with the canonical extraction pass.
    pub fn from_sequence(seq: &[u8]) -> Self {
        let mut counts = [0u32; 64];
        let mut total = 0u32;
        for codon in codons(seq) {
            counts[codon.index()] += 1;
            total += 1;
        }
        CodonCounts { counts, total }
    }

    /// Total number of valid codons.
    pub fn total(&self) -> u32 {
        self.total
    }

    /// Occurrence count for one codon.
    pub fn count(&self, codon: Codon) -> u32 {
        self.counts[codon.index()]
    }

    /// Iterate observed codons and their counts, in codon order.
    pub fn iter_observed(&self) -> impl Iterator<Item = (Codon, u32)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter(|&(_, &c)| c > 0)
            .map(|(idx, &c)| (Codon::from_index(idx), c))
    }
}

// ---------------------------------------------------------------------------
// Result records
// ---------------------------------------------------------------------------

/// Usage statistics for one distinct codon observed in a sequence.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CodonUsageRecord {
    /// The codon.
    pub codon: Codon,
    /// Encoded amino acid symbol (`'*'` for stops).
    pub amino_acid: u8,
    /// Occurrences in the sequence.
    pub count: u32,
    /// Share of all valid codons, in percent.
    pub frequency: f64,
    /// Relative synonymous codon usage.
    pub rscu: f64,
}

/// Complete codon usage analysis of one sequence against one organism.
///
/// Produced fresh by [`analyze`]; identical inputs produce bit-identical
/// reports.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UsageReport {
    /// Resolved name of the reference organism (empty when the sequence
    /// could not be analyzed).
    pub organism: String,
    /// Number of valid codons.
    pub total_codons: u32,
    /// GC share of the raw sequence, in percent. The denominator is the
    /// raw sequence length, not the valid-codon count.
    pub gc_percent: f64,
    /// Codon Adaptation Index, nominally in (0, 1].
    pub cai: f64,
    /// Effective Number of Codons. Higher means less codon bias.
    pub enc: f64,
    /// Summed absolute deviation from the organism's usage pattern.
    pub codon_bias: f64,
    /// Expression level prediction, annotated with the CAI value.
    pub expression: String,
    /// Per-codon usage records, sorted by frequency descending
    /// (ties keep codon order).
    pub codon_usage: Vec<CodonUsageRecord>,
    /// The same records grouped by encoded amino acid, in codon order.
    pub by_amino_acid: BTreeMap<u8, Vec<CodonUsageRecord>>,
    /// Rare codons present in the sequence, with their occurrence counts.
    pub rare_codons: BTreeMap<Codon, u32>,
    /// Optimization suggestions, in rule order.
    pub suggestions: Vec<String>,
}

impl Scored for UsageReport {
    fn score(&self) -> f64 {
        self.cai
    }
}

impl Summarizable for UsageReport {
    fn summary(&self) -> String {
        format!(
            "{} codons, CAI {:.3}, ENC {:.1}, {} rare",
            self.total_codons,
            self.cai,
            self.enc,
            self.rare_codons.len()
        )
    }
}

// ---------------------------------------------------------------------------
// Metrics
// ---------------------------------------------------------------------------

/// GC share of the raw sequence in percent, case-insensitive.
///
/// Divides by the raw sequence length, including ambiguity characters and
/// trailing fragments; this intentionally differs from the valid-codon
/// denominator used by the other metrics. Returns 0.0 for empty input.
pub fn gc_content_percent(seq: &[u8]) -> f64 {
    if seq.is_empty() {
        return 0.0;
    }
    let gc = seq
        .iter()
        .filter(|&&b| matches!(b.to_ascii_uppercase(), b'G' | b'C'))
        .count();
    gc as f64 / seq.len() as f64 * 100.0
}

fn cai_from_counts(counts: &CodonCounts, table: &OrganismTable, code: &GeneticCode) -> f64 {
    let mut log_sum = 0.0f64;
    let mut contributing = 0u64;

    for (codon, count) in counts.iter_observed() {
        let aa = code.amino_acid(codon);
        if aa == STOP_SYMBOL {
            continue;
        }
        let max_freq = code
            .synonymous_codons(aa)
            .iter()
            .map(|&c| table.frequency(c))
            .fold(0.0f64, f64::max);
        let freq = table.frequency(codon);
        // A codon with no recorded usage contributes nothing rather than
        // dragging the geometric mean to zero.
        if freq > 0.0 && max_freq > 0.0 {
            log_sum += (freq / max_freq).ln() * count as f64;
            contributing += count as u64;
        }
    }

    if contributing > 0 {
        (log_sum / contributing as f64).exp()
    } else {
        0.0
    }
}

/// Codon Adaptation Index of a sequence against an organism's usage table.
///
/// Geometric mean (accumulated in log domain) of each sense codon's
/// frequency relative to the highest-frequency synonymous codon. Returns
/// 0.0 when no codon contributes.
pub fn codon_adaptation_index(seq: &[u8], organism: &str) -> f64 {
    let counts = CodonCounts::from_sequence(seq);
    cai_from_counts(&counts, organism::lookup(organism), &GeneticCode::standard())
}

/// Relative Synonymous Codon Usage of one codon within a count table.
///
/// Observed count over the count expected under uniform synonymous usage
/// (total observed for the amino acid / number of synonymous codons the
/// genetic code defines). 0.0 for stop codons and never-observed amino
/// acids.
pub fn rscu(codon: Codon, counts: &CodonCounts, code: &GeneticCode) -> f64 {
    let aa = code.amino_acid(codon);
    if aa == STOP_SYMBOL {
        return 0.0;
    }
    let synonyms = code.synonymous_codons(aa);
    let total_for_aa: u32 = synonyms.iter().map(|&c| counts.count(c)).sum();
    if total_for_aa == 0 {
        return 0.0;
    }
    let expected = total_for_aa as f64 / synonyms.len() as f64;
    counts.count(codon) as f64 / expected
}

/// Effective Number of Codons over a count table.
///
/// Per amino-acid group with observations, computes the inverse of the
/// homozygosity Σ(count/total)² and averages the group contributions.
/// Stop codons are excluded. Higher values mean usage closer to uniform;
/// 0.0 when nothing was observed.
pub fn effective_codon_number(counts: &CodonCounts, code: &GeneticCode) -> f64 {
    let mut sum = 0.0f64;
    let mut groups = 0u32;

    for &aa in AMINO_ACIDS.iter() {
        let synonyms = code.synonymous_codons(aa);
        let total: u32 = synonyms.iter().map(|&c| counts.count(c)).sum();
        if total == 0 {
            continue;
        }
        let homozygosity: f64 = synonyms
            .iter()
            .map(|&c| {
                let f = counts.count(c) as f64 / total as f64;
                f * f
            })
            .sum();
        if homozygosity > 0.0 {
            sum += 1.0 / homozygosity;
            groups += 1;
        }
    }

    if groups > 0 {
        sum / groups as f64
    } else {
        0.0
    }
}

/// Summed absolute deviation between observed codon fractions and the
/// organism's reference fractions (per-thousand / 1000), over the codons
/// observed in the sequence. Larger means more divergent usage.
pub fn codon_bias_score(counts: &CodonCounts, table: &OrganismTable) -> f64 {
    let total = counts.total();
    if total == 0 {
        return 0.0;
    }
    counts
        .iter_observed()
        .map(|(codon, count)| {
            let observed = count as f64 / total as f64;
            let expected = table.frequency(codon) / 1000.0;
            (observed - expected).abs()
        })
        .sum()
}

fn rare_codons_for(seq: &[u8], table: &OrganismTable, threshold: f64) -> Vec<Codon> {
    let mut seen = [false; 64];
    let mut rare = Vec::new();
    for codon in codons(seq) {
        let freq = table.frequency(codon);
        // Codons without a recorded frequency are never flagged.
        if freq > 0.0 && freq / 1000.0 < threshold && !seen[codon.index()] {
            seen[codon.index()] = true;
            rare.push(codon);
        }
    }
    rare
}

/// Distinct rare codons present in the sequence, in order of first
/// appearance.
///
/// A codon is rare when its reference usage as a fraction falls strictly
/// below `threshold` (see [`DEFAULT_RARE_CODON_THRESHOLD`]).
pub fn find_rare_codons(seq: &[u8], organism: &str, threshold: f64) -> Vec<Codon> {
    rare_codons_for(seq, organism::lookup(organism), threshold)
}

// ---------------------------------------------------------------------------
// Classification and suggestions
// ---------------------------------------------------------------------------

fn classify_expression(cai: f64, rare_count: usize) -> String {
    let mut level = if cai >= 0.8 {
        "High"
    } else if cai >= 0.6 {
        "Medium"
    } else if cai >= 0.4 {
        "Low"
    } else {
        "Very low"
    };

    if rare_count > 10 {
        level = "Low (many rare codons)";
    } else if rare_count > 5 {
        if level == "High" {
            level = "Medium-High";
        } else if level == "Medium" {
            level = "Medium-Low";
        }
    }

    format!("{} (CAI: {:.3})", level, cai)
}

/// Predict the expression level of a sequence in an organism.
///
/// Maps CAI into an ordinal band, downgraded when many rare codons are
/// present, and annotates the label with the CAI value.
pub fn predict_expression_level(seq: &[u8], organism: &str) -> String {
    let table = organism::lookup(organism);
    let counts = CodonCounts::from_sequence(seq);
    let cai = cai_from_counts(&counts, table, &GeneticCode::standard());
    let rare = rare_codons_for(seq, table, DEFAULT_RARE_CODON_THRESHOLD);
    classify_expression(cai, rare.len())
}

fn suggestions_for(
    cai: f64,
    rare: &[Codon],
    table: &OrganismTable,
    code: &GeneticCode,
) -> Vec<String> {
    let mut suggestions = Vec::new();

    if cai < 0.6 {
        suggestions.push(format!(
            "• Low CAI ({:.3}) - consider codon optimization",
            cai
        ));
    }

    if !rare.is_empty() {
        suggestions.push(format!(
            "• Found {} rare codons - may limit expression",
            rare.len()
        ));
        if rare.len() <= 3 {
            suggestions.push("• Rare codons found:".to_string());
            for &codon in rare {
                suggestions.push(format!(
                    "  - {} ({})",
                    codon,
                    code.amino_acid(codon) as char
                ));
            }
        }
    }

    if cai > 0.8 && rare.len() < 3 {
        suggestions.push(format!("• Sequence well optimized for {}", table.name()));
    }

    suggestions
}

/// Codon optimization suggestions for expressing a sequence in an organism.
///
/// Sequential rule evaluation; any subset may fire. The low-CAI and
/// well-optimized rules are numerically disjoint, the rare-codon rule is
/// independent.
pub fn optimization_suggestions(seq: &[u8], organism: &str) -> Vec<String> {
    let table = organism::lookup(organism);
    let code = GeneticCode::standard();
    let counts = CodonCounts::from_sequence(seq);
    let cai = cai_from_counts(&counts, table, &code);
    let rare = rare_codons_for(seq, table, DEFAULT_RARE_CODON_THRESHOLD);
    suggestions_for(cai, &rare, table, &code)
}

// ---------------------------------------------------------------------------
// Orchestration
// ---------------------------------------------------------------------------

/// Run the full codon usage analysis of a sequence against an organism.
///
/// A sequence with no valid codons short-circuits to a report whose only
/// populated field is the [`EMPTY_SEQUENCE_LABEL`] prediction.
pub fn analyze(seq: &[u8], organism: &str) -> UsageReport {
    let counts = CodonCounts::from_sequence(seq);
    if counts.total() == 0 {
        return UsageReport {
            expression: EMPTY_SEQUENCE_LABEL.to_string(),
            ..UsageReport::default()
        };
    }

    let table = organism::lookup(organism);
    let code = GeneticCode::standard();
    let total = counts.total();

    let gc_percent = gc_content_percent(seq);
    let cai = cai_from_counts(&counts, table, &code);

    let mut records: Vec<CodonUsageRecord> = counts
        .iter_observed()
        .map(|(codon, count)| CodonUsageRecord {
            codon,
            amino_acid: code.amino_acid(codon),
            count,
            frequency: count as f64 / total as f64 * 100.0,
            rscu: rscu(codon, &counts, &code),
        })
        .collect();

    let mut by_amino_acid: BTreeMap<u8, Vec<CodonUsageRecord>> = BTreeMap::new();
    for record in &records {
        by_amino_acid
            .entry(record.amino_acid)
            .or_default()
            .push(record.clone());
    }

    // Stable sort: equal frequencies keep codon order.
    records.sort_by(|a, b| b.frequency.total_cmp(&a.frequency));

    let enc = effective_codon_number(&counts, &code);
    let codon_bias = codon_bias_score(&counts, table);

    let rare = rare_codons_for(seq, table, DEFAULT_RARE_CODON_THRESHOLD);
    let rare_codons: BTreeMap<Codon, u32> =
        rare.iter().map(|&c| (c, counts.count(c))).collect();

    let expression = classify_expression(cai, rare.len());
    let suggestions = suggestions_for(cai, &rare, table, &code);

    UsageReport {
        organism: table.name().to_string(),
        total_codons: total,
        gc_percent,
        cai,
        enc,
        codon_bias,
        expression,
        codon_usage: records,
        by_amino_acid,
        rare_codons,
        suggestions,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
