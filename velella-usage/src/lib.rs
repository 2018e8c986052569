//! Codon usage analysis for the Velella workspace.
//!
//! Computes codon-bias statistics for a coding DNA sequence relative to a
//! reference organism, predicts expression efficiency, and suggests codon
//! optimizations:
//!
//! - **Codon counting** — [`CodonCounts`] via one canonical extraction pass
//! - **CAI** — [`codon_adaptation_index`], geometric-mean adaptation score
//! - **RSCU** — [`rscu`], per-codon synonymous usage bias
//! - **ENC** — [`effective_codon_number`], homozygosity-based diversity
//! - **Rare codons** — [`find_rare_codons`] against per-organism profiles
//! - **Prediction** — [`predict_expression_level`] and
//!   [`optimization_suggestions`]
//! - **Reports** — [`analyze`] assembles a [`UsageReport`];
//!   [`report::render`] formats it as text
//!
//! The engine is synchronous and side-effect-free: all operations are pure
//! functions of the sequence, the organism profile, and fixed configuration,
//! and are safe to call concurrently.
//!
//! # Example
//!
//! ```
//! use velella_usage::{analyze, report::render};
//!
//! let report = analyze(b"ATGGAAGAACTGCTG", "E.coli");
//! assert_eq!(report.total_codons, 5);
//! assert!(report.cai > 0.0 && report.cai <= 1.0);
//!
//! let text = render(&report);
//! assert!(text.contains("Total codons: 5"));
//! ```

pub mod analysis;
pub mod organism;
pub mod report;

pub use analysis::{
    analyze, codon_adaptation_index, codon_bias_score, effective_codon_number,
    find_rare_codons, gc_content_percent, optimization_suggestions,
    predict_expression_level, rscu, CodonCounts, CodonUsageRecord, UsageReport,
    DEFAULT_RARE_CODON_THRESHOLD, EMPTY_SEQUENCE_LABEL,
};
pub use organism::{lookup, supported_organisms, OrganismTable, DEFAULT_ORGANISM};
pub use report::render;
