//! Plain-text rendering of a [`UsageReport`].
//!
//! Pure formatting: no value is recomputed or altered here. Sections with
//! no content (rare codons, suggestions) are omitted entirely; the
//! interpretive threshold guide at the end is fixed text.

use std::fmt::Write;

use crate::analysis::UsageReport;

/// Render an analysis result as a human-readable text report.
pub fn render(report: &UsageReport) -> String {
    let mut out = String::new();

    // Writing to a String cannot fail; discard the fmt::Result plumbing.
    let _ = writeln!(out, "=== CODON USAGE ANALYSIS ===");
    let _ = writeln!(out);
    let _ = writeln!(out, "Target organism: {}", report.organism);
    let _ = writeln!(out, "Total codons: {}", report.total_codons);
    let _ = writeln!(out, "GC content: {:.1}%", report.gc_percent);
    let _ = writeln!(out, "Codon Adaptation Index (CAI): {:.3}", report.cai);
    let _ = writeln!(out, "Expression prediction: {}", report.expression);
    let _ = writeln!(out, "Effective Number of Codons (ENC): {:.1}", report.enc);
    let _ = writeln!(out);

    let _ = writeln!(out, "=== CODON USAGE (Top 10) ===");
    let _ = writeln!(
        out,
        "{:<8}{:<4}{:<8}{:<10}{:<8}",
        "Codon", "AA", "Count", "Freq%", "RSCU"
    );
    let _ = writeln!(out, "{}", "-".repeat(40));
    for record in report.codon_usage.iter().take(10) {
        let _ = writeln!(
            out,
            "{:<8}{:<4}{:<8}{:<10.1}{:<8.2}",
            record.codon,
            record.amino_acid as char,
            record.count,
            record.frequency,
            record.rscu
        );
    }

    if !report.rare_codons.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "=== RARE CODONS DETECTED ===");
        for (codon, count) in &report.rare_codons {
            let _ = writeln!(out, "• {}: {} occurrences", codon, count);
        }
    }

    if !report.suggestions.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "=== OPTIMIZATION RECOMMENDATIONS ===");
        for suggestion in &report.suggestions {
            let _ = writeln!(out, "{}", suggestion);
        }
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "=== INTERPRETATION GUIDE ===");
    let _ = writeln!(out, "• CAI > 0.8: excellent for high expression");
    let _ = writeln!(out, "• CAI 0.6-0.8: good for moderate expression");
    let _ = writeln!(out, "• CAI < 0.6: consider optimization");
    let _ = writeln!(out, "• ENC > 45: low codon preference");
    let _ = writeln!(out, "• ENC < 35: strong codon preference");

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyze;

    #[test]
    fn renders_header_metrics() {
        let report = analyze(b"ATGGAAGAACTGCTG", "E.coli");
        let text = render(&report);
        assert!(text.contains("Target organism: E.coli"));
        assert!(text.contains("Total codons: 5"));
        assert!(text.contains("Codon Adaptation Index (CAI): 1.000"));
        assert!(text.contains("Expression prediction: High (CAI: 1.000)"));
        assert!(text.contains("=== INTERPRETATION GUIDE ==="));
    }

    #[test]
    fn usage_table_truncates_to_ten_rows() {
        // 12 distinct codons; only the first 10 records are rendered.
        let seq = b"ATGGAACTGCTTAAACGTGCGGCCTTTTTCGGCGGT";
        let report = analyze(seq, "E.coli");
        assert!(report.codon_usage.len() > 10);
        let text = render(&report);
        let rows = text
            .lines()
            .skip_while(|l| !l.starts_with("-"))
            .skip(1)
            .take_while(|l| !l.is_empty())
            .count();
        assert_eq!(rows, 10);
    }

    #[test]
    fn rare_section_omitted_when_empty() {
        // CTG is not rare in E. coli and CAI is 1.0.
        let report = analyze(b"CTGCTG", "E.coli");
        assert!(report.rare_codons.is_empty());
        let text = render(&report);
        assert!(!text.contains("=== RARE CODONS DETECTED ==="));
    }

    #[test]
    fn rare_section_lists_counts() {
        let report = analyze(b"GAAGAAATG", "E.coli");
        let text = render(&report);
        assert!(text.contains("=== RARE CODONS DETECTED ==="));
        assert!(text.contains("• GAA: 2 occurrences"));
        assert!(text.contains("• ATG: 1 occurrences"));
    }

    #[test]
    fn suggestions_rendered_verbatim() {
        let report = analyze(b"CTACTACTA", "E.coli");
        let text = render(&report);
        assert!(text.contains("=== OPTIMIZATION RECOMMENDATIONS ==="));
        for suggestion in &report.suggestions {
            assert!(text.contains(suggestion.as_str()));
        }
    }

    #[test]
    fn rendering_does_not_mutate_the_report() {
        let report = analyze(b"ATGGAAGAACTGCTG", "E.coli");
        let before = report.clone();
        let _ = render(&report);
        assert_eq!(report, before);
    }
}
