//! Codon values and the standard genetic code.
//!
//! The genetic code lives here as one canonical table; the usage engine and
//! the translation helpers all query the same 64 entries, so the two can
//! never drift apart. Codons index into dense 64-element arrays via the
//! base encoding A=0, C=1, G=2, T=3.

use std::fmt;

/// Symbol used for translation stops.
pub const STOP_SYMBOL: u8 = b'*';

/// Sentinel returned for codons that cannot be translated.
pub const UNKNOWN_SYMBOL: u8 = b'X';

/// The 20 standard amino acid symbols, in alphabetical order.
pub const AMINO_ACIDS: [u8; 20] = *b"ACDEFGHIKLMNPQRSTVWY";

fn base_index(b: u8) -> Option<usize> {
    match b.to_ascii_uppercase() {
        b'A' => Some(0),
        b'C' => Some(1),
        b'G' => Some(2),
        b'T' => Some(3),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Codon
// ---------------------------------------------------------------------------

/// A single codon: three bases from the strict `{A,C,G,T}` alphabet.
///
/// Stored uppercase. The derived ordering is byte order, which coincides
/// with table-index order (AAA, AAC, AAG, AAT, ACA, ...).
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Codon([u8; 3]);

impl Codon {
    /// Parse a codon from raw bytes, case-insensitively.
    ///
    /// Returns `None` unless the input is exactly 3 bases from `{A,C,G,T}`.
    /// Ambiguity codes (N, R, Y, ...) are not codon bases.
    pub fn new(bytes: &[u8]) -> Option<Self> {
        if bytes.len() != 3 {
            return None;
        }
        let mut codon = [0u8; 3];
        for (slot, &b) in codon.iter_mut().zip(bytes) {
            base_index(b)?;
            *slot = b.to_ascii_uppercase();
        }
        Some(Codon(codon))
    }

    /// Reconstruct a codon from a table index in `[0, 64)`.
    pub fn from_index(idx: usize) -> Self {
        const BASES: [u8; 4] = [b'A', b'C', b'G', b'T'];
        debug_assert!(idx < 64);
        Codon([BASES[(idx >> 4) & 3], BASES[(idx >> 2) & 3], BASES[idx & 3]])
    }

    /// Index of this codon in a dense 64-element table.
    pub fn index(&self) -> usize {
        // Bases are validated at construction, so the lookups cannot fail.
        let b1 = base_index(self.0[0]).unwrap_or(0);
        let b2 = base_index(self.0[1]).unwrap_or(0);
        let b3 = base_index(self.0[2]).unwrap_or(0);
        b1 * 16 + b2 * 4 + b3
    }

    /// The three uppercase bases.
    pub fn as_bytes(&self) -> &[u8; 3] {
        &self.0
    }

    /// The codon as a string slice.
    pub fn as_str(&self) -> &str {
        // Always valid ASCII by construction.
        std::str::from_utf8(&self.0).unwrap_or("???")
    }
}

impl fmt::Display for Codon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl fmt::Debug for Codon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Codon(\"{}\")", self.as_str())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Codon {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Codon {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Codon::new(s.as_bytes())
            .ok_or_else(|| serde::de::Error::custom(format!("invalid codon '{}'", s)))
    }
}

// ---------------------------------------------------------------------------
// Standard genetic code (const array)
// ---------------------------------------------------------------------------

// Codon order: AAA, AAC, AAG, AAT, ACA, ACC, ACG, ACT, AGA, AGC, AGG, AGT,
//              ATA, ATC, ATG, ATT, CAA, CAC, CAG, CAT, CCA, CCC, CCG, CCT,
//              CGA, CGC, CGG, CGT, CTA, CTC, CTG, CTT, GAA, GAC, GAG, GAT,
//              GCA, GCC, GCG, GCT, GGA, GGC, GGG, GGT, GTA, GTC, GTG, GTT,
//              TAA, TAC, TAG, TAT, TCA, TCC, TCG, TCT, TGA, TGC, TGG, TGT,
//              TTA, TTC, TTG, TTT

/// Standard genetic code (NCBI Table 1).
const STANDARD_AA: [u8; 64] = [
    b'K', b'N', b'K', b'N', b'T', b'T', b'T', b'T', b'R', b'S', b'R', b'S',
    b'I', b'I', b'M', b'I', b'Q', b'H', b'Q', b'H', b'P', b'P', b'P', b'P',
    b'R', b'R', b'R', b'R', b'L', b'L', b'L', b'L', b'E', b'D', b'E', b'D',
    b'A', b'A', b'A', b'A', b'G', b'G', b'G', b'G', b'V', b'V', b'V', b'V',
    b'*', b'Y', b'*', b'Y', b'S', b'S', b'S', b'S', b'*', b'C', b'W', b'C',
    b'L', b'F', b'L', b'F',
];

/// The standard genetic code translation table.
///
/// Wraps a 64-element amino acid lookup array. Construction is a cheap
/// const-array copy, so callers create it on demand and share it freely;
/// the table is never mutated and is safe to query concurrently.
#[derive(Debug, Clone)]
pub struct GeneticCode {
    table: [u8; 64],
}

impl GeneticCode {
    /// Create the standard genetic code (NCBI Table 1).
    pub fn standard() -> Self {
        GeneticCode { table: STANDARD_AA }
    }

    /// Translate a single codon (3-byte slice) to its amino acid symbol.
    ///
    /// Stop codons translate to [`STOP_SYMBOL`]. Fails softly: any input
    /// that is not a length-3 `{A,C,G,T}` triplet (case-insensitive)
    /// yields [`UNKNOWN_SYMBOL`].
    pub fn translate_codon(&self, codon: &[u8]) -> u8 {
        match Codon::new(codon) {
            Some(c) => self.table[c.index()],
            None => UNKNOWN_SYMBOL,
        }
    }

    /// Amino acid symbol for an already-validated codon.
    pub fn amino_acid(&self, codon: Codon) -> u8 {
        self.table[codon.index()]
    }

    /// All codons encoding `aa`, in table order.
    ///
    /// Empty for the stop symbol and for symbols outside the code; the
    /// usage metrics are defined over sense codons only.
    pub fn synonymous_codons(&self, aa: u8) -> Vec<Codon> {
        if aa == STOP_SYMBOL {
            return Vec::new();
        }
        (0..64)
            .filter(|&i| self.table[i] == aa)
            .map(Codon::from_index)
            .collect()
    }

    /// Number of codons encoding `aa` (0 for stop/unknown symbols).
    pub fn synonym_count(&self, aa: u8) -> usize {
        if aa == STOP_SYMBOL {
            return 0;
        }
        (0..64).filter(|&i| self.table[i] == aa).count()
    }

    /// Check whether a codon is the start codon (ATG).
    pub fn is_start(&self, codon: &[u8]) -> bool {
        Codon::new(codon).map_or(false, |c| c.as_bytes() == b"ATG")
    }

    /// Check whether a codon is a stop codon (TAA, TAG, TGA).
    pub fn is_stop(&self, codon: &[u8]) -> bool {
        Codon::new(codon).map_or(false, |c| self.table[c.index()] == STOP_SYMBOL)
    }

    /// Translate a nucleotide sequence, stopping at the first stop codon.
    ///
    /// Untranslatable triplets appear as [`UNKNOWN_SYMBOL`]. The trailing
    /// 1-2 leftover bases of a non-multiple-of-3 sequence are ignored.
    pub fn translate_sequence(&self, seq: &[u8]) -> Vec<u8> {
        let mut protein = Vec::with_capacity(seq.len() / 3);
        for codon in seq.chunks_exact(3) {
            let aa = self.translate_codon(codon);
            if aa == STOP_SYMBOL {
                break;
            }
            protein.push(aa);
        }
        protein
    }
}

/// Full name of an amino acid symbol ("Methionine", "Stop", ...).
///
/// Returns "Unknown" for symbols outside the standard code.
pub fn amino_acid_name(aa: u8) -> &'static str {
    match aa {
        b'A' => "Alanine",
        b'C' => "Cysteine",
        b'D' => "Aspartic acid",
        b'E' => "Glutamic acid",
        b'F' => "Phenylalanine",
        b'G' => "Glycine",
        b'H' => "Histidine",
        b'I' => "Isoleucine",
        b'K' => "Lysine",
        b'L' => "Leucine",
        b'M' => "Methionine",
        b'N' => "Asparagine",
        b'P' => "Proline",
        b'Q' => "Glutamine",
        b'R' => "Arginine",
        b'S' => "Serine",
        b'T' => "Threonine",
        b'V' => "Valine",
        b'W' => "Tryptophan",
        b'Y' => "Tyrosine",
        STOP_SYMBOL => "Stop",
        _ => "Unknown",
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codon_parsing() {
        assert_eq!(Codon::new(b"ATG").unwrap().as_str(), "ATG");
        assert_eq!(Codon::new(b"atg").unwrap().as_str(), "ATG");
        assert!(Codon::new(b"AT").is_none());
        assert!(Codon::new(b"ATGA").is_none());
        assert!(Codon::new(b"ANG").is_none());
        assert!(Codon::new(b"AUG").is_none(), "RNA bases are not accepted");
    }

    #[test]
    fn codon_index_roundtrip() {
        assert_eq!(Codon::new(b"AAA").unwrap().index(), 0);
        assert_eq!(Codon::new(b"TTT").unwrap().index(), 63);
        assert_eq!(Codon::from_index(14).as_str(), "ATG");
        let gca = Codon::new(b"GCA").unwrap();
        assert_eq!(Codon::from_index(gca.index()), gca);
    }

    #[test]
    fn codon_ordering_matches_index_order() {
        let aac = Codon::new(b"AAC").unwrap();
        let aaa = Codon::new(b"AAA").unwrap();
        let ttt = Codon::new(b"TTT").unwrap();
        assert!(aaa < aac);
        assert!(aac < ttt);
    }

    #[test]
    fn table_covers_all_64_codons() {
        let code = GeneticCode::standard();
        let stops = (0..64)
            .filter(|&i| code.amino_acid(Codon::from_index(i)) == STOP_SYMBOL)
            .count();
        assert_eq!(stops, 3);
        // Every sense codon maps to one of the 20 standard symbols.
        for i in 0..64 {
            let aa = code.amino_acid(Codon::from_index(i));
            assert!(aa == STOP_SYMBOL || AMINO_ACIDS.contains(&aa));
        }
    }

    #[test]
    fn translate_standard_codons() {
        let code = GeneticCode::standard();
        assert_eq!(code.translate_codon(b"ATG"), b'M');
        assert_eq!(code.translate_codon(b"TTT"), b'F');
        assert_eq!(code.translate_codon(b"TGG"), b'W');
        assert_eq!(code.translate_codon(b"TAA"), STOP_SYMBOL);
        assert_eq!(code.translate_codon(b"TAG"), STOP_SYMBOL);
        assert_eq!(code.translate_codon(b"TGA"), STOP_SYMBOL);
    }

    #[test]
    fn translate_fails_softly() {
        let code = GeneticCode::standard();
        assert_eq!(code.translate_codon(b"AT"), UNKNOWN_SYMBOL);
        assert_eq!(code.translate_codon(b"ATGC"), UNKNOWN_SYMBOL);
        assert_eq!(code.translate_codon(b"ANG"), UNKNOWN_SYMBOL);
        assert_eq!(code.translate_codon(b"atg"), b'M', "case-insensitive");
    }

    #[test]
    fn synonymous_codon_sets() {
        let code = GeneticCode::standard();
        assert_eq!(code.synonym_count(b'M'), 1);
        assert_eq!(code.synonym_count(b'W'), 1);
        assert_eq!(code.synonym_count(b'F'), 2);
        assert_eq!(code.synonym_count(b'L'), 6);
        assert_eq!(code.synonym_count(b'R'), 6);
        assert_eq!(code.synonym_count(b'A'), 4);
        // Stop and unknown symbols have no synonymous set.
        assert!(code.synonymous_codons(STOP_SYMBOL).is_empty());
        assert!(code.synonymous_codons(b'?').is_empty());

        let phe = code.synonymous_codons(b'F');
        assert_eq!(phe.len(), 2);
        assert!(phe.contains(&Codon::new(b"TTT").unwrap()));
        assert!(phe.contains(&Codon::new(b"TTC").unwrap()));
    }

    #[test]
    fn start_and_stop_queries() {
        let code = GeneticCode::standard();
        assert!(code.is_start(b"ATG"));
        assert!(code.is_start(b"atg"));
        assert!(!code.is_start(b"GTG"));
        assert!(code.is_stop(b"TAA"));
        assert!(code.is_stop(b"TAG"));
        assert!(code.is_stop(b"TGA"));
        assert!(!code.is_stop(b"TGG"));
        assert!(!code.is_stop(b"XX"));
    }

    #[test]
    fn translate_sequence_stops_at_stop() {
        let code = GeneticCode::standard();
        assert_eq!(code.translate_sequence(b"ATGTTTTAAGGG"), b"MF");
    }

    #[test]
    fn translate_sequence_ignores_trailing_fragment() {
        let code = GeneticCode::standard();
        assert_eq!(code.translate_sequence(b"ATGTTTGA"), b"MF");
    }

    #[test]
    fn translate_sequence_marks_invalid_codons() {
        let code = GeneticCode::standard();
        assert_eq!(code.translate_sequence(b"ATGNNNGAA"), b"MXE");
    }

    #[test]
    fn amino_acid_names() {
        assert_eq!(amino_acid_name(b'F'), "Phenylalanine");
        assert_eq!(amino_acid_name(b'M'), "Methionine");
        assert_eq!(amino_acid_name(STOP_SYMBOL), "Stop");
        assert_eq!(amino_acid_name(b'?'), "Unknown");
    }
}
