//! Validated DNA sequence type.
//!
//! [`DnaSequence`] is a newtype over `Vec<u8>`. Construction uppercases and
//! validates every byte against the IUPAC DNA alphabet, so the inner data is
//! always uppercase and `as_bytes()` is safe to pass to downstream `&[u8]`
//! APIs. Biologically meaningful operations live on the type itself:
//! complement, GC content, nucleotide counts, molecular weight.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Deref;

use velella_core::{Sequence, Summarizable, VelellaError};

/// IUPAC DNA alphabet: the four bases plus ambiguity codes.
const IUPAC_DNA: &[u8] = b"ACGTNRYSWKMBDHV";

/// Deoxynucleotide monophosphate residue weights, g/mol.
const WEIGHT_A: f64 = 331.2;
const WEIGHT_T: f64 = 322.2;
const WEIGHT_C: f64 = 307.2;
const WEIGHT_G: f64 = 347.2;

/// Mass of one water molecule, released per phosphodiester bond.
const WATER: f64 = 18.015_28;

fn complement(b: u8) -> u8 {
    match b {
        b'A' => b'T',
        b'T' => b'A',
        b'C' => b'G',
        b'G' => b'C',
        b'R' => b'Y', // A|G -> T|C
        b'Y' => b'R',
        b'S' => b'S', // G|C -> C|G
        b'W' => b'W', // A|T -> T|A
        b'K' => b'M', // G|T -> C|A
        b'M' => b'K',
        b'B' => b'V', // C|G|T -> G|C|A
        b'V' => b'B',
        b'D' => b'H', // A|G|T -> T|C|A
        b'H' => b'D',
        _ => b'N',
    }
}

/// A validated DNA sequence (IUPAC alphabet, always uppercase).
#[derive(Clone)]
pub struct DnaSequence {
    data: Vec<u8>,
}

impl DnaSequence {
    /// Create a new validated DNA sequence from raw bytes.
    ///
    /// Input is uppercased, then every byte is checked against the IUPAC
    /// DNA alphabet. Returns an error naming the first offending byte.
    pub fn new(bytes: impl AsRef<[u8]>) -> velella_core::Result<Self> {
        let data: Vec<u8> = bytes.as_ref().iter().map(|b| b.to_ascii_uppercase()).collect();
        for (i, &b) in data.iter().enumerate() {
            if !IUPAC_DNA.contains(&b) {
                return Err(VelellaError::InvalidInput(format!(
                    "invalid DNA byte '{}' (0x{:02X}) at position {}",
                    b as char, b, i
                )));
            }
        }
        Ok(DnaSequence { data })
    }

    /// Consume the sequence and return the inner byte vector.
    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    /// Return the complement strand (IUPAC-aware, same orientation).
    pub fn complement(&self) -> DnaSequence {
        DnaSequence {
            data: self.data.iter().map(|&b| complement(b)).collect(),
        }
    }

    /// Return the reverse complement.
    pub fn reverse_complement(&self) -> DnaSequence {
        DnaSequence {
            data: self.data.iter().rev().map(|&b| complement(b)).collect(),
        }
    }

    /// GC content as a fraction in [0.0, 1.0].
    ///
    /// Only counts unambiguous G and C bases. Returns 0.0 for empty sequences.
    pub fn gc_content(&self) -> f64 {
        if self.data.is_empty() {
            return 0.0;
        }
        let gc = self.data.iter().filter(|&&b| b == b'G' || b == b'C').count();
        gc as f64 / self.data.len() as f64
    }

    /// Count of one unambiguous base (A, T, C, or G), case-insensitive.
    ///
    /// Ambiguity codes are never counted; querying one returns 0.
    pub fn nucleotide_count(&self, base: u8) -> usize {
        let upper = base.to_ascii_uppercase();
        if !b"ATCG".contains(&upper) {
            return 0;
        }
        self.data.iter().filter(|&&b| b == upper).count()
    }

    /// Counts of the four unambiguous bases as `(A, T, C, G)`.
    pub fn base_counts(&self) -> (usize, usize, usize, usize) {
        let (mut a, mut t, mut c, mut g) = (0, 0, 0, 0);
        for &b in &self.data {
            match b {
                b'A' => a += 1,
                b'T' => t += 1,
                b'C' => c += 1,
                b'G' => g += 1,
                _ => {}
            }
        }
        (a, t, c, g)
    }

    /// Approximate molecular weight of the single strand in g/mol.
    ///
    /// Sums per-base monophosphate weights over the unambiguous bases and
    /// subtracts one water per phosphodiester bond. Returns 0.0 for empty
    /// sequences.
    pub fn molecular_weight(&self) -> f64 {
        if self.data.is_empty() {
            return 0.0;
        }
        let (a, t, c, g) = self.base_counts();
        let total = a as f64 * WEIGHT_A
            + t as f64 * WEIGHT_T
            + c as f64 * WEIGHT_C
            + g as f64 * WEIGHT_G;
        total - (self.data.len() as f64 - 1.0) * WATER
    }
}

impl Deref for DnaSequence {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.data
    }
}

impl AsRef<[u8]> for DnaSequence {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl Sequence for DnaSequence {
    fn as_bytes(&self) -> &[u8] {
        &self.data
    }
}

impl Summarizable for DnaSequence {
    fn summary(&self) -> String {
        let preview_len = self.data.len().min(20);
        let preview = std::str::from_utf8(&self.data[..preview_len]).unwrap_or("???");
        if self.data.len() > 20 {
            format!("DNA sequence ({} bp): {}...", self.data.len(), preview)
        } else {
            format!("DNA sequence ({} bp): {}", self.data.len(), preview)
        }
    }
}

impl fmt::Debug for DnaSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = std::str::from_utf8(&self.data).unwrap_or("???");
        write!(f, "DnaSequence(\"{}\")", s)
    }
}

impl fmt::Display for DnaSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = std::str::from_utf8(&self.data).unwrap_or("???");
        f.write_str(s)
    }
}

impl PartialEq for DnaSequence {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

impl Eq for DnaSequence {}

impl Hash for DnaSequence {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.data.hash(state);
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for DnaSequence {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let s = std::str::from_utf8(&self.data).map_err(serde::ser::Error::custom)?;
        serializer.serialize_str(s)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for DnaSequence {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::new(s.as_bytes()).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stores_uppercase() {
        let seq = DnaSequence::new(b"acgt").unwrap();
        assert_eq!(seq.as_bytes(), b"ACGT");
    }

    #[test]
    fn empty_sequence_ok() {
        let seq = DnaSequence::new(b"").unwrap();
        assert!(seq.is_empty());
        assert_eq!(seq.len(), 0);
        assert_eq!(seq.gc_content(), 0.0);
        assert_eq!(seq.molecular_weight(), 0.0);
    }

    #[test]
    fn rejects_invalid_bytes() {
        assert!(DnaSequence::new(b"ACGX").is_err());
        assert!(DnaSequence::new(b"AC GT").is_err());
    }

    #[test]
    fn accepts_iupac_ambiguity_codes() {
        let seq = DnaSequence::new(b"ACGTNRYSWKMBDHV").unwrap();
        assert_eq!(seq.len(), 15);
    }

    #[test]
    fn complement_and_reverse_complement() {
        let seq = DnaSequence::new(b"ATGC").unwrap();
        assert_eq!(seq.complement().as_bytes(), b"TACG");
        assert_eq!(seq.reverse_complement().as_bytes(), b"GCAT");
    }

    #[test]
    fn ambiguity_complement() {
        let seq = DnaSequence::new(b"RYKMN").unwrap();
        assert_eq!(seq.complement().as_bytes(), b"YRMKN");
    }

    #[test]
    fn gc_content_fraction() {
        let seq = DnaSequence::new(b"GGCC").unwrap();
        assert!((seq.gc_content() - 1.0).abs() < 1e-12);
        let seq = DnaSequence::new(b"ATGC").unwrap();
        assert!((seq.gc_content() - 0.5).abs() < 1e-12);
        // Ambiguity codes dilute the denominator but never count as G/C.
        let seq = DnaSequence::new(b"GCNN").unwrap();
        assert!((seq.gc_content() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn nucleotide_counts() {
        let seq = DnaSequence::new(b"AATGCN").unwrap();
        assert_eq!(seq.nucleotide_count(b'A'), 2);
        assert_eq!(seq.nucleotide_count(b'a'), 2);
        assert_eq!(seq.nucleotide_count(b'N'), 0, "ambiguity codes are not counted");
        assert_eq!(seq.base_counts(), (2, 1, 1, 1));
    }

    #[test]
    fn molecular_weight_dinucleotide() {
        let seq = DnaSequence::new(b"AT").unwrap();
        let expected = 331.2 + 322.2 - 18.015_28;
        assert!((seq.molecular_weight() - expected).abs() < 1e-9);
    }

    #[test]
    fn display_and_debug() {
        let seq = DnaSequence::new(b"acg").unwrap();
        assert_eq!(seq.to_string(), "ACG");
        assert_eq!(format!("{:?}", seq), "DnaSequence(\"ACG\")");
    }
}
