//! Validated DNA sequences and the standard genetic code.
//!
//! Provides the sequence layer the Velella codon analysis engine consumes:
//!
//! - **Sequences** — [`DnaSequence`], a validated IUPAC DNA newtype with
//!   reverse complement, GC content, nucleotide counts, and molecular weight
//! - **Codons** — [`Codon`], a length-3 value type over the strict
//!   `{A,C,G,T}` alphabet with dense table indexing
//! - **Genetic code** — [`GeneticCode`], the canonical standard translation
//!   table shared by every consumer (one table, no duplicated copies)
//!
//! # Example
//!
//! ```
//! use velella_seq::{Codon, DnaSequence, GeneticCode};
//! use velella_core::Sequence;
//!
//! // Lowercased input is normalized on construction
//! let dna = DnaSequence::new(b"atggaagaa").unwrap();
//! assert_eq!(dna.as_bytes(), b"ATGGAAGAA");
//! assert_eq!(dna.reverse_complement().as_bytes(), b"TTCTTCCAT");
//!
//! let code = GeneticCode::standard();
//! assert_eq!(code.translate_sequence(dna.as_bytes()), b"MEE");
//!
//! // Synonymous codon sets are derived from the same table
//! let met = Codon::new(b"ATG").unwrap();
//! assert_eq!(code.synonymous_codons(code.amino_acid(met)), vec![met]);
//! ```

pub mod codon;
pub mod dna;

pub use codon::{amino_acid_name, Codon, GeneticCode, AMINO_ACIDS, STOP_SYMBOL, UNKNOWN_SYMBOL};
pub use dna::DnaSequence;
