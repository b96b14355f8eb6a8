//! # Chord Module
//!
//! Parse chord symbols from lead sheets into voicing dictionary keys.
//!
//! ## Purpose
//! Lead sheets in the corpus were entered by hand over many years and spell
//! chords inconsistently (`DbM7`, `C#maj7`, `Bbm7b5`, `F7alt`, `AbM7/C`).
//! This module turns any such token into:
//! 1. **A canonical root** - one of 12 spellings (`C`, `Csharp`, `D`, `Eb`, ...)
//! 2. **A canonical suffix** - the voicing dictionary's name for the quality
//! 3. **A classification** - major, minor, or neither
//!
//! ## Sub-modules
//! - `parser` - Root extraction and the `ParsedChord` record
//! - `suffix` - Suffix rule table and major/minor sets
//!
//! ## Entry Point
//! [`parse_chord_name()`] - Parse one chord token
//!
//! ## Example
//! ```rust
//! use changes::parse_chord_name;
//!
//! let chord = parse_chord_name("DbM7");
//! assert_eq!(chord.root, "Csharp");
//! assert_eq!(chord.original_root, "Db");
//! assert_eq!(chord.suffix, "maj7");
//! assert_eq!(chord.original_suffix, "M7");
//! assert!(chord.is_major);
//! ```
//!
//! ## Three Outcomes
//! - **Unparseable** - `error` is set, no root was recognized
//! - **Unvoiceable** - parsed, but `(root, suffix)` is not in the voicing dictionary
//! - **Voiceable** - parsed and present in the dictionary
//!
//! Only the first is decided here; see [`crate::dictionary`] for the others.
//!
//! ## Related Modules
//! - `root` - Root alphabet and alias table
//! - `dictionary` - Availability checks against the voicing dictionary

mod parser;
mod suffix;


pub use parser::{parse_chord_name, try_parse_chord_name, ParsedChord};
pub use suffix::{
    canonical_suffix, is_major_suffix, is_minor_suffix, MAJOR_SUFFIXES, MINOR_SUFFIXES,
    SUFFIX_RULES,
};
