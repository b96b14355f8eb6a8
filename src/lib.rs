//! # changes
//!
//! Chord-symbol parsing and root-motion analysis for a jazz-standards viewer.
//!
//! ## Pipeline
//! 1. Split a song's bars into chord tokens (`corpus`)
//! 2. Parse each token into canonical root and suffix (`chord`)
//! 3. Check the pair against the voicing dictionary (`dictionary`)
//! 4. Measure root motion between neighbouring chords (`interval`)
//!
//! ## Example
//! ```rust
//! use changes::{interval_between, is_available, parse_chord_name, RootInterval};
//!
//! let a = parse_chord_name("Bbm7");
//! let b = parse_chord_name("Eb7");
//! assert!(a.is_minor);
//! assert!(is_available(&b.root, &b.suffix));
//! assert_eq!(interval_between(&a.root, &b.root), RootInterval::Semitones(5));
//! ```

pub mod chord;
pub mod corpus;
pub mod dictionary;
pub mod error;
pub mod interval;
pub mod root;

pub use chord::*;
pub use corpus::{
    analyze_song, chord_status, root_motion, squash_chords, ChordStatus, Corpus, RootMotion,
    Song, SongReport, SquashedChord,
};
pub use dictionary::{check_availability, is_available, Availability, VoicingDictionary};
pub use error::*;
pub use interval::{
    category_of, interval_between, interval_between_roots, legend, RootInterval,
    RootMotionCategory, Shape,
};
pub use root::{split_root, Root, ROOT_ALIASES};
