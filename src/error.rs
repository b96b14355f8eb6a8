//! # Error Types
//!
//! All error types for the `changes` library.
//!
//! Chord parsing itself never fails with an `Err`: an unrecognized root is
//! carried in [`ParsedChord::error`](crate::ParsedChord) so every token of a
//! song can still be rendered. `ChangesError` is for callers that prefer `?`
//! and for loading songs and dictionaries from YAML.
//!
//! ## Error Types
//! - `UnrecognizedRoot` - No root spelling is a prefix of the chord token
//! - `SongError` - A song file could not be decoded or has an invalid shape
//! - `DictionaryError` - The voicing dictionary YAML is invalid
//!
//! ## Usage
//! ```rust
//! use changes::{try_parse_chord_name, ChangesError};
//!
//! match try_parse_chord_name("H7") {
//!     Ok(chord) => println!("{} {}", chord.root, chord.suffix),
//!     Err(ChangesError::UnrecognizedRoot(token)) => eprintln!("bad chord {}", token),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChangesError {
    /// No known root spelling matches the start of the token.
    ///
    /// # Example
    /// ```
    /// # use changes::ChangesError;
    /// let err = ChangesError::UnrecognizedRoot("Z9".to_string());
    /// assert_eq!(err.to_string(), "Unable to parse chord: Z9");
    /// ```
    #[error("Unable to parse chord: {0}")]
    UnrecognizedRoot(String),

    /// A song file could not be decoded.
    ///
    /// # Example
    /// ```
    /// # use changes::ChangesError;
    /// let err = ChangesError::SongError {
    ///     song: "BluesWalk".to_string(),
    ///     message: "time signature must have a non-zero numerator".to_string(),
    /// };
    /// assert_eq!(
    ///     err.to_string(),
    ///     "Invalid song 'BluesWalk': time signature must have a non-zero numerator"
    /// );
    /// ```
    #[error("Invalid song '{song}': {message}")]
    SongError { song: String, message: String },

    /// The voicing dictionary could not be decoded.
    #[error("Invalid voicing dictionary: {0}")]
    DictionaryError(String),
}
