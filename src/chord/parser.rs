//! Chord symbol parsing
//!
//! Splits a chord token into root and suffix, canonicalizes both and derives
//! the major/minor classification.

use log::debug;
use serde::Serialize;

use super::suffix::{canonical_suffix, is_major_suffix, is_minor_suffix};
use crate::error::ChangesError;
use crate::root::{split_root, Root};

/// Result of parsing one chord token
///
/// When `error` is set every other field is empty and both flags are false.
///
/// # Fields
/// - `root`: canonical root (`C`, `Csharp`, `Eb`, ...), a voicing dictionary key
/// - `original_root`: root as written in the token (`Db`, `C#`, ...)
/// - `suffix`: canonical suffix (`major`, `maj7`, `m7b5`, ...)
/// - `original_suffix`: suffix as written (`""`, `M7`, `7alt`, ...)
/// - `is_major` / `is_minor`: never both true
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedChord {
    pub root: String,
    pub original_root: String,
    pub suffix: String,
    pub original_suffix: String,
    pub is_major: bool,
    pub is_minor: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ParsedChord {
    fn unrecognized(token: &str) -> Self {
        ParsedChord {
            error: Some(ChangesError::UnrecognizedRoot(token.to_string()).to_string()),
            ..ParsedChord::default()
        }
    }

    /// The root as a pitch class, `None` for an unparseable token
    pub fn pitch_class(&self) -> Option<Root> {
        Root::from_name(&self.root)
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }

    /// Neither major nor minor: dominant, altered, diminished, suspended...
    pub fn is_other(&self) -> bool {
        !self.is_error() && !self.is_major && !self.is_minor
    }
}

/// Parse a chord symbol into canonical root and suffix.
///
/// Never fails: a token with no recognizable root comes back with `error`
/// set. An unknown suffix is not an error; it is passed through and will
/// miss the voicing dictionary.
///
/// # Examples
/// ```
/// use changes::parse_chord_name;
///
/// let chord = parse_chord_name("Fm7b5");
/// assert_eq!(chord.root, "F");
/// assert_eq!(chord.suffix, "m7b5");
/// assert!(chord.is_minor);
///
/// let chord = parse_chord_name("C#");
/// assert_eq!(chord.root, "Csharp");
/// assert_eq!(chord.original_root, "C#");
/// assert_eq!(chord.suffix, "major");
/// assert!(chord.is_major);
///
/// let chord = parse_chord_name("Z9");
/// assert_eq!(chord.error.as_deref(), Some("Unable to parse chord: Z9"));
/// ```
pub fn parse_chord_name(token: &str) -> ParsedChord {
    let Some((original_root, root, rest)) = split_root(token) else {
        debug!("no root prefix in chord token {:?}", token);
        return ParsedChord::unrecognized(token);
    };

    let suffix = canonical_suffix(rest);
    let is_minor = is_minor_suffix(&suffix);
    let is_major = !is_minor && is_major_suffix(&suffix);

    debug!(
        "parsed {:?} as root {} suffix {:?} (written {:?})",
        token, root, suffix, rest
    );

    ParsedChord {
        root: root.as_str().to_string(),
        original_root: original_root.to_string(),
        suffix,
        original_suffix: rest.to_string(),
        is_major,
        is_minor,
        error: None,
    }
}

/// Like [`parse_chord_name`], but an unrecognized root is an `Err`.
pub fn try_parse_chord_name(token: &str) -> Result<ParsedChord, ChangesError> {
    let chord = parse_chord_name(token);
    if chord.is_error() {
        return Err(ChangesError::UnrecognizedRoot(token.to_string()));
    }
    Ok(chord)
}
