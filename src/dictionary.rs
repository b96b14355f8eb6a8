//! # Voicing Dictionary
//!
//! The key set of the guitar voicing dictionary: which `(root, suffix)` pairs
//! have a playable voicing. Voicing payloads (frets, fingers, MIDI notes)
//! belong to the audio layer; only key presence is needed here.
//!
//! ## YAML Format
//! ```yaml
//! keys: [C, Csharp, D, Eb, E, F, Fsharp, G, Ab, A, Bb, B]
//! suffixes: [major, minor, "7", maj7, m7]   # voiced for every key
//! chords:
//!   C: ["/E", "/G"]                          # extra voicings for one key
//! ```
//!
//! A built-in dictionary is embedded from `data/voicings.yaml`.
//!
//! ## Example
//! ```rust
//! use changes::{check_availability, is_available, Availability};
//!
//! assert!(is_available("Bb", "7"));
//! assert!(!is_available("Bb", "7b9b13"));
//!
//! match check_availability("Bb", "maj7b9") {
//!     Availability::UnknownSuffix { suggestions } => assert_eq!(suggestions[0], "maj7b5"),
//!     other => panic!("unexpected {:?}", other),
//! }
//! ```

use log::{debug, error};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::ChangesError;
use crate::root::Root;

/// Number of suffix suggestions reported for an unvoiceable chord
pub const MAX_SUGGESTIONS: usize = 3;

const BUILTIN_VOICINGS: &str = include_str!("../data/voicings.yaml");

static BUILTIN: Lazy<VoicingDictionary> = Lazy::new(|| {
    VoicingDictionary::from_yaml(BUILTIN_VOICINGS).unwrap_or_else(|e| {
        error!("{}", e);
        VoicingDictionary::default()
    })
});

/// Raw dictionary for YAML deserialization
#[derive(Deserialize, Debug)]
struct RawDictionary {
    keys: Vec<String>,
    #[serde(default)]
    suffixes: Vec<String>,
    #[serde(default)]
    chords: HashMap<String, Vec<String>>,
}

/// Outcome of an availability check
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "kebab-case")]
pub enum Availability {
    Available,
    /// The root has no entry at all
    UnknownRoot { known_roots: Vec<String> },
    /// The root exists but has no voicing for this suffix
    UnknownSuffix { suggestions: Vec<String> },
}

impl Availability {
    pub fn is_available(&self) -> bool {
        matches!(self, Availability::Available)
    }
}

/// Set of voiceable `(root, suffix)` pairs
#[derive(Debug, Clone, Default)]
pub struct VoicingDictionary {
    keys: Vec<String>,
    chords: HashMap<String, Vec<String>>,
}

impl VoicingDictionary {
    /// Load a dictionary from YAML.
    ///
    /// Every key must be a canonical root name, and every per-key entry under
    /// `chords` must belong to a listed key.
    pub fn from_yaml(source: &str) -> Result<Self, ChangesError> {
        let raw: RawDictionary = serde_yaml::from_str(source)
            .map_err(|e| ChangesError::DictionaryError(e.to_string()))?;

        for key in &raw.keys {
            match Root::from_name(key) {
                Some(root) if root.as_str() == key => {}
                _ => {
                    return Err(ChangesError::DictionaryError(format!(
                        "'{}' is not a canonical root",
                        key
                    )))
                }
            }
        }
        if let Some(stray) = raw.chords.keys().find(|k| !raw.keys.contains(*k)) {
            return Err(ChangesError::DictionaryError(format!(
                "voicings listed for '{}', which is not a key",
                stray
            )));
        }

        let mut chords = HashMap::new();
        for key in &raw.keys {
            let mut suffixes = raw.suffixes.clone();
            if let Some(extra) = raw.chords.get(key) {
                suffixes.extend(extra.iter().filter(|s| !raw.suffixes.contains(*s)).cloned());
            }
            chords.insert(key.clone(), suffixes);
        }

        Ok(VoicingDictionary {
            keys: raw.keys,
            chords,
        })
    }

    /// The dictionary embedded in the crate
    pub fn builtin() -> &'static VoicingDictionary {
        &BUILTIN
    }

    /// Roots in dictionary order
    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    /// Voiceable suffixes for a root, in dictionary order
    pub fn suffixes(&self, root: &str) -> Option<&[String]> {
        self.chords.get(root).map(|s| s.as_slice())
    }

    pub fn is_available(&self, root: &str, suffix: &str) -> bool {
        self.suffixes(root)
            .map_or(false, |suffixes| suffixes.iter().any(|s| s == suffix))
    }

    /// Check a chord and, when it is missing, report what is close.
    pub fn check(&self, root: &str, suffix: &str) -> Availability {
        let Some(suffixes) = self.suffixes(root) else {
            debug!("root {:?} not in voicing dictionary", root);
            return Availability::UnknownRoot {
                known_roots: self.keys.clone(),
            };
        };

        if suffixes.iter().any(|s| s == suffix) {
            return Availability::Available;
        }

        let suggestions = nearest_suffixes(suffix, suffixes, MAX_SUGGESTIONS);
        debug!(
            "no voicing for {}{}, nearest suffixes {:?}",
            root, suffix, suggestions
        );
        Availability::UnknownSuffix { suggestions }
    }
}

/// Whether the built-in dictionary has a voicing for `(root, suffix)`
pub fn is_available(root: &str, suffix: &str) -> bool {
    VoicingDictionary::builtin().is_available(root, suffix)
}

/// [`VoicingDictionary::check`] against the built-in dictionary
pub fn check_availability(root: &str, suffix: &str) -> Availability {
    VoicingDictionary::builtin().check(root, suffix)
}

/// Up to `limit` candidates ordered by edit distance to `target`.
///
/// Ties keep the candidates' original order.
fn nearest_suffixes(target: &str, candidates: &[String], limit: usize) -> Vec<String> {
    let mut scored: Vec<(usize, &String)> = candidates
        .iter()
        .map(|candidate| (edit_distance(target, candidate), candidate))
        .collect();
    scored.sort_by_key(|(distance, _)| *distance);
    scored
        .into_iter()
        .take(limit)
        .map(|(_, candidate)| candidate.clone())
        .collect()
}

/// Levenshtein distance over chars
fn edit_distance(a: &str, b: &str) -> usize {
    let b: Vec<char> = b.chars().collect();
    let mut previous: Vec<usize> = (0..=b.len()).collect();
    let mut current = vec![0; b.len() + 1];

    for (i, ca) in a.chars().enumerate() {
        current[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let substitution = previous[j] + usize::from(ca != *cb);
            current[j + 1] = substitution.min(previous[j + 1] + 1).min(current[j] + 1);
        }
        std::mem::swap(&mut previous, &mut current);
    }

    previous[b.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    const SMALL: &str = r#"
keys: [C, F]
suffixes: [major, minor, "7", maj7]
chords:
  C: ["/E", "7"]
"#;

    #[test]
    fn test_builtin_parses() {
        let dict = VoicingDictionary::from_yaml(BUILTIN_VOICINGS).unwrap();
        assert_eq!(dict.keys().len(), 12);
        for root in Root::ALL {
            assert!(dict.suffixes(root.as_str()).is_some(), "missing {}", root);
        }
    }

    #[test]
    fn test_builtin_covers_common_qualities() {
        for suffix in ["major", "minor", "7", "maj7", "m7", "m7b5", "dim7", "7b9", "7#9", "aug7"] {
            for root in Root::ALL {
                assert!(is_available(root.as_str(), suffix), "{}{}", root, suffix);
            }
        }
    }

    #[test]
    fn test_per_key_extras() {
        let dict = VoicingDictionary::from_yaml(SMALL).unwrap();
        assert!(dict.is_available("C", "/E"));
        assert!(!dict.is_available("F", "/E"));
        // "7" is shared and not duplicated
        assert_eq!(dict.suffixes("C").unwrap().len(), 5);
    }

    #[test]
    fn test_check_unknown_root() {
        let dict = VoicingDictionary::from_yaml(SMALL).unwrap();
        assert_eq!(
            dict.check("Bb", "7"),
            Availability::UnknownRoot {
                known_roots: vec!["C".to_string(), "F".to_string()]
            }
        );
        assert!(!dict.check("", "").is_available());
    }

    #[test]
    fn test_check_suggestions() {
        let dict = VoicingDictionary::from_yaml(SMALL).unwrap();
        assert_eq!(dict.check("F", "maj7"), Availability::Available);
        match dict.check("F", "maj9") {
            Availability::UnknownSuffix { suggestions } => {
                assert_eq!(suggestions.len(), MAX_SUGGESTIONS);
                assert_eq!(suggestions[0], "maj7");
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_rejects_non_canonical_keys() {
        let err = VoicingDictionary::from_yaml("keys: [C#]").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid voicing dictionary: 'C#' is not a canonical root"
        );
        assert!(VoicingDictionary::from_yaml("keys: [C]\nchords:\n  D: [\"7\"]").is_err());
        assert!(VoicingDictionary::from_yaml("keys: 3").is_err());
    }

    #[test]
    fn test_edit_distance() {
        assert_eq!(edit_distance("", ""), 0);
        assert_eq!(edit_distance("m7", "m7"), 0);
        assert_eq!(edit_distance("m7", "m9"), 1);
        assert_eq!(edit_distance("maj7", "m7"), 2);
        assert_eq!(edit_distance("", "sus4"), 4);
        assert_eq!(edit_distance("7#9", "7b9"), 1);
    }

    #[test]
    fn test_serialized_status() {
        let json = serde_json::to_value(Availability::UnknownSuffix {
            suggestions: vec!["7".to_string()],
        })
        .unwrap();
        assert_eq!(json["status"], "unknown-suffix");
        assert_eq!(json["suggestions"][0], "7");
    }
}
