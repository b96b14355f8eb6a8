//! # Chord Roots
//!
//! The canonical 12-root alphabet used as voicing dictionary keys, and the
//! table of alternative spellings that normalize onto it.
//!
//! ## Canonical Alphabet
//! One spelling per pitch class, in semitone order from C:
//!
//! ```text
//! C  Csharp  D  Eb  E  F  Fsharp  G  Ab  A  Bb  B
//! 0  1       2  3   4  5  6       7  8   9  10  11
//! ```
//!
//! `Csharp` and `Fsharp` are spelled out because the voicing dictionary uses
//! them as keys. Lead sheets write `C#`/`Db` and `F#`/`Gb`; those arrive
//! through the alias table.
//!
//! ## Prefix Matching
//! A chord token starts with its root, so roots are recognized by prefix.
//! [`split_root`] tries one list holding every spelling, longest first, so a
//! single letter never shadows a two-letter spelling (`E` inside `Eb7`,
//! `C` inside `C#m7`).

use once_cell::sync::Lazy;
use serde::Serialize;
use std::fmt;

/// One of the 12 canonical chord roots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Root {
    C,
    Csharp,
    D,
    Eb,
    E,
    F,
    Fsharp,
    G,
    Ab,
    A,
    Bb,
    B,
}

impl Root {
    /// All roots in semitone order starting at C
    pub const ALL: [Root; 12] = [
        Root::C,
        Root::Csharp,
        Root::D,
        Root::Eb,
        Root::E,
        Root::F,
        Root::Fsharp,
        Root::G,
        Root::Ab,
        Root::A,
        Root::Bb,
        Root::B,
    ];

    /// Canonical spelling, as used by the voicing dictionary
    pub fn as_str(&self) -> &'static str {
        match self {
            Root::C => "C",
            Root::Csharp => "Csharp",
            Root::D => "D",
            Root::Eb => "Eb",
            Root::E => "E",
            Root::F => "F",
            Root::Fsharp => "Fsharp",
            Root::G => "G",
            Root::Ab => "Ab",
            Root::A => "A",
            Root::Bb => "Bb",
            Root::B => "B",
        }
    }

    /// Semitones above C (0..=11)
    pub fn semitone(&self) -> i8 {
        match self {
            Root::C => 0,
            Root::Csharp => 1,
            Root::D => 2,
            Root::Eb => 3,
            Root::E => 4,
            Root::F => 5,
            Root::Fsharp => 6,
            Root::G => 7,
            Root::Ab => 8,
            Root::A => 9,
            Root::Bb => 10,
            Root::B => 11,
        }
    }

    /// Look up a root by any spelling the parser accepts.
    ///
    /// Matches the whole string, not a prefix. Accepts the canonical names
    /// and every alias (`C#`, `Db`, `Gb`, ...).
    ///
    /// ```
    /// use changes::Root;
    /// assert_eq!(Root::from_name("Eb"), Some(Root::Eb));
    /// assert_eq!(Root::from_name("D#"), Some(Root::Eb));
    /// assert_eq!(Root::from_name("Csharp"), Some(Root::Csharp));
    /// assert_eq!(Root::from_name("H"), None);
    /// ```
    pub fn from_name(name: &str) -> Option<Root> {
        ROOT_PREFIXES
            .iter()
            .find(|(spelling, _)| *spelling == name)
            .map(|(_, root)| *root)
    }
}

impl fmt::Display for Root {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Alternative spellings mapped onto canonical roots.
///
/// Tried before the canonical names so `C#` resolves to `Csharp` rather than
/// `C` with a `#` suffix.
pub const ROOT_ALIASES: &[(&str, Root)] = &[
    ("Cb", Root::B),
    ("Db", Root::Csharp),
    ("D#", Root::Eb),
    ("F#", Root::Fsharp),
    ("Gb", Root::Fsharp),
    ("G#", Root::Ab),
    ("A#", Root::Bb),
    ("C#", Root::Csharp),
];

/// Every recognized spelling, longest first.
///
/// Aliases precede canonical names of the same length; the sort is stable.
static ROOT_PREFIXES: Lazy<Vec<(&'static str, Root)>> = Lazy::new(|| {
    let mut prefixes: Vec<(&'static str, Root)> = ROOT_ALIASES.to_vec();
    prefixes.extend(Root::ALL.iter().map(|root| (root.as_str(), *root)));
    prefixes.sort_by(|a, b| b.0.len().cmp(&a.0.len()));
    prefixes
});

/// Split a chord token into `(matched_prefix, root, rest)`.
///
/// Returns `None` when no known spelling starts the token.
///
/// ```
/// use changes::{split_root, Root};
/// assert_eq!(split_root("Bbm7b5"), Some(("Bb", Root::Bb, "m7b5")));
/// assert_eq!(split_root("C#7alt"), Some(("C#", Root::Csharp, "7alt")));
/// assert_eq!(split_root("Z9"), None);
/// ```
pub fn split_root(token: &str) -> Option<(&str, Root, &str)> {
    ROOT_PREFIXES
        .iter()
        .find(|(spelling, _)| token.starts_with(spelling))
        .map(|(spelling, root)| {
            let (prefix, rest) = token.split_at(spelling.len());
            (prefix, *root, rest)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_semitones_follow_alphabet_order() {
        for (i, root) in Root::ALL.iter().enumerate() {
            assert_eq!(root.semitone() as usize, i);
        }
    }

    #[test]
    fn test_canonical_names_round_trip() {
        for root in Root::ALL {
            assert_eq!(Root::from_name(root.as_str()), Some(root));
            assert_eq!(root.to_string(), root.as_str());
        }
    }

    #[test]
    fn test_aliases_resolve() {
        assert_eq!(Root::from_name("Cb"), Some(Root::B));
        assert_eq!(Root::from_name("Db"), Some(Root::Csharp));
        assert_eq!(Root::from_name("Gb"), Some(Root::Fsharp));
        assert_eq!(Root::from_name("A#"), Some(Root::Bb));
    }

    #[test]
    fn test_split_root_prefers_longer_spelling() {
        assert_eq!(split_root("Eb7"), Some(("Eb", Root::Eb, "7")));
        assert_eq!(split_root("E7"), Some(("E", Root::E, "7")));
        assert_eq!(split_root("Cbmaj7"), Some(("Cb", Root::B, "maj7")));
        assert_eq!(split_root("F#m"), Some(("F#", Root::Fsharp, "m")));
        assert_eq!(split_root("Fsharp7"), Some(("Fsharp", Root::Fsharp, "7")));
    }

    #[test]
    fn test_split_root_rejects_unknown() {
        assert_eq!(split_root(""), None);
        assert_eq!(split_root("m7"), None);
        assert_eq!(split_root("bb7"), None);
    }
}
