//! Chord suffix canonicalization and quality classification
//!
//! Lead sheets spell the same chord quality many ways (`M7`, `maj7`; `o7`,
//! `dim7`; `7alt`, `7#9`). [`canonical_suffix`] maps a raw suffix onto the
//! spelling the voicing dictionary uses.
//!
//! # Rules
//! 1. Exact match against [`SUFFIX_RULES`], first hit wins
//! 2. Contains `m7/` → rewritten to `m/` (`m7/G` → `m/G`)
//! 3. Contains `/` → passed through (slash chord)
//! 4. Contains `sus` → passed through
//! 5. Anything else → passed through
//!
//! Pass-through suffixes are not errors. They simply miss the voicing
//! dictionary if it has no entry for them.

use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Exact raw-suffix spellings and their canonical dictionary keys, in
/// precedence order.
pub const SUFFIX_RULES: &[(&str, &str)] = &[
    ("7", "7"),
    ("7alt", "7#9"),
    ("", "major"),
    ("m", "minor"),
    ("M", "major"),
    ("M7", "maj7"),
    ("M7#5", "maj7#5"),
    ("M7b5", "maj7b5"),
    ("6/9", "69"),
    ("9b5", "9b5"),
    ("dim7", "dim7"),
    ("m7b5", "m7b5"),
    ("m/M7", "mmaj7"),
    ("mMaj7", "mmaj7"),
    ("mM7", "mmaj7"),
    ("m6/9", "m69"),
    ("7b9", "7b9"),
    ("7#9", "7#9"),
    ("7#5", "aug7"),
    ("7#5#9", "alt"),
    ("m7", "m7"),
    ("m9", "m9"),
    ("maj7", "maj7"),
    ("madd9", "madd9"),
    ("maj9", "maj9"),
    ("7b5", "7b5"),
    ("aug", "aug"),
    ("aug7", "aug7"),
    ("add9", "add9"),
    ("add11", "add11"),
    ("dim", "dim"),
    ("mmaj7b5", "mmaj7b5"),
    ("mmaj9", "mmaj9"),
    ("mmaj11", "mmaj11"),
    ("7sus4", "7sus4"),
    ("11", "11"),
    ("9#11", "9#11"),
    ("13", "13"),
    ("o7", "dim7"),
    ("+", "aug"),
    ("+7", "aug7"),
    ("7+", "aug7"),
    ("7sus", "7sus4"),
    ("9sus4", "7sus4"),
    ("o", "dim"),
    ("M6", "6"),
    ("7#11", "9#11"),
    ("M7#11", "maj7b5"),
];

/// Suffixes that make a chord minor
pub const MINOR_SUFFIXES: &[&str] = &[
    "m", "minor", "min", "m7", "m9", "m11", "m13", "m6", "m6/9", "m69", "m7b5", "ø", "ø7",
    "madd9", "madd11", "mmaj7", "mM7", "m/M7", "mMaj7", "mmaj9", "mmaj11", "mdim7", "m7b9",
    "m7#5",
];

/// Suffixes that make a chord major
pub const MAJOR_SUFFIXES: &[&str] = &[
    "", "major", "maj", "M", "6", "69", "6/9", "maj7", "M7", "maj9", "maj13", "add9", "add11",
    "add13",
];

static MINOR_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| MINOR_SUFFIXES.iter().copied().collect());

static MAJOR_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| MAJOR_SUFFIXES.iter().copied().collect());

/// Map a raw suffix onto its canonical voicing-dictionary key.
///
/// ```
/// use changes::canonical_suffix;
/// assert_eq!(canonical_suffix(""), "major");
/// assert_eq!(canonical_suffix("7alt"), "7#9");
/// assert_eq!(canonical_suffix("m7/G"), "m/G");
/// assert_eq!(canonical_suffix("/E"), "/E");
/// assert_eq!(canonical_suffix("13b9"), "13b9");
/// ```
pub fn canonical_suffix(raw: &str) -> String {
    if let Some((_, canonical)) = SUFFIX_RULES.iter().find(|(spelling, _)| *spelling == raw) {
        return canonical.to_string();
    }

    if raw.contains("m7/") {
        return raw.replacen("m7/", "m/", 1);
    }

    // Slash chords and suspended chords keep their spelling; the same holds
    // for every other unmatched suffix.
    raw.to_string()
}

/// Whether a canonical suffix denotes a minor chord.
///
/// Slash chords inherit the quality of the part before the slash.
pub fn is_minor_suffix(suffix: &str) -> bool {
    if MINOR_SET.contains(suffix) {
        return true;
    }
    match suffix.split_once('/') {
        Some((base, _)) => MINOR_SET.contains(base),
        None => false,
    }
}

/// Whether a canonical suffix denotes a major chord.
///
/// No slash fallback: `/E` over a major triad is not classified.
pub fn is_major_suffix(suffix: &str) -> bool {
    MAJOR_SET.contains(suffix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_rules_take_precedence() {
        // "m/M7" contains both "/" and would otherwise pass through
        assert_eq!(canonical_suffix("m/M7"), "mmaj7");
        assert_eq!(canonical_suffix("m6/9"), "m69");
        assert_eq!(canonical_suffix("6/9"), "69");
        assert_eq!(canonical_suffix("7sus"), "7sus4");
        assert_eq!(canonical_suffix("9sus4"), "7sus4");
    }

    #[test]
    fn test_structural_fallbacks() {
        assert_eq!(canonical_suffix("m7/Bb"), "m/Bb");
        assert_eq!(canonical_suffix("7/G"), "7/G");
        assert_eq!(canonical_suffix("sus2"), "sus2");
        assert_eq!(canonical_suffix("13sus"), "13sus");
    }

    #[test]
    fn test_m7_rewrite_only_touches_first_occurrence() {
        assert_eq!(canonical_suffix("m7/m7/C"), "m/m7/C");
    }

    #[test]
    fn test_unknown_suffix_passes_through() {
        assert_eq!(canonical_suffix("7b9b13"), "7b9b13");
        assert_eq!(canonical_suffix("maj7b5"), "maj7b5");
    }

    #[test]
    fn test_rule_count() {
        assert_eq!(SUFFIX_RULES.len(), 48);
    }

    #[test]
    fn test_minor_classification() {
        assert!(is_minor_suffix("minor"));
        assert!(is_minor_suffix("m7b5"));
        assert!(is_minor_suffix("mmaj7"));
        assert!(is_minor_suffix("m/G"));
        assert!(is_minor_suffix("m7/Bb"));
        assert!(!is_minor_suffix("7"));
        assert!(!is_minor_suffix("dim7"));
        assert!(!is_minor_suffix("maj7"));
    }

    #[test]
    fn test_major_classification() {
        assert!(is_major_suffix("major"));
        assert!(is_major_suffix("maj7"));
        assert!(is_major_suffix("69"));
        assert!(is_major_suffix("6"));
        assert!(!is_major_suffix("maj7/E"));
        assert!(!is_major_suffix("7"));
        assert!(!is_major_suffix("minor"));
    }

    #[test]
    fn test_classification_sets_are_disjoint() {
        for suffix in MAJOR_SUFFIXES {
            assert!(!is_minor_suffix(suffix), "{} is classified both ways", suffix);
        }
    }
}
