//! # Root Motion
//!
//! Signed interval between the roots of consecutive chords, and the glyph
//! used to draw it.
//!
//! ## Interval Folding
//! Roots sit on a 12-tone circle. The interval from `a` to `b` is the
//! shortest signed distance around it:
//!
//! ```text
//! diff = semitone(b) - semitone(a)      // -11..=11
//! diff > 6   => diff - 12
//! diff < -5  => diff + 12
//! ```
//!
//! The result lies in `-5..=6`. A tritone has no shorter direction and is
//! always reported as `+6`, so `C → F#` and `F# → C` are both `6`.
//!
//! ## Presentation
//! [`category_of`] maps each of the 12 intervals, plus [`RootInterval::Unresolved`],
//! to a background color, text color and shape. Upward motion points right,
//! downward motion points left, no motion and the tritone are circles.
//!
//! ## Example
//! ```rust
//! use changes::{interval_between, category_of, RootInterval, Shape};
//!
//! assert_eq!(interval_between("C", "F"), RootInterval::Semitones(5));
//! assert_eq!(interval_between("F", "C"), RootInterval::Semitones(-5));
//!
//! let glyph = category_of(interval_between("F", "Bb"));
//! assert_eq!(glyph.shape, Shape::TriangleRight);
//! ```

use log::warn;
use serde::{Serialize, Serializer};
use std::fmt;

use crate::root::Root;

/// Interval between two roots, or `Unresolved` when a root is unknown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RootInterval {
    Semitones(i8),
    /// Displayed as `?`
    Unresolved,
}

impl RootInterval {
    pub fn semitones(&self) -> Option<i8> {
        match self {
            RootInterval::Semitones(n) => Some(*n),
            RootInterval::Unresolved => None,
        }
    }
}

impl fmt::Display for RootInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RootInterval::Semitones(n) => write!(f, "{}", n),
            RootInterval::Unresolved => f.write_str("?"),
        }
    }
}

/// Serializes as a number, or the string `"?"` when unresolved
impl Serialize for RootInterval {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            RootInterval::Semitones(n) => serializer.serialize_i8(*n),
            RootInterval::Unresolved => serializer.serialize_str("?"),
        }
    }
}

/// Glyph shape for a root-motion marker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Shape {
    Circle,
    TriangleLeft,
    TriangleRight,
}

/// How a root interval is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RootMotionCategory {
    pub background_color: &'static str,
    pub color: &'static str,
    pub shape: Shape,
}

/// Fold any semitone difference into `-5..=6`
pub fn fold_semitones(diff: i32) -> i8 {
    let folded = diff.rem_euclid(12);
    if folded > 6 {
        (folded - 12) as i8
    } else {
        folded as i8
    }
}

/// Interval from root `a` to root `b`
pub fn interval_between_roots(a: Root, b: Root) -> i8 {
    let mut diff = b.semitone() - a.semitone();
    if diff > 6 {
        diff -= 12;
    } else if diff < -5 {
        diff += 12;
    }
    diff
}

/// Interval from root name `a` to root name `b`.
///
/// Accepts any spelling [`Root::from_name`] does. Returns
/// [`RootInterval::Unresolved`] instead of failing when either name is
/// unknown (for example the empty root of an unparseable chord).
pub fn interval_between(a: &str, b: &str) -> RootInterval {
    match (Root::from_name(a), Root::from_name(b)) {
        (Some(a), Some(b)) => RootInterval::Semitones(interval_between_roots(a, b)),
        _ => {
            let unknown = if Root::from_name(a).is_none() { a } else { b };
            warn!("cannot compute root motion, unknown root {:?}", unknown);
            RootInterval::Unresolved
        }
    }
}

/// Presentation for a root interval.
///
/// Total: out-of-range semitone counts are folded into `-5..=6` first.
pub fn category_of(interval: RootInterval) -> RootMotionCategory {
    use Shape::*;

    let (background_color, color, shape) = match interval {
        RootInterval::Unresolved => ("white", "black", Circle),
        RootInterval::Semitones(n) => match fold_semitones(n as i32) {
            0 => ("gray", "black", Circle),
            1 => ("#1E90FF", "white", TriangleRight),
            2 => ("lime", "black", TriangleRight),
            3 => ("darkgreen", "white", TriangleRight),
            4 => ("#FF1493", "white", TriangleRight),
            5 => ("black", "white", TriangleRight),
            6 => ("#8A2BE2", "white", Circle),
            -1 => ("blue", "white", TriangleLeft),
            -2 => ("#00CED1", "black", TriangleLeft),
            -3 => ("#FFD700", "black", TriangleLeft),
            -4 => ("#9932CC", "white", TriangleLeft),
            _ => ("red", "white", TriangleLeft),
        },
    };

    RootMotionCategory {
        background_color,
        color,
        shape,
    }
}

/// Every interval with its presentation, from -5 up to 6
pub fn legend() -> Vec<(RootInterval, RootMotionCategory)> {
    (-5..=6)
        .map(|n| {
            let interval = RootInterval::Semitones(n);
            (interval, category_of(interval))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fourth_up_and_down() {
        assert_eq!(interval_between("C", "F"), RootInterval::Semitones(5));
        assert_eq!(interval_between("F", "C"), RootInterval::Semitones(-5));
    }

    #[test]
    fn test_same_root_is_zero() {
        for root in Root::ALL {
            assert_eq!(
                interval_between(root.as_str(), root.as_str()),
                RootInterval::Semitones(0)
            );
        }
    }

    #[test]
    fn test_antisymmetric_except_tritone() {
        for a in Root::ALL {
            for b in Root::ALL {
                let ab = interval_between_roots(a, b);
                let ba = interval_between_roots(b, a);
                assert!((-5..=6).contains(&ab));
                if ab == 6 {
                    assert_eq!(ba, 6, "{} -> {}", b, a);
                } else {
                    assert_eq!(ab, -ba, "{} <-> {}", a, b);
                }
            }
        }
    }

    #[test]
    fn test_tritone_is_positive() {
        assert_eq!(interval_between("C", "Gb"), RootInterval::Semitones(6));
        assert_eq!(interval_between("Gb", "C"), RootInterval::Semitones(6));
        assert_eq!(interval_between("Fsharp", "C"), RootInterval::Semitones(6));
    }

    #[test]
    fn test_wraps_around_the_octave() {
        assert_eq!(interval_between("B", "C"), RootInterval::Semitones(1));
        assert_eq!(interval_between("C", "B"), RootInterval::Semitones(-1));
        assert_eq!(interval_between("A", "D"), RootInterval::Semitones(5));
        assert_eq!(interval_between("Bb", "Eb"), RootInterval::Semitones(5));
        assert_eq!(interval_between("G", "C"), RootInterval::Semitones(5));
        assert_eq!(interval_between("C", "G"), RootInterval::Semitones(-5));
    }

    #[test]
    fn test_unknown_root_is_unresolved() {
        assert_eq!(interval_between("", "C"), RootInterval::Unresolved);
        assert_eq!(interval_between("C", "H"), RootInterval::Unresolved);
        assert_eq!(RootInterval::Unresolved.to_string(), "?");
        assert_eq!(RootInterval::Unresolved.semitones(), None);
    }

    #[test]
    fn test_fold_semitones() {
        assert_eq!(fold_semitones(7), -5);
        assert_eq!(fold_semitones(-6), 6);
        assert_eq!(fold_semitones(12), 0);
        assert_eq!(fold_semitones(-13), -1);
        for diff in -30..30 {
            assert!((-5..=6).contains(&fold_semitones(diff)));
        }
    }

    #[test]
    fn test_category_is_total_and_deterministic() {
        for n in i8::MIN..=i8::MAX {
            let interval = RootInterval::Semitones(n);
            assert_eq!(category_of(interval), category_of(interval));
        }
        assert_eq!(
            category_of(RootInterval::Unresolved),
            category_of(RootInterval::Unresolved)
        );
    }

    #[test]
    fn test_category_distinguishes_intervals() {
        let legend = legend();
        assert_eq!(legend.len(), 12);
        for (i, (_, a)) in legend.iter().enumerate() {
            for (_, b) in legend.iter().skip(i + 1) {
                assert_ne!(a.background_color, b.background_color);
            }
        }
    }

    #[test]
    fn test_category_shapes() {
        assert_eq!(category_of(RootInterval::Semitones(0)).shape, Shape::Circle);
        assert_eq!(category_of(RootInterval::Semitones(3)).shape, Shape::TriangleRight);
        assert_eq!(category_of(RootInterval::Semitones(-2)).shape, Shape::TriangleLeft);
        assert_eq!(category_of(RootInterval::Semitones(6)).shape, Shape::Circle);
        assert_eq!(category_of(RootInterval::Semitones(-5)).background_color, "red");
        assert_eq!(category_of(RootInterval::Semitones(7)).background_color, "red");
    }

    #[test]
    fn test_serialization() {
        assert_eq!(serde_json::to_string(&RootInterval::Semitones(-3)).unwrap(), "-3");
        assert_eq!(serde_json::to_string(&RootInterval::Unresolved).unwrap(), "\"?\"");
        let json = serde_json::to_value(category_of(RootInterval::Semitones(1))).unwrap();
        assert_eq!(json["backgroundColor"], "#1E90FF");
        assert_eq!(json["shape"], "triangle-right");
    }
}
