//! # Song Corpus
//!
//! Songs from the lead-sheet corpus and the per-song data the viewer draws:
//! squashed chord spans, root motion between them, and parse/voicing reports.
//!
//! ## Song Format
//! ```yaml
//! filename: BluesWalk
//! Title: Blues Walk
//! ComposedBy: Sonny Stitt
//! DBKeySig: Bb
//! TimeSig: [4, 4]
//! Bars: "12"
//! chords:
//!   - ["Bb7", "Bb7", "Bb7", "Bb7"]
//!   - ["Fm7 Dm7b5", "G7b9 C7b9", "Fm7 DbM7", "Bbm7 Eb7"]
//! ```
//!
//! Each inner list is one line of bars; each string is one bar. A bar may
//! pack several chords separated by spaces (`"Fm7 Dm7b5"`), which is why
//! [`Song::chord_tokens`] splits on whitespace before anything is parsed.
//!
//! ## Squashing
//! Runs of identical consecutive tokens collapse into one [`SquashedChord`]
//! spanning `start_index..=end_index` of the token list:
//!
//! ```text
//! Bb7 Bb7 Bb7 Bb7 Eb7 Eb7 Bb7 Bb7
//! [0 ........ 3] [4 .. 5] [6 .. 7]
//! ```
//!
//! ## Root Motion
//! One [`RootMotion`] per pair of neighbouring squashed chords, using
//! [`interval_between`](crate::interval_between) on their canonical roots.

use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::chord::{parse_chord_name, ParsedChord};
use crate::dictionary::VoicingDictionary;
use crate::error::ChangesError;
use crate::interval::{category_of, interval_between, RootInterval, RootMotionCategory};

/// One song from the corpus
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Song {
    pub filename: String,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "ComposedBy", default)]
    pub composed_by: String,
    #[serde(rename = "DBKeySig", default)]
    pub key_signature: String,
    /// (beats per bar, beat unit)
    #[serde(rename = "TimeSig")]
    pub time_signature: (u8, u8),
    #[serde(rename = "Bars", default)]
    pub bars: String,
    pub chords: Vec<Vec<String>>,
}

impl Song {
    /// Decode a song from YAML; `name` is used in error messages.
    pub fn from_yaml(name: &str, source: &str) -> Result<Self, ChangesError> {
        let song: Song = serde_yaml::from_str(source).map_err(|e| ChangesError::SongError {
            song: name.to_string(),
            message: e.to_string(),
        })?;

        let (beats, unit) = song.time_signature;
        if beats == 0 || unit == 0 {
            return Err(ChangesError::SongError {
                song: name.to_string(),
                message: format!("Invalid time signature: {}/{}", beats, unit),
            });
        }
        if song.filename.trim().is_empty() {
            return Err(ChangesError::SongError {
                song: name.to_string(),
                message: "filename must not be empty".to_string(),
            });
        }

        debug!("loaded song {:?} ({} lines)", song.title, song.chords.len());
        Ok(song)
    }

    /// Every chord token in playing order, with packed bars split apart
    pub fn chord_tokens(&self) -> Vec<&str> {
        self.chords
            .iter()
            .flatten()
            .flat_map(|bar| bar.split_whitespace())
            .collect()
    }

    pub fn squashed_chords(&self) -> Vec<SquashedChord> {
        squash_chords(self.chord_tokens())
    }

    pub fn root_motion(&self) -> Vec<RootMotion> {
        root_motion(&self.squashed_chords())
    }
}

/// A run of identical consecutive chord tokens
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SquashedChord {
    pub chord: String,
    #[serde(flatten)]
    pub parsed: ParsedChord,
    pub start_index: usize,
    pub end_index: usize,
}

impl SquashedChord {
    /// Number of tokens in the run
    pub fn token_count(&self) -> usize {
        self.end_index - self.start_index + 1
    }
}

/// Collapse runs of identical tokens, parsing each run once.
///
/// ```
/// use changes::squash_chords;
///
/// let spans = squash_chords(["C", "C", "F", "C"]);
/// assert_eq!(spans.len(), 3);
/// assert_eq!((spans[0].start_index, spans[0].end_index), (0, 1));
/// assert_eq!(spans[1].parsed.root, "F");
/// ```
pub fn squash_chords<'a, I>(tokens: I) -> Vec<SquashedChord>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut spans: Vec<SquashedChord> = Vec::new();

    for (index, token) in tokens.into_iter().enumerate() {
        match spans.last_mut() {
            Some(last) if last.chord == token => last.end_index = index,
            _ => spans.push(SquashedChord {
                chord: token.to_string(),
                parsed: parse_chord_name(token),
                start_index: index,
                end_index: index,
            }),
        }
    }

    spans
}

/// Root movement from one squashed chord to the next
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RootMotion {
    pub from: String,
    pub to: String,
    pub interval: RootInterval,
    pub category: RootMotionCategory,
}

/// Root motion between every pair of neighbouring spans.
///
/// Unparseable chords have no root, so motion into or out of them is
/// [`RootInterval::Unresolved`].
pub fn root_motion(spans: &[SquashedChord]) -> Vec<RootMotion> {
    spans
        .windows(2)
        .map(|pair| {
            let interval = interval_between(&pair[0].parsed.root, &pair[1].parsed.root);
            RootMotion {
                from: pair[0].chord.clone(),
                to: pair[1].chord.clone(),
                interval,
                category: category_of(interval),
            }
        })
        .collect()
}

/// How a chord token fares against parser and voicing dictionary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChordStatus {
    Voiceable,
    /// Parsed, but the dictionary has no voicing for it
    Unvoiceable,
    /// No root could be recognized
    Unparseable,
}

pub fn chord_status(token: &str, dictionary: &VoicingDictionary) -> ChordStatus {
    let chord = parse_chord_name(token);
    if chord.is_error() {
        ChordStatus::Unparseable
    } else if dictionary.is_available(&chord.root, &chord.suffix) {
        ChordStatus::Voiceable
    } else {
        ChordStatus::Unvoiceable
    }
}

/// Summary of a song's chords
///
/// `problem_chords` holds each unparseable or unvoiceable token once, in
/// first-seen order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SongReport {
    pub filename: String,
    pub title: String,
    pub distinct_chords: usize,
    pub problem_chords: Vec<String>,
}

impl SongReport {
    pub fn has_errors(&self) -> bool {
        !self.problem_chords.is_empty()
    }
}

pub fn analyze_song(song: &Song, dictionary: &VoicingDictionary) -> SongReport {
    let mut distinct: HashSet<&str> = HashSet::new();
    let mut problem_chords: Vec<String> = Vec::new();

    for token in song.chord_tokens() {
        if !distinct.insert(token) {
            continue;
        }
        if chord_status(token, dictionary) != ChordStatus::Voiceable {
            problem_chords.push(token.to_string());
        }
    }

    if !problem_chords.is_empty() {
        info!(
            "{}: {} of {} distinct chords cannot be played: {}",
            song.filename,
            problem_chords.len(),
            distinct.len(),
            problem_chords.join(", ")
        );
    }

    SongReport {
        filename: song.filename.clone(),
        title: song.title.clone(),
        distinct_chords: distinct.len(),
        problem_chords,
    }
}

/// Songs ordered by title
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    songs: Vec<Song>,
}

impl Corpus {
    pub fn new(mut songs: Vec<Song>) -> Self {
        songs.sort_by_cached_key(|song| song.title.to_lowercase());
        Corpus { songs }
    }

    /// Decode `(name, yaml)` pairs, stopping at the first invalid song
    pub fn from_sources<'a, I>(sources: I) -> Result<Self, ChangesError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let songs = sources
            .into_iter()
            .map(|(name, source)| Song::from_yaml(name, source))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Corpus::new(songs))
    }

    pub fn songs(&self) -> &[Song] {
        &self.songs
    }

    pub fn get(&self, filename: &str) -> Option<&Song> {
        self.songs.iter().find(|song| song.filename == filename)
    }

    pub fn reports(&self, dictionary: &VoicingDictionary) -> Vec<SongReport> {
        self.songs
            .iter()
            .map(|song| analyze_song(song, dictionary))
            .collect()
    }
}
