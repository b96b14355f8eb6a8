use changes::{Corpus, RootInterval, Song, VoicingDictionary};
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[derive(Serialize)]
struct BindingError {
    message: String,
}

fn to_json<T: Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value).map_err(|e| error_value(e.to_string()))
}

fn error_value(message: String) -> JsValue {
    let json = serde_json::to_string(&BindingError { message })
        .unwrap_or_else(|_| "{\"message\":\"unknown error\"}".to_string());
    JsValue::from_str(&json)
}

fn load_song(name: &str) -> Result<Song, JsValue> {
    let source = changes_standards::get_song(name)
        .ok_or_else(|| error_value(format!("Unknown song: {}", name)))?;
    Song::from_yaml(&source.name, &source.content).map_err(|e| error_value(e.to_string()))
}

#[wasm_bindgen(start)]
pub fn start() {
    // A second init (page reload in some hosts) is harmless
    let _ = console_log::init_with_level(log::Level::Warn);
}

/// Parse a chord token, returning the ParsedChord record as JSON
#[wasm_bindgen]
pub fn parse_chord(token: &str) -> Result<String, JsValue> {
    to_json(&changes::parse_chord_name(token))
}

#[wasm_bindgen]
pub fn is_available(root: &str, suffix: &str) -> bool {
    changes::is_available(root, suffix)
}

/// Availability with suggestions, as JSON tagged by `status`
#[wasm_bindgen]
pub fn check_availability(root: &str, suffix: &str) -> Result<String, JsValue> {
    to_json(&changes::check_availability(root, suffix))
}

/// Interval between two roots as a string: a number, or `?`
#[wasm_bindgen]
pub fn interval_between(root_a: &str, root_b: &str) -> String {
    changes::interval_between(root_a, root_b).to_string()
}

/// Presentation for an interval; `None` means unresolved
#[wasm_bindgen]
pub fn root_motion_category(interval: Option<i8>) -> Result<String, JsValue> {
    let interval = interval.map_or(RootInterval::Unresolved, RootInterval::Semitones);
    to_json(&changes::category_of(interval))
}

/// Legend entries from -5 to 6 as JSON
#[wasm_bindgen]
pub fn root_motion_legend() -> Result<String, JsValue> {
    to_json(&changes::legend())
}

/// Songs sorted by title, as JSON
#[wasm_bindgen]
pub fn list_songs() -> Result<String, JsValue> {
    let sources = changes_standards::get_all_songs();
    let corpus = Corpus::from_sources(
        sources
            .iter()
            .map(|source| (source.name.as_str(), source.content.as_str())),
    )
    .map_err(|e| error_value(e.to_string()))?;
    to_json(&corpus.songs())
}

/// Parse report for one song: distinct chord count and problem chords
#[wasm_bindgen]
pub fn song_report(name: &str) -> Result<String, JsValue> {
    let song = load_song(name)?;
    to_json(&changes::analyze_song(&song, VoicingDictionary::builtin()))
}

/// Squashed chords of one song as JSON
#[wasm_bindgen]
pub fn song_squashed_chords(name: &str) -> Result<String, JsValue> {
    let song = load_song(name)?;
    to_json(&song.squashed_chords())
}

/// Root motion between neighbouring squashed chords as JSON
#[wasm_bindgen]
pub fn song_root_motion(name: &str) -> Result<String, JsValue> {
    let song = load_song(name)?;
    to_json(&song.root_motion())
}
