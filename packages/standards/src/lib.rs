include!(concat!(env!("OUT_DIR"), "/songs.rs"));

/// A song file with its name and YAML content
#[derive(Debug, Clone)]
pub struct SongSource {
    pub name: String,
    pub content: String,
}

/// Get all embedded songs
pub fn get_all_songs() -> Vec<SongSource> {
    SONGS
        .iter()
        .map(|(name, content)| SongSource {
            name: name.to_string(),
            content: content.to_string(),
        })
        .collect()
}

/// Get a song by name
pub fn get_song(name: &str) -> Option<SongSource> {
    SONGS
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(name, content)| SongSource {
            name: name.to_string(),
            content: content.to_string(),
        })
}

/// List all song names
pub fn list_songs() -> Vec<&'static str> {
    SONGS.iter().map(|(name, _)| *name).collect()
}
