use serde::{Deserialize, Serialize};
use surrealdb::sql::{Datetime, Thing};

/// A catalog entry. The id and both timestamps are assigned by the store;
/// the id never changes once assigned.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Song {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Thing>,

    pub artist: String,
    pub title: String,
    pub release_date: String,
    pub text: String,
    pub link: String,
    pub group: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Datetime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<Datetime>,
}

/// Body of `POST /api/songs`. Everything beyond the (group, song) pair is
/// fetched from the external metadata API.
#[derive(Debug, Deserialize)]
pub struct AddSongRequest {
    #[serde(default)]
    pub group: String,
    #[serde(default)]
    pub song: String,
}

/// Body of `PUT /api/songs/{id}`. Defaults make absent fields land as empty
/// strings: the update is a full replace, not a merge.
#[derive(Debug, Deserialize)]
pub struct UpdateSongRequest {
    #[serde(default)]
    pub artist: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub release_date: String,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub group: String,
}

/// One page of verses from a song's lyric text.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SongTextResponse {
    pub total_verses: usize,
    pub page: u32,
    pub limit: u32,
    pub verses: Vec<String>,
}
