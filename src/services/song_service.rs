use serde::Serialize;
use surrealdb::{engine::any::Any, Surreal};

use crate::error::{Error, Result};
use crate::helpers::song_helpers::song_exists;
use crate::helpers::thing_helpers::create_song_thing;
use crate::models::song::{Song, UpdateSongRequest};

/// Field set for a record about to be created; the store fills in the id
/// and both timestamps.
#[derive(Debug, Serialize, Clone)]
pub struct NewSong {
    pub artist: String,
    pub title: String,
    pub release_date: String,
    pub text: String,
    pub link: String,
    pub group: String,
}

pub struct SongService;

impl SongService {
    /// Lists songs filtered by optional case-insensitive artist/title
    /// substrings, ordered by record id ascending, one page at a time.
    ///
    /// An empty filter string counts as no filter at all.
    pub async fn list_songs(
        db: &Surreal<Any>,
        artist: Option<&str>,
        title: Option<&str>,
        page: u32,
        limit: u32,
    ) -> Result<Vec<Song>> {
        let artist = artist.filter(|s| !s.is_empty());
        let title = title.filter(|s| !s.is_empty());

        let mut conditions: Vec<&str> = Vec::new();
        if artist.is_some() {
            conditions.push("string::lowercase(artist) CONTAINS string::lowercase($artist)");
        }
        if title.is_some() {
            conditions.push("string::lowercase(title) CONTAINS string::lowercase($title)");
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {} ", conditions.join(" AND "))
        };

        // u64 so that page/limit values near u32::MAX cannot wrap the offset.
        let offset = (page as u64).saturating_sub(1) * limit as u64;

        let sql_query = format!(
            "SELECT * FROM song {}ORDER BY id ASC LIMIT {} START {};",
            where_clause, limit, offset
        );

        let mut query = db.query(sql_query);
        if let Some(artist) = artist {
            query = query.bind(("artist", artist.to_string()));
        }
        if let Some(title) = title {
            query = query.bind(("title", title.to_string()));
        }

        let mut response = query.await?;
        let songs: Vec<Song> = response.take(0)?;

        Ok(songs)
    }

    pub async fn get_song(db: &Surreal<Any>, song_id: &str) -> Result<Song> {
        crate::helpers::song_helpers::get_song(db, song_id)
            .await?
            .ok_or(Error::SongNotFound {
                id: song_id.to_string(),
            })
    }

    pub async fn create_song(db: &Surreal<Any>, new_song: NewSong) -> Result<Song> {
        let sql_query = "CREATE song CONTENT {
            artist: $artist,
            title: $title,
            release_date: $release_date,
            text: $text,
            link: $link,
            `group`: $group,
            created_at: time::now(),
            updated_at: time::now()
        };";

        let mut response = db
            .query(sql_query)
            .bind(("artist", new_song.artist))
            .bind(("title", new_song.title))
            .bind(("release_date", new_song.release_date))
            .bind(("text", new_song.text))
            .bind(("link", new_song.link))
            .bind(("group", new_song.group))
            .await?;

        let created: Option<Song> = response.take(0)?;

        created.ok_or_else(|| Error::DbError("create returned no record".to_string()))
    }

    /// Full replace of every mutable field. Fields the caller left out of
    /// the request body arrive here as empty strings and overwrite.
    pub async fn update_song(
        db: &Surreal<Any>,
        song_id: &str,
        update: UpdateSongRequest,
    ) -> Result<Song> {
        if !song_exists(db, song_id).await? {
            return Err(Error::SongNotFound {
                id: song_id.to_string(),
            });
        }

        let song_thing = create_song_thing(song_id);

        let sql_query = "UPDATE $song_id SET
            artist = $artist,
            title = $title,
            release_date = $release_date,
            text = $text,
            link = $link,
            `group` = $group,
            updated_at = time::now();";

        let mut response = db
            .query(sql_query)
            .bind(("song_id", song_thing))
            .bind(("artist", update.artist))
            .bind(("title", update.title))
            .bind(("release_date", update.release_date))
            .bind(("text", update.text))
            .bind(("link", update.link))
            .bind(("group", update.group))
            .await?;

        let updated: Option<Song> = response.take(0)?;

        updated.ok_or_else(|| Error::DbError("update returned no record".to_string()))
    }

    pub async fn delete_song(db: &Surreal<Any>, song_id: &str) -> Result<()> {
        if !song_exists(db, song_id).await? {
            return Err(Error::SongNotFound {
                id: song_id.to_string(),
            });
        }

        let song_thing = create_song_thing(song_id);

        db.query("DELETE $song_id;")
            .bind(("song_id", song_thing))
            .await?;

        Ok(())
    }
}
