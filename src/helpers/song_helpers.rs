use crate::helpers::thing_helpers::create_song_thing;
use crate::{models::song::Song, Error};
use surrealdb::{engine::any::Any, Surreal};

pub async fn get_song(db: &Surreal<Any>, song_id: &str) -> Result<Option<Song>, Error> {
    let song_thing = create_song_thing(song_id);
    let sql_query = "SELECT * FROM $song_id;";
    let mut response = db.query(sql_query).bind(("song_id", song_thing)).await?;
    let song: Option<Song> = response.take(0)?;
    Ok(song)
}

pub async fn song_exists(db: &Surreal<Any>, song_id: &str) -> Result<bool, Error> {
    Ok(get_song(db, song_id).await?.is_some())
}

#[cfg(test)]
mod tests {
    use super::*;
    use surrealdb::engine::any::connect;

    async fn setup_db() -> (Surreal<Any>, String) {
        let db = connect("mem://").await.unwrap();
        db.use_ns("test").use_db("test").await.unwrap();

        let test_song = Song {
            id: None,
            artist: "The Beatles".to_string(),
            title: "Yesterday".to_string(),
            release_date: "1965-08-06".to_string(),
            text: "Yesterday\n\nAll my troubles".to_string(),
            link: "https://example.com/yesterday".to_string(),
            group: "The Beatles".to_string(),
            created_at: None,
            updated_at: None,
        };

        let created_song: Song = db
            .create("song")
            .content(test_song)
            .await
            .unwrap()
            .expect("Test song creation returned nothing (None).");

        let song_id = created_song.id.unwrap().id.to_string();

        (db, song_id)
    }

    #[tokio::test]
    async fn test_song_exists() {
        let (db, valid_id) = setup_db().await;

        let exists = song_exists(&db, &valid_id).await.unwrap();
        assert!(exists, "Song with ID '{}' should exist", valid_id);

        let exists = song_exists(&db, "this_id_does_not_exist").await.unwrap();
        assert!(!exists, "Song with a non-existent ID should not exist");
    }

    #[tokio::test]
    async fn test_get_song_accepts_prefixed_ids() {
        let (db, valid_id) = setup_db().await;

        let song = get_song(&db, &format!("song:{}", valid_id)).await.unwrap();
        assert_eq!(song.unwrap().title, "Yesterday");
    }
}
