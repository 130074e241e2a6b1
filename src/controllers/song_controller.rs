use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::{
    helpers::verse_helpers::paginate_verses,
    models::{
        pagination::{PageQuery, DEFAULT_SONG_LIMIT, DEFAULT_VERSE_LIMIT},
        song::{AddSongRequest, Song, SongTextResponse, UpdateSongRequest},
    },
    services::{
        enrichment_service,
        song_service::{NewSong, SongService},
    },
    AppState, Error, Result,
};

#[derive(Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

#[derive(Debug, Default, Deserialize)]
pub struct ListSongsQuery {
    pub artist: Option<String>,
    pub title: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
}

/// Any body the extractor rejects (syntax error or wrong-typed field)
/// answers 400, not axum's default 422.
fn reject_bad_json(rejection: JsonRejection) -> Error {
    Error::InvalidInput {
        reason: rejection.body_text(),
    }
}

pub struct SongController;

impl SongController {
    pub async fn list_songs_handler(
        State(state): State<AppState>,
        Query(query): Query<ListSongsQuery>,
    ) -> Result<Json<Vec<Song>>> {
        let (page, limit) = PageQuery {
            page: query.page,
            limit: query.limit,
        }
        .resolve(DEFAULT_SONG_LIMIT);

        tracing::debug!(
            "Listing songs - artist: {:?}, title: {:?}, page: {}, limit: {}",
            query.artist,
            query.title,
            page,
            limit
        );

        let songs = SongService::list_songs(
            &state.db,
            query.artist.as_deref(),
            query.title.as_deref(),
            page,
            limit,
        )
        .await?;

        Ok(Json(songs))
    }

    pub async fn get_song_text_handler(
        State(state): State<AppState>,
        Path(id): Path<String>,
        Query(query): Query<PageQuery>,
    ) -> Result<Json<SongTextResponse>> {
        let song = SongService::get_song(&state.db, &id).await?;

        let (page, limit) = query.resolve(DEFAULT_VERSE_LIMIT);
        let response = paginate_verses(&song.text, page, limit)?;

        Ok(Json(response))
    }

    pub async fn add_song_handler(
        State(state): State<AppState>,
        payload: core::result::Result<Json<AddSongRequest>, JsonRejection>,
    ) -> Result<(StatusCode, Json<Song>)> {
        let Json(payload) = payload.map_err(reject_bad_json)?;

        if payload.group.trim().is_empty() || payload.song.trim().is_empty() {
            return Err(Error::InvalidInput {
                reason: "group and song must be non-empty".to_string(),
            });
        }

        tracing::debug!(
            "Adding song - group: {}, song: {}",
            payload.group,
            payload.song
        );

        let info = enrichment_service::fetch_song_info(
            &state.config.external_api_base_url,
            &payload.group,
            &payload.song,
        )
        .await?;

        let created = SongService::create_song(
            &state.db,
            NewSong {
                artist: info.artist,
                title: payload.song,
                release_date: info.release_date,
                text: info.text,
                link: info.link,
                group: payload.group,
            },
        )
        .await?;

        Ok((StatusCode::CREATED, Json(created)))
    }

    pub async fn update_song_handler(
        State(state): State<AppState>,
        Path(id): Path<String>,
        payload: core::result::Result<Json<UpdateSongRequest>, JsonRejection>,
    ) -> Result<Json<SuccessResponse>> {
        let Json(payload) = payload.map_err(reject_bad_json)?;

        if id.trim().is_empty() {
            return Err(Error::InvalidInput {
                reason: "song id must not be empty".to_string(),
            });
        }

        SongService::update_song(&state.db, &id, payload).await?;

        Ok(Json(SuccessResponse { success: true }))
    }

    pub async fn delete_song_handler(
        State(state): State<AppState>,
        Path(id): Path<String>,
    ) -> Result<Json<SuccessResponse>> {
        if id.trim().is_empty() {
            return Err(Error::InvalidInput {
                reason: "song id must not be empty".to_string(),
            });
        }

        SongService::delete_song(&state.db, &id).await?;

        Ok(Json(SuccessResponse { success: true }))
    }
}
