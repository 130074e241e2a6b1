use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::{controllers::song_controller::SongController, AppState};

pub struct SongRoutes;

impl SongRoutes {
    pub fn routes() -> Router<AppState> {
        Router::new()
            .route("/songs", get(SongController::list_songs_handler))
            .route("/songs", post(SongController::add_song_handler))
            .route("/songs/{id}/text", get(SongController::get_song_text_handler))
            .route("/songs/{id}", put(SongController::update_song_handler))
            .route("/songs/{id}", delete(SongController::delete_song_handler))
    }
}
