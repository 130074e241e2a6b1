pub mod song_routes;
