pub mod song_controller;
