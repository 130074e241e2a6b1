pub mod song_helpers;
pub mod thing_helpers;
pub mod verse_helpers;
