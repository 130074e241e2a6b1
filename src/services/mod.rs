pub mod enrichment_service;
pub mod song_service;
