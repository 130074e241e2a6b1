pub mod pagination;
pub mod song;
