use surrealdb::sql::Thing;

/// Extracts the key part of an id that may arrive as `song:xyz` or bare `xyz`.
pub fn parse_id_part(id: &str) -> &str {
    if let Some(id_part) = id.split(':').nth(1) {
        id_part
    } else {
        id
    }
}

pub fn create_song_thing(song_id: &str) -> Thing {
    let clean_id = parse_id_part(song_id);
    Thing::from(("song".to_string(), clean_id.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id_part() {
        assert_eq!(parse_id_part("song:123"), "123");
        assert_eq!(parse_id_part("123"), "123");
        assert_eq!(parse_id_part("song:yesterday"), "yesterday");
    }

    #[test]
    fn test_create_song_thing() {
        let expected = Thing::from(("song".to_string(), "56".to_string()));

        let song_thing = create_song_thing("song:56");
        assert_eq!(song_thing.tb, "song");
        assert_eq!(song_thing, expected);

        let bare_thing = create_song_thing("56");
        assert_eq!(bare_thing, expected);
    }
}
