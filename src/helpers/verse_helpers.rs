use crate::error::{Error, Result};
use crate::models::song::SongTextResponse;

/// Delimiter between verses in stored lyric text.
const VERSE_SEPARATOR: &str = "\n\n";

/// Selects one page of verses from a lyric text.
///
/// The text is split on blank lines as-is, with no trimming, so the verse
/// count is exactly what the split yields (an empty text counts as one
/// empty verse). A page starting past the last verse is an error; a page
/// starting exactly on the verse count yields an empty slice.
pub fn paginate_verses(text: &str, page: u32, limit: u32) -> Result<SongTextResponse> {
    let verses: Vec<&str> = text.split(VERSE_SEPARATOR).collect();
    let total_verses = verses.len();

    let start = (page as usize).saturating_sub(1) * limit as usize;
    if start > total_verses {
        return Err(Error::PageOutOfRange { page, total_verses });
    }
    let end = (start + limit as usize).min(total_verses);

    Ok(SongTextResponse {
        total_verses,
        page,
        limit,
        verses: verses[start..end].iter().map(|v| v.to_string()).collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIVE_VERSES: &str = "a\n\nb\n\nc\n\nd\n\ne";

    #[test]
    fn test_first_page() {
        let result = paginate_verses(FIVE_VERSES, 1, 2).unwrap();
        assert_eq!(result.total_verses, 5);
        assert_eq!(result.page, 1);
        assert_eq!(result.limit, 2);
        assert_eq!(result.verses, vec!["a", "b"]);
    }

    #[test]
    fn test_last_page_is_partial() {
        let result = paginate_verses(FIVE_VERSES, 3, 2).unwrap();
        assert_eq!(result.verses, vec!["e"]);
    }

    #[test]
    fn test_page_past_the_end_is_an_error() {
        // start = 3 * 2 = 6 > 5 verses
        let err = paginate_verses(FIVE_VERSES, 4, 2).unwrap_err();
        assert!(matches!(
            err,
            Error::PageOutOfRange {
                page: 4,
                total_verses: 5
            }
        ));
    }

    #[test]
    fn test_start_exactly_at_verse_count_is_empty_not_an_error() {
        // start = 2 * 3 = 6 == 6 verses: empty slice, success
        let text = "a\n\nb\n\nc\n\nd\n\ne\n\nf";
        let result = paginate_verses(text, 3, 3).unwrap();
        assert_eq!(result.total_verses, 6);
        assert!(result.verses.is_empty());
    }

    #[test]
    fn test_limit_covering_everything() {
        let result = paginate_verses(FIVE_VERSES, 1, 100).unwrap();
        assert_eq!(result.verses, vec!["a", "b", "c", "d", "e"]);
    }

    #[test]
    fn test_verses_are_not_trimmed() {
        let text = "  first \nline\n\nsecond ";
        let result = paginate_verses(text, 1, 10).unwrap();
        assert_eq!(result.verses, vec!["  first \nline", "second "]);
    }

    #[test]
    fn test_empty_text_counts_as_one_empty_verse() {
        let result = paginate_verses("", 1, 2).unwrap();
        assert_eq!(result.total_verses, 1);
        assert_eq!(result.verses, vec![""]);
    }

    #[test]
    fn test_text_without_blank_lines_is_a_single_verse() {
        let result = paginate_verses("one\ntwo\nthree", 1, 2).unwrap();
        assert_eq!(result.total_verses, 1);
        assert_eq!(result.verses, vec!["one\ntwo\nthree"]);
    }
}
