use serde::Deserialize;

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_SONG_LIMIT: u32 = 10;
pub const DEFAULT_VERSE_LIMIT: u32 = 2;

/// Raw `page`/`limit` query parameters.
///
/// Kept as strings on purpose: a non-numeric or non-positive value falls
/// back to the defaults instead of rejecting the request, so typed
/// deserialization (which would 400 on `page=abc`) is not an option here.
#[derive(Debug, Default, Deserialize, Clone)]
pub struct PageQuery {
    pub page: Option<String>,
    pub limit: Option<String>,
}

impl PageQuery {
    /// Resolves the pair against `default_limit`, yielding `(page, limit)`.
    pub fn resolve(&self, default_limit: u32) -> (u32, u32) {
        let page = parse_positive(self.page.as_deref()).unwrap_or(DEFAULT_PAGE);
        let limit = parse_positive(self.limit.as_deref()).unwrap_or(default_limit);
        (page, limit)
    }
}

fn parse_positive(raw: Option<&str>) -> Option<u32> {
    raw?.parse::<u32>().ok().filter(|v| *v > 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(page: Option<&str>, limit: Option<&str>) -> PageQuery {
        PageQuery {
            page: page.map(String::from),
            limit: limit.map(String::from),
        }
    }

    #[test]
    fn test_resolve_defaults_when_absent() {
        assert_eq!(query(None, None).resolve(DEFAULT_SONG_LIMIT), (1, 10));
        assert_eq!(query(None, None).resolve(DEFAULT_VERSE_LIMIT), (1, 2));
    }

    #[test]
    fn test_resolve_valid_values() {
        assert_eq!(query(Some("3"), Some("25")).resolve(10), (3, 25));
    }

    #[test]
    fn test_resolve_non_numeric_falls_back() {
        assert_eq!(query(Some("abc"), Some("xyz")).resolve(10), (1, 10));
        assert_eq!(query(Some("2.5"), Some("")).resolve(10), (1, 10));
    }

    #[test]
    fn test_resolve_non_positive_falls_back() {
        assert_eq!(query(Some("0"), Some("-4")).resolve(10), (1, 10));
    }

    #[test]
    fn test_resolve_mixed() {
        // One bad parameter must not drag the other down with it.
        assert_eq!(query(Some("7"), Some("oops")).resolve(10), (7, 10));
        assert_eq!(query(Some("oops"), Some("7")).resolve(10), (1, 7));
    }
}
