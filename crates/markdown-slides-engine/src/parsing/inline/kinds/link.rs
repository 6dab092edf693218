/// Link, image and autolink delimiters.
pub struct Link;

impl Link {
    pub const IMAGE_BANG: u8 = b'!';
    pub const TEXT_OPEN: u8 = b'[';
    pub const TEXT_CLOSE: u8 = b']';
    pub const DEST_OPEN: u8 = b'(';
    pub const DEST_CLOSE: u8 = b')';
    pub const AUTO_OPEN: u8 = b'<';
    pub const AUTO_CLOSE: u8 = b'>';
    pub const AUTO_SCHEMES: [&'static str; 3] = ["http://", "https://", "mailto:"];

    /// Splits a destination like `url "title"` into href and optional title.
    pub fn destination(raw: &str) -> (String, Option<String>) {
        let raw = raw.trim();
        let (href, rest) = if let Some(stripped) = raw.strip_prefix('<') {
            match stripped.find('>') {
                Some(end) => (&stripped[..end], &stripped[end + 1..]),
                None => (raw, ""),
            }
        } else {
            match raw.find(char::is_whitespace) {
                Some(end) => (&raw[..end], &raw[end..]),
                None => (raw, ""),
            }
        };
        let rest = rest.trim();
        let title = ['"', '\'']
            .into_iter()
            .find_map(|q| rest.strip_prefix(q).and_then(|r| r.strip_suffix(q)))
            .or_else(|| rest.strip_prefix('(').and_then(|r| r.strip_suffix(')')))
            .map(str::to_string);
        (href.to_string(), title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_destination() {
        assert_eq!(Link::destination("https://x.io"), ("https://x.io".into(), None));
    }

    #[test]
    fn destination_with_title() {
        assert_eq!(
            Link::destination("/a.png \"A title\""),
            ("/a.png".into(), Some("A title".into()))
        );
        assert_eq!(
            Link::destination("/a 'single'"),
            ("/a".into(), Some("single".into()))
        );
    }

    #[test]
    fn angle_bracket_destination() {
        assert_eq!(
            Link::destination("<my file.md>"),
            ("my file.md".into(), None)
        );
    }
}
