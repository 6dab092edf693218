/// ATX heading (`# Title` .. `###### Title`).
pub struct Heading;

impl Heading {
    pub const MARKER: u8 = b'#';
    pub const MAX_LEVEL: u8 = 6;

    /// Returns the heading level and its content with any closing `#` run
    /// removed. The level is always within `1..=6`.
    pub fn parse(remainder: &str) -> Option<(u8, &str)> {
        let t = remainder.trim_end_matches(['\r', '\n']);
        let indent = t.len() - t.trim_start_matches(' ').len();
        if indent > 3 {
            return None;
        }
        let t = &t[indent..];
        let hashes = t.bytes().take_while(|b| *b == Self::MARKER).count();
        if hashes == 0 || hashes > Self::MAX_LEVEL as usize {
            return None;
        }
        let rest = &t[hashes..];
        if !rest.is_empty() && !rest.starts_with([' ', '\t']) {
            return None;
        }
        Some((hashes as u8, Self::strip_closing(rest.trim())))
    }

    /// `## Title ##` closes with a hash run preceded by whitespace; a bare
    /// `#` glued to a word (`C#`) is content.
    fn strip_closing(content: &str) -> &str {
        let without = content.trim_end_matches('#');
        if without.len() == content.len() {
            return content;
        }
        if without.is_empty() {
            return "";
        }
        if without.ends_with([' ', '\t']) {
            without.trim_end()
        } else {
            content
        }
    }
}
