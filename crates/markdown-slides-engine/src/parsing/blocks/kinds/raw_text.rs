/// Raw HTML-looking lines, passed through as text without inline parsing.
pub struct RawText;

impl RawText {
    pub fn matches(remainder: &str) -> bool {
        let t = remainder.trim_start();
        let mut chars = t.chars();
        chars.next() == Some('<')
            && chars
                .next()
                .is_some_and(|c| c.is_ascii_alphabetic() || c == '/' || c == '!')
    }
}
