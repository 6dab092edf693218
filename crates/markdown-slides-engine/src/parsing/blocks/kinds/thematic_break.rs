/// Thematic break (`---`, `***`, `___`), used as the slide separator.
pub struct ThematicBreak;

impl ThematicBreak {
    pub const MARKERS: [char; 3] = ['-', '*', '_'];
    pub const MIN_LEN: usize = 3;

    pub fn matches(remainder: &str) -> bool {
        let t = remainder.trim_end_matches(['\r', '\n']);
        let indent = t.len() - t.trim_start_matches(' ').len();
        if indent > 3 {
            return false;
        }
        let mut marker = None;
        let mut count = 0usize;
        for c in t.chars() {
            match c {
                ' ' | '\t' => {}
                c if Self::MARKERS.contains(&c) => {
                    if marker.is_some_and(|m| m != c) {
                        return false;
                    }
                    marker = Some(c);
                    count += 1;
                }
                _ => return false,
            }
        }
        count >= Self::MIN_LEN
    }
}
