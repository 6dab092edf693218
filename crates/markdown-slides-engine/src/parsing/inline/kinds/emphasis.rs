/// Delimiter runs for emphasis, strong emphasis and strikethrough.
pub struct Emphasis;

impl Emphasis {
    pub const STAR: u8 = b'*';
    pub const UNDERSCORE: u8 = b'_';
    pub const EM_STAR: &'static [u8; 1] = b"*";
    pub const EM_UNDERSCORE: &'static [u8; 1] = b"_";
    pub const STRONG_STAR: &'static [u8; 2] = b"**";
    pub const STRONG_UNDERSCORE: &'static [u8; 2] = b"__";
    pub const STRIKE: &'static [u8; 2] = b"~~";
}
