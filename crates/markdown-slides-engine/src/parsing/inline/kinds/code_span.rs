/// Code span inline type with owned delimiter constant.
///
/// Code spans are "raw zones" - no other inline parsing occurs inside them.
pub struct CodeSpan;

impl CodeSpan {
    /// The backtick character that delimits code spans.
    pub const TICK: u8 = b'`';

    /// One leading and trailing space is dropped when both are present, so
    /// `` `` `x` `` `` can show a backtick.
    pub fn trim_padding(inner: &str) -> &str {
        if inner.len() >= 2 && inner.starts_with(' ') && inner.ends_with(' ') && !inner.trim().is_empty() {
            &inner[1..inner.len() - 1]
        } else {
            inner
        }
    }
}
