#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FenceKind {
    Backticks,
    Tildes,
}

impl FenceKind {
    fn marker(self) -> u8 {
        match self {
            FenceKind::Backticks => b'`',
            FenceKind::Tildes => b'~',
        }
    }
}

/// A line that looks like a fence opener or closer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FenceSig {
    pub kind: FenceKind,
    /// Length of the marker run (at least 3).
    pub len: usize,
    /// Whatever follows the marker run, trimmed.
    pub info: String,
}

pub struct CodeFence;

impl CodeFence {
    pub const MIN_LEN: usize = 3;

    /// Detects a fence marker run at the start of `remainder`.
    ///
    /// Up to three spaces of indentation are allowed. Backtick fences may not
    /// carry a backtick in their info string.
    pub fn sig(remainder: &str) -> Option<FenceSig> {
        let t = remainder.trim_end_matches(['\r', '\n']);
        let indent = t.len() - t.trim_start_matches(' ').len();
        if indent > 3 {
            return None;
        }
        let t = &t[indent..];
        let kind = match t.as_bytes().first()? {
            b'`' => FenceKind::Backticks,
            b'~' => FenceKind::Tildes,
            _ => return None,
        };
        let len = t.bytes().take_while(|b| *b == kind.marker()).count();
        if len < Self::MIN_LEN {
            return None;
        }
        let info = t[len..].trim();
        if kind == FenceKind::Backticks && info.contains('`') {
            return None;
        }
        Some(FenceSig {
            kind,
            len,
            info: info.to_string(),
        })
    }

    /// The language tag is the first word of the info string.
    pub fn language(sig: &FenceSig) -> Option<String> {
        sig.info.split_whitespace().next().map(str::to_string)
    }

    /// A closing fence uses the same marker, is at least as long as the
    /// opener and carries no info string.
    pub fn closes(open: &FenceSig, sig: Option<&FenceSig>) -> bool {
        match sig {
            Some(close) => close.kind == open.kind && close.len >= open.len && close.info.is_empty(),
            None => false,
        }
    }
}
