use serde::Serialize;

/// A parsed inline node.
///
/// Nodes own their text; emphasis-like wrappers hold their parsed children.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum InlineNode {
    /// Plain text that isn't part of any special construct.
    Text { text: String },
    /// A code span. This is a "raw zone" - no parsing inside.
    Code { code: String },
    /// `*em*` or `_em_`.
    Emphasis { children: Vec<InlineNode> },
    /// `**strong**` or `__strong__`.
    Strong { children: Vec<InlineNode> },
    /// `~~struck~~`.
    Strikethrough { children: Vec<InlineNode> },
    /// `[text](href "title")` or an autolink `<https://...>`.
    Link {
        children: Vec<InlineNode>,
        href: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        title: Option<String>,
    },
    /// `![alt](src "title")`.
    Image {
        alt: String,
        src: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        title: Option<String>,
    },
}

impl InlineNode {
    /// Renders nodes as plain text: markup removed, link text and image alt
    /// text kept.
    pub fn plain_text(nodes: &[InlineNode]) -> String {
        let mut out = String::new();
        for n in nodes {
            n.push_plain(&mut out);
        }
        out
    }

    /// Whether any node, at any depth, is a link or an image.
    pub fn has_references(nodes: &[InlineNode]) -> bool {
        nodes.iter().any(|n| match n {
            InlineNode::Link { .. } | InlineNode::Image { .. } => true,
            InlineNode::Emphasis { children }
            | InlineNode::Strong { children }
            | InlineNode::Strikethrough { children } => Self::has_references(children),
            InlineNode::Text { .. } | InlineNode::Code { .. } => false,
        })
    }

    fn push_plain(&self, out: &mut String) {
        match self {
            InlineNode::Text { text } => out.push_str(text),
            InlineNode::Code { code } => out.push_str(code),
            InlineNode::Emphasis { children }
            | InlineNode::Strong { children }
            | InlineNode::Strikethrough { children }
            | InlineNode::Link { children, .. } => {
                for c in children {
                    c.push_plain(out);
                }
            }
            InlineNode::Image { alt, .. } => out.push_str(alt),
        }
    }
}

/// A link found in a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkRef {
    /// Link text with formatting removed.
    pub text: String,
    pub href: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// An image found in a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageRef {
    pub alt: String,
    pub src: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}
