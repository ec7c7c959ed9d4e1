use std::fmt;

/// The closed set of node kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Root,
    Text,
    Bold,
    Italic,
    Underline,
    Strike,
    Spoiler,
    Code,
    Pre,
    Blockquote,
    ExpandableBlockquote,
}

impl NodeKind {
    pub fn name(self) -> &'static str {
        match self {
            NodeKind::Root => "root",
            NodeKind::Text => "text",
            NodeKind::Bold => "bold",
            NodeKind::Italic => "italic",
            NodeKind::Underline => "underline",
            NodeKind::Strike => "strike",
            NodeKind::Spoiler => "spoiler",
            NodeKind::Code => "code",
            NodeKind::Pre => "pre",
            NodeKind::Blockquote => "blockquote",
            NodeKind::ExpandableBlockquote => "expandableBlockquote",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parsed message tree.
///
/// Leaves carry their text, containers own their children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Root(Vec<Node>),
    Text(String),
    Bold(Vec<Node>),
    Italic(Vec<Node>),
    Underline(Vec<Node>),
    Strike(Vec<Node>),
    Spoiler(Vec<Node>),
    /// Inline code, raw (unescaped) content
    Code(String),
    /// Code block
    Pre {
        content: String,
        language: Option<String>,
    },
    Blockquote(Vec<Node>),
    ExpandableBlockquote(Vec<Node>),
}

impl Node {
    pub fn text(value: impl Into<String>) -> Self {
        Node::Text(value.into())
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Root(_) => NodeKind::Root,
            Node::Text(_) => NodeKind::Text,
            Node::Bold(_) => NodeKind::Bold,
            Node::Italic(_) => NodeKind::Italic,
            Node::Underline(_) => NodeKind::Underline,
            Node::Strike(_) => NodeKind::Strike,
            Node::Spoiler(_) => NodeKind::Spoiler,
            Node::Code(_) => NodeKind::Code,
            Node::Pre { .. } => NodeKind::Pre,
            Node::Blockquote(_) => NodeKind::Blockquote,
            Node::ExpandableBlockquote(_) => NodeKind::ExpandableBlockquote,
        }
    }

    /// Children of a container node; empty for leaves.
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Root(children)
            | Node::Bold(children)
            | Node::Italic(children)
            | Node::Underline(children)
            | Node::Strike(children)
            | Node::Spoiler(children)
            | Node::Blockquote(children)
            | Node::ExpandableBlockquote(children) => children,
            Node::Text(_) | Node::Code(_) | Node::Pre { .. } => &[],
        }
    }

    /// Write an indented outline of the tree, one node per line.
    pub fn write_outline(&self, depth: usize, out: &mut String) {
        out.push_str(&"  ".repeat(depth));
        out.push_str(self.kind().name());
        match self {
            Node::Text(value) | Node::Code(value) => {
                out.push_str(&format!(" {value:?}"));
            }
            Node::Pre { content, language } => {
                if let Some(lang) = language {
                    out.push_str(&format!(" [{lang}]"));
                }
                out.push_str(&format!(" {content:?}"));
            }
            _ => {}
        }
        out.push('\n');

        for child in self.children() {
            child.write_outline(depth + 1, out);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn leaves_have_no_children() {
        assert!(Node::text("a").children().is_empty());
        assert!(Node::Code("a".into()).children().is_empty());
    }

    #[test]
    fn kind_names_match_node_types() {
        assert_eq!(
            Node::ExpandableBlockquote(vec![]).kind().name(),
            "expandableBlockquote"
        );
        assert_eq!(NodeKind::Pre.to_string(), "pre");
    }

    #[test]
    fn outline() {
        let tree = Node::Root(vec![
            Node::Bold(vec![Node::Italic(vec![Node::text("x")])]),
            Node::Pre {
                content: "print(1)".into(),
                language: Some("python".into()),
            },
        ]);
        let mut out = String::new();
        tree.write_outline(0, &mut out);
        assert_eq!(
            out,
            "root\n  bold\n    italic\n      text \"x\"\n  pre [python] \"print(1)\"\n"
        );
    }
}
