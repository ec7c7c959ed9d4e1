use crate::escape::escape_html;
use crate::node::Node;

/// Entity-type identifiers understood by the rich-text layer.
pub mod entity {
    pub const BOLD: &str = "MessageEntityBold";
    pub const ITALIC: &str = "MessageEntityItalic";
    pub const UNDERLINE: &str = "MessageEntityUnderline";
    pub const STRIKE: &str = "MessageEntityStrike";
    pub const SPOILER: &str = "MessageEntitySpoiler";
    pub const BLOCKQUOTE: &str = "MessageEntityBlockquote";
}

/// Render a tree to message markup.
pub fn node_to_html(node: &Node) -> String {
    let mut out = String::new();
    emit_node(node, &mut out);
    out
}

fn emit_children(children: &[Node], out: &mut String) {
    for child in children {
        emit_node(child, out);
    }
}

fn emit_wrapped(open: &str, close: &str, children: &[Node], out: &mut String) {
    out.push_str(open);
    emit_children(children, out);
    out.push_str(close);
}

fn emit_node(node: &Node, out: &mut String) {
    match node {
        Node::Root(children) => emit_children(children, out),
        Node::Text(value) => out.push_str(value),
        Node::Bold(children) => {
            let open = format!(r#"<b data-entity-type="{}">"#, entity::BOLD);
            emit_wrapped(&open, "</b>", children, out);
        }
        Node::Italic(children) => {
            let open = format!(r#"<i data-entity-type="{}">"#, entity::ITALIC);
            emit_wrapped(&open, "</i>", children, out);
        }
        Node::Underline(children) => {
            let open = format!(r#"<u data-entity-type="{}">"#, entity::UNDERLINE);
            emit_wrapped(&open, "</u>", children, out);
        }
        Node::Strike(children) => {
            let open = format!(r#"<s data-entity-type="{}">"#, entity::STRIKE);
            emit_wrapped(&open, "</s>", children, out);
        }
        Node::Spoiler(children) => {
            let open = format!(
                r#"<span class="spoiler" data-entity-type="{}">"#,
                entity::SPOILER
            );
            emit_wrapped(&open, "</span>", children, out);
        }
        Node::Code(value) => {
            out.push_str("<code>");
            out.push_str(&escape_html(value));
            out.push_str("</code>");
        }
        Node::Pre { content, language } => {
            match language {
                Some(lang) => out.push_str(&format!(
                    r#"<pre data-language="{lang}"><code class="language-{lang}">"#
                )),
                None => out.push_str("<pre><code>"),
            }
            out.push_str(&escape_html(content));
            out.push_str("</code></pre>");
        }
        Node::Blockquote(children) => {
            let open = format!(
                r#"<blockquote class="text-entity-quote" dir="auto" data-entity-type="{}">"#,
                entity::BLOCKQUOTE
            );
            emit_wrapped(&open, "</blockquote>", children, out);
        }
        Node::ExpandableBlockquote(children) => {
            let open = format!(
                r#"<blockquote class="text-entity-quote" dir="auto" data-entity-type="{}" expandable>"#,
                entity::BLOCKQUOTE
            );
            emit_wrapped(&open, "</blockquote>", children, out);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn text(value: &str) -> Node {
        Node::text(value)
    }

    #[test]
    fn root_concatenates_children() {
        let tree = Node::Root(vec![text("a"), text("b")]);
        assert_eq!(node_to_html(&tree), "ab");
    }

    #[test]
    fn text_is_passed_through() {
        assert_eq!(node_to_html(&text("<i>raw</i> & co")), "<i>raw</i> & co");
    }

    #[test]
    fn formatting_tags() {
        assert_eq!(
            node_to_html(&Node::Bold(vec![text("x")])),
            r#"<b data-entity-type="MessageEntityBold">x</b>"#
        );
        assert_eq!(
            node_to_html(&Node::Italic(vec![text("x")])),
            r#"<i data-entity-type="MessageEntityItalic">x</i>"#
        );
        assert_eq!(
            node_to_html(&Node::Underline(vec![text("x")])),
            r#"<u data-entity-type="MessageEntityUnderline">x</u>"#
        );
        assert_eq!(
            node_to_html(&Node::Strike(vec![text("x")])),
            r#"<s data-entity-type="MessageEntityStrike">x</s>"#
        );
        assert_eq!(
            node_to_html(&Node::Spoiler(vec![text("x")])),
            r#"<span class="spoiler" data-entity-type="MessageEntitySpoiler">x</span>"#
        );
    }

    #[test]
    fn nested_tags() {
        let tree = Node::Bold(vec![Node::Italic(vec![text("x")])]);
        assert_eq!(
            node_to_html(&tree),
            r#"<b data-entity-type="MessageEntityBold"><i data-entity-type="MessageEntityItalic">x</i></b>"#
        );
    }

    #[test]
    fn inline_code_is_escaped() {
        assert_eq!(
            node_to_html(&Node::Code("<b>'&'</b>".into())),
            "<code>&lt;b&gt;&#039;&amp;&#039;&lt;/b&gt;</code>"
        );
    }

    #[test]
    fn code_block_with_language() {
        let tree = Node::Pre {
            content: "if a < b {}".into(),
            language: Some("rust".into()),
        };
        assert_eq!(
            node_to_html(&tree),
            r#"<pre data-language="rust"><code class="language-rust">if a &lt; b {}</code></pre>"#
        );
    }

    #[test]
    fn code_block_without_language() {
        let tree = Node::Pre {
            content: "\"q\"".into(),
            language: None,
        };
        assert_eq!(node_to_html(&tree), "<pre><code>&quot;q&quot;</code></pre>");
    }

    #[test]
    fn blockquotes() {
        assert_eq!(
            node_to_html(&Node::Blockquote(vec![text("q")])),
            r#"<blockquote class="text-entity-quote" dir="auto" data-entity-type="MessageEntityBlockquote">q</blockquote>"#
        );
        assert_eq!(
            node_to_html(&Node::ExpandableBlockquote(vec![text("q")])),
            r#"<blockquote class="text-entity-quote" dir="auto" data-entity-type="MessageEntityBlockquote" expandable>q</blockquote>"#
        );
    }

    #[test]
    fn empty_containers() {
        assert_eq!(node_to_html(&Node::Root(vec![])), "");
        assert_eq!(
            node_to_html(&Node::Strike(vec![])),
            r#"<s data-entity-type="MessageEntityStrike"></s>"#
        );
    }
}
