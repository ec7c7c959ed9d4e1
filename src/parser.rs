use std::collections::HashSet;

use crate::languages::Languages;
use crate::node::{Node, NodeKind};
use crate::token::{Token, TokenKind};

/// An inline formatting marker.
struct Marker {
    token: TokenKind,
    node: NodeKind,
    build: fn(Vec<Node>) -> Node,
    symbol: &'static str,
    closing: TokenKind,
}

// Order matters: reconstruction of unterminated spans looks symbols up by
// node kind and takes the first entry.
static MARKERS: [Marker; 7] = [
    Marker {
        token: TokenKind::DoubleUnderscore,
        node: NodeKind::Underline,
        build: Node::Underline,
        symbol: "__",
        closing: TokenKind::DoubleUnderscore,
    },
    Marker {
        token: TokenKind::DoubleAsterisk,
        node: NodeKind::Bold,
        build: Node::Bold,
        symbol: "**",
        closing: TokenKind::DoubleAsterisk,
    },
    Marker {
        token: TokenKind::Underscore,
        node: NodeKind::Italic,
        build: Node::Italic,
        symbol: "_",
        closing: TokenKind::Underscore,
    },
    Marker {
        token: TokenKind::Asterisk,
        node: NodeKind::Bold,
        build: Node::Bold,
        symbol: "*",
        closing: TokenKind::Asterisk,
    },
    Marker {
        token: TokenKind::Tilde,
        node: NodeKind::Strike,
        build: Node::Strike,
        symbol: "~",
        closing: TokenKind::Tilde,
    },
    Marker {
        token: TokenKind::DoubleTilde,
        node: NodeKind::Strike,
        build: Node::Strike,
        symbol: "~~",
        closing: TokenKind::DoubleTilde,
    },
    Marker {
        token: TokenKind::DoublePipe,
        node: NodeKind::Spoiler,
        build: Node::Spoiler,
        symbol: "||",
        closing: TokenKind::DoublePipe,
    },
];

fn marker_for_token(kind: TokenKind) -> Option<&'static Marker> {
    MARKERS.iter().find(|m| m.token == kind)
}

fn symbol_for_node(kind: NodeKind) -> Option<&'static str> {
    MARKERS.iter().find(|m| m.node == kind).map(|m| m.symbol)
}

/// Parse a token stream into a `Node::Root`.
pub fn parse(tokens: &[Token], languages: &Languages) -> Node {
    Parser::new(tokens, languages).parse()
}

/// Recursive-descent parser state for one parse. Never shared between parses.
struct Parser<'a> {
    tokens: &'a [Token],
    current: usize,
    // Markers open on the current descent path
    active: HashSet<TokenKind>,
    languages: &'a Languages,
}

impl<'a> Parser<'a> {
    fn new(tokens: &'a [Token], languages: &'a Languages) -> Self {
        Self {
            tokens,
            current: 0,
            active: HashSet::new(),
            languages,
        }
    }

    fn parse(mut self) -> Node {
        let mut nodes = Vec::new();
        while !self.is_at_end() {
            if let Some(node) = self.parse_node() {
                nodes.push(node);
            }
        }
        Node::Root(nodes)
    }

    fn is_at_end(&self) -> bool {
        self.peek().is_none()
    }

    /// Next token, or `None` at the end of input.
    fn peek(&self) -> Option<&'a Token> {
        self.tokens
            .get(self.current)
            .filter(|token| token.kind != TokenKind::Eof)
    }

    fn advance(&mut self) -> Option<&'a Token> {
        let token = self.peek()?;
        self.current += 1;
        Some(token)
    }

    fn check(&self, kind: TokenKind) -> bool {
        self.peek().is_some_and(|token| token.kind == kind)
    }

    fn parse_node(&mut self) -> Option<Node> {
        let token = self.advance()?;

        let node = match token.kind {
            TokenKind::Text | TokenKind::Newline => Node::text(&token.value),
            TokenKind::TripleBacktick => self.parse_fenced_block(token),
            TokenKind::Backtick => self.parse_code_span(token),
            TokenKind::DoubleUnderscore
            | TokenKind::DoubleAsterisk
            | TokenKind::Underscore
            | TokenKind::Asterisk
            | TokenKind::Tilde
            | TokenKind::DoubleTilde
            | TokenKind::DoublePipe => match marker_for_token(token.kind) {
                Some(marker) => self.parse_marked(token, marker),
                None => Node::text(&token.value),
            },
            // Not part of any construct, kept as written
            TokenKind::DoubleBacktick
            | TokenKind::TripleBacktickInline
            | TokenKind::Gt
            | TokenKind::DoubleGt
            | TokenKind::BracketOpen
            | TokenKind::BracketClose
            | TokenKind::ParenOpen
            | TokenKind::ParenClose => Node::text(&token.value),
            TokenKind::Eof => unreachable!("advance never yields Eof"),
        };

        Some(node)
    }

    /// Fenced code block. The opening fence has been consumed.
    fn parse_fenced_block(&mut self, open: &Token) -> Node {
        let mut first_line = String::new();
        let mut has_newline = false;

        while let Some(token) = self.peek() {
            if token.kind.is_fence() {
                break;
            }
            if token.kind == TokenKind::Newline {
                has_newline = true;
                break;
            }
            first_line.push_str(&token.value);
            self.current += 1;
        }

        // Raw text consumed as the header line, kept for reconstruction
        let mut header = String::new();
        let mut body = String::new();
        let mut language = None;

        // An empty first line leaves its newline to the body
        if has_newline && !first_line.is_empty() {
            self.current += 1;
            let candidate = first_line.trim().to_lowercase();
            if self.languages.is_known(&candidate) {
                language = Some(candidate);
                header = first_line + "\n";
            } else {
                body = first_line + "\n";
            }
        } else {
            body = first_line;
        }

        let mut closed = false;
        while let Some(token) = self.advance() {
            if token.kind.is_fence() {
                closed = true;
                break;
            }
            body.push_str(&token.value);
        }

        if closed {
            let content = body.replace('\r', "");
            return Node::Pre {
                content: content.trim_end_matches('\n').to_string(),
                language,
            };
        }

        tracing::debug!(position = open.position, "unterminated code block");
        Node::Text(format!("{}{header}{body}", open.value))
    }

    /// Inline code span. The opening backtick has been consumed.
    fn parse_code_span(&mut self, open: &Token) -> Node {
        let mut content = String::new();

        while let Some(token) = self.advance() {
            if token.kind == TokenKind::Backtick {
                return Node::Code(content);
            }
            content.push_str(&token.value);
        }

        tracing::debug!(position = open.position, "unterminated code span");
        Node::Text(format!("{}{content}", open.value))
    }

    /// Formatting span. The opening marker has been consumed.
    fn parse_marked(&mut self, open: &Token, marker: &Marker) -> Node {
        if self.active.contains(&marker.token) {
            tracing::debug!(
                position = open.position,
                symbol = marker.symbol,
                "marker already open, keeping as text"
            );
            return Node::text(marker.symbol);
        }

        self.active.insert(marker.token);
        let mut children = Vec::new();
        while !self.is_at_end() && !self.check(marker.closing) {
            if let Some(node) = self.parse_node() {
                children.push(node);
            }
        }
        self.active.remove(&marker.token);

        if self.check(marker.closing) {
            self.current += 1;
            return (marker.build)(children);
        }

        tracing::debug!(
            position = open.position,
            symbol = marker.symbol,
            "unterminated span"
        );
        let mut text = String::from(marker.symbol);
        for child in &children {
            write_source(child, &mut text);
        }
        Node::Text(text)
    }
}

/// Write a node back out as dialect source text.
fn write_source(node: &Node, out: &mut String) {
    match node {
        Node::Text(value) => out.push_str(value),
        Node::Code(value) => {
            out.push('`');
            out.push_str(value);
            out.push('`');
        }
        Node::Pre { content, language } => {
            out.push_str("```");
            if let Some(lang) = language {
                out.push_str(lang);
                out.push('\n');
                out.push_str(content);
                out.push('\n');
            } else {
                out.push_str(content);
            }
            out.push_str("```");
        }
        _ => {
            let symbol = symbol_for_node(node.kind()).unwrap_or_default();
            out.push_str(symbol);
            for child in node.children() {
                write_source(child, out);
            }
            out.push_str(symbol);
        }
    }
}
