use crate::token::{Token, TokenKind};

/// Characters that end a plain text run.
fn is_special(ch: char) -> bool {
    matches!(ch, '*' | '_' | '~' | '|' | '`' | '>' | '\n' | '\\')
}

/// Single-pass scanner over preprocessed input.
pub struct Tokenizer<'a> {
    input: &'a str,
    position: usize,
    start: usize,
    // Only spaces, tabs and carriage returns seen since the last newline.
    // Starts true so a fence at the very beginning counts as line-start.
    last_was_newline: bool,
    tokens: Vec<Token>,
    #[allow(dead_code)] // Reserved for link syntax
    allow_links: bool,
}

impl<'a> Tokenizer<'a> {
    pub fn new(input: &'a str, allow_links: bool) -> Self {
        Self {
            input,
            position: 0,
            start: 0,
            last_was_newline: true,
            tokens: Vec::new(),
            allow_links,
        }
    }

    /// Scan the whole input. The result always ends with an `Eof` token.
    pub fn tokenize(mut self) -> Vec<Token> {
        while !self.is_at_end() {
            self.start = self.position;
            self.scan_token();
        }

        self.tokens.push(Token::new(TokenKind::Eof, "", self.position));
        tracing::trace!(count = self.tokens.len(), "tokenized input");
        self.tokens
    }

    fn is_at_end(&self) -> bool {
        self.position >= self.input.len()
    }

    fn peek(&self) -> Option<char> {
        self.input[self.position..].chars().next()
    }

    fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.position += ch.len_utf8();
        match ch {
            '\n' => self.last_was_newline = true,
            ' ' | '\t' | '\r' => {}
            _ => self.last_was_newline = false,
        }
        Some(ch)
    }

    fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Whether the current token's first char follows an odd run of backslashes.
    fn is_escaped(&self) -> bool {
        let backslashes = self.input.as_bytes()[..self.start]
            .iter()
            .rev()
            .take_while(|&&b| b == b'\\')
            .count();
        backslashes % 2 == 1
    }

    fn emit(&mut self, kind: TokenKind) {
        let value = &self.input[self.start..self.position];
        self.tokens.push(Token::new(kind, value, self.start));
    }

    fn scan_token(&mut self) {
        let at_line_start = self.last_was_newline;
        let Some(ch) = self.advance() else {
            return;
        };

        if self.is_escaped() {
            self.emit(TokenKind::Text);
            return;
        }

        let kind = match ch {
            '*' => self.single_or_double('*', TokenKind::Asterisk, TokenKind::DoubleAsterisk),
            '_' => self.single_or_double('_', TokenKind::Underscore, TokenKind::DoubleUnderscore),
            '~' => self.single_or_double('~', TokenKind::Tilde, TokenKind::DoubleTilde),
            '|' => self.single_or_double('|', TokenKind::Text, TokenKind::DoublePipe),
            '>' => self.single_or_double('>', TokenKind::Gt, TokenKind::DoubleGt),
            '`' => {
                if !self.eat('`') {
                    TokenKind::Backtick
                } else if !self.eat('`') {
                    TokenKind::DoubleBacktick
                } else if at_line_start {
                    TokenKind::TripleBacktick
                } else {
                    TokenKind::TripleBacktickInline
                }
            }
            '\n' => TokenKind::Newline,
            ' ' | '\r' | '\t' => TokenKind::Text,
            '<' => {
                // HTML tags pass through as text, up to `>` or the end of the line
                while let Some(next) = self.advance() {
                    if next == '>' || next == '\n' {
                        break;
                    }
                }
                TokenKind::Text
            }
            _ => {
                while let Some(next) = self.peek() {
                    if is_special(next) {
                        break;
                    }
                    self.advance();
                }
                TokenKind::Text
            }
        };

        self.emit(kind);
    }

    fn single_or_double(&mut self, ch: char, single: TokenKind, double: TokenKind) -> TokenKind {
        if self.eat(ch) { double } else { single }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn kinds(input: &str) -> Vec<TokenKind> {
        Tokenizer::new(input, false)
            .tokenize()
            .into_iter()
            .map(|t| t.kind)
            .collect()
    }

    fn values(input: &str) -> Vec<String> {
        Tokenizer::new(input, false)
            .tokenize()
            .into_iter()
            .map(|t| t.value)
            .collect()
    }

    #[test]
    fn empty_input_is_just_eof() {
        let tokens = Tokenizer::new("", false).tokenize();
        assert_eq!(tokens, vec![Token::new(TokenKind::Eof, "", 0)]);
    }

    #[test]
    fn bold_markers() {
        let tokens = Tokenizer::new("**hi**", false).tokenize();
        assert_eq!(
            tokens,
            vec![
                Token::new(TokenKind::DoubleAsterisk, "**", 0),
                Token::new(TokenKind::Text, "hi", 2),
                Token::new(TokenKind::DoubleAsterisk, "**", 4),
                Token::new(TokenKind::Eof, "", 6),
            ]
        );
    }

    #[test]
    fn single_and_double_markers() {
        use TokenKind::*;
        assert_eq!(
            kinds("*_~>"),
            vec![Asterisk, Underscore, Tilde, Gt, Eof]
        );
        assert_eq!(
            kinds("__~~||>>``"),
            vec![DoubleUnderscore, DoubleTilde, DoublePipe, DoubleGt, DoubleBacktick, Eof]
        );
    }

    #[test]
    fn lone_pipe_is_text() {
        use TokenKind::*;
        assert_eq!(kinds("a|b"), vec![Text, Text, Text, Eof]);
        assert_eq!(values("a|b"), vec!["a", "|", "b", ""]);
    }

    #[test]
    fn fence_at_line_start_opens_block() {
        use TokenKind::*;
        assert_eq!(
            kinds("```py\nx\n```"),
            vec![TripleBacktick, Text, Newline, Text, Newline, TripleBacktick, Eof]
        );
    }

    #[test]
    fn fence_after_indentation_still_at_line_start() {
        use TokenKind::*;
        assert_eq!(kinds("a\n  ```"), vec![Text, Newline, Text, Text, TripleBacktick, Eof]);
    }

    #[test]
    fn fence_inside_text_is_inline() {
        use TokenKind::*;
        assert_eq!(
            kinds("a ```b```"),
            vec![Text, TripleBacktickInline, Text, TripleBacktickInline, Eof]
        );
        assert_eq!(values("a ```b```")[0], "a ");
    }

    #[test]
    fn whitespace_starts_its_own_token() {
        assert_eq!(values("* a b"), vec!["*", " ", "a b", ""]);
        assert_eq!(values("\t\r"), vec!["\t", "\r", ""]);
    }

    #[test]
    fn html_tag_is_one_text_token() {
        assert_eq!(values("<b class=\"x\">y"), vec!["<b class=\"x\">", "y", ""]);
    }

    #[test]
    fn html_tag_scan_stops_at_newline() {
        use TokenKind::*;
        assert_eq!(values("<b\n*"), vec!["<b\n", "*", ""]);
        assert_eq!(kinds("<b\n*"), vec![Text, Asterisk, Eof]);
    }

    #[test]
    fn html_tag_newline_resets_line_start() {
        use TokenKind::*;
        assert_eq!(kinds("*<b\n```"), vec![Asterisk, Text, TripleBacktick, Eof]);
    }

    #[test]
    fn backslash_escaped_marker_is_text() {
        let tokens = Tokenizer::new(r"\*a", false).tokenize();
        assert_eq!(
            tokens,
            vec![
                Token::new(TokenKind::Text, "\\", 0),
                Token::new(TokenKind::Text, "*", 1),
                Token::new(TokenKind::Text, "a", 2),
                Token::new(TokenKind::Eof, "", 3),
            ]
        );
    }

    #[test]
    fn even_backslashes_do_not_escape() {
        use TokenKind::*;
        assert_eq!(kinds(r"\\*"), vec![Text, Text, Asterisk, Eof]);
    }

    #[test]
    fn positions_are_byte_offsets() {
        let tokens = Tokenizer::new("é*", false).tokenize();
        assert_eq!(tokens[1], Token::new(TokenKind::Asterisk, "*", 2));
        assert_eq!(tokens[2].position, 3);
    }
}
