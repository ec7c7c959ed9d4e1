use std::fmt;

/// Token kinds produced by the tokenizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Text,
    /// `*`
    Asterisk,
    /// `**`
    DoubleAsterisk,
    /// `_`
    Underscore,
    /// `__`
    DoubleUnderscore,
    /// `~`
    Tilde,
    /// `~~`
    DoubleTilde,
    /// `` ` ``
    Backtick,
    /// ``` `` ```
    DoubleBacktick,
    /// ```` ``` ```` at the start of a line
    TripleBacktick,
    /// ```` ``` ```` inside running text
    TripleBacktickInline,
    /// `||`
    DoublePipe,
    /// `>`
    Gt,
    /// `>>`
    DoubleGt,
    Newline,
    // Reserved for link syntax, never emitted.
    BracketOpen,
    BracketClose,
    ParenOpen,
    ParenClose,
    Eof,
}

impl TokenKind {
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Text => "TEXT",
            TokenKind::Asterisk => "ASTERISK",
            TokenKind::DoubleAsterisk => "DOUBLE_ASTERISK",
            TokenKind::Underscore => "UNDERSCORE",
            TokenKind::DoubleUnderscore => "DOUBLE_UNDERSCORE",
            TokenKind::Tilde => "TILDE",
            TokenKind::DoubleTilde => "DOUBLE_TILDE",
            TokenKind::Backtick => "BACKTICK",
            TokenKind::DoubleBacktick => "DOUBLE_BACKTICK",
            TokenKind::TripleBacktick => "TRIPLE_BACKTICK",
            TokenKind::TripleBacktickInline => "TRIPLE_BACKTICK_INLINE",
            TokenKind::DoublePipe => "DOUBLE_PIPE",
            TokenKind::Gt => "GT",
            TokenKind::DoubleGt => "DOUBLE_GT",
            TokenKind::Newline => "NEWLINE",
            TokenKind::BracketOpen => "BRACKET_OPEN",
            TokenKind::BracketClose => "BRACKET_CLOSE",
            TokenKind::ParenOpen => "PAREN_OPEN",
            TokenKind::ParenClose => "PAREN_CLOSE",
            TokenKind::Eof => "EOF",
        }
    }

    /// Whether this is either kind of triple backtick.
    pub fn is_fence(self) -> bool {
        matches!(
            self,
            TokenKind::TripleBacktick | TokenKind::TripleBacktickInline
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A scanned token.
///
/// `value` is always the literal source text of the token, so any token can be
/// turned back into text. `position` is the byte offset in the preprocessed
/// input where the token starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub position: usize,
}

impl Token {
    pub fn new(kind: TokenKind, value: impl Into<String>, position: usize) -> Self {
        Self {
            kind,
            value: value.into(),
            position,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {:?}", self.kind, self.position, self.value)
    }
}
