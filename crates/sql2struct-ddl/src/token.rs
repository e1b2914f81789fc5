use logos::Logos;

/// Tokens produced when lexing one normalized DDL line.
///
/// Lines reach the lexer already lowercased, so keywords are matched in
/// lowercase only. Whitespace, inline `/* ... */` spans and trailing `-- ...`
/// comments are skipped by logos.
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\r\n\f]+")]
#[logos(skip r"--[^\n]*")]
#[logos(skip r"/\*([^*]|\*[^/])*\*/")]
pub enum Token {
    // -- Keywords --
    #[token("create")]
    Create,

    #[token("table")]
    Table,

    #[token("if")]
    If,

    #[token("not")]
    Not,

    #[token("exists")]
    Exists,

    #[token("primary")]
    Primary,

    #[token("key")]
    Key,

    #[token("comment")]
    Comment,

    #[token("unsigned")]
    Unsigned,

    #[token("auto_increment")]
    AutoIncrement,

    // -- Punctuation --
    #[token("(")]
    LParen,

    #[token(")")]
    RParen,

    #[token(",")]
    Comma,

    #[token(".")]
    Dot,

    // -- Literals --
    /// A single-quoted SQL string, e.g. `'user name'` or `'it''s'`.
    #[regex(r"'([^'\\]|\\.|'')*'")]
    StringLiteral,

    /// A double-quoted string, accepted wherever a string literal is.
    #[regex(r#""([^"\\]|\\.)*""#)]
    QuotedString,

    /// A numeric literal such as `64` or `10.5`.
    #[regex(r"[0-9]+(\.[0-9]+)?", priority = 3)]
    Number,

    // -- Identifiers --
    /// A bare word: column names, type keywords and every other SQL word
    /// that has no dedicated token.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_$]*")]
    Ident,

    /// Any other single character (`=`, `;`, `-`, non-ASCII text, ...).
    #[regex(r"[^ \t\r\n\fa-zA-Z0-9_(),.'\x22]", priority = 1)]
    Symbol,
}

impl Token {
    /// Returns true for tokens that can stand in a name or type position.
    ///
    /// Keywords double as identifiers there: `comment text` declares a
    /// column named `comment`.
    pub fn is_word(&self) -> bool {
        matches!(
            self,
            Self::Ident
                | Self::Create
                | Self::Table
                | Self::If
                | Self::Not
                | Self::Exists
                | Self::Primary
                | Self::Key
                | Self::Comment
                | Self::Unsigned
                | Self::AutoIncrement
        )
    }

    /// Returns true for quoted string tokens.
    pub fn is_string(&self) -> bool {
        matches!(self, Self::StringLiteral | Self::QuotedString)
    }
}
