use sql2struct_core::naming::struct_name;
use sql2struct_core::options::ParseOptions;
use sql2struct_core::types::{ColumnDefinition, TableDefinition};

use crate::error::DdlError;
use crate::lexer::{tokenize, SpannedToken};
use crate::token::Token;

/// Leading words of table-level constraint lines. These lines may back-patch
/// primary keys but never declare a column.
const CONSTRAINT_LEADERS: &[&str] = &["constraint", "foreign", "check", "fulltext", "spatial"];

/// Cursor over the tokens of a single line.
struct Cursor {
    tokens: Vec<SpannedToken>,
    pos: usize,
}

impl Cursor {
    fn new(line: &str) -> Self {
        Self {
            tokens: tokenize(line),
            pos: 0,
        }
    }

    fn peek_token(&self) -> Option<&Token> {
        self.tokens.get(self.pos).map(|st| &st.token)
    }

    fn advance(&mut self) -> Option<SpannedToken> {
        if self.pos < self.tokens.len() {
            let tok = self.tokens[self.pos].clone();
            self.pos += 1;
            Some(tok)
        } else {
            None
        }
    }

    /// Consumes the next token if it is `expected`.
    fn eat(&mut self, expected: &Token) -> bool {
        if self.peek_token() == Some(expected) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// Consumes the next token if it can serve as an identifier.
    fn eat_word(&mut self) -> Option<SpannedToken> {
        match self.peek_token() {
            Some(t) if t.is_word() => self.advance(),
            _ => None,
        }
    }

    /// Advances past the first occurrence of `first` immediately followed by
    /// `second`. Leaves the cursor at the end when there is none.
    fn seek_pair(&mut self, first: &Token, second: &Token) -> bool {
        while self.pos < self.tokens.len() {
            if self.tokens[self.pos].token == *first
                && self.tokens.get(self.pos + 1).map(|st| &st.token) == Some(second)
            {
                self.pos += 2;
                return true;
            }
            self.pos += 1;
        }
        false
    }
}

/// Line-at-a-time parser that accumulates one table definition.
///
/// Lines must already be normalized and filtered; see
/// [`crate::pipeline`] for the stage order.
pub struct DdlParser<'a> {
    options: &'a ParseOptions,
    table: TableDefinition,
}

impl<'a> DdlParser<'a> {
    pub fn new(options: &'a ParseOptions) -> Self {
        Self {
            options,
            table: TableDefinition::new(),
        }
    }

    /// The table accumulated so far.
    pub fn table(&self) -> &TableDefinition {
        &self.table
    }

    /// Parses one normalized line.
    ///
    /// # Errors
    ///
    /// Returns `DdlError::NoTableNameFound` when a `create table` line has no
    /// table name. Column lines never fail.
    pub fn parse_line(&mut self, line: &str, line_number: usize) -> Result<(), DdlError> {
        if line.contains("create table") {
            self.parse_create_table(line, line_number)
        } else {
            self.parse_column_line(line);
            Ok(())
        }
    }

    /// Hands over the finished table.
    ///
    /// # Errors
    ///
    /// Returns `DdlError::NoTableParsed` unless both a table name and at
    /// least one column were seen.
    pub fn finish(self) -> Result<TableDefinition, DdlError> {
        if self.table.is_complete() {
            Ok(self.table)
        } else {
            Err(DdlError::NoTableParsed)
        }
    }

    /// create_table = "create" "table" ["if" "not" "exists"] NAME {"." NAME} ... ["--" COMMENT]
    fn parse_create_table(&mut self, line: &str, line_number: usize) -> Result<(), DdlError> {
        let mut cursor = Cursor::new(line);
        if let Some(comment) = trailing_comment(line, &cursor.tokens) {
            self.table.comment = Some(comment.to_string());
        }

        let no_name = || DdlError::NoTableNameFound {
            line: line_number,
            text: line.to_string(),
        };

        if !cursor.seek_pair(&Token::Create, &Token::Table) {
            return Err(no_name());
        }
        if cursor.peek_token() == Some(&Token::If) {
            cursor.eat(&Token::If);
            cursor.eat(&Token::Not);
            cursor.eat(&Token::Exists);
        }

        let mut name = cursor.eat_word().ok_or_else(no_name)?;
        // `schema.table`: keep the last segment.
        while cursor.eat(&Token::Dot) {
            match cursor.eat_word() {
                Some(segment) => name = segment,
                None => break,
            }
        }

        if !self.table.raw_name.is_empty() {
            tracing::warn!(
                previous = %self.table.raw_name,
                next = %name.text,
                "second create table line, replacing the table name"
            );
        }
        self.table.name = struct_name(&self.options.table_prefix, &name.text);
        self.table.raw_name = name.text;
        tracing::debug!(table = %self.table.raw_name, "parsed table name");
        Ok(())
    }

    fn parse_column_line(&mut self, line: &str) {
        let tokens = tokenize(line);

        match self.column_from_tokens(&tokens) {
            Some(column) => {
                tracing::debug!(column = %column, "parsed column");
                self.table.push_field(column);
            }
            None => tracing::debug!(line, "line declares no column"),
        }

        if let Some(columns) = primary_key_columns(&tokens) {
            for column in columns {
                if !self.table.mark_primary_key(&column) {
                    tracing::debug!(column = %column, "primary key names an unknown column");
                }
            }
        }
    }

    /// column = NAME TYPE ["(" params ")"] attribute*
    fn column_from_tokens(&self, tokens: &[SpannedToken]) -> Option<ColumnDefinition> {
        let (name_tok, type_tok) = match tokens {
            [first, second, ..] if first.token.is_word() && second.token.is_word() => {
                (first, second)
            }
            _ => return None,
        };
        if is_constraint_leader(name_tok) {
            return None;
        }

        let name = struct_name(&self.options.field_prefix, &name_tok.text);
        let mut column = ColumnDefinition::new(name_tok.text.clone(), name, type_tok.text.clone())
            .with_field_prefix(&self.options.field_prefix);

        column.comment = tokens.windows(2).find_map(|pair| match pair {
            [kw, lit] if kw.token == Token::Comment && lit.token.is_string() => {
                Some(unquote_string(&lit.text)).filter(|c| !c.is_empty())
            }
            _ => None,
        });
        column.primary_key = tokens
            .windows(2)
            .any(|pair| pair[0].token == Token::Primary && pair[1].token == Token::Key);
        column.auto_increment = tokens.iter().any(|t| t.token == Token::AutoIncrement);
        column.unsigned = tokens[2..].iter().any(|t| t.token == Token::Unsigned);

        Some(column)
    }
}

/// Text of a `-- comment` following the last token of the line.
fn trailing_comment<'l>(line: &'l str, tokens: &[SpannedToken]) -> Option<&'l str> {
    let end = tokens.last().map_or(0, |t| t.span.end);
    let comment = line[end..].trim_start().strip_prefix("--")?.trim();
    (!comment.is_empty()).then_some(comment)
}

fn is_constraint_leader(tok: &SpannedToken) -> bool {
    match tok.token {
        Token::Primary | Token::Key => true,
        Token::Ident => CONSTRAINT_LEADERS.contains(&tok.text.as_str()),
        _ => false,
    }
}

/// Extracts the column list of a `primary key ( a, b )` clause.
///
/// Each comma-separated entry contributes its leading name, so a prefix
/// length such as `name(10)` yields `name`. Returns `None` when the line has
/// no complete clause.
fn primary_key_columns(tokens: &[SpannedToken]) -> Option<Vec<String>> {
    let start = tokens.windows(3).position(|w| {
        w[0].token == Token::Primary && w[1].token == Token::Key && w[2].token == Token::LParen
    })?;

    let mut columns = Vec::new();
    let mut depth = 0usize;
    let mut expect_name = true;
    for tok in &tokens[start + 3..] {
        match tok.token {
            Token::LParen => depth += 1,
            Token::RParen if depth == 0 => return Some(columns),
            Token::RParen => depth -= 1,
            Token::Comma if depth == 0 => expect_name = true,
            _ if depth == 0 && expect_name && tok.token.is_word() => {
                columns.push(tok.text.clone());
                expect_name = false;
            }
            _ => {}
        }
    }
    None
}

/// Removes the surrounding quotes from a string token.
///
/// Only quote escapes (`''`, `\'`, `\"`) and `\\` are resolved. Any other
/// backslash sequence such as `\n` is kept as written, so the text stays on
/// one line.
fn unquote_string(s: &str) -> String {
    let quote = s.chars().next().unwrap_or('\'');
    let inner = &s[1..s.len() - 1];
    let mut result = String::with_capacity(inner.len());
    let mut chars = inner.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.peek() {
                Some(&next @ ('\'' | '"' | '\\')) => {
                    chars.next();
                    result.push(next);
                }
                _ => result.push('\\'),
            }
        } else if c == quote && chars.peek() == Some(&quote) {
            chars.next();
            result.push(quote);
        } else {
            result.push(c);
        }
    }
    result
}
