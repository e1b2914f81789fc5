use std::ops::Range;

use logos::Logos;

use crate::token::Token;

/// A token paired with its byte range in the line.
#[derive(Debug, Clone)]
pub struct SpannedToken {
    pub token: Token,
    pub span: Range<usize>,
    pub text: String,
}

/// Tokenizes one normalized line.
///
/// Lexing never fails: bytes no rule accepts (an unterminated quote, for
/// instance) are dropped, since a line that cannot be understood simply
/// contributes nothing.
pub fn tokenize(line: &str) -> Vec<SpannedToken> {
    let mut tokens = Vec::new();

    let lexer = Token::lexer(line);
    for (result, range) in lexer.spanned() {
        match result {
            Ok(token) => {
                tokens.push(SpannedToken {
                    token,
                    text: line[range.clone()].to_string(),
                    span: range,
                });
            }
            Err(()) => {
                tracing::trace!(line, start = range.start, end = range.end, "dropping unlexable input");
            }
        }
    }

    tokens
}
