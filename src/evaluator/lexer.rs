use logos::Logos;

use crate::evaluator::operator::Operator;

/// Represents a lexical token in a calculator expression.
///
/// Operand fragments are kept as borrowed slices and only converted to numbers
/// by the reducer, so malformed runs such as `5..2` survive lexing and fail
/// at conversion time.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum Token<'src> {
    /// A run of digits and decimal points, such as `12`, `3.5`, `.5` or `5..2`.
    #[regex(r"[0-9.]+", |lex| lex.slice())]
    Operand(&'src str),
    /// `+`, `-`, `*` or `/`.
    #[token("+", |_| Operator::Add)]
    #[token("-", |_| Operator::Sub)]
    #[token("*", |_| Operator::Mul)]
    #[token("/", |_| Operator::Div)]
    Operator(Operator),
    /// Spaces, tabs, feeds and line breaks.
    #[regex(r"[ \t\f\r\n]+", logos::skip)]
    Ignored,
}

/// A token together with the byte offset at which it starts.
pub type Spanned<'src> = (Token<'src>, usize);

/// Tokenizes `source`, dropping characters outside the calculator alphabet.
///
/// Unknown characters (for example the parentheses of a full keypad) are
/// skipped without splitting the surrounding operand, so `1(2` yields the
/// fragments `1` and `2`, which the reducer joins back into `12`.
///
/// # Example
/// ```
/// use padcalc::evaluator::{Operator, lexer::{Token, tokenize}};
///
/// let tokens = tokenize("12 + 3");
/// assert_eq!(tokens,
///            vec![(Token::Operand("12"), 0),
///                 (Token::Operator(Operator::Add), 3),
///                 (Token::Operand("3"), 5)]);
/// ```
#[must_use]
pub fn tokenize(source: &str) -> Vec<Spanned<'_>> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        if let Ok(tok) = token {
            tokens.push((tok, lexer.span().start));
        } else {
            tracing::trace!(skipped = lexer.slice(), at = lexer.span().start, "ignoring character");
        }
    }

    tokens
}
