use super::error::CompileError;
use super::Segments;

use regex::Regex;
use tracing::debug;

const SPLAT: &str = "splat";

const SEGMENT_EXPR: &str = "([^./?#]+)";
// `.` only stops at `\n`, so a splat may capture `\r`
const SPLAT_EXPR: &str = "(.*?)";

const STAR: u8 = b'*';
const LBRACE: u8 = b'{';
const RBRACE: u8 = b'}';

#[derive(Debug, PartialEq, Eq)]
enum Token<'a> {
    Named(&'a str),
    Splat,
    Literal(&'a str),
}

/// Splits a path pattern into tokens. Each byte is classified exactly once:
/// a literal run never contains a star or the opening brace of a valid name.
struct Tokens<'a> {
    rest: &'a str,
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        let bytes = self.rest.as_bytes();
        let first = *bytes.first()?;

        if first == STAR {
            self.rest = &self.rest[1..];
            return Some(Token::Splat);
        }

        if first == LBRACE {
            if let Some(len) = named_len(bytes) {
                let name = &self.rest[1..len - 1];
                self.rest = &self.rest[len..];
                return Some(Token::Named(name));
            }
        }

        // the first byte is always consumed here, so a stray '{' ends up in a literal
        let end = bytes[1..]
            .iter()
            .position(|&b| b == STAR || b == LBRACE)
            .map_or(bytes.len(), |i| i + 1);

        let (literal, rest) = self.rest.split_at(end);
        self.rest = rest;
        Some(Token::Literal(literal))
    }
}

/// Length of a `{name}` token at the start of `bytes`, braces included.
fn named_len(bytes: &[u8]) -> Option<usize> {
    if !is_name_start(*bytes.get(1)?) {
        return None;
    }
    for (i, &b) in bytes.iter().enumerate().skip(2) {
        if b == RBRACE {
            return Some(i + 1);
        }
        if !is_name_continue(b) {
            return None;
        }
    }
    None
}

#[inline]
fn is_name_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_' || b == b'$'
}

#[inline]
fn is_name_continue(b: u8) -> bool {
    is_name_start(b) || b.is_ascii_digit()
}

pub(super) fn translate(pattern: &str) -> (String, Vec<Box<str>>) {
    let mut expr = String::with_capacity(pattern.len() * 2 + 2);
    let mut names: Vec<Box<str>> = Vec::new();

    expr.push('^');
    for token in (Tokens { rest: pattern }) {
        match token {
            Token::Named(name) => {
                names.push(name.into());
                expr.push_str(SEGMENT_EXPR);
            }
            Token::Splat => {
                names.push(SPLAT.into());
                expr.push_str(SPLAT_EXPR);
            }
            Token::Literal(text) => expr.push_str(&regex::escape(text)),
        }
    }
    expr.push('$');

    (expr, names)
}

pub(super) fn compile_path(pattern: &str) -> Result<(Regex, Segments), CompileError> {
    let (expr, names) = translate(pattern);
    let regex = Regex::new(&expr).map_err(|e| CompileError::regex(pattern, e))?;
    debug!(pattern, expr = %expr, segments = names.len(), "compiled route pattern");
    Ok((regex, Segments::new(names)))
}
