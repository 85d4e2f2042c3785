// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! SQL Tokenizer
//!
//! The tokenizer (a.k.a. lexer) converts a byte string into a sequence of
//! tokens, which form the input for the parser.
//!
//! Identifier and literal payloads are kept as raw bytes: a string literal
//! may legally carry bytes that are not valid UTF-8, and the formatter must
//! echo them bit-exactly.

use std::fmt;

use crate::keywords::{keyword_for, Keyword};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// SQL token enumeration
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Token {
    /// An end-of-file marker, not a real token
    EOF,
    /// A keyword (like SELECT) or an optionally backtick-quoted identifier
    Word(Word),
    /// A numeric literal, textual and unparsed: integer, decimal,
    /// exponent form, or `0x…` hex
    Number(Vec<u8>),
    /// A string literal (single- or double-quoted), with escape sequences
    /// already decoded
    StringLiteral(Vec<u8>),
    /// A named bind variable: `:name`, leading colon included
    ValArg(Vec<u8>),
    /// A named list bind variable: `::name`, leading colons included
    ListArg(Vec<u8>),
    /// Comma `,`
    Comma,
    /// Semicolon `;`, the optional statement terminator
    SemiColon,
    /// Period `.` used for qualification
    Period,
    /// Left parenthesis `(`
    LParen,
    /// Right parenthesis `)`
    RParen,
    /// Equality operator `=`
    Eq,
    /// Not-equals operator, spelled `!=` or `<>`
    Neq,
    /// Null-safe equality operator `<=>`
    NullSafeEq,
    /// Less-than operator `<`
    Lt,
    /// Greater-than operator `>`
    Gt,
    /// Less-than-or-equals operator `<=`
    LtEq,
    /// Greater-than-or-equals operator `>=`
    GtEq,
    /// Plus operator `+`
    Plus,
    /// Minus operator `-`
    Minus,
    /// Multiplication operator `*`, also the select star
    Mult,
    /// Division operator `/`
    Div,
    /// Modulo operator `%`
    Mod,
    /// Bitwise AND `&`
    Ampersand,
    /// Bitwise OR `|`
    Pipe,
    /// `||`, an alias for OR in this dialect
    DoublePipe,
    /// Bitwise XOR `^`
    Caret,
    /// Bitwise NOT `~`
    Tilde,
    /// Bitwise shift left `<<`
    ShiftLeft,
    /// Bitwise shift right `>>`
    ShiftRight,
    /// Exclamation mark `!`; only meaningful as part of `!=`, kept as a
    /// token so the parser can report it
    ExclamationMark,
    /// Whitespace (space, tab, newline) or a comment
    Whitespace(Whitespace),
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Token::EOF => f.write_str("EOF"),
            Token::Word(w) => write!(f, "{}", w),
            Token::Number(n) => f.write_str(&String::from_utf8_lossy(n)),
            Token::StringLiteral(s) => write!(f, "'{}'", String::from_utf8_lossy(s)),
            Token::ValArg(v) => f.write_str(&String::from_utf8_lossy(v)),
            Token::ListArg(v) => f.write_str(&String::from_utf8_lossy(v)),
            Token::Comma => f.write_str(","),
            Token::SemiColon => f.write_str(";"),
            Token::Period => f.write_str("."),
            Token::LParen => f.write_str("("),
            Token::RParen => f.write_str(")"),
            Token::Eq => f.write_str("="),
            Token::Neq => f.write_str("!="),
            Token::NullSafeEq => f.write_str("<=>"),
            Token::Lt => f.write_str("<"),
            Token::Gt => f.write_str(">"),
            Token::LtEq => f.write_str("<="),
            Token::GtEq => f.write_str(">="),
            Token::Plus => f.write_str("+"),
            Token::Minus => f.write_str("-"),
            Token::Mult => f.write_str("*"),
            Token::Div => f.write_str("/"),
            Token::Mod => f.write_str("%"),
            Token::Ampersand => f.write_str("&"),
            Token::Pipe => f.write_str("|"),
            Token::DoublePipe => f.write_str("||"),
            Token::Caret => f.write_str("^"),
            Token::Tilde => f.write_str("~"),
            Token::ShiftLeft => f.write_str("<<"),
            Token::ShiftRight => f.write_str(">>"),
            Token::ExclamationMark => f.write_str("!"),
            Token::Whitespace(ws) => write!(f, "{}", ws),
        }
    }
}

impl Token {
    pub fn make_keyword(keyword: &str) -> Self {
        Token::make_word(keyword.as_bytes(), false)
    }

    pub fn make_word(word: &[u8], quoted: bool) -> Self {
        Token::Word(Word {
            value: word.to_vec(),
            quoted,
            keyword: if quoted {
                Keyword::NoKeyword
            } else {
                keyword_for(word)
            },
        })
    }
}

/// A keyword (like SELECT) or an optionally backtick-quoted identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Word {
    /// The bytes of the token, without the enclosing backticks
    pub value: Vec<u8>,
    /// Whether the identifier was backtick-quoted. Quoted identifiers keep
    /// their content verbatim and are never matched against keywords.
    pub quoted: bool,
    /// If the word was not quoted and it matched one of the known keywords,
    /// this has a value from [`Keyword`], otherwise `NoKeyword`
    pub keyword: Keyword,
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.quoted {
            write!(f, "`{}`", String::from_utf8_lossy(&self.value))
        } else {
            f.write_str(&String::from_utf8_lossy(&self.value))
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Whitespace {
    Space,
    Newline,
    Tab,
    SingleLineComment { comment: Vec<u8>, prefix: String },
    MultiLineComment(Vec<u8>),
}

impl fmt::Display for Whitespace {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Whitespace::Space => f.write_str(" "),
            Whitespace::Newline => f.write_str("\n"),
            Whitespace::Tab => f.write_str("\t"),
            Whitespace::SingleLineComment { prefix, comment } => {
                write!(f, "{}{}", prefix, String::from_utf8_lossy(comment))
            }
            Whitespace::MultiLineComment(s) => {
                write!(f, "/*{}*/", String::from_utf8_lossy(s))
            }
        }
    }
}

impl Whitespace {
    /// The raw bytes of a comment, delimiters included, without the
    /// trailing newline of a single-line comment. `None` for plain
    /// whitespace.
    pub fn as_comment(&self) -> Option<Vec<u8>> {
        match self {
            Whitespace::SingleLineComment { prefix, comment } => {
                let mut raw = prefix.as_bytes().to_vec();
                let body = match comment.last() {
                    Some(b'\n') => &comment[..comment.len() - 1],
                    _ => &comment[..],
                };
                raw.extend_from_slice(body);
                Some(raw)
            }
            Whitespace::MultiLineComment(s) => {
                let mut raw = b"/*".to_vec();
                raw.extend_from_slice(s);
                raw.extend_from_slice(b"*/");
                Some(raw)
            }
            _ => None,
        }
    }
}

/// Location in the input string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Location {
    /// Line number, starting from 1
    pub line: u64,
    /// Line column, starting from 1
    pub column: u64,
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.line == 0 {
            return Ok(());
        }
        write!(f, " at Line: {}, Column: {}", self.line, self.column)
    }
}

/// A [`Token`] with [`Location`] attached to it
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TokenWithLocation {
    pub token: Token,
    pub location: Location,
}

impl TokenWithLocation {
    pub fn new(token: Token, line: u64, column: u64) -> TokenWithLocation {
        TokenWithLocation {
            token,
            location: Location { line, column },
        }
    }

    pub fn wrap(token: Token) -> TokenWithLocation {
        TokenWithLocation::new(token, 0, 0)
    }
}

impl PartialEq<Token> for TokenWithLocation {
    fn eq(&self, other: &Token) -> bool {
        &self.token == other
    }
}

impl fmt::Display for TokenWithLocation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.token.fmt(f)
    }
}

/// Tokenizer error
#[derive(Debug, PartialEq, Eq)]
pub struct TokenizerError {
    pub message: String,
    pub line: u64,
    pub col: u64,
}

impl fmt::Display for TokenizerError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} at Line: {}, Column: {}",
            self.message, self.line, self.col
        )
    }
}

impl std::error::Error for TokenizerError {}

struct State<'a> {
    bytes: &'a [u8],
    index: usize,
    pub line: u64,
    pub col: u64,
}

impl<'a> State<'a> {
    pub fn next(&mut self) -> Option<u8> {
        let b = *self.bytes.get(self.index)?;
        self.index += 1;
        if b == b'\n' {
            self.line += 1;
            self.col = 1;
        } else {
            self.col += 1;
        }
        Some(b)
    }

    pub fn peek(&self) -> Option<u8> {
        self.bytes.get(self.index).copied()
    }

    pub fn peek_ahead(&self, n: usize) -> Option<u8> {
        self.bytes.get(self.index + n).copied()
    }

    pub fn location(&self) -> Location {
        Location {
            line: self.line,
            column: self.col,
        }
    }
}

fn is_identifier_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_'
}

fn is_identifier_part(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// SQL Tokenizer
pub struct Tokenizer<'a> {
    query: &'a [u8],
}

impl<'a> Tokenizer<'a> {
    /// Create a new SQL tokenizer for the specified SQL statement
    pub fn new(query: &'a str) -> Self {
        Self {
            query: query.as_bytes(),
        }
    }

    /// Create a tokenizer over raw bytes. Literal contents are passed
    /// through untouched, so the input need not be valid UTF-8.
    pub fn new_bytes(query: &'a [u8]) -> Self {
        Self { query }
    }

    /// Tokenize the statement and produce a vector of tokens
    pub fn tokenize(&mut self) -> Result<Vec<Token>, TokenizerError> {
        let twl = self.tokenize_with_location()?;
        Ok(twl.into_iter().map(|t| t.token).collect())
    }

    /// Tokenize the statement and produce a vector of tokens with locations
    pub fn tokenize_with_location(&mut self) -> Result<Vec<TokenWithLocation>, TokenizerError> {
        let mut state = State {
            bytes: self.query,
            index: 0,
            line: 1,
            col: 1,
        };

        let mut tokens: Vec<TokenWithLocation> = vec![];
        let mut location = state.location();
        while let Some(token) = self.next_token(&mut state)? {
            tokens.push(TokenWithLocation { token, location });
            location = state.location();
        }
        Ok(tokens)
    }

    /// Get the next token or return None at end of input
    fn next_token(&self, state: &mut State) -> Result<Option<Token>, TokenizerError> {
        match state.peek() {
            Some(b) => match b {
                b' ' => self.consume_and_return(state, Token::Whitespace(Whitespace::Space)),
                b'\t' => self.consume_and_return(state, Token::Whitespace(Whitespace::Tab)),
                b'\n' => self.consume_and_return(state, Token::Whitespace(Whitespace::Newline)),
                b'\r' => {
                    // Emit a single Whitespace::Newline token for \r and \r\n
                    state.next();
                    if let Some(b'\n') = state.peek() {
                        state.next();
                    }
                    Ok(Some(Token::Whitespace(Whitespace::Newline)))
                }
                b if is_identifier_start(b) => {
                    state.next();
                    let word = self.tokenize_word(b, state);
                    Ok(Some(Token::make_word(&word, false)))
                }
                b'`' => {
                    state.next(); // consume the opening backtick
                    let word = peeking_take_while(state, |b| b != b'`');
                    if state.next() == Some(b'`') {
                        Ok(Some(Token::make_word(&word, true)))
                    } else {
                        self.tokenizer_error(state, "unterminated quoted identifier")
                    }
                }
                quote @ (b'\'' | b'"') => {
                    let s = self.tokenize_string(state, quote)?;
                    Ok(Some(Token::StringLiteral(s)))
                }
                b'0'..=b'9' => Ok(Some(self.tokenize_number(state)?)),
                b'.' => {
                    state.next();
                    match state.peek() {
                        Some(b'0'..=b'9') => {
                            let mut n = vec![b'.'];
                            n.extend(peeking_take_while(state, |b| b.is_ascii_digit()));
                            self.tokenize_exponent(state, &mut n)?;
                            Ok(Some(Token::Number(n)))
                        }
                        _ => Ok(Some(Token::Period)),
                    }
                }
                b'(' => self.consume_and_return(state, Token::LParen),
                b')' => self.consume_and_return(state, Token::RParen),
                b',' => self.consume_and_return(state, Token::Comma),
                b';' => self.consume_and_return(state, Token::SemiColon),
                b'+' => self.consume_and_return(state, Token::Plus),
                b'*' => self.consume_and_return(state, Token::Mult),
                b'%' => self.consume_and_return(state, Token::Mod),
                b'&' => self.consume_and_return(state, Token::Ampersand),
                b'^' => self.consume_and_return(state, Token::Caret),
                b'~' => self.consume_and_return(state, Token::Tilde),
                b'=' => self.consume_and_return(state, Token::Eq),
                b'-' => {
                    state.next();
                    match state.peek() {
                        Some(b'-') => {
                            state.next(); // second '-', starting a single-line comment
                            let comment = self.tokenize_single_line_comment(state);
                            Ok(Some(Token::Whitespace(Whitespace::SingleLineComment {
                                prefix: "--".to_owned(),
                                comment,
                            })))
                        }
                        _ => Ok(Some(Token::Minus)),
                    }
                }
                b'/' => {
                    state.next();
                    match state.peek() {
                        Some(b'*') => {
                            state.next(); // the '*', starting a multi-line comment
                            self.tokenize_multiline_comment(state)
                        }
                        _ => Ok(Some(Token::Div)),
                    }
                }
                b'#' => {
                    state.next();
                    let comment = self.tokenize_single_line_comment(state);
                    Ok(Some(Token::Whitespace(Whitespace::SingleLineComment {
                        prefix: "#".to_owned(),
                        comment,
                    })))
                }
                b'|' => {
                    state.next();
                    match state.peek() {
                        Some(b'|') => self.consume_and_return(state, Token::DoublePipe),
                        _ => Ok(Some(Token::Pipe)),
                    }
                }
                b'!' => {
                    state.next();
                    match state.peek() {
                        Some(b'=') => self.consume_and_return(state, Token::Neq),
                        _ => Ok(Some(Token::ExclamationMark)),
                    }
                }
                b'<' => {
                    state.next();
                    match state.peek() {
                        Some(b'>') => self.consume_and_return(state, Token::Neq),
                        Some(b'<') => self.consume_and_return(state, Token::ShiftLeft),
                        Some(b'=') => {
                            state.next();
                            match state.peek() {
                                Some(b'>') => self.consume_and_return(state, Token::NullSafeEq),
                                _ => Ok(Some(Token::LtEq)),
                            }
                        }
                        _ => Ok(Some(Token::Lt)),
                    }
                }
                b'>' => {
                    state.next();
                    match state.peek() {
                        Some(b'=') => self.consume_and_return(state, Token::GtEq),
                        Some(b'>') => self.consume_and_return(state, Token::ShiftRight),
                        _ => Ok(Some(Token::Gt)),
                    }
                }
                b':' => {
                    state.next();
                    let mut arg = vec![b':'];
                    let list = match state.peek() {
                        Some(b':') => {
                            state.next();
                            arg.push(b':');
                            true
                        }
                        _ => false,
                    };
                    match state.peek() {
                        Some(b) if is_identifier_start(b) => {
                            state.next();
                            arg.extend(self.tokenize_word(b, state));
                            if list {
                                Ok(Some(Token::ListArg(arg)))
                            } else {
                                Ok(Some(Token::ValArg(arg)))
                            }
                        }
                        _ => self.tokenizer_error(state, "malformed bind variable"),
                    }
                }
                other => self.tokenizer_error(
                    state,
                    &format!("unrecognized character: {:?}", char::from(other)),
                ),
            },
            None => Ok(None),
        }
    }

    fn tokenizer_error<R>(&self, state: &State, message: &str) -> Result<R, TokenizerError> {
        let loc = state.location();
        Err(TokenizerError {
            message: message.to_string(),
            line: loc.line,
            col: loc.column,
        })
    }

    // Consume bytes until newline
    fn tokenize_single_line_comment(&self, state: &mut State) -> Vec<u8> {
        let mut comment = peeking_take_while(state, |b| b != b'\n');
        if let Some(b) = state.next() {
            debug_assert_eq!(b, b'\n');
            comment.push(b);
        }
        comment
    }

    /// Tokenize an identifier or keyword, after the first byte is already
    /// consumed
    fn tokenize_word(&self, first: u8, state: &mut State) -> Vec<u8> {
        let mut word = vec![first];
        word.extend(peeking_take_while(state, is_identifier_part));
        word
    }

    /// Read a numeric literal: integer, decimal, exponent, or 0x… hex
    fn tokenize_number(&self, state: &mut State) -> Result<Token, TokenizerError> {
        if state.peek() == Some(b'0') && matches!(state.peek_ahead(1), Some(b'x') | Some(b'X')) {
            let mut n = Vec::with_capacity(8);
            n.push(state.next().unwrap());
            n.push(state.next().unwrap());
            let digits = peeking_take_while(state, |b| b.is_ascii_hexdigit());
            if digits.is_empty() {
                return self.tokenizer_error(state, "malformed hex literal");
            }
            n.extend(digits);
            return Ok(Token::Number(n));
        }
        let mut n = peeking_take_while(state, |b| b.is_ascii_digit());
        if state.peek() == Some(b'.') {
            state.next();
            n.push(b'.');
            n.extend(peeking_take_while(state, |b| b.is_ascii_digit()));
        }
        self.tokenize_exponent(state, &mut n)?;
        Ok(Token::Number(n))
    }

    /// Append an `e`/`E` exponent suffix to `n` if one follows
    fn tokenize_exponent(&self, state: &mut State, n: &mut Vec<u8>) -> Result<(), TokenizerError> {
        if let Some(e @ (b'e' | b'E')) = state.peek() {
            state.next();
            n.push(e);
            if let Some(sign @ (b'+' | b'-')) = state.peek() {
                state.next();
                n.push(sign);
            }
            let digits = peeking_take_while(state, |b| b.is_ascii_digit());
            if digits.is_empty() {
                return self.tokenizer_error(state, "malformed number: missing exponent digits");
            }
            n.extend(digits);
        }
        Ok(())
    }

    /// Read a quoted string, starting at the opening quote. Both quote
    /// styles use the same escape rules; a doubled quote is a literal quote.
    fn tokenize_string(&self, state: &mut State, quote: u8) -> Result<Vec<u8>, TokenizerError> {
        let mut s = Vec::new();
        state.next(); // consume the opening quote
        loop {
            match state.next() {
                Some(b) if b == quote => {
                    if state.peek() == Some(quote) {
                        state.next();
                        s.push(quote);
                    } else {
                        return Ok(s);
                    }
                }
                Some(b'\\') => match state.next() {
                    // A recognized escape decodes to its byte; any other
                    // escaped byte drops the backslash.
                    Some(e) => s.push(decode_escape(e)),
                    None => return self.tokenizer_error(state, "unterminated string"),
                },
                Some(b) => s.push(b),
                None => return self.tokenizer_error(state, "unterminated string"),
            }
        }
    }

    fn tokenize_multiline_comment(
        &self,
        state: &mut State,
    ) -> Result<Option<Token>, TokenizerError> {
        let mut s = Vec::new();
        loop {
            match state.next() {
                Some(b'*') if state.peek() == Some(b'/') => {
                    state.next();
                    return Ok(Some(Token::Whitespace(Whitespace::MultiLineComment(s))));
                }
                Some(b) => s.push(b),
                None => return self.tokenizer_error(state, "unterminated comment"),
            }
        }
    }

    fn consume_and_return(
        &self,
        state: &mut State,
        t: Token,
    ) -> Result<Option<Token>, TokenizerError> {
        state.next();
        Ok(Some(t))
    }
}

fn decode_escape(b: u8) -> u8 {
    match b {
        b'0' => 0,
        b'b' => 8,
        b'n' => b'\n',
        b'r' => b'\r',
        b't' => b'\t',
        b'Z' => 26,
        _ => b, // includes \\ \' \" and, notably, \% and \_
    }
}

/// Read from `state` until `predicate` returns false or EOF is hit, and
/// return the bytes read.
fn peeking_take_while(state: &mut State, mut predicate: impl FnMut(u8) -> bool) -> Vec<u8> {
    let mut s = Vec::new();
    while let Some(b) = state.peek() {
        if predicate(b) {
            state.next();
            s.push(b);
        } else {
            break;
        }
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compare(expected: Vec<Token>, actual: Vec<Token>) {
        assert_eq!(expected, actual);
    }

    #[test]
    fn tokenize_select_1() {
        let sql = "SELECT 1";
        let tokens = Tokenizer::new(sql).tokenize().unwrap();

        let expected = vec![
            Token::make_keyword("SELECT"),
            Token::Whitespace(Whitespace::Space),
            Token::Number(b"1".to_vec()),
        ];

        compare(expected, tokens);
    }

    #[test]
    fn tokenize_simple_select() {
        let sql = "SELECT * FROM customer WHERE id = 1 LIMIT 5";
        let tokens = Tokenizer::new(sql).tokenize().unwrap();

        let expected = vec![
            Token::make_keyword("SELECT"),
            Token::Whitespace(Whitespace::Space),
            Token::Mult,
            Token::Whitespace(Whitespace::Space),
            Token::make_keyword("FROM"),
            Token::Whitespace(Whitespace::Space),
            Token::make_word(b"customer", false),
            Token::Whitespace(Whitespace::Space),
            Token::make_keyword("WHERE"),
            Token::Whitespace(Whitespace::Space),
            Token::make_word(b"id", false),
            Token::Whitespace(Whitespace::Space),
            Token::Eq,
            Token::Whitespace(Whitespace::Space),
            Token::Number(b"1".to_vec()),
            Token::Whitespace(Whitespace::Space),
            Token::make_keyword("LIMIT"),
            Token::Whitespace(Whitespace::Space),
            Token::Number(b"5".to_vec()),
        ];

        compare(expected, tokens);
    }

    #[test]
    fn tokenize_operators() {
        let sql = "a != b <> c <=> d << 2 >> 1 || e";
        let tokens = Tokenizer::new(sql).tokenize().unwrap();
        let ops: Vec<Token> = tokens
            .into_iter()
            .filter(|t| !matches!(t, Token::Whitespace(_) | Token::Word(_) | Token::Number(_)))
            .collect();
        compare(
            vec![
                Token::Neq,
                Token::Neq,
                Token::NullSafeEq,
                Token::ShiftLeft,
                Token::ShiftRight,
                Token::DoublePipe,
            ],
            ops,
        );
    }

    #[test]
    fn tokenize_string_escapes() {
        let sql = r"'a\nb''c\Z\%'";
        let tokens = Tokenizer::new(sql).tokenize().unwrap();
        let expected = vec![Token::StringLiteral(b"a\nb'c\x1a%".to_vec())];
        compare(expected, tokens);
    }

    #[test]
    fn tokenize_double_quoted_string() {
        let sql = r#""he said ""hi"".""#;
        let tokens = Tokenizer::new(sql).tokenize().unwrap();
        let expected = vec![Token::StringLiteral(b"he said \"hi\".".to_vec())];
        compare(expected, tokens);
    }

    #[test]
    fn tokenize_unterminated_string() {
        let sql = "select 'foo";
        assert_eq!(
            Tokenizer::new(sql).tokenize(),
            Err(TokenizerError {
                message: "unterminated string".to_string(),
                line: 1,
                col: 12,
            })
        );
    }

    #[test]
    fn tokenize_backtick_identifier() {
        let sql = "select `from` from t";
        let tokens = Tokenizer::new(sql).tokenize().unwrap();
        let expected = vec![
            Token::make_keyword("select"),
            Token::Whitespace(Whitespace::Space),
            Token::make_word(b"from", true),
            Token::Whitespace(Whitespace::Space),
            Token::make_keyword("from"),
            Token::Whitespace(Whitespace::Space),
            Token::make_word(b"t", false),
        ];
        compare(expected, tokens);
        // the quoted spelling is not a keyword
        match &Tokenizer::new(sql).tokenize().unwrap()[2] {
            Token::Word(w) => assert_eq!(w.keyword, Keyword::NoKeyword),
            other => panic!("expected word, got {:?}", other),
        }
    }

    #[test]
    fn tokenize_numbers() {
        let sql = "1 1.5 .5 2e10 2.5E-3 0xDEADbeef";
        let tokens = Tokenizer::new(sql).tokenize().unwrap();
        let nums: Vec<Token> = tokens
            .into_iter()
            .filter(|t| !matches!(t, Token::Whitespace(_)))
            .collect();
        let expected = vec![
            Token::Number(b"1".to_vec()),
            Token::Number(b"1.5".to_vec()),
            Token::Number(b".5".to_vec()),
            Token::Number(b"2e10".to_vec()),
            Token::Number(b"2.5E-3".to_vec()),
            Token::Number(b"0xDEADbeef".to_vec()),
        ];
        compare(expected, nums);
    }

    #[test]
    fn tokenize_malformed_numbers() {
        assert_eq!(
            Tokenizer::new("select 0x from t").tokenize(),
            Err(TokenizerError {
                message: "malformed hex literal".to_string(),
                line: 1,
                col: 10,
            })
        );
        assert!(Tokenizer::new("select 1e from t").tokenize().is_err());
        assert!(Tokenizer::new("select 1e+ from t").tokenize().is_err());
    }

    #[test]
    fn tokenize_bind_variables() {
        let sql = "id in (:a, ::list)";
        let tokens = Tokenizer::new(sql).tokenize().unwrap();
        let expected = vec![
            Token::make_word(b"id", false),
            Token::Whitespace(Whitespace::Space),
            Token::make_keyword("in"),
            Token::Whitespace(Whitespace::Space),
            Token::LParen,
            Token::ValArg(b":a".to_vec()),
            Token::Comma,
            Token::Whitespace(Whitespace::Space),
            Token::ListArg(b"::list".to_vec()),
            Token::RParen,
        ];
        compare(expected, tokens);
    }

    #[test]
    fn tokenize_malformed_bind_variable() {
        assert!(Tokenizer::new("select : from t").tokenize().is_err());
    }

    #[test]
    fn tokenize_comment() {
        let sql = "0-- this is a comment\n1";
        let tokens = Tokenizer::new(sql).tokenize().unwrap();
        let expected = vec![
            Token::Number(b"0".to_vec()),
            Token::Whitespace(Whitespace::SingleLineComment {
                prefix: "--".to_string(),
                comment: b" this is a comment\n".to_vec(),
            }),
            Token::Number(b"1".to_vec()),
        ];
        compare(expected, tokens);
    }

    #[test]
    fn tokenize_hash_comment_at_eof() {
        let sql = "# trailing";
        let tokens = Tokenizer::new(sql).tokenize().unwrap();
        let expected = vec![Token::Whitespace(Whitespace::SingleLineComment {
            prefix: "#".to_string(),
            comment: b" trailing".to_vec(),
        })];
        compare(expected, tokens);
    }

    #[test]
    fn tokenize_multiline_comment() {
        let sql = "0/*multi-line\n* /comment*/1";
        let tokens = Tokenizer::new(sql).tokenize().unwrap();
        let expected = vec![
            Token::Number(b"0".to_vec()),
            Token::Whitespace(Whitespace::MultiLineComment(
                b"multi-line\n* /comment".to_vec(),
            )),
            Token::Number(b"1".to_vec()),
        ];
        compare(expected, tokens);
    }

    #[test]
    fn tokenize_unterminated_multiline_comment() {
        assert_eq!(
            Tokenizer::new("select 1 /* never closed").tokenize(),
            Err(TokenizerError {
                message: "unterminated comment".to_string(),
                line: 1,
                col: 25,
            })
        );
    }

    #[test]
    fn tokenize_unrecognized_character() {
        assert!(Tokenizer::new("select $1").tokenize().is_err());
    }

    #[test]
    fn tokenize_newline_in_string_literal() {
        let sql = "'foo\r\nbar\nbaz'";
        let tokens = Tokenizer::new(sql).tokenize().unwrap();
        let expected = vec![Token::StringLiteral(b"foo\r\nbar\nbaz".to_vec())];
        compare(expected, tokens);
    }

    #[test]
    fn tokenize_raw_bytes_in_string() {
        let query = b"select '\xff\xfe' from t";
        let tokens = Tokenizer::new_bytes(query).tokenize().unwrap();
        assert_eq!(tokens[2], Token::StringLiteral(vec![0xff, 0xfe]));
    }

    #[test]
    fn tokenize_comment_as_raw_bytes() {
        let ws = Whitespace::SingleLineComment {
            prefix: "--".to_string(),
            comment: b" note\n".to_vec(),
        };
        assert_eq!(ws.as_comment().unwrap(), b"-- note".to_vec());
        let ws = Whitespace::MultiLineComment(b" hint ".to_vec());
        assert_eq!(ws.as_comment().unwrap(), b"/* hint */".to_vec());
        assert_eq!(Whitespace::Space.as_comment(), None);
    }

    #[test]
    fn tokenize_location_multiline() {
        let sql = "'some\nthing' foo";
        let tokens = Tokenizer::new(sql).tokenize_with_location().unwrap();
        let expected = vec![
            TokenWithLocation::new(Token::StringLiteral(b"some\nthing".to_vec()), 1, 1),
            TokenWithLocation::new(Token::Whitespace(Whitespace::Space), 2, 7),
            TokenWithLocation::new(Token::make_word(b"foo", false), 2, 8),
        ];
        assert_eq!(expected, tokens);
    }
}
