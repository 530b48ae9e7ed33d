// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Railyard-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Railyard and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use smol_str::SmolStr;

use crate::model::ast::SPACE_PLACEHOLDER;

/// 1-based line/column of a character in the grammar source. Columns count chars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::new(1, 1)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Ident,
    Literal,
    Quote,
    LPar,
    RPar,
    LBrack,
    RBrack,
    LBrace,
    RBrace,
    Period,
    Pipe,
    Assign,
    Eof,
}

impl TokenKind {
    pub fn describe(self) -> &'static str {
        match self {
            Self::Ident => "identifier",
            Self::Literal => "literal",
            Self::Quote => "'\"'",
            Self::LPar => "'('",
            Self::RPar => "')'",
            Self::LBrack => "'['",
            Self::RBrack => "']'",
            Self::LBrace => "'{'",
            Self::RBrace => "'}'",
            Self::Period => "'.'",
            Self::Pipe => "'|'",
            Self::Assign => "'='",
            Self::Eof => "end of input",
        }
    }

    /// Tokens that can open a factor.
    pub fn starts_factor(self) -> bool {
        matches!(self, Self::Ident | Self::Quote | Self::LPar | Self::LBrace | Self::LBrack)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.describe())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    /// Identifier name or literal text; empty for punctuation.
    pub text: SmolStr,
    pub position: Position,
}

impl Token {
    fn punct(kind: TokenKind, position: Position) -> Self {
        Self { kind, text: SmolStr::default(), position }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Ident => write!(f, "identifier '{}'", self.text),
            TokenKind::Literal => write!(f, "literal '{}'", self.text),
            kind => f.write_str(kind.describe()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexError {
    UnexpectedChar { ch: char, position: Position },
    UnterminatedLiteral { position: Position },
}

impl LexError {
    pub fn position(&self) -> Position {
        match self {
            Self::UnexpectedChar { position, .. } | Self::UnterminatedLiteral { position } => {
                *position
            }
        }
    }
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedChar { ch, position } => {
                write!(f, "unexpected character {ch:?} at {position}")
            }
            Self::UnterminatedLiteral { position } => {
                write!(f, "unterminated literal starting at {position}")
            }
        }
    }
}

impl std::error::Error for LexError {}

/// Straight quote plus the typographic pair some input methods substitute for it.
pub fn is_quote(ch: char) -> bool {
    matches!(ch, '"' | '\u{201C}' | '\u{201D}')
}

/// Lazy tokenizer for WSN grammar text.
///
/// Quotes toggle literal mode; inside a literal every character up to the next quote is
/// literal text, with spaces replaced by [`SPACE_PLACEHOLDER`].
#[derive(Debug, Clone)]
pub struct Scanner<'a> {
    input: &'a str,
    offset: usize,
    position: Position,
    in_literal: bool,
    literal_start: Position,
    done: bool,
}

impl<'a> Scanner<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            offset: 0,
            position: Position::default(),
            in_literal: false,
            literal_start: Position::default(),
            done: false,
        }
    }

    /// Position of the next unread character.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Whether another non-EOF token may follow.
    pub fn has_next(&self) -> bool {
        let rest = &self.input[self.offset..];
        if self.in_literal {
            return !rest.is_empty();
        }
        rest.chars().any(|ch| !ch.is_whitespace())
    }

    fn peek(&self) -> Option<char> {
        self.input[self.offset..].chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.offset += ch.len_utf8();
        if ch == '\n' {
            self.position.line += 1;
            self.position.column = 1;
        } else {
            self.position.column += 1;
        }
        Some(ch)
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.bump();
        }
    }

    /// Reads the next token. Past the end of input this keeps returning [`TokenKind::Eof`].
    pub fn next_token(&mut self) -> Result<Token, LexError> {
        if self.in_literal {
            if let Some(ch) = self.peek() {
                if !is_quote(ch) {
                    return Ok(self.literal_text());
                }
            }
        } else {
            self.skip_whitespace();
        }

        let position = self.position;
        let Some(ch) = self.peek() else {
            if self.in_literal {
                return Err(LexError::UnterminatedLiteral { position: self.literal_start });
            }
            return Ok(Token::punct(TokenKind::Eof, position));
        };

        let kind = match ch {
            '(' => TokenKind::LPar,
            ')' => TokenKind::RPar,
            '[' => TokenKind::LBrack,
            ']' => TokenKind::RBrack,
            '{' => TokenKind::LBrace,
            '}' => TokenKind::RBrace,
            '.' => TokenKind::Period,
            '|' => TokenKind::Pipe,
            '=' => TokenKind::Assign,
            ch if is_quote(ch) => {
                self.in_literal = !self.in_literal;
                if self.in_literal {
                    self.literal_start = position;
                }
                TokenKind::Quote
            }
            ch if ch.is_alphabetic() => return Ok(self.identifier()),
            ch => return Err(LexError::UnexpectedChar { ch, position }),
        };

        self.bump();
        log::trace!("scanned {kind} at {position}");
        Ok(Token::punct(kind, position))
    }

    fn identifier(&mut self) -> Token {
        let position = self.position;
        let start = self.offset;
        while self.peek().is_some_and(char::is_alphabetic) {
            self.bump();
        }
        let text = SmolStr::new(&self.input[start..self.offset]);
        log::trace!("scanned identifier {text:?} at {position}");
        Token { kind: TokenKind::Ident, text, position }
    }

    fn literal_text(&mut self) -> Token {
        let position = self.position;
        let mut text = String::new();
        while let Some(ch) = self.peek() {
            if is_quote(ch) {
                break;
            }
            self.bump();
            text.push(if ch == ' ' { SPACE_PLACEHOLDER } else { ch });
        }
        log::trace!("scanned literal {text:?} at {position}");
        Token { kind: TokenKind::Literal, text: SmolStr::from(text), position }
    }
}

impl Iterator for Scanner<'_> {
    type Item = Result<Token, LexError>;

    /// Yields tokens up to, but not including, end of input; stops after the first error.
    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.next_token() {
            Ok(token) if token.kind == TokenKind::Eof => {
                self.done = true;
                None
            }
            Ok(token) => Some(Ok(token)),
            Err(err) => {
                self.done = true;
                Some(Err(err))
            }
        }
    }
}
