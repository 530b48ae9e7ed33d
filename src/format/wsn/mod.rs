// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Railyard-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Railyard and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Wirth Syntax Notation parsing and canonical export.

use std::fmt;

pub mod parser;
pub mod scanner;

pub use parser::{Parser, SyntaxError, MAX_NESTING};
pub use scanner::{LexError, Position, Scanner, Token, TokenKind};

use crate::model::ast::Syntax;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GrammarParseError {
    Lex(LexError),
    Syntax(SyntaxError),
}

impl GrammarParseError {
    pub fn position(&self) -> Position {
        match self {
            Self::Lex(err) => err.position(),
            Self::Syntax(err) => err.position,
        }
    }
}

impl fmt::Display for GrammarParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lex(err) => write!(f, "scan error: {err}"),
            Self::Syntax(err) => write!(f, "syntax error: {err}"),
        }
    }
}

impl std::error::Error for GrammarParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Lex(err) => Some(err),
            Self::Syntax(err) => Some(err),
        }
    }
}

impl From<LexError> for GrammarParseError {
    fn from(value: LexError) -> Self {
        Self::Lex(value)
    }
}

impl From<SyntaxError> for GrammarParseError {
    fn from(value: SyntaxError) -> Self {
        Self::Syntax(value)
    }
}

/// Parses WSN grammar text into a [`Syntax`] tree with fresh node ids.
pub fn parse_grammar(input: &str) -> Result<Syntax, GrammarParseError> {
    Parser::new(input)?.parse()
}

/// Renders the canonical text form: one production per line, straight quotes.
pub fn export_grammar(syntax: &Syntax) -> String {
    syntax.to_string()
}
