// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Railyard-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Railyard and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Single-lookahead recursive descent over the WSN meta-grammar:
//!
//! ```text
//! Syntax     = { Production } .
//! Production = Identifier "=" Expression "." .
//! Expression = Term { "|" Term } .
//! Term       = Factor { Factor } .
//! Factor     = Identifier | Literal | "(" Expression ")" | "{" Expression "}" | "[" Expression "]" .
//! Literal    = '"' character { character } '"' .
//! ```
//!
//! Each rule reserves its node id on entry, so ids increase in pre-order. Bracket nesting is
//! limited to [`MAX_NESTING`] levels so the recursive passes over the tree stay within the stack.

use std::fmt;

use super::scanner::{LexError, Position, Scanner, Token, TokenKind};
use super::GrammarParseError;
use crate::model::ast::{
    Expression, Factor, FactorValue, Identifier, Literal, Production, Syntax, Term,
};
use crate::model::ids::IdGen;

/// Deepest allowed nesting of `()`, `{}` and `[]` inside one production.
pub const MAX_NESTING: usize = 256;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    pub position: Position,
    pub expected: String,
    pub found: String,
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "expected {} but found {} at {}", self.expected, self.found, self.position)
    }
}

impl std::error::Error for SyntaxError {}

pub struct Parser<'a> {
    scanner: Scanner<'a>,
    la: Token,
    ids: IdGen,
    nesting: usize,
}

impl<'a> Parser<'a> {
    pub fn new(input: &'a str) -> Result<Self, LexError> {
        Self::with_ids(input, IdGen::new())
    }

    /// Parses with a caller-provided id allocator, continuing from its current value.
    pub fn with_ids(input: &'a str, ids: IdGen) -> Result<Self, LexError> {
        let mut scanner = Scanner::new(input);
        let la = scanner.next_token()?;
        Ok(Self { scanner, la, ids, nesting: 0 })
    }

    /// Parses the whole input. The parser is consumed, so no node can be added afterwards.
    pub fn parse(self) -> Result<Syntax, GrammarParseError> {
        self.parse_with_ids().map(|(syntax, _)| syntax)
    }

    /// Like [`Parser::parse`], also handing back the id allocator.
    pub fn parse_with_ids(mut self) -> Result<(Syntax, IdGen), GrammarParseError> {
        let syntax = self.syntax()?;
        Ok((syntax, self.ids))
    }

    fn scan(&mut self) -> Result<Token, LexError> {
        let next = self.scanner.next_token()?;
        Ok(std::mem::replace(&mut self.la, next))
    }

    fn error(&self, expected: impl Into<String>) -> GrammarParseError {
        GrammarParseError::Syntax(SyntaxError {
            position: self.la.position,
            expected: expected.into(),
            found: self.la.to_string(),
        })
    }

    /// Consumes the lookahead if it has the expected kind.
    fn check(&mut self, expected: TokenKind) -> Result<Token, GrammarParseError> {
        if self.la.kind == expected {
            Ok(self.scan()?)
        } else {
            Err(self.error(expected.describe()))
        }
    }

    fn syntax(&mut self) -> Result<Syntax, GrammarParseError> {
        let id = self.ids.next_id();
        let mut productions = Vec::new();
        while self.la.kind == TokenKind::Ident {
            productions.push(self.production()?);
        }
        if self.la.kind != TokenKind::Eof {
            return Err(self.error("identifier"));
        }
        Ok(Syntax::new(id, productions))
    }

    fn production(&mut self) -> Result<Production, GrammarParseError> {
        let id = self.ids.next_id();
        let ident = self.identifier()?;
        self.check(TokenKind::Assign)?;
        let expr = self.expression()?;
        self.check(TokenKind::Period)?;
        Ok(Production::new(id, ident, expr))
    }

    fn identifier(&mut self) -> Result<Identifier, GrammarParseError> {
        let id = self.ids.next_id();
        let token = self.check(TokenKind::Ident)?;
        Ok(Identifier::new(id, token.text))
    }

    fn expression(&mut self) -> Result<Expression, GrammarParseError> {
        let id = self.ids.next_id();
        let mut terms = vec![self.term()?];
        while self.la.kind == TokenKind::Pipe {
            self.scan()?;
            terms.push(self.term()?);
        }
        Ok(Expression::new(id, terms))
    }

    fn term(&mut self) -> Result<Term, GrammarParseError> {
        let id = self.ids.next_id();
        let mut factors = vec![self.factor()?];
        while self.la.kind.starts_factor() {
            factors.push(self.factor()?);
        }
        Ok(Term::new(id, factors))
    }

    fn factor(&mut self) -> Result<Factor, GrammarParseError> {
        let id = self.ids.next_id();
        let value = match self.la.kind {
            TokenKind::Ident => FactorValue::Identifier(self.identifier()?),
            TokenKind::Quote => FactorValue::Literal(self.literal()?),
            TokenKind::LPar => FactorValue::Group(self.nested(TokenKind::RPar)?),
            TokenKind::LBrace => FactorValue::Repetition(self.nested(TokenKind::RBrace)?),
            TokenKind::LBrack => FactorValue::Optionally(self.nested(TokenKind::RBrack)?),
            _ => return Err(self.error("identifier, literal, '(', '{' or '['")),
        };
        Ok(Factor::new(id, value))
    }

    fn nested(&mut self, close: TokenKind) -> Result<Expression, GrammarParseError> {
        if self.nesting == MAX_NESTING {
            return Err(self.error(format!("at most {MAX_NESTING} nested brackets")));
        }
        self.nesting += 1;
        self.scan()?;
        let expr = self.expression()?;
        self.check(close)?;
        self.nesting -= 1;
        Ok(expr)
    }

    fn literal(&mut self) -> Result<Literal, GrammarParseError> {
        let id = self.ids.next_id();
        self.check(TokenKind::Quote)?;
        let token = self.check(TokenKind::Literal)?;
        self.check(TokenKind::Quote)?;
        Ok(Literal::new(id, token.text))
    }
}
