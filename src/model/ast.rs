// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Railyard-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Railyard and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! WSN abstract syntax tree.
//!
//! Every node carries a [`NodeId`] assigned by the parser plus a canonical textual rendering
//! (its `name`). Equality between symbols is structural: it compares names only and ignores
//! ids, which exist solely to address node occurrences in diagrams.

use std::borrow::Cow;
use std::fmt;

use smol_str::SmolStr;

use super::ids::NodeId;

/// Glyph substituted for spaces inside literals so they stay visible when displayed.
pub const SPACE_PLACEHOLDER: char = '\u{2423}';

/// Returns `true` if `word` starts with an uppercase letter (Unicode aware).
pub fn starts_uppercase(word: &str) -> bool {
    word.chars().next().is_some_and(char::is_uppercase)
}

/// Common identity contract shared by all AST nodes.
pub trait Symbol {
    fn id(&self) -> NodeId;

    /// Canonical rendering used for classification and structural comparison.
    fn name(&self) -> Cow<'_, str>;

    /// A symbol is terminal unless its name starts with an uppercase letter.
    fn is_terminal_symbol(&self) -> bool {
        !starts_uppercase(&self.name())
    }

    /// Structural equality: same canonical name, regardless of id.
    ///
    /// The whole canonical name is compared, quotes included, so a literal never equals an
    /// identifier with the same text. Term compaction relies on this.
    fn same_symbol(&self, other: &dyn Symbol) -> bool {
        self.name() == other.name()
    }
}

#[derive(Debug, Clone)]
pub struct Identifier {
    id: NodeId,
    name: SmolStr,
}

impl Identifier {
    pub(crate) fn new(id: NodeId, name: impl Into<SmolStr>) -> Self {
        let name = name.into();
        debug_assert!(!name.is_empty(), "identifier must not be empty");
        Self { id, name }
    }

    pub fn as_str(&self) -> &str {
        &self.name
    }

    /// Uppercase identifiers reference other productions.
    pub fn is_non_terminal(&self) -> bool {
        starts_uppercase(&self.name)
    }
}

impl Symbol for Identifier {
    fn id(&self) -> NodeId {
        self.id
    }

    fn name(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.name)
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[derive(Debug, Clone)]
pub struct Literal {
    id: NodeId,
    text: SmolStr,
}

impl Literal {
    pub(crate) fn new(id: NodeId, text: impl Into<SmolStr>) -> Self {
        let text = text.into();
        debug_assert!(!text.is_empty(), "literal must not be empty");
        Self { id, text }
    }

    /// The literal's characters without quotes.
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl Symbol for Literal {
    fn id(&self) -> NodeId {
        self.id
    }

    fn name(&self) -> Cow<'_, str> {
        Cow::Owned(self.to_string())
    }

    fn is_terminal_symbol(&self) -> bool {
        true
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\"", self.text)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FactorKind {
    Identifier,
    Literal,
    Group,
    Repetition,
    Optionally,
}

#[derive(Debug, Clone)]
pub enum FactorValue {
    Identifier(Identifier),
    Literal(Literal),
    Group(Expression),
    Repetition(Expression),
    Optionally(Expression),
}

impl FactorValue {
    pub fn kind(&self) -> FactorKind {
        match self {
            Self::Identifier(_) => FactorKind::Identifier,
            Self::Literal(_) => FactorKind::Literal,
            Self::Group(_) => FactorKind::Group,
            Self::Repetition(_) => FactorKind::Repetition,
            Self::Optionally(_) => FactorKind::Optionally,
        }
    }

    /// The nested expression of a group, repetition or option.
    pub fn expression(&self) -> Option<&Expression> {
        match self {
            Self::Group(expr) | Self::Repetition(expr) | Self::Optionally(expr) => Some(expr),
            Self::Identifier(_) | Self::Literal(_) => None,
        }
    }

    pub fn as_node(&self) -> AstNode<'_> {
        match self {
            Self::Identifier(ident) => AstNode::Identifier(ident),
            Self::Literal(lit) => AstNode::Literal(lit),
            Self::Group(expr) | Self::Repetition(expr) | Self::Optionally(expr) => {
                AstNode::Expression(expr)
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct Factor {
    id: NodeId,
    value: FactorValue,
}

impl Factor {
    pub(crate) fn new(id: NodeId, value: FactorValue) -> Self {
        Self { id, value }
    }

    pub fn value(&self) -> &FactorValue {
        &self.value
    }

    pub fn kind(&self) -> FactorKind {
        self.value.kind()
    }

    pub fn is_repetition(&self) -> bool {
        matches!(self.value, FactorValue::Repetition(_))
    }
}

impl Symbol for Factor {
    fn id(&self) -> NodeId {
        self.id
    }

    fn name(&self) -> Cow<'_, str> {
        match &self.value {
            FactorValue::Identifier(ident) => ident.name(),
            _ => Cow::Owned(self.to_string()),
        }
    }

    fn is_terminal_symbol(&self) -> bool {
        match &self.value {
            FactorValue::Literal(_) => true,
            _ => !starts_uppercase(&self.name()),
        }
    }
}

impl fmt::Display for Factor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            FactorValue::Identifier(ident) => write!(f, "{ident}"),
            FactorValue::Literal(lit) => write!(f, "{lit}"),
            FactorValue::Group(expr) => write!(f, "({expr})"),
            FactorValue::Repetition(expr) => write!(f, "{{{expr}}}"),
            FactorValue::Optionally(expr) => write!(f, "[{expr}]"),
        }
    }
}

/// Implicit concatenation of one or more factors.
#[derive(Debug, Clone)]
pub struct Term {
    id: NodeId,
    factors: Vec<Factor>,
}

impl Term {
    pub(crate) fn new(id: NodeId, factors: Vec<Factor>) -> Self {
        debug_assert!(!factors.is_empty(), "term must have at least one factor");
        Self { id, factors }
    }

    pub fn factors(&self) -> &[Factor] {
        &self.factors
    }
}

impl Symbol for Term {
    fn id(&self) -> NodeId {
        self.id
    }

    fn name(&self) -> Cow<'_, str> {
        Cow::Owned(self.to_string())
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, factor) in self.factors.iter().enumerate() {
            if idx > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{factor}")?;
        }
        Ok(())
    }
}

/// One or more alternative terms separated by `|`.
#[derive(Debug, Clone)]
pub struct Expression {
    id: NodeId,
    terms: Vec<Term>,
}

impl Expression {
    pub(crate) fn new(id: NodeId, terms: Vec<Term>) -> Self {
        debug_assert!(!terms.is_empty(), "expression must have at least one term");
        Self { id, terms }
    }

    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    /// The only term, if this expression has no alternatives.
    pub fn single_term(&self) -> Option<&Term> {
        match self.terms.as_slice() {
            [term] => Some(term),
            _ => None,
        }
    }
}

impl Symbol for Expression {
    fn id(&self) -> NodeId {
        self.id
    }

    fn name(&self) -> Cow<'_, str> {
        Cow::Owned(self.to_string())
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, term) in self.terms.iter().enumerate() {
            if idx > 0 {
                f.write_str(" | ")?;
            }
            write!(f, "{term}")?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct Production {
    id: NodeId,
    ident: Identifier,
    expr: Expression,
}

impl Production {
    pub(crate) fn new(id: NodeId, ident: Identifier, expr: Expression) -> Self {
        Self { id, ident, expr }
    }

    pub fn ident(&self) -> &Identifier {
        &self.ident
    }

    pub fn expression(&self) -> &Expression {
        &self.expr
    }
}

impl Symbol for Production {
    fn id(&self) -> NodeId {
        self.id
    }

    fn name(&self) -> Cow<'_, str> {
        Cow::Owned(self.to_string())
    }
}

impl fmt::Display for Production {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {} .", self.ident, self.expr)
    }
}

/// The whole grammar: productions in declaration order.
#[derive(Debug, Clone)]
pub struct Syntax {
    id: NodeId,
    productions: Vec<Production>,
}

impl Syntax {
    pub(crate) fn new(id: NodeId, productions: Vec<Production>) -> Self {
        Self { id, productions }
    }

    pub fn productions(&self) -> &[Production] {
        &self.productions
    }

    /// Same production count and pairwise structurally equal productions.
    pub fn same_structure(&self, other: &Syntax) -> bool {
        self.productions.len() == other.productions.len()
            && self.productions.iter().zip(&other.productions).all(|(a, b)| a.same_symbol(b))
    }

    /// Visits every node in pre-order (parents before children, left to right).
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(AstNode<'a>)) {
        walk_node(AstNode::Syntax(self), visit);
    }
}

fn walk_node<'a>(node: AstNode<'a>, visit: &mut impl FnMut(AstNode<'a>)) {
    visit(node);
    for child in node.children() {
        walk_node(child, visit);
    }
}

impl Symbol for Syntax {
    fn id(&self) -> NodeId {
        self.id
    }

    fn name(&self) -> Cow<'_, str> {
        Cow::Owned(self.to_string())
    }
}

impl fmt::Display for Syntax {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, prod) in self.productions.iter().enumerate() {
            if idx > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{prod}")?;
        }
        Ok(())
    }
}

/// Borrowed view over any AST node kind.
#[derive(Debug, Clone, Copy)]
pub enum AstNode<'a> {
    Syntax(&'a Syntax),
    Production(&'a Production),
    Expression(&'a Expression),
    Term(&'a Term),
    Factor(&'a Factor),
    Identifier(&'a Identifier),
    Literal(&'a Literal),
}

impl<'a> AstNode<'a> {
    fn as_symbol(&self) -> &'a dyn Symbol {
        match *self {
            Self::Syntax(node) => node,
            Self::Production(node) => node,
            Self::Expression(node) => node,
            Self::Term(node) => node,
            Self::Factor(node) => node,
            Self::Identifier(node) => node,
            Self::Literal(node) => node,
        }
    }

    pub fn children(&self) -> Vec<AstNode<'a>> {
        match *self {
            Self::Syntax(syntax) => syntax.productions.iter().map(AstNode::Production).collect(),
            Self::Production(prod) => {
                vec![AstNode::Identifier(&prod.ident), AstNode::Expression(&prod.expr)]
            }
            Self::Expression(expr) => expr.terms.iter().map(AstNode::Term).collect(),
            Self::Term(term) => term.factors.iter().map(AstNode::Factor).collect(),
            Self::Factor(factor) => vec![factor.value.as_node()],
            Self::Identifier(_) | Self::Literal(_) => Vec::new(),
        }
    }
}

impl Symbol for AstNode<'_> {
    fn id(&self) -> NodeId {
        self.as_symbol().id()
    }

    fn name(&self) -> Cow<'_, str> {
        self.as_symbol().name()
    }

    fn is_terminal_symbol(&self) -> bool {
        self.as_symbol().is_terminal_symbol()
    }
}

#[cfg(test)]
mod tests {
    use super::{
        starts_uppercase, Expression, Factor, FactorValue, Identifier, Literal, Symbol, Term,
    };
    use crate::model::ids::IdGen;

    #[test]
    fn uppercase_detection_is_unicode_aware() {
        assert!(starts_uppercase("Expr"));
        assert!(starts_uppercase("Ärger"));
        assert!(!starts_uppercase("digit"));
        assert!(!starts_uppercase("\"A\""));
        assert!(!starts_uppercase(""));
    }

    #[test]
    fn literal_is_always_terminal() {
        let mut ids = IdGen::new();
        let lit = Literal::new(ids.next_id(), "BEGIN");
        assert!(lit.is_terminal_symbol());
        assert_eq!(lit.name(), "\"BEGIN\"");
        assert_eq!(lit.text(), "BEGIN");
    }

    #[test]
    fn identifier_case_decides_terminal_classification() {
        let mut ids = IdGen::new();
        assert!(Identifier::new(ids.next_id(), "digit").is_terminal_symbol());
        assert!(!Identifier::new(ids.next_id(), "Digit").is_terminal_symbol());
    }

    #[test]
    fn same_symbol_ignores_ids() {
        let mut ids = IdGen::new();
        let a = Identifier::new(ids.next_id(), "Item");
        let b = Identifier::new(ids.next_id(), "Item");
        assert_ne!(a.id(), b.id());
        assert!(a.same_symbol(&b));
    }

    #[test]
    fn identifier_and_literal_with_same_text_differ() {
        let mut ids = IdGen::new();
        let ident = Identifier::new(ids.next_id(), "a");
        let lit = Literal::new(ids.next_id(), "a");
        assert!(!ident.same_symbol(&lit));
    }

    #[test]
    fn factor_display_wraps_nested_expressions() {
        let mut ids = IdGen::new();
        let outer_id = ids.next_id();
        let expr_id = ids.next_id();
        let term_id = ids.next_id();
        let inner_factor_id = ids.next_id();
        let ident = Identifier::new(ids.next_id(), "x");
        let inner = Factor::new(inner_factor_id, FactorValue::Identifier(ident));
        let expr = Expression::new(expr_id, vec![Term::new(term_id, vec![inner])]);
        let optional = Factor::new(outer_id, FactorValue::Optionally(expr));
        assert_eq!(optional.to_string(), "[x]");
        assert!(optional.is_terminal_symbol());
    }
}
