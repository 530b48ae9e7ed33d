// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Railyard-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Railyard and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeSet;
use std::fmt;

use super::ir::{DiagramIr, DiagramNode};
use super::path::Path;
use crate::model::ast::{Expression, Factor, FactorValue, Identifier, Production, Symbol};
use crate::model::grammar::{Grammar, ProductionNotFoundError};
use crate::model::ids::PathKey;

/// Longest path (in ids) at which a non-terminal may still be expanded.
///
/// Expansion only refuses to expand the exact same path twice, so a recursive grammar can keep
/// producing new, longer paths. This cap is what stops it.
pub const MAX_EXPANSION_DEPTH: usize = 30;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagramError {
    ProductionNotFound(ProductionNotFoundError),
    /// No start symbol was given and the grammar has no productions.
    EmptyGrammar,
}

impl fmt::Display for DiagramError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ProductionNotFound(err) => write!(f, "diagram error: {err}"),
            Self::EmptyGrammar => f.write_str("diagram error: grammar has no productions"),
        }
    }
}

impl std::error::Error for DiagramError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ProductionNotFound(err) => Some(err),
            Self::EmptyGrammar => None,
        }
    }
}

impl From<ProductionNotFoundError> for DiagramError {
    fn from(value: ProductionNotFoundError) -> Self {
        Self::ProductionNotFound(value)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiagramOptions {
    /// Production to draw; the first declared production when unset.
    pub start_symbol: Option<String>,
}

impl DiagramOptions {
    pub fn with_start_symbol(mut self, name: impl Into<String>) -> Self {
        self.start_symbol = Some(name.into());
        self
    }
}

/// Railroad-diagram generator for one production of a [`Grammar`].
///
/// Holds no traversal state between calls; every generation pass starts from scratch.
#[derive(Debug, Clone)]
pub struct Diagram<'g> {
    grammar: &'g Grammar,
    options: DiagramOptions,
}

impl<'g> Diagram<'g> {
    pub fn from_grammar(grammar: &'g Grammar, start_symbol: Option<&str>) -> Self {
        Self::with_options(
            grammar,
            DiagramOptions { start_symbol: start_symbol.map(str::to_owned) },
        )
    }

    pub fn with_options(grammar: &'g Grammar, options: DiagramOptions) -> Self {
        Self { grammar, options }
    }

    pub fn grammar(&self) -> &'g Grammar {
        self.grammar
    }

    pub fn options(&self) -> &DiagramOptions {
        &self.options
    }

    fn start_production(&self) -> Result<&'g Production, DiagramError> {
        match self.options.start_symbol.as_deref() {
            Some(name) => Ok(self.grammar.production(name)?),
            None => self.grammar.productions().first().ok_or(DiagramError::EmptyGrammar),
        }
    }

    /// Builds the diagram, expanding exactly the non-terminal occurrences listed in `expanding`.
    ///
    /// Paths that are not reachable are ignored. Fails if an expanded occurrence names a
    /// production that does not exist.
    pub fn generate_diagram(
        &self,
        expanding: &BTreeSet<PathKey>,
    ) -> Result<DiagramIr, DiagramError> {
        let start = self.start_production()?;
        let mut walk = Walk::new(self.grammar, Expansion::Selected(expanding));
        let root = walk.production(start)?;
        Ok(DiagramIr { start_symbol: start.ident().as_str().to_owned(), root })
    }

    /// Builds the diagram with every non-terminal collapsed.
    pub fn generate_diagram_default(&self) -> Result<DiagramIr, DiagramError> {
        self.generate_diagram(&BTreeSet::new())
    }

    /// Every non-terminal occurrence path reachable when everything is expanded, limited to
    /// paths shorter than [`MAX_EXPANSION_DEPTH`].
    ///
    /// Passing the result to [`Diagram::generate_diagram`] gives the fully expanded diagram.
    pub fn all_expandable_paths(&self) -> Result<BTreeSet<PathKey>, DiagramError> {
        let start = self.start_production()?;
        let mut walk = Walk::new(self.grammar, Expansion::Collect(BTreeSet::new()));
        walk.production(start)?;
        match walk.expansion {
            Expansion::Collect(found) => Ok(found),
            Expansion::Selected(_) => Ok(BTreeSet::new()),
        }
    }
}

enum Expansion<'s> {
    Selected(&'s BTreeSet<PathKey>),
    /// Expand everything allowed by the depth cap, remembering each expanded path.
    Collect(BTreeSet<PathKey>),
}

/// One generation pass.
pub(super) struct Walk<'g, 's> {
    grammar: &'g Grammar,
    expansion: Expansion<'s>,
}

impl<'g, 's> Walk<'g, 's> {
    fn new(grammar: &'g Grammar, expansion: Expansion<'s>) -> Self {
        Self { grammar, expansion }
    }

    fn should_expand(&mut self, path: &Path<'_>, key: &PathKey) -> bool {
        if path.depth() >= MAX_EXPANSION_DEPTH {
            return false;
        }
        match &mut self.expansion {
            Expansion::Selected(expanding) => expanding.contains(key),
            Expansion::Collect(found) => {
                found.insert(key.clone());
                true
            }
        }
    }

    fn production(&mut self, prod: &Production) -> Result<DiagramNode, DiagramError> {
        let path = Path::root(prod.id());
        let inner = self.expression(&path, prod.expression())?;
        Ok(DiagramNode::sequence(vec![inner]))
    }

    pub(super) fn expression(
        &mut self,
        parent: &Path<'_>,
        expr: &Expression,
    ) -> Result<DiagramNode, DiagramError> {
        let path = parent.push(expr.id());
        if let Some(term) = expr.single_term() {
            return self.term(&path, term);
        }
        let options = expr
            .terms()
            .iter()
            .map(|term| self.term(&path, term))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(DiagramNode::choice(options.len() / 2, options))
    }

    pub(super) fn factor(
        &mut self,
        parent: &Path<'_>,
        factor: &Factor,
    ) -> Result<DiagramNode, DiagramError> {
        let path = parent.push(factor.id());
        match factor.value() {
            FactorValue::Identifier(ident) => self.identifier(&path, ident),
            FactorValue::Literal(lit) => {
                Ok(DiagramNode::terminal(lit.text(), path.push(lit.id()).key()))
            }
            FactorValue::Group(expr) => {
                Ok(DiagramNode::sequence(vec![self.expression(&path, expr)?]))
            }
            FactorValue::Optionally(expr) => {
                Ok(DiagramNode::optional(self.expression(&path, expr)?))
            }
            FactorValue::Repetition(expr) => self.repetition(&path, expr),
        }
    }

    /// A repetition that term compaction did not absorb.
    fn repetition(
        &mut self,
        path: &Path<'_>,
        expr: &Expression,
    ) -> Result<DiagramNode, DiagramError> {
        let all_terminal = expr.terms().len() > 1
            && expr
                .terms()
                .iter()
                .all(|term| term.factors().iter().all(Factor::is_terminal_symbol));
        if !all_terminal {
            return Ok(DiagramNode::zero_or_more(self.expression(path, expr)?));
        }

        // Each alternative is drawn on the loop's return edge, which reads right to left.
        log::debug!("repetition {{{expr}}}: parallel terminal alternatives");
        let expr_path = path.push(expr.id());
        let mut options = Vec::with_capacity(expr.terms().len());
        for term in expr.terms() {
            let term_path = expr_path.push(term.id());
            let mut items = term
                .factors()
                .iter()
                .map(|factor| self.factor(&term_path, factor))
                .collect::<Result<Vec<_>, _>>()?;
            items.reverse();
            options.push(DiagramNode::sequence_or_single(items));
        }
        let choice = DiagramNode::choice(options.len() / 2, options);
        Ok(DiagramNode::one_or_more(DiagramNode::Skip, Some(choice)))
    }

    fn identifier(
        &mut self,
        parent: &Path<'_>,
        ident: &Identifier,
    ) -> Result<DiagramNode, DiagramError> {
        let path = parent.push(ident.id());
        let key = path.key();
        if !ident.is_non_terminal() {
            return Ok(DiagramNode::terminal(ident.as_str(), key));
        }
        if !self.should_expand(&path, &key) {
            log::trace!("collapsed {} at {key}", ident.as_str());
            return Ok(DiagramNode::non_terminal(ident.as_str(), key));
        }

        log::trace!("expanding {} at {key}", ident.as_str());
        let grammar = self.grammar;
        let prod = grammar.production(ident.as_str())?;
        let inner = self.expression(&path, prod.expression())?;
        Ok(DiagramNode::group(ident.as_str(), key, inner))
    }
}
