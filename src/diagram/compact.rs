// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Railyard-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Railyard and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Term compaction.
//!
//! A term like `a b { b }` says "one or more `b`" the long way round. Instead of drawing the
//! mandatory copy followed by a `ZeroOrMore`, the leading copy is folded into a single
//! `OneOrMore` loop. Strategies are tried in order and the first whose shape fits wins:
//!
//! 1. full match: every factor of the repetition body repeats right before it
//!    (`a b C { b C }`), so the preceding copy is dropped and the body loops;
//! 2. separator: only the tail of the body matches and the unmatched head is all terminals
//!    (`Item { "," Item }`), so the tail loops forward and the head is drawn on the return edge;
//! 3. otherwise the factors are drawn in order, the repetition as an ordinary loop.

use super::generate::{DiagramError, Walk};
use super::ir::DiagramNode;
use super::path::Path;
use crate::model::ast::{Expression, Factor, FactorValue, Symbol, Term};

/// The first repetition factor of a term, with its position.
struct Repetition<'t> {
    index: usize,
    factor: &'t Factor,
    body: &'t Expression,
}

fn first_repetition(factors: &[Factor]) -> Option<Repetition<'_>> {
    let index = factors.iter().position(Factor::is_repetition)?;
    let factor = &factors[index];
    let FactorValue::Repetition(body) = factor.value() else {
        return None;
    };
    Some(Repetition { index, factor, body })
}

/// Length of the run of `outer` factors ending right before the repetition that structurally
/// equals the tail of `inner`.
fn matched_suffix(outer: &[Factor], inner: &[Factor]) -> usize {
    outer.iter().rev().zip(inner.iter().rev()).take_while(|(a, b)| a.same_symbol(*b)).count()
}

impl Walk<'_, '_> {
    pub(super) fn term(
        &mut self,
        parent: &Path<'_>,
        term: &Term,
    ) -> Result<DiagramNode, DiagramError> {
        let path = parent.push(term.id());
        let factors = term.factors();

        if let [single] = factors {
            log::debug!("term `{term}`: single factor");
            return self.factor(&path, single);
        }
        let Some(rep) = first_repetition(factors) else {
            log::debug!("term `{term}`: no repetition");
            return self.plain_sequence(&path, factors);
        };
        let Some(inner) = rep.body.single_term() else {
            log::debug!("term `{term}`: repetition has alternatives");
            return self.plain_sequence(&path, factors);
        };

        let inner_factors = inner.factors();
        let matched = matched_suffix(&factors[..rep.index], inner_factors);
        let rep_path = path.push(rep.factor.id());

        if matched == inner_factors.len() {
            log::debug!("term `{term}`: full match of {matched} factor(s)");
            let body = self.expression(&rep_path, rep.body)?;
            let looped = DiagramNode::one_or_more(body, None);
            return self.replace_prefix(&path, factors, &rep, matched, looped);
        }

        let head_len = inner_factors.len() - matched;
        let head = &inner_factors[..head_len];
        if matched > 0 && head.iter().all(Factor::is_terminal_symbol) {
            log::debug!("term `{term}`: {head_len} separator factor(s) on the return edge");
            let expr_path = rep_path.push(rep.body.id());
            let inner_path = expr_path.push(inner.id());
            let forward = self.factors(&inner_path, &inner_factors[head_len..])?;
            let back = self.factors(&inner_path, head)?;
            let looped = DiagramNode::one_or_more(
                DiagramNode::sequence_or_single(forward),
                Some(DiagramNode::sequence_or_single(back)),
            );
            return self.replace_prefix(&path, factors, &rep, matched, looped);
        }

        log::debug!("term `{term}`: no compaction");
        self.plain_sequence(&path, factors)
    }

    fn factors(
        &mut self,
        path: &Path<'_>,
        factors: &[Factor],
    ) -> Result<Vec<DiagramNode>, DiagramError> {
        factors.iter().map(|factor| self.factor(path, factor)).collect()
    }

    fn plain_sequence(
        &mut self,
        path: &Path<'_>,
        factors: &[Factor],
    ) -> Result<DiagramNode, DiagramError> {
        Ok(DiagramNode::sequence(self.factors(path, factors)?))
    }

    /// Draws `factors` with the repetition replaced by `looped` and the `matched` factors right
    /// before it dropped.
    fn replace_prefix(
        &mut self,
        path: &Path<'_>,
        factors: &[Factor],
        rep: &Repetition<'_>,
        matched: usize,
        looped: DiagramNode,
    ) -> Result<DiagramNode, DiagramError> {
        let mut items = self.factors(path, &factors[..rep.index - matched])?;
        items.push(looped);
        items.extend(self.factors(path, &factors[rep.index + 1..])?);
        Ok(DiagramNode::sequence_or_single(items))
    }
}
