// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Railyard-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Railyard and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;
use std::str::FromStr;

use smol_str::SmolStr;

use super::ast::{Production, Syntax};
use crate::format::wsn::{parse_grammar, GrammarParseError};

/// Minimum similarity for a declared name to be offered as a suggestion.
const SUGGESTION_MIN_RATIO: f64 = 0.6;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductionNotFoundError {
    name: SmolStr,
    suggestion: Option<SmolStr>,
}

impl ProductionNotFoundError {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Closest declared production name, if any is reasonably similar.
    pub fn suggestion(&self) -> Option<&str> {
        self.suggestion.as_deref()
    }
}

impl fmt::Display for ProductionNotFoundError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "production '{}' not found", self.name)?;
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{suggestion}'?)")?;
        }
        Ok(())
    }
}

impl std::error::Error for ProductionNotFoundError {}

/// A parsed grammar. Immutable once built.
#[derive(Debug, Clone)]
pub struct Grammar {
    syntax: Syntax,
}

impl Grammar {
    pub fn new(syntax: Syntax) -> Self {
        Self { syntax }
    }

    pub fn syntax(&self) -> &Syntax {
        &self.syntax
    }

    pub fn productions(&self) -> &[Production] {
        self.syntax.productions()
    }

    /// First production whose left-hand side is `name`.
    ///
    /// Later productions with the same name are never returned; they stay listed in
    /// [`Grammar::start_symbols`] but are unreachable by name.
    pub fn find_production(&self, name: &str) -> Option<&Production> {
        self.productions().iter().find(|prod| prod.ident().as_str() == name)
    }

    pub fn production(&self, name: &str) -> Result<&Production, ProductionNotFoundError> {
        self.find_production(name).ok_or_else(|| ProductionNotFoundError {
            name: SmolStr::new(name),
            suggestion: self.closest_name(name),
        })
    }

    /// Left-hand side names in declaration order, duplicates included.
    pub fn start_symbols(&self) -> Vec<&str> {
        self.productions().iter().map(|prod| prod.ident().as_str()).collect()
    }

    fn closest_name(&self, name: &str) -> Option<SmolStr> {
        let mut best: Option<(f64, &str)> = None;
        for candidate in self.start_symbols() {
            let ratio = rapidfuzz::fuzz::ratio(name.chars(), candidate.chars());
            if ratio < SUGGESTION_MIN_RATIO {
                continue;
            }
            if best.map_or(true, |(best_ratio, _)| ratio > best_ratio) {
                best = Some((ratio, candidate));
            }
        }
        best.map(|(_, candidate)| SmolStr::new(candidate))
    }
}

impl FromStr for Grammar {
    type Err = GrammarParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(parse_grammar(s)?))
    }
}

impl fmt::Display for Grammar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.syntax)
    }
}
