// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Railyard-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Railyard and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Grammar data model.
//!
//! A [`Grammar`] owns the parsed [`Syntax`] tree; diagrams borrow it read-only.

pub mod ast;
#[cfg(test)]
pub(crate) mod fixtures;
pub mod grammar;
pub mod ids;

pub use ast::{
    AstNode, Expression, Factor, FactorKind, FactorValue, Identifier, Literal, Production, Symbol,
    Syntax, Term,
};
pub use grammar::{Grammar, ProductionNotFoundError};
pub use ids::{IdGen, NodeId, PathKey, PathKeyError};
