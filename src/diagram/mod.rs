// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Railyard-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Railyard and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Railroad-diagram generation.
//!
//! [`Diagram`] walks one production of a [`crate::model::Grammar`] and produces a
//! [`DiagramIr`] tree. Non-terminal occurrences are addressed by [`crate::model::PathKey`]s;
//! the caller decides which of them are drawn expanded.

mod compact;
mod generate;
pub mod ir;
pub mod path;

pub use generate::{Diagram, DiagramError, DiagramOptions, MAX_EXPANSION_DEPTH};
pub use ir::{DiagramIr, DiagramNode};
