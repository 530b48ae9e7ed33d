// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Railyard-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Railyard and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Railyard: WSN grammars to railroad diagrams.
//!
//! Grammar text is parsed into an id-tagged AST ([`model`], [`format::wsn`]), which
//! [`diagram::Diagram`] turns into a renderer-neutral [`diagram::DiagramIr`] tree.
//!
//! ```
//! use std::collections::BTreeSet;
//! use railyard::{Diagram, Grammar};
//!
//! let grammar: Grammar = "Digits = digit { digit } .".parse()?;
//! let ir = Diagram::from_grammar(&grammar, None).generate_diagram(&BTreeSet::new())?;
//! assert_eq!(ir.root.to_string(), "Sequence(OneOrMore(Terminal(\"digit\")))");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod diagram;
pub mod format;
pub mod model;

pub use diagram::{Diagram, DiagramError, DiagramIr, DiagramNode, DiagramOptions};
pub use format::wsn::{export_grammar, parse_grammar, GrammarParseError};
pub use model::{Grammar, PathKey, ProductionNotFoundError};
