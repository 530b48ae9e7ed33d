// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Railyard-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Railyard and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::model::ids::PathKey;

/// Railroad-diagram primitive handed to a renderer.
///
/// `Terminal`, `NonTerminal` and `Group` carry the [`PathKey`] of the AST occurrence they were
/// generated from, so a renderer can target that exact occurrence for expand/collapse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DiagramNode {
    Sequence {
        items: Vec<DiagramNode>,
    },
    Choice {
        /// Index of the option drawn as the straight-through path.
        default_index: usize,
        options: Vec<DiagramNode>,
    },
    Optional {
        item: Box<DiagramNode>,
    },
    ZeroOrMore {
        item: Box<DiagramNode>,
    },
    OneOrMore {
        item: Box<DiagramNode>,
        /// Drawn on the loop's return edge.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        repeat: Option<Box<DiagramNode>>,
    },
    Terminal {
        text: String,
        path: PathKey,
    },
    NonTerminal {
        text: String,
        path: PathKey,
    },
    Group {
        label: String,
        path: PathKey,
        item: Box<DiagramNode>,
    },
    Skip,
}

impl DiagramNode {
    pub fn sequence(items: Vec<DiagramNode>) -> Self {
        Self::Sequence { items }
    }

    /// A sequence, unless there is exactly one item, which is returned as is.
    pub fn sequence_or_single(mut items: Vec<DiagramNode>) -> Self {
        if items.len() == 1 {
            if let Some(item) = items.pop() {
                return item;
            }
        }
        Self::Sequence { items }
    }

    pub fn choice(default_index: usize, options: Vec<DiagramNode>) -> Self {
        Self::Choice { default_index, options }
    }

    pub fn optional(item: DiagramNode) -> Self {
        Self::Optional { item: Box::new(item) }
    }

    pub fn zero_or_more(item: DiagramNode) -> Self {
        Self::ZeroOrMore { item: Box::new(item) }
    }

    pub fn one_or_more(item: DiagramNode, repeat: Option<DiagramNode>) -> Self {
        Self::OneOrMore { item: Box::new(item), repeat: repeat.map(Box::new) }
    }

    pub fn terminal(text: impl Into<String>, path: PathKey) -> Self {
        Self::Terminal { text: text.into(), path }
    }

    pub fn non_terminal(text: impl Into<String>, path: PathKey) -> Self {
        Self::NonTerminal { text: text.into(), path }
    }

    pub fn group(label: impl Into<String>, path: PathKey, item: DiagramNode) -> Self {
        Self::Group { label: label.into(), path, item: Box::new(item) }
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Sequence { .. } => "Sequence",
            Self::Choice { .. } => "Choice",
            Self::Optional { .. } => "Optional",
            Self::ZeroOrMore { .. } => "ZeroOrMore",
            Self::OneOrMore { .. } => "OneOrMore",
            Self::Terminal { .. } => "Terminal",
            Self::NonTerminal { .. } => "NonTerminal",
            Self::Group { .. } => "Group",
            Self::Skip => "Skip",
        }
    }

    pub fn path(&self) -> Option<&PathKey> {
        match self {
            Self::Terminal { path, .. }
            | Self::NonTerminal { path, .. }
            | Self::Group { path, .. } => Some(path),
            _ => None,
        }
    }

    pub fn children(&self) -> Vec<&DiagramNode> {
        match self {
            Self::Sequence { items } => items.iter().collect(),
            Self::Choice { options, .. } => options.iter().collect(),
            Self::Optional { item } | Self::ZeroOrMore { item } | Self::Group { item, .. } => {
                vec![item.as_ref()]
            }
            Self::OneOrMore { item, repeat } => {
                let mut out = vec![item.as_ref()];
                out.extend(repeat.as_deref());
                out
            }
            Self::Terminal { .. } | Self::NonTerminal { .. } | Self::Skip => Vec::new(),
        }
    }

    /// Visits this node and all descendants in pre-order.
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a DiagramNode)) {
        visit(self);
        for child in self.children() {
            child.walk(visit);
        }
    }

    /// Multi-line indented rendering, one node per line.
    pub fn outline(&self) -> String {
        let mut out = String::new();
        self.write_outline(&mut out, 0);
        out
    }

    fn write_outline(&self, out: &mut String, depth: usize) {
        for _ in 0..depth {
            out.push_str("  ");
        }
        out.push_str(self.kind_name());
        match self {
            Self::Terminal { text, path } | Self::NonTerminal { text, path } => {
                out.push_str(&format!(" {text:?} @{path}"));
            }
            Self::Group { label, path, .. } => out.push_str(&format!(" {label:?} @{path}")),
            Self::Choice { default_index, .. } => {
                out.push_str(&format!(" default={default_index}"));
            }
            _ => {}
        }
        out.push('\n');
        if let Self::OneOrMore { item, repeat: Some(repeat) } = self {
            item.write_outline(out, depth + 1);
            for _ in 0..=depth {
                out.push_str("  ");
            }
            out.push_str("repeat:\n");
            repeat.write_outline(out, depth + 2);
            return;
        }
        for child in self.children() {
            child.write_outline(out, depth + 1);
        }
    }
}

fn write_list(f: &mut fmt::Formatter<'_>, items: &[DiagramNode]) -> fmt::Result {
    for (idx, item) in items.iter().enumerate() {
        if idx > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

/// Compact one-line form, e.g. `Sequence(Terminal("a"), ZeroOrMore(NonTerminal(B)))`.
impl fmt::Display for DiagramNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sequence { items } => {
                f.write_str("Sequence(")?;
                write_list(f, items)?;
                f.write_str(")")
            }
            Self::Choice { default_index, options } => {
                write!(f, "Choice({default_index}; ")?;
                write_list(f, options)?;
                f.write_str(")")
            }
            Self::Optional { item } => write!(f, "Optional({item})"),
            Self::ZeroOrMore { item } => write!(f, "ZeroOrMore({item})"),
            Self::OneOrMore { item, repeat: None } => write!(f, "OneOrMore({item})"),
            Self::OneOrMore { item, repeat: Some(repeat) } => {
                write!(f, "OneOrMore({item}; {repeat})")
            }
            Self::Terminal { text, .. } => write!(f, "Terminal({text:?})"),
            Self::NonTerminal { text, .. } => write!(f, "NonTerminal({text})"),
            Self::Group { label, item, .. } => write!(f, "Group({label}: {item})"),
            Self::Skip => f.write_str("Skip"),
        }
    }
}

/// A complete diagram for one start symbol.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct DiagramIr {
    pub start_symbol: String,
    pub root: DiagramNode,
}

impl fmt::Display for DiagramIr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.root)
    }
}
