// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Railyard-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Railyard and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

#![allow(dead_code)]

// Shared deterministic benchmark fixtures (no RNG).

use railyard::model::{AstNode, Grammar, Symbol};
use railyard::DiagramNode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Case {
    Small,
    Medium,
    LargeChain,
}

impl Case {
    pub const ALL: [Case; 3] = [Case::Small, Case::Medium, Case::LargeChain];

    pub fn id(self) -> &'static str {
        match self {
            Case::Small => "small",
            Case::Medium => "medium",
            Case::LargeChain => "large_chain",
        }
    }
}

const SMALL: &str = "Path = Dir { Dir } Name .\n\
    Dir = ( Name | \".\" [ \".\" ] ) \"/\" .\n\
    Name = an { an } .";

const MEDIUM: &str = "Syntax = { Production } .\n\
    Production = Identifier \"=\" Expression \".\" .\n\
    Expression = Term { \"|\" Term } .\n\
    Term = Factor { Factor } .\n\
    Factor = Identifier | Literal | \"(\" Expression \")\" | \"[\" Expression \"]\" \
    | \"{\" Expression \"}\" .\n\
    Identifier = letter { letter } .\n\
    Literal = quote character { character } quote .";

/// Letters-only name for production `index` (identifiers cannot contain digits).
fn letters(mut index: usize) -> String {
    let mut out = Vec::new();
    loop {
        out.push(b'a' + (index % 26) as u8);
        index /= 26;
        if index == 0 {
            break;
        }
    }
    out.reverse();
    String::from_utf8(out).unwrap_or_default()
}

/// A chain of productions that each reference the next one, exercising every compaction.
fn large_chain(productions: usize) -> String {
    let mut out = String::new();
    for index in 0..productions {
        let name = letters(index);
        let next = letters(index + 1);
        let tail = if index + 1 < productions { format!(" [ R{next} ]") } else { String::new() };
        out.push_str(&format!(
            "R{name} = t{name} {{ \",\" t{name} }}{tail} | \"(\" x {{ x }} \")\" | a {{ \"x\" | \"y\" z }} .\n"
        ));
    }
    out
}

pub fn source(case: Case) -> String {
    match case {
        Case::Small => SMALL.to_owned(),
        Case::Medium => MEDIUM.to_owned(),
        Case::LargeChain => large_chain(200),
    }
}

pub fn grammar(case: Case) -> Grammar {
    source(case).parse().expect("fixture grammar")
}

/// Cheap structural digest so the optimizer cannot drop the parse.
pub fn checksum_grammar(grammar: &Grammar) -> u64 {
    let mut sum = 0u64;
    grammar.syntax().walk(&mut |node: AstNode<'_>| {
        sum = sum.wrapping_mul(31).wrapping_add(u64::from(node.id().get()));
    });
    sum
}

pub fn checksum_diagram(root: &DiagramNode) -> u64 {
    let mut sum = 0u64;
    root.walk(&mut |node| {
        sum = sum.wrapping_mul(31).wrapping_add(node.kind_name().len() as u64);
    });
    sum
}
