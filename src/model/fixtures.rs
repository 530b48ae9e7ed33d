// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Railyard-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Railyard and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::grammar::Grammar;

pub(crate) const DIGITS: &str = "Digits = digit { digit } .";

pub(crate) const LIST: &str = "List = Item { \",\" Item } .\nItem = name .";

pub(crate) const WEIRD: &str = "Weird = a { b c } .";

pub(crate) const PATH: &str = "Path = Dir { Dir } Name .\n\
    Dir = ( Name | \".\" [ \".\" ] ) \"/\" .\n\
    Name = an { an } .";

pub(crate) const ARITHMETIC: &str = "Expr = Term { ( \"+\" | \"-\" ) Term } .\n\
    Term = Factor { ( \"*\" | \"/\" ) Factor } .\n\
    Factor = number | \"(\" Expr \")\" .";

pub(crate) const SELF_RECURSIVE: &str = "A = \"x\" A .";

pub(crate) fn grammar(input: &str) -> Grammar {
    input.parse().expect("fixture grammar")
}

pub(crate) fn list() -> Grammar {
    grammar(LIST)
}

pub(crate) fn path() -> Grammar {
    grammar(PATH)
}

pub(crate) fn arithmetic() -> Grammar {
    grammar(ARITHMETIC)
}

pub(crate) fn self_recursive() -> Grammar {
    grammar(SELF_RECURSIVE)
}
