// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Railyard-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Railyard and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Grammar text formats.
//!
//! Currently this is Wirth Syntax Notation with `()`, `{}` and `[]` extensions.

pub mod wsn;
