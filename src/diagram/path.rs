// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Railyard-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Railyard and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use smallvec::SmallVec;

use crate::model::ids::{NodeId, PathKey};

/// Root-to-node chain of AST ids, built on the call stack.
///
/// Each recursion step borrows its parent and adds one id, so leaving a call drops the
/// segment with it; there is nothing to pop.
#[derive(Debug, Clone, Copy)]
pub struct Path<'p> {
    parent: Option<&'p Path<'p>>,
    id: NodeId,
    depth: usize,
}

impl Path<'static> {
    pub fn root(id: NodeId) -> Self {
        Self { parent: None, id, depth: 1 }
    }
}

impl<'p> Path<'p> {
    pub fn push(&self, id: NodeId) -> Path<'_> {
        Path { parent: Some(self), id, depth: self.depth + 1 }
    }

    /// Id of the last node on the chain.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Number of ids on the chain, root included.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Ids in root-to-leaf order.
    pub fn ids(&self) -> SmallVec<[NodeId; 32]> {
        let mut ids = SmallVec::with_capacity(self.depth);
        let mut cursor = Some(self);
        while let Some(path) = cursor {
            ids.push(path.id);
            cursor = path.parent;
        }
        ids.reverse();
        ids
    }

    pub fn key(&self) -> PathKey {
        PathKey::from_ids(&self.ids())
    }
}
