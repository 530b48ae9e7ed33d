// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Railyard-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Railyard and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::borrow::{Borrow, Cow};
use std::fmt;
use std::str::FromStr;

use schemars::{json_schema, JsonSchema, Schema, SchemaGenerator};
use serde::{Deserialize, Serialize};

/// Separator between node ids inside a [`PathKey`].
pub const PATH_SEPARATOR: char = '-';

/// Identity of a single AST node within one parse.
///
/// Ids are handed out by an [`IdGen`] owned by the parser; they are only used to build
/// diagram paths and never take part in structural equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

impl NodeId {
    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Sequential id allocator threaded explicitly through a parse.
///
/// A fresh generator always starts at `1`, so parsing the same text twice yields the same ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdGen {
    next: u32,
}

impl Default for IdGen {
    fn default() -> Self {
        Self { next: 1 }
    }
}

impl IdGen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&mut self) -> NodeId {
        let id = NodeId(self.next);
        self.next += 1;
        id
    }

    /// Number of ids handed out so far.
    pub fn issued(&self) -> u32 {
        self.next - 1
    }
}

/// The chain of node ids from the diagram root down to one node occurrence, rendered as
/// `"1-3-7"`.
///
/// This is the unit of expand/collapse state exchanged with callers, so it validates its
/// textual form when built from untrusted input.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PathKey(String);

impl PathKey {
    pub fn new(value: impl Into<String>) -> Result<Self, PathKeyError> {
        let value = value.into();
        validate_path_key(&value)?;
        Ok(Self(value))
    }

    pub fn from_ids(ids: &[NodeId]) -> Self {
        let mut out = String::with_capacity(ids.len() * 4);
        let mut buf = itoa::Buffer::new();
        for (idx, id) in ids.iter().enumerate() {
            if idx > 0 {
                out.push(PATH_SEPARATOR);
            }
            out.push_str(buf.format(id.get()));
        }
        Self(out)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of ids in the chain.
    pub fn depth(&self) -> usize {
        if self.0.is_empty() {
            return 0;
        }
        self.0.split(PATH_SEPARATOR).count()
    }

    pub fn ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        // Validated on construction; every segment is a u32.
        self.0
            .split(PATH_SEPARATOR)
            .filter(|segment| !segment.is_empty())
            .filter_map(|segment| segment.parse::<u32>().ok().map(NodeId))
    }
}

impl JsonSchema for PathKey {
    fn schema_name() -> Cow<'static, str> {
        "PathKey".into()
    }

    fn json_schema(_generator: &mut SchemaGenerator) -> Schema {
        json_schema!({
            "type": "string",
            "pattern": "^(0|[1-9][0-9]*)(-(0|[1-9][0-9]*))*$"
        })
    }
}

impl fmt::Display for PathKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for PathKey {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl Borrow<str> for PathKey {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl FromStr for PathKey {
    type Err = PathKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s.to_owned())
    }
}

impl TryFrom<String> for PathKey {
    type Error = PathKeyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PathKey> for String {
    fn from(value: PathKey) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathKeyError {
    Empty,
    EmptySegment { index: usize },
    InvalidSegment { index: usize, segment: String },
}

impl fmt::Display for PathKeyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("path key must not be empty"),
            Self::EmptySegment { index } => {
                write!(f, "path key has an empty segment at position {index}")
            }
            Self::InvalidSegment { index, segment } => write!(
                f,
                "path key segment {index} is not a node id: {segment:?} (expected digits)"
            ),
        }
    }
}

impl std::error::Error for PathKeyError {}

fn validate_path_key(value: &str) -> Result<(), PathKeyError> {
    if value.is_empty() {
        return Err(PathKeyError::Empty);
    }
    for (index, segment) in value.split(PATH_SEPARATOR).enumerate() {
        if segment.is_empty() {
            return Err(PathKeyError::EmptySegment { index });
        }
        let canonical = segment.bytes().all(|b| b.is_ascii_digit())
            && !(segment.len() > 1 && segment.starts_with('0'));
        if !canonical || segment.parse::<u32>().is_err() {
            return Err(PathKeyError::InvalidSegment { index, segment: segment.to_owned() });
        }
    }
    Ok(())
}
