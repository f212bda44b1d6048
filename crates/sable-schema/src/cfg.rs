// SPDX-License-Identifier: (MIT OR Apache-2.0)

//! Basic-block records.

use serde::{Deserialize, Serialize};

use crate::instruction::Instruction;

/// A serialized basic block. The terminator sits outside the body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    /// Label in the enclosing function's block namespace.
    pub label: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub body: Vec<Instruction>,
    pub terminator: Instruction,
}
