// SPDX-License-Identifier: (MIT OR Apache-2.0)

//! Values - references into the IR graph.

use crate::constant::Constant;
use crate::function::{ArgId, BlockId, InstId};
use crate::module::FuncId;
use crate::types::Ty;

/// Anything an instruction operand can be. Inline-asm, operators, and
/// memory-SSA nodes never occur as bare operands and are unrepresentable
/// here by construction.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Reference to a parameter of the enclosing function.
    Argument { ty: Ty, arg: ArgId },
    Constant(Constant),
    /// Reference to an instruction result in the enclosing function.
    Inst { ty: Ty, inst: InstId },
    /// A basic block used as a value.
    Block { func: FuncId, block: BlockId },
    /// Metadata as a value; contents are not modeled.
    Metadata,
}

impl Value {
    pub fn arg(ty: Ty, arg: ArgId) -> Self {
        Value::Argument { ty, arg }
    }

    pub fn inst(ty: Ty, inst: InstId) -> Self {
        Value::Inst { ty, inst }
    }

    /// The type of this value, when it has one. Block references and
    /// metadata carry no first-class type.
    pub fn ty(&self) -> Option<&Ty> {
        match self {
            Value::Argument { ty, .. } | Value::Inst { ty, .. } => Some(ty),
            Value::Constant(c) => Some(&c.ty),
            Value::Block { .. } | Value::Metadata => None,
        }
    }
}

impl From<Constant> for Value {
    fn from(c: Constant) -> Self {
        Value::Constant(c)
    }
}
