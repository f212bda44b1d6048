// SPDX-License-Identifier: (MIT OR Apache-2.0)

//! Value serialization - dispatch over anything an operand can be.

use sable_ir::{BlockId, FuncId, Ty, Value};
use sable_schema as schema;

use crate::context::{FnContext, Serializer};
use crate::fatal;
use crate::types::serialize_type;

impl Serializer<'_> {
    /// Serialize one operand against the enclosing function's context.
    /// Block references alone may cite another function's namespace.
    pub(crate) fn serialize_value(&self, ctxt: &FnContext, value: &Value) -> schema::Value {
        match value {
            Value::Argument { ty, arg } => schema::Value::Argument {
                ty: serialize_type(ty),
                index: ctxt.get_argument(*arg),
            },
            Value::Constant(constant) => schema::Value::Constant(self.serialize_constant(constant)),
            Value::Inst { ty, inst } => schema::Value::Instruction {
                ty: serialize_type(ty),
                index: ctxt.get_instruction(*inst),
            },
            Value::Block { func, block } => {
                let (func, block) = self.block_reference(*func, *block);
                schema::Value::Label { func, block }
            }
            Value::Metadata => schema::Value::Metadata,
        }
    }

    /// Resolve a (possibly cross-function) block reference to the owning
    /// function's name and the block's label there. Requires the prepare
    /// phase to have registered the function.
    pub(crate) fn block_reference(&self, func: FuncId, block: BlockId) -> (String, usize) {
        let Some(target) = self.module().function(func) else {
            fatal!("block reference into unknown function {func:?}");
        };
        let Some(name) = target.name.clone() else {
            fatal!("block address referring to an unnamed function");
        };
        let Some(ctxt) = self.context(func) else {
            fatal!("function context not ready: {name}");
        };
        (name, ctxt.get_block(block))
    }
}

/// The type of an operand that must have one.
pub(crate) fn value_ty(value: &Value) -> &Ty {
    match value.ty() {
        Some(ty) => ty,
        None => fatal!("operand without a first-class type: {value:?}"),
    }
}

/// The address space behind an operand that must be pointer-shaped.
pub(crate) fn pointer_space(value: &Value) -> usize {
    let ty = value_ty(value);
    match ty.pointer_address_space() {
        Some(space) => space,
        None => fatal!("pointer operand has non-pointer type {ty:?}"),
    }
}
