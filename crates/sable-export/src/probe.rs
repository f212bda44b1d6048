// SPDX-License-Identifier: (MIT OR Apache-2.0)

//! Predicates that classify intrinsics and debug-info records.
//!
//! Only debug-info intrinsics are filtered from the output; every other
//! `llvm.*` function is emitted, flagged as intrinsic.

use sable_ir::{Callee, ConstKind, Function, Instruction, InstKind, Module, Value};

/// Debug-info intrinsics all live under the `llvm.dbg.` prefix
/// (`declare`, `value`, `addr`, `assign`, `label`).
pub fn is_debug_intrinsic_name(name: &str) -> bool {
    name.starts_with("llvm.dbg.")
}

/// A function that *is* a debug-info intrinsic; neither labeled nor
/// emitted.
pub fn is_debug_function(func: &Function) -> bool {
    matches!(&func.name, Some(name) if is_debug_intrinsic_name(name))
}

/// An instruction is a debug instruction when it calls a debug-info
/// intrinsic; filtered out of block bodies.
pub fn is_debug_instruction(inst: &Instruction) -> bool {
    let InstKind::Call {
        callee: Callee::Value(Value::Constant(callee)),
        ..
    } = &inst.kind
    else {
        return false;
    };
    matches!(
        &callee.kind,
        ConstKind::Function { name: Some(name) } if is_debug_intrinsic_name(name)
    )
}

/// Intrinsic classification. The host flag alone is not reliable across
/// IR versions; the `llvm.` name prefix catches functions (some memset
/// variants) that carry the prefix without the flag.
pub fn is_intrinsic_function(func: &Function) -> bool {
    func.is_intrinsic || matches!(&func.name, Some(name) if name.starts_with("llvm."))
}

/// Whether a call to the named function targets an intrinsic. Falls back
/// to the name prefix when the module holds no declaration to consult.
pub fn is_intrinsic_callee(module: &Module, name: &str) -> bool {
    match module.function_named(name) {
        Some(func) => is_intrinsic_function(func),
        None => name.starts_with("llvm."),
    }
}
