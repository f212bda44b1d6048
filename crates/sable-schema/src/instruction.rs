// SPDX-License-Identifier: (MIT OR Apache-2.0)

//! Instruction records.
//!
//! Every instruction is a small envelope plus a tagged payload; the
//! payload set below is the exhaustive opcode surface. Placeholder
//! variants (`CatchPad`, `CatchSwitch`, ...) reserve tags for exception
//! handling detail that is not yet carried.

use serde::{Deserialize, Serialize};

use crate::constant::Constant;
use crate::typing::Type;
use crate::value::{InlineAsm, Value};

/// The per-instruction envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instruction {
    pub ty: Type,
    /// Label in the enclosing function's instruction namespace.
    pub index: usize,
    /// Human-readable SSA name, when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub repr: Inst,
}

/// One incoming edge of a phi.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhiOption {
    /// Label of the incoming block.
    pub block: usize,
    pub value: Value,
}

/// One non-default switch case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwitchCase {
    /// Label of the target block.
    pub block: usize,
    pub value: Constant,
}

/// The tagged instruction payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[allow(clippy::upper_case_acronyms)]
pub enum Inst {
    // memory
    Alloca {
        allocated_type: Type,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        size: Option<Value>,
        address_space: usize,
    },
    Load {
        pointee_type: Type,
        pointer: Value,
        ordering: String,
        address_space: usize,
    },
    Store {
        pointee_type: Type,
        pointer: Value,
        value: Value,
        ordering: String,
        address_space: usize,
    },
    VAArg {
        pointer: Value,
    },
    // calls
    Intrinsic {
        callee: Value,
        target_type: Type,
        args: Vec<Value>,
    },
    CallDirect {
        callee: Value,
        target_type: Type,
        args: Vec<Value>,
    },
    CallIndirect {
        callee: Value,
        target_type: Type,
        args: Vec<Value>,
    },
    CallAsm {
        #[serde(rename = "asm")]
        asm_code: InlineAsm,
        args: Vec<Value>,
    },
    // unary, binary, comparison, cast
    Unary {
        opcode: String,
        operand: Value,
    },
    Binary {
        opcode: String,
        lhs: Value,
        rhs: Value,
    },
    Compare {
        predicate: String,
        operand_type: Type,
        lhs: Value,
        rhs: Value,
    },
    Cast {
        opcode: String,
        src_ty: Type,
        dst_ty: Type,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        src_address_space: Option<usize>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        dst_address_space: Option<usize>,
        operand: Value,
    },
    Freeze {
        operand: Value,
    },
    // pointer arithmetic
    GEP {
        src_pointee_ty: Type,
        dst_pointee_ty: Type,
        pointer: Value,
        indices: Vec<Value>,
        address_space: usize,
    },
    // choice
    ITE {
        cond: Value,
        then_value: Value,
        else_value: Value,
    },
    Phi {
        options: Vec<PhiOption>,
    },
    // aggregates
    GetValue {
        from_ty: Type,
        aggregate: Value,
        indices: Vec<usize>,
    },
    SetValue {
        aggregate: Value,
        value: Value,
        indices: Vec<usize>,
    },
    GetElement {
        vec_ty: Type,
        vector: Value,
        slot: Value,
    },
    SetElement {
        vector: Value,
        value: Value,
        slot: Value,
    },
    ShuffleVector {
        lhs: Value,
        rhs: Value,
        mask: Vec<i64>,
    },
    // concurrency
    Fence {
        ordering: String,
        scope: String,
    },
    AtomicCmpXchg {
        pointee_type: Type,
        pointer: Value,
        value_cmp: Value,
        value_xchg: Value,
        ordering_success: String,
        ordering_failure: String,
        scope: String,
        address_space: usize,
    },
    AtomicRMW {
        pointee_type: Type,
        pointer: Value,
        value: Value,
        opcode: String,
        ordering: String,
        scope: String,
        address_space: usize,
    },
    // exception handling
    LandingPad {
        clauses: Vec<Constant>,
        is_cleanup: bool,
    },
    CatchPad,
    CleanupPad,
    // terminators
    Return {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        value: Option<Value>,
    },
    Branch {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        cond: Option<Value>,
        targets: Vec<usize>,
    },
    Switch {
        cond: Value,
        cond_ty: Type,
        cases: Vec<SwitchCase>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        default: Option<usize>,
    },
    IndirectJump {
        address: Value,
        targets: Vec<usize>,
    },
    InvokeDirect {
        callee: Value,
        target_type: Type,
        args: Vec<Value>,
        normal: usize,
        unwind: usize,
    },
    InvokeIndirect {
        callee: Value,
        target_type: Type,
        args: Vec<Value>,
        normal: usize,
        unwind: usize,
    },
    InvokeAsm {
        #[serde(rename = "asm")]
        asm_code: InlineAsm,
        args: Vec<Value>,
        normal: usize,
        unwind: usize,
    },
    Resume {
        value: Value,
    },
    CatchSwitch,
    CatchReturn,
    CleanupReturn,
    CallBranch,
    Unreachable,
}
