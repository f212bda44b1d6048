// SPDX-License-Identifier: (MIT OR Apache-2.0)

//! In-memory IR graph - the input side of the sable exporter.
//!
//! A [`Module`] owns identified struct types, global variables, and
//! functions; a function owns parameters and basic blocks; a block owns
//! instructions plus exactly one terminator. Values form a DAG of
//! references into this graph, keyed by opaque handles ([`InstId`],
//! [`BlockId`], [`ArgId`]) that carry no ordering guarantees - dense
//! program-order labels are assigned by the exporter, never here.

mod builder;
mod constant;
mod display;
mod function;
mod global;
mod inst;
mod module;
mod types;
mod value;

pub use builder::FunctionBuilder;
pub use constant::{ConstExpr, ConstKind, Constant};
pub use function::{ArgId, BasicBlock, BlockId, Function, InstId, Parameter};
pub use global::GlobalVariable;
pub use inst::{
    BinOp, Callee, CastOp, InlineAsm, InstKind, Instruction, Ordering, PhiIncoming, Predicate,
    RmwOp, SwitchArm, SyncScope, UnaryOp,
};
pub use module::{FuncId, Module, StructDef};
pub use types::{FloatKind, Ty};
pub use value::Value;
