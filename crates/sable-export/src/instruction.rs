// SPDX-License-Identifier: (MIT OR Apache-2.0)

//! Instruction serialization - the envelope plus one tagged payload per
//! opcode family. The match below is the exhaustive case analysis at the
//! heart of the exporter; the compiler enforces totality over the
//! instruction sum.

use sable_ir::{Callee, CastOp, ConstKind, InstKind, Instruction, Ty, Value};
use sable_schema as schema;

use crate::asm::serialize_inline_asm;
use crate::context::{FnContext, Serializer};
use crate::fatal;
use crate::probe;
use crate::types::serialize_type;
use crate::value::{pointer_space, value_ty};

/// How a call site targets its callee.
enum CallFlavor {
    Intrinsic,
    Direct,
    Indirect,
}

impl Serializer<'_> {
    pub(crate) fn serialize_instruction(
        &self,
        ctxt: &FnContext,
        inst: &Instruction,
    ) -> schema::Instruction {
        schema::Instruction {
            ty: serialize_type(&inst.ty),
            index: ctxt.get_instruction(inst.id),
            name: inst.name.clone(),
            repr: self.serialize_inst(ctxt, &inst.ty, &inst.kind),
        }
    }

    /// Serialize one instruction payload. `result_ty` is the type of the
    /// instruction's own value; several payloads derive fields from it.
    pub(crate) fn serialize_inst(
        &self,
        ctxt: &FnContext,
        result_ty: &Ty,
        kind: &InstKind,
    ) -> schema::Inst {
        match kind {
            // memory
            InstKind::Alloca { allocated, size } => schema::Inst::Alloca {
                allocated_type: serialize_type(allocated),
                size: size.as_ref().map(|size| self.serialize_value(ctxt, size)),
                address_space: result_pointer_space(result_ty),
            },
            InstKind::Load { pointer, ordering } => schema::Inst::Load {
                pointee_type: serialize_type(result_ty),
                pointer: self.serialize_value(ctxt, pointer),
                ordering: ordering.as_str().to_string(),
                address_space: pointer_space(pointer),
            },
            InstKind::Store {
                pointer,
                value,
                ordering,
            } => schema::Inst::Store {
                pointee_type: serialize_type(value_ty(value)),
                pointer: self.serialize_value(ctxt, pointer),
                value: self.serialize_value(ctxt, value),
                ordering: ordering.as_str().to_string(),
                address_space: pointer_space(pointer),
            },
            InstKind::VaArg { pointer } => schema::Inst::VAArg {
                pointer: self.serialize_value(ctxt, pointer),
            },

            // calls
            InstKind::Call {
                callee,
                signature,
                args,
            } => self.serialize_call(ctxt, callee, signature, args),

            // unary, binary, comparison, cast
            InstKind::Unary { op, operand } => schema::Inst::Unary {
                opcode: op.as_str().to_string(),
                operand: self.serialize_value(ctxt, operand),
            },
            InstKind::Binary { op, lhs, rhs } => schema::Inst::Binary {
                opcode: op.as_str().to_string(),
                lhs: self.serialize_value(ctxt, lhs),
                rhs: self.serialize_value(ctxt, rhs),
            },
            InstKind::Compare {
                predicate,
                lhs,
                rhs,
            } => schema::Inst::Compare {
                predicate: predicate.as_str().to_string(),
                operand_type: serialize_type(value_ty(lhs)),
                lhs: self.serialize_value(ctxt, lhs),
                rhs: self.serialize_value(ctxt, rhs),
            },
            InstKind::Cast { op, operand } => self.serialize_cast(ctxt, result_ty, *op, operand),
            InstKind::Freeze { operand } => schema::Inst::Freeze {
                operand: self.serialize_value(ctxt, operand),
            },

            // pointer arithmetic
            InstKind::Gep {
                src_pointee,
                dst_pointee,
                pointer,
                indices,
            } => schema::Inst::GEP {
                src_pointee_ty: serialize_type(src_pointee),
                dst_pointee_ty: serialize_type(dst_pointee),
                pointer: self.serialize_value(ctxt, pointer),
                indices: indices
                    .iter()
                    .map(|index| self.serialize_value(ctxt, index))
                    .collect(),
                address_space: result_pointer_space(result_ty),
            },

            // choice
            InstKind::Phi { incoming } => schema::Inst::Phi {
                // Pairing is by block identity; each option carries the
                // value bound to that predecessor, wherever the entry
                // sits in the list.
                options: incoming
                    .iter()
                    .map(|edge| schema::PhiOption {
                        block: ctxt.get_block(edge.block),
                        value: self.serialize_value(ctxt, &edge.value),
                    })
                    .collect(),
            },
            InstKind::Select {
                cond,
                then_value,
                else_value,
            } => schema::Inst::ITE {
                cond: self.serialize_value(ctxt, cond),
                then_value: self.serialize_value(ctxt, then_value),
                else_value: self.serialize_value(ctxt, else_value),
            },

            // aggregates
            InstKind::ExtractValue { aggregate, indices } => schema::Inst::GetValue {
                from_ty: serialize_type(value_ty(aggregate)),
                aggregate: self.serialize_value(ctxt, aggregate),
                indices: indices.clone(),
            },
            InstKind::InsertValue {
                aggregate,
                value,
                indices,
            } => schema::Inst::SetValue {
                aggregate: self.serialize_value(ctxt, aggregate),
                value: self.serialize_value(ctxt, value),
                indices: indices.clone(),
            },
            InstKind::ExtractElement { vector, slot } => schema::Inst::GetElement {
                vec_ty: serialize_type(value_ty(vector)),
                vector: self.serialize_value(ctxt, vector),
                slot: self.serialize_value(ctxt, slot),
            },
            InstKind::InsertElement {
                vector,
                value,
                slot,
            } => schema::Inst::SetElement {
                vector: self.serialize_value(ctxt, vector),
                value: self.serialize_value(ctxt, value),
                slot: self.serialize_value(ctxt, slot),
            },
            InstKind::Shuffle { lhs, rhs, mask } => schema::Inst::ShuffleVector {
                lhs: self.serialize_value(ctxt, lhs),
                rhs: self.serialize_value(ctxt, rhs),
                mask: mask.iter().map(|&lane| lane as i64).collect(),
            },

            // concurrency
            InstKind::Fence { ordering, scope } => schema::Inst::Fence {
                ordering: ordering.as_str().to_string(),
                scope: scope.as_str().to_string(),
            },
            InstKind::CmpXchg {
                pointer,
                expected,
                replacement,
                ordering_success,
                ordering_failure,
                scope,
            } => schema::Inst::AtomicCmpXchg {
                pointee_type: serialize_type(value_ty(expected)),
                pointer: self.serialize_value(ctxt, pointer),
                value_cmp: self.serialize_value(ctxt, expected),
                value_xchg: self.serialize_value(ctxt, replacement),
                ordering_success: ordering_success.as_str().to_string(),
                ordering_failure: ordering_failure.as_str().to_string(),
                scope: scope.as_str().to_string(),
                address_space: pointer_space(pointer),
            },
            InstKind::AtomicRmw {
                op,
                pointer,
                value,
                ordering,
                scope,
            } => schema::Inst::AtomicRMW {
                pointee_type: serialize_type(value_ty(value)),
                pointer: self.serialize_value(ctxt, pointer),
                value: self.serialize_value(ctxt, value),
                opcode: op.as_str().to_string(),
                ordering: ordering.as_str().to_string(),
                scope: scope.as_str().to_string(),
                address_space: pointer_space(pointer),
            },

            // exception handling, non-terminator
            InstKind::LandingPad {
                clauses,
                is_cleanup,
            } => schema::Inst::LandingPad {
                clauses: clauses
                    .iter()
                    .map(|clause| self.serialize_constant(clause))
                    .collect(),
                is_cleanup: *is_cleanup,
            },
            InstKind::CatchPad => schema::Inst::CatchPad,
            InstKind::CleanupPad => schema::Inst::CleanupPad,

            // terminators
            InstKind::Return { value } => schema::Inst::Return {
                value: value.as_ref().map(|value| self.serialize_value(ctxt, value)),
            },
            InstKind::Branch { cond, targets } => schema::Inst::Branch {
                cond: cond.as_ref().map(|cond| self.serialize_value(ctxt, cond)),
                targets: targets.iter().map(|&block| ctxt.get_block(block)).collect(),
            },
            InstKind::Switch {
                cond,
                arms,
                default,
            } => schema::Inst::Switch {
                cond_ty: serialize_type(value_ty(cond)),
                cond: self.serialize_value(ctxt, cond),
                cases: arms
                    .iter()
                    .map(|arm| schema::SwitchCase {
                        block: ctxt.get_block(arm.target),
                        value: self.serialize_constant(&arm.value),
                    })
                    .collect(),
                default: default.map(|block| ctxt.get_block(block)),
            },
            InstKind::IndirectJump { address, targets } => schema::Inst::IndirectJump {
                address: self.serialize_value(ctxt, address),
                targets: targets.iter().map(|&block| ctxt.get_block(block)).collect(),
            },
            InstKind::Invoke {
                callee,
                signature,
                args,
                normal,
                unwind,
            } => self.serialize_invoke(ctxt, callee, signature, args, *normal, *unwind),
            InstKind::Resume { value } => schema::Inst::Resume {
                value: self.serialize_value(ctxt, value),
            },
            InstKind::Unreachable => schema::Inst::Unreachable,

            // exception handling, terminator (placeholders)
            InstKind::CatchSwitch => schema::Inst::CatchSwitch,
            InstKind::CatchReturn => schema::Inst::CatchReturn,
            InstKind::CleanupReturn => schema::Inst::CleanupReturn,
            InstKind::CallBranch => schema::Inst::CallBranch,
        }
    }

    fn serialize_call(
        &self,
        ctxt: &FnContext,
        callee: &Callee,
        signature: &Ty,
        args: &[Value],
    ) -> schema::Inst {
        let args = self.serialize_args(ctxt, args);
        match callee {
            Callee::Asm(asm) => schema::Inst::CallAsm {
                asm_code: serialize_inline_asm(asm),
                args,
            },
            Callee::Value(value) => {
                let target_type = serialize_type(signature);
                let callee = self.serialize_value(ctxt, value);
                match self.call_flavor(value) {
                    CallFlavor::Intrinsic => schema::Inst::Intrinsic {
                        callee,
                        target_type,
                        args,
                    },
                    CallFlavor::Direct => schema::Inst::CallDirect {
                        callee,
                        target_type,
                        args,
                    },
                    CallFlavor::Indirect => schema::Inst::CallIndirect {
                        callee,
                        target_type,
                        args,
                    },
                }
            }
        }
    }

    fn serialize_invoke(
        &self,
        ctxt: &FnContext,
        callee: &Callee,
        signature: &Ty,
        args: &[Value],
        normal: sable_ir::BlockId,
        unwind: sable_ir::BlockId,
    ) -> schema::Inst {
        let args = self.serialize_args(ctxt, args);
        let normal = ctxt.get_block(normal);
        let unwind = ctxt.get_block(unwind);
        match callee {
            Callee::Asm(asm) => schema::Inst::InvokeAsm {
                asm_code: serialize_inline_asm(asm),
                args,
                normal,
                unwind,
            },
            Callee::Value(value) => {
                let target_type = serialize_type(signature);
                let callee = self.serialize_value(ctxt, value);
                match self.call_flavor(value) {
                    // intrinsics are never invoked; a direct invoke of an
                    // llvm.* function would be malformed input upstream
                    CallFlavor::Intrinsic | CallFlavor::Direct => schema::Inst::InvokeDirect {
                        callee,
                        target_type,
                        args,
                        normal,
                        unwind,
                    },
                    CallFlavor::Indirect => schema::Inst::InvokeIndirect {
                        callee,
                        target_type,
                        args,
                        normal,
                        unwind,
                    },
                }
            }
        }
    }

    fn serialize_args(&self, ctxt: &FnContext, args: &[Value]) -> Vec<schema::Value> {
        args.iter()
            .map(|arg| self.serialize_value(ctxt, arg))
            .collect()
    }

    fn call_flavor(&self, callee: &Value) -> CallFlavor {
        let Value::Constant(constant) = callee else {
            return CallFlavor::Indirect;
        };
        match &constant.kind {
            ConstKind::Function { name: Some(name) } => {
                if probe::is_intrinsic_callee(self.module(), name) {
                    CallFlavor::Intrinsic
                } else {
                    CallFlavor::Direct
                }
            }
            ConstKind::Function { name: None } => CallFlavor::Direct,
            _ => CallFlavor::Indirect,
        }
    }

    fn serialize_cast(
        &self,
        ctxt: &FnContext,
        result_ty: &Ty,
        op: CastOp,
        operand: &Value,
    ) -> schema::Inst {
        let (src_address_space, dst_address_space) = match op {
            CastOp::PtrToInt => (Some(pointer_space(operand)), None),
            CastOp::IntToPtr => (None, Some(result_pointer_space(result_ty))),
            CastOp::AddrSpaceCast => (
                Some(pointer_space(operand)),
                Some(result_pointer_space(result_ty)),
            ),
            _ => (None, None),
        };
        schema::Inst::Cast {
            opcode: op.as_str().to_string(),
            src_ty: serialize_type(value_ty(operand)),
            dst_ty: serialize_type(result_ty),
            src_address_space,
            dst_address_space,
            operand: self.serialize_value(ctxt, operand),
        }
    }
}

/// Address space of an instruction whose result must be pointer-shaped.
fn result_pointer_space(result_ty: &Ty) -> usize {
    match result_ty.pointer_address_space() {
        Some(space) => space,
        None => fatal!("pointer-producing instruction has non-pointer type {result_ty:?}"),
    }
}
