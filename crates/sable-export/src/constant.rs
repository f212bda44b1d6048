// SPDX-License-Identifier: (MIT OR Apache-2.0)

//! Constant serialization, including constant-expression lowering.

use sable_ir::{ConstExpr, ConstKind, Constant, InstKind, Ty, Value};
use sable_schema as schema;

use crate::context::{FnContext, Serializer};
use crate::fatal;
use crate::types::serialize_type;

impl Serializer<'_> {
    /// Serialize a constant into its `{ty, repr}` envelope.
    pub(crate) fn serialize_constant(&self, constant: &Constant) -> schema::Constant {
        schema::Constant {
            ty: serialize_type(&constant.ty),
            repr: self.serialize_const(constant),
        }
    }

    /// The discriminated representation; total over the constant sum.
    pub(crate) fn serialize_const(&self, constant: &Constant) -> schema::Const {
        match &constant.kind {
            ConstKind::Int { value } => schema::Const::Int {
                value: value.clone(),
            },
            ConstKind::Float { value } => schema::Const::Float {
                value: value.clone(),
            },
            ConstKind::Null => schema::Const::Null,
            ConstKind::TokenNone => schema::Const::None,
            ConstKind::TargetNone => schema::Const::Extension,
            ConstKind::Undef => schema::Const::Undef,
            ConstKind::AggregateZero => schema::Const::Default,
            ConstKind::Array { elements } => schema::Const::Array {
                elements: self.serialize_elements(elements),
            },
            ConstKind::Vector { elements } => schema::Const::Vector {
                elements: self.serialize_elements(elements),
            },
            ConstKind::Struct { elements } => schema::Const::Struct {
                elements: self.serialize_elements(elements),
            },
            ConstKind::Variable { name } => schema::Const::Variable { name: name.clone() },
            ConstKind::Function { name } => schema::Const::Function { name: name.clone() },
            ConstKind::Alias { name } => schema::Const::Alias { name: name.clone() },
            ConstKind::Interface { name } => schema::Const::Interface { name: name.clone() },
            ConstKind::BlockAddress { func, block } => {
                let (func, block) = self.block_reference(*func, *block);
                schema::Const::Label { func, block }
            }
            ConstKind::DsoLocal { wrap } | ConstKind::NoCfi { wrap } => schema::Const::Marker {
                wrap: Box::new(self.serialize_constant(wrap)),
            },
            ConstKind::Expr(expr) => schema::Const::Expr {
                inst: Box::new(self.serialize_const_expr(expr)),
            },
        }
    }

    fn serialize_elements(&self, elements: &[Constant]) -> Vec<schema::Constant> {
        elements
            .iter()
            .map(|element| self.serialize_constant(element))
            .collect()
    }

    /// Lower a constant expression to a pseudo-instruction and run it
    /// through the instruction dispatcher with a throwaway context. The
    /// context is never consulted: every operand inside a constant
    /// expression is itself a constant, never a labeled value.
    fn serialize_const_expr(&self, expr: &ConstExpr) -> schema::Inst {
        let (ty, kind) = lower_const_expr(expr);
        let scratch = FnContext::default();
        self.serialize_inst(&scratch, &ty, &kind)
    }
}

/// Materialize the instruction shape (result type plus payload) of a
/// constant expression.
fn lower_const_expr(expr: &ConstExpr) -> (Ty, InstKind) {
    match expr {
        ConstExpr::Binary { op, lhs, rhs } => (
            lhs.ty.clone(),
            InstKind::Binary {
                op: *op,
                lhs: operand(lhs),
                rhs: operand(rhs),
            },
        ),
        ConstExpr::Compare {
            predicate,
            lhs,
            rhs,
        } => (
            compare_result_ty(&lhs.ty),
            InstKind::Compare {
                predicate: *predicate,
                lhs: operand(lhs),
                rhs: operand(rhs),
            },
        ),
        ConstExpr::Cast {
            op,
            operand: src,
            dst_ty,
        } => (
            dst_ty.clone(),
            InstKind::Cast {
                op: *op,
                operand: operand(src),
            },
        ),
        ConstExpr::Gep {
            src_pointee,
            dst_pointee,
            pointer,
            indices,
        } => (
            pointer.ty.clone(),
            InstKind::Gep {
                src_pointee: src_pointee.clone(),
                dst_pointee: dst_pointee.clone(),
                pointer: operand(pointer),
                indices: indices.iter().map(operand).collect(),
            },
        ),
        ConstExpr::Select {
            cond,
            then_value,
            else_value,
        } => (
            then_value.ty.clone(),
            InstKind::Select {
                cond: operand(cond),
                then_value: operand(then_value),
                else_value: operand(else_value),
            },
        ),
        ConstExpr::GetElement { vector, slot } => (
            element_ty(&vector.ty),
            InstKind::ExtractElement {
                vector: operand(vector),
                slot: operand(slot),
            },
        ),
        ConstExpr::SetElement {
            vector,
            value,
            slot,
        } => (
            vector.ty.clone(),
            InstKind::InsertElement {
                vector: operand(vector),
                value: operand(value),
                slot: operand(slot),
            },
        ),
        ConstExpr::Shuffle { lhs, rhs, mask } => (
            shuffle_result_ty(&lhs.ty, mask.len()),
            InstKind::Shuffle {
                lhs: operand(lhs),
                rhs: operand(rhs),
                mask: mask.clone(),
            },
        ),
    }
}

fn operand(constant: &Constant) -> Value {
    Value::Constant(constant.clone())
}

fn compare_result_ty(operand: &Ty) -> Ty {
    match operand {
        Ty::Vector { fixed, length, .. } => Ty::Vector {
            element: Box::new(Ty::int(1)),
            fixed: *fixed,
            length: *length,
        },
        _ => Ty::int(1),
    }
}

fn element_ty(vector: &Ty) -> Ty {
    match vector {
        Ty::Vector { element, .. } => (**element).clone(),
        other => fatal!("element access into non-vector type {other:?}"),
    }
}

fn shuffle_result_ty(lhs: &Ty, lanes: usize) -> Ty {
    match lhs {
        Ty::Vector { element, fixed, .. } => Ty::Vector {
            element: element.clone(),
            fixed: *fixed,
            length: lanes,
        },
        other => fatal!("shufflevector on non-vector type {other:?}"),
    }
}
