// SPDX-License-Identifier: (MIT OR Apache-2.0)

//! Functions, parameters, and basic blocks.

use crate::inst::Instruction;
use crate::types::Ty;

/// Handle for a basic block, unique within its function. Handles are
/// allocation-ordered and carry no program-order meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlockId(pub u32);

/// Handle for an instruction, unique within its function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InstId(pub u32);

/// Handle for a function parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ArgId(pub u32);

/// A function: signature, parameters, and body. A function with no
/// blocks is a declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct Function {
    pub name: Option<String>,
    /// The function type (params, variadic, return).
    pub ty: Ty,
    pub params: Vec<Parameter>,
    pub blocks: Vec<BasicBlock>,
    /// The definition is exact (not weakly overridable).
    pub is_exact: bool,
    /// Marked intrinsic by the host; the `llvm.` name prefix is an
    /// additional heuristic applied at export time.
    pub is_intrinsic: bool,
}

impl Function {
    pub fn is_defined(&self) -> bool {
        !self.blocks.is_empty()
    }

    /// A body-less declaration with the given signature.
    pub fn declaration(name: impl Into<String>, params: Vec<Ty>, ret: Ty) -> Self {
        let name = name.into();
        let is_intrinsic = name.starts_with("llvm.");
        let params = params
            .into_iter()
            .enumerate()
            .map(|(i, ty)| Parameter::new(ArgId(i as u32), ty))
            .collect::<Vec<_>>();
        let param_tys = params.iter().map(|p| p.ty.clone()).collect();
        Function {
            name: Some(name),
            ty: Ty::function(param_tys, ret),
            params,
            blocks: Vec::new(),
            is_exact: false,
            is_intrinsic,
        }
    }
}

/// A function parameter with its attribute facets. Each optional facet
/// carries the type the attribute refers to.
#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    pub id: ArgId,
    pub name: Option<String>,
    pub ty: Ty,
    pub by_val: Option<Ty>,
    pub by_ref: Option<Ty>,
    pub pre_allocated: Option<Ty>,
    pub struct_ret: Option<Ty>,
    pub in_alloca: Option<Ty>,
    pub element_type: Option<Ty>,
}

impl Parameter {
    pub fn new(id: ArgId, ty: Ty) -> Self {
        Parameter {
            id,
            name: None,
            ty,
            by_val: None,
            by_ref: None,
            pre_allocated: None,
            struct_ret: None,
            in_alloca: None,
            element_type: None,
        }
    }
}

/// A basic block: straight-line body plus exactly one terminator, held
/// apart from the body.
#[derive(Debug, Clone, PartialEq)]
pub struct BasicBlock {
    pub id: BlockId,
    pub name: Option<String>,
    pub body: Vec<Instruction>,
    pub terminator: Instruction,
}
