// SPDX-License-Identifier: (MIT OR Apache-2.0)

//! Function, parameter, and block serialization.

use sable_ir::{BasicBlock, Function, Parameter};
use sable_schema as schema;

use crate::context::{FnContext, Serializer};
use crate::probe;
use crate::types::serialize_type;

impl Serializer<'_> {
    pub(crate) fn serialize_function(&self, func: &Function, ctxt: &FnContext) -> schema::Function {
        if func.name.is_none() {
            // anomaly, not a defect: keep going without the name
            log::error!("unnamed function");
        }
        schema::Function {
            name: func.name.clone(),
            ty: serialize_type(&func.ty),
            is_defined: func.is_defined(),
            is_exact: func.is_defined() && func.is_exact,
            is_intrinsic: probe::is_intrinsic_function(func),
            params: func
                .params
                .iter()
                .map(|param| serialize_parameter(param))
                .collect(),
            blocks: func
                .blocks
                .iter()
                .map(|block| self.serialize_block(ctxt, block))
                .collect(),
        }
    }

    fn serialize_block(&self, ctxt: &FnContext, block: &BasicBlock) -> schema::Block {
        schema::Block {
            label: ctxt.get_block(block.id),
            name: block.name.clone(),
            body: block
                .body
                .iter()
                .filter(|inst| !probe::is_debug_instruction(inst))
                .map(|inst| self.serialize_instruction(ctxt, inst))
                .collect(),
            terminator: self.serialize_instruction(ctxt, &block.terminator),
        }
    }
}

fn serialize_parameter(param: &Parameter) -> schema::Parameter {
    let facet = |ty: &Option<sable_ir::Ty>| ty.as_ref().map(serialize_type);
    schema::Parameter {
        name: param.name.clone(),
        ty: serialize_type(&param.ty),
        by_val: facet(&param.by_val),
        by_ref: facet(&param.by_ref),
        pre_allocated: facet(&param.pre_allocated),
        struct_ret: facet(&param.struct_ret),
        in_alloca: facet(&param.in_alloca),
        element_type: facet(&param.element_type),
    }
}
