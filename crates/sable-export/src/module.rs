// SPDX-License-Identifier: (MIT OR Apache-2.0)

//! Module serialization - top-level orchestration.

use sable_ir::{FuncId, Module};
use sable_schema as schema;

use crate::context::Serializer;

impl Serializer<'_> {
    /// The emission phase. All function contexts exist by construction;
    /// output order follows the module's own declaration order.
    pub fn serialize_module(&self) -> schema::Module {
        let module = self.module();
        log::debug!("serializing module {}", module.name);
        schema::Module {
            name: module.name.clone(),
            inline_asm: module.inline_asm.clone(),
            structs: module
                .structs
                .iter()
                .map(|def| schema::StructType {
                    name: def.name.clone(),
                    fields: def
                        .fields
                        .as_ref()
                        .map(|fields| fields.iter().map(crate::serialize_type).collect()),
                })
                .collect(),
            global_variables: module
                .globals
                .iter()
                .map(|gvar| self.serialize_global(gvar))
                .collect(),
            functions: module
                .functions
                .iter()
                .enumerate()
                .filter_map(|(index, func)| {
                    let ctxt = self.context(FuncId(index as u32))?;
                    Some(self.serialize_function(func, ctxt))
                })
                .collect(),
        }
    }
}

/// Prepare and emit in one step: the whole exporter as a pure function
/// from module to document.
pub fn export_module(module: &Module) -> schema::Module {
    Serializer::prepare(module).serialize_module()
}
