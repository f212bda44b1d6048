// SPDX-License-Identifier: (MIT OR Apache-2.0)

//! Global-variable serialization.

use sable_ir::GlobalVariable;
use sable_schema as schema;

use crate::context::Serializer;
use crate::types::serialize_type;

impl Serializer<'_> {
    pub(crate) fn serialize_global(&self, gvar: &GlobalVariable) -> schema::GlobalVariable {
        if gvar.name.is_none() {
            log::error!("unnamed global variable");
        }
        schema::GlobalVariable {
            name: gvar.name.clone(),
            ty: serialize_type(&gvar.ty),
            is_extern: gvar.is_extern,
            is_const: gvar.is_const,
            is_defined: gvar.is_defined(),
            is_exact: gvar.is_exact,
            is_thread_local: gvar.is_thread_local,
            address_space: gvar.address_space,
            initializer: gvar
                .initializer
                .as_ref()
                .map(|init| self.serialize_constant(init)),
        }
    }
}
