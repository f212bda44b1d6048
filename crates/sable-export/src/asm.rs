// SPDX-License-Identifier: (MIT OR Apache-2.0)

//! Inline-assembly serialization.

use sable_ir::InlineAsm;
use sable_schema as schema;

use crate::types::serialize_type;

pub(crate) fn serialize_inline_asm(asm: &InlineAsm) -> schema::InlineAsm {
    schema::InlineAsm {
        signature: serialize_type(&asm.signature),
        code: asm.code.clone(),
        constraint: asm.constraints.clone(),
    }
}
