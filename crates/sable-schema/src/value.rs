// SPDX-License-Identifier: (MIT OR Apache-2.0)

//! Value references.

use serde::{Deserialize, Serialize};

use crate::constant::Constant;
use crate::typing::Type;

/// A serialized value reference. `index` fields are labels in the
/// enclosing function's namespaces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    Argument { ty: Type, index: usize },
    Constant(Constant),
    Instruction { ty: Type, index: usize },
    /// A basic block used as a value; may cite another function.
    Label { func: String, block: usize },
    /// Reserved placeholder; the metadata subsystem is not modeled.
    Metadata,
}

/// Inline assembly at a call site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InlineAsm {
    pub signature: Type,
    #[serde(rename = "asm")]
    pub code: String,
    pub constraint: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn instruction_reference_wire_shape() {
        let v = Value::Instruction {
            ty: Type::Int { width: 1 },
            index: 7,
        };
        assert_eq!(
            serde_json::to_value(v).unwrap(),
            json!({"Instruction": {"ty": {"Int": {"width": 1}}, "index": 7}})
        );
    }

    #[test]
    fn metadata_is_a_bare_tag() {
        assert_eq!(
            serde_json::to_value(Value::Metadata).unwrap(),
            json!("Metadata")
        );
    }

    #[test]
    fn inline_asm_field_names() {
        let asm = InlineAsm {
            signature: Type::Function {
                params: vec![],
                variadic: false,
                ret: Box::new(Type::Void),
            },
            code: "nop".into(),
            constraint: String::new(),
        };
        let v = serde_json::to_value(asm).unwrap();
        assert!(v.get("asm").is_some());
        assert!(v.get("constraint").is_some());
    }
}
