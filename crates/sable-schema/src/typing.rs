// SPDX-License-Identifier: (MIT OR Apache-2.0)

//! Type records.

use serde::{Deserialize, Serialize};

/// A serialized type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Type {
    Void,
    /// Integer as a bitvector.
    Int { width: usize },
    /// Floating point with a fixed width and spelling.
    Float { width: usize, name: String },
    Array {
        element: Box<Type>,
        length: usize,
    },
    /// `fields` is absent exactly when the struct is opaque.
    Struct {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        name: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        fields: Option<Vec<Type>>,
    },
    Function {
        params: Vec<Type>,
        variadic: bool,
        ret: Box<Type>,
    },
    /// Opaque pointer; no pointee.
    Pointer { address_space: usize },
    /// For scalable vectors `length` is the minimum count.
    Vector {
        element: Box<Type>,
        fixed: bool,
        length: usize,
    },
    /// Target extension type.
    Extension { name: String, params: Vec<Type> },
    TypedPointer {
        pointee: Box<Type>,
        address_space: usize,
    },
    Label,
    Token,
    Metadata,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn unit_variants_encode_as_strings() {
        assert_eq!(serde_json::to_value(Type::Void).unwrap(), json!("Void"));
        assert_eq!(serde_json::to_value(Type::Token).unwrap(), json!("Token"));
    }

    #[test]
    fn opaque_struct_omits_fields() {
        let opaque = Type::Struct {
            name: Some("s".into()),
            fields: None,
        };
        assert_eq!(
            serde_json::to_value(opaque).unwrap(),
            json!({"Struct": {"name": "s"}})
        );
    }

    #[test]
    fn nested_types_round_trip() {
        let ty = Type::Array {
            element: Box::new(Type::Vector {
                element: Box::new(Type::Int { width: 8 }),
                fixed: false,
                length: 4,
            }),
            length: 2,
        };
        let text = serde_json::to_string(&ty).unwrap();
        assert_eq!(serde_json::from_str::<Type>(&text).unwrap(), ty);
    }
}
