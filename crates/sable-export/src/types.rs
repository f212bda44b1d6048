// SPDX-License-Identifier: (MIT OR Apache-2.0)

//! Type serialization - total over the type universe.

use sable_ir::Ty;
use sable_schema as schema;

/// Serialize one type. The AMX/MMX backend types collapse into `Token`;
/// their contents are opaque to consumers either way.
pub fn serialize_type(ty: &Ty) -> schema::Type {
    match ty {
        Ty::Void => schema::Type::Void,
        Ty::Int { width } => schema::Type::Int { width: *width },
        Ty::Float(kind) => schema::Type::Float {
            width: kind.width(),
            name: kind.name().to_string(),
        },
        Ty::Array { element, length } => schema::Type::Array {
            element: Box::new(serialize_type(element)),
            length: *length,
        },
        Ty::Struct { name, fields } => schema::Type::Struct {
            name: name.clone(),
            fields: fields
                .as_ref()
                .map(|fields| fields.iter().map(serialize_type).collect()),
        },
        Ty::Function {
            params,
            variadic,
            ret,
        } => schema::Type::Function {
            params: params.iter().map(serialize_type).collect(),
            variadic: *variadic,
            ret: Box::new(serialize_type(ret)),
        },
        Ty::Pointer { address_space } => schema::Type::Pointer {
            address_space: *address_space,
        },
        Ty::Vector {
            element,
            fixed,
            length,
        } => schema::Type::Vector {
            element: Box::new(serialize_type(element)),
            fixed: *fixed,
            length: *length,
        },
        Ty::Extension { name, params } => schema::Type::Extension {
            name: name.clone(),
            params: params.iter().map(serialize_type).collect(),
        },
        Ty::TypedPointer {
            pointee,
            address_space,
        } => schema::Type::TypedPointer {
            pointee: Box::new(serialize_type(pointee)),
            address_space: *address_space,
        },
        Ty::Label => schema::Type::Label,
        Ty::Token => schema::Type::Token,
        Ty::Metadata => schema::Type::Metadata,
        Ty::X86Amx | Ty::X86Mmx => schema::Type::Token,
    }
}
