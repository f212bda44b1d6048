// SPDX-License-Identifier: (MIT OR Apache-2.0)

//! Constant records.

use serde::{Deserialize, Serialize};

use crate::instruction::Inst;
use crate::typing::Type;

/// A serialized constant: its type plus the discriminated representation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Constant {
    pub ty: Type,
    pub repr: Const,
}

/// The constant representation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Const {
    /// Unsigned decimal of the bit pattern, arbitrary width.
    Int { value: String },
    /// Textual rendering preserving precision.
    Float { value: String },
    Null,
    None,
    Extension,
    Undef,
    Default,
    Array { elements: Vec<Constant> },
    Vector { elements: Vec<Constant> },
    Struct { elements: Vec<Constant> },
    Variable {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        name: Option<String>,
    },
    Function {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        name: Option<String>,
    },
    Alias {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        name: Option<String>,
    },
    Interface {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        name: Option<String>,
    },
    /// Block-address constant; `block` is a label in `func`'s namespace.
    Label { func: String, block: usize },
    /// DSO-local / no-CFI marker around a global.
    Marker { wrap: Box<Constant> },
    /// Constant expression lowered to a pseudo-instruction.
    Expr { inst: Box<Inst> },
}
