// SPDX-License-Identifier: (MIT OR Apache-2.0)

//! Function and parameter records.

use serde::{Deserialize, Serialize};

use crate::cfg::Block;
use crate::typing::Type;

/// A serialized function.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Function {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// The function type.
    pub ty: Type,
    /// Has a body (is not just a declaration).
    pub is_defined: bool,
    /// The definition is exact (not weakly overridable).
    pub is_exact: bool,
    pub is_intrinsic: bool,
    pub params: Vec<Parameter>,
    pub blocks: Vec<Block>,
}

/// A serialized parameter. Each attribute facet is present only when the
/// attribute is, and carries the type the attribute refers to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub ty: Type,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub by_val: Option<Type>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub by_ref: Option<Type>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pre_allocated: Option<Type>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub struct_ret: Option<Type>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub in_alloca: Option<Type>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub element_type: Option<Type>,
}
