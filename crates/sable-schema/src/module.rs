// SPDX-License-Identifier: (MIT OR Apache-2.0)

//! The top-level document.

use serde::{Deserialize, Serialize};

use crate::function::Function;
use crate::global::GlobalVariable;
use crate::typing::Type;

/// An identified struct type declared at module level. `fields` is
/// absent for an opaque struct.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructType {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<Type>>,
}

/// The exported module document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Module {
    pub name: String,
    /// Module-level inline assembly, empty when absent.
    #[serde(rename = "asm")]
    pub inline_asm: String,
    pub structs: Vec<StructType>,
    pub global_variables: Vec<GlobalVariable>,
    pub functions: Vec<Function>,
}
