// SPDX-License-Identifier: (MIT OR Apache-2.0)

//! Global-variable records.

use serde::{Deserialize, Serialize};

use crate::constant::Constant;
use crate::typing::Type;

/// A serialized global variable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlobalVariable {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// The value type of the global.
    pub ty: Type,
    pub is_extern: bool,
    pub is_const: bool,
    /// Has an initializer (is not just a declaration).
    pub is_defined: bool,
    pub is_exact: bool,
    pub is_thread_local: bool,
    pub address_space: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initializer: Option<Constant>,
}
