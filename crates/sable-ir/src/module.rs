// SPDX-License-Identifier: (MIT OR Apache-2.0)

//! The module - the top-level translation unit.

use crate::function::Function;
use crate::global::GlobalVariable;
use crate::types::Ty;

/// Handle for a function, unique within its module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FuncId(pub u32);

/// An identified (module-level) struct type. `fields` is `None` for an
/// opaque struct.
#[derive(Debug, Clone, PartialEq)]
pub struct StructDef {
    pub name: Option<String>,
    pub fields: Option<Vec<Ty>>,
}

/// A translation unit: identified struct types, globals, and functions,
/// each kept in declaration order.
#[derive(Debug, Clone, PartialEq)]
pub struct Module {
    pub name: String,
    /// Module-level inline assembly, empty when absent.
    pub inline_asm: String,
    pub structs: Vec<StructDef>,
    pub globals: Vec<GlobalVariable>,
    pub functions: Vec<Function>,
}

impl Module {
    pub fn new(name: impl Into<String>) -> Self {
        Module {
            name: name.into(),
            inline_asm: String::new(),
            structs: Vec::new(),
            globals: Vec::new(),
            functions: Vec::new(),
        }
    }

    pub fn add_function(&mut self, func: Function) -> FuncId {
        let id = FuncId(self.functions.len() as u32);
        self.functions.push(func);
        id
    }

    pub fn function(&self, id: FuncId) -> Option<&Function> {
        self.functions.get(id.0 as usize)
    }

    pub fn function_named(&self, name: &str) -> Option<&Function> {
        self.functions
            .iter()
            .find(|f| f.name.as_deref() == Some(name))
    }
}
