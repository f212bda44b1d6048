// SPDX-License-Identifier: (MIT OR Apache-2.0)

//! Function-scoped labeling contexts and the serializer driving them.
//!
//! A [`FnContext`] assigns dense, 0-based labels to the blocks,
//! instructions, and arguments of one function, in insertion order.
//! The three namespaces are independent. Insertion must be unique and
//! lookup must hit; both failure modes are defects.

use std::collections::HashMap;

use sable_ir::{ArgId, BlockId, FuncId, InstId, Module};

use crate::fatal;
use crate::probe;

/// Dense label namespaces for one function.
#[derive(Debug, Default)]
pub struct FnContext {
    blocks: HashMap<BlockId, usize>,
    insts: HashMap<InstId, usize>,
    args: HashMap<ArgId, usize>,
}

impl FnContext {
    pub fn add_block(&mut self, id: BlockId) {
        let label = self.blocks.len();
        if self.blocks.insert(id, label).is_some() {
            fatal!("block {id:?} labeled twice");
        }
    }

    pub fn add_instruction(&mut self, id: InstId) {
        let label = self.insts.len();
        if self.insts.insert(id, label).is_some() {
            fatal!("instruction {id:?} labeled twice");
        }
    }

    pub fn add_argument(&mut self, id: ArgId) {
        let label = self.args.len();
        if self.args.insert(id, label).is_some() {
            fatal!("argument {id:?} labeled twice");
        }
    }

    pub fn get_block(&self, id: BlockId) -> usize {
        match self.blocks.get(&id) {
            Some(label) => *label,
            None => fatal!("no label for block {id:?}"),
        }
    }

    pub fn get_instruction(&self, id: InstId) -> usize {
        match self.insts.get(&id) {
            Some(label) => *label,
            None => fatal!("no label for instruction {id:?}"),
        }
    }

    pub fn get_argument(&self, id: ArgId) -> usize {
        match self.args.get(&id) {
            Some(label) => *label,
            None => fatal!("no label for argument {id:?}"),
        }
    }
}

/// Walks a module and emits the wire-format document. Owns the registry
/// of function contexts: populated on construction, read-only during
/// emission, dropped with the serializer.
pub struct Serializer<'m> {
    module: &'m Module,
    /// Indexed by [`FuncId`]; `None` for filtered (debug-intrinsic)
    /// functions.
    contexts: Vec<Option<FnContext>>,
}

impl<'m> Serializer<'m> {
    /// The prepare phase: label every argument, block, and instruction
    /// of every non-filtered function, in declaration/program order.
    /// Every context must exist before any emission runs; block-address
    /// constants resolve across functions.
    pub fn prepare(module: &'m Module) -> Self {
        let mut contexts = Vec::with_capacity(module.functions.len());
        for func in &module.functions {
            if probe::is_debug_function(func) {
                log::debug!(
                    "skipping debug function {}",
                    func.name.as_deref().unwrap_or("<unnamed>")
                );
                contexts.push(None);
                continue;
            }
            let mut ctxt = FnContext::default();
            for param in &func.params {
                ctxt.add_argument(param.id);
            }
            for block in &func.blocks {
                ctxt.add_block(block.id);
                for inst in &block.body {
                    if probe::is_debug_instruction(inst) {
                        continue;
                    }
                    ctxt.add_instruction(inst.id);
                }
                ctxt.add_instruction(block.terminator.id);
            }
            contexts.push(Some(ctxt));
        }
        Serializer { module, contexts }
    }

    pub fn module(&self) -> &'m Module {
        self.module
    }

    pub(crate) fn context(&self, func: FuncId) -> Option<&FnContext> {
        self.contexts.get(func.0 as usize).and_then(Option::as_ref)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_are_dense_and_insertion_ordered() {
        let mut ctxt = FnContext::default();
        ctxt.add_block(BlockId(7));
        ctxt.add_block(BlockId(3));
        ctxt.add_block(BlockId(5));
        assert_eq!(ctxt.get_block(BlockId(7)), 0);
        assert_eq!(ctxt.get_block(BlockId(3)), 1);
        assert_eq!(ctxt.get_block(BlockId(5)), 2);
    }

    #[test]
    fn namespaces_are_independent() {
        let mut ctxt = FnContext::default();
        ctxt.add_block(BlockId(0));
        ctxt.add_instruction(InstId(0));
        ctxt.add_argument(ArgId(0));
        assert_eq!(ctxt.get_block(BlockId(0)), 0);
        assert_eq!(ctxt.get_instruction(InstId(0)), 0);
        assert_eq!(ctxt.get_argument(ArgId(0)), 0);
    }

    #[test]
    #[should_panic(expected = "labeled twice")]
    fn duplicate_insertion_is_a_defect() {
        let mut ctxt = FnContext::default();
        ctxt.add_instruction(InstId(4));
        ctxt.add_instruction(InstId(4));
    }

    #[test]
    #[should_panic(expected = "no label")]
    fn missing_lookup_is_a_defect() {
        let ctxt = FnContext::default();
        ctxt.get_argument(ArgId(0));
    }
}
