// SPDX-License-Identifier: (MIT OR Apache-2.0)

//! FunctionBuilder - helper for constructing function bodies.
//!
//! Allocates handles in creation order, which is deliberately unrelated
//! to program order: a caller may open several blocks and fill them in
//! any interleaving.

use crate::function::{ArgId, BasicBlock, BlockId, Function, InstId, Parameter};
use crate::inst::{InstKind, Instruction};
use crate::types::Ty;
use crate::value::Value;

struct PendingBlock {
    id: BlockId,
    name: Option<String>,
    body: Vec<Instruction>,
    terminator: Option<Instruction>,
}

pub struct FunctionBuilder {
    name: Option<String>,
    ret: Ty,
    variadic: bool,
    is_exact: bool,
    is_intrinsic: bool,
    params: Vec<Parameter>,
    blocks: Vec<PendingBlock>,
    current: usize,
    next_inst: u32,
    next_block: u32,
    next_arg: u32,
}

impl FunctionBuilder {
    /// Start a function with an (unnamed) entry block.
    pub fn new(name: impl Into<String>, ret: Ty) -> Self {
        let mut b = FunctionBuilder {
            name: Some(name.into()),
            ret,
            variadic: false,
            is_exact: true,
            is_intrinsic: false,
            params: Vec::new(),
            blocks: Vec::new(),
            current: 0,
            next_inst: 0,
            next_block: 0,
            next_arg: 0,
        };
        b.create_block(Some("entry"));
        b
    }

    pub fn unnamed(ret: Ty) -> Self {
        let mut b = Self::new("", ret);
        b.name = None;
        b
    }

    pub fn variadic(mut self) -> Self {
        self.variadic = true;
        self
    }

    /// Append a parameter and return a value referencing it.
    pub fn add_param(&mut self, name: impl Into<String>, ty: Ty) -> Value {
        let id = ArgId(self.next_arg);
        self.next_arg += 1;
        let mut param = Parameter::new(id, ty.clone());
        param.name = Some(name.into());
        self.params.push(param);
        Value::arg(ty, id)
    }

    /// Append a parameter with attribute facets already applied.
    pub fn add_param_raw(&mut self, mut param: Parameter) -> Value {
        param.id = ArgId(self.next_arg);
        self.next_arg += 1;
        let v = Value::arg(param.ty.clone(), param.id);
        self.params.push(param);
        v
    }

    pub fn create_block(&mut self, name: Option<&str>) -> BlockId {
        let id = BlockId(self.next_block);
        self.next_block += 1;
        self.blocks.push(PendingBlock {
            id,
            name: name.map(String::from),
            body: Vec::new(),
            terminator: None,
        });
        id
    }

    pub fn switch_to_block(&mut self, block: BlockId) {
        let pos = self
            .blocks
            .iter()
            .position(|b| b.id == block)
            .expect("switching to a block this builder did not create");
        self.current = pos;
    }

    pub fn entry_block(&self) -> BlockId {
        self.blocks[0].id
    }

    /// Push an instruction into the current block and return a value
    /// referencing its result.
    pub fn push(&mut self, ty: Ty, kind: InstKind) -> Value {
        self.push_inst(None, ty, kind)
    }

    /// Push an instruction carrying an SSA name.
    pub fn push_named(&mut self, name: impl Into<String>, ty: Ty, kind: InstKind) -> Value {
        self.push_inst(Some(name.into()), ty, kind)
    }

    fn push_inst(&mut self, name: Option<String>, ty: Ty, kind: InstKind) -> Value {
        assert!(
            !kind.is_terminator(),
            "terminators go through terminate(), not push()"
        );
        let id = InstId(self.next_inst);
        self.next_inst += 1;
        let value = Value::inst(ty.clone(), id);
        self.blocks[self.current].body.push(Instruction {
            id,
            name,
            ty,
            kind,
        });
        value
    }

    /// Seal the current block with a void terminator.
    pub fn terminate(&mut self, kind: InstKind) {
        self.terminate_with(Ty::Void, kind);
    }

    /// Seal the current block with a terminator that produces a value
    /// (invoke is the one that does).
    pub fn terminate_with(&mut self, ty: Ty, kind: InstKind) -> Value {
        assert!(kind.is_terminator(), "terminate() requires a terminator");
        let id = InstId(self.next_inst);
        self.next_inst += 1;
        let value = Value::inst(ty.clone(), id);
        let block = &mut self.blocks[self.current];
        assert!(
            block.terminator.is_none(),
            "block {:?} already terminated",
            block.id
        );
        block.terminator = Some(Instruction {
            id,
            name: None,
            ty,
            kind,
        });
        value
    }

    /// Assemble the function. Unterminated blocks are sealed with
    /// `unreachable`.
    pub fn finish(mut self) -> Function {
        let param_tys = self.params.iter().map(|p| p.ty.clone()).collect();
        let mut blocks = Vec::with_capacity(self.blocks.len());
        for pending in self.blocks.drain(..) {
            let terminator = pending.terminator.unwrap_or_else(|| {
                let id = InstId(self.next_inst);
                self.next_inst += 1;
                Instruction {
                    id,
                    name: None,
                    ty: Ty::Void,
                    kind: InstKind::Unreachable,
                }
            });
            blocks.push(BasicBlock {
                id: pending.id,
                name: pending.name,
                body: pending.body,
                terminator,
            });
        }
        Function {
            name: self.name,
            ty: Ty::Function {
                params: param_tys,
                variadic: self.variadic,
                ret: Box::new(self.ret),
            },
            params: self.params,
            blocks,
            is_exact: self.is_exact,
            is_intrinsic: self.is_intrinsic,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constant::Constant;
    use crate::inst::BinOp;

    #[test]
    fn builds_a_two_block_function() {
        let mut b = FunctionBuilder::new("f", Ty::int(32));
        let a = b.add_param("a", Ty::int(32));
        let sum = b.push(
            Ty::int(32),
            InstKind::Binary {
                op: BinOp::Add,
                lhs: a,
                rhs: Constant::int(32, 1).into(),
            },
        );
        let exit = b.create_block(Some("exit"));
        b.terminate(InstKind::Branch {
            cond: None,
            targets: vec![exit],
        });
        b.switch_to_block(exit);
        b.terminate(InstKind::Return { value: Some(sum) });

        let func = b.finish();
        assert!(func.is_defined());
        assert_eq!(func.blocks.len(), 2);
        assert_eq!(func.blocks[0].body.len(), 1);
        assert!(func.blocks[1].body.is_empty());
        assert!(func.blocks[1].terminator.kind.is_terminator());
    }

    #[test]
    fn unterminated_blocks_become_unreachable() {
        let b = FunctionBuilder::new("f", Ty::Void);
        let func = b.finish();
        assert_eq!(func.blocks[0].terminator.kind, InstKind::Unreachable);
    }

    #[test]
    fn instruction_handles_are_unique_across_blocks() {
        let mut b = FunctionBuilder::new("f", Ty::Void);
        let second = b.create_block(None);
        // interleave pushes between the two blocks
        let v0 = b.push(
            Ty::int(8),
            InstKind::Freeze {
                operand: Constant::int(8, 0).into(),
            },
        );
        b.switch_to_block(second);
        let v1 = b.push(
            Ty::int(8),
            InstKind::Freeze {
                operand: Constant::int(8, 1).into(),
            },
        );
        assert_ne!(v0, v1);
    }
}
