// SPDX-License-Identifier: (MIT OR Apache-2.0)

//! The built-in showcase module: a small program that touches most of
//! the exporter's surface (structs, globals, constant expressions,
//! intrinsics, control flow, atomics, block addresses).

use sable_ir::{
    BinOp, Callee, CastOp, ConstExpr, ConstKind, Constant, FuncId, Function, FunctionBuilder,
    GlobalVariable, InstKind, Module, Ordering, PhiIncoming, Predicate, RmwOp, StructDef,
    SwitchArm, SyncScope, Ty,
};

pub fn showcase_module() -> Module {
    let mut module = Module::new("showcase");

    // identified struct types
    module.structs.push(StructDef {
        name: Some("pair".to_string()),
        fields: Some(vec![Ty::int(32), Ty::int(32)]),
    });
    module.structs.push(StructDef {
        name: Some("handle".to_string()),
        fields: None,
    });

    // globals, one with a constant-expression initializer
    module.globals.push(
        GlobalVariable::new("table", Ty::array(Ty::int(32), 8))
            .with_initializer(Constant::zero(Ty::array(Ty::int(32), 8))),
    );
    module.globals.push(
        GlobalVariable::new("table_mid", Ty::ptr())
            .constant()
            .with_initializer(Constant {
                ty: Ty::ptr(),
                kind: ConstKind::Expr(Box::new(ConstExpr::Gep {
                    src_pointee: Ty::array(Ty::int(32), 8),
                    dst_pointee: Ty::int(32),
                    pointer: Constant::global("table"),
                    indices: vec![Constant::int(64, 0), Constant::int(64, 4)],
                })),
            }),
    );

    // declarations consumed below; ids follow insertion order
    module.add_function(Function::declaration(
        "llvm.umax.i32",
        vec![Ty::int(32), Ty::int(32)],
        Ty::int(32),
    ));
    module.add_function(Function::declaration(
        "notify",
        vec![Ty::int(32)],
        Ty::Void,
    ));

    let classify = FuncId(2);
    module.add_function(build_classify(classify));
    module.add_function(build_accumulate());
    module
}

/// Branch-heavy function: switch dispatch, a phi join, and a block
/// address taken on its own landing block.
fn build_classify(self_id: FuncId) -> Function {
    let mut b = FunctionBuilder::new("classify", Ty::int(32));
    let selector = b.add_param("selector", Ty::int(32));

    let small = b.create_block(Some("small"));
    let large = b.create_block(Some("large"));
    let join = b.create_block(Some("join"));

    b.terminate(InstKind::Switch {
        cond: selector.clone(),
        arms: vec![
            SwitchArm {
                value: Constant::int(32, 0),
                target: small,
            },
            SwitchArm {
                value: Constant::int(32, 1),
                target: small,
            },
        ],
        default: Some(large),
    });

    b.switch_to_block(small);
    let bumped = b.push_named(
        "bumped",
        Ty::int(32),
        InstKind::Binary {
            op: BinOp::Add,
            lhs: selector.clone(),
            rhs: Constant::int(32, 16).into(),
        },
    );
    b.terminate(InstKind::Branch {
        cond: None,
        targets: vec![join],
    });

    b.switch_to_block(large);
    let clamped = b.push_named(
        "clamped",
        Ty::int(32),
        InstKind::Call {
            callee: Callee::Value(Constant::function("llvm.umax.i32").into()),
            signature: Ty::function(vec![Ty::int(32), Ty::int(32)], Ty::int(32)),
            args: vec![selector, Constant::int(32, 255).into()],
        },
    );
    b.terminate(InstKind::Branch {
        cond: None,
        targets: vec![join],
    });

    b.switch_to_block(join);
    let merged = b.push_named(
        "merged",
        Ty::int(32),
        InstKind::Phi {
            incoming: vec![
                PhiIncoming {
                    block: small,
                    value: bumped,
                },
                PhiIncoming {
                    block: large,
                    value: clamped,
                },
            ],
        },
    );
    // the join block's own address, exported as a Label constant
    let here = b.push_named(
        "here",
        Ty::int(64),
        InstKind::Cast {
            op: CastOp::PtrToInt,
            operand: Constant::block_address(self_id, join).into(),
        },
    );
    let tagged = b.push(
        Ty::int(32),
        InstKind::Cast {
            op: CastOp::Trunc,
            operand: here,
        },
    );
    let result = b.push(
        Ty::int(32),
        InstKind::Binary {
            op: BinOp::Xor,
            lhs: merged,
            rhs: tagged,
        },
    );
    b.terminate(InstKind::Return {
        value: Some(result),
    });
    b.finish()
}

/// Memory and atomics: alloca, store/load, rmw, cmpxchg, select.
fn build_accumulate() -> Function {
    let mut b = FunctionBuilder::new("accumulate", Ty::int(32));
    let amount = b.add_param("amount", Ty::int(32));

    let slot = b.push_named(
        "slot",
        Ty::ptr(),
        InstKind::Alloca {
            allocated: Ty::int(32),
            size: None,
        },
    );
    b.push(
        Ty::Void,
        InstKind::Store {
            pointer: slot.clone(),
            value: Constant::int(32, 0).into(),
            ordering: Ordering::NotAtomic,
        },
    );
    let seen = b.push_named(
        "seen",
        Ty::int(32),
        InstKind::AtomicRmw {
            op: RmwOp::Add,
            pointer: slot.clone(),
            value: amount.clone(),
            ordering: Ordering::SeqCst,
            scope: SyncScope::System,
        },
    );
    b.push(
        Ty::Struct {
            name: None,
            fields: Some(vec![Ty::int(32), Ty::int(1)]),
        },
        InstKind::CmpXchg {
            pointer: slot.clone(),
            expected: seen.clone(),
            replacement: amount.clone(),
            ordering_success: Ordering::AcqRel,
            ordering_failure: Ordering::Monotonic,
            scope: SyncScope::System,
        },
    );
    let current = b.push_named(
        "current",
        Ty::int(32),
        InstKind::Load {
            pointer: slot,
            ordering: Ordering::NotAtomic,
        },
    );
    let wrapped = b.push(
        Ty::int(1),
        InstKind::Compare {
            predicate: Predicate::IUlt,
            lhs: current.clone(),
            rhs: amount,
        },
    );
    let result = b.push(
        Ty::int(32),
        InstKind::Select {
            cond: wrapped,
            then_value: Constant::int(32, -1).into(),
            else_value: current.clone(),
        },
    );
    b.push(
        Ty::Void,
        InstKind::Call {
            callee: Callee::Value(Constant::function("notify").into()),
            signature: Ty::function(vec![Ty::int(32)], Ty::Void),
            args: vec![current],
        },
    );
    b.terminate(InstKind::Return {
        value: Some(result),
    });
    b.finish()
}
