// SPDX-License-Identifier: (MIT OR Apache-2.0)

//! Breadth coverage: every opcode family, constant flavor, and type kind
//! goes through the exporter without tripping the fatal path.

use sable_export::export_module;
use sable_ir::{
    BinOp, Callee, CastOp, ConstExpr, ConstKind, Constant, FloatKind, Function, FunctionBuilder,
    GlobalVariable, InlineAsm, InstKind, Module, Parameter, Predicate, StructDef, Ty, UnaryOp,
};
use sable_schema as schema;

fn tag_of(inst: &schema::Instruction) -> String {
    let json = serde_json::to_value(&inst.repr).unwrap();
    match json {
        serde_json::Value::String(tag) => tag,
        serde_json::Value::Object(fields) => fields.keys().next().unwrap().clone(),
        other => panic!("unexpected payload shape {other:?}"),
    }
}

#[test]
fn vector_and_aggregate_ops() {
    let vec4 = Ty::vector(Ty::int(32), 4);
    let pair = Ty::Struct {
        name: None,
        fields: Some(vec![Ty::int(32), Ty::Float(FloatKind::Double)]),
    };

    let mut b = FunctionBuilder::new("lanes", Ty::int(32));
    let v = b.add_param("v", vec4.clone());
    let w = b.add_param("w", vec4.clone());
    let agg = b.add_param("agg", pair.clone());

    let shuffled = b.push(
        Ty::vector(Ty::int(32), 8),
        InstKind::Shuffle {
            lhs: v.clone(),
            rhs: w.clone(),
            mask: vec![0, 4, 1, 5, 2, 6, -1, 7],
        },
    );
    let lane = b.push(
        Ty::int(32),
        InstKind::ExtractElement {
            vector: shuffled.clone(),
            slot: Constant::int(64, 2).into(),
        },
    );
    b.push(
        Ty::vector(Ty::int(32), 8),
        InstKind::InsertElement {
            vector: shuffled,
            value: lane.clone(),
            slot: Constant::int(64, 0).into(),
        },
    );
    let field = b.push(
        Ty::int(32),
        InstKind::ExtractValue {
            aggregate: agg.clone(),
            indices: vec![0],
        },
    );
    b.push(
        pair,
        InstKind::InsertValue {
            aggregate: agg,
            value: field.clone(),
            indices: vec![0],
        },
    );
    b.terminate(InstKind::Return { value: Some(field) });

    let mut module = Module::new("vectors");
    module.add_function(b.finish());
    let doc = export_module(&module);

    let tags: Vec<_> = doc.functions[0].blocks[0].body.iter().map(tag_of).collect();
    assert_eq!(
        tags,
        [
            "ShuffleVector",
            "GetElement",
            "SetElement",
            "GetValue",
            "SetValue"
        ]
    );

    let schema::Inst::ShuffleVector { mask, .. } = &doc.functions[0].blocks[0].body[0].repr else {
        panic!("expected ShuffleVector");
    };
    assert_eq!(mask, &[0, 4, 1, 5, 2, 6, -1, 7]);
}

#[test]
fn unary_freeze_vaarg_and_alloca_with_size() {
    let mut b = FunctionBuilder::new("misc", Ty::Void);
    let x = b.add_param("x", Ty::Float(FloatKind::Float));
    let n = b.add_param("n", Ty::int(32));
    let va = b.add_param("va", Ty::ptr());

    b.push(
        Ty::Float(FloatKind::Float),
        InstKind::Unary {
            op: UnaryOp::FNeg,
            operand: x,
        },
    );
    b.push(
        Ty::int(32),
        InstKind::Freeze { operand: n.clone() },
    );
    b.push(
        Ty::ptr(),
        InstKind::Alloca {
            allocated: Ty::int(64),
            size: Some(n),
        },
    );
    b.push(Ty::int(32), InstKind::VaArg { pointer: va });
    b.terminate(InstKind::Return { value: None });

    let mut module = Module::new("misc");
    module.add_function(b.finish());
    let doc = export_module(&module);

    let body = &doc.functions[0].blocks[0].body;
    let schema::Inst::Unary { opcode, .. } = &body[0].repr else {
        panic!("expected Unary");
    };
    assert_eq!(opcode, "fneg");
    assert!(matches!(body[1].repr, schema::Inst::Freeze { .. }));
    let schema::Inst::Alloca { size, .. } = &body[2].repr else {
        panic!("expected Alloca");
    };
    assert!(size.is_some());
    assert!(matches!(body[3].repr, schema::Inst::VAArg { .. }));
}

#[test]
fn indirect_jump_over_block_addresses() {
    let mut module = Module::new("computed_goto");
    let self_id = sable_ir::FuncId(0);

    let mut b = FunctionBuilder::new("jump", Ty::Void);
    let first = b.create_block(Some("first"));
    let second = b.create_block(Some("second"));
    b.terminate(InstKind::IndirectJump {
        address: Constant::block_address(self_id, first).into(),
        targets: vec![first, second],
    });
    b.switch_to_block(first);
    b.terminate(InstKind::Return { value: None });
    b.switch_to_block(second);
    b.terminate(InstKind::Return { value: None });
    module.add_function(b.finish());

    let doc = export_module(&module);
    let schema::Inst::IndirectJump { address, targets } =
        &doc.functions[0].blocks[0].terminator.repr
    else {
        panic!("expected IndirectJump");
    };
    assert_eq!(targets, &[1, 2]);
    let schema::Value::Constant(addr) = address else {
        panic!("expected constant address");
    };
    assert_eq!(
        addr.repr,
        schema::Const::Label {
            func: "jump".to_string(),
            block: 1
        }
    );
}

#[test]
fn constant_flavors_in_initializers() {
    let mut module = Module::new("consts");

    let vec2 = Ty::vector(Ty::int(8), 2);
    module.globals.push(
        GlobalVariable::new("mixed", Ty::array(Ty::int(8), 3)).with_initializer(Constant {
            ty: Ty::array(Ty::int(8), 3),
            kind: ConstKind::Array {
                elements: vec![
                    Constant::int(8, 7),
                    Constant::undef(Ty::int(8)),
                    Constant::int(8, -2),
                ],
            },
        }),
    );
    module.globals.push(
        GlobalVariable::new("halves", vec2.clone()).with_initializer(Constant {
            ty: vec2,
            kind: ConstKind::Vector {
                elements: vec![Constant::int(8, 1), Constant::int(8, 2)],
            },
        }),
    );
    module.globals.push(
        GlobalVariable::new("record", Ty::named_struct("pair", vec![Ty::int(32), Ty::ptr()]))
            .with_initializer(Constant {
                ty: Ty::named_struct("pair", vec![Ty::int(32), Ty::ptr()]),
                kind: ConstKind::Struct {
                    elements: vec![Constant::int(32, 1), Constant::null(0)],
                },
            }),
    );
    module.globals.push(
        GlobalVariable::new("pi", Ty::Float(FloatKind::Double))
            .with_initializer(Constant::float(FloatKind::Double, 3.141592653589793)),
    );
    module.globals.push(
        GlobalVariable::new("wrapped", Ty::ptr()).with_initializer(Constant {
            ty: Ty::ptr(),
            kind: ConstKind::DsoLocal {
                wrap: Box::new(Constant::function("jump")),
            },
        }),
    );
    module.globals.push(
        GlobalVariable::new("renamed", Ty::ptr()).with_initializer(Constant {
            ty: Ty::ptr(),
            kind: ConstKind::Alias {
                name: Some("other_name".to_string()),
            },
        }),
    );
    module.globals.push(
        GlobalVariable::new("resolver", Ty::ptr()).with_initializer(Constant {
            ty: Ty::ptr(),
            kind: ConstKind::Interface {
                name: Some("lazy_init".to_string()),
            },
        }),
    );

    let doc = export_module(&module);
    let repr_of = |index: usize| &doc.global_variables[index].initializer.as_ref().unwrap().repr;

    let schema::Const::Array { elements } = repr_of(0) else {
        panic!("expected Array");
    };
    assert_eq!(elements[1].repr, schema::Const::Undef);
    assert_eq!(
        elements[2].repr,
        schema::Const::Int {
            value: "254".to_string()
        }
    );
    assert!(matches!(repr_of(1), schema::Const::Vector { .. }));
    assert!(matches!(repr_of(2), schema::Const::Struct { .. }));
    assert!(matches!(repr_of(3), schema::Const::Float { .. }));
    let schema::Const::Marker { wrap } = repr_of(4) else {
        panic!("expected Marker");
    };
    assert_eq!(
        wrap.repr,
        schema::Const::Function {
            name: Some("jump".to_string())
        }
    );
    assert!(matches!(repr_of(5), schema::Const::Alias { .. }));
    assert!(matches!(repr_of(6), schema::Const::Interface { .. }));
}

#[test]
fn const_expr_flavors() {
    let exprs = vec![
        ConstExpr::Binary {
            op: BinOp::Add,
            lhs: Constant::int(32, 1),
            rhs: Constant::int(32, 2),
        },
        ConstExpr::Compare {
            predicate: Predicate::IUgt,
            lhs: Constant::int(32, 1),
            rhs: Constant::int(32, 2),
        },
        ConstExpr::Cast {
            op: CastOp::PtrToInt,
            operand: Constant::global("somewhere"),
            dst_ty: Ty::int(64),
        },
        ConstExpr::Select {
            cond: Constant::bool(true),
            then_value: Constant::int(32, 1),
            else_value: Constant::int(32, 2),
        },
    ];
    let expected = ["Binary", "Compare", "Cast", "ITE"];

    let mut module = Module::new("exprs");
    module.globals.push(
        GlobalVariable::new("somewhere", Ty::int(64)).with_initializer(Constant::int(64, 0)),
    );
    for (index, expr) in exprs.into_iter().enumerate() {
        let ty = match index {
            1 => Ty::int(1),
            2 => Ty::int(64),
            _ => Ty::int(32),
        };
        module.globals.push(
            GlobalVariable::new(format!("e{index}"), ty.clone())
                .constant()
                .with_initializer(Constant {
                    ty,
                    kind: ConstKind::Expr(Box::new(expr)),
                }),
        );
    }

    let doc = export_module(&module);
    for (index, tag) in expected.iter().enumerate() {
        let schema::Const::Expr { inst } = &doc.global_variables[index + 1]
            .initializer
            .as_ref()
            .unwrap()
            .repr
        else {
            panic!("expected Expr");
        };
        let json = serde_json::to_value(inst).unwrap();
        let key = json.as_object().unwrap().keys().next().unwrap().clone();
        assert_eq!(&key, tag);
    }
}

#[test]
fn exotic_types_and_token_constants() {
    let mut module = Module::new("types");
    module.structs.push(StructDef {
        name: Some("wide".to_string()),
        fields: Some(vec![
            Ty::Float(FloatKind::Half),
            Ty::Float(FloatKind::BFloat),
            Ty::Float(FloatKind::X86Fp80),
            Ty::Float(FloatKind::Fp128),
            Ty::Float(FloatKind::PpcFp128),
            Ty::Vector {
                element: Box::new(Ty::int(1)),
                fixed: false,
                length: 16,
            },
            Ty::Extension {
                name: "spirv.Image".to_string(),
                params: vec![Ty::int(32)],
            },
            Ty::TypedPointer {
                pointee: Box::new(Ty::int(32)),
                address_space: 2,
            },
            Ty::X86Amx,
        ]),
    });

    let mut b = FunctionBuilder::new("tokens", Ty::Void).variadic();
    b.push(
        Ty::Token,
        InstKind::Freeze {
            operand: Constant {
                ty: Ty::Token,
                kind: ConstKind::TokenNone,
            }
            .into(),
        },
    );
    b.push(
        Ty::Extension {
            name: "spirv.Event".to_string(),
            params: vec![],
        },
        InstKind::Freeze {
            operand: Constant {
                ty: Ty::Extension {
                    name: "spirv.Event".to_string(),
                    params: vec![],
                },
                kind: ConstKind::TargetNone,
            }
            .into(),
        },
    );
    b.terminate(InstKind::Return { value: None });
    module.add_function(b.finish());

    let doc = export_module(&module);

    let fields = doc.structs[0].fields.as_ref().unwrap();
    assert_eq!(
        fields[0],
        schema::Type::Float {
            width: 16,
            name: "half".to_string()
        }
    );
    assert_eq!(fields[8], schema::Type::Token);

    let func = &doc.functions[0];
    let schema::Type::Function { variadic, .. } = &func.ty else {
        panic!("expected function type");
    };
    assert!(*variadic);

    let body = &func.blocks[0].body;
    let schema::Inst::Freeze { operand } = &body[0].repr else {
        panic!("expected Freeze");
    };
    let schema::Value::Constant(token) = operand else {
        panic!("expected constant");
    };
    assert_eq!(token.repr, schema::Const::None);
    let schema::Inst::Freeze { operand } = &body[1].repr else {
        panic!("expected Freeze");
    };
    let schema::Value::Constant(target_none) = operand else {
        panic!("expected constant");
    };
    assert_eq!(target_none.repr, schema::Const::Extension);
}

#[test]
fn parameter_facets_surface_only_when_present() {
    let mut b = FunctionBuilder::new("facets", Ty::Void);
    let pair = Ty::named_struct("pair", vec![Ty::int(32), Ty::int(32)]);
    let mut by_val = Parameter::new(sable_ir::ArgId(0), Ty::ptr());
    by_val.name = Some("config".to_string());
    by_val.by_val = Some(pair.clone());
    by_val.element_type = Some(pair.clone());
    b.add_param_raw(by_val);

    let mut sret = Parameter::new(sable_ir::ArgId(0), Ty::ptr());
    sret.name = Some("out".to_string());
    sret.struct_ret = Some(pair);
    b.add_param_raw(sret);

    b.add_param("plain", Ty::int(32));
    b.terminate(InstKind::Return { value: None });

    let mut module = Module::new("facets");
    module.add_function(b.finish());
    let doc = export_module(&module);

    let params = &doc.functions[0].params;
    assert!(params[0].by_val.is_some());
    assert!(params[0].element_type.is_some());
    assert!(params[0].struct_ret.is_none());
    assert!(params[1].struct_ret.is_some());
    assert!(params[2].by_val.is_none());

    let json = serde_json::to_value(&params[2]).unwrap();
    assert!(json.get("by_val").is_none());
    assert!(json.get("in_alloca").is_none());
}

#[test]
fn eh_placeholders_and_invoke_flavors() {
    let mut module = Module::new("eh_corners");

    let mut b = FunctionBuilder::new("pads", Ty::Void);
    let funnel = b.create_block(Some("funnel"));
    let through = b.create_block(Some("through"));
    let result = b.terminate_with(
        Ty::int(32),
        InstKind::Invoke {
            callee: Callee::Asm(InlineAsm {
                signature: Ty::function(vec![], Ty::int(32)),
                code: "syscall".to_string(),
                constraints: "=r".to_string(),
            }),
            signature: Ty::function(vec![], Ty::int(32)),
            args: vec![],
            normal: through,
            unwind: funnel,
        },
    );
    b.switch_to_block(funnel);
    b.push(Ty::Token, InstKind::CleanupPad);
    b.terminate(InstKind::CleanupReturn);
    b.switch_to_block(through);
    b.push(Ty::Token, InstKind::CatchPad);
    let _ = result;
    b.terminate(InstKind::CatchReturn);
    module.add_function(b.finish());

    let mut c = FunctionBuilder::new("switcher", Ty::Void);
    c.terminate(InstKind::CatchSwitch);
    module.add_function(c.finish());

    let mut d = FunctionBuilder::new("br_like", Ty::Void);
    d.terminate(InstKind::CallBranch);
    module.add_function(d.finish());

    let doc = export_module(&module);
    let pads = &doc.functions[0];
    assert!(matches!(
        pads.blocks[0].terminator.repr,
        schema::Inst::InvokeAsm { .. }
    ));
    assert!(matches!(pads.blocks[1].body[0].repr, schema::Inst::CleanupPad));
    assert!(matches!(
        pads.blocks[1].terminator.repr,
        schema::Inst::CleanupReturn
    ));
    assert!(matches!(pads.blocks[2].body[0].repr, schema::Inst::CatchPad));
    assert!(matches!(
        pads.blocks[2].terminator.repr,
        schema::Inst::CatchReturn
    ));
    assert!(matches!(
        doc.functions[1].blocks[0].terminator.repr,
        schema::Inst::CatchSwitch
    ));
    assert!(matches!(
        doc.functions[2].blocks[0].terminator.repr,
        schema::Inst::CallBranch
    ));
}

#[test]
fn unnamed_function_is_tolerated() {
    let mut b = FunctionBuilder::unnamed(Ty::Void);
    b.terminate(InstKind::Return { value: None });
    let mut module = Module::new("anon_fn");
    module.add_function(b.finish());

    // also keep a named intrinsic declaration around the anomaly
    module.add_function(Function::declaration("llvm.donothing", vec![], Ty::Void));

    let doc = export_module(&module);
    assert_eq!(doc.functions.len(), 2);
    assert_eq!(doc.functions[0].name, None);
    assert!(doc.functions[1].is_intrinsic);

    let text = serde_json::to_string(&doc).unwrap();
    assert!(!text.contains(r#""name":null"#));
}

#[test]
fn every_binop_and_predicate_round_trips() {
    let ops = [
        BinOp::Add,
        BinOp::FAdd,
        BinOp::Sub,
        BinOp::FSub,
        BinOp::Mul,
        BinOp::FMul,
        BinOp::UDiv,
        BinOp::SDiv,
        BinOp::FDiv,
        BinOp::URem,
        BinOp::SRem,
        BinOp::FRem,
        BinOp::Shl,
        BinOp::LShr,
        BinOp::AShr,
        BinOp::And,
        BinOp::Or,
        BinOp::Xor,
    ];
    let float_ops = [
        BinOp::FAdd,
        BinOp::FSub,
        BinOp::FMul,
        BinOp::FDiv,
        BinOp::FRem,
    ];

    let mut b = FunctionBuilder::new("arith", Ty::Void);
    let i = b.add_param("i", Ty::int(32));
    let f = b.add_param("f", Ty::Float(FloatKind::Double));
    for op in ops {
        if float_ops.contains(&op) {
            b.push(
                Ty::Float(FloatKind::Double),
                InstKind::Binary {
                    op,
                    lhs: f.clone(),
                    rhs: f.clone(),
                },
            );
        } else {
            b.push(
                Ty::int(32),
                InstKind::Binary {
                    op,
                    lhs: i.clone(),
                    rhs: i.clone(),
                },
            );
        }
    }
    b.terminate(InstKind::Return { value: None });

    let mut module = Module::new("arith");
    module.add_function(b.finish());
    let doc = export_module(&module);

    let opcodes: Vec<_> = doc.functions[0].blocks[0]
        .body
        .iter()
        .map(|inst| match &inst.repr {
            schema::Inst::Binary { opcode, .. } => opcode.clone(),
            other => panic!("expected Binary, got {other:?}"),
        })
        .collect();
    assert_eq!(
        opcodes,
        [
            "add", "fadd", "sub", "fsub", "mul", "fmul", "udiv", "sdiv", "fdiv", "urem", "srem",
            "frem", "shl", "lshr", "ashr", "and", "or", "xor"
        ]
    );
}
