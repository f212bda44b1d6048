// SPDX-License-Identifier: (MIT OR Apache-2.0)

//! Document-level invariants over generated modules: determinism, dense
//! function-scoped labels, and reference integrity.

use std::collections::HashMap;

use proptest::prelude::*;
use sable_export::export_module;
use sable_ir::{BinOp, FunctionBuilder, InstKind, Module, Ty, Value};
use sable_schema as schema;
use serde_json::Value as Json;

// ── generators ──────────────────────────────────────────────────────

/// Raw recipe for one straight-line integer function. Operand selectors
/// are resolved against whatever is in scope at build time.
#[derive(Debug, Clone)]
struct FnRecipe {
    params: usize,
    insts: Vec<(u8, u8, u8)>,
}

fn fn_recipe() -> impl Strategy<Value = FnRecipe> {
    (
        0usize..4,
        prop::collection::vec((any::<u8>(), any::<u8>(), any::<u8>()), 1..10),
    )
        .prop_map(|(params, insts)| FnRecipe { params, insts })
}

fn module_recipe() -> impl Strategy<Value = Vec<FnRecipe>> {
    prop::collection::vec(fn_recipe(), 1..4)
}

fn build_module(recipes: &[FnRecipe]) -> Module {
    const OPS: [BinOp; 6] = [
        BinOp::Add,
        BinOp::Sub,
        BinOp::Mul,
        BinOp::And,
        BinOp::Or,
        BinOp::Xor,
    ];
    let mut module = Module::new("generated");
    for (index, recipe) in recipes.iter().enumerate() {
        let mut b = FunctionBuilder::new(format!("f{index}"), Ty::int(32));
        let mut scope: Vec<Value> = (0..recipe.params)
            .map(|p| b.add_param(format!("p{p}"), Ty::int(32)))
            .collect();
        for &(op, lhs, rhs) in &recipe.insts {
            let pick = |selector: u8, scope: &[Value]| -> Value {
                if scope.is_empty() || selector as usize % (scope.len() + 1) == scope.len() {
                    sable_ir::Constant::int(32, selector as i128).into()
                } else {
                    scope[selector as usize % (scope.len() + 1)].clone()
                }
            };
            let result = b.push(
                Ty::int(32),
                InstKind::Binary {
                    op: OPS[op as usize % OPS.len()],
                    lhs: pick(lhs, &scope),
                    rhs: pick(rhs, &scope),
                },
            );
            scope.push(result);
        }
        b.terminate(InstKind::Return {
            value: scope.last().cloned(),
        });
        module.add_function(b.finish());
    }
    module
}

// ── reference-integrity walker ──────────────────────────────────────

struct FnShape {
    blocks: usize,
    insts: usize,
    args: usize,
}

fn function_shapes(doc: &schema::Module) -> HashMap<String, FnShape> {
    doc.functions
        .iter()
        .filter_map(|func| {
            let insts = func
                .blocks
                .iter()
                .map(|block| block.body.len() + 1)
                .sum::<usize>();
            Some((
                func.name.clone()?,
                FnShape {
                    blocks: func.blocks.len(),
                    insts,
                    args: func.params.len(),
                },
            ))
        })
        .collect()
}

/// Walk a function's JSON and check every cross-reference it carries.
fn check_references(json: &Json, shape: &FnShape, shapes: &HashMap<String, FnShape>) {
    match json {
        Json::Object(fields) => {
            if fields.len() == 1 {
                let (key, payload) = fields.iter().next().unwrap();
                match (key.as_str(), payload) {
                    ("Instruction", Json::Object(payload)) => {
                        if let Some(index) = payload.get("index").and_then(Json::as_u64) {
                            assert!(
                                (index as usize) < shape.insts,
                                "instruction reference {index} out of range"
                            );
                        }
                    }
                    ("Argument", Json::Object(payload)) => {
                        if let Some(index) = payload.get("index").and_then(Json::as_u64) {
                            assert!(
                                (index as usize) < shape.args,
                                "argument reference {index} out of range"
                            );
                        }
                    }
                    ("Label", Json::Object(payload)) => {
                        let func = payload["func"].as_str().unwrap();
                        let block = payload["block"].as_u64().unwrap() as usize;
                        let target = shapes
                            .get(func)
                            .unwrap_or_else(|| panic!("label cites unknown function {func}"));
                        assert!(block < target.blocks, "label cites missing block {block}");
                    }
                    _ => {}
                }
            }
            for value in fields.values() {
                check_references(value, shape, shapes);
            }
        }
        Json::Array(items) => {
            for item in items {
                check_references(item, shape, shapes);
            }
        }
        _ => {}
    }
}

// ── properties ──────────────────────────────────────────────────────

proptest! {
    #[test]
    fn export_is_deterministic(recipes in module_recipe()) {
        let module = build_module(&recipes);
        let first = serde_json::to_string_pretty(&export_module(&module)).unwrap();
        let second = serde_json::to_string_pretty(&export_module(&module)).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn labels_are_dense_per_function(recipes in module_recipe()) {
        let doc = export_module(&build_module(&recipes));
        for func in &doc.functions {
            let mut inst_labels = Vec::new();
            for (position, block) in func.blocks.iter().enumerate() {
                prop_assert_eq!(block.label, position);
                for inst in &block.body {
                    inst_labels.push(inst.index);
                }
                inst_labels.push(block.terminator.index);
            }
            let expected: Vec<usize> = (0..inst_labels.len()).collect();
            prop_assert_eq!(inst_labels, expected);
        }
    }

    #[test]
    fn references_resolve(recipes in module_recipe()) {
        let doc = export_module(&build_module(&recipes));
        let shapes = function_shapes(&doc);
        for func in &doc.functions {
            let name = func.name.clone().unwrap();
            let json = serde_json::to_value(func).unwrap();
            check_references(&json, &shapes[&name], &shapes);
        }
    }
}

// ── directed variants of the same invariants ────────────────────────

#[test]
fn two_runs_are_byte_identical_on_a_branching_function() {
    let mut b = FunctionBuilder::new("loops", Ty::int(32));
    let n = b.add_param("n", Ty::int(32));
    let header = b.create_block(Some("header"));
    let exit = b.create_block(Some("exit"));
    b.terminate(InstKind::Branch {
        cond: None,
        targets: vec![header],
    });
    b.switch_to_block(header);
    let cond = b.push(
        Ty::int(1),
        InstKind::Compare {
            predicate: sable_ir::Predicate::IEq,
            lhs: n.clone(),
            rhs: sable_ir::Constant::int(32, 0).into(),
        },
    );
    b.terminate(InstKind::Branch {
        cond: Some(cond),
        targets: vec![exit, header],
    });
    b.switch_to_block(exit);
    b.terminate(InstKind::Return { value: Some(n) });

    let mut module = Module::new("m");
    module.add_function(b.finish());

    let first = serde_json::to_string_pretty(&export_module(&module)).unwrap();
    let second = serde_json::to_string_pretty(&export_module(&module)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn document_round_trips_through_the_schema() {
    let module = build_module(&[
        FnRecipe {
            params: 2,
            insts: vec![(0, 0, 1), (2, 2, 9), (5, 1, 3)],
        },
        FnRecipe {
            params: 0,
            insts: vec![(1, 7, 7)],
        },
    ]);
    let doc = export_module(&module);
    let text = serde_json::to_string_pretty(&doc).unwrap();
    let parsed: schema::Module = serde_json::from_str(&text).unwrap();
    assert_eq!(parsed, doc);
}
