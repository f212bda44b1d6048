// SPDX-License-Identifier: (MIT OR Apache-2.0)

//! Display implementations for IR entities (debugging).

use crate::function::Function;
use crate::module::Module;
use std::fmt;

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "func {} : {:?} {{",
            self.name.as_deref().unwrap_or("<unnamed>"),
            self.ty
        )?;
        for block in &self.blocks {
            writeln!(
                f,
                "  block{} ({}):",
                block.id.0,
                block.name.as_deref().unwrap_or("")
            )?;
            for inst in &block.body {
                writeln!(f, "    {:?}", inst.kind)?;
            }
            writeln!(f, "    {:?}", block.terminator.kind)?;
        }
        writeln!(f, "}}")
    }
}

impl fmt::Display for Module {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "module {}", self.name)?;
        for gvar in &self.globals {
            writeln!(
                f,
                "  global {} : {:?}",
                gvar.name.as_deref().unwrap_or("<unnamed>"),
                gvar.ty
            )?;
        }
        for func in &self.functions {
            write!(f, "{}", func)?;
        }
        Ok(())
    }
}
