// SPDX-License-Identifier: (MIT OR Apache-2.0)

//! Serializer core - walks an in-memory IR module and emits a single
//! self-describing JSON document.
//!
//! The pipeline is two-phase: [`Serializer::prepare`] labels every
//! argument, block, and instruction of every non-filtered function, then
//! [`Serializer::serialize_module`] emits the document. The split exists
//! because block-address constants in one function cite labels of
//! another; every context must be ready before any emission begins.
//!
//! Error posture: unrepresentable IR is already ruled out by the sum
//! types in `sable_ir`; the defects that remain (duplicate or missing
//! labels, references into unregistered functions, pointer-shaped
//! operands without pointer types) terminate through [`fatal!`].
//! Environment failures surface as [`ExportError`]. Unnamed functions
//! and globals are anomalies: logged, then tolerated.

mod asm;
mod constant;
mod context;
mod function;
mod global;
mod instruction;
pub mod logger;
mod module;
mod pass;
mod probe;
mod types;
mod value;

pub use context::{FnContext, Serializer};
pub use logger::Logger;
pub use module::export_module;
pub use pass::{ExportOptions, ExportPass, Preserved};
pub use probe::{is_debug_function, is_debug_instruction, is_intrinsic_function};
pub use types::serialize_type;

use std::path::PathBuf;
use thiserror::Error;

/// Environment failures of the export pass. Everything else is either
/// tolerated or fatal (see the crate docs).
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("output file already exists: {0}")]
    OutputExists(PathBuf),
    #[error("cannot write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot encode document: {0}")]
    Encode(#[from] serde_json::Error),
}

pub type ExportResult<T> = Result<T, ExportError>;
