// SPDX-License-Identifier: (MIT OR Apache-2.0)

//! The hookable pass entry the host pipeline invokes once per module.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

use sable_ir::Module;

use crate::module::export_module;
use crate::{ExportError, ExportResult};

/// Options mirrored from the host's option registry.
#[derive(Debug, Clone)]
pub struct ExportOptions {
    /// Path at which to create the JSON file. Creation is `create_new`:
    /// colliding with an existing file is an error.
    pub output: PathBuf,
    /// Raise the log level to Debug.
    pub verbose: bool,
    /// Internal self-test log mode: log the document instead of writing.
    pub test: bool,
}

/// Analysis-preservation token returned to the host pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preserved {
    All,
    None,
}

pub struct ExportPass {
    options: ExportOptions,
}

impl ExportPass {
    pub fn new(options: ExportOptions) -> Self {
        ExportPass { options }
    }

    /// Serialize `module` and deliver the document. The file is opened
    /// only after the document is fully assembled, so a failing run
    /// never leaves a partial file behind. Always reports `None`: the
    /// pass is read-only in practice, but the token stays conservative.
    pub fn run(&self, module: &Module) -> ExportResult<Preserved> {
        log::info!("exporting module {}", module.name);
        let document = export_module(module);
        let text = serde_json::to_string_pretty(&document)?;

        if self.options.test {
            log::info!(
                "self-test: module {} serialized to {} bytes",
                module.name,
                text.len()
            );
            log::debug!("{text}");
        } else {
            self.write_document(&text)?;
            log::info!("wrote {}", self.options.output.display());
        }
        Ok(Preserved::None)
    }

    fn write_document(&self, text: &str) -> ExportResult<()> {
        let path = &self.options.output;
        let mut file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(path)
            .map_err(|source| {
                if source.kind() == std::io::ErrorKind::AlreadyExists {
                    ExportError::OutputExists(path.clone())
                } else {
                    ExportError::Io {
                        path: path.clone(),
                        source,
                    }
                }
            })?;
        file.write_all(text.as_bytes())
            .and_then(|()| file.write_all(b"\n"))
            .map_err(|source| ExportError::Io {
                path: path.clone(),
                source,
            })
    }
}
