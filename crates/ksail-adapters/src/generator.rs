//! YAML generator adapter.
//!
//! Marshals any `Serialize` model with `serde_yaml` and, when an output path
//! is given, persists it with a safe write: parents are created, and an
//! existing file is only replaced under `force`.

use std::path::Path;
use std::sync::Arc;

use ksail_core::{
    application::ports::{Filesystem, GenerateOptions, Generator},
    error::KsailResult,
};
use serde::Serialize;
use tracing::{debug, instrument};

use crate::error::AdapterError;

/// Marshal-and-write generator shared by every artifact.
#[derive(Clone)]
pub struct YamlGenerator {
    filesystem: Arc<dyn Filesystem>,
}

impl YamlGenerator {
    pub fn new(filesystem: Arc<dyn Filesystem>) -> Self {
        Self { filesystem }
    }

    /// Marshal `model` to YAML without touching the filesystem.
    pub fn render<M: Serialize>(model: &M) -> KsailResult<String> {
        let content = serde_yaml::to_string(model).map_err(|source| AdapterError::Marshal {
            model: model_name::<M>(),
            source,
        })?;
        Ok(content)
    }

    #[instrument(skip_all, fields(path = %path.display(), force = force))]
    fn write(&self, path: &Path, content: &str, force: bool) -> KsailResult<()> {
        if !force && self.filesystem.exists(path) {
            debug!("Target exists and force is off, leaving it untouched");
            return Ok(());
        }

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                self.filesystem.create_dir_all(parent)?;
            }
        }

        self.filesystem.write_file(path, content)
    }
}

impl<M: Serialize> Generator<M> for YamlGenerator {
    fn generate(&self, model: &M, options: &GenerateOptions) -> KsailResult<String> {
        let content = Self::render(model)?;
        if let Some(output) = &options.output {
            self.write(output, &content, options.force)?;
        }
        Ok(content)
    }
}

/// Last path segment of the model's type name, e.g. `KindConfig`.
fn model_name<M>() -> &'static str {
    let full = std::any::type_name::<M>();
    full.rsplit("::").next().unwrap_or(full)
}
