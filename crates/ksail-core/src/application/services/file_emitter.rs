//! File Emitter - idempotent write of a single artifact.
//!
//! For one output path the emitter decides between skipping, creating and
//! overwriting, delegates the actual marshal-and-write to a [`Generator`], and
//! reports exactly one [`ScaffoldEvent`].
//!
//! Forced overwrites always advance the file's modification time, even when
//! the write lands in the same filesystem clock tick as the previous one, so
//! mtime-based caches and watchers downstream observe every change.

use std::io;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

use tracing::{debug, info, instrument};

use crate::{
    application::{
        ApplicationError,
        events::{EventSink, ScaffoldEvent},
        ports::{Filesystem, GenerateOptions, Generator},
    },
    domain::Artifact,
    error::KsailResult,
};

/// Smallest step a forced overwrite moves the mtime forward.
pub const MTIME_STEP: Duration = Duration::from_millis(1);

/// One artifact to emit. Transient; built per call.
#[derive(Debug)]
pub struct GenerationRequest<'a, M> {
    pub model: &'a M,
    pub output_path: PathBuf,
    /// Name used in events, usually the path relative to the output dir.
    pub display_name: String,
    /// Selects the sentinel a failure is wrapped in.
    pub artifact: Artifact,
    pub force: bool,
}

/// Emits artifacts through a shared filesystem port.
pub struct FileEmitter<'a> {
    filesystem: &'a dyn Filesystem,
}

impl<'a> FileEmitter<'a> {
    pub fn new(filesystem: &'a dyn Filesystem) -> Self {
        Self { filesystem }
    }

    /// Emit one artifact.
    ///
    /// Existing file and no `force`: `Skipped`, generator not called.
    /// Otherwise the generator runs and `Created` or `Overwrote` is reported.
    pub fn emit<M>(
        &self,
        generator: &dyn Generator<M>,
        request: GenerationRequest<'_, M>,
        sink: &mut dyn EventSink,
    ) -> KsailResult<()> {
        self.emit_replacing(generator, request, None, sink)
    }

    /// Like [`Self::emit`], for a file the caller has just removed.
    ///
    /// `replaced` is the removed file's mtime. The artifact is then treated as
    /// pre-existing: the new mtime must move past `replaced` and the event is
    /// `Overwrote`.
    #[instrument(
        skip_all,
        fields(artifact = %request.artifact, path = %request.output_path.display(), force = request.force)
    )]
    pub fn emit_replacing<M>(
        &self,
        generator: &dyn Generator<M>,
        request: GenerationRequest<'_, M>,
        replaced: Option<SystemTime>,
        sink: &mut dyn EventSink,
    ) -> KsailResult<()> {
        let GenerationRequest {
            model,
            output_path,
            display_name,
            artifact,
            force,
        } = request;

        // 1. Existence check
        let previous = replaced.or_else(|| self.existing_mtime(&output_path));

        // 2. Skip
        if previous.is_some() && !force {
            info!("File exists, skipping");
            sink.emit(ScaffoldEvent::Skipped(display_name));
            return Ok(());
        }

        // 3. Generate
        let options = GenerateOptions::write_to(&output_path, force);
        generator
            .generate(model, &options)
            .map_err(|e| ApplicationError::generation_failed(artifact, e))?;

        // 4. mtime monotonicity for forced overwrites
        if let Some(previous) = previous {
            self.ensure_mtime_advanced(&output_path, previous)
                .map_err(|e| ApplicationError::generation_failed(artifact, e))?;
            info!("Overwrote file");
            sink.emit(ScaffoldEvent::Overwrote(display_name));
        } else {
            info!("Created file");
            sink.emit(ScaffoldEvent::Created(display_name));
        }

        Ok(())
    }

    /// mtime of an existing file, `None` when it does not exist.
    ///
    /// Errors other than not-found are treated as not-found.
    // TODO: surface PermissionDenied separately once restricted-fs fixtures
    // no longer depend on falling through to a write attempt.
    fn existing_mtime(&self, path: &Path) -> Option<SystemTime> {
        match self.filesystem.stat(path) {
            Ok(stat) => Some(stat.modified),
            Err(e) if e.kind() == io::ErrorKind::NotFound => None,
            Err(e) => {
                debug!(error = %e, "stat failed, treating as missing");
                None
            }
        }
    }

    fn ensure_mtime_advanced(&self, path: &Path, previous: SystemTime) -> KsailResult<()> {
        let current = self
            .filesystem
            .stat(path)
            .map_err(|e| ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: format!("Failed to stat after write: {}", e),
            })?;

        if current.modified > previous {
            return Ok(());
        }

        let bumped = (previous + MTIME_STEP).max(SystemTime::now());
        debug!(?previous, ?bumped, "mtime did not advance, bumping");
        self.filesystem.set_modified(path, bumped)
    }
}
