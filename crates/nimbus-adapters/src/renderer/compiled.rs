//! Template loading and the compiled-template cache shared by the Mustache
//! adapters.
//!
//! Templates resolve against a root directory; `{{> name}}` partials resolve
//! against `<root>/partials`. Compiled templates are cached in-process keyed
//! by relative path and revalidated against the file's modification time.
//! Partials are inlined at compile time, so a cached entry also records the
//! state of the partials directory and is recompiled when any partial
//! changes.

use std::{
    collections::HashMap,
    fs, io,
    path::{Path, PathBuf},
    sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard},
    time::SystemTime,
};

use nimbus_core::{
    application::ApplicationError,
    domain::{NameNormalization, PARTIALS_DIR, RenderData, TemplateRef},
    error::NimbusResult,
};
use tracing::{debug, trace};
use walkdir::WalkDir;

/// Root directory plus the templates compiled from it.
pub(crate) struct CompiledTemplates {
    state: RwLock<LoaderState>,
}

struct LoaderState {
    root: PathBuf,
    /// Bumped on every re-root so a compile that raced a directory change
    /// is not cached under the new root.
    generation: u64,
    cache: HashMap<PathBuf, CachedTemplate>,
}

struct CachedTemplate {
    template: Arc<mustache::Template>,
    modified: Option<SystemTime>,
    partials: PartialsStamp,
}

/// File count and newest modification time under `<root>/partials`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct PartialsStamp {
    files: usize,
    newest: Option<SystemTime>,
}

impl PartialsStamp {
    fn scan(dir: &Path) -> Self {
        let mut stamp = Self::default();
        for entry in WalkDir::new(dir)
            .follow_links(true)
            .into_iter()
            .filter_map(Result::ok)
            .filter(|e| e.file_type().is_file())
        {
            stamp.files += 1;
            let modified = entry.metadata().ok().and_then(|m| m.modified().ok());
            stamp.newest = stamp.newest.max(modified);
        }
        stamp
    }
}

impl CompiledTemplates {
    pub(crate) fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            state: RwLock::new(LoaderState {
                root: root.into(),
                generation: 0,
                cache: HashMap::new(),
            }),
        }
    }

    pub(crate) fn root(&self) -> NimbusResult<PathBuf> {
        Ok(self.read()?.root.clone())
    }

    /// Re-root the loader and drop every compiled template.
    pub(crate) fn set_root(&self, root: &Path) -> NimbusResult<()> {
        let mut state = self.write()?;
        debug!(
            from = %state.root.display(),
            to = %root.display(),
            dropped = state.cache.len(),
            "Re-rooting template loader"
        );
        state.root = root.to_path_buf();
        state.generation += 1;
        state.cache.clear();
        Ok(())
    }

    /// Absolute path `template` resolves to.
    pub(crate) fn path_for(
        &self,
        template: &TemplateRef,
        normalization: NameNormalization,
    ) -> NimbusResult<PathBuf> {
        Ok(self
            .read()?
            .root
            .join(template.relative_path(normalization)))
    }

    pub(crate) fn exists(&self, template: &TemplateRef, normalization: NameNormalization) -> bool {
        self.path_for(template, normalization)
            .map(|p| p.is_file())
            .unwrap_or(false)
    }

    pub(crate) fn clear(&self) -> NimbusResult<()> {
        self.write()?.cache.clear();
        Ok(())
    }

    pub(crate) fn len(&self) -> usize {
        self.read().map(|s| s.cache.len()).unwrap_or(0)
    }

    /// Load (or reuse) the compiled template and render it with `data`.
    pub(crate) fn render(
        &self,
        template: &TemplateRef,
        normalization: NameNormalization,
        data: &RenderData,
    ) -> NimbusResult<String> {
        let compiled = self.load(template, normalization)?;

        let mut out = Vec::new();
        compiled
            .render(&mut out, data.as_map())
            .map_err(|e| rendering_failed(template, e))?;

        String::from_utf8(out).map_err(|e| rendering_failed(template, e))
    }

    fn load(
        &self,
        template: &TemplateRef,
        normalization: NameNormalization,
    ) -> NimbusResult<Arc<mustache::Template>> {
        let relative = template.relative_path(normalization);
        let (root, generation) = {
            let state = self.read()?;
            (state.root.clone(), state.generation)
        };
        let path = root.join(&relative);

        let modified = match fs::metadata(&path) {
            Ok(meta) if meta.is_file() => meta.modified().ok(),
            Ok(_) => return Err(not_found(template, path)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Err(not_found(template, path)),
            Err(e) => return Err(io_error(path, e)),
        };

        let partials_dir = root.join(PARTIALS_DIR);
        let partials_stamp = PartialsStamp::scan(&partials_dir);

        if let Some(hit) = self.read()?.cache.get(&relative) {
            if hit.modified == modified && hit.partials == partials_stamp {
                trace!(template = %template, "Compiled template cache hit");
                return Ok(Arc::clone(&hit.template));
            }
        }

        debug!(template = %template, path = %path.display(), "Compiling template");
        let source = fs::read_to_string(&path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => not_found(template, path.clone()),
            _ => io_error(path.clone(), e),
        })?;

        let partials = mustache::Context::new(partials_dir);
        let compiled = Arc::new(
            partials
                .compile(source.chars())
                .map_err(|e| rendering_failed(template, e))?,
        );

        let mut state = self.write()?;
        if state.generation == generation {
            state.cache.insert(
                relative,
                CachedTemplate {
                    template: Arc::clone(&compiled),
                    modified,
                    partials: partials_stamp,
                },
            );
        }

        Ok(compiled)
    }

    /// Poison the state lock by panicking while holding it.
    #[cfg(test)]
    pub(crate) fn poison(&self) {
        let _ = std::thread::scope(|s| {
            s.spawn(|| {
                let _guard = self.state.write();
                panic!("poisoning loader state");
            })
            .join()
        });
    }

    fn read(&self) -> NimbusResult<RwLockReadGuard<'_, LoaderState>> {
        self.state
            .read()
            .map_err(|_| ApplicationError::StateLock.into())
    }

    fn write(&self) -> NimbusResult<RwLockWriteGuard<'_, LoaderState>> {
        self.state
            .write()
            .map_err(|_| ApplicationError::StateLock.into())
    }
}

fn not_found(template: &TemplateRef, path: PathBuf) -> nimbus_core::error::NimbusError {
    ApplicationError::TemplateNotFound {
        name: template.to_string(),
        path,
    }
    .into()
}

fn io_error(path: PathBuf, e: io::Error) -> nimbus_core::error::NimbusError {
    ApplicationError::TemplateIo {
        path,
        reason: e.to_string(),
    }
    .into()
}

fn rendering_failed(
    template: &TemplateRef,
    e: impl std::fmt::Display,
) -> nimbus_core::error::NimbusError {
    ApplicationError::RenderingFailed {
        template: template.to_string(),
        reason: e.to_string(),
    }
    .into()
}
