use std::fs;
use std::io;
use std::path::PathBuf;

use crate::error::{FbbError, Result};

const PAGE_EXTENSION: &str = "html";

/// Flat-file store of fetched pages, one UTF-8 HTML file per page name.
///
/// Names are bare page names (`mainpage`, a municipality id); the `.html`
/// extension is the cache's own affair.
#[derive(Debug, Clone)]
pub struct PageCache {
    dir: PathBuf,
}

impl PageCache {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn page_path(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{name}.{PAGE_EXTENSION}"))
    }

    /// Persist a page, overwriting any previous copy.
    pub fn write(&self, name: &str, text: &str) -> Result<()> {
        fs::create_dir_all(&self.dir)?;
        let path = self.page_path(name);
        fs::write(&path, text)?;
        tracing::info!(path = %path.display(), bytes = text.len(), "Cached page");
        Ok(())
    }

    /// Read a previously cached page.
    pub fn read(&self, name: &str) -> Result<String> {
        match fs::read_to_string(self.page_path(name)) {
            Ok(text) => Ok(text),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                Err(FbbError::PageNotCached(name.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }

    pub fn exists(&self, name: &str) -> bool {
        self.page_path(name).is_file()
    }

    /// Names of all cached pages, in filesystem enumeration order.
    ///
    /// A cache directory that doesn't exist yet enumerates as empty.
    pub fn list_cached_names(&self) -> Result<Vec<String>> {
        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut names = Vec::new();
        for entry in entries {
            let path = entry?.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some(PAGE_EXTENSION) {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) {
                names.push(stem.to_string());
            }
        }
        Ok(names)
    }
}
