pub mod dispatch;
pub mod grouping;

use std::fs;
use std::path::{Path, PathBuf};

use crate::core::errors::{Error, Result};
use crate::models::item::ItemKind;
use crate::models::report::ArchiveReport;
use crate::services::fs::{create_folder, list_items};

use dispatch::{MoveDispatcher, MoveOutcome, DEFAULT_MAX_CONCURRENCY};
use grouping::group_files;

/// Describes one archive run.
#[derive(Debug, Clone)]
pub struct ArchiveConfig {
    pub source: PathBuf,
    pub destination: PathBuf,
    /// Overrides the lower-cased source folder name.
    pub archive_name: Option<String>,
    pub group_by_extension: bool,
    /// Mirror subdirectories when not grouping. Ignored when grouping.
    pub include_folders: bool,
    pub max_concurrency: usize,
}

impl ArchiveConfig {
    pub fn new(source: impl Into<PathBuf>, destination: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
            archive_name: None,
            group_by_extension: false,
            include_folders: false,
            max_concurrency: DEFAULT_MAX_CONCURRENCY,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.archive_name = Some(name.into());
        self
    }

    pub fn group_by_extension(mut self, enabled: bool) -> Self {
        self.group_by_extension = enabled;
        self
    }

    pub fn include_folders(mut self, enabled: bool) -> Self {
        self.include_folders = enabled;
        self
    }

    pub fn max_concurrency(mut self, limit: usize) -> Self {
        self.max_concurrency = limit;
        self
    }

    /// Path of the folder this run creates under `destination`.
    pub fn archive_root(&self) -> Result<PathBuf> {
        let name = match self.archive_name.as_deref().filter(|n| !n.is_empty()) {
            Some(name) => name.to_string(),
            None => default_archive_name(&self.source)?,
        };
        Ok(self.destination.join(name))
    }
}

/// Last component of `source`, lower-cased. Paths like `.` are canonicalized
/// first.
fn default_archive_name(source: &Path) -> Result<String> {
    if let Some(name) = source.file_name() {
        return Ok(name.to_string_lossy().to_lowercase());
    }
    let resolved = fs::canonicalize(source).map_err(|e| Error::at(e, source))?;
    resolved
        .file_name()
        .map(|name| name.to_string_lossy().to_lowercase())
        .ok_or_else(|| Error::ArchiveName(source.to_path_buf()))
}

/// Copies the contents of a source folder into a freshly created archive
/// folder, either bucketed by extension or mirroring the folder tree.
pub struct Archiver {
    config: ArchiveConfig,
}

impl Archiver {
    pub fn new(config: ArchiveConfig) -> Self {
        Self { config }
    }

    /// Runs the archive to completion. Structural failures (missing source,
    /// name collisions) abort the run; failed copies are collected into the
    /// report instead.
    pub async fn run(&self) -> Result<ArchiveReport> {
        let root = self.config.archive_root()?;
        create_folder(&root)?;
        tracing::info!(
            "Archiving {} into {}",
            self.config.source.display(),
            root.display()
        );

        let mut report = ArchiveReport::new(&root);
        let mut dispatcher = MoveDispatcher::new(self.config.max_concurrency);

        let populated = if self.config.group_by_extension {
            self.populate_grouped(&root, &mut dispatcher, &mut report)
                .await
        } else {
            self.populate_tree(&root, &mut dispatcher, &mut report)
                .await
        };

        // In-flight copies finish before any error is surfaced.
        let outcomes = dispatcher.finish().await;
        populated?;

        for outcome in outcomes? {
            match outcome {
                MoveOutcome::Copied(copied) => report.copied.push(copied),
                MoveOutcome::Failed(failure) => report.failures.push(failure),
            }
        }

        tracing::info!(
            "Archived {} files ({} bytes) into {}, {} folders created, {} failed",
            report.copied.len(),
            report.bytes_copied(),
            root.display(),
            report.folders_created.len(),
            report.failures.len()
        );
        Ok(report)
    }

    async fn populate_grouped(
        &self,
        root: &Path,
        dispatcher: &mut MoveDispatcher,
        report: &mut ArchiveReport,
    ) -> Result<()> {
        let items = list_items(&self.config.source)?;
        let grouped = group_files(items);
        tracing::debug!(
            "Grouped {} files into {} buckets",
            grouped.file_count(),
            grouped.len()
        );

        for (extension, files) in grouped {
            let bucket = root.join(&extension);
            create_folder(&bucket)?;
            tracing::debug!("Created bucket {}", bucket.display());
            report.folders_created.push(bucket.clone());

            for file in files {
                dispatcher.dispatch(file, bucket.clone()).await?;
            }
        }
        Ok(())
    }

    async fn populate_tree(
        &self,
        root: &Path,
        dispatcher: &mut MoveDispatcher,
        report: &mut ArchiveReport,
    ) -> Result<()> {
        let root_identity = fs::canonicalize(root).map_err(|e| Error::at(e, root))?;

        // Depth-first: (source folder, mirror folder) pairs still to visit.
        let mut pending = vec![(self.config.source.clone(), root.to_path_buf())];
        while let Some((source_dir, target_dir)) = pending.pop() {
            for item in list_items(&source_dir)? {
                match item.kind() {
                    ItemKind::File => {
                        dispatcher.dispatch(item, target_dir.clone()).await?;
                    }
                    ItemKind::Directory if !self.config.include_folders => {
                        tracing::trace!("Skipping folder {}", item.path().display());
                    }
                    ItemKind::Directory => {
                        if is_same_folder(item.path(), &root_identity) {
                            tracing::debug!("Skipping archive root {}", item.path().display());
                            continue;
                        }
                        let mirror = target_dir.join(item.file_name());
                        create_folder(&mirror)?;
                        tracing::debug!("Created folder {}", mirror.display());
                        report.folders_created.push(mirror.clone());
                        pending.push((item.path().to_path_buf(), mirror));
                    }
                    ItemKind::Other => {
                        tracing::debug!("Skipping special entry {}", item.path().display());
                    }
                }
            }
        }
        Ok(())
    }
}

fn is_same_folder(candidate: &Path, canonical: &Path) -> bool {
    fs::canonicalize(candidate)
        .map(|resolved| resolved == canonical)
        .unwrap_or(false)
}

/// Archives `source_directory` into `destination_directory/<name>` and waits
/// for every copy to finish.
pub async fn archive(
    group_by_extension: bool,
    include_folders: bool,
    source_directory: impl Into<PathBuf>,
    destination_directory: impl Into<PathBuf>,
    archive_name: Option<&str>,
) -> Result<ArchiveReport> {
    let mut config = ArchiveConfig::new(source_directory, destination_directory)
        .group_by_extension(group_by_extension)
        .include_folders(include_folders);
    if let Some(name) = archive_name {
        config = config.with_name(name);
    }
    Archiver::new(config).run().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn archive_root_defaults_to_lowercased_source_name() -> Result<()> {
        let config = ArchiveConfig::new("/data/Downloads", "/backup");
        assert_eq!(config.archive_root()?, PathBuf::from("/backup/downloads"));

        let config = ArchiveConfig::new("/data/Downloads/", "/backup");
        assert_eq!(config.archive_root()?, PathBuf::from("/backup/downloads"));

        let config = ArchiveConfig::new("/data/Downloads", "/backup").with_name("Keep Case");
        assert_eq!(config.archive_root()?, PathBuf::from("/backup/Keep Case"));
        Ok(())
    }

    #[test]
    fn archive_root_resolves_dot_paths() -> Result<()> {
        let base = TempDir::new().unwrap();
        let source = base.path().join("Photos");
        fs::create_dir(&source)?;

        let config = ArchiveConfig::new(source.join("."), base.path());
        assert_eq!(config.archive_root()?, base.path().join("photos"));
        Ok(())
    }

    #[test]
    fn archive_root_of_filesystem_root_is_an_error() {
        let config = ArchiveConfig::new("/", "/tmp");
        assert!(matches!(config.archive_root(), Err(Error::ArchiveName(_))));
    }

    #[tokio::test]
    async fn tree_mode_skips_its_own_output_folder() -> Result<()> {
        let base = TempDir::new().unwrap();
        let source = base.path().join("inbox");
        fs::create_dir_all(source.join("nested"))?;
        fs::write(source.join("top.txt"), "top")?;
        fs::write(source.join("nested").join("inner.txt"), "inner")?;

        let report = archive(false, true, &source, &source, Some("backup")).await?;

        let root = source.join("backup");
        assert_eq!(report.root, root);
        assert!(root.join("top.txt").is_file());
        assert!(root.join("nested").join("inner.txt").is_file());
        assert!(!root.join("backup").exists());
        Ok(())
    }
}
