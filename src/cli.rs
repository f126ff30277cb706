use archivist::ArchiveConfig;
use clap::Parser;
use std::path::PathBuf;

/// archivist – copy a folder's files into a new archive folder
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Folder whose contents are archived
    #[arg(value_name = "SOURCE")]
    pub source: PathBuf,

    /// Where the archive folder is created (defaults to SOURCE)
    #[arg(value_name = "DESTINATION")]
    pub destination: Option<PathBuf>,

    /// Bucket top-level files into one subfolder per extension
    #[arg(short, long)]
    pub group: bool,

    /// Mirror subfolders recursively (ignored with --group)
    #[arg(short = 'f', long)]
    pub include_folders: bool,

    /// Archive folder name (defaults to the lower-cased SOURCE name)
    #[arg(short, long, value_name = "NAME")]
    pub name: Option<String>,

    /// Maximum number of files copied at once
    #[arg(short, long, value_name = "N", default_value_t = archivist::services::archive::dispatch::DEFAULT_MAX_CONCURRENCY)]
    pub jobs: usize,

    /// Print the final report as JSON on stdout
    #[arg(long)]
    pub json: bool,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn log_directive(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else {
            "info"
        }
    }

    pub fn to_config(&self) -> ArchiveConfig {
        let destination = self
            .destination
            .clone()
            .unwrap_or_else(|| self.source.clone());
        let mut config = ArchiveConfig::new(&self.source, destination)
            .group_by_extension(self.group)
            .include_folders(self.include_folders)
            .max_concurrency(self.jobs);
        if let Some(name) = &self.name {
            config = config.with_name(name);
        }
        config
    }
}
