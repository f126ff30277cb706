use serde::Serialize;
use std::path::PathBuf;

/// A file that was copied into the archive.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct CopiedFile {
    pub source: PathBuf,
    pub destination: PathBuf,
    pub bytes: u64,
}

/// A file that could not be copied. The rest of the run is unaffected.
#[derive(Debug, Serialize, Clone)]
pub struct MoveFailure {
    pub source: PathBuf,
    pub destination: PathBuf,
    pub reason: String,
}

/// Outcome of one archive run, available once every copy has finished.
#[derive(Debug, Serialize, Clone, Default)]
pub struct ArchiveReport {
    pub root: PathBuf,
    pub folders_created: Vec<PathBuf>,
    pub copied: Vec<CopiedFile>,
    pub failures: Vec<MoveFailure>,
}

impl ArchiveReport {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }

    /// True when no copy failed.
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn bytes_copied(&self) -> u64 {
        self.copied.iter().map(|c| c.bytes).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn totals_and_completeness() {
        let mut report = ArchiveReport::new("/tmp/out");
        report.copied.push(CopiedFile {
            source: "a.txt".into(),
            destination: "/tmp/out/a.txt".into(),
            bytes: 3,
        });
        report.copied.push(CopiedFile {
            source: "b.txt".into(),
            destination: "/tmp/out/b.txt".into(),
            bytes: 4,
        });
        assert!(report.is_complete());
        assert_eq!(report.bytes_copied(), 7);

        report.failures.push(MoveFailure {
            source: "c.txt".into(),
            destination: "/tmp/out/c.txt".into(),
            reason: "permission denied".into(),
        });
        assert!(!report.is_complete());
    }

    #[test]
    fn serializes_to_json() {
        let report = ArchiveReport::new("out");
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["root"], "out");
        assert!(json["failures"].as_array().unwrap().is_empty());
    }
}
