use std::path::PathBuf;
use std::sync::Arc;

use tokio::sync::Semaphore;
use tokio::task::JoinSet;

use crate::core::errors::{Error, Result};
use crate::models::item::Item;
use crate::models::report::{CopiedFile, MoveFailure};
use crate::services::fs::move_file;

pub const DEFAULT_MAX_CONCURRENCY: usize = 16;

/// Result of a single copy task.
#[derive(Debug)]
pub enum MoveOutcome {
    Copied(CopiedFile),
    Failed(MoveFailure),
}

/// Bounded pool of copy tasks. Every dispatched copy is awaited by
/// [`MoveDispatcher::finish`].
pub struct MoveDispatcher {
    tasks: JoinSet<MoveOutcome>,
    permits: Arc<Semaphore>,
}

impl MoveDispatcher {
    pub fn new(max_concurrency: usize) -> Self {
        Self {
            tasks: JoinSet::new(),
            permits: Arc::new(Semaphore::new(max_concurrency.max(1))),
        }
    }

    /// Queues a copy of `item` into `output_folder`. Waits while the pool is
    /// saturated.
    pub async fn dispatch(&mut self, item: Item, output_folder: PathBuf) -> Result<()> {
        tracing::debug!(
            "Dispatching copy of {} into {}",
            item.path().display(),
            output_folder.display()
        );

        self.spawn_limited(move || match move_file(&item, &output_folder) {
            Ok(copied) => MoveOutcome::Copied(copied),
            Err(e) => {
                tracing::warn!("Failed to copy {}: {}", item.path().display(), e);
                MoveOutcome::Failed(MoveFailure {
                    source: item.path().to_path_buf(),
                    destination: output_folder.join(item.file_name()),
                    reason: e.to_string(),
                })
            }
        })
        .await
    }

    /// Runs `job` on the blocking pool once a permit is free. The permit is
    /// held until the job returns.
    async fn spawn_limited<F>(&mut self, job: F) -> Result<()>
    where
        F: FnOnce() -> MoveOutcome + Send + 'static,
    {
        let permit = Arc::clone(&self.permits)
            .acquire_owned()
            .await
            .map_err(|e| Error::Other(format!("copy pool closed: {e}")))?;

        self.tasks.spawn_blocking(move || {
            let _permit = permit;
            job()
        });
        Ok(())
    }

    /// Waits for every dispatched copy. A panicked task is reported after the
    /// remaining tasks have been drained.
    pub async fn finish(mut self) -> Result<Vec<MoveOutcome>> {
        let mut outcomes = Vec::with_capacity(self.tasks.len());
        let mut first_panic = None;
        while let Some(joined) = self.tasks.join_next().await {
            match joined {
                Ok(outcome) => outcomes.push(outcome),
                Err(e) => {
                    tracing::error!("Copy task panicked: {}", e);
                    first_panic.get_or_insert(e);
                }
            }
        }
        match first_panic {
            Some(e) => Err(Error::Task(e)),
            None => Ok(outcomes),
        }
    }
}
