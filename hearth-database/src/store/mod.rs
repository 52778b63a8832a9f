mod file_store;
mod memory_store;

use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use tracing::{error, warn};

use crate::model::member::MemberRecord;
use file_store::FileMemberStore;
use memory_store::MemoryMemberStore;

#[derive(Clone, Debug)]
enum StoreBackend {
    File(FileMemberStore),
    Memory(MemoryMemberStore),
}

/// Shared handle to the member document, passed across crates.
///
/// Every logical operation reads the whole document, mutates it and writes it
/// back. Load failures degrade to an empty store and save failures are logged,
/// so callers never see persistence errors.
#[derive(Clone, Debug)]
pub struct MemberStore {
    backend: StoreBackend,
    saves: Arc<AtomicUsize>,
}

impl MemberStore {
    /// Store backed by a single JSON document on disk.
    pub fn json_file(path: impl Into<PathBuf>) -> Self {
        Self {
            backend: StoreBackend::File(FileMemberStore::new(path.into())),
            saves: Arc::default(),
        }
    }

    /// Store kept in process memory only.
    pub fn in_memory() -> Self {
        Self::with_records(Vec::new())
    }

    /// In-memory store seeded with existing records.
    pub fn with_records(records: Vec<MemberRecord>) -> Self {
        Self {
            backend: StoreBackend::Memory(MemoryMemberStore::new(records)),
            saves: Arc::default(),
        }
    }

    pub async fn load(&self) -> Vec<MemberRecord> {
        let loaded = match &self.backend {
            StoreBackend::File(store) => store.read().await,
            StoreBackend::Memory(store) => store.read().await,
        };

        match loaded {
            Ok(records) => records,
            Err(source) => {
                warn!(?source, "member store unreadable; continuing with an empty store");
                Vec::new()
            }
        }
    }

    pub async fn save(&self, records: &[MemberRecord]) {
        self.saves.fetch_add(1, Ordering::Relaxed);

        let written = match &self.backend {
            StoreBackend::File(store) => store.write(records).await,
            StoreBackend::Memory(store) => store.write(records).await,
        };

        if let Err(source) = written {
            error!(?source, count = records.len(), "failed to save member store");
        }
    }

    /// Number of save attempts made through this handle and its clones.
    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::Relaxed)
    }
}
