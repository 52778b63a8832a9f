use std::sync::Arc;

use tokio::sync::RwLock;

use crate::model::member::MemberRecord;

#[derive(Clone, Debug, Default)]
pub struct MemoryMemberStore {
    records: Arc<RwLock<Vec<MemberRecord>>>,
}

impl MemoryMemberStore {
    pub fn new(records: Vec<MemberRecord>) -> Self {
        Self {
            records: Arc::new(RwLock::new(records)),
        }
    }

    pub async fn read(&self) -> anyhow::Result<Vec<MemberRecord>> {
        Ok(self.records.read().await.clone())
    }

    pub async fn write(&self, records: &[MemberRecord]) -> anyhow::Result<()> {
        *self.records.write().await = records.to_vec();
        Ok(())
    }
}
