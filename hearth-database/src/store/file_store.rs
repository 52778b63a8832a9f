use std::io::ErrorKind;
use std::path::PathBuf;

use anyhow::Context as _;

use crate::model::member::MemberRecord;

#[derive(Clone, Debug)]
pub struct FileMemberStore {
    path: PathBuf,
}

impl FileMemberStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub async fn read(&self) -> anyhow::Result<Vec<MemberRecord>> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(source) if source.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(source) => {
                return Err(source)
                    .with_context(|| format!("failed to read `{}`", self.path.display()));
            }
        };

        serde_json::from_slice(&bytes)
            .with_context(|| format!("malformed member document `{}`", self.path.display()))
    }

    /// Replace the whole document. The new content is written next to the
    /// target first so a crash mid-write leaves the previous document intact.
    pub async fn write(&self, records: &[MemberRecord]) -> anyhow::Result<()> {
        let payload =
            serde_json::to_vec_pretty(records).context("failed to serialize member records")?;

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent)
                .await
                .with_context(|| format!("failed to create `{}`", parent.display()))?;
        }

        let staging = self.path.with_extension("json.tmp");
        tokio::fs::write(&staging, payload)
            .await
            .with_context(|| format!("failed to write `{}`", staging.display()))?;
        tokio::fs::rename(&staging, &self.path)
            .await
            .with_context(|| format!("failed to replace `{}`", self.path.display()))?;

        Ok(())
    }
}
