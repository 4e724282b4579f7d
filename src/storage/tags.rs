use anyhow::{Context, Result};
use log::info;

use crate::discipline::{Discipline, DisciplineCounts};
use crate::entities::tag;
use crate::repositories::TagRepository;

use super::TagStore;

impl TagStore {
    /// Get all tags for the list view
    pub async fn get_all_tags(&self) -> Result<Vec<tag::Model>> {
        TagRepository::get_all(&self.conn).await.context("Failed to query tags")
    }

    /// Store a tag
    pub async fn insert_tag(&self, discipline: Discipline, full_tag: &str) -> Result<tag::Model> {
        TagRepository::insert(&self.conn, discipline.as_str(), full_tag)
            .await
            .with_context(|| format!("Failed to insert tag '{}'", full_tag))
    }

    /// Delete every tag whose full tag equals `full_tag`.
    ///
    /// Returns the number of rows removed; an absent tag removes 0 rows.
    pub async fn delete_by_full_tag(&self, full_tag: &str) -> Result<u64> {
        let deleted = TagRepository::delete_by_full_tag(&self.conn, full_tag)
            .await
            .with_context(|| format!("Failed to delete tag '{}'", full_tag))?;
        info!("Storage: Deleted {} row(s) with full_tag '{}'", deleted, full_tag);
        Ok(deleted)
    }

    /// Delete every tag in `discipline`, returning the number of rows removed
    pub async fn delete_by_discipline(&self, discipline: Discipline) -> Result<u64> {
        let deleted = TagRepository::delete_by_discipline(&self.conn, discipline.as_str())
            .await
            .with_context(|| format!("Failed to delete tags in {} discipline", discipline))?;
        info!("Storage: Deleted {} row(s) in {} discipline", deleted, discipline);
        Ok(deleted)
    }

    /// Tag counts per discipline for the completeness chart
    pub async fn discipline_counts(&self) -> Result<DisciplineCounts> {
        let rows = TagRepository::count_by_discipline(&self.conn)
            .await
            .context("Failed to count tags per discipline")?;
        Ok(DisciplineCounts::from_rows(rows))
    }

    /// Total number of stored tags
    pub async fn count_tags(&self) -> Result<u64> {
        TagRepository::count(&self.conn).await.context("Failed to count tags")
    }
}
