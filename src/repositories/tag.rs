//! Tag repository for database operations.

use anyhow::Result;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect,
};

use crate::entities::tag;

/// Repository for tag-related database operations.
pub struct TagRepository;

impl TagRepository {
    /// Get all tags ordered by discipline, then full tag.
    pub async fn get_all<C>(conn: &C) -> Result<Vec<tag::Model>>
    where
        C: ConnectionTrait,
    {
        Ok(tag::Entity::find()
            .order_by_asc(tag::Column::Discipline)
            .order_by_asc(tag::Column::FullTag)
            .order_by_asc(tag::Column::Id)
            .all(conn)
            .await?)
    }

    /// Insert a tag row and return it with its generated id.
    pub async fn insert<C>(conn: &C, discipline: &str, full_tag: &str) -> Result<tag::Model>
    where
        C: ConnectionTrait,
    {
        let model = tag::ActiveModel {
            id: ActiveValue::NotSet,
            discipline: ActiveValue::Set(discipline.to_string()),
            full_tag: ActiveValue::Set(full_tag.to_string()),
        };
        Ok(model.insert(conn).await?)
    }

    /// Delete every row whose full tag matches exactly. Returns the affected row count.
    pub async fn delete_by_full_tag<C>(conn: &C, full_tag: &str) -> Result<u64>
    where
        C: ConnectionTrait,
    {
        let result = tag::Entity::delete_many()
            .filter(tag::Column::FullTag.eq(full_tag))
            .exec(conn)
            .await?;
        Ok(result.rows_affected)
    }

    /// Delete every row in a discipline. Returns the affected row count.
    pub async fn delete_by_discipline<C>(conn: &C, discipline: &str) -> Result<u64>
    where
        C: ConnectionTrait,
    {
        let result = tag::Entity::delete_many()
            .filter(tag::Column::Discipline.eq(discipline))
            .exec(conn)
            .await?;
        Ok(result.rows_affected)
    }

    /// Row counts grouped by the stored discipline text.
    pub async fn count_by_discipline<C>(conn: &C) -> Result<Vec<(String, i64)>>
    where
        C: ConnectionTrait,
    {
        Ok(tag::Entity::find()
            .select_only()
            .column(tag::Column::Discipline)
            .column_as(tag::Column::Id.count(), "count")
            .group_by(tag::Column::Discipline)
            .into_tuple()
            .all(conn)
            .await?)
    }

    /// Total number of rows.
    pub async fn count<C>(conn: &C) -> Result<u64>
    where
        C: ConnectionTrait,
    {
        Ok(tag::Entity::find().count(conn).await?)
    }
}
