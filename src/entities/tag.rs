use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::discipline::Discipline;

/// One row of the `tags` table.
///
/// `full_tag` is the natural key used for deletion but carries no unique
/// constraint, so deleting by it removes every duplicate.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "tags")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub discipline: String,
    pub full_tag: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Parsed discipline, `None` if the stored text is not a known discipline
    pub fn parsed_discipline(&self) -> Option<Discipline> {
        self.discipline.parse().ok()
    }
}
