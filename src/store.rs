use sea_orm::{DatabaseConnection, EntityTrait, Set};

use crate::{entities::movies, error::AppResult, models::MoviePayload};

/// Persistence handle for the movies table. Holds the connection opened at
/// startup; ids are always bound values, never spliced into SQL text.
#[derive(Clone)]
pub struct MovieStore {
    db: DatabaseConnection,
}

impl MovieStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts one row, returning it with its generated id.
    pub async fn insert(&self, payload: MoviePayload) -> AppResult<movies::Model> {
        let model = movies::ActiveModel {
            id: Default::default(),
            title: Set(payload.title),
            release_date: Set(payload.release_date),
            poster_path: Set(payload.poster_path),
            overview: Set(payload.overview),
            comment: Set(payload.comment),
        };

        let created = movies::Entity::insert(model).exec_with_returning(&self.db).await?;
        Ok(created)
    }

    /// Every row, in no guaranteed order.
    pub async fn list_all(&self) -> AppResult<Vec<movies::Model>> {
        let rows = movies::Entity::find().all(&self.db).await?;
        Ok(rows)
    }

    /// Overwrites all five mutable columns of the matching row. A missing id
    /// yields `Ok(None)`, not an error.
    pub async fn update_by_id(
        &self,
        id: i32,
        payload: MoviePayload,
    ) -> AppResult<Option<movies::Model>> {
        if movies::Entity::find_by_id(id).one(&self.db).await?.is_none() {
            return Ok(None);
        }

        let model = movies::ActiveModel {
            id: Set(id),
            title: Set(payload.title),
            release_date: Set(payload.release_date),
            poster_path: Set(payload.poster_path),
            overview: Set(payload.overview),
            comment: Set(payload.comment),
        };

        let updated = movies::Entity::update(model).exec(&self.db).await?;
        Ok(Some(updated))
    }

    /// Removes the matching row and returns it; `Ok(None)` if nothing matched.
    pub async fn delete_by_id(&self, id: i32) -> AppResult<Option<movies::Model>> {
        let Some(existing) = movies::Entity::find_by_id(id).one(&self.db).await? else {
            return Ok(None);
        };

        movies::Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(Some(existing))
    }
}
