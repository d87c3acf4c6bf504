//! Author data repository.

use sea_orm::{ActiveValue, ColumnTrait, Condition, DbErr};

use crate::server::{
    data::context::{AuthorInclude, LibraryContext, SavedChange},
    model::author::{Author, CreateAuthorParams, UpdateAuthorParams},
};

/// Repository providing author operations over a per-request `LibraryContext`.
pub struct AuthorRepository<'a> {
    context: &'a mut LibraryContext,
}

impl<'a> AuthorRepository<'a> {
    pub fn new(context: &'a mut LibraryContext) -> Self {
        Self { context }
    }

    /// Gets every author with their books eager-loaded, ordered by id.
    pub async fn get_all(&self) -> Result<Vec<Author>, DbErr> {
        let authors = self
            .context
            .query_authors(Condition::all(), AuthorInclude::Books)
            .await?;

        Ok(authors
            .into_iter()
            .map(|(author, books)| Author::from_entity(author, books))
            .collect())
    }

    /// Gets an author by ID with their books eager-loaded.
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Author>, DbErr> {
        let authors = self
            .context
            .query_authors(
                Condition::all().add(entity::author::Column::Id.eq(id)),
                AuthorInclude::Books,
            )
            .await?;

        Ok(authors
            .into_iter()
            .next()
            .map(|(author, books)| Author::from_entity(author, books)))
    }

    /// Checks whether an author with the given ID exists.
    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        Ok(self.context.find_author(id).await?.is_some())
    }

    /// Inserts a new author and returns it with its generated ID and no books.
    pub async fn create(&mut self, params: CreateAuthorParams) -> Result<Author, DbErr> {
        self.context.add(entity::author::ActiveModel {
            name: ActiveValue::Set(params.name),
            ..Default::default()
        });

        let saved = self.context.save_changes().await?;

        Ok(Author::from_entity(saved_author(saved)?, Vec::new()))
    }

    /// Overwrites the name of an existing author.
    ///
    /// # Returns
    /// - `Ok(Some(Author))` - The author as stored after the update, books not loaded
    /// - `Ok(None)` - No author with that ID
    /// - `Err(DbErr)` - Database error during the update
    pub async fn update(
        &mut self,
        id: i32,
        params: UpdateAuthorParams,
    ) -> Result<Option<Author>, DbErr> {
        let Some(author) = self.context.find_author(id).await? else {
            return Ok(None);
        };

        let mut active_model: entity::author::ActiveModel = author.into();
        active_model.name = ActiveValue::Set(params.name);

        self.context.update(active_model);
        let saved = self.context.save_changes().await?;

        Ok(Some(Author::from_entity(saved_author(saved)?, Vec::new())))
    }

    /// Deletes an author by ID. Books referencing the author are removed by the
    /// `ON DELETE CASCADE` foreign key.
    ///
    /// # Returns
    /// - `Ok(true)` - The author existed and was deleted
    /// - `Ok(false)` - No author with that ID
    /// - `Err(DbErr)` - Database error during the delete
    pub async fn delete(&mut self, id: i32) -> Result<bool, DbErr> {
        let Some(author) = self.context.find_author(id).await? else {
            return Ok(false);
        };

        self.context.remove(author);
        self.context.save_changes().await?;

        Ok(true)
    }
}

fn saved_author(saved: Vec<SavedChange>) -> Result<entity::author::Model, DbErr> {
    saved
        .into_iter()
        .find_map(|change| match change {
            SavedChange::Author(model) => Some(model),
            _ => None,
        })
        .ok_or_else(|| DbErr::Custom("Author row was not returned after save".to_string()))
}
