use crate::server::{
    data::{author::AuthorRepository, context::LibraryContext},
    error::AppError,
    model::author::{Author, CreateAuthorParams, UpdateAuthorParams, AUTHOR_REQUIRED_FIELDS_MESSAGE},
};

pub const AUTHOR_NOT_FOUND_MESSAGE: &str = "Author not found";

pub struct AuthorService {
    context: LibraryContext,
}

impl AuthorService {
    pub fn new(context: LibraryContext) -> Self {
        Self { context }
    }

    /// Gets every author with their books.
    pub async fn get_all(&mut self) -> Result<Vec<Author>, AppError> {
        Ok(AuthorRepository::new(&mut self.context).get_all().await?)
    }

    /// Gets an author by ID with their books.
    ///
    /// # Returns
    /// - `Ok(Author)` - The requested author
    /// - `Err(AppError::NotFound)` - No author with that ID
    pub async fn get_by_id(&mut self, id: i32) -> Result<Author, AppError> {
        AuthorRepository::new(&mut self.context)
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(AUTHOR_NOT_FOUND_MESSAGE.to_string()))
    }

    /// Creates an author.
    ///
    /// # Returns
    /// - `Ok(Author)` - The created author with its generated ID
    /// - `Err(AppError::BadRequest)` - The name is empty
    pub async fn create(&mut self, params: CreateAuthorParams) -> Result<Author, AppError> {
        if params.name.is_empty() {
            return Err(AppError::BadRequest(
                AUTHOR_REQUIRED_FIELDS_MESSAGE.to_string(),
            ));
        }

        let author = AuthorRepository::new(&mut self.context)
            .create(params)
            .await?;

        tracing::info!(author_id = author.id, "author created");

        Ok(author)
    }

    /// Renames an author.
    ///
    /// # Returns
    /// - `Ok(())` - The author was updated
    /// - `Err(AppError::BadRequest)` - The name is empty
    /// - `Err(AppError::NotFound)` - No author with that ID
    pub async fn update(&mut self, id: i32, params: UpdateAuthorParams) -> Result<(), AppError> {
        if params.name.is_empty() {
            return Err(AppError::BadRequest(
                AUTHOR_REQUIRED_FIELDS_MESSAGE.to_string(),
            ));
        }

        AuthorRepository::new(&mut self.context)
            .update(id, params)
            .await?
            .ok_or_else(|| AppError::NotFound(AUTHOR_NOT_FOUND_MESSAGE.to_string()))?;

        tracing::info!(author_id = id, "author updated");

        Ok(())
    }

    /// Deletes an author and, through the foreign key cascade, their books.
    ///
    /// # Returns
    /// - `Ok(())` - The author was deleted
    /// - `Err(AppError::NotFound)` - No author with that ID
    pub async fn delete(&mut self, id: i32) -> Result<(), AppError> {
        if !AuthorRepository::new(&mut self.context).delete(id).await? {
            return Err(AppError::NotFound(AUTHOR_NOT_FOUND_MESSAGE.to_string()));
        }

        tracing::info!(author_id = id, "author deleted");

        Ok(())
    }
}
