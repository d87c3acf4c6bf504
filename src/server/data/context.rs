//! Unit-of-work over the library database.
//!
//! `LibraryContext` exposes queries for books and authors, stages inserts, updates and
//! deletes in memory, and applies everything staged in one transaction when
//! `save_changes` is called. Field tracking comes from SeaORM's `ActiveModel`: only
//! columns set with `ActiveValue::Set` are written on update.

use sea_orm::{
    ActiveModelTrait, Condition, ConnectOptions, Database, DatabaseConnection, DbErr,
    EntityTrait, IntoActiveModel, QueryFilter, QueryOrder, TransactionTrait,
};

use entity::prelude::{Author, Book};

/// Navigation to eager-load alongside books.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BookInclude {
    #[default]
    None,
    /// Load the referenced author row for each book.
    AuthorDetails,
}

/// Navigation to eager-load alongside authors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthorInclude {
    #[default]
    None,
    /// Load every book referencing the author.
    Books,
}

/// An entity attached to the context for a staged change.
#[derive(Debug, Clone)]
pub enum Tracked {
    Book(entity::book::ActiveModel),
    Author(entity::author::ActiveModel),
}

impl From<entity::book::ActiveModel> for Tracked {
    fn from(model: entity::book::ActiveModel) -> Self {
        Self::Book(model)
    }
}

impl From<entity::book::Model> for Tracked {
    fn from(model: entity::book::Model) -> Self {
        Self::Book(model.into_active_model())
    }
}

impl From<entity::author::ActiveModel> for Tracked {
    fn from(model: entity::author::ActiveModel) -> Self {
        Self::Author(model)
    }
}

impl From<entity::author::Model> for Tracked {
    fn from(model: entity::author::Model) -> Self {
        Self::Author(model.into_active_model())
    }
}

#[derive(Debug, Clone)]
enum StagedChange {
    Insert(Tracked),
    Update(Tracked),
    Delete(Tracked),
}

/// Result of applying one staged change, in staging order.
#[derive(Debug, Clone, PartialEq)]
pub enum SavedChange {
    /// Inserted or updated book row as stored, including its generated id.
    Book(entity::book::Model),
    /// Inserted or updated author row as stored, including its generated id.
    Author(entity::author::Model),
    Deleted { rows_affected: u64 },
}

/// Per-request persistence context.
///
/// Cloning the underlying `DatabaseConnection` shares the pool, so creating a context is
/// cheap; staged changes are never shared between contexts.
pub struct LibraryContext {
    db: DatabaseConnection,
    staged: Vec<StagedChange>,
}

impl LibraryContext {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            db,
            staged: Vec::new(),
        }
    }

    /// Opens a connection pool for `database_url` and wraps it in a fresh context.
    pub async fn connect(database_url: &str) -> Result<Self, DbErr> {
        Ok(Self::new(Self::open_pool(database_url).await?))
    }

    /// Opens the shared connection pool that per-request contexts clone.
    ///
    /// SQLx statement logging is disabled; request logging happens at the HTTP layer.
    pub async fn open_pool(database_url: &str) -> Result<DatabaseConnection, DbErr> {
        let mut opt = ConnectOptions::new(database_url);
        opt.sqlx_logging(false);

        Database::connect(opt).await
    }

    /// Underlying connection, for schema tooling such as migrations.
    pub fn connection(&self) -> &DatabaseConnection {
        &self.db
    }

    /// Queries books matching `filter`, ordered by id.
    ///
    /// # Returns
    /// - `Ok(Vec<(book, author)>)` - The author is `Some` only when `include` requests it
    ///   and the referenced row exists
    /// - `Err(DbErr)` - Database error during the query
    pub async fn query_books(
        &self,
        filter: Condition,
        include: BookInclude,
    ) -> Result<Vec<(entity::book::Model, Option<entity::author::Model>)>, DbErr> {
        let query = Book::find()
            .filter(filter)
            .order_by_asc(entity::book::Column::Id);

        match include {
            BookInclude::AuthorDetails => query.find_also_related(Author).all(&self.db).await,
            BookInclude::None => Ok(query
                .all(&self.db)
                .await?
                .into_iter()
                .map(|book| (book, None))
                .collect()),
        }
    }

    /// Queries authors matching `filter`, ordered by id.
    ///
    /// # Returns
    /// - `Ok(Vec<(author, books)>)` - `books` is empty unless `include` requests it
    /// - `Err(DbErr)` - Database error during the query
    pub async fn query_authors(
        &self,
        filter: Condition,
        include: AuthorInclude,
    ) -> Result<Vec<(entity::author::Model, Vec<entity::book::Model>)>, DbErr> {
        let query = Author::find()
            .filter(filter)
            .order_by_asc(entity::author::Column::Id);

        match include {
            AuthorInclude::Books => query.find_with_related(Book).all(&self.db).await,
            AuthorInclude::None => Ok(query
                .all(&self.db)
                .await?
                .into_iter()
                .map(|author| (author, Vec::new()))
                .collect()),
        }
    }

    /// Finds a book by primary key without loading navigation.
    pub async fn find_book(&self, id: i32) -> Result<Option<entity::book::Model>, DbErr> {
        Book::find_by_id(id).one(&self.db).await
    }

    /// Finds an author by primary key without loading navigation.
    pub async fn find_author(&self, id: i32) -> Result<Option<entity::author::Model>, DbErr> {
        Author::find_by_id(id).one(&self.db).await
    }

    /// Stages an insert. The primary key must be left `NotSet`; it is assigned on commit.
    pub fn add(&mut self, entity: impl Into<Tracked>) {
        self.staged.push(StagedChange::Insert(entity.into()));
    }

    /// Stages an update of the columns marked `Set` on the active model.
    pub fn update(&mut self, entity: impl Into<Tracked>) {
        self.staged.push(StagedChange::Update(entity.into()));
    }

    /// Stages a delete by primary key.
    pub fn remove(&mut self, entity: impl Into<Tracked>) {
        self.staged.push(StagedChange::Delete(entity.into()));
    }

    /// Whether any change is waiting for `save_changes`.
    pub fn has_changes(&self) -> bool {
        !self.staged.is_empty()
    }

    /// Applies every staged change inside a single transaction.
    ///
    /// The staged list is emptied whether or not the commit succeeds. On error the
    /// transaction is dropped without committing, which rolls it back.
    ///
    /// # Returns
    /// - `Ok(Vec<SavedChange>)` - One entry per staged change, in staging order
    /// - `Err(DbErr)` - The database rejected a change (constraint violation, missing row,
    ///   connectivity); nothing was persisted
    pub async fn save_changes(&mut self) -> Result<Vec<SavedChange>, DbErr> {
        let staged = std::mem::take(&mut self.staged);
        if staged.is_empty() {
            return Ok(Vec::new());
        }

        let txn = self.db.begin().await?;
        let mut saved = Vec::with_capacity(staged.len());

        for change in staged {
            let result = match change {
                StagedChange::Insert(Tracked::Book(model)) => {
                    SavedChange::Book(model.insert(&txn).await?)
                }
                StagedChange::Insert(Tracked::Author(model)) => {
                    SavedChange::Author(model.insert(&txn).await?)
                }
                StagedChange::Update(Tracked::Book(model)) => {
                    SavedChange::Book(model.update(&txn).await?)
                }
                StagedChange::Update(Tracked::Author(model)) => {
                    SavedChange::Author(model.update(&txn).await?)
                }
                StagedChange::Delete(Tracked::Book(model)) => SavedChange::Deleted {
                    rows_affected: model.delete(&txn).await?.rows_affected,
                },
                StagedChange::Delete(Tracked::Author(model)) => SavedChange::Deleted {
                    rows_affected: model.delete(&txn).await?.rows_affected,
                },
            };
            saved.push(result);
        }

        txn.commit().await?;

        Ok(saved)
    }
}
