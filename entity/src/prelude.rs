pub use super::author::Entity as Author;
pub use super::book::Entity as Book;
