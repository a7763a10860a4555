//! Service layer tests running against an in-memory SQLite database.

mod catalog;
mod favorite;
mod user;
