//! Data access layer repositories.
//!
//! Repositories wrap SeaORM queries for each table. They borrow a connection handle passed
//! in by the caller (a pooled connection or an open transaction) and return [`sea_orm::DbErr`]
//! unchanged, including constraint violations raised by the database engine.

pub mod catalog;
pub mod favorite;
pub mod user;
