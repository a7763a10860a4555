//! Service layer for business logic.
//!
//! Services wrap the repositories with retry logic for transient database failures, convert
//! database models into the serialized DTOs, hash user passwords & resolve the catalog item
//! each favorite points to.

pub mod catalog;
pub mod favorite;
pub mod retry;
pub mod user;
