//! User account service.

use sea_orm::DatabaseConnection;

use crate::{
    model::user::{NewUserParams, UserChanges, UserDto},
    server::{
        data::user::UserRepository, error::Error, service::retry::RetryContext,
        util::password::hash_password,
    },
};

/// Service for managing user accounts.
///
/// Passwords are hashed before they reach the repository and users are only ever returned as
/// [`UserDto`] so the stored hash never leaves this layer.
pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new instance of UserService.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a user, hashing the provided plain text password with Argon2id.
    ///
    /// # Returns
    /// - `Ok(UserDto)` - The created user
    /// - `Err(Error::PasswordHashError)` - Password could not be hashed
    /// - `Err(Error::DbErr)` - Insert failed, including a duplicate email
    pub async fn create_user(&self, params: NewUserParams) -> Result<UserDto, Error> {
        let password_hash = hash_password(&params.password)?;

        let ctx = RetryContext::new();
        let db = self.db.clone();

        ctx.execute_with_retry(&format!("create user {}", params.email), || {
            let db = db.clone();
            let email = params.email.clone();
            let password_hash = password_hash.clone();
            let is_active = params.is_active;

            Box::pin(async move {
                let user = UserRepository::new(&db)
                    .create(email, password_hash, is_active)
                    .await?;

                Ok(UserDto::from(user))
            })
        })
        .await
    }

    /// Retrieves a single user.
    ///
    /// # Returns
    /// - `Ok(Some(UserDto))` - User found
    /// - `Ok(None)` - No user exists with the provided ID
    /// - `Err(Error::DbErr)` - Database operation failed after retries
    pub async fn get_user(&self, user_id: i32) -> Result<Option<UserDto>, Error> {
        let ctx = RetryContext::new();
        let db = self.db.clone();

        ctx.execute_with_retry(&format!("get user ID {}", user_id), || {
            let db = db.clone();

            Box::pin(async move {
                let user = UserRepository::new(&db).get(user_id).await?;

                Ok(user.map(UserDto::from))
            })
        })
        .await
    }

    pub async fn get_users(&self) -> Result<Vec<UserDto>, Error> {
        let ctx = RetryContext::new();
        let db = self.db.clone();

        ctx.execute_with_retry("get all users", || {
            let db = db.clone();

            Box::pin(async move {
                let users = UserRepository::new(&db).get_all().await?;

                Ok(users.into_iter().map(UserDto::from).collect())
            })
        })
        .await
    }

    /// Applies a partial update to a user, a new password is hashed before storage.
    ///
    /// # Returns
    /// - `Ok(Some(UserDto))` - The updated user
    /// - `Ok(None)` - No user exists with the provided ID
    /// - `Err(Error::PasswordHashError)` - New password could not be hashed
    /// - `Err(Error::DbErr)` - Update failed, including an email already in use
    pub async fn update_user(
        &self,
        user_id: i32,
        changes: UserChanges,
    ) -> Result<Option<UserDto>, Error> {
        let password_hash = changes
            .password
            .as_deref()
            .map(hash_password)
            .transpose()?;

        let ctx = RetryContext::new();
        let db = self.db.clone();

        ctx.execute_with_retry(&format!("update user ID {}", user_id), || {
            let db = db.clone();
            let email = changes.email.clone();
            let password_hash = password_hash.clone();
            let is_active = changes.is_active;

            Box::pin(async move {
                let user = UserRepository::new(&db)
                    .update(user_id, email, password_hash, is_active)
                    .await?;

                Ok(user.map(UserDto::from))
            })
        })
        .await
    }

    /// Deletes a user, their favorites are removed by the cascading foreign key.
    ///
    /// # Returns
    /// - `Ok(true)` - User was deleted
    /// - `Ok(false)` - No user exists with the provided ID
    pub async fn delete_user(&self, user_id: i32) -> Result<bool, Error> {
        let ctx = RetryContext::new();
        let db = self.db.clone();

        ctx.execute_with_retry(&format!("delete user ID {}", user_id), || {
            let db = db.clone();

            Box::pin(async move {
                let result = UserRepository::new(&db).delete(user_id).await?;

                Ok(result.rows_affected > 0)
            })
        })
        .await
    }
}
