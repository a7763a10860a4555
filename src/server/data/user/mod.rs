use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryOrder,
};

pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new instance of [`UserRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new user
    ///
    /// # Arguments
    /// - `email` (`String`): Unique email of the user, a duplicate results in a unique constraint error
    /// - `password_hash` (`String`): Already hashed password, stored as is
    /// - `is_active` (`bool`): Whether the account is active
    pub async fn create(
        &self,
        email: String,
        password_hash: String,
        is_active: bool,
    ) -> Result<entity::user::Model, DbErr> {
        let user = entity::user::ActiveModel {
            email: ActiveValue::Set(email),
            password: ActiveValue::Set(password_hash),
            is_active: ActiveValue::Set(is_active),
            ..Default::default()
        };

        user.insert(self.db).await
    }

    pub async fn get(&self, user_id: i32) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find_by_id(user_id)
            .one(self.db)
            .await
    }

    pub async fn get_all(&self) -> Result<Vec<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .order_by_asc(entity::user::Column::Id)
            .all(self.db)
            .await
    }

    /// Updates the provided fields of a user, `None` fields are left unchanged
    ///
    /// # Returns
    /// - `Ok(Some(_))`: The updated user
    /// - `Ok(None)`: No user exists with the provided ID
    /// - `Err(DbErr)`: Database error such as a unique constraint violation on `email`
    pub async fn update(
        &self,
        user_id: i32,
        email: Option<String>,
        password_hash: Option<String>,
        is_active: Option<bool>,
    ) -> Result<Option<entity::user::Model>, DbErr> {
        let user = match entity::prelude::User::find_by_id(user_id)
            .one(self.db)
            .await?
        {
            Some(user) => user,
            None => return Ok(None),
        };

        let mut user_am = user.into_active_model();
        if let Some(email) = email {
            user_am.email = ActiveValue::Set(email);
        }
        if let Some(password_hash) = password_hash {
            user_am.password = ActiveValue::Set(password_hash);
        }
        if let Some(is_active) = is_active {
            user_am.is_active = ActiveValue::Set(is_active);
        }

        let user = user_am.update(self.db).await?;

        Ok(Some(user))
    }

    /// Deletes a user along with all of their favorites
    ///
    /// Returns OK regardless of user existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, user_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::User::delete_by_id(user_id)
            .exec(self.db)
            .await
    }
}
