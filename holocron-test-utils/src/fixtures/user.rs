use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

/// Password hash stored for users inserted through fixtures
pub const TEST_PASSWORD_HASH: &str = "test_password_hash";

impl TestContext {
    pub fn user<'a>(&'a self) -> UserFixtures<'a> {
        UserFixtures { setup: self }
    }
}

pub struct UserFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> UserFixtures<'a> {
    /// Inserts an active user with the provided email & a placeholder password hash
    pub async fn insert_user(&self, email: &str) -> Result<entity::user::Model, TestError> {
        Ok(entity::prelude::User::insert(entity::user::ActiveModel {
            email: ActiveValue::Set(email.to_string()),
            password: ActiveValue::Set(TEST_PASSWORD_HASH.to_string()),
            is_active: ActiveValue::Set(true),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.db)
        .await?)
    }

    pub async fn get_user(&self, user_id: i32) -> Result<Option<entity::user::Model>, TestError> {
        Ok(entity::prelude::User::find_by_id(user_id)
            .one(&self.setup.db)
            .await?)
    }
}
