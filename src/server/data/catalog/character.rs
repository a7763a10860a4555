use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::model::catalog::CharacterParams;

pub struct CharacterRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CharacterRepository<'a, C> {
    /// Creates a new instance of [`CharacterRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new character
    ///
    /// A duplicate name results in a unique constraint error and a `homeworld_id` without a
    /// matching planet results in a foreign key constraint error.
    pub async fn create(
        &self,
        params: CharacterParams,
    ) -> Result<entity::character::Model, DbErr> {
        let character = entity::character::ActiveModel {
            name: ActiveValue::Set(params.name),
            height: ActiveValue::Set(params.height),
            birth_year: ActiveValue::Set(params.birth_year),
            gender: ActiveValue::Set(params.gender),
            homeworld_id: ActiveValue::Set(params.homeworld_id),
            ..Default::default()
        };

        character.insert(self.db).await
    }

    pub async fn get(&self, character_id: i32) -> Result<Option<entity::character::Model>, DbErr> {
        entity::prelude::Character::find_by_id(character_id)
            .one(self.db)
            .await
    }

    /// Gets a character along with their homeworld, if they have one
    pub async fn get_with_homeworld(
        &self,
        character_id: i32,
    ) -> Result<Option<(entity::character::Model, Option<entity::planet::Model>)>, DbErr> {
        entity::prelude::Character::find_by_id(character_id)
            .find_also_related(entity::planet::Entity)
            .one(self.db)
            .await
    }

    pub async fn get_all(&self) -> Result<Vec<entity::character::Model>, DbErr> {
        entity::prelude::Character::find()
            .order_by_asc(entity::character::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets every character whose ID is in the provided list, missing IDs are skipped
    pub async fn get_many_by_ids(
        &self,
        character_ids: &[i32],
    ) -> Result<Vec<entity::character::Model>, DbErr> {
        if character_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Character::find()
            .filter(entity::character::Column::Id.is_in(character_ids.iter().copied()))
            .all(self.db)
            .await
    }

    /// Gets all characters whose homeworld is the provided planet
    pub async fn get_by_homeworld(
        &self,
        planet_id: i32,
    ) -> Result<Vec<entity::character::Model>, DbErr> {
        entity::prelude::Character::find()
            .filter(entity::character::Column::HomeworldId.eq(planet_id))
            .order_by_asc(entity::character::Column::Id)
            .all(self.db)
            .await
    }

    /// Replaces every field of an existing character
    ///
    /// # Returns
    /// - `Ok(Some(_))`: The updated character
    /// - `Ok(None)`: No character exists with the provided ID
    /// - `Err(DbErr)`: Database error such as a unique or foreign key constraint violation
    pub async fn update(
        &self,
        character_id: i32,
        params: CharacterParams,
    ) -> Result<Option<entity::character::Model>, DbErr> {
        let character = match entity::prelude::Character::find_by_id(character_id)
            .one(self.db)
            .await?
        {
            Some(character) => character,
            None => return Ok(None),
        };

        let mut character_am = character.into_active_model();
        character_am.name = ActiveValue::Set(params.name);
        character_am.height = ActiveValue::Set(params.height);
        character_am.birth_year = ActiveValue::Set(params.birth_year);
        character_am.gender = ActiveValue::Set(params.gender);
        character_am.homeworld_id = ActiveValue::Set(params.homeworld_id);

        let character = character_am.update(self.db).await?;

        Ok(Some(character))
    }

    /// Deletes a character
    ///
    /// Fails with a foreign key constraint error while starships or favorites still
    /// reference the character.
    pub async fn delete(&self, character_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Character::delete_by_id(character_id)
            .exec(self.db)
            .await
    }
}
