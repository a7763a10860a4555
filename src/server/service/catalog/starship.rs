use sea_orm::DatabaseConnection;

use crate::{
    model::catalog::{StarshipDto, StarshipParams},
    server::{
        data::catalog::starship::StarshipRepository, error::Error, service::retry::RetryContext,
    },
};

pub struct StarshipService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StarshipService<'a> {
    /// Creates a new instance of StarshipService.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create_starship(&self, params: StarshipParams) -> Result<StarshipDto, Error> {
        let ctx = RetryContext::new();
        let db = self.db.clone();

        ctx.execute_with_retry(&format!("create starship {}", params.name), || {
            let db = db.clone();
            let params = params.clone();

            Box::pin(async move {
                let starship = StarshipRepository::new(&db).create(params).await?;

                Ok(StarshipDto::from(starship))
            })
        })
        .await
    }

    pub async fn get_starship(&self, starship_id: i32) -> Result<Option<StarshipDto>, Error> {
        let ctx = RetryContext::new();
        let db = self.db.clone();

        ctx.execute_with_retry(&format!("get starship ID {}", starship_id), || {
            let db = db.clone();

            Box::pin(async move {
                let starship = StarshipRepository::new(&db).get(starship_id).await?;

                Ok(starship.map(StarshipDto::from))
            })
        })
        .await
    }

    pub async fn get_starships(&self) -> Result<Vec<StarshipDto>, Error> {
        let ctx = RetryContext::new();
        let db = self.db.clone();

        ctx.execute_with_retry("get all starships", || {
            let db = db.clone();

            Box::pin(async move {
                let starships = StarshipRepository::new(&db).get_all().await?;

                Ok(starships.into_iter().map(StarshipDto::from).collect())
            })
        })
        .await
    }

    pub async fn update_starship(
        &self,
        starship_id: i32,
        params: StarshipParams,
    ) -> Result<Option<StarshipDto>, Error> {
        let ctx = RetryContext::new();
        let db = self.db.clone();

        ctx.execute_with_retry(&format!("update starship ID {}", starship_id), || {
            let db = db.clone();
            let params = params.clone();

            Box::pin(async move {
                let starship = StarshipRepository::new(&db)
                    .update(starship_id, params)
                    .await?;

                Ok(starship.map(StarshipDto::from))
            })
        })
        .await
    }

    pub async fn delete_starship(&self, starship_id: i32) -> Result<bool, Error> {
        let ctx = RetryContext::new();
        let db = self.db.clone();

        ctx.execute_with_retry(&format!("delete starship ID {}", starship_id), || {
            let db = db.clone();

            Box::pin(async move {
                let result = StarshipRepository::new(&db).delete(starship_id).await?;

                Ok(result.rows_affected > 0)
            })
        })
        .await
    }
}
