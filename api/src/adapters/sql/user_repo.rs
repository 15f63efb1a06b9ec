//! SeaORM adapter for UserRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set,
};

use crate::domain::entities::{Id, User};
use crate::domain::ports::UserRepository;
use crate::entity::users;
use crate::error::DomainError;

/// SQL implementation of UserRepository
pub struct SqlUserRepository {
    db: DatabaseConnection,
}

impl SqlUserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for SqlUserRepository {
    async fn create(&self, user: &User) -> Result<(), DomainError> {
        let model = users::ActiveModel {
            id: Set(user.id.as_uuid()),
            name: Set(user.name.clone()),
            email: Set(user.email.clone()),
            password: Set(user.password_hash().to_string()),
        };

        model
            .insert(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(())
    }

    async fn find_by_email(&self, email: &str) -> Result<User, DomainError> {
        users::Entity::find()
            .filter(users::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?
            .map(User::from)
            .ok_or_else(|| DomainError::NotFound(format!("User with email {} not found", email)))
    }
}

/// Convert SeaORM model to domain entity
impl From<users::Model> for User {
    fn from(model: users::Model) -> Self {
        User::restore(
            Id::from_uuid(model.id),
            model.name,
            model.email,
            model.password,
        )
    }
}
