use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::proto::auth::User;

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct UserModel {
    pub id: String,
    pub email: String,
    pub name: String,
    pub role: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: String,
}

impl UserModel {
    pub fn to_proto(&self) -> User {
        User {
            id: self.id.clone(),
            email: self.email.clone(),
            name: self.name.clone(),
            role: self.role.clone(),
            created_at: self.created_at.clone(),
        }
    }
}
