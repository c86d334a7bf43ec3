// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use sqlx::SqlitePool;

use crate::localdb::decode_error;
use crate::{Role, User};

#[derive(Debug, Clone)]
pub struct Users {
    pool: SqlitePool,
}

impl Users {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn insert(&self, user: &UserRecord) -> Result<(), sqlx::Error> {
        const SQL: &str = "\
INSERT INTO users (id, name, email, role)
VALUES (?, ?, ?, ?);
";

        sqlx::query(SQL)
            .bind(&user.id)
            .bind(&user.name)
            .bind(&user.email)
            .bind(&user.role)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    pub async fn get(&self, id: &str) -> Result<Option<UserRecord>, sqlx::Error> {
        const SQL: &str = "\
SELECT id, name, email, role
FROM users
WHERE id = ?;
";

        sqlx::query_as(SQL)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    pub async fn get_by_email(&self, email: &str) -> Result<Option<UserRecord>, sqlx::Error> {
        const SQL: &str = "\
SELECT id, name, email, role
FROM users
WHERE email = ?;
";

        sqlx::query_as(SQL)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
    }

    pub async fn list(&self) -> Result<Vec<UserRecord>, sqlx::Error> {
        const SQL: &str = "\
SELECT id, name, email, role
FROM users
ORDER BY name, id;
";

        sqlx::query_as(SQL).fetch_all(&self.pool).await
    }

    /// Role of the user, `None` if there is no such user.
    pub async fn role_of(&self, id: &str) -> Result<Option<Role>, sqlx::Error> {
        const SQL: &str = "SELECT role FROM users WHERE id = ?;";

        let role: Option<String> = sqlx::query_scalar(SQL)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        role.map(|r| r.parse().map_err(decode_error)).transpose()
    }
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct UserRecord {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
}

impl UserRecord {
    pub fn new(id: String, name: String, email: String, role: Role) -> Self {
        Self {
            id,
            name,
            email,
            role: role.as_str().to_string(),
        }
    }

    pub fn into_user(self) -> Result<User, sqlx::Error> {
        let role = self.role.parse().map_err(decode_error)?;
        Ok(User {
            id: self.id,
            name: self.name,
            email: self.email,
            role,
        })
    }
}
