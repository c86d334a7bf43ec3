// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use sqlx::SqlitePool;

use crate::localdb::{UserRecord, decode_error};
use crate::{Group, GroupRole, Member};

#[derive(Debug, Clone)]
pub struct Groups {
    pool: SqlitePool,
}

impl Groups {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn insert(
        &self,
        id: &str,
        title: &str,
        default_role: GroupRole,
    ) -> Result<(), sqlx::Error> {
        const SQL: &str = "\
INSERT INTO campus_groups (id, title, default_role)
VALUES (?, ?, ?);
";

        sqlx::query(SQL)
            .bind(id)
            .bind(title)
            .bind(default_role.as_str())
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    pub async fn get(&self, id: &str) -> Result<Option<GroupRecord>, sqlx::Error> {
        const SQL: &str = "\
SELECT g.id, g.title, g.default_role,
       (SELECT COUNT(*) FROM group_memberships m WHERE m.group_id = g.id) AS member_count
FROM campus_groups g
WHERE g.id = ?;
";

        sqlx::query_as(SQL)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    pub async fn list(&self) -> Result<Vec<GroupRecord>, sqlx::Error> {
        const SQL: &str = "\
SELECT g.id, g.title, g.default_role,
       (SELECT COUNT(*) FROM group_memberships m WHERE m.group_id = g.id) AS member_count
FROM campus_groups g
ORDER BY g.title, g.id;
";

        sqlx::query_as(SQL).fetch_all(&self.pool).await
    }

    /// Groups the user is a member of.
    pub async fn ids_of_member(&self, user_id: &str) -> Result<Vec<String>, sqlx::Error> {
        const SQL: &str = "\
SELECT group_id
FROM group_memberships
WHERE user_id = ?
ORDER BY group_id;
";

        sqlx::query_scalar(SQL)
            .bind(user_id)
            .fetch_all(&self.pool)
            .await
    }

    pub async fn add_member(
        &self,
        group_id: &str,
        user_id: &str,
        role: Option<GroupRole>,
    ) -> Result<(), sqlx::Error> {
        const SQL: &str = "\
INSERT INTO group_memberships (user_id, group_id, role)
VALUES (?, ?, ?);
";

        sqlx::query(SQL)
            .bind(user_id)
            .bind(group_id)
            .bind(role.map(|r| r.as_str()))
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Returns the number of memberships removed.
    pub async fn remove_member(&self, group_id: &str, user_id: &str) -> Result<u64, sqlx::Error> {
        const SQL: &str = "DELETE FROM group_memberships WHERE group_id = ? AND user_id = ?;";

        let result = sqlx::query(SQL)
            .bind(group_id)
            .bind(user_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    pub async fn members(&self, group_id: &str) -> Result<Vec<MemberRecord>, sqlx::Error> {
        const SQL: &str = "\
SELECT u.id, u.name, u.email, u.role, m.role AS group_role
FROM group_memberships m
JOIN users u ON u.id = m.user_id
WHERE m.group_id = ?
ORDER BY u.name, u.id;
";

        sqlx::query_as(SQL)
            .bind(group_id)
            .fetch_all(&self.pool)
            .await
    }
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct GroupRecord {
    id: String,
    title: String,
    default_role: String,
    member_count: i64,
}

impl GroupRecord {
    pub fn into_group(self) -> Result<Group, sqlx::Error> {
        Ok(Group {
            id: self.id,
            title: self.title,
            default_role: self.default_role.parse().map_err(decode_error)?,
            member_count: self.member_count,
        })
    }
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct MemberRecord {
    #[sqlx(flatten)]
    user: UserRecord,
    group_role: Option<String>,
}

impl MemberRecord {
    pub fn into_member(self) -> Result<Member, sqlx::Error> {
        let role = self
            .group_role
            .map(|r| r.parse().map_err(decode_error))
            .transpose()?;
        Ok(Member {
            user: self.user.into_user()?,
            role,
        })
    }
}
