// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

/// Errors surfaced by every public campus operation.
///
/// Messages are short and meant to be shown to the user as is; storage
/// details are logged and never carried in the error itself.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CampusError {
    /// No valid session.
    #[error("Not authenticated")]
    Unauthenticated,

    /// Authenticated, but lacking the required role or edit permission.
    #[error("{0}")]
    Forbidden(String),

    /// Malformed input, e.g. an empty title or an inverted date range.
    #[error("{0}")]
    Validation(String),

    /// The referenced entity does not exist.
    #[error("{0}")]
    NotFound(String),

    /// A uniqueness or referential rule would be violated.
    #[error("{0}")]
    Conflict(String),

    /// The underlying store failed.
    #[error("Failed to {action}. Please try again.")]
    Persistence {
        /// What was being attempted, e.g. `add event`.
        action: &'static str,
    },
}

impl CampusError {
    pub(crate) fn forbidden(msg: impl Into<String>) -> Self {
        Self::Forbidden(msg.into())
    }

    pub(crate) fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub(crate) fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub(crate) fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }
}

/// Maps a store error to [`CampusError::Persistence`], logging the cause.
pub(crate) fn persistence(action: &'static str) -> impl FnOnce(sqlx::Error) -> CampusError {
    move |err| {
        tracing::error!(action, %err, "persistence failure");
        CampusError::Persistence { action }
    }
}

/// Like [`persistence`], but reports unique-constraint violations as a
/// [`CampusError::Conflict`] carrying `message`.
pub(crate) fn conflict_or_persistence(
    action: &'static str,
    message: impl Into<String>,
) -> impl FnOnce(sqlx::Error) -> CampusError {
    move |err| {
        if is_unique_violation(&err) {
            tracing::debug!(action, %err, "unique constraint violated");
            CampusError::conflict(message)
        } else {
            persistence(action)(err)
        }
    }
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(e) => e.is_unique_violation(),
        _ => false,
    }
}
