// SPDX-License-Identifier: GPL-3.0-or-later

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CatalogError>;

/// Which entity collection a failed lookup was aimed at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    User,
    Artist,
    Album,
    Song,
    Playlist,
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::User => write!(f, "user"),
            Self::Artist => write!(f, "artist"),
            Self::Album => write!(f, "album"),
            Self::Song => write!(f, "song"),
            Self::Playlist => write!(f, "playlist"),
        }
    }
}

/// The catalog's single failure mode: a lookup by natural key found nothing.
///
/// Raised at the point of the failed lookup, before any mutation, so a
/// failed operation leaves the catalog untouched.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("{entity} does not exist: {key}")]
    NotFound { entity: EntityKind, key: String },
}

impl CatalogError {
    pub fn not_found(entity: EntityKind, key: impl Into<String>) -> Self {
        Self::NotFound {
            entity,
            key: key.into(),
        }
    }
}
