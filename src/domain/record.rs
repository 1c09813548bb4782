use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use std::fmt;

/// Base slugs are cut to 100 characters before suffixing; the extra room
/// keeps `-{n}` suffixes within bounds.
pub const MAX_SLUG_LEN: usize = 120;

/// Postgres truncates identifiers beyond this, which would silently alias
/// two collections onto one table.
pub const MAX_COLLECTION_LEN: usize = 63;

/// A URL-safe identifier: lowercase ASCII alphanumerics separated by single
/// hyphens, unique within its owning collection.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Slug(String);

impl Slug {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.is_empty() {
            return Err(DomainError::Validation("slug cannot be empty".into()));
        }
        if value.len() > MAX_SLUG_LEN {
            return Err(DomainError::Validation(format!(
                "slug cannot exceed {MAX_SLUG_LEN} bytes"
            )));
        }
        if !value
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
        {
            return Err(DomainError::Validation(
                "slug may only contain lowercase alphanumerics and hyphens".into(),
            ));
        }
        if value.starts_with('-') || value.ends_with('-') || value.contains("--") {
            return Err(DomainError::Validation(
                "slug hyphens must be single and internal".into(),
            ));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Slug> for String {
    fn from(value: Slug) -> Self {
        value.0
    }
}

/// Names the partition slugs are unique within. The Postgres store maps a
/// collection directly to a table name, so the accepted charset is the safe
/// identifier subset.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CollectionId(String);

impl CollectionId {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.is_empty() {
            return Err(DomainError::Validation("collection cannot be empty".into()));
        }
        if value.len() > MAX_COLLECTION_LEN {
            return Err(DomainError::Validation(format!(
                "collection cannot exceed {MAX_COLLECTION_LEN} bytes"
            )));
        }
        let mut chars = value.chars();
        let leading_ok = chars.next().is_some_and(|c| c.is_ascii_lowercase());
        if !leading_ok
            || !value
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
        {
            return Err(DomainError::Validation(
                "collection must match [a-z][a-z0-9_]*".into(),
            ));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CollectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Existence probe against the backing store. An absent row means the slug
/// is free; every store failure propagates and is never read as "free".
#[async_trait]
pub trait RecordStore: Send + Sync {
    async fn exists(&self, collection: &CollectionId, slug: &Slug) -> DomainResult<bool>;
}
