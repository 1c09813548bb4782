//! Collection-scoped unique slug allocation.
//!
//! A [`SlugAllocator`] normalizes free-form text into a URL-safe base slug,
//! then probes a [`RecordStore`] for collisions, appending `-1`, `-2`, …
//! until a free candidate is found. The loop is bounded; exhausting it is a
//! typed error, not a hang. For stores with a unique constraint on the slug
//! column, [`SlugAllocator::allocate_on_conflict`] turns the racy
//! check-then-act probe into an insert-or-retry loop arbitrated by the
//! constraint itself.

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;
pub use domain::errors::{DomainError, DomainResult};
pub use domain::record::{CollectionId, RecordStore, Slug};
pub use domain::services::SlugAllocator;
pub use infrastructure::util::DefaultSlugGenerator;
