// src/application/ports/util.rs

/// Pure text normalization. Implementations must be deterministic,
/// idempotent on already-normalized input, and insensitive to case and
/// surrounding whitespace.
pub trait SlugGenerator: Send + Sync {
    fn slugify(&self, input: &str) -> String;
}
