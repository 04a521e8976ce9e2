// src/application/ports/util.rs

/// Turns arbitrary text into a lowercase, URL-safe token.
///
/// Implementations must be deterministic and total; feeding an already
/// normalized token back in must return it unchanged.
pub trait SlugGenerator: Send + Sync {
    fn slugify(&self, input: &str) -> String;
}
