//! Dependency declarations found in pull request comments.
//!
//! A declaration is a comment line of the form `depends: <url>`. The
//! extractor scans every issue comment of a pull request, in thread order,
//! and collects the declared URLs without reordering or deduplicating them.

mod extractor;
mod pattern;

pub use extractor::DependencyExtractor;
pub use pattern::{DEFAULT_MARKER, DEFAULT_URL_PREFIX, DependencyPattern, extract_from_bodies};
