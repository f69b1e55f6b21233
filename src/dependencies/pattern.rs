//! Line-anchored matching of `depends:` declarations.

use regex::Regex;

use crate::github::IntakeError;

/// Marker that starts a dependency declaration line.
pub const DEFAULT_MARKER: &str = "depends: ";

/// Prefix every declared URL must start with.
pub const DEFAULT_URL_PREFIX: &str = "https://github.com/";

/// Compiled matcher for dependency declaration lines.
///
/// A line matches when it starts with the marker immediately followed by the
/// URL prefix. Only `\n` starts a new line, so a lone `\r` inside a line does
/// not. The captured URL runs from the prefix to the end of the line, minus
/// the `\r` of a `\r\n` terminator.
#[derive(Debug, Clone)]
pub struct DependencyPattern {
    marker: String,
    url_prefix: String,
    regex: Regex,
}

impl DependencyPattern {
    /// Compiles a pattern for the given marker and URL prefix. Both are
    /// matched literally.
    ///
    /// # Errors
    ///
    /// Returns [`IntakeError::InvalidPattern`] when the regex cannot be
    /// compiled.
    pub fn new(marker: &str, url_prefix: &str) -> Result<Self, IntakeError> {
        let source = format!(
            r"(?m)^{marker}({url_prefix}.*)",
            marker = regex::escape(marker),
            url_prefix = regex::escape(url_prefix),
        );
        let regex = Regex::new(&source).map_err(|error| IntakeError::InvalidPattern {
            message: error.to_string(),
        })?;

        Ok(Self {
            marker: marker.to_owned(),
            url_prefix: url_prefix.to_owned(),
            regex,
        })
    }

    /// Pattern for `depends: https://github.com/...` lines.
    ///
    /// # Errors
    ///
    /// Returns [`IntakeError::InvalidPattern`] when the regex cannot be
    /// compiled.
    pub fn github() -> Result<Self, IntakeError> {
        Self::new(DEFAULT_MARKER, DEFAULT_URL_PREFIX)
    }

    /// Marker text that starts a declaration line.
    #[must_use]
    pub fn marker(&self) -> &str {
        &self.marker
    }

    /// URL prefix a declaration must carry.
    #[must_use]
    pub fn url_prefix(&self) -> &str {
        &self.url_prefix
    }

    /// Yields the declared URLs of one comment body in the order they
    /// appear.
    pub fn matches_in<'body>(&self, body: &'body str) -> impl Iterator<Item = &'body str> {
        self.regex
            .captures_iter(body)
            .filter_map(|captures| captures.get(1))
            .map(|url| {
                let line = url.as_str();
                line.strip_suffix('\r').unwrap_or(line)
            })
    }
}

/// Collects the declared URLs across comment bodies.
///
/// Bodies are visited in order and each body's matches are appended in line
/// order, so the result is the plain concatenation of per-body matches.
pub fn extract_from_bodies<I, S>(pattern: &DependencyPattern, bodies: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut dependencies = Vec::new();
    for body in bodies {
        dependencies.extend(pattern.matches_in(body.as_ref()).map(ToOwned::to_owned));
    }
    dependencies
}
