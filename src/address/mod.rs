// gitops-rs: GitOps Patch Utility - Rust Port
//
// SPDX-FileCopyrightText: 2026 Gitops-rs Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Composite repository addresses.
//!
//! A composite address packs a repository locator and a path to a file
//! inside that repository into one string:
//!
//! ```text
//! https://example.com/repo.git#path/to/file.yaml
//! \________________________/ \_________________/
//!         repository              file_path
//! ```

use url::Url;

/// A repository locator plus a relative file path, parsed from a single
/// `<url>#<path>` string.
///
/// Parsing never fails: a string that is not syntactically a URL yields an
/// address with both fields empty. Callers must treat an empty
/// [`repository`](Self::repository) as a usage error.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CompositeAddress {
    repository: String,
    file_path: String,
}

impl CompositeAddress {
    /// Splits `raw` into a repository locator and a file path.
    ///
    /// The fragment (everything after the first `#`) becomes the file
    /// path; the locator is the URL with the fragment stripped. Malformed
    /// input produces two empty fields, never an error.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let Ok(mut url) = Url::parse(raw) else {
            return Self::default();
        };
        let file_path = url.fragment().unwrap_or_default().to_string();
        url.set_fragment(None);
        Self {
            repository: url.to_string(),
            file_path,
        }
    }

    /// The repository locator; empty when parsing failed.
    #[must_use]
    pub fn repository(&self) -> &str {
        &self.repository
    }

    /// The file path inside the repository; empty when parsing failed or
    /// no fragment was given.
    #[must_use]
    pub fn file_path(&self) -> &str {
        &self.file_path
    }
}

#[cfg(test)]
mod tests;
