// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::{Deserialize, Serialize};
use std::fmt;
use url::Url;

const URL_SCHEMES: [&str; 3] = ["http", "https", "ftp"];

/// Whether an identifier names a local file or a remote resource.
///
/// Displays as `file` / `resource`, which is what goes into the status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    File,
    Resource,
}

impl ResourceKind {
    /// Classify by syntax alone; nothing is probed.
    ///
    /// A well-formed URL with a web scheme and a host is a `Resource`,
    /// everything else is treated as a file path.
    pub fn classify(identifier: &str) -> Self {
        match Url::parse(identifier.trim()) {
            Ok(url)
                if URL_SCHEMES.contains(&url.scheme())
                    && url.host_str().is_some_and(|host| !host.is_empty()) =>
            {
                ResourceKind::Resource
            }
            _ => ResourceKind::File,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::File => "file",
            ResourceKind::Resource => "resource",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_urls() {
        let urls = [
            "https://filesamples.com/samples/document/txt/sample3.txt",
            "http://example.com",
            "ftp://files.example.org/pub/readme.txt",
            "HTTPS://EXAMPLE.COM/Upper.txt",
        ];
        for url in urls {
            assert_eq!(ResourceKind::classify(url), ResourceKind::Resource, "{}", url);
        }
    }

    #[test]
    fn test_classify_files() {
        let files = [
            "notes.txt",
            "/var/data/notes.txt",
            "./relative/path.txt",
            "C:\\texts\\notes.txt",
            "file:///tmp/notes.txt",
            "mailto:someone@example.com",
            "https://",
            "",
        ];
        for file in files {
            assert_eq!(ResourceKind::classify(file), ResourceKind::File, "{:?}", file);
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(ResourceKind::File.to_string(), "file");
        assert_eq!(ResourceKind::Resource.to_string(), "resource");
    }
}
