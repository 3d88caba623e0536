//! Latest-version lookups.

use std::time::Duration;

use anyhow::Context;
use regex::Regex;
use reqwest::blocking::Client;
use reqwest::StatusCode;

use crate::config::LatestConfig;
use crate::error::Result;

use super::scrape::extract_version;

/// Somewhere the latest toolchain version can be looked up.
///
/// Lookups are best-effort: any failure is logged and reported as `None`,
/// and the caller skips the install decision.
pub trait VersionSource {
    /// The latest version, if it could be determined.
    fn latest_version(&self) -> Option<String>;

    /// Human-readable origin, used in progress output.
    fn describe(&self) -> String;
}

/// Scrapes the vendor's download page.
pub struct DownloadPageSource {
    client: Client,
    url: String,
    pattern: Regex,
}

impl DownloadPageSource {
    /// Build a source from config.
    ///
    /// No request timeout is applied unless `timeout_secs` is set.
    pub fn new(config: &LatestConfig) -> Result<Self> {
        let pattern = Regex::new(&config.version_pattern)
            .with_context(|| format!("Invalid version pattern '{}'", config.version_pattern))?;

        let client = Client::builder()
            .user_agent(concat!("dnspy-setup/", env!("CARGO_PKG_VERSION")))
            .timeout(config.timeout_secs.map(Duration::from_secs))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            url: config.url.clone(),
            pattern,
        })
    }

    fn fetch(&self) -> anyhow::Result<Option<String>> {
        let response = self.client.get(&self.url).send()?;

        if response.status() != StatusCode::OK {
            tracing::warn!(
                "Failed to fetch the latest version. Status code: {}",
                response.status().as_u16()
            );
            return Ok(None);
        }

        let body = response.text()?;
        Ok(extract_version(&body, &self.pattern))
    }
}

impl VersionSource for DownloadPageSource {
    fn latest_version(&self) -> Option<String> {
        tracing::debug!("GET {}", self.url);
        match self.fetch() {
            Ok(Some(version)) => {
                tracing::debug!("latest version from {}: {}", self.url, version);
                Some(version)
            }
            Ok(None) => {
                tracing::warn!("Could not find any version information at {}", self.url);
                None
            }
            Err(e) => {
                tracing::warn!("Error fetching latest version from {}: {:#}", self.url, e);
                None
            }
        }
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}

/// A fixed answer, for offline runs and tests.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    version: Option<String>,
}

impl StaticSource {
    pub fn new(version: Option<&str>) -> Self {
        Self {
            version: version.map(String::from),
        }
    }
}

impl VersionSource for StaticSource {
    fn latest_version(&self) -> Option<String> {
        self.version.clone()
    }

    fn describe(&self) -> String {
        "static".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    fn source_for(server: &MockServer) -> DownloadPageSource {
        let config = LatestConfig {
            url: server.url("/en-us/download/dotnet"),
            timeout_secs: Some(5),
            ..Default::default()
        };
        DownloadPageSource::new(&config).unwrap()
    }

    #[test]
    fn scrapes_first_version_link() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/en-us/download/dotnet");
            then.status(200).body(
                r#"<html><body>
                    <a href="/download/dotnet/9.0">.NET 9.0</a>
                    <a href="/download/dotnet/8.0">.NET 8.0</a>
                </body></html>"#,
            );
        });

        assert_eq!(source_for(&server).latest_version(), Some("9.0".to_string()));
    }

    #[test]
    fn non_ok_status_yields_none() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/en-us/download/dotnet");
            then.status(503).body(r#"<a href="/9.0">9.0</a>"#);
        });

        assert_eq!(source_for(&server).latest_version(), None);
    }

    #[test]
    fn page_without_versions_yields_none() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/en-us/download/dotnet");
            then.status(200).body("<html><body>Maintenance</body></html>");
        });

        assert_eq!(source_for(&server).latest_version(), None);
    }

    #[test]
    fn unreachable_host_yields_none() {
        let config = LatestConfig {
            url: "http://127.0.0.1:1/unreachable".to_string(),
            timeout_secs: Some(2),
            ..Default::default()
        };
        let source = DownloadPageSource::new(&config).unwrap();
        assert_eq!(source.latest_version(), None);
    }

    #[test]
    fn invalid_pattern_is_rejected() {
        let config = LatestConfig {
            version_pattern: "(".to_string(),
            ..Default::default()
        };
        assert!(DownloadPageSource::new(&config).is_err());
    }

    #[test]
    fn describes_its_url() {
        let source = DownloadPageSource::new(&LatestConfig::default()).unwrap();
        assert_eq!(
            source.describe(),
            "https://dotnet.microsoft.com/en-us/download/dotnet"
        );
    }

    #[test]
    fn static_source_returns_fixed_value() {
        assert_eq!(
            StaticSource::new(Some("8.0")).latest_version(),
            Some("8.0".to_string())
        );
        assert_eq!(StaticSource::new(None).latest_version(), None);
    }
}
