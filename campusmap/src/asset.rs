// Copyright 2025 the Campusmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fetching the map image.
//!
//! Loading is a one-shot operation with two outcomes: a parsed
//! [`MapDocument`], or an [`AssetLoadFailure`] that the session turns into
//! the placeholder image. There is no retry.

use std::path::{Path, PathBuf};

use campusmap_draw_svg::{AssetError, MapDocument};

/// Why the map image could not be obtained.
#[derive(Debug, thiserror::Error)]
pub enum AssetLoadFailure {
    /// Reading a local file failed.
    #[error("cannot read map asset {path}: {source}")]
    Io {
        /// File that was read.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The asset path does not form a valid URL on the base.
    #[cfg(feature = "http")]
    #[error("invalid map asset URL: {0}")]
    Url(#[from] url::ParseError),

    /// The HTTP request failed before a response arrived.
    #[cfg(feature = "http")]
    #[error("fetching map asset failed: {0}")]
    Http(#[from] ureq::Error),

    /// The server answered with an error status.
    #[error("map asset request returned HTTP {0}")]
    Status(u16),

    /// The text arrived but is not a usable map image.
    #[error(transparent)]
    Document(#[from] AssetError),
}

/// Somewhere the map image text can be read from.
pub trait AssetSource {
    /// Reads the asset named by `path`, relative to the source's root.
    fn fetch(&self, path: &str) -> Result<String, AssetLoadFailure>;
}

/// Reads assets from a directory.
#[derive(Clone, Debug)]
pub struct FileSource {
    root: PathBuf,
}

impl FileSource {
    /// Resolves asset paths against `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Directory asset paths are resolved against.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl AssetSource for FileSource {
    fn fetch(&self, path: &str) -> Result<String, AssetLoadFailure> {
        let path = self.root.join(path);
        std::fs::read_to_string(&path).map_err(|source| AssetLoadFailure::Io { path, source })
    }
}

/// Fetches assets over HTTP(S), resolving paths against a base URL.
#[cfg(feature = "http")]
#[derive(Debug)]
pub struct HttpSource {
    base: url::Url,
    agent: ureq::Agent,
}

#[cfg(feature = "http")]
impl HttpSource {
    /// Creates a source rooted at `base`, e.g. the URL of the page showing
    /// the map.
    pub fn new(base: &str) -> Result<Self, AssetLoadFailure> {
        let agent: ureq::Agent = ureq::Agent::config_builder()
            .timeout_global(Some(std::time::Duration::from_secs(30)))
            .build()
            .into();
        Ok(Self {
            base: url::Url::parse(base)?,
            agent,
        })
    }

    /// The absolute URL `path` refers to.
    pub fn resolve(&self, path: &str) -> Result<url::Url, AssetLoadFailure> {
        Ok(self.base.join(path)?)
    }
}

#[cfg(feature = "http")]
impl AssetSource for HttpSource {
    fn fetch(&self, path: &str) -> Result<String, AssetLoadFailure> {
        let url = self.resolve(path)?;
        tracing::debug!(%url, "fetching map asset");
        let mut response = match self.agent.get(url.as_str()).call() {
            Ok(response) => response,
            Err(ureq::Error::StatusCode(code)) => return Err(AssetLoadFailure::Status(code)),
            Err(err) => return Err(err.into()),
        };
        Ok(response.body_mut().read_to_string()?)
    }
}

/// Fetches and parses the map image.
pub fn load_asset<S: AssetSource + ?Sized>(
    source: &S,
    path: &str,
) -> Result<MapDocument, AssetLoadFailure> {
    let text = source.fetch(path)?;
    Ok(MapDocument::parse(&text)?)
}
