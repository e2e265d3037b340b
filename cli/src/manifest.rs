//! `Qd3.toml`, the CLI's project manifest.

use std::path::Path;

use indexmap::IndexMap;
use qd3_core::AttrValue;
use qd3_web::{DomError, MemoryDocument, NodeId};
use serde::Deserialize;
use tracing_subscriber::filter::LevelFilter;

/// File name looked up when `--manifest` is not given.
pub const MANIFEST_FILE: &str = "Qd3.toml";

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Manifest {
    /// Base log level, raised by `-v`.
    #[serde(default)]
    pub log_level: Option<String>,
    /// Elements that exist in the document before anything is rendered.
    #[serde(default, rename = "host")]
    pub hosts: Vec<HostElement>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HostElement {
    pub tag: String,
    #[serde(default)]
    pub attributes: IndexMap<String, AttrValue>,
    #[serde(default)]
    pub children: Vec<HostElement>,
}

#[derive(Debug, thiserror::Error)]
pub enum FailToOpenManifest {
    #[error("Failed to read manifest file: {0}")]
    ReadError(std::io::Error),
    #[error("Invalid manifest file: {0}")]
    InvalidManifest(toml::de::Error),
    #[error("Unknown log level `{0}` (expected off, error, warn, info, debug or trace)")]
    InvalidLogLevel(String),
}

impl Manifest {
    /// Reads the manifest at `path`. A missing file yields the defaults.
    ///
    /// # Errors
    ///
    /// Fails if the file exists but cannot be read or parsed.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, FailToOpenManifest> {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(content) => Self::parse(&content),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no manifest, using defaults");
                Ok(Self::default())
            }
            Err(e) => Err(FailToOpenManifest::ReadError(e)),
        }
    }

    /// Parses manifest text.
    ///
    /// # Errors
    ///
    /// Fails on invalid TOML or an unknown log level.
    pub fn parse(content: &str) -> Result<Self, FailToOpenManifest> {
        let manifest: Self = toml::from_str(content).map_err(FailToOpenManifest::InvalidManifest)?;
        manifest.log_level()?;
        Ok(manifest)
    }

    /// The configured base level, `INFO` when unset.
    ///
    /// # Errors
    ///
    /// Fails if `log_level` is not a level name.
    pub fn log_level(&self) -> Result<LevelFilter, FailToOpenManifest> {
        match self.log_level.as_deref() {
            None => Ok(LevelFilter::INFO),
            Some(level) => level
                .parse()
                .map_err(|_| FailToOpenManifest::InvalidLogLevel(level.to_owned())),
        }
    }

    /// Whether the manifest describes its own host elements.
    #[must_use]
    pub fn declares_host(&self) -> bool {
        !self.hosts.is_empty()
    }

    /// Creates the host elements under the document node, or the default
    /// `<svg width="100" height="100">` when none are declared.
    ///
    /// # Errors
    ///
    /// Propagates document failures.
    pub fn build_host(&self, document: &mut MemoryDocument) -> Result<(), DomError> {
        let root = document.root();
        if self.hosts.is_empty() {
            return HostElement::default_svg().create(document, root);
        }
        for host in &self.hosts {
            host.create(document, root)?;
        }
        Ok(())
    }
}

impl HostElement {
    fn default_svg() -> Self {
        Self {
            tag: "svg".to_owned(),
            attributes: [
                ("width".to_owned(), AttrValue::Int(100)),
                ("height".to_owned(), AttrValue::Int(100)),
            ]
            .into_iter()
            .collect(),
            children: Vec::new(),
        }
    }

    fn create(&self, document: &mut MemoryDocument, parent: NodeId) -> Result<(), DomError> {
        let id = document.create_element(parent, &self.tag)?;
        for (key, value) in &self.attributes {
            document.set_attribute(id, key, value.to_string())?;
        }
        for child in &self.children {
            child.create(document, id)?;
        }
        Ok(())
    }
}
