use ecoroute_core::{Catalog, CatalogError, CatalogSources, DataLoader};
use std::fs;
use std::path::{Path, PathBuf};

/// Reads the catalog from the web crate's asset directory at runtime.
#[derive(Debug, Clone)]
pub struct AssetDirLoader {
    root: PathBuf,
}

#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

impl AssetDirLoader {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The `static/assets/data` directory of the web crate.
    #[must_use]
    pub fn default_root() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("..")
            .join("ecoroute-web")
            .join("static")
            .join("assets")
            .join("data")
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn read(&self, name: &str) -> Result<String, AssetError> {
        let path = self.root.join(name);
        fs::read_to_string(&path).map_err(|source| AssetError::Io { path, source })
    }
}

impl Default for AssetDirLoader {
    fn default() -> Self {
        Self::new(Self::default_root())
    }
}

impl DataLoader for AssetDirLoader {
    type Error = AssetError;

    fn load_catalog(&self) -> Result<Catalog, Self::Error> {
        let vehicles = self.read("vehicles.json")?;
        let routes = self.read("routes.json")?;
        let leaderboard = self.read("leaderboard.json")?;
        let certificate = self.read("certificate.json")?;
        log::debug!("loading catalog from {}", self.root.display());
        Ok(Catalog::from_sources(&CatalogSources {
            vehicles: &vehicles,
            routes: &routes,
            leaderboard: &leaderboard,
            certificate: &certificate,
        })?)
    }
}
