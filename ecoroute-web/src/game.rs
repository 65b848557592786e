//! Web-specific catalog loading
//!
//! Provides the browser implementation of the core `DataLoader` trait and
//! re-exports the core types used by components.

use once_cell::unsync::OnceCell;

pub use ecoroute_core::*;

const VEHICLES_JSON: &str = include_str!("../static/assets/data/vehicles.json");
const ROUTES_JSON: &str = include_str!("../static/assets/data/routes.json");
const LEADERBOARD_JSON: &str = include_str!("../static/assets/data/leaderboard.json");
const CERTIFICATE_JSON: &str = include_str!("../static/assets/data/certificate.json");

/// Data loader backed by the JSON assets embedded at build time.
pub struct WebDataLoader;

#[derive(Debug, thiserror::Error)]
pub enum WebDataError {
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),
}

impl DataLoader for WebDataLoader {
    type Error = WebDataError;

    fn load_catalog(&self) -> Result<Catalog, Self::Error> {
        let catalog = Catalog::from_sources(&embedded_sources())?;
        Ok(catalog)
    }
}

/// The embedded asset documents.
#[must_use]
pub const fn embedded_sources() -> CatalogSources<'static> {
    CatalogSources {
        vehicles: VEHICLES_JSON,
        routes: ROUTES_JSON,
        leaderboard: LEADERBOARD_JSON,
        certificate: CERTIFICATE_JSON,
    }
}

thread_local! {
    static CATALOG: OnceCell<Option<Catalog>> = const { OnceCell::new() };
}

/// Embedded catalog, parsed once per thread. `None` if the assets are invalid.
#[must_use]
pub fn static_catalog() -> Option<Catalog> {
    CATALOG.with(|cell| {
        cell.get_or_init(|| match WebDataLoader.load_catalog() {
            Ok(catalog) => Some(catalog),
            Err(err) => {
                log::error!("embedded catalog rejected: {err}");
                None
            }
        })
        .clone()
    })
}
