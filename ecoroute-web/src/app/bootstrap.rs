#[cfg(any(target_arch = "wasm32", test))]
use crate::game::{Catalog, DataLoader, EcoRouteEngine};
#[cfg(any(target_arch = "wasm32", test))]
use std::rc::Rc;
#[cfg(target_arch = "wasm32")]
use {
    crate::app::state::AppState,
    crate::game::WebDataLoader,
    yew::prelude::*,
};

#[cfg(target_arch = "wasm32")]
#[derive(Clone)]
struct BootstrapHandles {
    catalog: UseStateHandle<Option<Rc<Catalog>>>,
    load_error: UseStateHandle<Option<String>>,
    boot_ready: UseStateHandle<bool>,
}

#[cfg(target_arch = "wasm32")]
fn handles_from_state(app_state: &AppState) -> BootstrapHandles {
    BootstrapHandles {
        catalog: app_state.catalog.clone(),
        load_error: app_state.load_error.clone(),
        boot_ready: app_state.boot_ready.clone(),
    }
}

/// Load the catalog through `loader`; the error is flattened for the boot screen.
#[cfg(any(target_arch = "wasm32", test))]
fn load_catalog<L: DataLoader>(loader: L) -> Result<Rc<Catalog>, String> {
    match EcoRouteEngine::new(loader).load_catalog() {
        Ok(catalog) => {
            log::info!(
                target: "ecoroute.boot",
                "catalog ready: {} vehicles, {} routes",
                catalog.vehicles.len(),
                catalog.routes.len()
            );
            Ok(Rc::new(catalog))
        }
        Err(err) => {
            log::error!(target: "ecoroute.boot", "{err:#}");
            Err(format!("{err:#}"))
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn bootstrap_load(handles: &BootstrapHandles) {
    match load_catalog(WebDataLoader) {
        Ok(catalog) => {
            handles.catalog.set(Some(catalog));
            handles.load_error.set(None);
        }
        Err(message) => handles.load_error.set(Some(message)),
    }
    handles.boot_ready.set(true);
}

#[cfg(target_arch = "wasm32")]
#[hook]
pub fn use_bootstrap(app_state: &AppState) {
    let handles = handles_from_state(app_state);

    use_effect_with((), move |()| {
        wasm_bindgen_futures::spawn_local(async move {
            bootstrap_load(&handles);
        });
        || {}
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{CatalogError, WebDataLoader};

    struct BrokenAssets;

    impl DataLoader for BrokenAssets {
        type Error = CatalogError;

        fn load_catalog(&self) -> Result<Catalog, Self::Error> {
            Err(CatalogError::MissingFastestRoute)
        }
    }

    #[test]
    fn embedded_assets_boot() {
        let catalog = load_catalog(WebDataLoader).unwrap();
        assert_eq!(catalog.vehicles.len(), 4);
        assert!(catalog.routes.eco().is_some());
        assert_eq!(catalog.leaderboard.len(), 3);
    }

    #[test]
    fn loader_failure_becomes_boot_message() {
        let message = load_catalog(BrokenAssets).unwrap_err();
        assert!(message.starts_with("failed to load EcoRoute catalog"));
        assert!(message.contains(&CatalogError::MissingFastestRoute.to_string()));
    }
}
