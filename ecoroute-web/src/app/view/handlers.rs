use crate::app::state::AppState;
use crate::game::{HubTab, RouteKind, SessionEvent};
use yew::prelude::*;

#[derive(Clone)]
pub struct AppHandlers {
    pub select_vehicle: Callback<String>,
    pub confirm_vehicle: Callback<()>,
    pub open_planning: Callback<()>,
    pub select_route: Callback<RouteKind>,
    pub restart: Callback<()>,
    pub show_hub: Callback<()>,
    pub hide_hub: Callback<()>,
    pub select_hub_tab: Callback<HubTab>,
    pub lang_change: Callback<String>,
}

impl AppHandlers {
    #[must_use]
    pub fn new(state: &AppState) -> Self {
        Self {
            select_vehicle: build_select_vehicle(state),
            confirm_vehicle: build_plain(state, SessionEvent::ConfirmVehicle),
            open_planning: build_plain(state, SessionEvent::OpenPlanning),
            select_route: build_select_route(state),
            restart: build_plain(state, SessionEvent::Restart),
            show_hub: build_plain(state, SessionEvent::ShowHub),
            hide_hub: build_plain(state, SessionEvent::HideHub),
            select_hub_tab: build_select_hub_tab(state),
            lang_change: build_lang_change(state),
        }
    }
}

fn build_plain(state: &AppState, event: SessionEvent) -> Callback<()> {
    let session = state.session.clone();
    Callback::from(move |()| session.send(event.clone()))
}

fn build_select_vehicle(state: &AppState) -> Callback<String> {
    let session = state.session.clone();
    let catalog = state.catalog.clone();
    Callback::from(move |id: String| {
        let Some(vehicle) = catalog
            .as_ref()
            .and_then(|c| c.vehicles.get_by_id(&id).cloned())
        else {
            log::warn!(target: "ecoroute.ui", "unknown vehicle `{id}`");
            return;
        };
        session.send(SessionEvent::SelectVehicle(vehicle));
    })
}

fn build_select_route(state: &AppState) -> Callback<RouteKind> {
    let session = state.session.clone();
    let catalog = state.catalog.clone();
    Callback::from(move |kind: RouteKind| {
        let Some(route) = catalog
            .as_ref()
            .and_then(|c| c.routes.by_kind(kind).cloned())
        else {
            log::warn!(target: "ecoroute.ui", "no `{}` route in catalog", kind.key());
            return;
        };
        session.send(SessionEvent::SelectRoute(route));
    })
}

fn build_select_hub_tab(state: &AppState) -> Callback<HubTab> {
    let session = state.session.clone();
    Callback::from(move |tab: HubTab| session.send(SessionEvent::SelectHubTab(tab)))
}

fn build_lang_change(state: &AppState) -> Callback<String> {
    let current_language = state.current_language.clone();
    Callback::from(move |code: String| {
        crate::i18n::set_lang(&code);
        current_language.set(crate::i18n::current_lang());
    })
}
