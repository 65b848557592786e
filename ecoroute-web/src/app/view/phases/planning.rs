use crate::app::state::AppState;
use crate::app::view::handlers::AppHandlers;
use crate::components::ui::map_backdrop::MapBackdrop;
use crate::components::ui::route_sheet::RouteSheet;
use crate::game::Catalog;
use yew::prelude::*;

pub(super) fn render_planning(state: &AppState, handlers: &AppHandlers, catalog: &Catalog) -> Html {
    let multiplier = state.session.read().multiplier();
    html! {
        <MapBackdrop show_route=true>
            <RouteSheet
                routes={catalog.routes.clone()}
                {multiplier}
                on_select={handlers.select_route.clone()}
            />
        </MapBackdrop>
    }
}
