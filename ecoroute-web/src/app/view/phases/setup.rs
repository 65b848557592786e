use crate::app::state::AppState;
use crate::app::view::handlers::AppHandlers;
use crate::components::ui::vehicle_select::VehicleSelect;
use crate::game::Catalog;
use yew::prelude::*;

pub(super) fn render_setup(state: &AppState, handlers: &AppHandlers, catalog: &Catalog) -> Html {
    let selected = state.session.read().vehicle().map(|v| v.id.clone());
    html! {
        <VehicleSelect
            vehicles={catalog.vehicles.clone()}
            {selected}
            on_select={handlers.select_vehicle.clone()}
            on_confirm={handlers.confirm_vehicle.clone()}
        />
    }
}
