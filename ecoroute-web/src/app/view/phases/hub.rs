use crate::app::state::AppState;
use crate::app::view::handlers::AppHandlers;
use crate::components::ui::eco_hub::EcoHub;
use crate::game::Catalog;
use yew::prelude::*;

/// The Eco-Hub stays over whichever screen is active until it is closed.
pub(super) fn render_hub(state: &AppState, handlers: &AppHandlers, catalog: &Catalog) -> Html {
    let Some(tab) = state.session.read().overlay().tab() else {
        return Html::default();
    };
    html! {
        <EcoHub
            {tab}
            leaderboard={catalog.leaderboard.clone()}
            certificate={catalog.certificate.clone()}
            on_tab={handlers.select_hub_tab.clone()}
            on_close={handlers.hide_hub.clone()}
        />
    }
}
