use crate::app::state::AppState;
use crate::app::view::handlers::AppHandlers;
use crate::components::ui::reward_summary::RewardSummaryCard;
use crate::game::Catalog;
use yew::prelude::*;

pub(super) fn render_summary(state: &AppState, handlers: &AppHandlers, catalog: &Catalog) -> Html {
    let session = state.session.read();
    let Some(summary) = session.reward_summary() else {
        log::warn!(target: "ecoroute.ui", "summary screen without a captured route");
        return Html::default();
    };
    let delay_minutes = session
        .route()
        .and_then(|route| catalog.routes.compare(route))
        .map_or(0, |cmp| cmp.delay_minutes);
    html! {
        <RewardSummaryCard
            {summary}
            {delay_minutes}
            on_home={handlers.restart.clone()}
        />
    }
}
