use crate::app::view::handlers::AppHandlers;
use crate::components::ui::idle_controls::IdleControls;
use crate::components::ui::map_backdrop::MapBackdrop;
use yew::prelude::*;

pub(super) fn render_idle(handlers: &AppHandlers) -> Html {
    html! {
        <MapBackdrop>
            <IdleControls
                on_open_hub={handlers.show_hub.clone()}
                on_open_planning={handlers.open_planning.clone()}
            />
        </MapBackdrop>
    }
}
