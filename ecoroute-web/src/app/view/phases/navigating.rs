use crate::components::ui::map_backdrop::MapBackdrop;
use crate::components::ui::nav_overlay::NavOverlay;
use yew::prelude::*;

pub(super) fn render_navigating() -> Html {
    html! {
        <MapBackdrop show_route=true>
            <NavOverlay />
        </MapBackdrop>
    }
}
