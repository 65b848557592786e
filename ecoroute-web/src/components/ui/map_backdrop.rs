use crate::i18n::t;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct MapBackdropProps {
    /// Draw the eco route line (planning and navigating).
    #[prop_or_default]
    pub show_route: bool,
    #[prop_or_default]
    pub children: Children,
}

/// Decorative map canvas with the search bar and layer controls.
#[function_component(MapBackdrop)]
pub fn map_backdrop(props: &MapBackdropProps) -> Html {
    html! {
      <div class="map-screen">
        <div class="map-canvas" aria-hidden="true">
          <div class="map-grid"></div>
          if props.show_route {
              <svg class="map-route" viewBox="0 0 100 100" preserveAspectRatio="none">
                <path d="M20 80 C 35 60, 45 55, 55 40 S 75 20, 80 15" />
              </svg>
          }
          <span class="map-pin" title={t("map.you_are_here")}></span>
        </div>
        <div class="map-search" role="search">
          <span class="search-placeholder">{ t("map.search") }</span>
          <span class="search-voice" aria-label={t("map.voice")}>{ "🎤" }</span>
        </div>
        <div class="map-side">
          <span class="map-layers" aria-label={t("map.layers")}>{ "▦" }</span>
          <span class="fraud-guard">{ t("map.fraud_guard") }</span>
        </div>
        { for props.children.iter() }
      </div>
    }
}
