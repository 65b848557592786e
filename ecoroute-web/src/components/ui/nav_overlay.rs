use crate::i18n::t;
use yew::prelude::*;

/// Banner shown while the simulated drive runs.
#[function_component(NavOverlay)]
pub fn nav_overlay() -> Html {
    html! {
      <div class="nav-overlay" role="status" aria-live="polite">
        <span class="nav-spinner" aria-hidden="true"></span>
        <div>
          <p class="nav-title">{ t("navigating.title") }</p>
          <p class="nav-subtitle">{ t("navigating.subtitle") }</p>
        </div>
      </div>
    }
}
