use crate::i18n::t;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct IdleControlsProps {
    pub on_open_hub: Callback<()>,
    pub on_open_planning: Callback<()>,
}

/// Floating actions on the idle map.
#[function_component(IdleControls)]
pub fn idle_controls(props: &IdleControlsProps) -> Html {
    let open_hub = {
        let cb = props.on_open_hub.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let open_planning = {
        let cb = props.on_open_planning.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {
      <div class="idle-controls">
        <p class="idle-finding muted">{ t("idle.finding") }</p>
        <button id="open-hub" class="fab hub-fab" onclick={open_hub}>
          { t("idle.open_hub") }
        </button>
        <button id="open-planning" class="primary-btn" onclick={open_planning}>
          { t("idle.open_planning") }
        </button>
      </div>
    }
}
