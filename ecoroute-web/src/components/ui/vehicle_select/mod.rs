mod helpers;
mod tile;

use crate::game::{VehicleType, VehiclesList};
use crate::input::{PickerKey, picker_key};
use web_sys::KeyboardEvent;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct VehicleSelectProps {
    pub vehicles: VehiclesList,
    /// Id of the highlighted vehicle, if any.
    #[prop_or_default]
    pub selected: Option<String>,
    pub on_select: Callback<String>,
    pub on_confirm: Callback<()>,
}

#[function_component(VehicleSelect)]
pub fn vehicle_select(p: &VehicleSelectProps) -> Html {
    let selected_idx = p
        .selected
        .as_deref()
        .and_then(|id| p.vehicles.iter().position(|v| v.id == id));
    let selected_vehicle: Option<&VehicleType> = selected_idx.and_then(|i| p.vehicles.get(i));

    let select_idx = {
        let vehicles = p.vehicles.clone();
        let on_select = p.on_select.clone();
        Callback::from(move |idx: usize| {
            if let Some(vehicle) = vehicles.get(idx) {
                on_select.emit(vehicle.id.clone());
            }
        })
    };

    let on_keydown = {
        let select_idx = select_idx.clone();
        let on_confirm = p.on_confirm.clone();
        let has_selection = selected_idx.is_some();
        Callback::from(move |e: KeyboardEvent| {
            match picker_key(&e.key(), &e.code()) {
                Some(PickerKey::Confirm) => {
                    if has_selection {
                        on_confirm.emit(());
                    }
                }
                Some(PickerKey::Pick(idx)) => select_idx.emit(idx),
                None => return,
            }
            e.prevent_default();
        })
    };

    let on_confirm_click = {
        let on_confirm = p.on_confirm.clone();
        Callback::from(move |_| on_confirm.emit(()))
    };

    let live_msg = selected_vehicle.map(helpers::selection_message).unwrap_or_default();

    html! {
      <section class="panel vehicle-select" aria-labelledby="setup-title" onkeydown={on_keydown}>
        <h2 id="setup-title">{ crate::i18n::t("setup.title") }</h2>
        <p class="setup-subtitle">
          { crate::i18n::t("setup.subtitle_prefix") }
          <strong class="highlight">{ crate::i18n::t("setup.subtitle_highlight") }</strong>
          { crate::i18n::t("setup.subtitle_suffix") }
        </p>
        <div class="vehicle-grid" role="radiogroup" aria-labelledby="setup-title">
          { for p.vehicles.iter().enumerate().map(|(i, vehicle)| html! {
              <tile::VehicleTile
                  key={vehicle.id.clone()}
                  index={i}
                  vehicle={vehicle.clone()}
                  selected={Some(i) == selected_idx}
                  on_select={select_idx.clone()}
              />
          }) }
        </div>
        <div class="controls">
          <button
            id="vehicle-confirm"
            class="primary-btn"
            disabled={selected_idx.is_none()}
            onclick={on_confirm_click}
          >
            { crate::i18n::t("setup.confirm") }
          </button>
        </div>
        <p class="muted hint">{ crate::i18n::t("setup.hint") }</p>
        <p id="vehicle-helper" aria-live="polite" class="muted">{ live_msg }</p>
      </section>
    }
}
