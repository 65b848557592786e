use super::helpers::{localized_desc, localized_name, multiplier_label};
use crate::game::VehicleType;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct VehicleTileProps {
    pub index: usize,
    pub vehicle: VehicleType,
    pub selected: bool,
    pub on_select: Callback<usize>,
}

#[function_component(VehicleTile)]
pub fn vehicle_tile(props: &VehicleTileProps) -> Html {
    let idx_display = props.index + 1;
    let name = localized_name(&props.vehicle);
    let on_click = {
        let on_select = props.on_select.clone();
        let idx = props.index;
        Callback::from(move |_| on_select.emit(idx))
    };
    let class = classes!("vehicle-tile", props.selected.then_some("selected"));

    html! {
      <div role="radio"
          class={class}
          aria-checked={props.selected.to_string()}
          tabindex={if props.selected { "0" } else { "-1" }}
          onclick={on_click}
          data-key={idx_display.to_string()}
          data-vehicle={props.vehicle.id.clone()}>
        <span class="vehicle-icon" aria-hidden="true">{ props.vehicle.icon.glyph() }</span>
        <div class="vehicle-details">
          <span class="vehicle-name">{ name }</span>
          <p class="vehicle-desc muted">{ localized_desc(&props.vehicle) }</p>
        </div>
        <span class="vehicle-mult" aria-label={multiplier_label(&props.vehicle)}>
          { props.vehicle.multiplier.label() }
        </span>
      </div>
    }
}
