use super::view_model::RouteCardModel;
use crate::game::RouteKind;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct RouteCardProps {
    pub index: usize,
    pub model: RouteCardModel,
    pub on_select: Callback<RouteKind>,
}

#[function_component(RouteCard)]
pub fn route_card(props: &RouteCardProps) -> Html {
    let model = &props.model;
    let on_click = {
        let on_select = props.on_select.clone();
        let kind = model.kind;
        Callback::from(move |_| on_select.emit(kind))
    };
    let class = classes!(
        "route-card",
        format!("route-{}", model.kind.key()),
        model.recommended.then_some("recommended")
    );

    html! {
      <button type="button" class={class} onclick={on_click} data-key={(props.index + 1).to_string()}>
        if model.recommended {
            <span class="route-badge">{ crate::i18n::t("planning.recommended") }</span>
        }
        <div class="route-head">
          <span class="route-title">{ model.title.clone() }</span>
          <span class="route-time">
            <strong>{ model.minutes.clone() }</strong>
            { crate::i18n::t("planning.minutes") }
          </span>
          if let Some(delay) = model.delay.clone() {
              <span class="route-delay">{ delay }</span>
          }
        </div>
        <dl class="route-facts">
          <dt>{ crate::i18n::t("planning.fuel") }</dt>
          <dd>{ model.fuel.clone() }</dd>
          <dt>{ crate::i18n::t("planning.traffic") }</dt>
          <dd>{ model.traffic.clone() }</dd>
          <dd class="route-distance">{ model.distance.clone() }</dd>
        </dl>
        if let Some(savings) = model.savings.clone() {
            <p class="route-savings">
              <span class="muted">{ crate::i18n::t("planning.fuel_saving") }</span>
              { " " }
              <strong>{ savings }</strong>
            </p>
        }
        if let Some(points) = model.points_preview.clone() {
            <p class="route-points">{ points }</p>
        }
        if !model.warnings.is_empty() {
            <ul class="route-warnings">
              { for model.warnings.iter().map(|w| html! { <li>{ w.clone() }</li> }) }
            </ul>
        }
      </button>
    }
}
