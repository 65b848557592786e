mod card;
mod view_model;

pub use view_model::RouteCardModel;

use crate::game::{Multiplier, RouteKind, RoutesList};
use crate::input::{PickerKey, picker_key};
use web_sys::KeyboardEvent;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct RouteSheetProps {
    pub routes: RoutesList,
    pub multiplier: Multiplier,
    pub on_select: Callback<RouteKind>,
}

/// Bottom sheet listing the candidate routes.
#[function_component(RouteSheet)]
pub fn route_sheet(p: &RouteSheetProps) -> Html {
    let on_keydown = {
        let kinds: Vec<RouteKind> = p.routes.iter().map(|r| r.kind).collect();
        let on_select = p.on_select.clone();
        Callback::from(move |e: KeyboardEvent| {
            if let Some(PickerKey::Pick(idx)) = picker_key(&e.key(), &e.code())
                && let Some(kind) = kinds.get(idx)
            {
                on_select.emit(*kind);
                e.prevent_default();
            }
        })
    };

    html! {
      <section class="bottom-sheet route-sheet" aria-labelledby="planning-title" onkeydown={on_keydown}>
        <div class="sheet-handle" aria-hidden="true"></div>
        <h2 id="planning-title">{ crate::i18n::t("planning.title") }</h2>
        <div class="route-list">
          { for p.routes.iter().enumerate().map(|(i, route)| html! {
              <card::RouteCard
                  key={route.kind.key()}
                  index={i}
                  model={RouteCardModel::build(route, &p.routes, p.multiplier)}
                  on_select={p.on_select.clone()}
              />
          }) }
        </div>
        <p class="muted hint">{ crate::i18n::t("planning.hint") }</p>
      </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::static_catalog;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn sheet_lists_both_routes_with_eco_preview() {
        crate::i18n::set_lang("en");
        let props = RouteSheetProps {
            routes: static_catalog().unwrap().routes,
            multiplier: Multiplier::new(3.0).unwrap(),
            on_select: Callback::noop(),
        };
        let html = block_on(LocalServerRenderer::<RouteSheet>::with_props(props).render());
        assert!(html.contains("Fastest route"));
        assert!(html.contains("Carbon-saving route"));
        assert!(html.contains("Recommended (Eco)"));
        assert!(html.contains("Leave now to earn 750 points!"));
        let fastest = html.find("route-fastest").unwrap();
        let eco = html.find("route-eco").unwrap();
        assert!(fastest < eco);
    }
}
