mod certificate;
mod ranking;

use crate::game::{Certificate, HubTab, Leaderboard};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct EcoHubProps {
    pub tab: HubTab,
    pub leaderboard: Leaderboard,
    pub certificate: Certificate,
    pub on_tab: Callback<HubTab>,
    pub on_close: Callback<()>,
}

const TABS: [(HubTab, &str); 2] = [
    (HubTab::Ranking, "hub.tab.ranking"),
    (HubTab::Certificate, "hub.tab.certificate"),
];

/// Full-screen overlay with the league ranking and the driver certificate.
#[function_component(EcoHub)]
pub fn eco_hub(props: &EcoHubProps) -> Html {
    let container_ref = use_node_ref();
    {
        let container_ref = container_ref.clone();
        use_effect_with((), move |()| {
            if let Some(el) = container_ref.cast::<web_sys::HtmlElement>() {
                let _ = el.focus();
            }
            || {}
        });
    }

    let on_close = {
        let cb = props.on_close.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let on_keydown = {
        let cb = props.on_close.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Escape" {
                e.prevent_default();
                cb.emit(());
            }
        })
    };

    let body = match props.tab {
        HubTab::Ranking => html! {
            <ranking::RankingTab leaderboard={props.leaderboard.clone()} />
        },
        HubTab::Certificate => html! {
            <certificate::CertificateTab certificate={props.certificate.clone()} />
        },
    };

    html! {
      <div
        id="eco-hub"
        class="eco-hub"
        role="dialog"
        aria-modal="true"
        aria-labelledby="hub-title"
        tabindex="-1"
        ref={container_ref}
        onkeydown={on_keydown}
      >
        <header class="hub-header">
          <div>
            <h2 id="hub-title">{ crate::i18n::t("hub.title") }</h2>
            <p class="muted">{ crate::i18n::t("hub.subtitle") }</p>
          </div>
          <button class="hub-close" aria-label={crate::i18n::t("ui.close")} onclick={on_close}>
            { "✕" }
          </button>
        </header>
        <div class="hub-tabs" role="tablist">
          { for TABS.iter().map(|(tab, key)| {
              let active = *tab == props.tab;
              let onclick = {
                  let cb = props.on_tab.clone();
                  let tab = *tab;
                  Callback::from(move |_| cb.emit(tab))
              };
              html! {
                <button
                  role="tab"
                  id={format!("hub-tab-{}", tab.as_str())}
                  class={classes!("hub-tab", active.then_some("active"))}
                  aria-selected={active.to_string()}
                  {onclick}
                >
                  { crate::i18n::t(key) }
                </button>
              }
          }) }
        </div>
        <div class="hub-body" role="tabpanel" aria-labelledby={format!("hub-tab-{}", props.tab.as_str())}>
          { body }
        </div>
      </div>
    }
}
