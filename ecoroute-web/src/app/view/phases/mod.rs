mod hub;
mod idle;
mod navigating;
mod planning;
mod setup;
mod summary;

use crate::app::state::AppState;
use crate::app::view::handlers::AppHandlers;
use crate::game::Screen;
use std::collections::BTreeMap;
use yew::prelude::*;

pub fn render_main_view(state: &AppState, handlers: &AppHandlers) -> Html {
    if let Some(err) = (*state.load_error).as_ref() {
        let mut m = BTreeMap::new();
        m.insert("error", err.as_str());
        return html! {
            <section class="panel boot-error" role="alert">
                { crate::i18n::tr("boot.error", Some(&m)) }
            </section>
        };
    }
    let Some(catalog) = state.catalog().filter(|_| *state.boot_ready) else {
        return html! {
            <section class="panel boot" aria-busy="true">
                <p class="muted">{ crate::i18n::t("boot.loading") }</p>
            </section>
        };
    };

    let screen = state.session.read().screen();
    let body = match screen {
        Screen::Setup => setup::render_setup(state, handlers, &catalog),
        Screen::Idle => idle::render_idle(handlers),
        Screen::Planning => planning::render_planning(state, handlers, &catalog),
        Screen::Navigating => navigating::render_navigating(),
        Screen::Summary => summary::render_summary(state, handlers, &catalog),
    };
    html! {
        <div class={classes!("screen", format!("screen-{}", screen.as_str()))} data-screen={screen.as_str()}>
            { body }
            { hub::render_hub(state, handlers, &catalog) }
        </div>
    }
}
