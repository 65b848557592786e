mod handlers;
mod phases;

pub use handlers::AppHandlers;

use crate::app::state::AppState;
use yew::prelude::*;

pub fn render_app(state: &AppState) -> Html {
    let handlers = AppHandlers::new(state);
    let main_view = phases::render_main_view(state, &handlers);

    html! {
        <>
            <crate::components::header::Header
                on_lang_change={handlers.lang_change.clone()}
                current_lang={(*state.current_language).clone()}
            />
            <main id="main" role="main" class="phone-frame">
                <style>{ crate::a11y::visible_focus_css() }</style>
                <div id="app-status" class="sr-only" role="status" aria-live="polite"></div>
                { main_view }
            </main>
            <crate::components::footer::Footer />
        </>
    }
}
