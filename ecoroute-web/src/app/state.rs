use crate::app::session::SessionHandle;
use crate::game::{Catalog, Session};
use std::rc::Rc;
use yew::prelude::*;

#[derive(Clone)]
pub struct AppState {
    pub session: SessionHandle,
    pub catalog: UseStateHandle<Option<Rc<Catalog>>>,
    pub load_error: UseStateHandle<Option<String>>,
    pub boot_ready: UseStateHandle<bool>,
    pub current_language: UseStateHandle<String>,
}

#[hook]
pub fn use_app_state() -> AppState {
    let force_update = use_force_update();
    let session = use_mut_ref(|| None::<SessionHandle>);
    let handle = session
        .borrow_mut()
        .get_or_insert_with(|| {
            SessionHandle::new(
                Session::new(),
                Callback::from(move |()| force_update.force_update()),
            )
        })
        .clone();
    AppState {
        session: handle,
        catalog: use_state(|| None::<Rc<Catalog>>),
        load_error: use_state(|| None::<String>),
        boot_ready: use_state(|| false),
        current_language: use_state(crate::i18n::current_lang),
    }
}

impl AppState {
    /// The loaded catalog, once bootstrap finished successfully.
    #[must_use]
    pub fn catalog(&self) -> Option<Rc<Catalog>> {
        (*self.catalog).clone()
    }
}
