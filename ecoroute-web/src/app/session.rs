//! Shared handle around the core session.
//!
//! Components read the session through the handle during render and feed
//! events back through [`SessionHandle::dispatch`]. Accepted transitions that
//! request a timer start one; in the browser that is a `setTimeout`, elsewhere
//! a virtual clock that tests step forward.
use crate::game::{Session, SessionError, SessionEvent, Transition};
#[cfg(not(target_arch = "wasm32"))]
use crate::game::AdvanceQueue;
use crate::game::ScheduledAdvance;
use std::cell::{Ref, RefCell};
use std::rc::Rc;
#[cfg(not(target_arch = "wasm32"))]
use std::time::Duration;
use yew::Callback;

#[derive(Clone)]
pub struct SessionHandle {
    inner: Rc<RefCell<Session>>,
    refresh: Callback<()>,
    #[cfg(not(target_arch = "wasm32"))]
    clock: Rc<RefCell<AdvanceQueue>>,
}

impl PartialEq for SessionHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl SessionHandle {
    /// Wrap `session`; `refresh` is emitted after every accepted event.
    #[must_use]
    pub fn new(session: Session, refresh: Callback<()>) -> Self {
        Self {
            inner: Rc::new(RefCell::new(session)),
            refresh,
            #[cfg(not(target_arch = "wasm32"))]
            clock: Rc::new(RefCell::new(AdvanceQueue::new())),
        }
    }

    /// Borrow the current session for rendering.
    #[must_use]
    pub fn read(&self) -> Ref<'_, Session> {
        self.inner.borrow()
    }

    /// Apply one event and start any timer it requests.
    ///
    /// # Errors
    ///
    /// Returns the [`SessionError`] when the event is rejected.
    pub fn dispatch(&self, event: SessionEvent) -> Result<Transition, SessionError> {
        let result = self.inner.borrow_mut().apply(event);
        if let Ok(transition) = &result {
            if let Some(advance) = transition.scheduled {
                self.schedule(advance);
            }
            if transition.changed_screen() {
                let message = {
                    let session = self.read();
                    crate::a11y::screen_announcement(
                        session.screen(),
                        session.reward_summary().as_ref(),
                    )
                };
                crate::a11y::set_status(&message);
            }
            self.refresh.emit(());
        }
        result
    }

    /// Dispatch and drop a rejection; the core already logs it.
    pub fn send(&self, event: SessionEvent) {
        let _ = self.dispatch(event);
    }

    #[cfg(target_arch = "wasm32")]
    fn schedule(&self, advance: ScheduledAdvance) {
        let handle = self.clone();
        wasm_bindgen_futures::spawn_local(async move {
            if let Err(err) = crate::dom::sleep(advance.delay).await {
                crate::dom::console_error(&format!(
                    "advance timer failed: {}",
                    crate::dom::js_error_message(&err)
                ));
                return;
            }
            handle.send(SessionEvent::AdvanceFired(advance.token));
        });
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn schedule(&self, advance: ScheduledAdvance) {
        self.clock.borrow_mut().push(advance);
    }

    /// Step the virtual clock and deliver every timer that came due.
    /// Returns how many firings the session accepted.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn advance_clock(&self, step: Duration) -> usize {
        let fired = self.clock.borrow_mut().advance_by(step);
        fired
            .into_iter()
            .filter(|advance| {
                self.dispatch(SessionEvent::AdvanceFired(advance.token))
                    .is_ok()
            })
            .count()
    }
}
