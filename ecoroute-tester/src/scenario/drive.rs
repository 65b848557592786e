use anyhow::{Context, Result, anyhow, bail, ensure};
use ecoroute_core::{
    AdvanceToken, Catalog, RouteKind, Screen, Session, SessionError, SessionEvent, TimerDriver,
    Transition, VehicleType,
};
use std::time::Duration;
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};
use tokio::task::JoinHandle;

/// Longest we wait for a timer, in unscaled time.
const AWAIT_LIMIT: Duration = Duration::from_secs(10);

/// One scripted drive: a session, its timers and what they did.
pub struct DriveCtx<'a> {
    catalog: &'a Catalog,
    vehicle: VehicleType,
    session: Session,
    driver: TimerDriver,
    tx: UnboundedSender<AdvanceToken>,
    rx: UnboundedReceiver<AdvanceToken>,
    timers: Vec<JoinHandle<()>>,
    transitions: usize,
    stale_tokens: usize,
    verbose: bool,
}

impl<'a> DriveCtx<'a> {
    /// # Errors
    ///
    /// Fails when `vehicle_id` is not in the catalog.
    pub fn new(
        catalog: &'a Catalog,
        vehicle_id: &str,
        driver: TimerDriver,
        verbose: bool,
    ) -> Result<Self> {
        let vehicle = catalog
            .vehicles
            .get_by_id(vehicle_id)
            .cloned()
            .with_context(|| format!("unknown vehicle `{vehicle_id}`"))?;
        let (tx, rx) = unbounded_channel();
        Ok(Self {
            catalog,
            vehicle,
            session: Session::new(),
            driver,
            tx,
            rx,
            timers: Vec::new(),
            transitions: 0,
            stale_tokens: 0,
            verbose,
        })
    }

    pub const fn session(&self) -> &Session {
        &self.session
    }

    pub const fn vehicle(&self) -> &VehicleType {
        &self.vehicle
    }

    pub const fn transitions(&self) -> usize {
        self.transitions
    }

    pub const fn stale_tokens(&self) -> usize {
        self.stale_tokens
    }

    /// Apply an event and start the timer it asks for.
    pub fn send(&mut self, event: SessionEvent) -> Result<Transition, SessionError> {
        let transition = self.session.apply(event)?;
        if transition.changed_screen() {
            self.transitions += 1;
            if self.verbose {
                println!("     {} -> {}", transition.from, transition.to);
            }
        }
        if let Some(advance) = transition.scheduled {
            self.timers.push(self.driver.spawn(advance, self.tx.clone()));
        }
        Ok(transition)
    }

    /// Apply an event that must be accepted.
    ///
    /// # Errors
    ///
    /// Fails with the session's rejection.
    pub fn accept(&mut self, event: SessionEvent) -> Result<Transition> {
        let name = event.name();
        self.send(event)
            .with_context(|| format!("`{name}` rejected on {}", self.session.screen()))
    }

    /// Apply an event that must be rejected with `expected`.
    ///
    /// # Errors
    ///
    /// Fails when the event is accepted or rejected for another reason.
    pub fn reject(&mut self, event: SessionEvent, expected: SessionError) -> Result<()> {
        let name = event.name();
        match self.send(event) {
            Ok(t) => bail!("`{name}` was accepted ({} -> {})", t.from, t.to),
            Err(err) if err == expected => Ok(()),
            Err(err) => bail!("`{name}` rejected with `{err}`, expected `{expected}`"),
        }
    }

    pub fn select_vehicle(&mut self) -> Result<Transition> {
        let vehicle = self.vehicle.clone();
        self.accept(SessionEvent::SelectVehicle(vehicle))
    }

    pub fn route_event(&self, kind: RouteKind) -> Result<SessionEvent> {
        self.catalog
            .routes
            .by_kind(kind)
            .cloned()
            .map(SessionEvent::SelectRoute)
            .ok_or_else(|| anyhow!("catalog has no `{}` route", kind.key()))
    }

    pub fn pick_route(&mut self, kind: RouteKind) -> Result<Transition> {
        let event = self.route_event(kind)?;
        self.accept(event)
    }

    /// Feed fired timer tokens back into the session until `target` is reached.
    /// Stale tokens are counted and skipped.
    ///
    /// # Errors
    ///
    /// Fails on timeout, on a closed channel, or when a token is rejected for
    /// any reason other than being stale.
    pub async fn await_screen(&mut self, target: Screen) -> Result<()> {
        let limit = self.driver.scaled(AWAIT_LIMIT) + Duration::from_millis(100);
        while self.session.screen() != target {
            let token = tokio::time::timeout(limit, self.rx.recv())
                .await
                .with_context(|| {
                    format!("timed out waiting for {target} on {}", self.session.screen())
                })?
                .context("timer channel closed")?;
            match self.send(SessionEvent::AdvanceFired(token)) {
                Ok(_) => {}
                Err(SessionError::StaleAdvance { .. }) => {
                    self.stale_tokens += 1;
                    if self.verbose {
                        println!("     stale advance {token} ignored");
                    }
                }
                Err(err) => return Err(err).context("advance rejected"),
            }
        }
        Ok(())
    }

    /// Wait for every started timer and apply the tokens still queued.
    /// Returns how many of them the session accepted.
    ///
    /// # Errors
    ///
    /// Fails when a timer task panicked or a token is rejected for any reason
    /// other than being stale.
    pub async fn drain_timers(&mut self) -> Result<usize> {
        for timer in std::mem::take(&mut self.timers) {
            timer.await.context("timer task failed")?;
        }
        let mut accepted = 0;
        while let Ok(token) = self.rx.try_recv() {
            match self.send(SessionEvent::AdvanceFired(token)) {
                Ok(_) => accepted += 1,
                Err(SessionError::StaleAdvance { .. }) => self.stale_tokens += 1,
                Err(err) => return Err(err).context("advance rejected"),
            }
        }
        Ok(accepted)
    }

    /// Check the screen without waiting.
    ///
    /// # Errors
    ///
    /// Fails when the session is elsewhere.
    pub fn expect_screen(&self, screen: Screen) -> Result<()> {
        ensure!(
            self.session.screen() == screen,
            "expected {screen}, session is on {}",
            self.session.screen()
        );
        Ok(())
    }

    /// Drop any timers still running.
    pub fn finish(self) -> (usize, usize) {
        for timer in &self.timers {
            timer.abort();
        }
        (self.transitions, self.stale_tokens)
    }
}
