//! Screen state machine for one app session.
//!
//! The session moves through `setup → idle → planning → navigating → summary`
//! and back to `idle` on restart. Each transition is a pure function of the
//! current state and one [`SessionEvent`]; timers are requested by returning a
//! [`ScheduledAdvance`] in the [`Transition`] and are honoured only while their
//! token matches the current generation.
use crate::constants::{
    LOG_REJECTED, LOG_SCHEDULED, LOG_TRANSITION, debug_logs_enabled, drive_duration,
    restart_delay, vehicle_confirm_delay,
};
use crate::reward::{Multiplier, RewardSummary, reward_for_route};
use crate::route::Route;
use crate::schedule::{AdvanceToken, ScheduledAdvance};
use crate::vehicle::VehicleType;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Screen {
    #[default]
    Setup,
    Idle,
    Planning,
    Navigating,
    Summary,
}

impl Screen {
    pub const ALL: [Self; 5] = [
        Self::Setup,
        Self::Idle,
        Self::Planning,
        Self::Navigating,
        Self::Summary,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Setup => "setup",
            Self::Idle => "idle",
            Self::Planning => "planning",
            Self::Navigating => "navigating",
            Self::Summary => "summary",
        }
    }

    /// Whether the map backdrop is visible on this screen.
    #[must_use]
    pub const fn shows_map(self) -> bool {
        !matches!(self, Self::Setup)
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum HubTab {
    #[default]
    Ranking,
    Certificate,
}

impl HubTab {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ranking => "ranking",
            Self::Certificate => "certificate",
        }
    }
}

/// Eco-Hub overlay state. Independent of the screen underneath.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case", tag = "state", content = "tab")]
pub enum Overlay {
    #[default]
    Hidden,
    EcoHub(HubTab),
}

impl Overlay {
    #[must_use]
    pub const fn is_open(self) -> bool {
        matches!(self, Self::EcoHub(_))
    }

    #[must_use]
    pub const fn tab(self) -> Option<HubTab> {
        match self {
            Self::EcoHub(tab) => Some(tab),
            Self::Hidden => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    /// Highlight a vehicle class on the setup screen.
    SelectVehicle(VehicleType),
    /// Start driving with the highlighted vehicle.
    ConfirmVehicle,
    /// Open the route sheet from the idle map.
    OpenPlanning,
    /// Start the simulated drive on `route`.
    SelectRoute(Route),
    /// Leave the summary and plan another drive.
    Restart,
    ShowHub,
    HideHub,
    SelectHubTab(HubTab),
    /// A scheduled timer expired.
    AdvanceFired(AdvanceToken),
}

impl SessionEvent {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::SelectVehicle(_) => "select_vehicle",
            Self::ConfirmVehicle => "confirm_vehicle",
            Self::OpenPlanning => "open_planning",
            Self::SelectRoute(_) => "select_route",
            Self::Restart => "restart",
            Self::ShowHub => "show_hub",
            Self::HideHub => "hide_hub",
            Self::SelectHubTab(_) => "select_hub_tab",
            Self::AdvanceFired(_) => "advance_fired",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("`{event}` is not accepted on the {screen} screen")]
    WrongScreen { event: &'static str, screen: Screen },
    #[error("no vehicle selected")]
    NoVehicleSelected,
    #[error("advance {token} is stale")]
    StaleAdvance { token: AdvanceToken },
    #[error("the Eco-Hub is open")]
    HubOpen,
    #[error("the Eco-Hub is closed")]
    HubClosed,
}

/// Outcome of an accepted event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: Screen,
    pub to: Screen,
    /// Timer the caller must start, if any.
    pub scheduled: Option<ScheduledAdvance>,
}

impl Transition {
    #[must_use]
    pub fn changed_screen(&self) -> bool {
        self.from != self.to
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Session {
    screen: Screen,
    vehicle: Option<VehicleType>,
    route: Option<Route>,
    overlay: Overlay,
    generation: u64,
    pending: Option<ScheduledAdvance>,
}

impl Session {
    /// A fresh session on the setup screen.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn screen(&self) -> Screen {
        self.screen
    }

    #[must_use]
    pub const fn vehicle(&self) -> Option<&VehicleType> {
        self.vehicle.as_ref()
    }

    #[must_use]
    pub const fn route(&self) -> Option<&Route> {
        self.route.as_ref()
    }

    #[must_use]
    pub const fn overlay(&self) -> Overlay {
        self.overlay
    }

    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// The timer the session is waiting on, if any.
    #[must_use]
    pub const fn pending(&self) -> Option<&ScheduledAdvance> {
        self.pending.as_ref()
    }

    #[must_use]
    pub fn multiplier(&self) -> Multiplier {
        Multiplier::for_vehicle(self.vehicle.as_ref())
    }

    /// Reward for the captured route, available once a route was chosen.
    #[must_use]
    pub fn reward_summary(&self) -> Option<RewardSummary> {
        self.route
            .as_ref()
            .map(|route| reward_for_route(route, self.vehicle.as_ref()))
    }

    /// Apply one event.
    ///
    /// # Errors
    ///
    /// Returns a [`SessionError`] when the event is not allowed in the current
    /// state. The session is left unchanged in that case.
    pub fn apply(&mut self, event: SessionEvent) -> Result<Transition, SessionError> {
        let name = event.name();
        let from = self.screen;
        let result = self.dispatch(event);
        match &result {
            Ok(transition) => {
                log::debug!(
                    target: LOG_TRANSITION,
                    "{name}: {} -> {} (generation {})",
                    transition.from,
                    transition.to,
                    self.generation
                );
                if let Some(advance) = transition.scheduled {
                    log::debug!(
                        target: LOG_SCHEDULED,
                        "advance {} to {} in {} ms",
                        advance.token,
                        advance.target,
                        advance.delay.as_millis()
                    );
                }
                if debug_logs_enabled() {
                    log::info!(target: LOG_TRANSITION, "{:?}", self);
                }
            }
            Err(err) => {
                log::debug!(target: LOG_REJECTED, "{name} on {from}: {err}");
            }
        }
        result
    }

    fn dispatch(&mut self, event: SessionEvent) -> Result<Transition, SessionError> {
        match event {
            SessionEvent::SelectVehicle(vehicle) => {
                self.require(Screen::Setup, "select_vehicle")?;
                self.vehicle = Some(vehicle);
                Ok(self.stay())
            }
            SessionEvent::ConfirmVehicle => {
                self.require(Screen::Setup, "confirm_vehicle")?;
                if self.vehicle.is_none() {
                    return Err(SessionError::NoVehicleSelected);
                }
                Ok(self.move_to(Screen::Idle, Some((vehicle_confirm_delay(), Screen::Planning))))
            }
            SessionEvent::OpenPlanning => {
                self.require(Screen::Idle, "open_planning")?;
                if self.overlay.is_open() {
                    return Err(SessionError::HubOpen);
                }
                Ok(self.move_to(Screen::Planning, None))
            }
            SessionEvent::SelectRoute(route) => {
                self.require(Screen::Planning, "select_route")?;
                if self.overlay.is_open() {
                    return Err(SessionError::HubOpen);
                }
                self.route = Some(route);
                Ok(self.move_to(Screen::Navigating, Some((drive_duration(), Screen::Summary))))
            }
            SessionEvent::Restart => {
                self.require(Screen::Summary, "restart")?;
                self.route = None;
                Ok(self.move_to(Screen::Idle, Some((restart_delay(), Screen::Planning))))
            }
            SessionEvent::ShowHub => {
                self.require(Screen::Idle, "show_hub")?;
                if !self.overlay.is_open() {
                    self.overlay = Overlay::EcoHub(HubTab::default());
                }
                Ok(self.stay())
            }
            SessionEvent::HideHub => {
                self.overlay = Overlay::Hidden;
                Ok(self.stay())
            }
            SessionEvent::SelectHubTab(tab) => {
                if !self.overlay.is_open() {
                    return Err(SessionError::HubClosed);
                }
                self.overlay = Overlay::EcoHub(tab);
                Ok(self.stay())
            }
            SessionEvent::AdvanceFired(token) => self.fire(token),
        }
    }

    fn require(&self, screen: Screen, event: &'static str) -> Result<(), SessionError> {
        if self.screen == screen {
            Ok(())
        } else {
            Err(SessionError::WrongScreen {
                event,
                screen: self.screen,
            })
        }
    }

    const fn stay(&self) -> Transition {
        Transition {
            from: self.screen,
            to: self.screen,
            scheduled: None,
        }
    }

    /// Change screen, superseding any pending advance, and optionally schedule
    /// the next one.
    fn move_to(&mut self, to: Screen, next: Option<(Duration, Screen)>) -> Transition {
        let from = self.screen;
        self.generation += 1;
        self.screen = to;
        self.pending = next.map(|(delay, target)| ScheduledAdvance {
            token: AdvanceToken::new(self.generation),
            delay,
            target,
        });
        Transition {
            from,
            to,
            scheduled: self.pending,
        }
    }

    fn fire(&mut self, token: AdvanceToken) -> Result<Transition, SessionError> {
        let Some(pending) = self.pending.filter(|p| p.token == token) else {
            return Err(SessionError::StaleAdvance { token });
        };
        let from = self.screen;
        self.screen = pending.target;
        self.pending = None;
        Ok(Transition {
            from,
            to: pending.target,
            scheduled: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reward::{RewardBreakdown, RewardParts};
    use crate::route::{RouteKind, TrafficLevel};
    use crate::vehicle::VehicleIcon;

    fn vehicle(id: &str, multiplier: f64) -> VehicleType {
        VehicleType {
            id: id.to_string(),
            name: id.to_string(),
            multiplier: Multiplier::new(multiplier).unwrap(),
            description: String::new(),
            icon: VehicleIcon::Truck,
        }
    }

    fn route(kind: RouteKind, rewards: RewardBreakdown) -> Route {
        Route {
            kind,
            label: kind.key().to_string(),
            time_min: 30,
            fuel_l: 3.0,
            distance_km: 15.0,
            traffic: TrafficLevel::Moderate,
            slope_score: None,
            idle_time_min: None,
            rewards,
        }
    }

    fn eco_route() -> Route {
        route(
            RouteKind::Eco,
            RewardBreakdown::Present(RewardParts::new(50, 120, 80)),
        )
    }

    fn fire_pending(session: &mut Session) -> Transition {
        let token = session.pending().unwrap().token;
        session.apply(SessionEvent::AdvanceFired(token)).unwrap()
    }

    fn at_planning(multiplier: f64) -> Session {
        let mut session = Session::new();
        session
            .apply(SessionEvent::SelectVehicle(vehicle("v", multiplier)))
            .unwrap();
        session.apply(SessionEvent::ConfirmVehicle).unwrap();
        fire_pending(&mut session);
        assert_eq!(session.screen(), Screen::Planning);
        session
    }

    #[test]
    fn confirm_without_vehicle_is_rejected() {
        let mut session = Session::new();
        let before = session.clone();
        let err = session.apply(SessionEvent::ConfirmVehicle).unwrap_err();
        assert_eq!(err, SessionError::NoVehicleSelected);
        assert_eq!(session, before);
    }

    #[test]
    fn confirm_schedules_planning() {
        let mut session = Session::new();
        session
            .apply(SessionEvent::SelectVehicle(vehicle("sedan", 1.0)))
            .unwrap();
        let t = session.apply(SessionEvent::ConfirmVehicle).unwrap();
        assert_eq!((t.from, t.to), (Screen::Setup, Screen::Idle));
        let scheduled = t.scheduled.unwrap();
        assert_eq!(scheduled.target, Screen::Planning);
        assert_eq!(scheduled.delay, Duration::from_millis(1_500));
    }

    #[test]
    fn eco_route_with_double_multiplier_pays_500() {
        let mut session = at_planning(2.0);
        let t = session.apply(SessionEvent::SelectRoute(eco_route())).unwrap();
        assert_eq!(t.to, Screen::Navigating);
        assert_eq!(t.scheduled.unwrap().delay, Duration::from_millis(2_500));
        fire_pending(&mut session);
        assert_eq!(session.screen(), Screen::Summary);
        assert_eq!(session.reward_summary().unwrap().total, 500);
    }

    #[test]
    fn fastest_route_pays_nothing() {
        for m in [0.5, 1.0, 3.0] {
            let mut session = at_planning(m);
            session
                .apply(SessionEvent::SelectRoute(route(
                    RouteKind::Fastest,
                    RewardBreakdown::Absent,
                )))
                .unwrap();
            fire_pending(&mut session);
            assert_eq!(session.reward_summary().unwrap().total, 0);
        }
    }

    #[test]
    fn restart_clears_route_and_returns_to_planning() {
        let mut session = at_planning(1.0);
        session.apply(SessionEvent::SelectRoute(eco_route())).unwrap();
        fire_pending(&mut session);
        let t = session.apply(SessionEvent::Restart).unwrap();
        assert_eq!((t.from, t.to), (Screen::Summary, Screen::Idle));
        assert!(session.route().is_none());
        assert_eq!(t.scheduled.unwrap().delay, Duration::from_millis(1_000));
        fire_pending(&mut session);
        assert_eq!(session.screen(), Screen::Planning);
        assert!(session.vehicle().is_some());
    }

    #[test]
    fn stale_token_does_not_move_screen() {
        let mut session = Session::new();
        session
            .apply(SessionEvent::SelectVehicle(vehicle("v", 1.0)))
            .unwrap();
        session.apply(SessionEvent::ConfirmVehicle).unwrap();
        let old = session.pending().unwrap().token;
        session.apply(SessionEvent::OpenPlanning).unwrap();
        assert!(session.pending().is_none());
        session.apply(SessionEvent::SelectRoute(eco_route())).unwrap();
        let err = session.apply(SessionEvent::AdvanceFired(old)).unwrap_err();
        assert_eq!(err, SessionError::StaleAdvance { token: old });
        assert_eq!(session.screen(), Screen::Navigating);
    }

    #[test]
    fn token_fires_only_once() {
        let mut session = at_planning(1.0);
        session.apply(SessionEvent::SelectRoute(eco_route())).unwrap();
        let token = session.pending().unwrap().token;
        session.apply(SessionEvent::AdvanceFired(token)).unwrap();
        assert!(session.apply(SessionEvent::AdvanceFired(token)).is_err());
        assert_eq!(session.screen(), Screen::Summary);
    }

    #[test]
    fn guards_reject_out_of_order_events() {
        let mut session = Session::new();
        assert!(matches!(
            session.apply(SessionEvent::SelectRoute(eco_route())),
            Err(SessionError::WrongScreen {
                screen: Screen::Setup,
                ..
            })
        ));
        assert!(session.apply(SessionEvent::Restart).is_err());
        assert!(session.apply(SessionEvent::ShowHub).is_err());

        let mut planning = at_planning(1.0);
        assert!(
            planning
                .apply(SessionEvent::SelectVehicle(vehicle("x", 3.0)))
                .is_err()
        );
        assert!((planning.multiplier().value() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn hub_overlay_keeps_screen() {
        let mut session = Session::new();
        session
            .apply(SessionEvent::SelectVehicle(vehicle("v", 1.0)))
            .unwrap();
        session.apply(SessionEvent::ConfirmVehicle).unwrap();
        let t = session.apply(SessionEvent::ShowHub).unwrap();
        assert!(!t.changed_screen());
        assert_eq!(session.overlay(), Overlay::EcoHub(HubTab::Ranking));
        session
            .apply(SessionEvent::SelectHubTab(HubTab::Certificate))
            .unwrap();
        assert_eq!(session.overlay().tab(), Some(HubTab::Certificate));
        assert_eq!(session.screen(), Screen::Idle);
        assert_eq!(
            session.apply(SessionEvent::OpenPlanning).unwrap_err(),
            SessionError::HubOpen
        );
        session.apply(SessionEvent::HideHub).unwrap();
        assert_eq!(
            session.apply(SessionEvent::SelectHubTab(HubTab::Ranking)),
            Err(SessionError::HubClosed)
        );
    }

    #[test]
    fn hub_left_open_by_timer_blocks_route_choice() {
        let mut session = Session::new();
        session
            .apply(SessionEvent::SelectVehicle(vehicle("v", 1.0)))
            .unwrap();
        session.apply(SessionEvent::ConfirmVehicle).unwrap();
        session.apply(SessionEvent::ShowHub).unwrap();
        fire_pending(&mut session);
        assert_eq!(session.screen(), Screen::Planning);
        assert_eq!(session.overlay(), Overlay::EcoHub(HubTab::Ranking));

        let generation = session.generation();
        assert_eq!(
            session.apply(SessionEvent::SelectRoute(eco_route())),
            Err(SessionError::HubOpen)
        );
        assert!(session.route().is_none());
        assert_eq!(session.generation(), generation);

        session.apply(SessionEvent::HideHub).unwrap();
        session.apply(SessionEvent::SelectRoute(eco_route())).unwrap();
        assert_eq!(session.screen(), Screen::Navigating);
    }

    #[test]
    fn no_vehicle_means_unit_multiplier() {
        assert_eq!(Session::new().multiplier(), Multiplier::ONE);
        assert!(Session::new().reward_summary().is_none());
    }
}
