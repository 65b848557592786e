//! Tokio-backed timer driver for headless runs.
use crate::schedule::{AdvanceToken, ScheduledAdvance};
use crate::session::{Session, SessionEvent, SessionError, Transition};
use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;

/// Sleeps for scheduled advances, optionally compressing time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimerDriver {
    time_scale: f64,
}

impl Default for TimerDriver {
    fn default() -> Self {
        Self { time_scale: 1.0 }
    }
}

impl TimerDriver {
    /// `time_scale` multiplies every delay; `0.1` runs ten times faster.
    /// Negative or non-finite values fall back to real time.
    #[must_use]
    pub fn new(time_scale: f64) -> Self {
        let time_scale = if time_scale.is_finite() && time_scale >= 0.0 {
            time_scale
        } else {
            log::warn!("invalid time scale {time_scale}, using 1.0");
            1.0
        };
        Self { time_scale }
    }

    #[must_use]
    pub const fn time_scale(&self) -> f64 {
        self.time_scale
    }

    #[must_use]
    pub fn scaled(&self, delay: Duration) -> Duration {
        delay.mul_f64(self.time_scale)
    }

    /// Wait out one advance.
    pub async fn wait(&self, advance: &ScheduledAdvance) {
        tokio::time::sleep(self.scaled(advance.delay)).await;
    }

    /// Fire pending advances until the session stops scheduling new ones.
    ///
    /// # Errors
    ///
    /// Propagates a [`SessionError`] if a firing is rejected.
    pub async fn settle(&self, session: &mut Session) -> Result<Vec<Transition>, SessionError> {
        let mut fired = Vec::new();
        while let Some(advance) = session.pending().copied() {
            self.wait(&advance).await;
            fired.push(session.apply(SessionEvent::AdvanceFired(advance.token))?);
        }
        Ok(fired)
    }

    /// Start a detached timer that sends the advance token when it expires.
    /// The session decides whether the token is still current.
    #[must_use]
    pub fn spawn(
        &self,
        advance: ScheduledAdvance,
        tx: UnboundedSender<AdvanceToken>,
    ) -> JoinHandle<()> {
        let delay = self.scaled(advance.delay);
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if tx.send(advance.token).is_err() {
                log::debug!("advance {} dropped, receiver gone", advance.token);
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reward::Multiplier;
    use crate::session::Screen;
    use crate::vehicle::{VehicleIcon, VehicleType};
    use tokio::sync::mpsc;

    fn sedan() -> VehicleType {
        VehicleType {
            id: "sedan".into(),
            name: "Sedan".into(),
            multiplier: Multiplier::ONE,
            description: String::new(),
            icon: VehicleIcon::Car,
        }
    }

    #[tokio::test(start_paused = true)]
    async fn settle_runs_confirm_advance() {
        let mut session = Session::new();
        session.apply(SessionEvent::SelectVehicle(sedan())).unwrap();
        session.apply(SessionEvent::ConfirmVehicle).unwrap();
        let start = tokio::time::Instant::now();
        let fired = TimerDriver::default().settle(&mut session).await.unwrap();
        assert_eq!(fired.len(), 1);
        assert_eq!(session.screen(), Screen::Planning);
        assert!(start.elapsed() >= Duration::from_millis(1_500));
    }

    #[tokio::test(start_paused = true)]
    async fn spawned_stale_timer_is_ignored() {
        let driver = TimerDriver::new(0.5);
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut session = Session::new();
        session.apply(SessionEvent::SelectVehicle(sedan())).unwrap();
        let t = session.apply(SessionEvent::ConfirmVehicle).unwrap();
        let _timer = driver.spawn(t.scheduled.unwrap(), tx);
        session.apply(SessionEvent::OpenPlanning).unwrap();

        let token = rx.recv().await.unwrap();
        assert!(session.apply(SessionEvent::AdvanceFired(token)).is_err());
        assert_eq!(session.screen(), Screen::Planning);
    }

    #[test]
    fn invalid_scale_falls_back() {
        assert!((TimerDriver::new(f64::NAN).time_scale() - 1.0).abs() < f64::EPSILON);
        assert_eq!(
            TimerDriver::new(0.0).scaled(Duration::from_secs(5)),
            Duration::ZERO
        );
    }
}
