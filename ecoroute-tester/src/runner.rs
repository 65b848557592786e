use colored::Colorize;
use ecoroute_core::{Catalog, TimerDriver};
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

use crate::scenario::{DriveCtx, Scenario};
use crate::util::duration_serde;

/// Outcome of one scenario for one vehicle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioResult {
    pub scenario_name: String,
    pub vehicle: String,
    pub passed: bool,
    pub failures: Vec<String>,
    pub points: Option<u64>,
    pub transitions: usize,
    pub stale_tokens: usize,
    #[serde(with = "duration_serde")]
    pub duration: Duration,
}

impl ScenarioResult {
    fn failed(scenario: Scenario, vehicle: &str, failure: String, duration: Duration) -> Self {
        Self {
            scenario_name: scenario.key().to_string(),
            vehicle: vehicle.to_string(),
            passed: false,
            failures: vec![failure],
            points: None,
            transitions: 0,
            stale_tokens: 0,
            duration,
        }
    }
}

/// Replays every scenario against every vehicle on one timer driver.
pub struct DriveRunner<'a> {
    catalog: &'a Catalog,
    driver: TimerDriver,
    verbose: bool,
}

impl<'a> DriveRunner<'a> {
    pub const fn new(catalog: &'a Catalog, driver: TimerDriver, verbose: bool) -> Self {
        Self {
            catalog,
            driver,
            verbose,
        }
    }

    pub async fn run_one(&self, scenario: Scenario, vehicle_id: &str) -> ScenarioResult {
        let start = Instant::now();
        let mut ctx = match DriveCtx::new(self.catalog, vehicle_id, self.driver, self.verbose) {
            Ok(ctx) => ctx,
            Err(err) => {
                return ScenarioResult::failed(
                    scenario,
                    vehicle_id,
                    format!("{err:#}"),
                    start.elapsed(),
                );
            }
        };

        let outcome = scenario.run(&mut ctx).await;
        let (transitions, stale_tokens) = ctx.finish();
        let duration = start.elapsed();

        match outcome {
            Ok(points) => {
                if self.verbose {
                    println!(
                        "✅ {} [{}] {} pts in {:?}",
                        scenario.key().green(),
                        vehicle_id,
                        points,
                        duration
                    );
                }
                ScenarioResult {
                    scenario_name: scenario.key().to_string(),
                    vehicle: vehicle_id.to_string(),
                    passed: true,
                    failures: Vec::new(),
                    points: Some(points),
                    transitions,
                    stale_tokens,
                    duration,
                }
            }
            Err(err) => {
                log::warn!(target: "ecoroute.tester", "{} [{vehicle_id}] failed: {err:#}", scenario.key());
                if self.verbose {
                    println!("❌ {} [{}]: {:#}", scenario.key().red(), vehicle_id, err);
                }
                ScenarioResult {
                    transitions,
                    stale_tokens,
                    ..ScenarioResult::failed(scenario, vehicle_id, format!("{err:#}"), duration)
                }
            }
        }
    }

    pub async fn run_all(&self, scenarios: &[Scenario], vehicles: &[String]) -> Vec<ScenarioResult> {
        let mut results = Vec::with_capacity(scenarios.len() * vehicles.len());
        for &scenario in scenarios {
            for vehicle in vehicles {
                results.push(self.run_one(scenario, vehicle).await);
            }
        }
        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::AssetDirLoader;
    use ecoroute_core::DataLoader;

    fn catalog() -> Catalog {
        AssetDirLoader::default().load_catalog().unwrap()
    }

    #[tokio::test]
    async fn unknown_vehicle_is_a_failed_result() {
        let catalog = catalog();
        let runner = DriveRunner::new(&catalog, TimerDriver::new(0.0), false);
        let result = runner.run_one(Scenario::Smoke, "bicycle").await;
        assert!(!result.passed);
        assert!(result.failures[0].contains("bicycle"));
        assert_eq!(result.points, None);
    }

    #[tokio::test]
    async fn run_all_covers_the_grid() {
        let catalog = catalog();
        let runner = DriveRunner::new(&catalog, TimerDriver::new(0.001), false);
        let vehicles = vec!["eco".to_string(), "sedan".to_string()];
        let results = runner
            .run_all(&[Scenario::Smoke, Scenario::Guard], &vehicles)
            .await;
        assert_eq!(results.len(), 4);
        assert!(results.iter().all(|r| r.passed), "{results:?}");
        let eco_smoke = &results[0];
        assert_eq!(eco_smoke.vehicle, "eco");
        assert_eq!(eco_smoke.points, Some(125));
    }

    #[test]
    fn result_serializes_duration_as_millis() {
        let result = ScenarioResult {
            scenario_name: "smoke".into(),
            vehicle: "sedan".into(),
            passed: true,
            failures: Vec::new(),
            points: Some(250),
            transitions: 4,
            stale_tokens: 0,
            duration: Duration::from_millis(42),
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["duration"], 42);
        assert_eq!(json["points"], 250);
    }
}
