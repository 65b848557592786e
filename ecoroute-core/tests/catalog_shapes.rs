use std::hash::Hasher;

use ecoroute_core::vehicle::VEHICLE_ORDER;
use ecoroute_core::{
    Catalog, CatalogSources, CertificateTier, RouteKind, TrafficLevel, VehicleIcon,
    reward_for_route,
};
use twox_hash::XxHash64;

const REWARD_TABLE_HASH: u64 = 0xc4ef_0229_964b_4b59;

fn shipped() -> Catalog {
    Catalog::from_sources(&CatalogSources {
        vehicles: include_str!("../../ecoroute-web/static/assets/data/vehicles.json"),
        routes: include_str!("../../ecoroute-web/static/assets/data/routes.json"),
        leaderboard: include_str!("../../ecoroute-web/static/assets/data/leaderboard.json"),
        certificate: include_str!("../../ecoroute-web/static/assets/data/certificate.json"),
    })
    .unwrap()
}

fn snapshot_hash(bytes: &[u8]) -> u64 {
    let mut hasher = XxHash64::with_seed(0);
    hasher.write(bytes);
    hasher.finish()
}

#[test]
fn shipped_vehicles_follow_display_order() {
    let catalog = shipped();
    let ids: Vec<&str> = catalog.vehicles.iter().map(|v| v.id.as_str()).collect();
    assert_eq!(ids, VEHICLE_ORDER);
    let icons: Vec<VehicleIcon> = catalog.vehicles.iter().map(|v| v.icon).collect();
    assert_eq!(
        icons,
        [
            VehicleIcon::Leaf,
            VehicleIcon::Car,
            VehicleIcon::Truck,
            VehicleIcon::Container
        ]
    );
}

#[test]
fn shipped_routes_pair_fastest_and_eco() {
    let catalog = shipped();
    let fastest = catalog.routes.fastest().unwrap();
    let eco = catalog.routes.eco().unwrap();
    assert_eq!(fastest.kind, RouteKind::Fastest);
    assert_eq!(fastest.traffic, TrafficLevel::High);
    assert!(fastest.rewards.is_absent());
    assert_eq!(eco.traffic, TrafficLevel::Low);
    assert_eq!(eco.rewards.parts().map(|p| p.base_total()), Some(250));

    let cmp = catalog.routes.compare(eco).unwrap();
    assert_eq!(cmp.delay_minutes, 4);
    assert_eq!(cmp.fuel_cost_saved_krw, 960);
}

#[test]
fn shipped_hub_data_is_consistent() {
    let catalog = shipped();
    let ranks: Vec<u32> = catalog.leaderboard.iter().map(|e| e.rank).collect();
    assert_eq!(ranks, [1, 2, 3]);
    let battle = catalog.leaderboard.region_battle().unwrap();
    assert_eq!(battle.gap, 1_300);
    assert_eq!(catalog.certificate.tier, CertificateTier::Gold);
    assert!(catalog.certificate.has_valid_percent());
}

#[test]
fn reward_table_snapshot_stable() {
    let catalog = shipped();
    let mut lines = Vec::new();
    for vehicle in &catalog.vehicles {
        for route in &catalog.routes {
            let reward = reward_for_route(route, Some(vehicle));
            lines.push(format!("{}:{}:{}", vehicle.id, route.kind.key(), reward.total));
        }
    }
    let canonical = lines.join("\n");
    assert_eq!(
        snapshot_hash(canonical.as_bytes()),
        REWARD_TABLE_HASH,
        "reward table drifted:\n{canonical}"
    );
}
