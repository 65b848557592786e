pub mod eco_hub;
pub mod idle_controls;
pub mod map_backdrop;
pub mod nav_overlay;
pub mod reward_summary;
pub mod route_sheet;
pub mod vehicle_select;
