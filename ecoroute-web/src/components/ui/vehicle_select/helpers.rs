use crate::game::VehicleType;
use std::collections::BTreeMap;

pub(super) fn localized_name(vehicle: &VehicleType) -> String {
    let key = format!("vehicle.{}.name", vehicle.id);
    crate::i18n::t_or(&key, &vehicle.name)
}

pub(super) fn localized_desc(vehicle: &VehicleType) -> String {
    let key = format!("vehicle.{}.desc", vehicle.id);
    crate::i18n::t_or(&key, &vehicle.description)
}

pub(super) fn multiplier_label(vehicle: &VehicleType) -> String {
    let mult = vehicle.multiplier.label();
    let mut m = BTreeMap::new();
    m.insert("mult", mult.as_str());
    crate::i18n::tr("setup.mult", Some(&m))
}

pub(super) fn selection_message(vehicle: &VehicleType) -> String {
    let name = localized_name(vehicle);
    let mult = vehicle.multiplier.label();
    let mut m = BTreeMap::new();
    m.insert("name", name.as_str());
    m.insert("mult", mult.as_str());
    crate::i18n::tr("setup.selected", Some(&m))
}
