use crate::problem::{time_window::Time, vehicle::Vehicle};

/// Makes every vehicle unavailable after `cutoff`.
///
/// Windows ending after the cutoff are clamped to it, vehicles whose window
/// only opens after the cutoff are dropped. Vehicles without a window are kept
/// as is. The input is not modified.
pub fn constrain(vehicles: &[Vehicle], cutoff: Time) -> Vec<Vehicle> {
    vehicles
        .iter()
        .filter_map(|vehicle| match vehicle.time_window {
            Some(window) => window.truncated(cutoff).map(|window| Vehicle {
                time_window: Some(window),
                ..vehicle.clone()
            }),
            None => Some(vehicle.clone()),
        })
        .collect()
}
