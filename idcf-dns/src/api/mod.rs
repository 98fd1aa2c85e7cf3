//! Zone and record operations on [`Client`](crate::Client).

mod record;
mod zone;

const ZONES_PATH: &str = "/api/v1/zones";

fn zone_path(zone_id: &str) -> String {
    format!("{ZONES_PATH}/{zone_id}")
}

fn verify_path(zone_id: &str) -> String {
    format!("{ZONES_PATH}/{zone_id}/verify")
}

fn records_path(zone_id: &str) -> String {
    format!("{ZONES_PATH}/{zone_id}/records")
}

fn record_path(zone_id: &str, record_id: &str) -> String {
    format!("{ZONES_PATH}/{zone_id}/records/{record_id}")
}
