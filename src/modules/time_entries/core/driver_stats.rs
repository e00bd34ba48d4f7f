// Per driver aggregation behind the leaderboard.
//
// Responsibilities
// - Group entries by driver name and sum target and actual hours.
// - Rank by balance, highest first. Ties keep the order in which drivers first appear.
// - Never perform input or output.

use crate::modules::time_entries::core::time_entry::TimeEntry;
use serde::Serialize;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DriverStat {
    pub driver_name: String,
    pub total_target: f64,
    pub total_actual: f64,
    pub balance: f64,
}

pub fn aggregate_driver_stats<'a>(entries: impl IntoIterator<Item = &'a TimeEntry>) -> Vec<DriverStat> {
    let mut positions: HashMap<&str, usize> = HashMap::new();
    let mut stats: Vec<DriverStat> = Vec::new();

    for entry in entries {
        let position = *positions
            .entry(entry.driver_name.as_str())
            .or_insert_with(|| {
                stats.push(DriverStat {
                    driver_name: entry.driver_name.clone(),
                    total_target: 0.0,
                    total_actual: 0.0,
                    balance: 0.0,
                });
                stats.len() - 1
            });
        let stat = &mut stats[position];
        stat.total_target += entry.target_hours;
        stat.total_actual += entry.actual_hours;
    }

    for stat in &mut stats {
        stat.balance = stat.total_actual - stat.total_target;
    }
    // sort_by is stable.
    stats.sort_by(|a, b| b.balance.total_cmp(&a.balance));
    stats
}
