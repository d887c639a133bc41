use super::model::{DailyReport, FoodEntry, HealthEntry, WeightChange, WeightEntry};
use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};
use std::collections::{BTreeMap, BTreeSet};

/// Merge the three per-day logs into report rows, oldest first.
///
/// Only dates with at least one observation appear. The weight change of a
/// row compares against the latest earlier date that carried a weight, not
/// necessarily the previous calendar day.
pub fn build_report(
    food_entries: &[FoodEntry],
    health_entries: &[HealthEntry],
    weight_entries: &[WeightEntry],
) -> Vec<DailyReport> {
    build_report_from(None, food_entries, health_entries, weight_entries)
}

/// Like [`build_report`], with the running previous weight seeded by the
/// latest weigh-in before the first reported date. The seed never yields a
/// row of its own.
pub fn build_report_from(
    initial_weight: Option<Decimal>,
    food_entries: &[FoodEntry],
    health_entries: &[HealthEntry],
    weight_entries: &[WeightEntry],
) -> Vec<DailyReport> {
    let mut calories_taken: BTreeMap<NaiveDate, Decimal> = BTreeMap::new();
    for entry in food_entries {
        *calories_taken.entry(entry.date).or_default() += entry.calories.unwrap_or_default();
    }

    // last-seen wins
    let health_by_date: BTreeMap<NaiveDate, &HealthEntry> = health_entries
        .iter()
        .map(|entry| (entry.date, entry))
        .collect();
    let weight_by_date: BTreeMap<NaiveDate, Decimal> = weight_entries
        .iter()
        .map(|entry| (entry.date, entry.weight))
        .collect();

    let dates: BTreeSet<NaiveDate> = calories_taken
        .keys()
        .chain(health_by_date.keys())
        .chain(weight_by_date.keys())
        .copied()
        .collect();

    dates
        .into_iter()
        .scan(initial_weight, |previous_weight, date| {
            let taken = calories_taken.get(&date).copied().unwrap_or_default();
            let health = health_by_date.get(&date);
            let burned = health
                .and_then(|h| h.calories_burned)
                .unwrap_or_default();
            let current_weight = weight_by_date.get(&date).copied();

            let weight_change_pct = weight_change(*previous_weight, current_weight);
            if current_weight.is_some() {
                *previous_weight = current_weight;
            }

            Some(DailyReport {
                date,
                calories_taken: taken,
                calories_burned: burned,
                deficit: taken - burned,
                weight_change_pct,
                sleep_hours: health.and_then(|h| h.sleep_hours).unwrap_or_default(),
                spo2_avg: health.and_then(|h| h.spo2_avg),
            })
        })
        .collect()
}

fn weight_change(previous: Option<Decimal>, current: Option<Decimal>) -> WeightChange {
    match (previous, current) {
        (Some(previous), Some(current)) if !previous.is_zero() => {
            let mut pct = ((current - previous) / previous * Decimal::ONE_HUNDRED)
                .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
            pct.rescale(2);
            WeightChange::Percent(pct)
        }
        _ => WeightChange::Unavailable,
    }
}
