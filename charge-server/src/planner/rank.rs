//! Candidate scoring and ranking.
//!
//! Scores are comparable within one request; lower is better.

use crate::domain::Station;

use super::config::PlannerConfig;
use super::select::{Candidate, Tier};

/// Score a candidate.
///
/// Standard candidates score their midpoint distance plus weighted charge
/// minutes, with a penalty for stations that are not available and a
/// bonus for very high-power chargers. Fallback tiers score raw distance
/// from the start: when range is the problem, nearest wins.
pub fn score(
    tier: Tier,
    distance_km: f64,
    estimated_time_min: f64,
    station: &Station,
    config: &PlannerConfig,
) -> f64 {
    match tier {
        Tier::Standard => {
            let base = distance_km + config.time_weight * estimated_time_min;
            base + adjustment(station, config)
        }
        Tier::Emergency | Tier::OutOfRange => distance_km,
    }
}

/// Availability penalty and power bonus for a station.
fn adjustment(station: &Station, config: &PlannerConfig) -> f64 {
    let mut adjustment = 0.0;
    if !station.status.is_available() {
        adjustment += config.unavailable_penalty;
    }
    if station.max_power_kw >= config.high_power_threshold_kw {
        adjustment -= config.high_power_bonus;
    }
    adjustment
}

/// Rank candidates by preference.
///
/// Returns at most `max_results` candidates sorted best-first. The sort
/// is stable, so equal scores keep catalog order.
pub fn rank_candidates(mut candidates: Vec<Candidate>, max_results: usize) -> Vec<Candidate> {
    candidates.sort_by(|a, b| a.score.total_cmp(&b.score));
    candidates.truncate(max_results);
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ChargerType, Coordinate, StationId, StationStatus};

    fn station(power: f64, status: StationStatus) -> Station {
        Station::new(
            StationId::parse("st").unwrap(),
            "Test",
            Coordinate::new(3.0, 101.0).unwrap(),
            ChargerType::DcFast,
            power,
            status,
        )
    }

    fn candidate(id: &str, score: f64) -> Candidate {
        let mut station = station(50.0, StationStatus::Available);
        station.id = StationId::parse(id).unwrap();
        Candidate {
            station,
            tier: Tier::Standard,
            distance_km: 0.0,
            estimated_time_min: 0.0,
            energy_added_kwh: 0.0,
            estimated_cost: 0.0,
            score,
        }
    }

    #[test]
    fn standard_score_formula() {
        let config = PlannerConfig::default();
        let s = station(50.0, StationStatus::Available);
        // 40 km + 0.5 × 30 min
        assert_eq!(score(Tier::Standard, 40.0, 30.0, &s, &config), 55.0);
    }

    #[test]
    fn unavailable_penalty_is_200() {
        let config = PlannerConfig::default();
        for status in [
            StationStatus::Busy,
            StationStatus::Charging,
            StationStatus::Offline,
            StationStatus::Unknown,
        ] {
            let available = score(
                Tier::Standard,
                40.0,
                30.0,
                &station(50.0, StationStatus::Available),
                &config,
            );
            let other = score(Tier::Standard, 40.0, 30.0, &station(50.0, status), &config);
            assert_eq!(other - available, 200.0, "status {status}");
        }
    }

    #[test]
    fn high_power_bonus_is_15() {
        let config = PlannerConfig::default();
        let slow = score(
            Tier::Standard,
            40.0,
            30.0,
            &station(119.9, StationStatus::Available),
            &config,
        );
        let fast = score(
            Tier::Standard,
            40.0,
            30.0,
            &station(120.0, StationStatus::Available),
            &config,
        );
        assert_eq!(slow - fast, 15.0);
    }

    #[test]
    fn penalty_and_bonus_combine() {
        let config = PlannerConfig::default();
        let s = station(150.0, StationStatus::Busy);
        assert_eq!(score(Tier::Standard, 40.0, 30.0, &s, &config), 240.0);
    }

    #[test]
    fn fallback_tiers_score_raw_distance() {
        let config = PlannerConfig::default();
        let s = station(150.0, StationStatus::Offline);
        assert_eq!(score(Tier::Emergency, 12.5, 30.0, &s, &config), 12.5);
        assert_eq!(score(Tier::OutOfRange, 80.0, 30.0, &s, &config), 80.0);
    }

    #[test]
    fn rank_sorts_and_truncates() {
        let candidates = vec![
            candidate("c", 30.0),
            candidate("a", 10.0),
            candidate("e", 50.0),
            candidate("b", 20.0),
            candidate("f", 60.0),
            candidate("d", 40.0),
        ];

        let ranked = rank_candidates(candidates, 5);
        let ids: Vec<_> = ranked.iter().map(|c| c.station.id.as_str()).collect();
        assert_eq!(ids, ["a", "b", "c", "d", "e"]);
    }

    #[test]
    fn ties_keep_input_order() {
        let candidates = vec![candidate("first", 10.0), candidate("second", 10.0)];
        let ranked = rank_candidates(candidates, 5);
        assert_eq!(ranked[0].station.id.as_str(), "first");
        assert_eq!(ranked[1].station.id.as_str(), "second");
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::domain::{ChargerType, Coordinate, StationId, StationStatus};
    use proptest::prelude::*;

    fn status() -> impl Strategy<Value = StationStatus> {
        prop_oneof![
            Just(StationStatus::Available),
            Just(StationStatus::Busy),
            Just(StationStatus::Charging),
            Just(StationStatus::Offline),
        ]
    }

    fn candidate() -> impl Strategy<Value = Candidate> {
        (0.0f64..500.0, 0.0f64..300.0, 1.0f64..350.0, status()).prop_map(
            |(distance, minutes, power, status)| {
                let station = Station::new(
                    StationId::parse("st").unwrap(),
                    "Test",
                    Coordinate::new(3.0, 101.0).unwrap(),
                    ChargerType::DcFast,
                    power,
                    status,
                );
                let config = PlannerConfig::default();
                let score = score(Tier::Standard, distance, minutes, &station, &config);
                Candidate {
                    station,
                    tier: Tier::Standard,
                    distance_km: distance,
                    estimated_time_min: minutes,
                    energy_added_kwh: 0.0,
                    estimated_cost: 0.0,
                    score,
                }
            },
        )
    }

    proptest! {
        #[test]
        fn ranked_scores_are_non_decreasing(
            candidates in prop::collection::vec(candidate(), 0..30),
            max in 1usize..10,
        ) {
            let len = candidates.len();
            let ranked = rank_candidates(candidates, max);

            prop_assert_eq!(ranked.len(), len.min(max));
            for pair in ranked.windows(2) {
                prop_assert!(pair[0].score <= pair[1].score);
            }
        }

        #[test]
        fn penalty_is_exactly_additive(distance in 0.0f64..500.0, minutes in 0.0f64..300.0) {
            let config = PlannerConfig::default();
            let make = |status| Station::new(
                StationId::parse("st").unwrap(),
                "Test",
                Coordinate::new(3.0, 101.0).unwrap(),
                ChargerType::DcFast,
                50.0,
                status,
            );
            let available = score(Tier::Standard, distance, minutes, &make(StationStatus::Available), &config);
            let busy = score(Tier::Standard, distance, minutes, &make(StationStatus::Busy), &config);
            prop_assert!((busy - available - 200.0).abs() < 1e-9);
        }
    }
}
