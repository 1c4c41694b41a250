//! Tiered candidate selection.
//!
//! Selection is an ordered chain of strategies, each a pure function from
//! the station list and request context to candidates. The first strategy
//! that yields anything wins:
//!
//! 1. **Standard**: honours the speed preference, must be within safe
//!    range of the start and near the trip midpoint.
//! 2. **Emergency**: any station within safe range of the start.
//! 3. **Out of range**: the single nearest station, reachable or not.
//!
//! The last tier guarantees a result whenever the catalog is non-empty.

use serde::Serialize;

use crate::domain::{Coordinate, SpeedPreference, Station, TripRequest, midpoint};

use super::charge_time::ChargeTimeEstimator;
use super::config::PlannerConfig;
use super::cost::estimate_cost;
use super::range::RangeEstimate;
use super::rank::score;

/// Which selection strategy produced a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    Standard,
    Emergency,
    OutOfRange,
}

impl Tier {
    /// Human-readable note shown with each option.
    pub fn note(&self) -> &'static str {
        match self {
            Tier::Standard => "Standard Option",
            Tier::Emergency => "Emergency Stop (Reachable)",
            Tier::OutOfRange => "Out of Range (Closest Option)",
        }
    }
}

/// A station enriched with trip-specific estimates.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub station: Station,
    pub tier: Tier,
    /// Distance used for ranking: from the trip midpoint for standard
    /// candidates, from the trip start otherwise (km).
    pub distance_km: f64,
    pub estimated_time_min: f64,
    pub energy_added_kwh: f64,
    pub estimated_cost: f64,
    /// Lower is better.
    pub score: f64,
}

impl Candidate {
    pub fn note(&self) -> &'static str {
        self.tier.note()
    }
}

/// Everything a selection strategy needs besides the stations.
pub struct SelectionContext<'a> {
    pub request: &'a TripRequest,
    pub range: RangeEstimate,
    pub midpoint: Coordinate,
    pub estimator: &'a ChargeTimeEstimator<'a>,
    pub config: &'a PlannerConfig,
}

impl<'a> SelectionContext<'a> {
    pub fn new(
        request: &'a TripRequest,
        range: RangeEstimate,
        estimator: &'a ChargeTimeEstimator<'a>,
        config: &'a PlannerConfig,
    ) -> Self {
        Self {
            request,
            range,
            midpoint: midpoint(&request.start, &request.end),
            estimator,
            config,
        }
    }

    /// Build a fully estimated and scored candidate.
    fn candidate(&self, station: &Station, tier: Tier, distance_km: f64) -> Candidate {
        let (estimated_time_min, energy_added_kwh) = if self.request.needs_no_charge() {
            (0.0, 0.0)
        } else {
            let energy = self.range.energy_needed_kwh;
            (self.estimator.estimate(station, self.request, energy), energy)
        };

        let estimated_cost = estimate_cost(energy_added_kwh, station, self.config);
        let score = score(tier, distance_km, estimated_time_min, station, self.config);

        Candidate {
            station: station.clone(),
            tier,
            distance_km,
            estimated_time_min,
            energy_added_kwh,
            estimated_cost,
            score,
        }
    }

    fn meets_speed_preference(&self, station: &Station) -> bool {
        match self.request.preference {
            SpeedPreference::Any => true,
            SpeedPreference::Fast => station.max_power_kw >= self.config.fast_min_power_kw,
            SpeedPreference::Ultrafast => {
                station.max_power_kw >= self.config.ultrafast_min_power_kw
            }
        }
    }
}

/// A selection strategy.
pub type TierStrategy = fn(&[Station], &SelectionContext<'_>) -> Vec<Candidate>;

/// The strategy chain, strictest first.
pub const TIER_CHAIN: [(Tier, TierStrategy); 3] = [
    (Tier::Standard, standard_tier),
    (Tier::Emergency, emergency_tier),
    (Tier::OutOfRange, out_of_range_tier),
];

/// Stations matching the speed preference, in safe range, near the midpoint.
pub fn standard_tier(stations: &[Station], ctx: &SelectionContext<'_>) -> Vec<Candidate> {
    stations
        .iter()
        .filter(|station| ctx.meets_speed_preference(station))
        .filter(|station| station.distance_to(&ctx.request.start) <= ctx.range.safe_range_km)
        .filter_map(|station| {
            let from_midpoint = station.distance_to(&ctx.midpoint);
            (from_midpoint <= ctx.config.midpoint_radius_km)
                .then(|| ctx.candidate(station, Tier::Standard, from_midpoint))
        })
        .collect()
}

/// Any station within safe range of the start, regardless of speed.
pub fn emergency_tier(stations: &[Station], ctx: &SelectionContext<'_>) -> Vec<Candidate> {
    stations
        .iter()
        .filter_map(|station| {
            let from_start = station.distance_to(&ctx.request.start);
            (from_start <= ctx.range.safe_range_km)
                .then(|| ctx.candidate(station, Tier::Emergency, from_start))
        })
        .collect()
}

/// The single station nearest the start, ignoring range.
pub fn out_of_range_tier(stations: &[Station], ctx: &SelectionContext<'_>) -> Vec<Candidate> {
    stations
        .iter()
        .map(|station| (station, station.distance_to(&ctx.request.start)))
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(station, from_start)| ctx.candidate(station, Tier::OutOfRange, from_start))
        .into_iter()
        .collect()
}

/// Result of running the strategy chain.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    /// The tier that produced the candidates, if any did.
    pub tier: Option<Tier>,
    pub candidates: Vec<Candidate>,
}

/// Run the strategy chain and return the first non-empty result.
pub fn select_candidates(stations: &[Station], ctx: &SelectionContext<'_>) -> Selection {
    for (tier, strategy) in TIER_CHAIN {
        let candidates = strategy(stations, ctx);
        if !candidates.is_empty() {
            return Selection {
                tier: Some(tier),
                candidates,
            };
        }
    }

    Selection {
        tier: None,
        candidates: Vec::new(),
    }
}
