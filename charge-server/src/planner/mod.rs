//! Charging-stop planner.
//!
//! This module implements the core planning algorithm that answers:
//! "My battery is at this level - where should I stop to charge on the
//! way to my destination?"
//!
//! Stations are filtered through three fallback tiers, estimated for
//! charge time and cost, scored, and ranked; only the best one is routed.

mod charge_time;
mod config;
mod cost;
mod range;
mod rank;
mod route;
mod select;
mod trip;

pub use charge_time::{ChargeTimeEstimator, physics_estimate};
pub use config::{ConfigError, PlannerConfig};
pub use cost::{estimate_cost, tariff_rate};
pub use range::{RangeEstimate, estimate_range};
pub use rank::{rank_candidates, score};
pub use route::{Offline, RouteFetcher, RouteProvider, simulate_route};
pub use select::{
    Candidate, Selection, SelectionContext, TIER_CHAIN, Tier, TierStrategy, select_candidates,
};
pub use trip::{PlannedOption, Shortlist, TripPlan, TripPlanner};
