//! Trip planning orchestration.
//!
//! Flow for one request: range model → tiered selection (charge time,
//! cost and score per candidate) → ranking and truncation → a single
//! route lookup for the best candidate.

use tracing::debug;

use crate::catalog::StationCatalog;
use crate::domain::{RouteInfo, TripRequest};
use crate::predictor::ChargePredictor;

use super::charge_time::ChargeTimeEstimator;
use super::config::PlannerConfig;
use super::range::{RangeEstimate, estimate_range};
use super::rank::rank_candidates;
use super::route::{Offline, RouteFetcher, RouteProvider};
use super::select::{Candidate, SelectionContext, Tier, select_candidates};

/// Ranked candidates before any routing.
#[derive(Debug, Clone, PartialEq)]
pub struct Shortlist {
    pub range: RangeEstimate,
    /// The tier that produced the candidates, if any did.
    pub tier: Option<Tier>,
    /// Best first, at most `max_results` long.
    pub candidates: Vec<Candidate>,
}

/// A ranked option in the plan.
#[derive(Debug, Clone, PartialEq)]
pub struct PlannedOption {
    pub candidate: Candidate,
    /// Driving minutes of the routed trip for the best option; the
    /// estimated charge time as a placeholder for the rest.
    pub real_duration_min: f64,
    /// Route geometry, present only for the best option.
    pub polyline: Option<String>,
}

/// The full answer for a trip request.
#[derive(Debug, Clone, PartialEq)]
pub struct TripPlan {
    pub request: TripRequest,
    pub range: RangeEstimate,
    pub tier: Option<Tier>,
    /// Route via the best option, absent only when there are no options.
    pub route: Option<RouteInfo>,
    pub options: Vec<PlannedOption>,
}

impl TripPlan {
    /// The recommended stop, if any.
    pub fn charger_stop(&self) -> Option<&Candidate> {
        self.options.first().map(|o| &o.candidate)
    }
}

/// Plans a charging stop against one catalog snapshot.
pub struct TripPlanner<'a, R: RouteProvider = Offline> {
    catalog: &'a StationCatalog,
    predictor: Option<&'a dyn ChargePredictor>,
    router: Option<&'a R>,
    config: &'a PlannerConfig,
}

impl<'a> TripPlanner<'a, Offline> {
    /// Create a planner with no predictor and no routing provider.
    pub fn new(catalog: &'a StationCatalog, config: &'a PlannerConfig) -> Self {
        Self {
            catalog,
            predictor: None,
            router: None,
            config,
        }
    }
}

impl<'a, R: RouteProvider> TripPlanner<'a, R> {
    /// Use a trained predictor for charge times.
    pub fn with_predictor(mut self, predictor: Option<&'a dyn ChargePredictor>) -> Self {
        self.predictor = predictor;
        self
    }

    /// Use a routing provider for the best candidate's route.
    pub fn with_router<R2: RouteProvider>(self, router: &'a R2) -> TripPlanner<'a, R2> {
        TripPlanner {
            catalog: self.catalog,
            predictor: self.predictor,
            router: Some(router),
            config: self.config,
        }
    }

    /// Select, estimate, score and rank candidates without routing.
    pub fn shortlist(&self, request: &TripRequest) -> Shortlist {
        let range = estimate_range(request, self.config);
        let estimator = ChargeTimeEstimator::new(self.predictor, self.config);
        let ctx = SelectionContext::new(request, range, &estimator, self.config);

        let selection = select_candidates(self.catalog.stations(), &ctx);
        debug!(
            tier = ?selection.tier,
            candidates = selection.candidates.len(),
            safe_range_km = range.safe_range_km,
            "selected candidates"
        );

        Shortlist {
            range,
            tier: selection.tier,
            candidates: rank_candidates(selection.candidates, self.config.max_results),
        }
    }

    /// Plan a trip: the shortlist plus one route lookup for the winner.
    ///
    /// Never fails. An empty catalog yields a plan with no options and no
    /// route.
    pub async fn plan_trip(&self, request: &TripRequest) -> TripPlan {
        let shortlist = self.shortlist(request);

        let route = match shortlist.candidates.first() {
            Some(best) => {
                let fetcher = RouteFetcher::new(self.router, self.config);
                Some(
                    fetcher
                        .fetch(request.start, best.station.location, request.end)
                        .await,
                )
            }
            None => None,
        };

        let options = shortlist
            .candidates
            .into_iter()
            .enumerate()
            .map(|(rank, candidate)| match (&route, rank) {
                (Some(route), 0) => PlannedOption {
                    real_duration_min: route.duration_min,
                    polyline: Some(route.polyline.clone()),
                    candidate,
                },
                _ => PlannedOption {
                    real_duration_min: candidate.estimated_time_min,
                    polyline: None,
                    candidate,
                },
            })
            .collect();

        TripPlan {
            request: request.clone(),
            range: shortlist.range,
            tier: shortlist.tier,
            route,
            options,
        }
    }
}

#[cfg(test)]
#[path = "trip_tests.rs"]
mod tests;
