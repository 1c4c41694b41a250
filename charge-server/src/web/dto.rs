//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::catalog::StationCatalog;
use crate::domain::{
    ChargerType, Coordinate, DomainError, RouteInfo, SpeedPreference, Station, StationStatus,
    TripRequest, round_to,
};
use crate::planner::{PlannedOption, TripPlan};

fn default_target_soc() -> u8 {
    80
}

fn default_capacity() -> f64 {
    60.0
}

fn default_preference() -> String {
    "any".to_string()
}

/// A point as sent by clients.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PointDto {
    pub lat: f64,
    pub lon: f64,
}

/// Request to plan a charging stop.
#[derive(Debug, Deserialize)]
pub struct PlanTripRequest {
    pub start: PointDto,
    pub end: PointDto,

    /// Current state of charge (percent)
    pub current_soc: u8,

    /// Desired state of charge after the stop (percent)
    #[serde(default = "default_target_soc")]
    pub target_soc: u8,

    #[serde(default = "default_capacity")]
    pub battery_capacity_kwh: f64,

    /// `any`, `fast` or `ultrafast`
    #[serde(default = "default_preference")]
    pub charging_speed_preference: String,
}

impl PlanTripRequest {
    /// Validate into a domain request.
    pub fn into_trip_request(self) -> Result<TripRequest, DomainError> {
        let start = Coordinate::new(self.start.lat, self.start.lon)?;
        let end = Coordinate::new(self.end.lat, self.end.lon)?;
        let preference = self
            .charging_speed_preference
            .parse::<SpeedPreference>()
            .unwrap_or_default();

        TripRequest::new(
            start,
            end,
            self.current_soc,
            self.target_soc,
            self.battery_capacity_kwh,
            preference,
        )
    }
}

/// The recommended stop.
#[derive(Debug, Serialize)]
pub struct ChargerStop {
    pub id: String,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// Trip summary.
#[derive(Debug, Serialize)]
pub struct TripSummary {
    pub start: Coordinate,
    pub end: Coordinate,
    pub current_soc: u8,
    pub target_soc: u8,
    pub battery_capacity_kwh: f64,
    pub max_range_km: f64,
    pub safe_range_km: f64,
    pub energy_needed_kwh: f64,

    /// The best option, or null when the catalog is empty
    pub charger_stop: Option<ChargerStop>,

    /// Route via the best option
    pub route: Option<RouteInfo>,
}

/// A ranked charging option.
#[derive(Debug, Serialize)]
pub struct ChargingOption {
    pub id: String,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub charger_type: ChargerType,
    pub max_power_kw: f64,
    pub status: StationStatus,

    /// Distance used for ranking (km)
    pub distance_km: f64,
    pub estimated_time_min: f64,
    pub energy_added_kwh: f64,
    pub estimated_cost: f64,

    /// Lower is better
    pub score: f64,

    /// Which selection tier produced this option
    pub note: String,

    pub real_duration_min: f64,

    /// Route geometry, only for the first option
    pub polyline: Option<String>,

    /// Google Maps directions link via this station
    pub navigation_url: String,
}

/// Response for trip planning.
#[derive(Debug, Serialize)]
pub struct PlanTripResponse {
    pub trip: TripSummary,
    pub options: Vec<ChargingOption>,
}

/// A station in the catalog listing.
#[derive(Debug, Serialize)]
pub struct StationResult {
    pub id: String,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub charger_type: ChargerType,
    pub max_power_kw: f64,
    pub status: StationStatus,
}

/// Response for the catalog listing.
#[derive(Debug, Serialize)]
pub struct StationsResponse {
    pub count: usize,

    /// RFC 3339 load time of the snapshot
    pub loaded_at: String,

    pub stations: Vec<StationResult>,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

// Conversion implementations

/// Google Maps directions link from `start` to `end` via `station`.
pub fn navigation_url(start: &Coordinate, end: &Coordinate, station: &Coordinate) -> String {
    format!(
        "https://www.google.com/maps/dir/?api=1&origin={start}&destination={end}&waypoints={station}&travelmode=driving"
    )
}

impl ChargerStop {
    fn from_station(station: &Station) -> Self {
        Self {
            id: station.id.as_str().to_string(),
            name: station.name.clone(),
            latitude: station.location.lat,
            longitude: station.location.lon,
        }
    }
}

impl ChargingOption {
    /// Create from a planned option.
    pub fn from_option(option: &PlannedOption, request: &TripRequest) -> Self {
        let candidate = &option.candidate;
        let station = &candidate.station;

        Self {
            id: station.id.as_str().to_string(),
            name: station.name.clone(),
            latitude: station.location.lat,
            longitude: station.location.lon,
            charger_type: station.charger_type,
            max_power_kw: station.max_power_kw,
            status: station.status,
            distance_km: round_to(candidate.distance_km, 2),
            estimated_time_min: candidate.estimated_time_min,
            energy_added_kwh: round_to(candidate.energy_added_kwh, 2),
            estimated_cost: candidate.estimated_cost,
            score: round_to(candidate.score, 2),
            note: candidate.note().to_string(),
            real_duration_min: option.real_duration_min,
            polyline: option.polyline.clone(),
            navigation_url: navigation_url(&request.start, &request.end, &station.location),
        }
    }
}

impl PlanTripResponse {
    /// Create from a trip plan.
    pub fn from_plan(plan: &TripPlan) -> Self {
        let request = &plan.request;

        let trip = TripSummary {
            start: request.start,
            end: request.end,
            current_soc: request.current_soc,
            target_soc: request.target_soc,
            battery_capacity_kwh: request.battery_capacity_kwh,
            max_range_km: round_to(plan.range.max_range_km, 1),
            safe_range_km: round_to(plan.range.safe_range_km, 1),
            energy_needed_kwh: round_to(plan.range.energy_needed_kwh, 2),
            charger_stop: plan
                .charger_stop()
                .map(|c| ChargerStop::from_station(&c.station)),
            route: plan.route.clone(),
        };

        let options = plan
            .options
            .iter()
            .map(|o| ChargingOption::from_option(o, request))
            .collect();

        Self { trip, options }
    }
}

impl StationResult {
    /// Create from a domain Station.
    pub fn from_station(station: &Station) -> Self {
        Self {
            id: station.id.as_str().to_string(),
            name: station.name.clone(),
            latitude: station.location.lat,
            longitude: station.location.lon,
            charger_type: station.charger_type,
            max_power_kw: station.max_power_kw,
            status: station.status,
        }
    }
}

impl StationsResponse {
    /// Create from a catalog snapshot.
    pub fn from_catalog(catalog: &StationCatalog) -> Self {
        Self {
            count: catalog.len(),
            loaded_at: catalog.loaded_at().to_rfc3339(),
            stations: catalog
                .stations()
                .iter()
                .map(StationResult::from_station)
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::StationId;

    fn coord(lat: f64, lon: f64) -> Coordinate {
        Coordinate::new(lat, lon).unwrap()
    }

    #[test]
    fn request_defaults() {
        let req: PlanTripRequest = serde_json::from_str(
            r#"{"start": {"lat": 3.1485, "lon": 101.7131},
                "end": {"lat": 5.4375, "lon": 100.3099},
                "current_soc": 20}"#,
        )
        .unwrap();

        assert_eq!(req.target_soc, 80);
        assert_eq!(req.battery_capacity_kwh, 60.0);
        assert_eq!(req.charging_speed_preference, "any");

        let trip = req.into_trip_request().unwrap();
        assert_eq!(trip.preference, SpeedPreference::Any);
    }

    #[test]
    fn preference_is_case_insensitive() {
        let req: PlanTripRequest = serde_json::from_str(
            r#"{"start": {"lat": 3.0, "lon": 101.0},
                "end": {"lat": 5.0, "lon": 100.0},
                "current_soc": 20,
                "charging_speed_preference": "UltraFast"}"#,
        )
        .unwrap();

        let trip = req.into_trip_request().unwrap();
        assert_eq!(trip.preference, SpeedPreference::Ultrafast);
    }

    #[test]
    fn invalid_coordinates_are_rejected() {
        let req: PlanTripRequest = serde_json::from_str(
            r#"{"start": {"lat": 95.0, "lon": 101.0},
                "end": {"lat": 5.0, "lon": 100.0},
                "current_soc": 20}"#,
        )
        .unwrap();

        assert!(matches!(
            req.into_trip_request(),
            Err(DomainError::InvalidCoordinate { .. })
        ));
    }

    #[test]
    fn navigation_url_routes_via_the_station() {
        let url = navigation_url(
            &coord(3.1485, 101.7131),
            &coord(5.4375, 100.3099),
            &coord(4.5958, 101.0901),
        );

        assert_eq!(
            url,
            "https://www.google.com/maps/dir/?api=1&origin=3.1485,101.7131\
             &destination=5.4375,100.3099&waypoints=4.5958,101.0901&travelmode=driving"
        );
    }

    #[test]
    fn station_result_is_flat() {
        let station = Station::new(
            StationId::parse("st_001").unwrap(),
            "Pavilion KL",
            coord(3.1485, 101.7131),
            ChargerType::DcFast,
            150.0,
            StationStatus::Available,
        );

        let json = serde_json::to_value(StationResult::from_station(&station)).unwrap();
        assert_eq!(json["id"], "st_001");
        assert_eq!(json["latitude"], 3.1485);
        assert_eq!(json["charger_type"], "DC Fast");
        assert_eq!(json["status"], "Available");
    }
}
