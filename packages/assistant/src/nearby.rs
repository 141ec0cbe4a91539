//! Deterministic stand-in for geocoding and place search.
//!
//! No external service is contacted. Results are fixed so the UI has
//! something realistic to render.

use serde::{Deserialize, Serialize};

/// Coordinates returned for every geocoding query (New Delhi).
pub const DEFAULT_LAT: f64 = 28.6139;
pub const DEFAULT_LON: f64 = 77.2090;

pub const DEFAULT_SEARCH_LIMIT: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    pub lat: f64,
    pub lon: f64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaceKind {
    Court,
    LegalAid,
    Police,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub name: String,
    pub rating: f64,
    pub address: String,
    #[serde(rename = "type")]
    pub kind: PlaceKind,
}

impl Place {
    fn new(name: String, rating: f64, address: &str, kind: PlaceKind) -> Self {
        Self {
            name,
            rating,
            address: address.to_string(),
            kind,
        }
    }
}

pub fn geocode(query: &str) -> GeoLocation {
    GeoLocation {
        lat: DEFAULT_LAT,
        lon: DEFAULT_LON,
        name: query.to_string(),
    }
}

/// Legal services "near" a point. The coordinates are accepted but unused;
/// at most `limit` records are returned.
pub fn search(query: &str, _lat: f64, _lon: f64, limit: usize) -> Vec<Place> {
    let places = [
        Place::new(
            format!("City Civil Court, {query}"),
            4.5,
            "Court Road, Civil Lines",
            PlaceKind::Court,
        ),
        Place::new(
            format!("{query} District Court"),
            4.2,
            "District Complex",
            PlaceKind::Court,
        ),
        Place::new(
            "Legal Aid Clinic".into(),
            4.0,
            "Community Center",
            PlaceKind::LegalAid,
        ),
        Place::new("Family Court".into(), 3.8, "Judicial Block", PlaceKind::Court),
        Place::new(
            "Police Station Main".into(),
            3.5,
            "Main Market",
            PlaceKind::Police,
        ),
    ];

    places.into_iter().take(limit).collect()
}
