use serde::{Deserialize, Serialize};

use crate::error::{Result, VoyageError};

/// The three transport booking surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportMode {
    Taxi,
    Flight,
    Train,
}

impl TransportMode {
    pub fn parse(value: &str) -> Result<Self> {
        match value.trim().to_lowercase().as_str() {
            "taxi" | "rides" | "ride" => Ok(TransportMode::Taxi),
            "flight" | "flights" => Ok(TransportMode::Flight),
            "train" | "trains" => Ok(TransportMode::Train),
            other => Err(VoyageError::InvalidParams {
                reason: format!("unknown transport mode '{other}' (expected taxi, flight or train)"),
            }),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TransportMode::Taxi => "Taxi Rides",
            TransportMode::Flight => "Flights",
            TransportMode::Train => "Trains",
        }
    }
}

/// Ride-hailing tier. Fares are quoted as printed kwacha strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RideOption {
    pub name: String,
    pub ride_type: String,
    pub rating: f64,
    pub fare: String,
    pub eta: String,
    pub capacity: String,
    pub features: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlightOption {
    pub airline: String,
    pub flight_number: String,
    pub departure_time: String,
    pub departure_airport: String,
    pub departure_city: String,
    pub arrival_time: String,
    pub arrival_airport: String,
    pub arrival_city: String,
    pub duration: String,
    pub aircraft: String,
    pub price: String,
    pub class: String,
    pub amenities: Vec<String>,
    pub stops: String,
    pub rating: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainOption {
    pub operator: String,
    pub train_number: String,
    pub departure_time: String,
    pub departure_station: String,
    pub departure_city: String,
    pub arrival_time: String,
    pub arrival_station: String,
    pub arrival_city: String,
    pub duration: String,
    pub service: String,
    pub price: String,
    pub class: String,
    pub amenities: Vec<String>,
    pub stops: String,
    pub rating: f64,
    pub route: String,
}

impl std::fmt::Display for RideOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({}) — {} | ETA {} | {} | {:.1}*\nFeatures: {}",
            self.name,
            self.ride_type,
            self.fare,
            self.eta,
            self.capacity,
            self.rating,
            self.features.join(", "),
        )
    }
}

impl std::fmt::Display for FlightOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "{} {} — {} ({}, {})",
            self.airline, self.flight_number, self.price, self.class, self.stops
        )?;
        writeln!(
            f,
            "{} {} ({}) -> {} {} ({})",
            self.departure_time,
            self.departure_city,
            self.departure_airport,
            self.arrival_time,
            self.arrival_city,
            self.arrival_airport,
        )?;
        write!(
            f,
            "{} | {} | {:.1}* | Amenities: {}",
            self.duration,
            self.aircraft,
            self.rating,
            self.amenities.join(", "),
        )
    }
}

impl std::fmt::Display for TrainOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "{} {} ({}) — {} ({}, {})",
            self.operator, self.train_number, self.service, self.price, self.class, self.stops
        )?;
        writeln!(
            f,
            "{} {} ({}) -> {} {} ({})",
            self.departure_time,
            self.departure_city,
            self.departure_station,
            self.arrival_time,
            self.arrival_city,
            self.arrival_station,
        )?;
        writeln!(
            f,
            "{} | {:.1}* | Amenities: {}",
            self.duration,
            self.rating,
            self.amenities.join(", "),
        )?;
        write!(f, "Route: {}", self.route)
    }
}
