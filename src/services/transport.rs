//! Emergency transport request (simulated)

use std::time::Duration;

use crate::errors::{BridgeError, Result};

/// Vehicle every simulated dispatch assigns
pub const ASSIGNED_VEHICLE: &str = "White Toyota Innova (KA-01-AB-1234)";

/// Minutes until the simulated driver arrives
pub const ETA_MINUTES: u32 = 10;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransportRequest {
    pub pickup_location: String,
}

impl TransportRequest {
    pub fn new(pickup_location: impl Into<String>) -> Self {
        TransportRequest {
            pickup_location: pickup_location.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportConfirmation {
    pub pickup_location: String,
    pub vehicle: &'static str,
    pub eta_minutes: u32,
}

impl TransportConfirmation {
    pub fn summary(&self) -> String {
        format!(
            "Driver Confirmed! Driver will arrive in approximately {} minutes. Vehicle: {}",
            self.eta_minutes, self.vehicle
        )
    }
}

/// "Finds" a driver after a fixed delay
#[derive(Debug, Clone)]
pub struct TransportDispatcher {
    delay: Duration,
}

impl TransportDispatcher {
    pub fn new(delay: Duration) -> Self {
        TransportDispatcher { delay }
    }

    pub async fn request(&self, request: TransportRequest) -> Result<TransportConfirmation> {
        let pickup = request.pickup_location.trim();
        if pickup.is_empty() {
            return Err(BridgeError::invalid("pickup location", "is required"));
        }

        tracing::info!(pickup, "requesting emergency transport");
        tokio::time::sleep(self.delay).await;

        Ok(TransportConfirmation {
            pickup_location: pickup.to_string(),
            vehicle: ASSIGNED_VEHICLE,
            eta_minutes: ETA_MINUTES,
        })
    }
}
