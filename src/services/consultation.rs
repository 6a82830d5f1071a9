//! Teleconsultation booking (simulated)

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use std::time::Duration;
use uuid::Uuid;

use crate::errors::{BridgeError, Result};

/// Shown once a booking goes through
pub const CONFIRMATION_MESSAGE: &str =
    "Consultation Scheduled! We'll send you a confirmation SMS with the meeting link.";

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M";

/// Fields of the booking form, in entry order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Phone,
    Date,
    Time,
    Symptoms,
}

impl FormField {
    pub const ALL: [FormField; 5] = [
        FormField::Name,
        FormField::Phone,
        FormField::Date,
        FormField::Time,
        FormField::Symptoms,
    ];

    /// Prompt shown when asking for this field
    pub fn label(&self) -> &'static str {
        match self {
            FormField::Name => "Full Name",
            FormField::Phone => "Phone Number",
            FormField::Date => "Date (YYYY-MM-DD)",
            FormField::Time => "Time (HH:MM)",
            FormField::Symptoms => "Symptoms",
        }
    }

    fn key(&self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Phone => "phone",
            FormField::Date => "date",
            FormField::Time => "time",
            FormField::Symptoms => "symptoms",
        }
    }

    /// Field that follows this one, if any
    pub fn next(&self) -> Option<FormField> {
        let idx = FormField::ALL.iter().position(|f| f == self)?;
        FormField::ALL.get(idx + 1).copied()
    }

    /// Reject a value this field can't hold
    pub fn check(&self, value: &str) -> Result<()> {
        let value = value.trim();
        if value.is_empty() {
            return Err(BridgeError::invalid(self.key(), "is required"));
        }
        match self {
            FormField::Date => parse_date(value).map(|_| ()),
            FormField::Time => parse_time(value).map(|_| ()),
            _ => Ok(()),
        }
    }
}

fn parse_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT)
        .map_err(|_| BridgeError::invalid("date", "expected YYYY-MM-DD"))
}

fn parse_time(value: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(value.trim(), TIME_FORMAT)
        .map_err(|_| BridgeError::invalid("time", "expected HH:MM"))
}

/// Booking form contents; every field is required
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConsultationRequest {
    pub name: String,
    pub phone: String,
    /// `YYYY-MM-DD`
    pub date: String,
    /// `HH:MM`, 24-hour
    pub time: String,
    pub symptoms: String,
}

impl ConsultationRequest {
    pub fn set(&mut self, field: FormField, value: &str) {
        let slot = match field {
            FormField::Name => &mut self.name,
            FormField::Phone => &mut self.phone,
            FormField::Date => &mut self.date,
            FormField::Time => &mut self.time,
            FormField::Symptoms => &mut self.symptoms,
        };
        *slot = value.trim().to_string();
    }

    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Phone => &self.phone,
            FormField::Date => &self.date,
            FormField::Time => &self.time,
            FormField::Symptoms => &self.symptoms,
        }
    }

    /// Check every field and parse the requested slot
    pub fn validate(&self) -> Result<NaiveDateTime> {
        for field in FormField::ALL {
            field.check(self.get(field))?;
        }
        Ok(parse_date(&self.date)?.and_time(parse_time(&self.time)?))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsultationConfirmation {
    pub reference: Uuid,
    pub patient_name: String,
    pub scheduled_for: NaiveDateTime,
    pub message: &'static str,
}

/// Accepts bookings after a fixed delay; nothing is stored or scheduled
#[derive(Debug, Clone)]
pub struct ConsultationDesk {
    delay: Duration,
}

impl ConsultationDesk {
    pub fn new(delay: Duration) -> Self {
        ConsultationDesk { delay }
    }

    /// Submit a booking; the form is consumed
    ///
    /// Invalid forms are rejected immediately, without waiting.
    pub async fn submit(&self, request: ConsultationRequest) -> Result<ConsultationConfirmation> {
        let scheduled_for = request.validate()?;

        tracing::info!(slot = %scheduled_for, "submitting teleconsultation request");
        tokio::time::sleep(self.delay).await;

        Ok(ConsultationConfirmation {
            reference: Uuid::new_v4(),
            patient_name: request.name.trim().to_string(),
            scheduled_for,
            message: CONFIRMATION_MESSAGE,
        })
    }
}
