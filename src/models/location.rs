//! Per-location check-in/check-out records and the gates derived from them.
//!
//! The backend reports timestamps as strings and is not always consistent
//! about it. A missing, `null` or empty field reads as "not yet occurred".
//! Any other value means the check-in or check-out happened, even when its
//! format does not parse; the parsed time is only used for consistency
//! checks.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use super::stage::Stage;

/// Physical location a vendor checks in and out of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationRole {
    Warehouse,
    Truck,
    Event,
}

impl LocationRole {
    pub fn all() -> &'static [LocationRole] {
        &[
            LocationRole::Warehouse,
            LocationRole::Truck,
            LocationRole::Event,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LocationRole::Warehouse => "warehouse",
            LocationRole::Truck => "truck",
            LocationRole::Event => "event",
        }
    }
}

impl fmt::Display for LocationRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GateKind {
    Checkin,
    Checkout,
}

impl fmt::Display for GateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GateKind::Checkin => write!(f, "check-in"),
            GateKind::Checkout => write!(f, "check-out"),
        }
    }
}

/// A single condition in a progression: one location's check-in or check-out
/// timestamp being recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Gate {
    pub role: LocationRole,
    pub kind: GateKind,
}

impl Gate {
    pub const fn new(role: LocationRole, kind: GateKind) -> Self {
        Self { role, kind }
    }

    /// The stage a vendor is in while this gate is still unmet.
    pub fn pending_stage(&self) -> Stage {
        match (self.role, self.kind) {
            (LocationRole::Warehouse, GateKind::Checkin) => Stage::WarehouseCheckin,
            (LocationRole::Warehouse, GateKind::Checkout) => Stage::WarehouseCheckout,
            (LocationRole::Truck, GateKind::Checkin) => Stage::TruckCheckin,
            (LocationRole::Truck, GateKind::Checkout) => Stage::TruckCheckout,
            (LocationRole::Event, GateKind::Checkin) => Stage::EventCheckin,
            (LocationRole::Event, GateKind::Checkout) => Stage::EventCheckout,
        }
    }
}

impl fmt::Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.role, self.kind)
    }
}

/// One location's check-in/check-out record.
///
/// Only the timestamps decide whether a gate is met; the boolean flags are
/// carried for display and consistency checks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationCheckStatus {
    #[serde(default, deserialize_with = "lenient_flag")]
    pub checked_in: bool,
    #[serde(default, deserialize_with = "lenient_flag")]
    pub checked_out: bool,
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub checkin_time: Option<RecordedTime>,
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub checkout_time: Option<RecordedTime>,
}

impl LocationCheckStatus {
    pub fn not_started() -> Self {
        Self::default()
    }

    pub fn checked_in_at(at: DateTime<Utc>) -> Self {
        Self {
            checked_in: true,
            checked_out: false,
            checkin_time: Some(at.into()),
            checkout_time: None,
        }
    }

    pub fn completed(checkin: DateTime<Utc>, checkout: DateTime<Utc>) -> Self {
        Self {
            checked_in: true,
            checked_out: true,
            checkin_time: Some(checkin.into()),
            checkout_time: Some(checkout.into()),
        }
    }

    pub fn time(&self, kind: GateKind) -> Option<&RecordedTime> {
        match kind {
            GateKind::Checkin => self.checkin_time.as_ref(),
            GateKind::Checkout => self.checkout_time.as_ref(),
        }
    }

    pub fn is_met(&self, kind: GateKind) -> bool {
        self.time(kind).is_some()
    }

    /// Consistency problems in this record. `role` only labels the result.
    pub fn issues(&self, role: LocationRole) -> Vec<SnapshotIssue> {
        let mut issues = Vec::new();
        if self.checked_out && !self.checked_in {
            issues.push(SnapshotIssue::CheckedOutWithoutCheckin { role });
        }
        if self.checkin_time.is_none() && self.checkout_time.is_some() {
            issues.push(SnapshotIssue::CheckoutTimeWithoutCheckin { role });
        }
        let parsed = (
            self.checkin_time.as_ref().and_then(RecordedTime::at),
            self.checkout_time.as_ref().and_then(RecordedTime::at),
        );
        if let (Some(checkin), Some(checkout)) = parsed {
            if checkout < checkin {
                issues.push(SnapshotIssue::CheckoutBeforeCheckin {
                    role,
                    checkin,
                    checkout,
                });
            }
        }
        issues
    }
}

/// An inconsistency in recorded check-in data. Issues never change how a
/// stage resolves; they exist so hosts can log or display them.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SnapshotIssue {
    #[error("{role}: checked_out is set but checked_in is not")]
    CheckedOutWithoutCheckin { role: LocationRole },

    #[error("{role}: checkout_time is recorded without a checkin_time")]
    CheckoutTimeWithoutCheckin { role: LocationRole },

    #[error("{role}: checkout_time {checkout} is earlier than checkin_time {checkin}")]
    CheckoutBeforeCheckin {
        role: LocationRole,
        checkin: DateTime<Utc>,
        checkout: DateTime<Utc>,
    },

    #[error("{gate} is recorded while earlier gate {blocked_by} is still open")]
    GateOutOfOrder { gate: Gate, blocked_by: Gate },
}

/// A recorded check-in or check-out time.
///
/// Serializes back to a plain string, so a snapshot re-encoded for a route
/// parameter reads the same as the backend's.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum RecordedTime {
    At(DateTime<Utc>),
    /// Recorded in a form that does not parse. Still counts as recorded.
    Unparsed(String),
}

impl RecordedTime {
    /// `None` for empty or blank input.
    pub fn parse(raw: &str) -> Option<Self> {
        if raw.trim().is_empty() {
            return None;
        }
        Some(match parse_timestamp(raw) {
            Some(at) => RecordedTime::At(at),
            None => {
                tracing::debug!(value = %raw, "keeping unparseable timestamp as recorded");
                RecordedTime::Unparsed(raw.to_string())
            }
        })
    }

    pub fn at(&self) -> Option<DateTime<Utc>> {
        match self {
            RecordedTime::At(at) => Some(*at),
            RecordedTime::Unparsed(_) => None,
        }
    }
}

impl From<DateTime<Utc>> for RecordedTime {
    fn from(at: DateTime<Utc>) -> Self {
        RecordedTime::At(at)
    }
}

impl fmt::Display for RecordedTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordedTime::At(at) => write!(f, "{}", at.to_rfc3339()),
            RecordedTime::Unparsed(raw) => f.write_str(raw),
        }
    }
}

/// Offset forms PostgreSQL and friends emit besides RFC 3339, e.g.
/// `2025-03-14 10:30:00.123+00`.
const OFFSET_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S%.f%#z", "%Y-%m-%dT%H:%M:%S%.f%#z"];

/// Naive forms, taken as UTC.
const NAIVE_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Parse a backend timestamp. Accepts RFC 3339, space-separated forms with
/// `±HH`/`±HHMM`/`±HH:MM` offsets, and naive ISO-like forms taken as UTC.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }
    if let Some(parsed) = OFFSET_FORMATS
        .iter()
        .find_map(|format| DateTime::parse_from_str(raw, format).ok())
    {
        return Some(parsed.with_timezone(&Utc));
    }
    NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .map(|naive| naive.and_utc())
}

fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<RecordedTime>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(raw)) => RecordedTime::parse(&raw),
        Some(serde_json::Value::Number(n)) => RecordedTime::parse(&n.to_string()),
        _ => None,
    })
}

fn lenient_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(matches!(value, Some(serde_json::Value::Bool(true))))
}
