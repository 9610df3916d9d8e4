use serde::Serialize;

/// Kind of absence carried by a leave record.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum RecordType {
    FullDay,
    HalfAm,
    HalfPm,
    Range,
    Late,
    Early,
}

impl RecordType {
    /// Convert CLI/user input → enum (case-insensitive).
    pub fn from_input(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "FULL_DAY" | "FULL" => Some(Self::FullDay),
            "HALF_AM" => Some(Self::HalfAm),
            "HALF_PM" => Some(Self::HalfPm),
            "RANGE" => Some(Self::Range),
            "LATE" => Some(Self::Late),
            "EARLY" => Some(Self::Early),
            _ => None,
        }
    }

    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            RecordType::FullDay => "FULL_DAY",
            RecordType::HalfAm => "HALF_AM",
            RecordType::HalfPm => "HALF_PM",
            RecordType::Range => "RANGE",
            RecordType::Late => "LATE",
            RecordType::Early => "EARLY",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "FULL_DAY" => Some(RecordType::FullDay),
            "HALF_AM" => Some(RecordType::HalfAm),
            "HALF_PM" => Some(RecordType::HalfPm),
            "RANGE" => Some(RecordType::Range),
            "LATE" => Some(RecordType::Late),
            "EARLY" => Some(RecordType::Early),
            _ => None,
        }
    }
}
