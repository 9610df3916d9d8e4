use serde::Serialize;

/// Half-day marker used by RANGE requests to trim the first/last day.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum HalfDay {
    Am,
    Pm,
}

impl HalfDay {
    pub fn from_input(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "AM" => Some(Self::Am),
            "PM" => Some(Self::Pm),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HalfDay::Am => "AM",
            HalfDay::Pm => "PM",
        }
    }
}
