use chrono::Local;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct User {
    pub id: i64,
    pub username: String,   // ⇔ users.username (TEXT, UNIQUE)
    pub balance: f64,       // ⇔ users.balance (REAL, 2-decimal, Ledger-owned)
    pub is_active: bool,    // ⇔ users.is_active (INT 0/1)
    pub created_at: String, // ⇔ users.created_at (TEXT, ISO8601)
}

impl User {
    /// Constructor for users created from the CLI.
    /// Balance always starts at 0; opening credit goes through the Ledger.
    pub fn new(username: &str) -> Self {
        Self {
            id: 0,
            username: username.to_string(),
            balance: 0.0,
            is_active: true,
            created_at: Local::now().to_rfc3339(),
        }
    }
}
