use serde::Serialize;

/// Origin of a ledger transaction.
/// Every balance mutation carries exactly one of these tags.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum TxSource {
    MonthlyAccrual,
    LeaveUsed,
    AdminAdjust,
    DeleteRecord,
}

impl TxSource {
    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            TxSource::MonthlyAccrual => "MONTHLY_ACCRUAL",
            TxSource::LeaveUsed => "LEAVE_USED",
            TxSource::AdminAdjust => "ADMIN_ADJUST",
            TxSource::DeleteRecord => "DELETE_RECORD",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "MONTHLY_ACCRUAL" => Some(TxSource::MonthlyAccrual),
            "LEAVE_USED" => Some(TxSource::LeaveUsed),
            "ADMIN_ADJUST" => Some(TxSource::AdminAdjust),
            "DELETE_RECORD" => Some(TxSource::DeleteRecord),
            _ => None,
        }
    }
}
