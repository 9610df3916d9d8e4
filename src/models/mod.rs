pub mod half_day;
pub mod leave_record;
pub mod record_type;
pub mod transaction;
pub mod tx_source;
pub mod user;
