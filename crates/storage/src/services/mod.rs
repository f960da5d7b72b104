pub mod reconciliation;
pub mod registration_dedup;
