pub mod attendance;
pub mod bank_details;
pub mod lot;
pub mod registration;
