mod attendance;
mod bank_details;
mod lot;
mod registration;
mod signature;

pub use attendance::{AttendanceRecord, STATUS_PENDING, VALID_STATUSES};
pub use bank_details::BankDetails;
pub use lot::Lot;
pub use registration::{Contestant, Registration};
pub use signature::RegistrationSignature;
