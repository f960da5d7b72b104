pub mod attendance;
pub mod lots;
pub mod registrations;
pub mod teams;
