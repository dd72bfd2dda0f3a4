pub mod blood_donation;
pub mod blood_request;
pub mod donor;
pub mod user;
