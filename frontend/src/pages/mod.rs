pub mod bots;
pub mod dashboard;
pub mod home;
pub mod legal;
pub mod login;
