pub mod dashboard;
pub mod home;
pub mod login;
pub mod reset_password;
pub mod sign_up;
