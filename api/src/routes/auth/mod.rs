//! Registration, login and password handlers

pub mod login;
pub mod password;
pub mod register;

pub use login::login;
pub use password::{change_password, forgot_password, reset_password_internal};
pub use register::register;
