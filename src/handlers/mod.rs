pub mod admin;
pub mod complaints;
pub mod fallback;
pub mod health;
pub mod users;
