pub mod complaint;
pub mod request;
pub mod user;
