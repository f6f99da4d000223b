pub mod joke;
pub mod user;
pub mod validation;
