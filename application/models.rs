pub mod like;
pub mod preference;
pub mod shop;
pub mod user;
