pub mod memory_repository;
pub mod places;
pub mod setup;
