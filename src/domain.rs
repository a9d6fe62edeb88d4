pub mod balance;
pub mod balance_repository;
pub mod routine;
