//! Repository implementations for database access

pub mod expenses;

pub use expenses::ExpenseRepo;
