pub mod habit_ops;
pub mod streak;
pub mod transfer;
