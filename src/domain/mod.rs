pub mod clock;
pub mod error;
pub mod repository;
pub mod simple_todo;
pub mod todo;
