pub mod simple_todos;
pub mod todos;
