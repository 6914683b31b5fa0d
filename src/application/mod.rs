pub mod simple_todo_service;
pub mod todo_service;

mod simple_todo_service_tests;
