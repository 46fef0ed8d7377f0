//! Classic design patterns (command, template method, mediator, strategy,
//! observer, decorator, adapter) as small console demos.

pub mod application;
pub mod domain;
pub mod infrastructure;
