pub mod bootstrap;
pub mod connection;
pub mod repos;
pub mod schema;
