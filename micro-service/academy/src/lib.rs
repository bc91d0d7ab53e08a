pub mod handlers;
pub mod routes;
pub mod schema;
pub mod service;
