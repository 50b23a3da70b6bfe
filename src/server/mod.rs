pub mod args;
pub mod routes;
