// Library exports for testing and external use

pub mod app;
pub mod dto;
pub mod logging;
pub mod middleware;
pub mod routes;
