//! LAMP stack diagnostic server library.

pub mod collectors;
pub mod config;
pub mod endpoints;
pub mod http;
pub mod lifecycle;
pub mod net;
pub mod observability;
pub mod routing;

pub use config::DiagConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
