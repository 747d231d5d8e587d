//! 中间件模块

pub mod logging;

pub use logging::logging_middleware;
