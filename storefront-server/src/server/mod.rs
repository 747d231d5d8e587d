//! HTTP 服务器层: 中间件

pub mod middleware;
