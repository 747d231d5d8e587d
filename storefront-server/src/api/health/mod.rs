//! 健康检查路由
//!
//! # 路由列表
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /api/health | GET | 简单健康检查 |
//! | /api/health/detailed | GET | 详细健康检查 |
//!
//! # 响应示例
//!
//! ```json
//! {
//!   "status": "healthy",
//!   "service": "storefront-server",
//!   "version": "0.1.0"
//! }
//! ```

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;
use std::time::Instant;

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/health", get(health))
        .route("/api/health/detailed", get(detailed_health))
}

/// 简单健康检查响应
#[derive(Serialize)]
pub struct HealthResponse {
    /// 状态 (healthy | degraded)
    status: &'static str,
    service: &'static str,
    /// 版本号
    version: &'static str,
}

/// 详细健康检查响应
#[derive(Serialize)]
pub struct DetailedHealthResponse {
    status: &'static str,
    service: &'static str,
    version: &'static str,
    /// 运行时间 (秒)
    uptime_seconds: u64,
    /// 各组件检查结果
    checks: HealthChecks,
}

/// 健康检查详情
#[derive(Serialize)]
pub struct HealthChecks {
    /// 商品目录检查
    catalog: CheckResult,
    /// 图片服务检查
    image_service: CheckResult,
}

/// 单项检查结果
#[derive(Serialize)]
pub struct CheckResult {
    /// 状态 (ok | error)
    status: &'static str,
    /// 延迟 (毫秒)
    latency_ms: Option<u64>,
    /// 附加信息
    message: Option<String>,
}

impl CheckResult {
    fn ok_with_latency(latency_ms: u64, message: impl Into<String>) -> Self {
        Self {
            status: "ok",
            latency_ms: Some(latency_ms),
            message: Some(message.into()),
        }
    }

    fn ok(message: impl Into<String>) -> Self {
        Self {
            status: "ok",
            latency_ms: None,
            message: Some(message.into()),
        }
    }

    fn error(message: impl Into<String>) -> Self {
        Self {
            status: "error",
            latency_ms: None,
            message: Some(message.into()),
        }
    }
}

const SERVICE: &str = "storefront-server";

/// 基础健康检查
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: SERVICE,
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// 包含组件状态的详细健康检查
///
/// 目录为空视为降级：读取失败时目录层会回退为空列表。
/// 图片服务未配置不算降级，页面照常渲染，只是没有图片。
pub async fn detailed_health(State(state): State<ServerState>) -> Json<DetailedHealthResponse> {
    let start = Instant::now();
    let catalog = state.catalog.load().await;
    let catalog_check = if catalog.is_empty() {
        CheckResult::error("Catalog is empty or unreadable")
    } else {
        CheckResult::ok_with_latency(
            start.elapsed().as_millis() as u64,
            format!("{} products", catalog.len()),
        )
    };

    let image_check = if state.images.is_configured() {
        CheckResult::ok("configured")
    } else {
        CheckResult::ok("not configured")
    };

    let all_ok = catalog_check.status == "ok";

    Json(DetailedHealthResponse {
        status: if all_ok { "healthy" } else { "degraded" },
        service: SERVICE,
        version: env!("CARGO_PKG_VERSION"),
        uptime_seconds: state.uptime_seconds(),
        checks: HealthChecks {
            catalog: catalog_check,
            image_service: image_check,
        },
    })
}
