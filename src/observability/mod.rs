//! 可观测性模块
//!
//! Prometheus-style counters, liveness/version endpoints and tracing setup.

use axum::{Json, Router, extract::State, response::IntoResponse, routing::get};
use chrono::{DateTime, Utc};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingConfig;

// ===== Simple Metrics =====

/// 简单应用指标
#[derive(Debug, Default)]
pub struct AppMetrics {
    pub http_requests_total: AtomicU64,
    pub recipe_searches_total: AtomicU64,
    pub recipe_search_errors_total: AtomicU64,
    pub recipe_search_latency_ms_sum: AtomicU64,
    pub translation_calls_total: AtomicU64,
}

impl AppMetrics {
    /// 记录 HTTP 请求
    pub fn record_http_request(&self) {
        self.http_requests_total.fetch_add(1, Ordering::Relaxed);
    }

    /// 记录搜索请求
    pub fn record_search(&self, duration_ms: u64, success: bool) {
        self.recipe_searches_total.fetch_add(1, Ordering::Relaxed);
        self.recipe_search_latency_ms_sum
            .fetch_add(duration_ms, Ordering::Relaxed);
        if !success {
            self.recipe_search_errors_total
                .fetch_add(1, Ordering::Relaxed);
        }
    }

    pub fn record_translation(&self) {
        self.translation_calls_total.fetch_add(1, Ordering::Relaxed);
    }

    /// 生成 Prometheus 格式指标
    pub fn gather(&self) -> String {
        format!(
            r#"# HELP http_requests_total Total HTTP requests
# TYPE http_requests_total counter
http_requests_total {}
# HELP recipe_searches_total Total recipe searches
# TYPE recipe_searches_total counter
recipe_searches_total {}
# HELP recipe_search_errors_total Recipe searches that ended in an error
# TYPE recipe_search_errors_total counter
recipe_search_errors_total {}
# HELP recipe_search_latency_seconds Recipe search latency in seconds
# TYPE recipe_search_latency_seconds summary
recipe_search_latency_seconds_sum {}
recipe_search_latency_seconds_count {}
# HELP translation_calls_total Calls made to the translation provider
# TYPE translation_calls_total counter
translation_calls_total {}
"#,
            self.http_requests_total.load(Ordering::Relaxed),
            self.recipe_searches_total.load(Ordering::Relaxed),
            self.recipe_search_errors_total.load(Ordering::Relaxed),
            self.recipe_search_latency_ms_sum.load(Ordering::Relaxed) as f64 / 1000.0,
            self.recipe_searches_total.load(Ordering::Relaxed),
            self.translation_calls_total.load(Ordering::Relaxed),
        )
    }
}

/// 应用状态（用于可观测性端点）
#[derive(Clone)]
pub struct ObservabilityState {
    pub metrics: Arc<AppMetrics>,
    pub start_time: DateTime<Utc>,
    pub version: String,
}

impl ObservabilityState {
    pub fn new(version: String, metrics: Arc<AppMetrics>) -> Self {
        Self {
            metrics,
            start_time: Utc::now(),
            version,
        }
    }

    /// 获取应用正常运行时间
    pub fn uptime_seconds(&self) -> f64 {
        (Utc::now() - self.start_time).num_seconds() as f64
    }
}

/// 简单存活检查
pub async fn liveness() -> impl IntoResponse {
    "OK"
}

/// Prometheus 指标端点
pub async fn metrics(State(state): State<Arc<ObservabilityState>>) -> impl IntoResponse {
    (axum::http::StatusCode::OK, state.metrics.gather())
}

/// 版本信息端点
pub async fn version(State(state): State<Arc<ObservabilityState>>) -> impl IntoResponse {
    Json(serde_json::json!({
        "version": state.version,
        "uptime_seconds": state.uptime_seconds(),
        "timestamp": Utc::now().to_rfc3339(),
    }))
}

/// 创建可观测性路由
pub fn create_observability_router(state: Arc<ObservabilityState>) -> Router {
    Router::new()
        .route("/health/live", get(liveness))
        .route("/metrics", get(metrics))
        .route("/version", get(version))
        .with_state(state)
}

/// 记录请求指标的中间件
pub async fn metrics_middleware(
    State(metrics): State<Arc<AppMetrics>>,
    req: axum::extract::Request,
    next: axum::middleware::Next,
) -> axum::response::Response {
    metrics.record_http_request();
    next.run(req).await
}

// ===== Structured Logging =====

/// 初始化结构化日志
///
/// `RUST_LOG` takes precedence over `logging.level`. When `logging.log_dir` is
/// set, output goes to a daily rolling file instead of stdout; keep the
/// returned guard alive so buffered lines are flushed on shutdown.
pub fn init_tracing(config: &LoggingConfig) -> WorkerGuard {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{},tower_http=info", config.level)));

    let (writer, guard) = match &config.log_dir {
        Some(dir) => {
            tracing_appender::non_blocking(tracing_appender::rolling::daily(dir, "recetas.log"))
        }
        None => tracing_appender::non_blocking(std::io::stdout()),
    };

    let registry = tracing_subscriber::registry().with(env_filter);
    if config.structured {
        registry
            .with(fmt::layer().json().with_writer(writer))
            .init();
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_line_number(true)
                    .with_writer(writer),
            )
            .init();
    }

    guard
}
