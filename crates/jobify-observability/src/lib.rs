//! Jobify Observability
//!
//! Structured logging and Prometheus metrics.
//!
//! Logging always goes to the console. When `OBSERVABILITY_ENABLED` is not
//! `false`/`0`, structured JSON logs are also written to a daily rolling file
//! under `LOG_DIR` and the Prometheus recorder is installed.
//!
//! ```no_run
//! use jobify_observability::{init_metrics, init_tracing};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let _guard = init_tracing()?;
//!     let _metrics = init_metrics()?;
//!     Ok(())
//! }
//! ```

pub mod logging;
pub mod metrics;

pub use logging::{LogGuard, init_tracing, logging_middleware};
pub use metrics::{
    init_metrics, is_observability_enabled, metrics_app, metrics_middleware,
    track_authorization_check, track_jwt_issued, track_jwt_validation, track_login_failure,
    track_login_success, track_principal_created,
};
pub use metrics_exporter_prometheus::PrometheusHandle;
