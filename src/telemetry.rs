//! tracing 구독자 초기화.

use tracing_subscriber::filter::ParseError;
use tracing_subscriber::EnvFilter;

/// 로그 초기화 오류.
#[derive(Debug)]
pub enum TelemetryError {
    /// 잘못된 로그 필터 문자열
    EnvFilter { value: String, source: ParseError },
    /// 전역 구독자 등록 실패
    Subscriber(Box<dyn std::error::Error + Send + Sync>),
}

impl std::fmt::Display for TelemetryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TelemetryError::EnvFilter { value, .. } => {
                write!(f, "잘못된 로그 필터 '{value}'")
            }
            TelemetryError::Subscriber(err) => write!(f, "로그 초기화 오류: {err}"),
        }
    }
}

impl std::error::Error for TelemetryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TelemetryError::EnvFilter { source, .. } => Some(source),
            TelemetryError::Subscriber(err) => Some(&**err),
        }
    }
}

/// `RUST_LOG`를 우선 적용하고, 없으면 `log_level`로 필터를 만든다. 로그는 stderr로 보낸다.
pub fn init(log_level: &str) -> Result<(), TelemetryError> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(log_level).map_err(|source| TelemetryError::EnvFilter {
            value: log_level.to_string(),
            source,
        })?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .with_ansi(false)
        .try_init()
        .map_err(TelemetryError::Subscriber)
}
