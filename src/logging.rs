//! ログ初期化（`tracing` + `tracing-subscriber`）
//!
//! - 0 (`-v`なし): warn
//! - 1 (`-v`): info
//! - 2 (`-vv`): debug
//! - 3以上: trace
//!
//! `RUST_LOG` が設定されていればそちらを優先する。

use tracing::Level;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// 詳細度からログレベルを決める
pub fn level_from_verbosity(verbosity: u8) -> Level {
    match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// グローバルなsubscriberを登録（2回目以降は何もしない）
pub fn init_logging(verbosity: u8) {
    let level = level_from_verbosity(verbosity);
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.as_str().to_lowercase()));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_from_verbosity() {
        assert_eq!(level_from_verbosity(0), Level::WARN);
        assert_eq!(level_from_verbosity(1), Level::INFO);
        assert_eq!(level_from_verbosity(2), Level::DEBUG);
        assert_eq!(level_from_verbosity(9), Level::TRACE);
    }

    #[test]
    fn test_init_twice_is_harmless() {
        init_logging(0);
        init_logging(2);
    }
}
