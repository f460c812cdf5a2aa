use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use vehicle_cost_projection::app::{self, AppError, Cli, Context};
use vehicle_cost_projection::i18n::{keys, Translator};
use vehicle_cost_projection::telemetry;

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 명령을 실행한다.
fn main() -> ExitCode {
    let cli = Cli::parse();
    // 설정을 읽기 전에 실패하면 CLI 플래그와 시스템 로케일만으로 언어를 정한다.
    let mut lang = app::error_language(cli.lang.as_deref(), None);
    match try_run(cli, &mut lang) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let tr = Translator::new(&lang);
            eprintln!("{}: {err}", tr.t(keys::ERROR_PREFIX));
            ExitCode::FAILURE
        }
    }
}

fn try_run(cli: Cli, lang: &mut String) -> Result<(), AppError> {
    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| Path::new("config.toml").to_path_buf());
    let mut cfg = app::load_config(cli.config.as_deref())?;
    if let Err(e) = telemetry::init(&cfg.log_level) {
        eprintln!("{e}");
    }

    *lang = app::error_language(cli.lang.as_deref(), Some(&cfg));
    let tr = Translator::new_with_pack(lang, Some("locales"));

    let mut ctx = Context {
        config: &mut cfg,
        config_path: &config_path,
        translator: &tr,
    };
    app::run(cli.command, &mut ctx)
}
