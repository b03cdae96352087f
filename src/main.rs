use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use store_automation_roi::app::{self, Command};
use store_automation_roi::config::{self, DEFAULT_CONFIG_PATH};
use store_automation_roi::i18n::{self, keys, Translator};

#[derive(Parser)]
#[command(
    name = "store_automation_roi",
    about = "매장 자동화 장비 도입 비용/ROI 재계산기"
)]
struct Cli {
    /// 설정 파일 경로
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,
    /// 표시 언어 (ko, en, auto)
    #[arg(long, global = true)]
    lang: Option<String>,
    #[command(subcommand)]
    command: Command,
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 하위 명령을 실행한다.
fn main() -> ExitCode {
    let cli = Cli::parse();
    let cfg = match config::load_or_default(&cli.config) {
        Ok(cfg) => cfg,
        Err(err) => {
            eprintln!("오류: {err}");
            return ExitCode::FAILURE;
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cfg.log_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    let lang = i18n::resolve_language(cli.lang.as_deref(), Some(cfg.language.as_str()));
    let tr = Translator::new_with_pack(&lang, cfg.locale_dir.as_deref());

    match app::run(cli.command, &cfg, &tr) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}: {err}", tr.t(keys::ERROR_PREFIX));
            ExitCode::FAILURE
        }
    }
}
