use clap::Subcommand;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::catalog::{Catalog, CatalogError};
use crate::config::{Config, ConfigError};
use crate::editor::PlanEditor;
use crate::i18n::Translator;
use crate::labor::LaborBaseline;
use crate::plan::{AnalysisResult, SeedError};
use crate::report;
use crate::resolver;
use crate::ui_cli;

/// CLI 하위 명령.
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// 장비 단가표와 장비군별 인력 절감 기준을 출력한다
    Catalog,
    /// 분석 결과 JSON을 다시 계산해 대시보드 또는 JSON으로 출력한다
    Recalc {
        /// AI 어드바이저가 돌려준 분석 결과 JSON 파일
        #[arg(long)]
        seed: PathBuf,
        /// 텍스트 대신 재계산된 레코드를 JSON으로 출력
        #[arg(long)]
        json: bool,
    },
    /// 장비 추천을 대화형으로 편집한다
    Edit {
        /// AI 어드바이저가 돌려준 분석 결과 JSON 파일
        #[arg(long)]
        seed: PathBuf,
    },
}

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// 파일 입출력 오류
    #[error("입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// 설정 저장/로드 오류
    #[error("설정 오류: {0}")]
    Config(#[from] ConfigError),
    /// 카탈로그 로드 오류
    #[error("카탈로그 오류: {0}")]
    Catalog(#[from] CatalogError),
    /// 분석 결과 파일 오류
    #[error("{0}")]
    Seed(#[from] SeedError),
    /// 출력 직렬화 오류
    #[error("JSON 출력 오류: {0}")]
    Json(#[from] serde_json::Error),
}

/// 분석 결과로 편집기를 만든다. AI가 계산한 합계는 버리고 라인 아이템만 초기값으로 쓴다.
pub fn open_editor<'c>(catalog: &'c Catalog, seed: &AnalysisResult) -> PlanEditor<'c> {
    let items = seed.automation_plan.recommended_devices.clone();
    for item in &items {
        if resolver::resolve_category(catalog, &item.name).is_none() {
            warn!(name = %item.name, "equipment name not in catalog, no labor saving attributed");
        }
    }
    PlanEditor::new(
        catalog,
        LaborBaseline::from_current_cost(&seed.current_cost),
        items,
    )
}

/// 재계산된 레코드를 JSON 파일로 저장한다.
pub fn save_report(
    path: &Path,
    seed: &AnalysisResult,
    editor: &PlanEditor<'_>,
) -> Result<(), AppError> {
    let json = serde_json::to_string_pretty(&report::build_report(seed, editor))?;
    fs::write(path, json)?;
    info!(path = %path.display(), "report saved");
    Ok(())
}

/// 하위 명령을 실행한다.
pub fn run(command: Command, config: &Config, tr: &Translator) -> Result<(), AppError> {
    let catalog = config.catalog()?;
    info!(equipment = catalog.equipment().len(), "catalog loaded");
    match command {
        Command::Catalog => print!("{}", report::render_catalog(&catalog, tr)),
        Command::Recalc { seed, json } => {
            let seed = AnalysisResult::load(&seed)?;
            let editor = open_editor(&catalog, &seed);
            if json {
                let out = serde_json::to_string_pretty(&report::build_report(&seed, &editor))?;
                println!("{out}");
            } else {
                print!("{}", report::render_dashboard(&seed, &editor, tr));
            }
        }
        Command::Edit { seed } => {
            let seed = AnalysisResult::load(&seed)?;
            let mut editor = open_editor(&catalog, &seed);
            ui_cli::run_editor(&seed, &mut editor, tr)?;
        }
    }
    Ok(())
}
