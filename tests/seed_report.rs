//! 분석 결과 JSON 입력과 출력 레코드/대시보드 테스트.
use std::fs;

use store_automation_roi::{
    app,
    catalog::Catalog,
    comparison,
    i18n::Translator,
    plan::{AnalysisResult, CostType, Payback, UNRECOVERABLE_PAYBACK_MONTHS},
    report,
};

const SEED: &str = r#"{
  "store_analysis": {
    "store_category": "치킨",
    "estimated_tables": 14,
    "estimated_hall_size": 25,
    "estimated_kitchen_size": 8,
    "workflow_issue": "주방-홀 동선이 길다"
  },
  "current_cost": {
    "monthly_sales": 5000,
    "monthly_fixed_cost": 800,
    "employee_count_ft": 1,
    "employee_cost_ft": 300,
    "employee_count_pt": 2,
    "employee_cost_pt": 300,
    "monthly_labor_cost": 600
  },
  "automation_plan": {
    "recommended_devices": [
      { "name": "푸두봇", "cost_type": "monthly", "cost": 30, "count": "2",
        "monthly_saving": 9999, "roi_months": 3, "reason": "홀이 넓음" },
      { "name": "경일 후라이어 - 소형", "cost_type": "one_time", "cost": 3600, "count": 1,
        "monthly_saving": 0, "roi_months": 0 },
      { "name": "식기 건조대", "cost_type": "monthly", "cost": 5, "count": 0 }
    ],
    "total_monthly_saving": 12345,
    "total_roi_months": 1,
    "total_investment_cost": 1,
    "net_profit_increase": 99999
  },
  "report_text": "1. 매장 환경 분석"
}"#;

#[test]
fn seed_quantities_are_coerced() {
    let seed = AnalysisResult::from_json_str(SEED).expect("seed");
    let devices = &seed.automation_plan.recommended_devices;
    assert_eq!(devices[0].quantity, 2);
    assert_eq!(devices[1].cost_type, CostType::OneTime);
    assert_eq!(devices[2].quantity, 1);
    assert!(devices[2].reason.is_none());
}

#[test]
fn report_uses_recomputed_figures_not_advisor_totals() {
    let catalog = Catalog::built_in();
    let seed = AnalysisResult::from_json_str(SEED).expect("seed");
    let editor = app::open_editor(&catalog, &seed);
    let out = report::build_report(&seed, &editor);
    let plan = &out.analysis.automation_plan;

    // 120(서빙) + 150(후라이어) + 0(기타)
    assert_eq!(plan.total_monthly_saving, 270.0);
    assert_eq!(plan.total_investment_cost, 3600.0);
    // 60 + 100 + 5
    assert_eq!(out.total_monthly_equipment_cost, 165.0);
    assert_eq!(plan.net_profit_increase, 105.0);
    // 3600 / 105 = 34.28...
    assert_eq!(plan.total_roi_months, 34.3);
    assert_eq!(plan.recommended_devices[0].monthly_saving, 120.0);
    assert!((out.total_reduced_pt - 0.8).abs() < 1e-9);
    assert!((out.total_reduced_ft - 0.5).abs() < 1e-9);
    assert_eq!(out.analysis.store_analysis.store_category, "치킨");

    let json = serde_json::to_value(&out).expect("json");
    let ft = json["totalReducedFT"].as_f64().expect("totalReducedFT");
    let pt = json["totalReducedPT"].as_f64().expect("totalReducedPT");
    assert!((ft - 0.5).abs() < 1e-9);
    assert!((pt - 0.8).abs() < 1e-9);
    assert_eq!(json["automation_plan"]["recommended_devices"][0]["count"], 2);
    assert_eq!(json["automation_plan"]["recommended_devices"][1]["cost_type"], "one_time");
    assert_eq!(json["report_text"], "1. 매장 환경 분석");
}

#[test]
fn unrecoverable_payback_is_written_as_sentinel_and_rendered_as_text() {
    let catalog = Catalog::built_in();
    let mut seed = AnalysisResult::from_json_str(SEED).expect("seed");
    seed.current_cost.employee_count_ft = 0.0;
    seed.current_cost.employee_count_pt = 0.0;
    let editor = app::open_editor(&catalog, &seed);
    let out = report::build_report(&seed, &editor);
    assert_eq!(
        out.analysis.automation_plan.total_roi_months,
        UNRECOVERABLE_PAYBACK_MONTHS
    );

    let ko = report::render_dashboard(&seed, &editor, &Translator::new("ko"));
    assert!(ko.contains("불가"));
    assert!(!ko.contains("999"));
    assert!(ko.contains("[기타] 식기 건조대"));

    let en = report::render_dashboard(&seed, &editor, &Translator::new("en"));
    assert!(en.contains("not recoverable"));
    assert!(en.contains("[other]"));
}

const LARGE_FRYER_SEED: &str = r#"{
  "current_cost": {
    "monthly_sales": 9000,
    "monthly_fixed_cost": 1000,
    "employee_count_ft": 1,
    "employee_cost_ft": 900,
    "employee_count_pt": 0,
    "employee_cost_pt": 0,
    "monthly_labor_cost": 900
  },
  "automation_plan": {
    "recommended_devices": [
      { "name": "경일 후라이어 - 대형", "cost_type": "one_time", "cost": 16000, "count": 1 }
    ]
  }
}"#;

#[test]
fn long_but_finite_item_payback_is_shown_in_months() {
    // 절감 450 - 상각 444.4 = 순이익 +5.6, 16000 / 5.56 = 2880개월
    let catalog = Catalog::built_in();
    let seed = AnalysisResult::from_json_str(LARGE_FRYER_SEED).expect("seed");
    let editor = app::open_editor(&catalog, &seed);
    assert_eq!(editor.plan().payback, Payback::Months(2880.0));
    assert_eq!(editor.items()[0].roi_months, 2880.0);

    let en = report::render_dashboard(&seed, &editor, &Translator::new("en"));
    assert!(en.contains("ROI 2880.0 months"));
    assert!(!en.contains("not recoverable"));

    let ko = report::render_dashboard(&seed, &editor, &Translator::new("ko"));
    assert!(ko.contains("ROI 2880.0 개월"));
    assert!(!ko.contains("불가"));
}

#[test]
fn rental_item_payback_is_shown_as_immediate() {
    let catalog = Catalog::built_in();
    let seed = AnalysisResult::from_json_str(SEED).expect("seed");
    let editor = app::open_editor(&catalog, &seed);

    let ko = report::render_dashboard(&seed, &editor, &Translator::new("ko"));
    let line = ko.lines().find(|l| l.starts_with("1) ")).expect("first device");
    assert!(line.ends_with("ROI 즉시"));

    let en = report::render_dashboard(&seed, &editor, &Translator::new("en"));
    let line = en.lines().find(|l| l.starts_with("1) ")).expect("first device");
    assert!(line.ends_with("ROI immediate"));
    // 합계 줄은 개월 수 그대로
    assert!(en.contains("34.3 months"));
}

#[test]
fn cost_comparison_clamps_predicted_labor() {
    let catalog = Catalog::built_in();
    let seed = AnalysisResult::from_json_str(SEED).expect("seed");
    let editor = app::open_editor(&catalog, &seed);
    let cmp = comparison::compare(&seed.current_cost, editor.plan());

    assert_eq!(cmp.predicted_labor_cost, 330.0);
    assert_eq!(cmp.current_total_cost, 1400.0);
    assert_eq!(cmp.predicted_total_cost, 330.0 + 800.0 + 165.0);
    assert_eq!(cmp.current_net_profit, 3600.0);
    assert_eq!(cmp.total_cost_reduction, 1400.0 - 1295.0);

    let mut small = seed.current_cost.clone();
    small.monthly_labor_cost = 100.0;
    let cmp = comparison::compare(&small, editor.plan());
    assert_eq!(cmp.predicted_labor_cost, 0.0);
}

#[test]
fn seed_and_report_files_round_trip_on_disk() {
    let dir = tempfile::tempdir().expect("tempdir");
    let seed_path = dir.path().join("analysis.json");
    fs::write(&seed_path, SEED).expect("write seed");

    let catalog = Catalog::built_in();
    let seed = AnalysisResult::load(&seed_path).expect("load seed");
    let editor = app::open_editor(&catalog, &seed);
    let out_path = dir.path().join("report.json");
    app::save_report(&out_path, &seed, &editor).expect("save");

    // 출력 레코드는 다시 입력으로 읽을 수 있다.
    let reread = AnalysisResult::load(&out_path).expect("reload");
    assert_eq!(reread.automation_plan.total_monthly_saving, 270.0);
    assert_eq!(reread.automation_plan.recommended_devices.len(), 3);
}

#[test]
fn malformed_seed_is_an_error() {
    assert!(AnalysisResult::from_json_str("{ \"current_cost\": 3 }").is_err());
}

#[test]
fn amounts_are_grouped_by_thousands() {
    assert_eq!(report::format_amount(1_234_567.4), "1,234,567");
    assert_eq!(report::format_amount(-1500.0), "-1,500");
    assert_eq!(report::format_amount(999.6), "1,000");
    assert_eq!(report::format_amount(0.0), "0");
}

#[test]
fn catalog_listing_shows_selection_labels() {
    let text = report::render_catalog(&Catalog::built_in(), &Translator::new("ko"));
    assert!(text.contains("서빙로봇 - 서비(Servi)"));
    assert!(text.contains("자동후라이어: 0.5명 (정규직)"));
}
