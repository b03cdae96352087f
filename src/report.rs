//! 재계산 결과를 분석 결과 레코드(JSON)와 대시보드 텍스트로 내보낸다.

use serde::Serialize;
use std::fmt::Write as _;

use crate::catalog::{Catalog, EmployeeClass};
use crate::comparison::{self, CostComparison};
use crate::editor::PlanEditor;
use crate::engine::{self, AggregatePlan};
use crate::i18n::{keys, Translator};
use crate::plan::{
    AnalysisResult, AutomationPlan, CostType, CurrentCost, EquipmentLineItem, Payback,
};

/// 표시 계층으로 넘기는 출력 레코드. 필드명은 입력 레코드와 같다.
#[derive(Debug, Clone, Serialize)]
pub struct PlanReport {
    #[serde(flatten)]
    pub analysis: AnalysisResult,
    pub total_monthly_equipment_cost: f64,
    #[serde(rename = "totalReducedFT")]
    pub total_reduced_ft: f64,
    #[serde(rename = "totalReducedPT")]
    pub total_reduced_pt: f64,
    pub cost_comparison: CostComparison,
}

/// 다시 계산한 수치로 자동화 계획 레코드를 만든다. 금액은 정수 만원으로 반올림한다.
pub fn automation_plan(items: &[EquipmentLineItem], plan: &AggregatePlan) -> AutomationPlan {
    let rounded = plan.rounded();
    let recommended_devices = items
        .iter()
        .map(|item| EquipmentLineItem {
            monthly_saving: item.monthly_saving.round(),
            ..item.clone()
        })
        .collect();
    AutomationPlan {
        recommended_devices,
        total_monthly_saving: rounded.total_monthly_saving,
        total_roi_months: rounded.payback.as_record_months(),
        total_investment_cost: rounded.total_investment,
        net_profit_increase: rounded.net_profit_increase,
    }
}

/// 초기 분석 결과의 계획 부분을 재계산된 값으로 바꾼 출력 레코드.
pub fn build_report(seed: &AnalysisResult, editor: &PlanEditor<'_>) -> PlanReport {
    let plan = editor.plan();
    let mut analysis = seed.clone();
    analysis.automation_plan = automation_plan(editor.items(), plan);
    PlanReport {
        analysis,
        total_monthly_equipment_cost: plan.total_monthly_equipment_cost.round(),
        total_reduced_ft: plan.total_reduced_ft,
        total_reduced_pt: plan.total_reduced_pt,
        cost_comparison: comparison::compare(&seed.current_cost, plan),
    }
}

/// 천 단위 구분 기호를 넣은 정수 금액.
pub fn format_amount(value: f64) -> String {
    let rounded = value.round();
    let digits = format!("{}", rounded.abs() as u64);
    let mut out = String::new();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if rounded < 0.0 {
        format!("-{out}")
    } else {
        out
    }
}

/// 회수 기간 표기. 회수 불가는 숫자 대신 문구로 보인다.
pub fn format_payback(payback: Payback, tr: &Translator) -> String {
    match payback {
        Payback::Unrecoverable => tr.t(keys::PAYBACK_UNRECOVERABLE).to_string(),
        Payback::NoInvestment => format!("0 {}", tr.t(keys::UNIT_MONTHS)),
        Payback::Months(m) => format!("{m:.1} {}", tr.t(keys::UNIT_MONTHS)),
    }
}

/// 라인 아이템의 회수 기간 표기. 일시불 투자가 없으면 "즉시".
pub fn format_item_payback(payback: Payback, tr: &Translator) -> String {
    match payback {
        Payback::NoInvestment => tr.t(keys::PAYBACK_IMMEDIATE).to_string(),
        other => format_payback(other, tr),
    }
}

fn cost_type_label(cost_type: CostType, tr: &Translator) -> &str {
    match cost_type {
        CostType::Monthly => tr.t(keys::COST_TYPE_MONTHLY),
        CostType::OneTime => tr.t(keys::COST_TYPE_ONE_TIME),
    }
}

/// 대시보드 화면에 해당하는 텍스트를 만든다.
pub fn render_dashboard(
    seed: &AnalysisResult,
    editor: &PlanEditor<'_>,
    tr: &Translator,
) -> String {
    let plan = editor.plan().rounded();
    let won = tr.t(keys::UNIT_MANWON);
    let mut out = String::new();

    let store = &seed.store_analysis;
    let _ = writeln!(out, "{}", tr.t(keys::REPORT_TITLE));
    let _ = writeln!(out, "{} {}", tr.t(keys::STORE_CATEGORY), store.store_category);
    let _ = writeln!(out, "{} {}", tr.t(keys::STORE_TABLES), store.estimated_tables);
    let _ = writeln!(
        out,
        "{} {}  {} {}",
        tr.t(keys::STORE_HALL_SIZE),
        store.estimated_hall_size,
        tr.t(keys::STORE_KITCHEN_SIZE),
        store.estimated_kitchen_size
    );
    if !store.workflow_issue.is_empty() {
        let _ = writeln!(out, "{} {}", tr.t(keys::WORKFLOW_ISSUE), store.workflow_issue);
    }
    out.push('\n');

    let _ = writeln!(
        out,
        "{} {} {won}",
        tr.t(keys::TOTAL_SAVING),
        format_amount(plan.total_monthly_saving)
    );
    let _ = writeln!(
        out,
        "{} {} {won}",
        tr.t(keys::NET_PROFIT_INCREASE),
        format_amount(plan.net_profit_increase)
    );
    let _ = writeln!(out, "{} {}", tr.t(keys::PAYBACK), format_payback(plan.payback, tr));
    let _ = writeln!(
        out,
        "{} {} {won}",
        tr.t(keys::TOTAL_INVESTMENT),
        format_amount(plan.total_investment)
    );
    let _ = writeln!(
        out,
        "{} {} {won}",
        tr.t(keys::EQUIPMENT_COST),
        format_amount(plan.total_monthly_equipment_cost)
    );
    let persons = tr.t(keys::UNIT_PERSONS);
    let _ = writeln!(
        out,
        "{} {} {:.1}{persons}, {} {:.1}{persons}",
        tr.t(keys::REDUCED_HEADCOUNT),
        tr.t(keys::FULL_TIME),
        plan.total_reduced_ft,
        tr.t(keys::PART_TIME),
        plan.total_reduced_pt
    );

    render_comparison(&mut out, &seed.current_cost, editor.plan(), tr);
    render_devices(&mut out, editor, tr);

    if !seed.report_text.is_empty() {
        let _ = writeln!(out, "{}", tr.t(keys::REPORT_TEXT_HEADING));
        let _ = writeln!(out, "{}", seed.report_text);
    }
    out
}

fn render_comparison(
    out: &mut String,
    current: &CurrentCost,
    plan: &AggregatePlan,
    tr: &Translator,
) {
    let cmp = comparison::compare(current, plan);
    let won = tr.t(keys::UNIT_MANWON);
    let _ = writeln!(out, "{}", tr.t(keys::COMPARISON_HEADING));
    let _ = writeln!(
        out,
        "{:<12} {:>12} {:>12}",
        "",
        tr.t(keys::COMPARISON_CURRENT),
        tr.t(keys::COMPARISON_PREDICTED)
    );
    let rows = [
        (keys::LABOR_COST, cmp.current_labor_cost, cmp.predicted_labor_cost),
        (keys::FIXED_COST, cmp.fixed_cost, cmp.fixed_cost),
        (keys::EQUIPMENT, 0.0, cmp.predicted_equipment_cost),
        (keys::TOTAL_COST, cmp.current_total_cost, cmp.predicted_total_cost),
        (keys::NET_PROFIT, cmp.current_net_profit, cmp.predicted_net_profit),
    ];
    for (key, now, after) in rows {
        let _ = writeln!(
            out,
            "{:<12} {:>12} {:>12}",
            tr.t(key),
            format_amount(now),
            format_amount(after)
        );
    }
    let _ = writeln!(
        out,
        "{} {} {won}",
        tr.t(keys::COST_REDUCTION),
        format_amount(cmp.total_cost_reduction)
    );
}

fn render_devices(out: &mut String, editor: &PlanEditor<'_>, tr: &Translator) {
    let _ = writeln!(out, "{}", tr.t(keys::DEVICES_HEADING));
    if editor.items().is_empty() {
        let _ = writeln!(out, "{}", tr.t(keys::DEVICES_EMPTY));
        return;
    }
    let won = tr.t(keys::UNIT_MANWON);
    for (idx, item) in editor.items().iter().enumerate() {
        let category = editor
            .category_of(idx)
            .unwrap_or_else(|| tr.t(keys::CATEGORY_OTHER));
        let _ = writeln!(
            out,
            "{}) [{category}] {} | {} {} {won} | {} {} | {} -{} {won} | ROI {}",
            idx + 1,
            item.name,
            cost_type_label(item.cost_type, tr),
            item.cost,
            tr.t(keys::QUANTITY),
            item.quantity,
            tr.t(keys::MONTHLY_SAVING),
            format_amount(item.monthly_saving),
            format_item_payback(
                engine::item_payback(editor.catalog(), editor.baseline(), item),
                tr
            )
        );
        if let Some(reason) = item.reason.as_deref().filter(|r| !r.is_empty()) {
            let _ = writeln!(out, "    {}: {reason}", tr.t(keys::REASON));
        }
    }
}

/// 단가표와 장비군별 인력 절감 기준을 텍스트로 만든다.
pub fn render_catalog(catalog: &Catalog, tr: &Translator) -> String {
    let won = tr.t(keys::UNIT_MANWON);
    let mut out = String::new();
    let _ = writeln!(out, "{}", tr.t(keys::CATALOG_HEADING));
    for (idx, def) in catalog.equipment().iter().enumerate() {
        let _ = writeln!(
            out,
            "{:>2}) {} ({}) | {} {} {won} | {} {} {won}",
            idx + 1,
            def.selection_label(),
            def.maker,
            tr.t(keys::CATALOG_ONE_TIME),
            format_amount(def.price_one_time),
            tr.t(keys::CATALOG_RENTAL),
            def.price_rental
        );
    }
    let _ = writeln!(out, "{}", tr.t(keys::CATALOG_LABOR_HEADING));
    for category in catalog.categories() {
        let rule = catalog.labor_rule(Some(category));
        let class = match rule.class {
            EmployeeClass::FullTime => tr.t(keys::FULL_TIME),
            EmployeeClass::PartTime => tr.t(keys::PART_TIME),
        };
        let _ = writeln!(
            out,
            "    {category}: {:.1}{} ({class})",
            rule.amount,
            tr.t(keys::UNIT_PERSONS)
        );
    }
    out
}
