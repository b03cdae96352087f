//! 장비 라인 아이템과 인건비 기준으로 절감액/투자비/회수기간을 다시 계산한다.
//!
//! 모든 값은 (라인 아이템, 인건비 기준)의 순수 함수이며 편집이 있을 때마다 처음부터 다시 계산한다.
//! 중간값은 반올림하지 않고, 표시 시점에 [`AggregatePlan::rounded`]로 정수 만원 단위로 맞춘다.

use tracing::debug;

use crate::catalog::{Catalog, EmployeeClass, LaborSavingRule};
use crate::labor::LaborBaseline;
use crate::plan::{CostType, EquipmentLineItem, Payback};
use crate::resolver;

/// 일시불 장비 월 상각 기간 [개월].
pub const AMORTIZATION_MONTHS: f64 = 36.0;

/// 라인 아이템 하나의 인력 절감 계산 결과.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemSaving {
    pub rule: LaborSavingRule,
    /// 절감 인원(대당 절감 인원 × 수량)
    pub reduced_headcount: f64,
    /// 월 절감액 [만원]
    pub monthly_saving: f64,
}

/// 라인 아이템의 월 절감액을 계산한다.
///
/// 월 절감액 = (대당 절감 인원 × 수량) × 해당 인력 유형 1인당 인건비.
/// 장비군을 판정하지 못하면 절감 기준이 0이므로 절감액도 0이다.
pub fn item_saving(
    catalog: &Catalog,
    baseline: &LaborBaseline,
    item: &EquipmentLineItem,
) -> ItemSaving {
    let category = resolver::resolve_category(catalog, &item.name);
    let rule = catalog.labor_rule(category);
    let reduced_headcount = rule.amount * f64::from(item.quantity);
    ItemSaving {
        rule,
        reduced_headcount,
        monthly_saving: reduced_headcount * baseline.unit_cost(rule.class),
    }
}

/// 일시불 장비의 초기 투자비(단가 × 수량). 렌탈은 0.
pub fn item_investment(item: &EquipmentLineItem) -> f64 {
    match item.cost_type {
        CostType::OneTime => item.cost * f64::from(item.quantity),
        CostType::Monthly => 0.0,
    }
}

/// 장비 월 비용. 렌탈은 렌탈료 × 수량, 일시불은 36개월 상각.
pub fn item_monthly_equipment_cost(item: &EquipmentLineItem) -> f64 {
    let total = item.cost * f64::from(item.quantity);
    match item.cost_type {
        CostType::Monthly => total,
        CostType::OneTime => total / AMORTIZATION_MONTHS,
    }
}

/// 라인 아이템 하나만 도입했을 때의 회수 기간.
pub fn item_payback(
    catalog: &Catalog,
    baseline: &LaborBaseline,
    item: &EquipmentLineItem,
) -> Payback {
    let saving = item_saving(catalog, baseline, item);
    let net = saving.monthly_saving - item_monthly_equipment_cost(item);
    Payback::from_investment(item_investment(item), net)
}

/// 재계산된 합계. 라인 아이템 목록에서 매번 새로 만들어지며 따로 저장하지 않는다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AggregatePlan {
    /// 월 절감액 합계 [만원]
    pub total_monthly_saving: f64,
    /// 일시불 초기 투자비(CapEx) 합계 [만원]
    pub total_investment: f64,
    /// 장비 월 비용 합계(렌탈 + 상각) [만원]
    pub total_monthly_equipment_cost: f64,
    /// 월 순이익 증가액 [만원], 음수 가능
    pub net_profit_increase: f64,
    pub payback: Payback,
    pub total_reduced_ft: f64,
    pub total_reduced_pt: f64,
}

impl AggregatePlan {
    /// 금액 필드를 정수 만원 단위로 반올림한 표시용 사본.
    pub fn rounded(&self) -> Self {
        Self {
            total_monthly_saving: self.total_monthly_saving.round(),
            total_investment: self.total_investment.round(),
            total_monthly_equipment_cost: self.total_monthly_equipment_cost.round(),
            net_profit_increase: self.net_profit_increase.round(),
            ..*self
        }
    }
}

/// 라인 아이템을 바꾸지 않고 합계만 계산한다.
pub fn aggregate(
    catalog: &Catalog,
    baseline: &LaborBaseline,
    items: &[EquipmentLineItem],
) -> AggregatePlan {
    let mut total_monthly_saving = 0.0;
    let mut total_investment = 0.0;
    let mut total_monthly_equipment_cost = 0.0;
    let mut total_reduced_ft = 0.0;
    let mut total_reduced_pt = 0.0;

    for item in items {
        let saving = item_saving(catalog, baseline, item);
        total_monthly_saving += saving.monthly_saving;
        match saving.rule.class {
            EmployeeClass::FullTime => total_reduced_ft += saving.reduced_headcount,
            EmployeeClass::PartTime => total_reduced_pt += saving.reduced_headcount,
        }
        total_investment += item_investment(item);
        total_monthly_equipment_cost += item_monthly_equipment_cost(item);
    }

    let net_profit_increase = total_monthly_saving - total_monthly_equipment_cost;
    let plan = AggregatePlan {
        total_monthly_saving,
        total_investment,
        total_monthly_equipment_cost,
        net_profit_increase,
        payback: Payback::from_investment(total_investment, net_profit_increase),
        total_reduced_ft,
        total_reduced_pt,
    };
    debug!(
        items = items.len(),
        saving = plan.total_monthly_saving,
        investment = plan.total_investment,
        equipment_cost = plan.total_monthly_equipment_cost,
        net = plan.net_profit_increase,
        payback = ?plan.payback,
        "recalculated automation plan"
    );
    plan
}

/// 각 라인 아이템의 계산 필드(`monthly_saving`, `roi_months`)를 갱신하고 합계를 돌려준다.
pub fn recalculate(
    catalog: &Catalog,
    baseline: &LaborBaseline,
    items: &mut [EquipmentLineItem],
) -> AggregatePlan {
    for item in items.iter_mut() {
        item.monthly_saving = item_saving(catalog, baseline, item).monthly_saving;
        item.roi_months = item_payback(catalog, baseline, item).as_record_months();
    }
    aggregate(catalog, baseline, items)
}
