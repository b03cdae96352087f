use serde::Serialize;

use crate::engine::AggregatePlan;
use crate::plan::CurrentCost;

/// 도입 전/후 월 운영 비용 구조 비교 [만원].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CostComparison {
    pub current_labor_cost: f64,
    /// 절감액을 뺀 인건비. 0 미만이면 0.
    pub predicted_labor_cost: f64,
    pub fixed_cost: f64,
    pub predicted_equipment_cost: f64,
    pub current_total_cost: f64,
    pub predicted_total_cost: f64,
    pub current_net_profit: f64,
    pub predicted_net_profit: f64,
    /// 현재 총비용 - 도입 후 총비용 (음수면 비용 증가)
    pub total_cost_reduction: f64,
}

/// 표시용으로 반올림된 합계를 기준으로 비용 구조를 비교한다.
pub fn compare(current: &CurrentCost, plan: &AggregatePlan) -> CostComparison {
    let plan = plan.rounded();
    let predicted_labor_cost = (current.monthly_labor_cost - plan.total_monthly_saving).max(0.0);
    let current_total_cost = current.monthly_labor_cost + current.monthly_fixed_cost;
    let predicted_total_cost =
        predicted_labor_cost + current.monthly_fixed_cost + plan.total_monthly_equipment_cost;
    CostComparison {
        current_labor_cost: current.monthly_labor_cost,
        predicted_labor_cost,
        fixed_cost: current.monthly_fixed_cost,
        predicted_equipment_cost: plan.total_monthly_equipment_cost,
        current_total_cost,
        predicted_total_cost,
        current_net_profit: current.monthly_sales - current_total_cost,
        predicted_net_profit: current.monthly_sales - predicted_total_cost,
        total_cost_reduction: current_total_cost - predicted_total_cost,
    }
}
