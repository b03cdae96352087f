//! 절감액/투자비/회수기간 재계산 회귀 테스트.
use store_automation_roi::{
    catalog::{Catalog, EmployeeClass},
    engine::{self, AMORTIZATION_MONTHS},
    labor::{ClassCost, LaborBaseline},
    plan::{CostType, EquipmentLineItem, Payback, UNRECOVERABLE_PAYBACK_MONTHS},
};

fn baseline(ft: (f64, f64), pt: (f64, f64)) -> LaborBaseline {
    LaborBaseline::new(
        ClassCost {
            headcount: ft.0,
            total_cost: ft.1,
        },
        ClassCost {
            headcount: pt.0,
            total_cost: pt.1,
        },
    )
}

#[test]
fn scenario_monthly_serving_robot() {
    // 서빙로봇: PT 0.4명/대, PT 1인당 150만원
    let catalog = Catalog::built_in();
    let base = baseline((0.0, 0.0), (2.0, 300.0));
    let mut items = vec![EquipmentLineItem::new("푸두봇", CostType::Monthly, 30.0, 2)];
    let plan = engine::recalculate(&catalog, &base, &mut items);

    assert!((items[0].monthly_saving - 120.0).abs() < 1e-9);
    assert!((plan.total_monthly_saving - 120.0).abs() < 1e-9);
    assert!((plan.total_monthly_equipment_cost - 60.0).abs() < 1e-9);
    assert!((plan.net_profit_increase - 60.0).abs() < 1e-9);
    assert_eq!(plan.total_investment, 0.0);
    assert_eq!(plan.payback, Payback::NoInvestment);
    assert_eq!(plan.payback.as_record_months(), 0.0);
    assert!((plan.total_reduced_pt - 0.8).abs() < 1e-9);
    assert_eq!(plan.total_reduced_ft, 0.0);
}

#[test]
fn scenario_one_time_fryer() {
    // 자동후라이어: FT 0.5명/대, FT 1인당 300만원
    let catalog = Catalog::built_in();
    let base = baseline((1.0, 300.0), (0.0, 0.0));
    let mut items = vec![EquipmentLineItem::new(
        "경일 후라이어 - 소형",
        CostType::OneTime,
        3600.0,
        1,
    )];
    let plan = engine::recalculate(&catalog, &base, &mut items);

    assert!((plan.total_monthly_saving - 150.0).abs() < 1e-9);
    assert!((plan.total_monthly_equipment_cost - 100.0).abs() < 1e-9);
    assert!((plan.net_profit_increase - 50.0).abs() < 1e-9);
    assert!((plan.total_investment - 3600.0).abs() < 1e-9);
    assert_eq!(plan.payback, Payback::Months(72.0));
    assert!((items[0].roi_months - 72.0).abs() < 1e-9);
    assert!((plan.total_reduced_ft - 0.5).abs() < 1e-9);
}

#[test]
fn negative_net_gain_is_unrecoverable() {
    let catalog = Catalog::built_in();
    let ft_cost = 2.0 * (1000.0 / AMORTIZATION_MONTHS - 10.0);
    let base = baseline((1.0, ft_cost), (0.0, 0.0));
    let mut items = vec![EquipmentLineItem::new(
        "자동후라이어",
        CostType::OneTime,
        1000.0,
        1,
    )];
    let plan = engine::recalculate(&catalog, &base, &mut items);

    assert!((plan.net_profit_increase + 10.0).abs() < 1e-6);
    assert_eq!(plan.payback, Payback::Unrecoverable);
    assert!(!plan.payback.is_recoverable());
    assert_eq!(plan.payback.as_record_months(), UNRECOVERABLE_PAYBACK_MONTHS);
}

#[test]
fn zero_net_gain_with_investment_is_unrecoverable() {
    let catalog = Catalog::built_in();
    // 절감 0.5 × 200 = 100, 상각 3600 / 36 = 100
    let base = baseline((1.0, 200.0), (0.0, 0.0));
    let items = vec![EquipmentLineItem::new(
        "자동후라이어",
        CostType::OneTime,
        3600.0,
        1,
    )];
    let plan = engine::aggregate(&catalog, &base, &items);

    assert_eq!(plan.net_profit_increase, 0.0);
    assert_eq!(plan.payback, Payback::Unrecoverable);
    assert!(plan.payback.as_record_months().is_finite());
}

#[test]
fn zero_part_time_headcount_saves_nothing() {
    let catalog = Catalog::built_in();
    let base = baseline((2.0, 600.0), (0.0, 500.0));
    for qty in [1, 5, 99] {
        let mut items = vec![
            EquipmentLineItem::new("서빙로봇", CostType::Monthly, 30.0, qty),
            EquipmentLineItem::new("키오스크", CostType::OneTime, 200.0, qty),
        ];
        let plan = engine::recalculate(&catalog, &base, &mut items);
        assert!(items.iter().all(|i| i.monthly_saving == 0.0));
        assert_eq!(plan.total_monthly_saving, 0.0);
        assert!(plan.total_reduced_pt > 0.0);
    }
}

#[test]
fn unresolved_name_falls_back_to_zero_saving() {
    let catalog = Catalog::built_in();
    let base = baseline((3.0, 900.0), (4.0, 600.0));
    let item = EquipmentLineItem::new("맞춤 제작 장비", CostType::Monthly, 10.0, 2);
    let saving = engine::item_saving(&catalog, &base, &item);

    assert_eq!(saving.monthly_saving, 0.0);
    assert_eq!(saving.reduced_headcount, 0.0);
    assert_eq!(saving.rule.class, EmployeeClass::PartTime);
}

#[test]
fn per_unit_saving_does_not_depend_on_order() {
    let catalog = Catalog::built_in();
    let base = baseline((2.0, 700.0), (3.0, 450.0));
    let mut forward = vec![
        EquipmentLineItem::new("푸두봇", CostType::Monthly, 30.0, 1),
        EquipmentLineItem::new("KT오더", CostType::Monthly, 3.0, 12),
        EquipmentLineItem::new("서비(Servi)", CostType::OneTime, 2200.0, 3),
    ];
    let mut backward: Vec<_> = forward.iter().rev().cloned().collect();

    let a = engine::recalculate(&catalog, &base, &mut forward);
    let b = engine::recalculate(&catalog, &base, &mut backward);

    let per_unit = |item: &EquipmentLineItem| item.monthly_saving / f64::from(item.quantity);
    assert!((per_unit(&forward[0]) - per_unit(&forward[2])).abs() < 1e-9);
    assert!((per_unit(&forward[0]) - per_unit(&backward[0])).abs() < 1e-9);
    assert!((a.total_monthly_saving - b.total_monthly_saving).abs() < 1e-9);
    assert!((a.total_investment - b.total_investment).abs() < 1e-9);
}

#[test]
fn recalculation_is_idempotent() {
    let catalog = Catalog::built_in();
    let base = baseline((2.0, 700.0), (3.0, 450.0));
    let mut items = vec![
        EquipmentLineItem::new("가우시움 (청소봇)", CostType::OneTime, 2000.0, 1),
        EquipmentLineItem::new("Teatime-1", CostType::Monthly, 85.0, 2),
    ];
    let first = engine::recalculate(&catalog, &base, &mut items);
    let snapshot = items.clone();
    let second = engine::recalculate(&catalog, &base, &mut items);

    assert_eq!(first, second);
    assert_eq!(snapshot, items);
}

#[test]
fn one_time_quantity_is_monotonic() {
    let catalog = Catalog::built_in();
    let base = baseline((1.0, 300.0), (2.0, 300.0));
    let mut prev_investment = 0.0;
    let mut prev_cost = 0.0;
    for qty in 1..=20 {
        let items = vec![EquipmentLineItem::new(
            "자동볶음기",
            CostType::OneTime,
            2000.0,
            qty,
        )];
        let plan = engine::aggregate(&catalog, &base, &items);
        assert!(plan.total_investment >= prev_investment);
        assert!(plan.total_monthly_equipment_cost >= prev_cost);
        prev_investment = plan.total_investment;
        prev_cost = plan.total_monthly_equipment_cost;
    }
}

#[test]
fn rental_items_carry_no_capex() {
    let catalog = Catalog::built_in();
    let base = LaborBaseline::default();
    let items = vec![
        EquipmentLineItem::new("푸두봇", CostType::Monthly, 30.0, 4),
        EquipmentLineItem::new("KM24A 키오스크", CostType::OneTime, 230.0, 2),
    ];
    let plan = engine::aggregate(&catalog, &base, &items);

    assert!((plan.total_investment - 460.0).abs() < 1e-9);
    assert!((plan.total_monthly_equipment_cost - (120.0 + 460.0 / 36.0)).abs() < 1e-9);
}

#[test]
fn rounding_happens_only_for_display() {
    let catalog = Catalog::built_in();
    // PT 1인당 100/3, 0.3명 × 1대 = 10만원
    let base = baseline((0.0, 0.0), (3.0, 100.0));
    let items = vec![
        EquipmentLineItem::new("키오스크", CostType::Monthly, 2.5, 1),
        EquipmentLineItem::new("KIOSK T-series", CostType::Monthly, 2.5, 1),
    ];
    let plan = engine::aggregate(&catalog, &base, &items);
    let rounded = plan.rounded();

    assert!((plan.total_monthly_saving - 20.0).abs() < 1e-9);
    assert!((plan.total_monthly_equipment_cost - 5.0).abs() < 1e-9);
    assert_eq!(rounded.total_monthly_saving, 20.0);
    assert_eq!(rounded.net_profit_increase, 15.0);
    assert_eq!(rounded.payback, plan.payback);
}

#[test]
fn payback_rounds_to_one_decimal() {
    assert_eq!(Payback::from_investment(1000.0, 30.0), Payback::Months(33.3));
    assert_eq!(Payback::from_investment(0.0, -5.0), Payback::NoInvestment);
    assert_eq!(Payback::from_record_months(999.0), Payback::Unrecoverable);
    assert_eq!(Payback::from_record_months(12.5), Payback::Months(12.5));
    assert_eq!(Payback::from_record_months(2880.0), Payback::Months(2880.0));
}
