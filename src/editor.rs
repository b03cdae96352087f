//! 세션이 소유하는 장비 라인 아이템 목록과 편집 연산.
//!
//! 편집이 일어날 때마다 전체를 다시 계산한다(증분 갱신 없음).

use tracing::{info, warn};

use crate::catalog::Catalog;
use crate::engine::{self, AggregatePlan};
use crate::labor::LaborBaseline;
use crate::plan::{coerce_quantity, parse_quantity, CostType, EquipmentLineItem};
use crate::resolver;

/// 새로 추가한 장비의 추천 근거 문구.
pub const REASON_USER_ADDED: &str = "사용자 추가";
/// 같은 장비군을 다른 모델로 바꾼 경우의 추천 근거 문구.
pub const REASON_USER_REPLACED: &str = "사용자 변경 (모델 교체)";

/// 장비 추가 결과. 장비군마다 라인 아이템은 하나만 두므로 같은 장비군 추가는 교체가 된다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// 목록 끝에 새 줄을 추가함
    Appended(usize),
    /// 같은 장비군의 기존 줄을 교체함(수량 유지)
    Replaced(usize),
}

/// 결제 방식 전환 결과.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CostTypeChange {
    /// 이미 같은 방식이라 아무것도 바꾸지 않음
    Unchanged,
    /// 단가표 가격으로 다시 매김
    Repriced,
    /// 단가표에서 장비를 찾지 못해 기존 단가를 그대로 둠
    StalePrice,
}

/// 한 분석 세션의 장비 추천 편집기.
#[derive(Debug, Clone)]
pub struct PlanEditor<'c> {
    catalog: &'c Catalog,
    baseline: LaborBaseline,
    items: Vec<EquipmentLineItem>,
    plan: AggregatePlan,
}

impl<'c> PlanEditor<'c> {
    /// 초기 추천 목록으로 편집기를 만들고 바로 재계산한다.
    pub fn new(
        catalog: &'c Catalog,
        baseline: LaborBaseline,
        mut items: Vec<EquipmentLineItem>,
    ) -> Self {
        let plan = engine::recalculate(catalog, &baseline, &mut items);
        Self {
            catalog,
            baseline,
            items,
            plan,
        }
    }

    pub fn items(&self) -> &[EquipmentLineItem] {
        &self.items
    }

    pub fn plan(&self) -> &AggregatePlan {
        &self.plan
    }

    pub fn baseline(&self) -> &LaborBaseline {
        &self.baseline
    }

    pub fn catalog(&self) -> &'c Catalog {
        self.catalog
    }

    /// 라인 아이템의 장비군. 판정 실패 시 `None`("기타").
    pub fn category_of(&self, index: usize) -> Option<&'c str> {
        let item = self.items.get(index)?;
        resolver::resolve_category(self.catalog, &item.name)
    }

    fn recompute(&mut self) {
        self.plan = engine::recalculate(self.catalog, &self.baseline, &mut self.items);
    }

    /// 드롭다운 표기(`"{장비군} - {모델}"`)로 장비를 추가한다.
    ///
    /// 같은 장비군 줄이 있으면 수량을 유지한 채 교체한다. 새 줄/교체 줄은 렌탈 가격으로 시작한다.
    /// 표기가 단가표에 없으면 `None`.
    pub fn add(&mut self, selection_label: &str) -> Option<AddOutcome> {
        let catalog = self.catalog;
        let Some(def) = catalog.find_by_label(selection_label) else {
            warn!(label = selection_label, "unknown equipment selection");
            return None;
        };
        let existing = self.items.iter().position(|item| {
            resolver::resolve_category(catalog, &item.name) == Some(def.category.as_str())
        });

        let outcome = match existing {
            Some(index) => {
                let quantity = self.items[index].quantity;
                self.items[index] = EquipmentLineItem::new(
                    def.display_name(),
                    CostType::Monthly,
                    def.price_rental,
                    quantity,
                )
                .with_reason(REASON_USER_REPLACED);
                AddOutcome::Replaced(index)
            }
            None => {
                self.items.push(
                    EquipmentLineItem::new(
                        def.display_name(),
                        CostType::Monthly,
                        def.price_rental,
                        1,
                    )
                    .with_reason(REASON_USER_ADDED),
                );
                AddOutcome::Appended(self.items.len() - 1)
            }
        };
        info!(label = selection_label, ?outcome, "equipment added");
        self.recompute();
        Some(outcome)
    }

    /// 위치로 라인 아이템을 삭제한다. 범위 밖이면 `None`.
    pub fn remove(&mut self, index: usize) -> Option<EquipmentLineItem> {
        if index >= self.items.len() {
            return None;
        }
        let removed = self.items.remove(index);
        self.recompute();
        Some(removed)
    }

    /// 결제 방식을 바꾸고 단가표의 해당 가격으로 다시 매긴다.
    ///
    /// 단가표에서 장비를 찾지 못하면 기존 단가가 그대로 남는다.
    pub fn set_cost_type(&mut self, index: usize, cost_type: CostType) -> Option<CostTypeChange> {
        let catalog = self.catalog;
        let item = self.items.get_mut(index)?;
        if item.cost_type == cost_type {
            return Some(CostTypeChange::Unchanged);
        }
        item.cost_type = cost_type;
        let change = match resolver::find_for_repricing(catalog, &item.name) {
            Some(def) => {
                item.cost = match cost_type {
                    CostType::Monthly => def.price_rental,
                    CostType::OneTime => def.price_one_time,
                };
                CostTypeChange::Repriced
            }
            None => {
                warn!(name = %item.name, "no catalog match, unit cost left unchanged");
                CostTypeChange::StalePrice
            }
        };
        self.recompute();
        Some(change)
    }

    /// 결제 방식을 반대로 바꾼다.
    pub fn toggle_cost_type(&mut self, index: usize) -> Option<CostTypeChange> {
        let next = self.items.get(index)?.cost_type.toggled();
        self.set_cost_type(index, next)
    }

    /// 수량을 설정한다. 1~99 밖이면 1.
    pub fn set_quantity(&mut self, index: usize, quantity: i64) -> Option<u32> {
        let item = self.items.get_mut(index)?;
        item.quantity = coerce_quantity(quantity);
        let applied = item.quantity;
        self.recompute();
        Some(applied)
    }

    /// 입력 문자열로 수량을 설정한다. 숫자가 아니거나 범위 밖이면 1.
    pub fn set_quantity_input(&mut self, index: usize, input: &str) -> Option<u32> {
        let item = self.items.get_mut(index)?;
        item.quantity = parse_quantity(input);
        let applied = item.quantity;
        self.recompute();
        Some(applied)
    }
}
