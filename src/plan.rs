//! 분석 결과(JSON)와 편집 가능한 장비 라인 아이템 자료형.
//!
//! 필드명은 외부 AI 어드바이저가 돌려주는 레코드와 같게 유지한다.

use serde::{Deserialize, Deserializer, Serialize};

/// 수량 입력 허용 범위 [대].
pub const MIN_QUANTITY: u32 = 1;
pub const MAX_QUANTITY: u32 = 99;
/// 범위 밖이거나 숫자가 아닌 수량 입력을 대신하는 값.
pub const DEFAULT_QUANTITY: u32 = 1;

/// 장비 비용 지불 방식.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CostType {
    /// 월 렌탈
    #[serde(rename = "monthly")]
    Monthly,
    /// 일시불 구매
    #[serde(rename = "one_time")]
    OneTime,
}

impl CostType {
    pub fn toggled(self) -> Self {
        match self {
            CostType::Monthly => CostType::OneTime,
            CostType::OneTime => CostType::Monthly,
        }
    }
}

/// 정수 수량을 1~99 범위로 강제한다. 범위 밖이면 1.
pub fn coerce_quantity(raw: i64) -> u32 {
    if (MIN_QUANTITY as i64..=MAX_QUANTITY as i64).contains(&raw) {
        raw as u32
    } else {
        DEFAULT_QUANTITY
    }
}

/// 사용자가 입력한 수량 문자열을 해석한다. 숫자가 아니면 1.
pub fn parse_quantity(input: &str) -> u32 {
    input
        .trim()
        .parse::<i64>()
        .map(coerce_quantity)
        .unwrap_or(DEFAULT_QUANTITY)
}

fn lenient_quantity<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    let qty = match value {
        serde_json::Value::Number(n) => match n.as_i64() {
            Some(i) => coerce_quantity(i),
            None => n
                .as_f64()
                .filter(|f| f.fract() == 0.0)
                .map(|f| coerce_quantity(f as i64))
                .unwrap_or(DEFAULT_QUANTITY),
        },
        serde_json::Value::String(s) => parse_quantity(&s),
        _ => DEFAULT_QUANTITY,
    };
    Ok(qty)
}

/// 추천 장비 한 줄. 계산 필드는 재계산 엔진이 덮어쓴다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquipmentLineItem {
    /// 장비명(장비군 판정에 쓰이는 자유 텍스트)
    pub name: String,
    pub cost_type: CostType,
    /// 단가 [만원] 또는 [만원/월]
    pub cost: f64,
    #[serde(rename = "count", deserialize_with = "lenient_quantity")]
    pub quantity: u32,
    /// 월 절감액 [만원] (단가 절감액 × 수량)
    #[serde(default)]
    pub monthly_saving: f64,
    #[serde(default)]
    pub roi_months: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl EquipmentLineItem {
    pub fn new(name: impl Into<String>, cost_type: CostType, cost: f64, quantity: u32) -> Self {
        Self {
            name: name.into(),
            cost_type,
            cost,
            quantity: coerce_quantity(quantity as i64),
            monthly_saving: 0.0,
            roi_months: 0.0,
            reason: None,
        }
    }

    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }
}

/// 회수 불가를 나타내던 숫자 표기(개월).
pub const UNRECOVERABLE_PAYBACK_MONTHS: f64 = 999.0;

/// 투자 회수 기간.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Payback {
    /// 일시불 투자비가 없음(회수할 자본 없음)
    NoInvestment,
    /// 회수 기간 [개월], 소수 첫째 자리 반올림
    Months(f64),
    /// 투자비가 있으나 월 순이익 증가가 0 이하
    Unrecoverable,
}

impl Payback {
    /// 투자비와 월 순이익 증가액으로 회수 기간을 판정한다.
    pub fn from_investment(investment: f64, net_monthly_gain: f64) -> Self {
        if investment <= 0.0 {
            Payback::NoInvestment
        } else if net_monthly_gain > 0.0 {
            Payback::Months(round_to_tenth(investment / net_monthly_gain))
        } else {
            Payback::Unrecoverable
        }
    }

    /// 레코드(`roi_months`, `total_roi_months`)에 들어갈 숫자 표기.
    pub fn as_record_months(self) -> f64 {
        match self {
            Payback::NoInvestment => 0.0,
            Payback::Months(m) => m,
            Payback::Unrecoverable => UNRECOVERABLE_PAYBACK_MONTHS,
        }
    }

    /// 숫자 표기를 다시 해석한다. 정확히 999일 때만 회수 불가로 본다.
    pub fn from_record_months(months: f64) -> Self {
        if months == UNRECOVERABLE_PAYBACK_MONTHS {
            Payback::Unrecoverable
        } else if months <= 0.0 {
            Payback::NoInvestment
        } else {
            Payback::Months(months)
        }
    }

    pub fn is_recoverable(self) -> bool {
        !matches!(self, Payback::Unrecoverable)
    }
}

pub(crate) fn round_to_tenth(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

/// 확정된 매출/비용/인건비 입력.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CurrentCost {
    pub monthly_sales: f64,
    pub monthly_fixed_cost: f64,
    pub employee_count_ft: f64,
    pub employee_cost_ft: f64,
    pub employee_count_pt: f64,
    pub employee_cost_pt: f64,
    pub monthly_labor_cost: f64,
}

/// 추천 장비 목록과 합계.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AutomationPlan {
    pub recommended_devices: Vec<EquipmentLineItem>,
    #[serde(default)]
    pub total_monthly_saving: f64,
    #[serde(default)]
    pub total_roi_months: f64,
    #[serde(default)]
    pub total_investment_cost: f64,
    #[serde(default)]
    pub net_profit_increase: f64,
}

/// 매장 환경 추론 결과.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoreAnalysis {
    #[serde(default)]
    pub store_category: String,
    #[serde(default)]
    pub estimated_tables: f64,
    #[serde(default)]
    pub estimated_hall_size: f64,
    #[serde(default)]
    pub estimated_kitchen_size: f64,
    #[serde(default)]
    pub workflow_issue: String,
}

/// AI 어드바이저가 돌려주는 전체 분석 결과. 재계산의 초기값으로만 쓴다.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    #[serde(default)]
    pub store_analysis: StoreAnalysis,
    pub current_cost: CurrentCost,
    pub automation_plan: AutomationPlan,
    #[serde(default)]
    pub report_text: String,
}

/// 초기값 파일 로드 오류.
#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("분석 결과 파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    #[error("분석 결과 JSON 파싱 오류: {0}")]
    Json(#[from] serde_json::Error),
}

impl AnalysisResult {
    pub fn from_json_str(src: &str) -> Result<Self, SeedError> {
        Ok(serde_json::from_str(src)?)
    }

    pub fn load(path: &std::path::Path) -> Result<Self, SeedError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }
}
