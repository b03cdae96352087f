use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";
    pub const UNIT_MANWON: &str = "general.unit_manwon";
    pub const UNIT_MONTHS: &str = "general.unit_months";
    pub const UNIT_PERSONS: &str = "general.unit_persons";
    pub const FULL_TIME: &str = "general.full_time";
    pub const PART_TIME: &str = "general.part_time";

    pub const REPORT_TITLE: &str = "report.title";
    pub const STORE_CATEGORY: &str = "report.store_category";
    pub const STORE_TABLES: &str = "report.store_tables";
    pub const STORE_HALL_SIZE: &str = "report.store_hall_size";
    pub const STORE_KITCHEN_SIZE: &str = "report.store_kitchen_size";
    pub const WORKFLOW_ISSUE: &str = "report.workflow_issue";
    pub const TOTAL_SAVING: &str = "report.total_saving";
    pub const NET_PROFIT_INCREASE: &str = "report.net_profit_increase";
    pub const PAYBACK: &str = "report.payback";
    pub const PAYBACK_UNRECOVERABLE: &str = "report.payback_unrecoverable";
    pub const PAYBACK_IMMEDIATE: &str = "report.payback_immediate";
    pub const TOTAL_INVESTMENT: &str = "report.total_investment";
    pub const EQUIPMENT_COST: &str = "report.equipment_cost";
    pub const REDUCED_HEADCOUNT: &str = "report.reduced_headcount";
    pub const REPORT_TEXT_HEADING: &str = "report.report_text_heading";

    pub const COMPARISON_HEADING: &str = "comparison.heading";
    pub const COMPARISON_CURRENT: &str = "comparison.current";
    pub const COMPARISON_PREDICTED: &str = "comparison.predicted";
    pub const LABOR_COST: &str = "comparison.labor_cost";
    pub const FIXED_COST: &str = "comparison.fixed_cost";
    pub const EQUIPMENT: &str = "comparison.equipment";
    pub const TOTAL_COST: &str = "comparison.total_cost";
    pub const NET_PROFIT: &str = "comparison.net_profit";
    pub const COST_REDUCTION: &str = "comparison.cost_reduction";

    pub const DEVICES_HEADING: &str = "devices.heading";
    pub const DEVICES_EMPTY: &str = "devices.empty";
    pub const CATEGORY_OTHER: &str = "devices.category_other";
    pub const COST_TYPE_MONTHLY: &str = "devices.cost_type_monthly";
    pub const COST_TYPE_ONE_TIME: &str = "devices.cost_type_one_time";
    pub const QUANTITY: &str = "devices.quantity";
    pub const MONTHLY_SAVING: &str = "devices.monthly_saving";
    pub const REASON: &str = "devices.reason";

    pub const CATALOG_HEADING: &str = "catalog.heading";
    pub const CATALOG_ONE_TIME: &str = "catalog.one_time";
    pub const CATALOG_RENTAL: &str = "catalog.rental";
    pub const CATALOG_LABOR_HEADING: &str = "catalog.labor_heading";

    pub const EDITOR_MENU_TITLE: &str = "editor.title";
    pub const EDITOR_MENU_SHOW: &str = "editor.show";
    pub const EDITOR_MENU_ADD: &str = "editor.add";
    pub const EDITOR_MENU_REMOVE: &str = "editor.remove";
    pub const EDITOR_MENU_TOGGLE: &str = "editor.toggle";
    pub const EDITOR_MENU_QUANTITY: &str = "editor.quantity";
    pub const EDITOR_MENU_SAVE: &str = "editor.save";
    pub const EDITOR_MENU_EXIT: &str = "editor.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const PROMPT_ITEM_INDEX: &str = "prompt.item_index";
    pub const PROMPT_CATALOG_INDEX: &str = "prompt.catalog_index";
    pub const PROMPT_QUANTITY: &str = "prompt.quantity";
    pub const PROMPT_SAVE_PATH: &str = "prompt.save_path";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";
    pub const INVALID_INDEX: &str = "error.invalid_index";

    pub const MSG_ADDED: &str = "message.added";
    pub const MSG_REPLACED: &str = "message.replaced";
    pub const MSG_REMOVED: &str = "message.removed";
    pub const MSG_REPRICED: &str = "message.repriced";
    pub const MSG_STALE_PRICE: &str = "message.stale_price";
    pub const MSG_QUANTITY_SET: &str = "message.quantity_set";
    pub const MSG_SAVED: &str = "message.saved";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("en") {
            Language::En
        } else {
            Language::Ko
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// 언어 코드(ko/en)에 따라 번역기를 생성한다. 알 수 없는 코드는 ko로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리를 받아서 번역기를 생성한다.
    /// 디렉터리가 없거나 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&Path>) -> Self {
        let overrides = pack_dir.and_then(|dir| load_overrides(dir, lang_code));
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    /// 번역을 가져온다. 언어팩 > 내장 문자열 순이며 영어 번역이 없으면 한국어로 폴백한다.
    pub fn t<'a>(&'a self, key: &str) -> &'a str {
        if let Some(v) = self.overrides.as_ref().and_then(|m| m.get(key)) {
            return v;
        }
        match self.lang {
            Language::En => en(key).unwrap_or_else(|| ko(key)),
            Language::Ko => ko(key),
        }
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: Option<&str>, config_lang: Option<&str>) -> String {
    cli_arg
        .and_then(normalize_lang)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "ko".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "auto" | "" => None,
        other if other.starts_with("ko") => Some("ko".into()),
        other if other.starts_with("en") => Some("en".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "ko" => Some("ko".into()),
        "en" => Some("en".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(lang) = get_locale().as_deref().and_then(normalize_locale_string) {
        return Some(lang);
    }
    ["LANG", "LC_ALL"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find_map(|v| normalize_locale_string(&v))
}

/// TOML 기반 언어팩을 로드한다. 형식: `[section] key = "value"`, 키는 `section.key`로 평탄화한다.
fn load_overrides(dir: &Path, lang: &str) -> Option<HashMap<String, String>> {
    let content = fs::read_to_string(dir.join(format!("{lang}.toml"))).ok()?;
    parse_toml_to_map(&content)
}

fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Value = toml::from_str(src).ok()?;
    let table = value.as_table()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&key, v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in table {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

fn ko(key: &str) -> &'static str {
    use keys::*;
    match key {
        ERROR_PREFIX => "오류",
        APP_EXIT => "편집을 종료합니다.",
        UNIT_MANWON => "만원",
        UNIT_MONTHS => "개월",
        UNIT_PERSONS => "명",
        FULL_TIME => "정규직",
        PART_TIME => "아르바이트",
        REPORT_TITLE => "\n=== 매장 자동화 ROI 분석 ===",
        STORE_CATEGORY => "업종:",
        STORE_TABLES => "추정 테이블 수:",
        STORE_HALL_SIZE => "홀 크기(평):",
        STORE_KITCHEN_SIZE => "주방 크기(평):",
        WORKFLOW_ISSUE => "동선/구조 분석:",
        TOTAL_SAVING => "월 예상 절감액:",
        NET_PROFIT_INCREASE => "예상 순이익 증가:",
        PAYBACK => "투자 회수 기간 (ROI):",
        PAYBACK_UNRECOVERABLE => "불가",
        PAYBACK_IMMEDIATE => "즉시",
        TOTAL_INVESTMENT => "총 초기 투자비 (CapEx):",
        EQUIPMENT_COST => "장비 월 비용 (렌탈 + 36개월 상각):",
        REDUCED_HEADCOUNT => "예상 절감 인원:",
        REPORT_TEXT_HEADING => "\n-- 종합 분석 리포트 (핵심 요약) --",
        COMPARISON_HEADING => "\n-- 월 운영 비용 구조 비교 --",
        COMPARISON_CURRENT => "현재",
        COMPARISON_PREDICTED => "도입 후",
        LABOR_COST => "인건비",
        FIXED_COST => "고정비",
        EQUIPMENT => "장비 비용",
        TOTAL_COST => "총 비용",
        NET_PROFIT => "순이익",
        COST_REDUCTION => "월 비용 감소:",
        DEVICES_HEADING => "\n-- 장비 추천 상세 --",
        DEVICES_EMPTY => "추천된 장비가 없습니다. 장비를 추가해보세요.",
        CATEGORY_OTHER => "기타",
        COST_TYPE_MONTHLY => "월 렌탈",
        COST_TYPE_ONE_TIME => "일시불",
        QUANTITY => "수량",
        MONTHLY_SAVING => "월 절감",
        REASON => "근거",
        CATALOG_HEADING => "\n-- 장비 단가표 --",
        CATALOG_ONE_TIME => "일시불",
        CATALOG_RENTAL => "렌탈(월)",
        CATALOG_LABOR_HEADING => "\n-- 장비군별 인력 절감 기준 (대당) --",
        EDITOR_MENU_TITLE => "\n=== 장비 추천 편집 ===",
        EDITOR_MENU_SHOW => "1) 결과 보기",
        EDITOR_MENU_ADD => "2) 장비 추가",
        EDITOR_MENU_REMOVE => "3) 장비 삭제",
        EDITOR_MENU_TOGGLE => "4) 결제 방식 전환 (렌탈 ↔ 일시불)",
        EDITOR_MENU_QUANTITY => "5) 수량 변경",
        EDITOR_MENU_SAVE => "6) 결과 JSON 저장",
        EDITOR_MENU_EXIT => "0) 종료",
        PROMPT_MENU_SELECT => "메뉴 선택: ",
        PROMPT_ITEM_INDEX => "장비 번호: ",
        PROMPT_CATALOG_INDEX => "추가할 장비 번호(단가표): ",
        PROMPT_QUANTITY => "수량 (1~99): ",
        PROMPT_SAVE_PATH => "저장 경로: ",
        INVALID_SELECTION_RETRY => "잘못된 입력입니다. 다시 선택하세요.",
        INVALID_INDEX => "해당 번호의 장비가 없습니다.",
        MSG_ADDED => "장비를 추가했습니다.",
        MSG_REPLACED => "같은 장비군의 기존 장비를 교체했습니다 (수량 유지).",
        MSG_REMOVED => "장비를 삭제했습니다.",
        MSG_REPRICED => "단가표 가격으로 다시 계산했습니다.",
        MSG_STALE_PRICE => "단가표에서 장비를 찾지 못해 기존 단가를 유지합니다.",
        MSG_QUANTITY_SET => "수량을 변경했습니다:",
        MSG_SAVED => "저장했습니다:",
        _ => "",
    }
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    let s = match key {
        ERROR_PREFIX => "error",
        APP_EXIT => "Leaving the editor.",
        UNIT_MANWON => "x10k KRW",
        UNIT_MONTHS => "months",
        UNIT_PERSONS => "",
        FULL_TIME => "full-time",
        PART_TIME => "part-time",
        REPORT_TITLE => "\n=== Store Automation ROI ===",
        STORE_CATEGORY => "Store type:",
        STORE_TABLES => "Estimated tables:",
        STORE_HALL_SIZE => "Hall size (pyung):",
        STORE_KITCHEN_SIZE => "Kitchen size (pyung):",
        WORKFLOW_ISSUE => "Workflow notes:",
        TOTAL_SAVING => "Monthly saving:",
        NET_PROFIT_INCREASE => "Net profit increase:",
        PAYBACK => "Payback period (ROI):",
        PAYBACK_UNRECOVERABLE => "not recoverable",
        PAYBACK_IMMEDIATE => "immediate",
        TOTAL_INVESTMENT => "Total investment (CapEx):",
        EQUIPMENT_COST => "Monthly equipment cost (rental + 36-month amortization):",
        REDUCED_HEADCOUNT => "Reduced headcount:",
        REPORT_TEXT_HEADING => "\n-- Advisor report --",
        COMPARISON_HEADING => "\n-- Monthly cost structure --",
        COMPARISON_CURRENT => "current",
        COMPARISON_PREDICTED => "predicted",
        LABOR_COST => "Labor",
        FIXED_COST => "Fixed",
        EQUIPMENT => "Equipment",
        TOTAL_COST => "Total cost",
        NET_PROFIT => "Net profit",
        COST_REDUCTION => "Monthly cost reduction:",
        DEVICES_HEADING => "\n-- Recommended equipment --",
        DEVICES_EMPTY => "No equipment recommended. Add some from the catalog.",
        CATEGORY_OTHER => "other",
        COST_TYPE_MONTHLY => "rental",
        COST_TYPE_ONE_TIME => "purchase",
        QUANTITY => "qty",
        MONTHLY_SAVING => "saving",
        REASON => "reason",
        CATALOG_HEADING => "\n-- Equipment catalog --",
        CATALOG_ONE_TIME => "purchase",
        CATALOG_RENTAL => "rental/mo",
        CATALOG_LABOR_HEADING => "\n-- Labor saving per unit by category --",
        EDITOR_MENU_TITLE => "\n=== Equipment plan editor ===",
        EDITOR_MENU_SHOW => "1) Show results",
        EDITOR_MENU_ADD => "2) Add equipment",
        EDITOR_MENU_REMOVE => "3) Remove equipment",
        EDITOR_MENU_TOGGLE => "4) Toggle cost type (rental <-> purchase)",
        EDITOR_MENU_QUANTITY => "5) Change quantity",
        EDITOR_MENU_SAVE => "6) Save results as JSON",
        EDITOR_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select: ",
        PROMPT_ITEM_INDEX => "Item number: ",
        PROMPT_CATALOG_INDEX => "Catalog number to add: ",
        PROMPT_QUANTITY => "Quantity (1-99): ",
        PROMPT_SAVE_PATH => "Output path: ",
        INVALID_SELECTION_RETRY => "Invalid input, try again.",
        INVALID_INDEX => "No item with that number.",
        MSG_ADDED => "Equipment added.",
        MSG_REPLACED => "Replaced the existing item of the same category (quantity kept).",
        MSG_REMOVED => "Equipment removed.",
        MSG_REPRICED => "Re-priced from the catalog.",
        MSG_STALE_PRICE => "No catalog match; keeping the previous unit cost.",
        MSG_QUANTITY_SET => "Quantity set to",
        MSG_SAVED => "Saved:",
        _ => return None,
    };
    Some(s)
}
