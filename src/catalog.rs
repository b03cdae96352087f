//! 자동화 장비 단가표와 장비군별 인력 절감 기준을 제공한다.
//! 가격 단위는 만원(일시불) / 만원·월(렌탈)이며 값은 참고용이다.
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::Path;

/// 절감 대상 인력 유형.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EmployeeClass {
    /// 정규직
    #[serde(rename = "FT")]
    FullTime,
    /// 아르바이트
    #[serde(rename = "PT")]
    PartTime,
}

/// 단가표의 장비 한 줄.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquipmentDefinition {
    pub category: String,
    pub maker: String,
    pub model: String,
    /// 일시불 가격 [만원]
    pub price_one_time: f64,
    /// 렌탈료 [만원/월]
    pub price_rental: f64,
}

impl EquipmentDefinition {
    /// 장비 추가 드롭다운에 쓰이는 `"{장비군} - {모델}"` 표기.
    pub fn selection_label(&self) -> String {
        format!("{} - {}", self.category, self.model)
    }

    /// 새로 추가된 라인 아이템의 이름(`"{제조사} {모델}"`).
    pub fn display_name(&self) -> String {
        format!("{} {}", self.maker, self.model)
    }
}

/// 장비 1대당 절감 인원과 대상 인력 유형.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LaborSavingRule {
    /// 대당 절감 인원(명)
    pub amount: f64,
    #[serde(rename = "type")]
    pub class: EmployeeClass,
}

impl LaborSavingRule {
    /// 규칙이 없는 장비군에 적용하는 기본값(절감 없음, PT 귀속).
    pub const NONE: LaborSavingRule = LaborSavingRule {
        amount: 0.0,
        class: EmployeeClass::PartTime,
    };
}

/// 카탈로그 파일/로드 오류.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("카탈로그 파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    #[error("카탈로그 파싱 오류: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("중복된 장비: {category} / {model}")]
    Duplicate { category: String, model: String },
}

/// 장비 단가표 + 인력 절감 기준 묶음.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub equipment: Vec<EquipmentDefinition>,
    #[serde(default)]
    pub labor_saving: BTreeMap<String, LaborSavingRule>,
}

impl Catalog {
    /// (장비군, 모델) 중복을 검사한 뒤 카탈로그를 만든다.
    pub fn new(
        equipment: Vec<EquipmentDefinition>,
        labor_saving: BTreeMap<String, LaborSavingRule>,
    ) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for def in &equipment {
            if !seen.insert((def.category.as_str(), def.model.as_str())) {
                return Err(CatalogError::Duplicate {
                    category: def.category.clone(),
                    model: def.model.clone(),
                });
            }
        }
        Ok(Self {
            equipment,
            labor_saving,
        })
    }

    /// 내장 단가표.
    pub fn built_in() -> Self {
        let equipment = BUILT_IN_EQUIPMENT
            .iter()
            .map(|e| EquipmentDefinition {
                category: e.category.to_string(),
                maker: e.maker.to_string(),
                model: e.model.to_string(),
                price_one_time: e.price_one_time,
                price_rental: e.price_rental,
            })
            .collect();
        let labor_saving = BUILT_IN_LABOR_SAVING
            .iter()
            .map(|(cat, rule)| (cat.to_string(), *rule))
            .collect();
        Self {
            equipment,
            labor_saving,
        }
    }

    /// TOML 문자열에서 카탈로그를 읽는다.
    pub fn from_toml_str(src: &str) -> Result<Self, CatalogError> {
        let raw: Catalog = toml::from_str(src)?;
        Self::new(raw.equipment, raw.labor_saving)
    }

    /// TOML 카탈로그 파일을 로드한다.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn equipment(&self) -> &[EquipmentDefinition] {
        &self.equipment
    }

    /// 카탈로그 순서를 유지한 중복 없는 장비군 목록.
    pub fn categories(&self) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::new();
        for def in &self.equipment {
            if !out.contains(&def.category.as_str()) {
                out.push(&def.category);
            }
        }
        out
    }

    /// 드롭다운 표기와 정확히 일치하는 장비를 찾는다.
    pub fn find_by_label(&self, label: &str) -> Option<&EquipmentDefinition> {
        self.equipment.iter().find(|e| e.selection_label() == label)
    }

    /// 장비군의 첫 번째 장비.
    pub fn first_in_category(&self, category: &str) -> Option<&EquipmentDefinition> {
        self.equipment.iter().find(|e| e.category == category)
    }

    /// 장비군의 절감 기준. 없으면 [`LaborSavingRule::NONE`].
    pub fn labor_rule(&self, category: Option<&str>) -> LaborSavingRule {
        category
            .and_then(|c| self.labor_saving.get(c))
            .copied()
            .unwrap_or(LaborSavingRule::NONE)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::built_in()
    }
}

struct BuiltInEquipment {
    category: &'static str,
    maker: &'static str,
    model: &'static str,
    price_one_time: f64,
    price_rental: f64,
}

const fn equip(
    category: &'static str,
    maker: &'static str,
    model: &'static str,
    price_one_time: f64,
    price_rental: f64,
) -> BuiltInEquipment {
    BuiltInEquipment {
        category,
        maker,
        model,
        price_one_time,
        price_rental,
    }
}

const fn pt(amount: f64) -> LaborSavingRule {
    LaborSavingRule {
        amount,
        class: EmployeeClass::PartTime,
    }
}

const fn ft(amount: f64) -> LaborSavingRule {
    LaborSavingRule {
        amount,
        class: EmployeeClass::FullTime,
    }
}

const BUILT_IN_EQUIPMENT: &[BuiltInEquipment] = &[
    equip("서빙로봇", "푸두봇", "푸두봇", 1600.0, 30.0),
    equip("서빙로봇", "베어로보틱스", "서비(Servi)", 2200.0, 45.0),
    equip("서빙로봇", "로보와이드", "서브봇 S1", 1300.0, 19.0),
    equip("테이블오더", "KT", "KT오더", 200.0, 3.0),
    equip("테이블오더", "페이히어", "페이히어오더", 160.0, 2.0),
    equip("키오스크", "아임유", "KIOSK T-series", 200.0, 2.5),
    equip("키오스크", "삼성전자", "KM24A 키오스크", 230.0, 2.7),
    equip("자동후라이어", "경일주방", "경일 후라이어 - 대형", 16000.0, 399.0),
    equip("자동후라이어", "경일주방", "경일 후라이어 - 소형", 2000.0, 50.0),
    equip("자동볶음기", "경일주방", "경일 자동볶음기 - 소형", 2000.0, 50.0),
    equip("자동볶음기", "경일주방", "경일 자동볶음기 - 중형", 4000.0, 100.0),
    equip("청소로봇", "가우시움", "가우시움 (청소봇)", 2000.0, 50.0),
    equip("청소로봇", "클린테크", "클린테크 (청소봇)", 3000.0, 60.0),
    equip("청소로봇", "푸두청소봇", "푸두청소봇 (청소봇)", 1500.0, 40.0),
    equip("맥주자동디스펜서", "히오자키", "맥주자동디스펜서 4구", 1400.0, 35.0),
    equip("초음파세척기", "경일주방", "초음파세척 모듈형", 1500.0, 38.0),
    equip("초음파세척기", "경일주방", "초음파세척 중형", 3200.0, 180.0),
    equip("커피 자동화로봇", "Teatime", "Teatime-1", 3500.0, 85.0),
];

// 범위로 주어진 기준(예: 0.3~0.5명)은 중간값을 쓴다.
const BUILT_IN_LABOR_SAVING: &[(&str, LaborSavingRule)] = &[
    ("서빙로봇", pt(0.4)),
    ("테이블오더", pt(0.2)),
    ("키오스크", pt(0.3)),
    ("자동후라이어", ft(0.5)),
    ("자동볶음기", ft(0.4)),
    ("청소로봇", pt(0.3)),
    ("초음파세척기", pt(0.3)),
    ("맥주자동디스펜서", pt(0.4)),
    ("커피 자동화로봇", pt(0.5)),
];
