//! 자유 텍스트 장비명을 카탈로그 장비군으로 되돌린다.
//!
//! AI 추천 결과나 사용자가 바꾼 이름은 단가표 표기와 정확히 맞지 않는 경우가 많다.
//! 판정 순서는 고정이며 먼저 맞는 규칙이 이긴다.
//!
//! 1. `"{장비군} - {모델}"` 드롭다운 표기와 완전 일치
//! 2. 이름에 모델명 또는 제조사명이 포함됨 (단가표 순서상 첫 장비)
//! 3. 이름에 장비군 문자열이 포함됨
//! 4. 모두 실패하면 `None` ("기타"로 표시, 절감액 0)

use crate::catalog::{Catalog, EquipmentDefinition};

/// 어떤 규칙으로 장비군이 결정되었는지.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchRule {
    SelectionLabel,
    ModelOrMaker,
    CategoryName,
}

/// 판정 결과.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution<'a> {
    pub category: &'a str,
    pub rule: MatchRule,
}

/// 장비명에 해당하는 장비군을 찾는다.
pub fn resolve_category<'a>(catalog: &'a Catalog, name: &str) -> Option<&'a str> {
    resolve(catalog, name).map(|r| r.category)
}

/// [`resolve_category`]와 같지만 적용된 규칙까지 돌려준다.
pub fn resolve<'a>(catalog: &'a Catalog, name: &str) -> Option<Resolution<'a>> {
    if let Some(def) = catalog.find_by_label(name) {
        return Some(Resolution {
            category: &def.category,
            rule: MatchRule::SelectionLabel,
        });
    }
    if let Some(def) = find_by_model_or_maker(catalog, name) {
        return Some(Resolution {
            category: &def.category,
            rule: MatchRule::ModelOrMaker,
        });
    }
    catalog
        .categories()
        .into_iter()
        .find(|cat| contains(name, cat))
        .map(|category| Resolution {
            category,
            rule: MatchRule::CategoryName,
        })
}

/// 이름에 모델명이나 제조사명이 들어 있는 첫 장비.
pub fn find_by_model_or_maker<'a>(
    catalog: &'a Catalog,
    name: &str,
) -> Option<&'a EquipmentDefinition> {
    catalog
        .equipment()
        .iter()
        .find(|e| contains(name, &e.model) || contains(name, &e.maker))
}

/// 결제 방식 전환 시 가격을 다시 매길 장비를 찾는다.
///
/// 모델/제조사 포함 여부가 우선이고, 실패하면 장비군을 판정해 그 장비군의 첫 장비를 쓴다.
pub fn find_for_repricing<'a>(
    catalog: &'a Catalog,
    name: &str,
) -> Option<&'a EquipmentDefinition> {
    find_by_model_or_maker(catalog, name).or_else(|| {
        resolve_category(catalog, name).and_then(|cat| catalog.first_in_category(cat))
    })
}

// 빈 문자열은 모든 이름에 포함되므로 매칭 대상에서 뺀다.
fn contains(haystack: &str, needle: &str) -> bool {
    !needle.is_empty() && haystack.contains(needle)
}
