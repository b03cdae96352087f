//! 장비명 → 장비군 판정 순서 테스트.
use std::collections::BTreeMap;

use store_automation_roi::catalog::{Catalog, EquipmentDefinition};
use store_automation_roi::resolver::{self, MatchRule};

fn def(category: &str, maker: &str, model: &str) -> EquipmentDefinition {
    EquipmentDefinition {
        category: category.into(),
        maker: maker.into(),
        model: model.into(),
        price_one_time: 100.0,
        price_rental: 5.0,
    }
}

#[test]
fn selection_label_matches_exactly() {
    let catalog = Catalog::built_in();
    let r = resolver::resolve(&catalog, "키오스크 - KM24A 키오스크").expect("label");
    assert_eq!(r.category, "키오스크");
    assert_eq!(r.rule, MatchRule::SelectionLabel);
}

#[test]
fn maker_substring_resolves() {
    let catalog = Catalog::built_in();
    let r = resolver::resolve(&catalog, "삼성전자 신형 무인 주문기").expect("maker");
    assert_eq!(r.category, "키오스크");
    assert_eq!(r.rule, MatchRule::ModelOrMaker);
}

#[test]
fn category_substring_is_last_resort() {
    let catalog = Catalog::built_in();
    let r = resolver::resolve(&catalog, "대형 서빙로봇 2대").expect("category");
    assert_eq!(r.category, "서빙로봇");
    assert_eq!(r.rule, MatchRule::CategoryName);
}

#[test]
fn unknown_name_is_unresolved() {
    let catalog = Catalog::built_in();
    assert_eq!(resolver::resolve_category(&catalog, "식기 건조대"), None);
    assert_eq!(resolver::resolve_category(&catalog, ""), None);
}

#[test]
fn model_match_beats_category_text() {
    // 청소로봇이라는 글자가 있어도 모델명(푸두봇)이 먼저 잡힌다.
    let catalog = Catalog::built_in();
    assert_eq!(
        resolver::resolve_category(&catalog, "청소로봇 옆 푸두봇"),
        Some("서빙로봇")
    );
}

#[test]
fn exact_label_beats_model_substring() {
    let catalog = Catalog::new(
        vec![def("세척기", "나", "로봇"), def("로봇", "가", "베타")],
        BTreeMap::new(),
    )
    .expect("catalog");
    assert_eq!(resolver::resolve_category(&catalog, "로봇 - 베타"), Some("로봇"));
    assert_eq!(resolver::resolve_category(&catalog, "로봇 베타"), Some("세척기"));
}

#[test]
fn empty_maker_does_not_match_everything() {
    let catalog = Catalog::new(vec![def("장비", "", "모델A")], BTreeMap::new()).expect("catalog");
    assert_eq!(resolver::resolve_category(&catalog, "무관한 이름"), None);
}

#[test]
fn repricing_prefers_model_or_maker_then_category() {
    let catalog = Catalog::built_in();

    // 제조사만 맞으면 단가표 순서상 첫 장비(대형 후라이어)가 잡힌다.
    let by_maker = resolver::find_for_repricing(&catalog, "경일주방 특주 모델").expect("maker");
    assert_eq!(by_maker.model, "경일 후라이어 - 대형");

    let by_category = resolver::find_for_repricing(&catalog, "초음파세척기 신형").expect("category");
    assert_eq!(by_category.model, "초음파세척 모듈형");
    assert_eq!(by_category.price_rental, 38.0);

    assert!(resolver::find_for_repricing(&catalog, "식기 건조대").is_none());
}
