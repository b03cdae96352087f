//! 매장 자동화 장비 도입 계획의 비용/ROI 재계산 엔진을 라이브러리로 분리하여 CLI와 다른 화면에서 함께 쓴다.

pub mod app;
pub mod catalog;
pub mod comparison;
pub mod config;
pub mod editor;
pub mod engine;
pub mod i18n;
pub mod labor;
pub mod plan;
pub mod report;
pub mod resolver;
pub mod ui_cli;
