use std::io::{self, Write};
use std::path::Path;

use crate::app::{self, AppError};
use crate::editor::{AddOutcome, CostTypeChange, PlanEditor};
use crate::i18n::{keys, Translator};
use crate::plan::AnalysisResult;
use crate::report;

/// 편집 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorChoice {
    Show,
    Add,
    Remove,
    ToggleCostType,
    Quantity,
    Save,
    Exit,
}

/// 편집 메뉴를 표시하고 선택값을 반환한다.
pub fn editor_menu(tr: &Translator) -> Result<EditorChoice, AppError> {
    println!("{}", tr.t(keys::EDITOR_MENU_TITLE));
    for key in [
        keys::EDITOR_MENU_SHOW,
        keys::EDITOR_MENU_ADD,
        keys::EDITOR_MENU_REMOVE,
        keys::EDITOR_MENU_TOGGLE,
        keys::EDITOR_MENU_QUANTITY,
        keys::EDITOR_MENU_SAVE,
        keys::EDITOR_MENU_EXIT,
    ] {
        println!("{}", tr.t(key));
    }
    loop {
        let sel = read_line(tr.t(keys::PROMPT_MENU_SELECT))?;
        match sel.trim() {
            "1" => return Ok(EditorChoice::Show),
            "2" => return Ok(EditorChoice::Add),
            "3" => return Ok(EditorChoice::Remove),
            "4" => return Ok(EditorChoice::ToggleCostType),
            "5" => return Ok(EditorChoice::Quantity),
            "6" => return Ok(EditorChoice::Save),
            "0" => return Ok(EditorChoice::Exit),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// 편집 메인 루프를 실행한다.
pub fn run_editor(
    seed: &AnalysisResult,
    editor: &mut PlanEditor<'_>,
    tr: &Translator,
) -> Result<(), AppError> {
    print!("{}", report::render_dashboard(seed, editor, tr));
    loop {
        match editor_menu(tr)? {
            EditorChoice::Show => print!("{}", report::render_dashboard(seed, editor, tr)),
            EditorChoice::Add => handle_add(editor, tr)?,
            EditorChoice::Remove => {
                if let Some(idx) = read_index(tr.t(keys::PROMPT_ITEM_INDEX))? {
                    match editor.remove(idx) {
                        Some(_) => println!("{}", tr.t(keys::MSG_REMOVED)),
                        None => println!("{}", tr.t(keys::INVALID_INDEX)),
                    }
                }
            }
            EditorChoice::ToggleCostType => {
                if let Some(idx) = read_index(tr.t(keys::PROMPT_ITEM_INDEX))? {
                    match editor.toggle_cost_type(idx) {
                        Some(CostTypeChange::StalePrice) => {
                            println!("{}", tr.t(keys::MSG_STALE_PRICE))
                        }
                        Some(_) => println!("{}", tr.t(keys::MSG_REPRICED)),
                        None => println!("{}", tr.t(keys::INVALID_INDEX)),
                    }
                }
            }
            EditorChoice::Quantity => {
                if let Some(idx) = read_index(tr.t(keys::PROMPT_ITEM_INDEX))? {
                    if idx >= editor.items().len() {
                        println!("{}", tr.t(keys::INVALID_INDEX));
                        continue;
                    }
                    let input = read_line(tr.t(keys::PROMPT_QUANTITY))?;
                    if let Some(qty) = editor.set_quantity_input(idx, &input) {
                        println!("{} {qty}", tr.t(keys::MSG_QUANTITY_SET));
                    }
                }
            }
            EditorChoice::Save => {
                let path = read_line(tr.t(keys::PROMPT_SAVE_PATH))?;
                let path = Path::new(path.trim());
                app::save_report(path, seed, editor)?;
                println!("{} {}", tr.t(keys::MSG_SAVED), path.display());
            }
            EditorChoice::Exit => {
                println!("{}", tr.t(keys::APP_EXIT));
                break;
            }
        }
    }
    Ok(())
}

fn handle_add(editor: &mut PlanEditor<'_>, tr: &Translator) -> Result<(), AppError> {
    let catalog = editor.catalog();
    print!("{}", report::render_catalog(catalog, tr));
    let Some(idx) = read_index(tr.t(keys::PROMPT_CATALOG_INDEX))? else {
        return Ok(());
    };
    let Some(def) = catalog.equipment().get(idx) else {
        println!("{}", tr.t(keys::INVALID_INDEX));
        return Ok(());
    };
    match editor.add(&def.selection_label()) {
        Some(AddOutcome::Appended(_)) => println!("{}", tr.t(keys::MSG_ADDED)),
        Some(AddOutcome::Replaced(_)) => println!("{}", tr.t(keys::MSG_REPLACED)),
        None => println!("{}", tr.t(keys::INVALID_INDEX)),
    }
    Ok(())
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf)?;
    Ok(buf)
}

/// 1부터 시작하는 번호를 읽어 0 기반 인덱스로 돌려준다. 빈 입력이나 잘못된 번호는 `None`.
fn read_index(prompt: &str) -> Result<Option<usize>, AppError> {
    let s = read_line(prompt)?;
    Ok(s.trim()
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1)))
}
