use std::fs;

use quest_core::config::Config;
use quest_core::shell::{AppShell, Effect, InputEvent};
use quest_core::store::ChecklistStore;
use quest_core::view::{RowRegion, ViewEffect};
use tempfile::tempdir;

#[test]
fn capacity_three_add_toggle_overflow_scenario() {
    let temp = tempdir().expect("tempdir");
    let rc = temp.path().join("questrc");
    fs::write(&rc, "list.capacity = 3\nwindow.width = 600\n").expect("write questrc");

    let cfg = Config::load(Some(&rc)).expect("load config");
    let mut shell = AppShell::new(&cfg);

    let effects = shell.handle(InputEvent::AddSubmitted {
        text: "buy milk".to_string(),
    });
    assert!(effects.contains(&Effect::View(ViewEffect::UpdateLabel {
        index: 0,
        text: "buy milk".to_string(),
    })));

    shell.handle(InputEvent::AddSubmitted {
        text: "walk dog".to_string(),
    });
    assert_eq!(shell.store().rows()[1].text, "walk dog");

    shell.handle(InputEvent::RowClicked {
        index: 0,
        region: RowRegion::Checkbox,
    });
    assert!(shell.store().rows()[0].completed);
    assert!(!shell.store().rows()[1].completed);

    shell.handle(InputEvent::AddSubmitted {
        text: "x".to_string(),
    });
    assert_eq!(shell.store().first_empty_slot(), None);

    let rejected = shell.handle(InputEvent::AddSubmitted {
        text: "y".to_string(),
    });
    assert_eq!(rejected, vec![Effect::View(ViewEffect::AddRejected)]);

    let rows: Vec<&str> = shell
        .store()
        .rows()
        .iter()
        .map(|row| row.text.as_str())
        .collect();
    assert_eq!(rows, vec!["buy milk", "walk dog", "x"]);
}

#[test]
fn edit_session_survives_a_full_chrome_interaction() {
    let mut store = ChecklistStore::new(12);
    store.add("draft groceries").expect("add");

    let seed = store.begin_edit(0).expect("begin edit");
    assert_eq!(seed, "draft groceries");
    store.set_draft("draft groceries and fruit");

    // clicking another row's label while the editor is open commits the
    // live draft before the new editor opens
    store.begin_edit(3).expect("begin other edit");
    assert_eq!(store.rows()[0].text, "draft groceries and fruit");

    store.commit_edit("second row text");
    assert_eq!(store.rows()[3].text, "second row text");
    assert_eq!(store.editing_index(), None);
}
