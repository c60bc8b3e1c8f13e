use benchmark_runner::menu::{parse_scripted_keys, ListExit, ListSelector, MenuKey};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

fn selector(items: &[&str]) -> ListSelector {
    ListSelector::new(items.iter().map(|item| item.to_string()).collect())
}

fn press_all(list: &mut ListSelector, keys: &[MenuKey]) -> Option<ListExit> {
    let mut exit = None;
    for key in keys {
        exit = list.handle_key(*key);
    }
    exit
}

#[test]
fn menu_list_module_cursor_stays_in_bounds() {
    let mut list = selector(&["go", "rust", "ts"]);
    press_all(&mut list, &[MenuKey::Up, MenuKey::Up]);
    assert_eq!(list.cursor(), 0);
    press_all(
        &mut list,
        &[MenuKey::Down, MenuKey::Char('j'), MenuKey::Down, MenuKey::Down],
    );
    assert_eq!(list.cursor(), 2);
    press_all(&mut list, &[MenuKey::Char('k')]);
    assert_eq!(list.cursor(), 1);
}

#[test]
fn menu_list_module_quick_selects_by_ordinal() {
    let mut list = selector(&["go", "rust", "ts"]);
    let exit = press_all(&mut list, &[MenuKey::Char('2'), MenuKey::Enter]);
    assert_eq!(exit, Some(ListExit::Selected(1)));
    assert_eq!(list.item(1), Some("rust"));
}

#[test]
fn menu_list_module_rejects_out_of_range_and_keeps_running() {
    let mut list = selector(&["a", "b"]);
    let exit = press_all(&mut list, &[MenuKey::Char('9'), MenuKey::Enter]);
    assert_eq!(exit, None);
    assert_eq!(
        list.error_message(),
        Some("Invalid selection: 9 (valid: 1-2)")
    );

    assert_eq!(list.handle_key(MenuKey::Down), None);
    assert_eq!(list.error_message(), None);
    assert_eq!(list.handle_key(MenuKey::Enter), Some(ListExit::Selected(1)));
}

#[test]
fn menu_list_module_navigation_discards_pending_digits() {
    let mut list = selector(&["a", "b", "c"]);
    press_all(&mut list, &[MenuKey::Char('3'), MenuKey::Down]);
    assert_eq!(list.numeric_buffer(), "");
    assert_eq!(list.handle_key(MenuKey::Enter), Some(ListExit::Selected(1)));
}

#[test]
fn menu_list_module_quits_on_q_and_interrupt() {
    let mut list = selector(&["a"]);
    assert_eq!(list.handle_key(MenuKey::Char('q')), Some(ListExit::Cancelled));

    let mut list = selector(&["a"]);
    assert_eq!(list.handle_key(MenuKey::Interrupt), Some(ListExit::Cancelled));
}

#[test]
fn menu_list_module_maps_terminal_keys() {
    let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
    assert_eq!(MenuKey::from_key_event(ctrl_c), Some(MenuKey::Interrupt));

    let plain = KeyEvent::new(KeyCode::Char('7'), KeyModifiers::NONE);
    assert_eq!(MenuKey::from_key_event(plain), Some(MenuKey::Char('7')));

    let mut release = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
    release.kind = KeyEventKind::Release;
    assert_eq!(MenuKey::from_key_event(release), None);
}

#[test]
fn menu_list_module_parses_scripted_keys() {
    let keys = parse_scripted_keys("down, 2 ,enter,esc,space,ctrl-c").expect("parse keys");
    assert_eq!(
        keys,
        vec![
            MenuKey::Down,
            MenuKey::Char('2'),
            MenuKey::Enter,
            MenuKey::Escape,
            MenuKey::Char(' '),
            MenuKey::Interrupt,
        ]
    );

    let err = parse_scripted_keys("down,pageup").expect_err("unknown token");
    assert!(err.contains("pageup"), "{err}");
}
