use super::*;

#[test]
fn current_page_uses_final_segment() {
    assert_eq!(current_page("/site/explore.html", "index.html"), "explore.html");
    assert_eq!(current_page("contact.html", "index.html"), "contact.html");
}

#[test]
fn current_page_defaults_when_path_is_a_directory() {
    assert_eq!(current_page("/", "index.html"), "index.html");
    assert_eq!(current_page("", "index.html"), "index.html");
    assert_eq!(current_page("/site/", "index.html"), "index.html");
}

#[test]
fn marks_exactly_matching_links() {
    let hrefs = [Some("index.html"), Some("explore.html"), None, Some("explore.html")];
    assert_eq!(active_links(hrefs, "explore.html"), vec![false, true, false, true]);
}

#[test]
fn no_prefix_or_partial_matching() {
    let hrefs = [Some("explore.html#food"), Some("./explore.html"), Some("explore")];
    assert_eq!(active_links(hrefs, "explore.html"), vec![false, false, false]);
}

#[test]
fn absent_index_marks_nothing() {
    let hrefs = [Some("about.html"), Some("contact.html")];
    let flags = active_links(hrefs, current_page("/", "index.html"));
    assert!(flags.iter().all(|active| !active));
}

#[test]
fn menu_toggle_flips_and_close_converges() {
    let mut menu = MenuState::default();
    assert!(!menu.is_open());
    assert!(menu.toggle());
    assert!(menu.close());
    assert!(!menu.is_open());
    assert!(!menu.close(), "closing a closed menu is a no-op");
    assert!(menu.toggle());
    assert!(!menu.toggle());
}

#[test]
fn outside_click_closes_an_open_menu() {
    let mut menu = MenuState::default();
    menu.toggle();
    assert!(!menu.on_document_click(true), "clicks inside the nav are left alone");
    assert!(menu.is_open());
    assert!(menu.on_document_click(false));
    assert!(!menu.is_open());
    assert!(!menu.on_document_click(false), "already closed");
}

#[test]
fn every_close_path_converges_to_closed() {
    let closers: [fn(&mut MenuState); 3] = [
        |menu| {
            menu.close();
        },
        |menu| {
            menu.on_document_click(false);
        },
        |menu| {
            if menu.is_open() {
                menu.toggle();
            }
        },
    ];
    for close in closers {
        let mut menu = MenuState::default();
        menu.toggle();
        close(&mut menu);
        assert_eq!(menu, MenuState::default());
    }
}
