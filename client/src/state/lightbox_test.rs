use super::*;

fn gallery() -> Lightbox {
    Lightbox::new(
        ["marudhamalai", "siruvani", "perur"]
            .into_iter()
            .map(|name| LightboxItem { src: format!("img/{name}.jpg"), caption: name.to_owned() })
            .collect(),
    )
}

#[test]
fn opens_at_requested_item() {
    let mut lightbox = gallery();
    assert!(!lightbox.is_open());
    assert_eq!(lightbox.open(1).map(|item| item.caption.as_str()), Some("siruvani"));
    assert!(lightbox.is_open());
}

#[test]
fn out_of_range_open_is_ignored() {
    let mut lightbox = gallery();
    assert_eq!(lightbox.open(9), None);
    assert!(!lightbox.is_open());
}

#[test]
fn navigation_wraps_both_ways() {
    let mut lightbox = gallery();
    lightbox.open(2);
    assert_eq!(lightbox.next().map(|item| item.caption.as_str()), Some("marudhamalai"));
    assert_eq!(lightbox.previous().map(|item| item.caption.as_str()), Some("perur"));
    assert_eq!(lightbox.previous().map(|item| item.caption.as_str()), Some("siruvani"));
}

#[test]
fn keys_do_nothing_while_closed() {
    let mut lightbox = gallery();
    assert!(!lightbox.handle_key(LightboxKey::Next));
    assert!(!lightbox.handle_key(LightboxKey::Close));
    assert_eq!(lightbox.current(), None);
}

#[test]
fn escape_closes() {
    let mut lightbox = gallery();
    lightbox.open(0);
    let key = LightboxKey::from_key("Escape").unwrap();
    assert!(lightbox.handle_key(key));
    assert!(!lightbox.is_open());
    assert_eq!(LightboxKey::from_key("Enter"), None);
}
