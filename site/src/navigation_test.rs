use super::*;

fn nav() -> Navigation {
    Navigation::from_layout(&SiteLayout::standard()).unwrap()
}

fn active_pages(nav: &Navigation) -> Vec<&str> {
    nav.pages().iter().filter(|p| p.active).map(|p| p.id.as_str()).collect()
}

fn active_links(nav: &Navigation) -> Vec<&str> {
    nav.links().iter().filter(|l| l.active).map(|l| l.id.as_str()).collect()
}

// =============================================================
// select_page
// =============================================================

#[test]
fn initial_page_is_active_on_build() {
    let nav = nav();
    assert_eq!(nav.active_page(), Some("home"));
    assert_eq!(active_links(&nav), ["nav-home"]);
    assert!(!nav.menu_open());
}

#[test]
fn select_page_activates_exactly_one_pair() {
    let mut nav = nav();
    nav.select_page("contact").unwrap();
    assert_eq!(active_pages(&nav), ["contact"]);
    assert_eq!(active_links(&nav), ["nav-contact"]);
    assert!(nav.is_page_active("contact"));
    assert!(!nav.is_page_active("home"));
    assert!(nav.is_link_active("nav-contact"));
}

#[test]
fn select_page_twice_matches_once() {
    let mut once = nav();
    once.select_page("about").unwrap();

    let mut twice = nav();
    twice.select_page("about").unwrap();
    twice.select_page("about").unwrap();

    assert_eq!(once, twice);
    assert_eq!(active_pages(&twice), ["about"]);
}

#[test]
fn select_page_closes_mobile_menu() {
    let mut nav = nav();
    assert!(nav.toggle_mobile_menu());
    nav.select_page("services").unwrap();
    assert!(!nav.menu_open());
}

#[test]
fn unknown_page_fails_and_leaves_state() {
    let mut nav = nav();
    nav.select_page("about").unwrap();
    nav.toggle_mobile_menu();
    let before = nav.clone();

    assert_eq!(nav.select_page("blog"), Err(SiteError::PageNotFound("blog".into())));
    assert_eq!(nav, before);
}

// =============================================================
// mobile menu
// =============================================================

#[test]
fn toggle_flips_menu() {
    let mut nav = nav();
    assert!(nav.toggle_mobile_menu());
    assert!(!nav.toggle_mobile_menu());
}

#[test]
fn outside_click_closes_menu() {
    let mut nav = nav();
    nav.toggle_mobile_menu();
    nav.close_mobile_menu_if_outside(ClickTarget::Outside);
    assert!(!nav.menu_open());
}

#[test]
fn inside_click_keeps_menu_open() {
    let mut nav = nav();
    nav.toggle_mobile_menu();
    nav.close_mobile_menu_if_outside(ClickTarget::InsideNav);
    assert!(nav.menu_open());
}

#[test]
fn click_target_from_flag() {
    assert_eq!(ClickTarget::from_inside_nav(true), ClickTarget::InsideNav);
    assert_eq!(ClickTarget::from_inside_nav(false), ClickTarget::Outside);
}

#[test]
fn invalid_layout_is_rejected_on_build() {
    let layout = SiteLayout { pages: vec![], nav_links: vec![], initial_page: "home".into() };
    assert_eq!(Navigation::from_layout(&layout), Err(SiteError::EmptyLayout));
}
