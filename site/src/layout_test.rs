use super::*;

fn page(id: &str) -> PageSpec {
    PageSpec { id: id.to_owned(), title: id.to_uppercase() }
}

fn link(id: &str, page: &str) -> NavLinkSpec {
    NavLinkSpec { id: id.to_owned(), page: page.to_owned(), label: page.to_owned() }
}

// =============================================================
// standard layout
// =============================================================

#[test]
fn standard_layout_is_valid() {
    assert_eq!(SiteLayout::standard().validate(), Ok(()));
}

#[test]
fn standard_layout_links_every_page_in_order() {
    let layout = SiteLayout::standard();
    let pages: Vec<_> = layout.pages.iter().map(|p| p.id.as_str()).collect();
    let targets: Vec<_> = layout.nav_links.iter().map(|l| l.page.as_str()).collect();
    assert_eq!(pages, ["home", "about", "services", "contact"]);
    assert_eq!(targets, pages);
    assert_eq!(layout.initial_page, "home");
}

#[test]
fn nav_link_lookup_by_element_id() {
    let layout = SiteLayout::standard();
    assert_eq!(layout.nav_link("nav-about").map(|l| l.page.as_str()), Some("about"));
    assert!(layout.nav_link("about").is_none());
}

// =============================================================
// validation failures
// =============================================================

#[test]
fn empty_layout_is_rejected() {
    let layout = SiteLayout { pages: vec![], nav_links: vec![], initial_page: "home".into() };
    assert_eq!(layout.validate(), Err(SiteError::EmptyLayout));
}

#[test]
fn duplicate_page_id_is_rejected() {
    let layout = SiteLayout { pages: vec![page("home"), page("home")], nav_links: vec![], initial_page: "home".into() };
    assert_eq!(layout.validate(), Err(SiteError::DuplicateId("home".into())));
}

#[test]
fn page_colliding_with_fixed_element_is_rejected() {
    let layout = SiteLayout { pages: vec![page("contactForm")], nav_links: vec![], initial_page: "contactForm".into() };
    assert_eq!(layout.validate(), Err(SiteError::DuplicateId("contactForm".into())));
}

#[test]
fn page_colliding_with_field_input_is_rejected() {
    let layout = SiteLayout { pages: vec![page("email")], nav_links: vec![], initial_page: "email".into() };
    assert_eq!(layout.validate(), Err(SiteError::DuplicateId("email".into())));
}

#[test]
fn dangling_nav_link_is_rejected() {
    let layout =
        SiteLayout { pages: vec![page("home")], nav_links: vec![link("nav-blog", "blog")], initial_page: "home".into() };
    assert_eq!(
        layout.validate(),
        Err(SiteError::DanglingNavLink { link: "nav-blog".into(), page: "blog".into() })
    );
}

#[test]
fn missing_initial_page_is_rejected() {
    let layout = SiteLayout { pages: vec![page("home")], nav_links: vec![], initial_page: "about".into() };
    assert_eq!(layout.validate(), Err(SiteError::InitialPageMissing("about".into())));
}

#[test]
fn nav_link_id_prefixes_page() {
    assert_eq!(nav_link_id("services"), "nav-services");
}
