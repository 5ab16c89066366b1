use super::*;

#[test]
fn only_exact_path_is_active() {
    assert_eq!(nav_link_class("/", "/"), "nav-link active text-warning");
    assert_eq!(nav_link_class("/", "/projects"), "nav-link");
    assert_eq!(nav_link_class("/projects", "/projects"), "nav-link active text-warning");
    assert_eq!(nav_link_class("/projects", "/projects/1"), "nav-link");
}

#[test]
fn work_item_points_at_projects() {
    assert!(NAV_ITEMS.contains(&("/projects", "Work")));
    assert_eq!(NAV_ITEMS[0], ("/", "Home"));
}

#[test]
fn theme_toggle_describes_next_mode() {
    assert_eq!(theme_toggle_title(true), "Switch to Light Mode");
    assert_eq!(theme_toggle_title(false), "Switch to Dark Mode");
    assert_eq!(theme_toggle_icon(true), "bi bi-sun-fill");
}
