// View-composition properties: category vs list view, tab selection,
// breadcrumbs, entry-list omission, custom click paths.

use komichi::menu::{Link, Menu, MenuItem, ViewNode};

fn portal() -> Menu {
    let root = MenuItem::new("Portal", "home/").unwrap().with_categories(vec![
        MenuItem::new("Music", "a/")
            .unwrap()
            .with_items(vec![MenuItem::new("Drops", "drops/").unwrap()]),
        MenuItem::new("Hosting", "b/").unwrap(),
    ]);
    Menu::new(root).with_bar_link(Link::new("Home", "home/"))
}

fn list_tree() -> Menu {
    let root = MenuItem::new("Home", "home/").unwrap().with_items(vec![
        MenuItem::new("Settings", "settings/")
            .unwrap()
            .with_items(vec![MenuItem::new("Profile", "profile/").unwrap()]),
    ]);
    Menu::new(root)
}

#[test]
fn test_category_view_selects_active_tab() {
    let menu = portal();
    menu.set_active_path("home/a/").unwrap();
    let view = menu.compose().unwrap();

    let bar = view.find_bar().expect("category bar");
    let tabs = bar.tabs.as_ref().expect("tabs");
    let selected: Vec<(&str, bool)> = tabs
        .iter()
        .map(|t| (t.title.as_str(), t.selected))
        .collect();
    assert_eq!(selected, vec![("Music", true), ("Hosting", false)]);

    // The active category's items are rendered.
    let rows = view.find_entries().expect("entry rows");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].title, "Drops");
}

#[test]
fn test_category_tabs_target_holder_path_plus_key() {
    let menu = portal();
    menu.set_active_path("home/a/").unwrap();
    let view = menu.compose().unwrap();
    let tabs = view.find_bar().unwrap().tabs.clone().unwrap();
    assert_eq!(tabs[0].path, "home/a/");
    assert_eq!(tabs[1].path, "home/b/");
}

#[test]
fn test_root_with_categories_has_no_selected_tab() {
    let menu = portal();
    let view = menu.compose().unwrap();
    let tabs = view.find_bar().unwrap().tabs.clone().unwrap();
    assert!(tabs.iter().all(|t| !t.selected));
}

#[test]
fn test_root_list_view_has_no_breadcrumbs() {
    let menu = list_tree();
    let view = menu.compose().unwrap();
    let bar = view.find_bar().unwrap();
    assert!(bar.tabs.is_none());
    assert!(bar.breadcrumbs.is_none());
    assert_eq!(bar.title, "Home");
}

#[test]
fn test_breadcrumbs_list_ancestors_only() {
    let menu = list_tree();
    menu.set_active_path("home/settings/profile/").unwrap();
    let view = menu.compose().unwrap();
    let bar = view.find_bar().unwrap();
    assert_eq!(bar.title, "Profile");

    let crumbs = bar.breadcrumbs.as_ref().expect("breadcrumbs");
    let trail: Vec<(&str, &str)> = crumbs
        .iter()
        .map(|l| (l.title.as_str(), l.path.as_str()))
        .collect();
    // The deepest entry itself is not clickable.
    assert_eq!(trail, vec![("Home", "home/"), ("Settings", "home/settings/")]);
}

#[test]
fn test_bar_link_is_carried_through() {
    let menu = portal();
    let view = menu.compose().unwrap();
    let link = view.find_bar().unwrap().link.clone().unwrap();
    assert_eq!(link.title, "Home");
    assert_eq!(link.path, "home/");
}

#[test]
fn test_entry_list_omitted_without_children() {
    let root = MenuItem::new("Home", "home/")
        .unwrap()
        .with_items(vec![MenuItem::new("About", "about/")
            .unwrap()
            .with_custom(|_| ViewNode::Text(vec!["standalone panel".to_string()]))]);
    let menu = Menu::new(root);
    menu.set_active_path("home/about/").unwrap();

    let view = menu.compose().unwrap();
    assert!(view.find_entries().is_none());
    let ViewNode::Column(nodes) = &view else {
        panic!("expected column");
    };
    assert!(nodes
        .iter()
        .any(|n| matches!(n, ViewNode::Text(lines) if lines[0] == "standalone panel")));
}

#[test]
fn test_custom_click_path_counts_each_segment_once() {
    let root = MenuItem::new("Home", "home/")
        .unwrap()
        .with_items(vec![MenuItem::new("Audit", "audit/")
            .unwrap()
            .with_custom(|click_path| ViewNode::Text(vec![click_path.to_string()]))]);
    let menu = Menu::new(root);
    menu.set_active_path("home/audit/").unwrap();

    let view = menu.compose().unwrap();
    let ViewNode::Column(nodes) = &view else {
        panic!("expected column");
    };
    let Some(ViewNode::Text(lines)) = nodes.iter().find(|n| matches!(n, ViewNode::Text(_))) else {
        panic!("expected custom panel");
    };
    assert_eq!(lines[0], "home/audit/");
}

#[test]
fn test_custom_click_path_keeps_synthetic_prefix() {
    let root = MenuItem::new("Portal", "home/")
        .unwrap()
        .with_categories(vec![MenuItem::new("Music", "music/")
            .unwrap()
            .with_custom(|click_path| ViewNode::Text(vec![click_path.to_string()]))]);
    let menu = Menu::new(root);
    menu.set_active_path("home/music/").unwrap();

    let view = menu.compose().unwrap();
    let ViewNode::Column(nodes) = &view else {
        panic!("expected column");
    };
    let Some(ViewNode::Text(lines)) = nodes.iter().find(|n| matches!(n, ViewNode::Text(_))) else {
        panic!("expected custom panel");
    };
    assert_eq!(lines[0], "home/+music/");
}

#[test]
fn test_rows_carry_visibility_and_interactivity() {
    let root = MenuItem::new("Home", "home/").unwrap().with_items(vec![
        MenuItem::new("Shown", "shown/")
            .unwrap()
            .with_items(vec![MenuItem::new("Child", "child/").unwrap()]),
        MenuItem::new("Hidden", "hidden/")
            .unwrap()
            .with_visible(|| false),
        MenuItem::new("Inert", "inert/").unwrap(),
    ]);
    let menu = Menu::new(root);
    let rows = menu.compose().unwrap().find_entries().unwrap().to_vec();
    assert_eq!(rows.len(), 3);
    assert!(rows[0].interactive && rows[0].visible);
    assert!(!rows[1].visible);
    assert!(!rows[2].interactive);
}
