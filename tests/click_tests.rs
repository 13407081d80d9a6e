// Click-routing properties: navigation vs action dispatch, click paths,
// reveal ordering, and stale-reveal discarding.

use std::sync::{Arc, Mutex};

use anyhow::anyhow;
use futures::FutureExt;
use tokio::sync::Notify;

use komichi::menu::{ClickOutcome, Menu, MenuItem, ViewNode};

fn child(menu: &Menu, token: &str) -> Arc<MenuItem> {
    menu.active_children()
        .unwrap()
        .into_iter()
        .find(|c| c.id.as_str() == token)
        .unwrap_or_else(|| panic!("no child {token}"))
}

#[tokio::test]
async fn test_click_with_children_navigates_without_side_effect() {
    let fired = Arc::new(Mutex::new(false));
    let fired_probe = Arc::clone(&fired);
    let root = MenuItem::new("Home", "home/").unwrap().with_items(vec![
        MenuItem::new("Hosting", "hosting/")
            .unwrap()
            .with_items(vec![MenuItem::new("Alpha", "alpha/").unwrap()])
            .with_action(move |_, _| {
                let fired = Arc::clone(&fired_probe);
                async move {
                    *fired.lock().unwrap() = true;
                    Ok(())
                }
                .boxed()
            }),
    ]);
    let menu = Menu::new(root);

    let item = child(&menu, "hosting/");
    assert!(matches!(
        menu.route_click(&item).unwrap(),
        ClickOutcome::Navigate(_)
    ));
    menu.click(&item).await.unwrap();

    assert_eq!(menu.active_path_string().unwrap(), "home/hosting/");
    // Children win over the action: navigation only.
    assert!(!*fired.lock().unwrap());
}

#[tokio::test]
async fn test_click_with_children_and_custom_shows_both() {
    let root = MenuItem::new("Home", "home/").unwrap().with_items(vec![
        MenuItem::new("Server", "server/")
            .unwrap()
            .with_items(vec![MenuItem::new("Storage", "storage/").unwrap()])
            .with_custom(|_| ViewNode::Text(vec!["status panel".to_string()])),
    ]);
    let menu = Menu::new(root);

    let item = child(&menu, "server/");
    menu.click(&item).await.unwrap();
    assert_eq!(menu.active_path_string().unwrap(), "home/server/");

    let view = menu.compose().unwrap();
    let rows = view.find_entries().expect("child entries");
    assert_eq!(rows[0].title, "Storage");
    let ViewNode::Column(nodes) = &view else {
        panic!("expected column");
    };
    assert!(nodes
        .iter()
        .any(|n| matches!(n, ViewNode::Text(lines) if lines[0] == "status panel")));
}

#[tokio::test]
async fn test_action_only_click_gets_full_click_path_and_keeps_position() {
    let seen: Arc<Mutex<Option<String>>> = Arc::new(Mutex::new(None));
    let seen_probe = Arc::clone(&seen);
    let root = MenuItem::new("Home", "home/").unwrap().with_items(vec![
        MenuItem::new("Settings", "settings/")
            .unwrap()
            .with_items(vec![MenuItem::new("Restart", "restart/")
                .unwrap()
                .with_action(move |click_path, _| {
                    let seen = Arc::clone(&seen_probe);
                    let click_path = click_path.to_string();
                    async move {
                        *seen.lock().unwrap() = Some(click_path);
                        Ok(())
                    }
                    .boxed()
                })]),
    ]);
    let menu = Menu::new(root);
    menu.set_active_path("home/settings/").unwrap();

    let item = child(&menu, "restart/");
    menu.click(&item).await.unwrap();

    assert_eq!(
        seen.lock().unwrap().as_deref(),
        Some("home/settings/restart/")
    );
    // No custom panel, so the active path is untouched.
    assert_eq!(menu.active_path_string().unwrap(), "home/settings/");
}

#[tokio::test]
async fn test_action_then_reveal_orders_and_appends() {
    let order: Arc<Mutex<Vec<&'static str>>> = Arc::new(Mutex::new(Vec::new()));
    let order_probe = Arc::clone(&order);
    let root = MenuItem::new("Home", "home/").unwrap().with_items(vec![
        MenuItem::new("Audit", "audit/")
            .unwrap()
            .with_action(move |_, _| {
                let order = Arc::clone(&order_probe);
                async move {
                    order.lock().unwrap().push("action");
                    Ok(())
                }
                .boxed()
            })
            .with_custom(|_| ViewNode::Text(vec!["audit".to_string()])),
    ]);
    let menu = Menu::new(root);
    menu.subscribe({
        let order = Arc::clone(&order);
        move |_| order.lock().unwrap().push("navigate")
    })
    .unwrap();

    let item = child(&menu, "audit/");
    menu.click(&item).await.unwrap();

    assert_eq!(*order.lock().unwrap(), vec!["action", "navigate"]);
    assert_eq!(menu.active_path_string().unwrap(), "home/audit/");
}

#[tokio::test]
async fn test_failed_action_propagates_and_skips_reveal() {
    let root = MenuItem::new("Home", "home/").unwrap().with_items(vec![
        MenuItem::new("Broken", "broken/")
            .unwrap()
            .with_action(|_, _| async move { Err(anyhow!("upstream returned 503")) }.boxed())
            .with_custom(|_| ViewNode::Text(vec!["never shown".to_string()])),
    ]);
    let menu = Menu::new(root);

    let item = child(&menu, "broken/");
    let err = menu.click(&item).await.expect_err("action failure");
    assert!(err.to_string().contains("503"));
    assert_eq!(menu.active_path_string().unwrap(), "home/");
}

#[tokio::test]
async fn test_inert_click_is_a_noop() {
    let root = MenuItem::new("Home", "home/")
        .unwrap()
        .with_items(vec![MenuItem::new("Label", "label/").unwrap()]);
    let menu = Menu::new(root);

    let item = child(&menu, "label/");
    assert!(matches!(
        menu.route_click(&item).unwrap(),
        ClickOutcome::Inert
    ));
    menu.click(&item).await.unwrap();
    assert_eq!(menu.active_path_string().unwrap(), "home/");
}

#[tokio::test]
async fn test_reveal_routed_before_navigation_is_discarded() {
    let root = MenuItem::new("Home", "home/").unwrap().with_items(vec![
        MenuItem::new("Audit", "audit/")
            .unwrap()
            .with_custom(|_| ViewNode::Text(vec!["audit".to_string()])),
        MenuItem::new("Elsewhere", "elsewhere/")
            .unwrap()
            .with_items(vec![MenuItem::new("Leaf", "leaf/").unwrap()]),
    ]);
    let menu = Menu::new(root);

    // Routing happens first, then the user navigates, then the routed
    // outcome gets dispatched. The reveal must lose to the navigation even
    // though dispatch itself sees no further writes while it runs.
    let outcome = menu.route_click(&child(&menu, "audit/")).unwrap();
    menu.set_active_path("home/elsewhere/").unwrap();
    menu.dispatch(outcome).await.unwrap();

    assert_eq!(menu.active_path_string().unwrap(), "home/elsewhere/");
}

#[tokio::test]
async fn test_stale_reveal_is_discarded_after_concurrent_navigation() {
    let started = Arc::new(Notify::new());
    let gate = Arc::new(Notify::new());
    let started_action = Arc::clone(&started);
    let gate_action = Arc::clone(&gate);
    let root = MenuItem::new("Home", "home/").unwrap().with_items(vec![
        MenuItem::new("Audit", "audit/")
            .unwrap()
            .with_action(move |_, _| {
                let started = Arc::clone(&started_action);
                let gate = Arc::clone(&gate_action);
                async move {
                    started.notify_one();
                    gate.notified().await;
                    Ok(())
                }
                .boxed()
            })
            .with_custom(|_| ViewNode::Text(vec!["audit".to_string()])),
        MenuItem::new("Elsewhere", "elsewhere/")
            .unwrap()
            .with_items(vec![MenuItem::new("Leaf", "leaf/").unwrap()]),
    ]);
    let menu = Menu::new(root);

    let item = child(&menu, "audit/");
    let pending = tokio::spawn({
        let menu = menu.clone();
        async move { menu.click(&item).await }
    });

    // The user navigates away while the action is provably in flight.
    started.notified().await;
    menu.set_active_path("home/elsewhere/").unwrap();
    gate.notify_one();
    pending.await.unwrap().unwrap();

    // The pending reveal did not clobber the newer navigation.
    assert_eq!(menu.active_path_string().unwrap(), "home/elsewhere/");
}
