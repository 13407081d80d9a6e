//! Demo menu: a music-distribution / game-server-hosting portal.
//!
//! This mirrors the kind of tree the engine was designed for: category tabs
//! at the top, server entries with storage / audit-trail / settings
//! sub-menus, and review queues. Side effects are simulated with a short
//! sleep and an in-memory audit store, standing in for the portal's REST
//! calls.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use anyhow::{anyhow, Result};
use futures::FutureExt;

use crate::menu::{Link, Menu, MenuItem, ViewNode};

/// Audit entries filled in by the "fetch" action and read back by the
/// custom panel after the reveal navigation.
type AuditStore = Arc<Mutex<Vec<String>>>;

pub fn portal_menu() -> Result<Menu> {
    let root = MenuItem::new("Portal", "home/")?.with_categories(vec![
        music_section()?,
        hosting_section()?,
        admin_section()?,
    ]);
    Ok(Menu::new(root).with_bar_link(Link::new("Home", "home/")))
}

fn music_section() -> Result<MenuItem> {
    Ok(MenuItem::new("Music", "music/")?.with_items(vec![
        MenuItem::new("Drops", "drops/")?
            .with_subtitle("Your submitted releases")
            .with_custom(|_| {
                ViewNode::Text(vec![
                    "Spring EP — published".to_string(),
                    "Night Drive — under review".to_string(),
                    "Demo Tape — unsubmitted".to_string(),
                ])
            }),
        MenuItem::new("New Drop", "new_drop/")?
            .with_subtitle("Submit a release for review")
            .with_action(|click_path, _item| {
                let click_path = click_path.to_string();
                async move {
                    tokio::time::sleep(Duration::from_millis(120)).await;
                    log::info!("created draft drop via {click_path}");
                    Ok(())
                }
                .boxed()
            }),
        MenuItem::new("Payouts", "payouts/")?.with_subtitle("Not available yet"),
    ]))
}

fn hosting_section() -> Result<MenuItem> {
    Ok(MenuItem::new("Hosting", "hosting/")?
        .with_items(vec![
            server_entry("Alpha", "alpha/", "Online · 3 players")?,
            server_entry("Beta", "beta/", "Stopped")?,
        ]))
}

fn server_entry(name: &str, id: &str, status: &str) -> Result<MenuItem> {
    let audit: AuditStore = Arc::new(Mutex::new(Vec::new()));
    let audit_fetch = Arc::clone(&audit);
    let audit_view = Arc::clone(&audit);
    let server = name.to_string();

    Ok(MenuItem::new(format!("Server {name}"), id)?
        .with_subtitle(status)
        .with_items(vec![
            MenuItem::new("Storage", "storage/")?
                .with_subtitle("Manage your persistence")
                .with_custom(|_| {
                    ViewNode::Text(vec![
                        "/world".to_string(),
                        "/plugins".to_string(),
                        "/server.properties".to_string(),
                    ])
                }),
            MenuItem::new("Audit Trail", "audit/")?
                .with_subtitle("Keep track of what's going on")
                .with_action(move |click_path, _item| {
                    let audit = Arc::clone(&audit_fetch);
                    let server = server.clone();
                    let click_path = click_path.to_string();
                    async move {
                        // Simulated API fetch before the panel is revealed.
                        tokio::time::sleep(Duration::from_millis(150)).await;
                        let mut entries = audit
                            .lock()
                            .map_err(|err| anyhow!("audit store poisoned: {err}"))?;
                        entries.clear();
                        entries.push(format!("{server}: restarted by admin"));
                        entries.push(format!("{server}: backup completed"));
                        log::info!("fetched audit trail via {click_path}");
                        Ok(())
                    }
                    .boxed()
                })
                .with_custom(move |_| match audit_view.lock() {
                    Ok(entries) if !entries.is_empty() => ViewNode::Text(entries.clone()),
                    _ => ViewNode::Text(vec!["no audit entries".to_string()]),
                }),
            MenuItem::new("Settings", "settings/")?
                .with_subtitle("Update your server")
                .with_items(vec![
                    MenuItem::new("Restart", "restart/")?
                        .with_subtitle("Stop and start the server")
                        .with_action(|click_path, _item| {
                            let click_path = click_path.to_string();
                            async move {
                                tokio::time::sleep(Duration::from_millis(200)).await;
                                log::info!("restart requested via {click_path}");
                                Ok(())
                            }
                            .boxed()
                        }),
                    MenuItem::new("Danger Zone", "danger/")?.with_subtitle("Nothing here yet"),
                ]),
        ]))
}

fn admin_section() -> Result<MenuItem> {
    Ok(MenuItem::new("Admin", "admin/")?
        .with_items(vec![
            MenuItem::new("Review Queue", "reviews/")?
                .with_subtitle("Approve or decline submitted drops")
                .with_custom(|_| {
                    ViewNode::Text(vec![
                        "Night Drive — awaiting review".to_string(),
                        "Summer Mix — awaiting review".to_string(),
                    ])
                }),
            MenuItem::new("Broken Endpoint", "broken/")?
                .with_subtitle("Always fails, for error-path demo")
                .with_action(|_click_path, item| {
                    let title = item.title.clone();
                    async move { Err(anyhow!("{title}: upstream returned 503")) }.boxed()
                })
                .with_custom(|_| ViewNode::Text(vec!["never shown".to_string()])),
        ]))
}
