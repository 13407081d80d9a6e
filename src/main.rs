use std::path::Path;

use anyhow::Result;
use clap::{Arg, Command};

use komichi::{portal, tui};

fn main() -> Result<()> {
    env_logger::init();
    let matches = Command::new("komichi")
        .about("Declarative hierarchical menu navigation console")
        .arg(
            Arg::new("path")
                .long("path")
                .short('p')
                .value_name("PATH")
                .help("Start at this active path instead of the root"),
        )
        .arg(
            Arg::new("resolve")
                .long("resolve")
                .value_name("PATH")
                .help("Resolve a path against the demo menu, print the trace and exit"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .value_name("FILE")
                .help("Config file location"),
        )
        .get_matches();

    let menu = portal::portal_menu()?;

    if let Some(path) = matches.get_one::<String>("resolve") {
        menu.set_active_path(path)?;
        let resolved = menu.active_path()?;
        for (depth, entry) in resolved.iter().enumerate() {
            println!("{}{} {}", "  ".repeat(depth), entry.id, entry.title);
        }
        return Ok(());
    }

    let mut config = tui::config::load(matches.get_one::<String>("config").map(Path::new))?;
    if let Some(path) = matches.get_one::<String>("path") {
        config.start_path = Some(path.clone());
    }

    log::info!("launching TUI");
    tui::start(menu, config)
}
