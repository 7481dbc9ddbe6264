// SPDX-License-Identifier: MPL-2.0
//! Command-line demo: posts notifications and prints every snapshot the
//! registry publishes until all of them are gone.

use std::path::PathBuf;
use std::time::Duration;

use toast_registry::config;
use toast_registry::notifications::{Category, Message, Notification, Registry};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "\
Usage: toast_registry [OPTIONS] MESSAGE...

Options:
  --config-dir <DIR>    Read settings.toml from DIR
  --lifetime-ms <MS>    Lifetime of every posted notification
  --category <NAME>     info, success, warning, error or any other name
  --hover-ms <MS>       Hover the first notification for MS right after posting
  -h, --help            Print this help";

struct Flags {
    config_dir: Option<PathBuf>,
    lifetime_ms: Option<u64>,
    category: Option<Category>,
    hover_ms: Option<u64>,
    messages: Vec<String>,
}

fn parse_flags() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let flags = Flags {
        config_dir: args.opt_value_from_str("--config-dir")?,
        lifetime_ms: args.opt_value_from_str("--lifetime-ms")?,
        category: args
            .opt_value_from_str::<_, String>("--category")?
            .map(|name| Category::from(name.as_str())),
        hover_ms: args.opt_value_from_str("--hover-ms")?,
        messages: args
            .finish()
            .into_iter()
            .filter_map(|s| s.into_string().ok())
            .collect(),
    };
    Ok(Some(flags))
}

fn render(snapshot: &[Notification]) {
    println!("--- {} notification(s)", snapshot.len());
    for notification in snapshot {
        println!(
            "  #{:<4} [{:<7}] {} {}",
            notification.id(),
            notification.category(),
            if notification.is_visible() { "shown " } else { "hidden" },
            notification.message()
        );
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("toast_registry=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let flags = match parse_flags() {
        Ok(Some(flags)) if !flags.messages.is_empty() => flags,
        Ok(_) => {
            println!("{USAGE}");
            return;
        }
        Err(err) => {
            eprintln!("error: {err}\n\n{USAGE}");
            std::process::exit(2);
        }
    };

    let (settings, warning) = config::load_with_override(flags.config_dir);
    if let Some(warning) = warning {
        tracing::warn!("{warning}; using defaults");
    }

    let registry = match Registry::new(&settings) {
        Ok(registry) => registry,
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    };

    let mut snapshots = registry.subscribe();
    let lifetime = flags.lifetime_ms.map(Duration::from_millis);
    let ids: Vec<_> = flags
        .messages
        .iter()
        .map(|message| registry.create_with_lifetime(message.as_str(), flags.category.clone(), lifetime))
        .collect();

    if let (Some(hover_ms), Some(&first)) = (flags.hover_ms, ids.first()) {
        registry.handle_message(&Message::PointerEntered(first));
        let pointer = registry.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(hover_ms)).await;
            pointer.handle_message(&Message::PointerLeft(first));
        });
    }

    render(&snapshots.borrow_and_update());
    while snapshots.changed().await.is_ok() {
        let snapshot = snapshots.borrow_and_update().clone();
        render(&snapshot);
        if snapshot.is_empty() {
            break;
        }
    }

    for event in registry.journal() {
        println!("{event}");
    }
    registry.shutdown();
}
