//! List command - show cached entries

use crate::cli::args::{ListArgs, OutputFormat};
use crate::config::Config;
use crate::error::PouchResult;
use crate::store::{CacheManager, Entry};
use console::style;

/// Execute the list command
pub async fn execute(args: ListArgs, manager: &CacheManager, config: &Config) -> PouchResult<()> {
    let entries = manager.list().await?;

    if entries.is_empty() {
        match args.format {
            OutputFormat::Json => println!("[]"),
            OutputFormat::Plain => {}
            OutputFormat::Table => println!("Cache is empty"),
        }
        return Ok(());
    }

    match args.format {
        OutputFormat::Table => print_table(&entries, config.list.label_width),
        OutputFormat::Json => print_json(&entries)?,
        OutputFormat::Plain => print_plain(&entries),
    }

    Ok(())
}

fn print_table(entries: &[Entry], label_width: usize) {
    println!(
        "{:<38} {:<label_width$} {:>10} {:<20}",
        style("ID").bold(),
        style("LABEL").bold(),
        style("SIZE").bold(),
        style("LAST USED").bold()
    );
    println!("{}", "-".repeat(38 + label_width + 33));

    for entry in entries {
        println!(
            "{:<38} {:<label_width$} {:>10} {:<20}",
            entry.id,
            truncate_label(&entry.label, label_width),
            entry.size,
            entry.last_used.format("%Y-%m-%d %H:%M:%S")
        );
    }

    println!();
    println!("{} entr{}", entries.len(), if entries.len() == 1 { "y" } else { "ies" });
}

fn print_json(entries: &[Entry]) -> PouchResult<()> {
    let json = serde_json::to_string_pretty(entries)?;
    println!("{}", json);
    Ok(())
}

fn print_plain(entries: &[Entry]) {
    for entry in entries {
        println!("{}", entry.id);
    }
}

/// Truncate on a char boundary, marking the cut with an ellipsis
fn truncate_label(label: &str, max: usize) -> String {
    if label.chars().count() <= max {
        return label.to_string();
    }
    // Widths too narrow for an ellipsis still must not exceed the column
    if max <= 3 {
        return ".".repeat(max);
    }
    let kept: String = label.chars().take(max - 3).collect();
    format!("{kept}...")
}
