mod graph;
mod table;
mod tui;

use std::fs;
use std::io::Read;

use anyhow::{anyhow, Result};
use chrono::{Local, Utc};
use clap::Parser;
use larder_core::{parse_expiry_code, parse_scan_reply, FallbackFoodStore, PantryService};

pub const FORMATS_HINT: &str = "YYYY-MM-DD, DD/MM/YYYY, MM/YY, or YYYYMMDD";

#[derive(Parser)]
#[command(name = "larder")]
#[command(about = "Track perishable foods and their expiry dates", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Add a food; the last argument is the expiry code (e.g. add Greek yogurt 03/24)
    Add {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
    /// List all foods with their status
    List,
    /// Draw the expiry timeline
    Graph,
    /// Show total / expired / safe counts
    Stats,
    /// Remove one food by id (a unique prefix is enough)
    Remove { id: String },
    /// Remove every food
    Clear,
    /// Read a saved scan reply and print the suggested food names
    Scan { path: String },
    /// Open the terminal user interface
    Tui,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let store = FallbackFoodStore::open(None)?;
    let mut service = PantryService::load(store)?;

    match cli.command {
        Some(Commands::Add { args }) => {
            if args.len() < 2 {
                return Err(anyhow!(
                    "Expected a food name followed by an expiry code ({}).",
                    FORMATS_HINT
                ));
            }
            let code = args.last().map(String::as_str).unwrap_or_default();
            let name = args[..args.len() - 1].join(" ");
            if name.trim().is_empty() {
                return Err(anyhow!("Please enter a food name."));
            }
            if parse_expiry_code(code).is_err() {
                return Err(anyhow!("Could not read \"{}\". Use {}.", code, FORMATS_HINT));
            }

            let entry = service.add(&name, code)?;
            println!("Added \"{}\" to your expiry graph.", entry.name);
            println!(
                "  Expires: {}",
                entry.expires_at.with_timezone(&Local).format("%b %-d, %Y")
            );
            println!("  Id: {}", entry.id);
        }
        Some(Commands::List) => {
            table::render_list(&service.rows(Utc::now()));
        }
        Some(Commands::Graph) => {
            graph::render(&service.rows(Utc::now()));
        }
        Some(Commands::Stats) => {
            let stats = service.stats(Utc::now());
            println!("Total foods:  {}", stats.total);
            println!("Expired:      {}", stats.expired);
            println!("Safe / fresh: {}", stats.safe());
        }
        Some(Commands::Remove { id }) => {
            let removed = service.remove(&id)?;
            println!("Removed \"{}\".", removed.name);
        }
        Some(Commands::Clear) => {
            let removed = service.clear()?;
            if removed == 0 {
                println!("Nothing to clear.");
            } else {
                println!("Cleared all foods from the tracker.");
            }
        }
        Some(Commands::Scan { path }) => {
            let raw = if path == "-" {
                let mut buf = String::new();
                std::io::stdin().read_to_string(&mut buf)?;
                buf
            } else {
                fs::read_to_string(&path)?
            };
            let suggestions = parse_scan_reply(&raw);
            if suggestions.is_empty() {
                println!("No food suggestions found in the reply.");
            } else {
                table::render_suggestions(&suggestions);
                println!("Add one with: larder add <name> <expiry code>");
            }
        }
        Some(Commands::Tui) | None => {
            tui::run(service)?;
        }
    }
    Ok(())
}
