//! Interactive command-line frontend for the campus route planner.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Context;
use campus_core::prelude::*;
use clap::Parser;
use tracing_subscriber::EnvFilter;

const MENU: &str = "b lists all buildings\n\
                    r prints directions for the shortest route between any two buildings\n\
                    q quits the program\n\
                    m prints a menu of all commands\n";

#[derive(Parser, Debug)]
#[command(name = "campus-cli", about = "Shortest walking routes on a campus map")]
struct Args {
    /// Headerless CSV of campus locations: name,id,x,y
    node_file: PathBuf,
    /// Headerless CSV of walking paths: id,id
    edge_file: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let config = CampusModelConfig::new(args.node_file, args.edge_file);
    let model = create_campus_model(&config).context("failed to load the campus map")?;

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    prompt("Enter command(Enter m for command menu): ")?;
    while let Some(line) = lines.next() {
        match line?.as_str() {
            "q" => break,
            "m" => println!("{MENU}"),
            "b" => {
                for building in model.list_buildings() {
                    println!("{building}");
                }
            }
            "r" => {
                prompt("First building id/name, followed by Enter: ")?;
                let Some(first) = lines.next() else { break };
                prompt("Second building id/name, followed by Enter: ")?;
                let Some(second) = lines.next() else { break };
                let result = model
                    .find_path(&first?, &second?)
                    .context("route query failed")?;
                println!("{result}");
            }
            _ => println!("Unknown option"),
        }
    }

    Ok(())
}

fn prompt(text: &str) -> io::Result<()> {
    print!("{text}");
    io::stdout().flush()
}
