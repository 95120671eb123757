// crates/scaffold/src/main.rs
use std::env;
use std::path::PathBuf;

use anyhow::Context;
use scaffold::{create_project, ProjectNames};
use tracing::Level;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::Subscriber::builder()
        .with_max_level(Level::INFO)
        .init();

    // new-game <project-id> [parent-dir]
    let args: Vec<String> = env::args().skip(1).collect();
    let raw_id = args.first().map(String::as_str).unwrap_or("");
    let parent = match args.get(1) {
        Some(dir) => PathBuf::from(dir),
        None => env::current_dir().context("cannot resolve the current directory")?,
    };

    let names = ProjectNames::derive(raw_id);
    let folder = create_project(&parent, &names)
        .with_context(|| format!("error creating project '{}'", names.id))?;

    println!("Created {} in {}", names.vanity_name, folder.display());
    Ok(())
}
