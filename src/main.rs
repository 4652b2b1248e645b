// unity-launcher - find your Unity projects and open them with the right editor
//
// This is the main entry point. Parses CLI args and dispatches to handlers.

use unity_launcher_lib::{
    config::{select_source, AddOutcome, RemoveOutcome, SearchPathStore},
    host::{self, ResultEntry},
    util::logging,
    DiscoveryEngine,
};
use std::env;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init();

    // Grab whatever the user typed
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        return Ok(());
    }

    let command = &args[1];

    match command.as_str() {
        "search" => handle_search(&args[2..], false).await,
        "open" => handle_search(&args[2..], true).await,
        "add-path" => handle_add_path(&args[2..]),
        "list-paths" => handle_list_paths(),
        "remove-path" => handle_remove_path(&args[2..]),
        "version" | "-v" | "--version" => {
            println!("unity-launcher v{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        "help" | "-h" | "--help" => {
            print_usage();
            Ok(())
        }
        _ => {
            eprintln!("Unknown command: {}", command);
            print_usage();
            Ok(())
        }
    }
}

async fn handle_search(args: &[String], launch: bool) -> anyhow::Result<()> {
    let query = args.join(" ");

    let mut engine = DiscoveryEngine::new(select_source()?);
    let results = engine.query(&query).await;

    let mut entries: Vec<ResultEntry> = results.iter().map(host::project_entry).collect();
    if entries.is_empty() {
        // Distinguish "nothing configured found anything" from "your query
        // matched nothing" (the unfiltered list is a cache hit)
        let had_projects = !engine.query("").await.is_empty();
        entries.push(host::placeholder_entry(had_projects, &query));
    }

    if launch {
        // Activate the best match that actually has an editor
        match entries.iter().find_map(|e| e.action.as_ref()) {
            Some(action) => {
                host::launch_detached(action)?;
                println!("Launching {}", action.program.display());
            }
            None => {
                eprintln!("Nothing to launch.");
                print_entries(&entries);
            }
        }
        return Ok(());
    }

    print_entries(&entries);
    Ok(())
}

fn handle_add_path(args: &[String]) -> anyhow::Result<()> {
    let Some(path) = args.first() else {
        eprintln!("Error: No path provided");
        return Ok(());
    };

    let store = SearchPathStore::default_location()?;
    match store.add_path(path) {
        Ok(AddOutcome::Added) => println!("Added search path: {}", path),
        Ok(AddOutcome::AlreadyPresent) => println!("Already configured: {}", path),
        Err(e) => eprintln!("{}", e.user_message()),
    }

    Ok(())
}

fn handle_list_paths() -> anyhow::Result<()> {
    let store = SearchPathStore::default_location()?;
    let entries = store.entries();

    if entries.is_empty() {
        println!("No search paths configured. Using default:");
        for root in SearchPathStore::default_roots() {
            println!("  {}", root.display());
        }
    } else {
        println!("Configured search paths:");
        for entry in entries {
            println!("  {}", entry);
        }
    }

    Ok(())
}

fn handle_remove_path(args: &[String]) -> anyhow::Result<()> {
    let Some(path) = args.first() else {
        eprintln!("Error: No path provided");
        return Ok(());
    };

    let store = SearchPathStore::default_location()?;
    match store.remove_path(path) {
        Ok(RemoveOutcome::Removed) => println!("Removed search path: {}", path),
        Ok(RemoveOutcome::NotFound) => println!("Not a configured search path: {}", path),
        Err(e) => eprintln!("{}", e.user_message()),
    }

    Ok(())
}

fn print_entries(entries: &[ResultEntry]) {
    println!("{}", "=".repeat(60));
    for (i, entry) in entries.iter().enumerate() {
        println!("{:3}. {}", i + 1, entry.name);
        println!("     {}", entry.description);
    }
    println!("{}", "=".repeat(60));
}

fn print_usage() {
    println!(
        r#"unity-launcher v{} - Find and open your Unity projects

USAGE:
    unity-launcher <COMMAND> [OPTIONS]

COMMANDS:
    search [query]         List projects matching the query (all if empty)
    open <query>           Open the best match in its Unity editor
    add-path <dir>         Add a directory to the search paths
    list-paths             Show configured search paths
    remove-path <dir>      Remove a directory from the search paths
    version                Show version
    help                   Show this help

EXAMPLES:
    unity-launcher search shooter
    unity-launcher open shooter
    unity-launcher add-path ~/UnityProjects
    unity-launcher list-paths

Search paths live in ~/.unity-launcher/config.json (defaults to your
home directory). Set UNITY_LAUNCHER_PATHS (one path per line) to
override them for a single run.
"#,
        env!("CARGO_PKG_VERSION")
    );
}
