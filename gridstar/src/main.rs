//! gridstar — shortest routes on grid maps.

use clap::Parser;
use env_logger::Env;
use gridstar_lib::{Args, render, scenario};
use gridstar_search::{SearchOutcome, find_path};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    env_logger::Builder::from_env(Env::default().default_filter_or(args.log_level())).init();

    let cfg = args.config()?;
    scenario::warn_endpoints(&cfg);
    let outcome = find_path(&cfg);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
        return Ok(());
    }

    print!("{}", render(&cfg.grid, outcome.route()));
    match outcome {
        SearchOutcome::Succeeded(route) => {
            println!(
                "path {} -> {}: cost {} ({} cells)",
                cfg.start,
                cfg.goal,
                route.cost,
                route.points.len()
            );
        }
        SearchOutcome::Failed => println!("no path {} -> {}", cfg.start, cfg.goal),
    }
    Ok(())
}
