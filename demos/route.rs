//! Plan a route across a text map and print it.
//!
//! Run: cargo run --bin route -- [--cardinal] [--max-expansions N] [MAP_FILE]
//!
//! Without `MAP_FILE` a built-in map is used.

use wayfind_demos::{DEFAULT_MAP, RouteOptions, plan};
use wayfind_paths::SearchLimits;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut opts = RouteOptions::default();
    let mut file = None;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--cardinal" => opts.cardinal = true,
            "--max-expansions" => {
                let n = args
                    .next()
                    .ok_or("--max-expansions needs a value")?
                    .parse::<usize>()?;
                opts.limits = SearchLimits::with_max_expansions(n);
            }
            _ if arg.starts_with("--") => return Err(format!("unknown option {arg}").into()),
            _ => file = Some(arg),
        }
    }

    let text = match file {
        Some(path) => std::fs::read_to_string(path)?,
        None => DEFAULT_MAP.to_string(),
    };

    let route = plan(&text, opts)?;
    println!("{}", route.render());
    Ok(())
}
