//! railctl — interactive railway network analysis console.
//!
//! Seeds the sample Sri Lanka intercity network, then drives the
//! `rail-net` engine from a stdin menu: mutate the network, display it,
//! run shortest-path queries with optional mandatory stops, and search
//! for stations.  All input validation lives here; the engine only ever
//! sees sanitized names and parsed distances.

use std::io::{self, BufRead, Write};

use anyhow::Result;

use rail_net::{DijkstraRouter, RailNetwork, Route, Router, load_sample_network, plan_with_stops};

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let mut network = RailNetwork::new();
    load_sample_network(&mut network);

    let stdin = io::stdin();
    let mut input = stdin.lock();

    loop {
        print_menu();
        let Some(choice) = prompt(&mut input, "Enter your choice: ")? else {
            break; // stdin closed
        };
        match choice.to_uppercase().as_str() {
            "A" => manage_network(&mut input, &mut network)?,
            "B" => display_network(&network),
            "C" => find_route(&mut input, &network)?,
            "D" => search_station(&mut input, &network)?,
            "Q" => break,
            _ => println!("Invalid choice."),
        }
        println!();
    }

    Ok(())
}

fn print_menu() {
    println!("=================================================");
    println!("       Railway Network Analysis System           ");
    println!("=================================================");
    println!("A. Build/Modify Network (Add/Remove)");
    println!("B. Display Network");
    println!("C. Find Shortest Path (with Optional Stops)");
    println!("D. Search for Station");
    println!("Q. Quit");
    println!("=================================================");
}

// ── Menu actions ──────────────────────────────────────────────────────────────

fn manage_network(input: &mut impl BufRead, network: &mut RailNetwork) -> Result<()> {
    println!("1. Add Station");
    println!("2. Add Route");
    println!("3. Remove Station");
    println!("4. Remove Route");
    let Some(choice) = prompt(input, "Choice: ")? else {
        return Ok(());
    };

    match choice.as_str() {
        "1" => {
            let Some(name) = prompt(input, "Station name: ")? else {
                return Ok(());
            };
            if name.is_empty() {
                println!("Station name cannot be empty.");
            } else if network.add_station(&name) {
                println!("Station added.");
            } else {
                println!("Station already exists.");
            }
        }
        "2" => {
            let Some((from, to)) = prompt_endpoints(input)? else {
                return Ok(());
            };
            let Some(distance) = prompt(input, "Distance (km): ")? else {
                return Ok(());
            };
            match distance.parse::<u32>() {
                Ok(km) => {
                    network.add_route(&from, &to, km);
                    println!("Route added/updated.");
                }
                Err(_) => println!("Distance must be a non-negative whole number."),
            }
        }
        "3" => {
            let Some(name) = prompt(input, "Station name to remove: ")? else {
                return Ok(());
            };
            match network.remove_station(&name) {
                Ok(()) => println!("Station '{name}' and associated routes deleted."),
                Err(err) => println!("{err}"),
            }
        }
        "4" => {
            let Some((from, to)) = prompt_endpoints(input)? else {
                return Ok(());
            };
            match network.remove_route(&from, &to) {
                Ok(()) => println!("Route removed."),
                Err(err) => println!("{err}"),
            }
        }
        _ => println!("Invalid choice."),
    }
    Ok(())
}

fn display_network(network: &RailNetwork) {
    println!();
    println!("--- Railway Network (Directed) ---");
    for (name, routes) in network.stations() {
        if routes.is_empty() {
            println!("{name} -> [End of Line]");
        } else {
            let legs: Vec<String> = routes
                .iter()
                .map(|r| format!("[{} ({}km)]", r.to, r.distance_km))
                .collect();
            println!("{name} -> {}", legs.join(" "));
        }
    }
}

fn find_route(input: &mut impl BufRead, network: &RailNetwork) -> Result<()> {
    println!("--- Find Shortest Path ---");
    let Some(from) = prompt(input, "Source station: ")? else {
        return Ok(());
    };
    let Some(to) = prompt(input, "Destination station: ")? else {
        return Ok(());
    };
    if from.is_empty() || to.is_empty() {
        println!("Station names cannot be empty.");
        return Ok(());
    }
    let Some(stop_line) = prompt(input, "Mandatory stops, comma-separated (blank for none): ")?
    else {
        return Ok(());
    };
    let stops: Vec<&str> = stop_line
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();

    let result = if stops.is_empty() {
        DijkstraRouter.route(network, &from, &to)
    } else {
        plan_with_stops(network, &DijkstraRouter, &from, &to, &stops)
    };

    match result {
        Ok(route) => print_route(&route),
        Err(err) => {
            println!();
            println!("No valid route found ({err}).");
        }
    }
    Ok(())
}

fn search_station(input: &mut impl BufRead, network: &RailNetwork) -> Result<()> {
    let Some(name) = prompt(input, "Station name: ")? else {
        return Ok(());
    };
    match network.canonical_name(&name) {
        Some(canonical) => println!("Station '{canonical}' exists in the network."),
        None => println!("Station NOT found."),
    }
    Ok(())
}

// ── Rendering & input helpers ─────────────────────────────────────────────────

fn print_route(route: &Route) {
    println!();
    println!(">>> Optimal route found:");
    println!("{}", route.stations.join(" -> "));
    println!("Total distance: {} km", route.total_km);
}

/// Read both endpoints of a route.  `None` once stdin closes.
fn prompt_endpoints(input: &mut impl BufRead) -> Result<Option<(String, String)>> {
    let Some(from) = prompt(input, "From: ")? else {
        return Ok(None);
    };
    let Some(to) = prompt(input, "To: ")? else {
        return Ok(None);
    };
    if from.is_empty() || to.is_empty() {
        println!("Station names cannot be empty.");
        return Ok(None);
    }
    Ok(Some((from, to)))
}

/// Print `msg` without a newline and read one trimmed line from stdin.
/// `None` at end of input.
fn prompt(input: &mut impl BufRead, msg: &str) -> Result<Option<String>> {
    print!("{msg}");
    io::stdout().flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_owned()))
}
