use std::path::PathBuf;

use eternal_domination::eternal::{eternal_domination_number, EternalDomination};
use eternal_domination::scenario::Scenario;
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

fn main() {
    let _ = TermLogger::init(
        LevelFilter::Info,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    );

    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: eds_eval <scenario.json>");
        std::process::exit(2);
    }

    let path = PathBuf::from(&args[1]);
    let scn = match Scenario::load(&path) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Failed to load {}: {e}", path.display());
            std::process::exit(2);
        }
    };

    let graph = match scn.validate() {
        Ok(g) => g,
        Err(e) => {
            eprintln!("Invalid scenario: {e}");
            std::process::exit(2);
        }
    };

    let solved = match EternalDomination::build_with_limits(
        &graph,
        scn.ruleset,
        scn.guards,
        &scn.limits,
    ) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Solving failed: {e}");
            std::process::exit(1);
        }
    };

    let domination_number = match eternal_domination_number(&graph, scn.ruleset, &scn.limits) {
        Ok(k) => Some(k),
        Err(e) => {
            log::warn!("eternal domination number not computed: {e}");
            None
        }
    };

    let out = serde_json::json!({
        "scenario": scn,
        "summary": solved.summary(),
        "safe_placement": solved.safe_placement(),
        "eternal_domination_number": domination_number,
    });
    match serde_json::to_string_pretty(&out) {
        Ok(s) => println!("{s}"),
        Err(e) => {
            eprintln!("Failed to serialize output: {e}");
            std::process::exit(1);
        }
    }
}
