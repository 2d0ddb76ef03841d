use eternal_domination::eternal::{eternal_domination_number, EternalDomination, Ruleset};
use eternal_domination::graph::Graph;
use eternal_domination::round::{Mode, Move, Round};
use eternal_domination::scenario::ResourceLimits;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

const MAX_PLIES: usize = 200;

fn usage() -> ! {
    eprintln!(
        "Usage: eds_selfplay [path|cycle|grid|biclique] [size] [guards] [one|many] [rounds] [seed]"
    );
    std::process::exit(2);
}

fn arg<T: std::str::FromStr>(args: &[String], i: usize, default: T) -> T {
    match args.get(i) {
        None => default,
        Some(s) => s.parse().unwrap_or_else(|_| usage()),
    }
}

fn main() {
    let _ = TermLogger::init(
        LevelFilter::Info,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    );

    let args: Vec<String> = std::env::args().collect();
    let kind = args.get(1).map(String::as_str).unwrap_or("cycle");
    let size: usize = arg(&args, 2, 6);
    let guards: Option<usize> = args.get(3).map(|s| s.parse().unwrap_or_else(|_| usage()));
    let ruleset = match args.get(4).map(String::as_str).unwrap_or("many") {
        "one" => Ruleset::OneGuard,
        "many" => Ruleset::ManyGuards,
        _ => usage(),
    };
    let rounds: usize = arg(&args, 5, 3);
    let seed: u64 = arg(&args, 6, 0);

    let graph = match kind {
        "path" => Graph::path(size),
        "cycle" => Graph::cycle(size),
        "grid" => Graph::grid(size, size),
        "biclique" => Graph::biclique(size / 2, size - size / 2),
        _ => usage(),
    };

    let limits = ResourceLimits::default();
    let guards = match guards {
        Some(k) => k,
        None => match eternal_domination_number(&graph, ruleset, &limits) {
            Ok(k) => k,
            Err(e) => {
                eprintln!("Could not compute a guard count: {e}");
                std::process::exit(1);
            }
        },
    };

    // Start from a defensible placement when there is one.
    let placement: Vec<u16> = EternalDomination::build_with_limits(&graph, ruleset, guards, &limits)
        .ok()
        .and_then(|solved| solved.safe_placement())
        .unwrap_or_else(|| (0..guards.min(graph.len()) as u16).collect());
    log::info!("initial placement {placement:?}");

    let mut rng = SmallRng::seed_from_u64(seed);
    let mut attacker_wins = 0usize;

    for r in 0..rounds {
        let mut round = Round::new(graph.clone(), ruleset, Mode::Machine).with_limits(limits);
        for &v in &placement {
            round.toggle_guard(v);
        }
        if let Err(e) = round.start() {
            eprintln!("Could not start round: {e}");
            std::process::exit(1);
        }

        let mut plies = 0usize;
        while plies < MAX_PLIES {
            let Some(mv) = round.machine_move(&mut rng) else {
                break;
            };
            if let Move::Attack(v) = mv {
                log::debug!("round {r}: attack on {v}");
            }
            if round.play(mv).is_none() {
                log::warn!("round {r}: machine move rejected");
                break;
            }
            plies += 1;
        }

        if round.is_level_finished() {
            attacker_wins += 1;
            log::info!("round {r}: attacker wins after {plies} plies");
        } else {
            log::info!(
                "round {r}: guards hold for {plies} plies, final guards {:?}",
                round.position().guards
            );
        }
    }

    println!("Graph: {kind} ({} vertices, {} edges)", graph.len(), graph.edge_count());
    println!("Ruleset: {ruleset:?}, guards: {guards}");
    println!("Attacker wins: {attacker_wins}/{rounds}");
}
