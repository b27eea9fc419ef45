use std::env;
use std::fs;
use std::process;
use std::time::Duration;

use clap::{App, Arg, ArgGroup, ArgMatches};

use sokoban_search::config::{Config, Format, Method};
use sokoban_search::level::Level;
use sokoban_search::solver::SolverErr;
use sokoban_search::Solve;

fn main() {
    env_logger::init();

    let matches = App::new("sokoban-search")
        .author("martin-t")
        .version(env!("CARGO_PKG_VERSION"))
        .arg(
            Arg::with_name("bidirectional")
                .short("b")
                .long("bidirectional")
                .help("Bidirectional breadth-first search (default)"),
        ).arg(
            Arg::with_name("iterative-deepening")
                .short("i")
                .long("iterative-deepening")
                .help("Iterative deepening depth-first search"),
        ).group(ArgGroup::with_name("method").args(&["bidirectional", "iterative-deepening"]))
        .arg(
            Arg::with_name("xsb")
                .short("x")
                .long("xsb")
                .help("Parse as XSB"),
        ).arg(
            Arg::with_name("grid")
                .short("g")
                .long("grid")
                .help("Parse as a height/width header followed by rows of cells"),
        ).group(ArgGroup::with_name("format").args(&["xsb", "grid"]))
        .arg(
            Arg::with_name("min-depth")
                .long("min-depth")
                .takes_value(true)
                .value_name("N")
                .help("First depth limit of iterative deepening"),
        ).arg(
            Arg::with_name("max-depth")
                .long("max-depth")
                .takes_value(true)
                .value_name("N")
                .help("Depth limit at which iterative deepening gives up (exclusive)"),
        ).arg(
            Arg::with_name("time-limit")
                .long("time-limit")
                .takes_value(true)
                .value_name("SECS")
                .help("Time budget for each depth limit of iterative deepening"),
        ).arg(
            Arg::with_name("path-limit")
                .long("path-limit")
                .takes_value(true)
                .value_name("N")
                .help("Longest solution path that will be reconstructed"),
        ).arg(
            Arg::with_name("stats")
                .short("s")
                .long("stats")
                .help("Print search statistics"),
        ).arg(Arg::with_name("file").required(true))
        .get_matches();

    let config = config(&matches);
    let path = matches.value_of("file").unwrap();

    let level = fs::read_to_string(path).unwrap_or_else(|err| {
        let current_dir = env::current_dir().unwrap();
        println!(
            "Can't read file {} in {}: {}",
            path,
            current_dir.display(),
            err
        );
        process::exit(1);
    });

    let parsed = if matches.is_present("xsb") {
        Level::parse_format(&level, Format::Xsb)
    } else if matches.is_present("grid") {
        Level::parse_format(&level, Format::Grid)
    } else {
        level.parse()
    };
    let level = parsed.unwrap_or_else(|err| {
        println!("Failed to parse: {}", err);
        process::exit(1);
    });

    println!("Solving {} using {}...", path, config.method);
    let solver_ok = level.solve(config).unwrap_or_else(|err| {
        println!("{}", err);
        match err {
            SolverErr::TimeExceeded(_) => process::exit(2),
            SolverErr::PathReconstructionOverflow(_) => process::exit(1),
        }
    });

    if matches.is_present("stats") {
        println!("{}", solver_ok.stats);
        if let Some(ref backward_stats) = solver_ok.backward_stats {
            println!("Backward search:");
            println!("{}", backward_stats);
        }
    }

    match (solver_ok.path_states, solver_ok.moves) {
        (Some(states), Some(moves)) => {
            println!("Found solution:");
            for state in &states {
                println!("{}", level.map.format_with_state(state));
            }
            println!("{}", moves);
            println!("Moves: {}", moves.move_cnt());
            println!("Pushes: {}", moves.push_cnt());
        }
        _ => println!("No solution"),
    }
}

fn config(matches: &ArgMatches<'_>) -> Config {
    let method = if matches.is_present("iterative-deepening") {
        Method::IterativeDeepening
    } else {
        Method::Bidirectional
    };
    let mut config = Config::new(method);

    if let Some(min_depth) = number(matches, "min-depth") {
        config.limits.min_depth = min_depth;
    }
    if let Some(max_depth) = number(matches, "max-depth") {
        config.limits.max_depth = max_depth;
    }
    if let Some(secs) = number(matches, "time-limit") {
        config.limits.time_budget = Duration::from_secs(secs);
    }
    if let Some(max_path_len) = number(matches, "path-limit") {
        config.max_path_len = max_path_len;
    }
    config
}

fn number<T: std::str::FromStr>(matches: &ArgMatches<'_>, name: &str) -> Option<T> {
    matches.value_of(name).map(|value| {
        value.parse().unwrap_or_else(|_| {
            println!("Invalid value for --{}: {}", name, value);
            process::exit(1);
        })
    })
}
