use std::{env, io, process};
use intervals::{available_days, puzzle, Input, Options};

const USAGE: &str = "usage: interval-merge [day] [inputs_dir]";

fn load_options(args: &[String]) -> Options {
    let mut options = Options::default();
    if let Ok(dir) = env::var("AOC_INPUTS") {
        options.inputs_dir = dir;
    }
    if let Ok(path) = env::var("AOC_LOG_CONFIG") {
        options.log_config = path;
    }
    if let Ok(flag) = env::var("AOC_EXAMPLE") {
        options.example = matches!(flag.as_str(), "1" | "true" | "yes");
    }
    if let Some(dir) = args.get(2) {
        options.inputs_dir = dir.clone();
    }
    options
}

fn init_logging(options: &Options) {
    if let Err(reason) = log4rs::init_file(&options.log_config, Default::default()) {
        eprintln!("logging disabled, cannot load {}: {}", options.log_config, reason);
    }
}

fn run(options: &Options, day: Option<u32>) -> io::Result<()> {
    let days = match day {
        Some(day) => vec![day],
        None => {
            let mut days = available_days(options)?;
            days.retain(|&day| puzzle::find(day).is_some());
            days
        }
    };
    if days.is_empty() {
        return Err(io::Error::new(io::ErrorKind::NotFound, format!("no solvable inputs in {}", options.inputs_dir)));
    }

    for day in days {
        let solver = puzzle::find(day)
            .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, format!("no solver for day {}", day)))?;
        let input = Input::load(options, day)?;
        let answer = puzzle::solve(solver.as_ref(), &input)?;

        println!("Day {:02}: {}", day, solver.name());
        println!("Part 1: {}", answer.part_one);
        println!("Part 2: {}", answer.part_two);
    }
    Ok(())
}

fn main() {
    let args: Vec<String> = env::args().collect();
    let day = match args.get(1).map(|arg| arg.parse::<u32>()) {
        None => None,
        Some(Ok(day)) => Some(day),
        Some(Err(_)) => {
            eprintln!("{}", USAGE);
            process::exit(2);
        }
    };

    let options = load_options(&args);
    init_logging(&options);

    if let Err(reason) = run(&options, day) {
        eprintln!("{}", reason);
        process::exit(1);
    }
}
