// vim: set ai et ts=4 sts=4 sw=4:
mod error;
mod util;
mod grid;
mod puzzle;
mod vents;
mod segments;
mod heightmap;
mod octopus;

use std::io;
use std::process;
use std::convert::TryFrom;
use std::path::PathBuf;
use clap::{App, Arg, ArgMatches, value_t};
use log::{debug, error, LevelFilter};

use self::error::Result;
use self::puzzle::{Day, Part, Options};
use self::util::{is_a_tty, read_input};

#[derive(Debug)]
pub struct Args {
    pub day: Day,
    pub part: Part,
    pub input: PathBuf,
    pub steps: usize,
    pub show: bool,
    pub verbosity: u64,
}

impl Args {
    pub fn parse() -> Self {
        let matches = App::new("advent2021")
            .version(env!("CARGO_PKG_VERSION"))
            .about("Solves one Advent of Code 2021 puzzle and prints the answer")
            .arg(Arg::with_name("day")
                     .help("Puzzle day: 5, 8, 9 or 11")
                     .required(true)
                     .index(1)
                     .validator(|s| Day::try_from(s.as_str()).map(|_| ())))
            .arg(Arg::with_name("part")
                     .help("Puzzle part")
                     .short("p")
                     .long("part")
                     .takes_value(true)
                     .possible_values(&["1", "2"])
                     .default_value("1"))
            .arg(Arg::with_name("input")
                     .help("Input file [default: day_NN/input.txt]")
                     .short("i")
                     .long("input")
                     .value_name("FILE")
                     .takes_value(true))
            .arg(Arg::with_name("steps")
                     .help("Number of steps to simulate for day 11 part 1")
                     .short("n")
                     .long("steps")
                     .value_name("N")
                     .takes_value(true)
                     .default_value("100"))
            .arg(Arg::with_name("show")
                     .help("Render the final grid to stderr")
                     .long("show"))
            .arg(Arg::with_name("verbose")
                     .help("Increase log verbosity (repeatable)")
                     .short("v")
                     .multiple(true))
            .get_matches();

        Self::from_matches(&matches).unwrap_or_else(|e| e.exit())
    }

    fn from_matches(matches: &ArgMatches) -> std::result::Result<Self, clap::Error> {
        let invalid = |msg: String| clap::Error::with_description(&msg, clap::ErrorKind::InvalidValue);

        let day = Day::try_from(matches.value_of("day").unwrap_or_default()).map_err(invalid)?;
        let part = Part::try_from(matches.value_of("part").unwrap_or("1"))
                       .map_err(|e| invalid(e.to_string()))?;
        let input = matches.value_of("input")
                           .map(PathBuf::from)
                           .unwrap_or_else(|| day.default_input());
        Ok(Args {
            day,
            part,
            input,
            steps:     value_t!(matches, "steps", usize)?,
            show:      matches.is_present("show"),
            verbosity: matches.occurrences_of("verbose"),
        })
    }
}

fn setup_logging(verbosity: u64) -> Result<()> {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!("[{}][{}] {}", record.level(), record.target(), message))
        })
        .level(level)
        .chain(io::stderr())
        .apply()?;
    Ok(())
}

fn run(args: &Args) -> Result<u64> {
    debug!("{:?}", args);

    let input = read_input(&args.input)?;
    let opts = Options {
        steps: args.steps,
        show: args.show,
        emit_color: is_a_tty(io::stderr()),
    };
    let solution = puzzle::solve(args.day, args.part, &input, &opts)?;
    if let Some(rendering) = solution.rendering {
        eprint!("{}", rendering);
    }
    Ok(solution.answer)
}

fn main() {
    let args = Args::parse();
    if let Err(e) = setup_logging(args.verbosity) {
        eprintln!("error: {}", e);
        process::exit(1);
    }
    match run(&args) {
        Ok(answer) => println!("{}", answer),
        Err(e)     => {
            error!("{}", e);
            process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn args(day: Day, input: PathBuf) -> Args {
        Args { day, part: Part::One, input, steps: 100, show: false, verbosity: 0 }
    }

    #[test]
    fn missing_input_is_file_not_found() {
        let path = PathBuf::from("no_such_day/input.txt");
        match run(&args(Day::Vents, path.clone())) {
            Err(Error::FileNotFound(p)) => assert_eq!(p, path),
            other => panic!("expected FileNotFound, got {:?}", other),
        }
    }

    #[test]
    fn malformed_input_is_reported_as_an_error() {
        let path = std::env::temp_dir().join(format!("advent2021-main-{}.txt", process::id()));
        std::fs::write(&path, "0,9 -> 5\n").unwrap();
        let result = run(&args(Day::Vents, path.clone()));
        std::fs::remove_file(&path).unwrap();
        assert!(matches!(result, Err(Error::InputFormat { line: 1, .. })));
    }

    #[test]
    fn solves_from_an_input_file() {
        let path = std::env::temp_dir().join(format!("advent2021-main-ok-{}.txt", process::id()));
        std::fs::write(&path, "0,9 -> 5,9\n0,9 -> 2,9\n").unwrap();
        let result = run(&args(Day::Vents, path.clone()));
        std::fs::remove_file(&path).unwrap();
        assert_eq!(result.unwrap(), 3);
    }
}
