extern crate clap;
#[macro_use]
extern crate log;

use ansi_term::Colour::Red;
use bit::lang::ast::Program;
use bit::lang::{parse, Error};
use bit::mach::{BitSink, BitSource, ByteSink, DigitSink, Runtime, TextSource};
use clap::{App, Arg, ArgMatches};
use std::io::Read;

fn main() {
    let args = process_arguments();
    initialize_logging(args.occurrences_of("verbose"));

    ctrlc::set_handler(|| std::process::exit(130)).ok();

    let path = args.value_of("INPUT").unwrap();
    let source = match read_source(path) {
        Ok(source) => source,
        Err(err) => {
            error!("fatal: unable to read input file `{}`: {}", path, err);
            std::process::exit(1);
        }
    };

    let program = parse(&source).unwrap_or_else(|error| fail(&error));
    info!("parsed {} lines, entry line {}", program.len(), program.entry());

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let input = TextSource::new(stdin.lock());
    let result = if args.is_present("ascii") {
        run(input, ByteSink::new(stdout.lock()), &program)
    } else {
        run(input, DigitSink::new(stdout.lock()), &program)
    };
    if let Err(error) = result {
        fail(&error);
    }
}

fn run<R: BitSource, W: BitSink>(input: R, output: W, program: &Program) -> Result<(), Error> {
    Runtime::new(input, output).run(program)
}

fn read_source(path: &str) -> std::io::Result<String> {
    let mut source = String::new();
    if path == "-" {
        std::io::stdin().read_to_string(&mut source)?;
    } else {
        std::fs::File::open(path)?.read_to_string(&mut source)?;
    }
    Ok(source)
}

fn fail(error: &Error) -> ! {
    eprintln!("{}", Red.paint(error.to_string()));
    std::process::exit(1);
}

fn process_arguments() -> ArgMatches<'static> {
    App::new(option_env!("CARGO_PKG_NAME").unwrap())
        .version(option_env!("CARGO_PKG_VERSION").unwrap())
        .about(option_env!("CARGO_PKG_DESCRIPTION").unwrap())
        .arg(
            Arg::with_name("INPUT")
                .help("BIT program to run, or - for standard input")
                .required(true)
                .multiple(false)
                .index(1),
        )
        .arg(
            Arg::with_name("ascii")
                .short("a")
                .long("ascii")
                .takes_value(false)
                .help("pack every 8 printed bits into one output byte"),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .multiple(true)
                .takes_value(false)
                .help("Sets the level of verbosity"),
        )
        .get_matches()
}

fn initialize_logging(verbosity: u64) {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "{}[{}][{}] {}",
                chrono::Local::now().format("[%Y-%m-%d][%H:%M:%S]"),
                record.target(),
                record.level(),
                message
            ))
        })
        .level(match verbosity {
            0 => log::LevelFilter::Error,
            1 => log::LevelFilter::Warn,
            2 => log::LevelFilter::Info,
            _ => log::LevelFilter::Trace,
        })
        .chain(std::io::stderr())
        .apply()
        .ok();
}
