#[macro_use]
extern crate clap;
#[macro_use]
extern crate log;

use std::path::PathBuf;
use std::process;

use clap::{AppSettings, Arg, ArgMatches, SubCommand};
use ptsdk::pts_model::Track;

fn main() {
    env_logger::init();
    match run() {
        Ok(()) => debug!("done"),
        Err(e) => {
            error!("fatal error: {}", e);
            process::exit(1);
        }
    }
}

#[derive(Debug)]
enum Error {
    MissingParameter(&'static str),
    InvalidParameter { name: &'static str, value: String },
    Unreadable(usize),
    Ptsdk(Box<dyn std::error::Error>),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::MissingParameter(name) => write!(f, "missing parameter {}", name),
            Error::InvalidParameter { name, value } => {
                write!(f, "invalid value \"{}\" for {}", value, name)
            }
            Error::Unreadable(count) => write!(f, "{} file(s) could not be read", count),
            Error::Ptsdk(err) => write!(f, "{}", err),
        }
    }
}

fn run() -> Result<(), Error> {
    let output = Arg::with_name("OUTPUT")
        .help("Point file to write, \".dat\" is added when the name has no dot, prints to stdout if absent")
        .index(1);

    let matches = app_from_crate!()
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .subcommand(
            SubCommand::with_name("show")
                .about("Print the right and left points of point files, skipping bad lines")
                .arg(Arg::with_name("FILE").required(true).multiple(true)),
        )
        .subcommand(
            SubCommand::with_name("check")
                .about("Report skipped lines of point files, fail on unreadable files")
                .arg(Arg::with_name("FILE").required(true).multiple(true)),
        )
        .subcommand(
            SubCommand::with_name("gen-track")
                .about("Generate the competition track")
                .arg(
                    Arg::with_name("seed")
                        .short("s")
                        .long("seed")
                        .value_name("SEED")
                        .help("Seed of the straight section slalom")
                        .default_value("3")
                        .takes_value(true),
                )
                .arg(output.clone()),
        )
        .subcommand(
            SubCommand::with_name("gen-circle")
                .about("Generate a circular track")
                .arg(
                    Arg::with_name("radius")
                        .short("r")
                        .long("radius")
                        .value_name("METER")
                        .help("Radius of the right cone line")
                        .default_value("20")
                        .takes_value(true),
                )
                .arg(
                    Arg::with_name("cones")
                        .short("n")
                        .long("cones")
                        .value_name("COUNT")
                        .help("Number of cone pairs")
                        .default_value("20")
                        .takes_value(true),
                )
                .arg(output),
        )
        .get_matches();

    match matches.subcommand() {
        ("show", Some(sub)) => show(sub),
        ("check", Some(sub)) => check(sub),
        ("gen-track", Some(sub)) => {
            let seed = parse_value::<u64>(sub, "seed")?;
            export(ptsdk::gen_track(seed), sub.value_of("OUTPUT"))
        }
        ("gen-circle", Some(sub)) => {
            let radius = parse_value::<f64>(sub, "radius")?;
            let cones = parse_value::<usize>(sub, "cones")?;
            let track = ptsdk::gen_circular_track(radius, cones).map_err(Error::Ptsdk)?;
            export(track, sub.value_of("OUTPUT"))
        }
        _ => Err(Error::MissingParameter("subcommand")),
    }
}

fn parse_value<T: std::str::FromStr>(
    matches: &ArgMatches,
    name: &'static str,
) -> Result<T, Error> {
    let value = matches
        .value_of(name)
        .ok_or(Error::MissingParameter(name))?;
    value.parse::<T>().map_err(|_| Error::InvalidParameter {
        name,
        value: value.to_string(),
    })
}

fn show(matches: &ArgMatches) -> Result<(), Error> {
    let files = matches.values_of("FILE").ok_or(Error::MissingParameter("FILE"))?;
    for file in files {
        println!("{}: {:#?}", file, ptsdk::read_points(file));
    }
    Ok(())
}

fn check(matches: &ArgMatches) -> Result<(), Error> {
    let files = matches.values_of("FILE").ok_or(Error::MissingParameter("FILE"))?;
    let mut unreadable = 0;
    for file in files {
        match ptsdk::read_track(file) {
            Ok((_, report)) => {
                println!(
                    "{}: {} lines, {} right points, {} left points",
                    file, report.lines, report.right_points, report.left_points
                );
                if report.untargeted_lines > 0 {
                    println!("  {} lines before any section header", report.untargeted_lines);
                }
                if !report.skipped_lines.is_empty() {
                    println!("  skipped lines: {:?}", report.skipped_lines);
                }
            }
            Err(err) => {
                eprintln!("read file {} error: {}", file, err);
                unreadable += 1;
            }
        }
    }
    if unreadable > 0 {
        return Err(Error::Unreadable(unreadable));
    }
    Ok(())
}

/// add ".dat" when the name has no dot at all, "out.d/map" is kept as is
fn output_path(output: &str) -> PathBuf {
    if output.contains('.') {
        PathBuf::from(output)
    } else {
        PathBuf::from(format!("{}.dat", output))
    }
}

fn export(track: Track, output: Option<&str>) -> Result<(), Error> {
    match output {
        Some(output) => {
            let path = output_path(output);
            ptsdk::serialize_points(&path, &track.right, &track.left).map_err(Error::Ptsdk)?;
            info!("serialized the map points into {}", path.display());
        }
        None => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            ptsdk::write_points(&mut handle, &track.right, &track.left)
                .map_err(|err| Error::Ptsdk(Box::new(err)))?;
        }
    }
    Ok(())
}
