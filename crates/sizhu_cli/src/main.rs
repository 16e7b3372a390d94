use chrono::{Datelike, NaiveDateTime, Utc};
use clap::{Parser, Subcommand};

use sizhu_core::Stem;
use sizhu_engine::{Gender, stem_relation};
use sizhu_rs::{chart_from_names, chart_report, full_report, parse_pair};
use sizhu_time::{total_correction_minutes, true_solar_time};

#[derive(Parser)]
#[command(name = "sizhu", about = "Sizhu Four Pillars CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Full chart report as JSON from four pillars
    Report {
        /// Year pillar (e.g. 甲子)
        year: String,
        /// Month pillar
        month: String,
        /// Day pillar
        day: String,
        /// Hour pillar
        hour: String,
        /// Subject gender (male/female); enables the fortune progression
        #[arg(long)]
        gender: Option<String>,
        /// Birth year, required with --gender
        #[arg(long)]
        birth_year: Option<i32>,
        /// First-decade start age (defaults to the fixed fallback)
        #[arg(long)]
        start_age: Option<u8>,
        /// Reference year for position tracking (defaults to this year)
        #[arg(long)]
        reference_year: Option<i32>,
    },
    /// True solar time for a civil timestamp and longitude
    SolarTime {
        /// Civil timestamp (YYYY-MM-DDThh:mm:ss)
        datetime: String,
        /// Longitude in decimal degrees east
        #[arg(long, default_value_t = sizhu_time::DEFAULT_COORDINATE.0)]
        longitude: f64,
    },
    /// Ten-gods relation between a day-master and a target stem
    Relation {
        /// Day-master stem glyph (e.g. 甲)
        day_master: String,
        /// Target stem glyph
        target: String,
    },
    /// Void branches of a day pillar
    Voids {
        /// Day pillar (e.g. 甲子)
        day: String,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    if let Err(e) = run(Cli::parse()) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Report {
            year,
            month,
            day,
            hour,
            gender,
            birth_year,
            start_age,
            reference_year,
        } => {
            let chart = chart_from_names([&year, &month, &day, &hour])?;
            let report = match gender {
                Some(g) => {
                    let gender = parse_gender(&g)?;
                    let birth_year =
                        birth_year.ok_or("--birth-year is required with --gender")?;
                    let reference = reference_year.unwrap_or_else(|| Utc::now().year());
                    full_report(&chart, gender, birth_year, start_age, reference)
                }
                None => chart_report(&chart),
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        Commands::SolarTime {
            datetime,
            longitude,
        } => {
            let civil: NaiveDateTime = datetime.parse()?;
            let solar = true_solar_time(civil, longitude)?;
            let correction = total_correction_minutes(civil, longitude);
            println!("civil:      {civil}");
            println!("correction: {correction:+.2} minutes");
            println!("solar:      {solar}");
        }
        Commands::Relation { day_master, target } => {
            let dm = parse_stem(&day_master)?;
            let t = parse_stem(&target)?;
            let god = stem_relation(dm, t);
            println!("{} ({})", god.name(), god.abbreviation());
        }
        Commands::Voids { day } => {
            let (stem, branch) = parse_pair(&day)?;
            let pillar =
                sizhu_core::Pillar::new(stem, branch, sizhu_core::PillarSlot::Day)?;
            let (a, b) = sizhu_core::void_pair(pillar);
            println!("{} {}", a.name(), b.name());
        }
    }
    Ok(())
}

fn parse_gender(text: &str) -> Result<Gender, String> {
    match text {
        "male" | "m" | "男" => Ok(Gender::Male),
        "female" | "f" | "女" => Ok(Gender::Female),
        other => Err(format!("unknown gender {other:?} (use male/female)")),
    }
}

fn parse_stem(glyph: &str) -> Result<Stem, String> {
    Stem::from_name(glyph).ok_or_else(|| format!("unknown stem glyph {glyph:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gender_parsing() {
        assert_eq!(parse_gender("male").unwrap(), Gender::Male);
        assert_eq!(parse_gender("女").unwrap(), Gender::Female);
        assert!(parse_gender("x").is_err());
    }

    #[test]
    fn stem_parsing() {
        assert_eq!(parse_stem("甲").unwrap(), Stem::Jia);
        assert!(parse_stem("子").is_err());
    }
}
