use std::io;
use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};

use gpx_motion_metrics::batch::analyze_folder;
use gpx_motion_metrics::config::{AnalysisConfig, DEFAULT_WINDOW};
use gpx_motion_metrics::gpx_source::read_track;
use gpx_motion_metrics::report::{print_report, write_plot_csv};
use gpx_motion_metrics::{analyze_track, DistanceMethod, MotionReport};

#[derive(Parser)]
#[command(name = "gpx-motion-metrics", about = "Velocity, climb rate and elevation over time from GPX tracks")]
struct Cli {
    #[arg(help = "GPX file, or a folder to analyze every GPX file in it")]
    path: PathBuf,

    #[arg(short, long, default_value_t = DEFAULT_WINDOW, allow_negative_numbers = true, help = "Moving-average window in samples")]
    window: i64,

    #[arg(short, long, value_enum, default_value_t = DistanceArg::Geodesic)]
    distance: DistanceArg,

    #[arg(short, long, value_enum, default_value_t = OutputFormat::Summary)]
    format: OutputFormat,
}

#[derive(Clone, Copy, ValueEnum)]
enum DistanceArg {
    Geodesic,
    Haversine,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Summary,
    Csv,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = AnalysisConfig {
        window: cli.window,
        distance: match cli.distance {
            DistanceArg::Geodesic => DistanceMethod::Geodesic,
            DistanceArg::Haversine => DistanceMethod::Haversine,
        },
    };
    config.validate()?;

    if cli.path.is_dir() {
        run_folder(&cli.path, &config, cli.format)
    } else {
        let track = read_track(&cli.path)?;
        let report = analyze_track(&track, &config)?;
        emit(&cli.path, &report, cli.format)
    }
}

fn run_folder(folder: &Path, config: &AnalysisConfig, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let start_time = std::time::Instant::now();
    if format == OutputFormat::Summary {
        println!("⚡ Using parallel processing on {} cores", num_cpus::get());
    }

    let outcomes = analyze_folder(folder, config)?;
    let mut reports = Vec::new();

    for outcome in &outcomes {
        match &outcome.report {
            Ok(report) => {
                if format == OutputFormat::Summary {
                    println!("\n📄 {}", outcome.path.display());
                    print_report(report);
                }
                reports.push((outcome.path.as_path(), report));
            }
            Err(e) => eprintln!("❌ Error processing {}: {}", outcome.path.display(), e),
        }
    }

    if format == OutputFormat::Csv {
        write_plot_csv(io::stdout().lock(), &reports)?;
    }

    if format == OutputFormat::Summary {
        println!(
            "\n✅ Processed {} of {} GPX files in {:.2}s",
            reports.len(),
            outcomes.len(),
            start_time.elapsed().as_secs_f64()
        );
    }

    Ok(())
}

fn emit(path: &Path, report: &MotionReport, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    match format {
        OutputFormat::Summary => print_report(report),
        OutputFormat::Csv => write_plot_csv(io::stdout().lock(), &[(path, report)])?,
    }
    Ok(())
}
