use camino::Utf8PathBuf;
use clap::Parser;
use sky_sim::config::SimConfig;
use sky_sim::constants::{DEFAULT_CATALOGUE_PATH, DEFAULT_HALF_WIDTH, DEFAULT_STAR_COUNT};
use sky_sim::ensemble::ensemble_size;
use sky_sim::sky_sim::run;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "sky_sim")]
#[command(about = "Generate a synthetic star catalogue around a sky position")]
struct Cli {
    /// Reference right ascension in decimal degrees (default: Andromeda)
    #[arg(long, allow_negative_numbers = true)]
    ra: Option<f64>,

    /// Reference declination in decimal degrees (default: Andromeda)
    #[arg(long, allow_negative_numbers = true)]
    dec: Option<f64>,

    /// Number of stars to generate
    #[arg(
        long,
        short = 'n',
        default_value_t = DEFAULT_STAR_COUNT as i64,
        allow_negative_numbers = true
    )]
    count: i64,

    /// Half width of the square scatter region, in degrees
    #[arg(long, default_value_t = DEFAULT_HALF_WIDTH)]
    half_width: f64,

    /// Seed of the random generator (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Catalogue destination
    #[arg(long, short = 'o', default_value = DEFAULT_CATALOGUE_PATH)]
    output: Utf8PathBuf,

    /// Write an SVG scatter preview to this path
    #[arg(long)]
    plot: Option<Utf8PathBuf>,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn setup_logging(base_level: &str) -> anyhow::Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(base_level))?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("logger initialization failed: {e}"))
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    setup_logging(&cli.log_level)?;

    let config = SimConfig {
        ra_deg: cli.ra,
        dec_deg: cli.dec,
        count: ensemble_size(cli.count)?,
        half_width: cli.half_width,
        seed: cli.seed,
        output: cli.output,
        plot: cli.plot,
    };

    let catalogue = run(&config)?;
    println!("{} stars written to {}", catalogue.len(), config.output);
    Ok(())
}
