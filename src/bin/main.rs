extern crate raytracer_core as root;

use root::config::get_settings;
use root::probe::probe;

#[macro_use]
extern crate tracing;

use structopt::StructOpt;
use tracing::Level;

#[derive(Debug, StructOpt)]
#[structopt(rename_all = "kebab-case")]
struct Opt {
    #[structopt(long, default_value = "data/probe.toml")]
    pub config_file: String,
    #[structopt(short = "l", long, default_value = "info")]
    pub log_level: String,
    #[structopt(short = "n", long)]
    pub dry_run: bool,
}

fn parse_log_level(level: String, default: Level) -> Level {
    match level.to_lowercase().as_str() {
        "warn" => Level::WARN,
        "info" => Level::INFO,
        "trace" => Level::TRACE,
        "error" => Level::ERROR,
        "debug" => Level::DEBUG,
        _ => default,
    }
}

fn main() -> anyhow::Result<()> {
    let opts = Opt::from_args();
    let level = parse_log_level(opts.log_level, Level::INFO);
    tracing_subscriber::fmt().with_max_level(level).init();

    let config = match get_settings(&opts.config_file) {
        Ok(expr) => expr,
        Err(v) => {
            error!("couldn't read {}, {:?}", opts.config_file, v);
            return Err(v);
        }
    };
    if opts.dry_run {
        info!(
            "dry run: config parsed, {} rays against {:?}",
            config.rays.len(),
            config.sphere
        );
        return Ok(());
    }

    let (hits, profile) = probe(&config);
    for (i, hit) in hits.iter().enumerate() {
        match (hit.point, hit.normal) {
            (Some(point), Some(normal)) => info!(
                "ray {}: t1 = {}, t2 = {}, point {:?}, normal {:?}{}",
                i,
                hit.intersection.t1,
                hit.intersection.t2,
                <[f32; 3]>::from(point),
                <[f32; 3]>::from(normal),
                if hit.started_inside {
                    " (origin inside sphere)"
                } else {
                    ""
                }
            ),
            _ => info!("ray {}: miss", i),
        }
    }
    profile.pretty_print();
    Ok(())
}
