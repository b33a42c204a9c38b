use std::path::PathBuf;

use clap::ValueHint;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, clap::ValueEnum)]
pub enum LogFormat {
    /// One line per event
    Compact,
    /// Multi-line events with source locations
    Pretty,
}

impl std::fmt::Display for LogFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogFormat::Compact => f.write_str("compact"),
            LogFormat::Pretty => f.write_str("pretty"),
        }
    }
}

#[derive(Debug, clap::Parser)]
#[command(author, version, about)]
pub struct Cli {
    /// Logging output filters; comma-separated
    #[arg(
        short,
        long,
        default_value = "warn,objgen=info,quad=info",
        env = "QUAD_LOG_FILTER"
    )]
    pub log_filter: String,
    /// Logging output format
    #[arg(long, default_value_t = LogFormat::Pretty)]
    pub log_format: LogFormat,
    /// Name of the generated mesh; used as the output file stem
    #[arg(short, long, default_value = "quad")]
    pub name: String,
    /// Side length of the quad
    #[arg(short, long, default_value_t = 1.0)]
    pub size: f64,
    /// Directory containing the texture image
    #[arg(long, default_value = "./", value_hint = ValueHint::DirPath)]
    pub image_path: PathBuf,
    /// File name of the texture image; if omitted, no material is written
    #[arg(long)]
    pub image_name: Option<String>,
    /// Don't write vertex normals
    #[arg(long)]
    pub no_normals: bool,
    /// Don't write texture coordinates
    #[arg(long)]
    pub no_texcoords: bool,
    /// Write the specular, shininess, refraction, and dissolve terms of the material
    #[arg(long)]
    pub extended_mtl: bool,
    /// Directory to write output files into
    #[arg(value_hint = ValueHint::DirPath)]
    pub output: PathBuf,
}

/// Log to stderr with local wall-clock timestamps.
///
/// The local offset has to be read before any other thread exists, so call this first.
pub(crate) fn initialize_tracing(log_filter: &str, log_format: LogFormat) {
    let offset = time::UtcOffset::current_local_offset();
    let timer = tracing_subscriber::fmt::time::OffsetTime::new(
        offset.unwrap_or(time::UtcOffset::UTC),
        time::macros::format_description!("[hour]:[minute]:[second]"),
    );
    let tsub = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_timer(timer)
        .with_target(false)
        .with_env_filter(log_filter);

    match log_format {
        LogFormat::Compact => tsub.compact().init(),
        LogFormat::Pretty => tsub.pretty().init(),
    }
    if let Err(e) = offset {
        tracing::warn!("couldn't get local time offset, logging in UTC: {e}");
    }
}
