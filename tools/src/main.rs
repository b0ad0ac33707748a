use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use bedrock_tools::{encode_packets, format_report_pretty, inspect_batch, inspect_frame};
use clap::{Args, Parser, Subcommand, ValueEnum};
use glob::Pattern;
use packet::{EntityRuntimeId, GamePacket, MoveActorDelta, OnScreenTextureAnimation, Vec3};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt as _, util::SubscriberInitExt as _};

#[derive(Parser)]
#[command(
    name = "bedrock-tools",
    version,
    about = "bedrock packet inspection and encoding tools"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Decode frames and print packet structure and sizes.
    Inspect {
        /// Path to a frame/batch file, or a directory of them.
        path: PathBuf,
        /// Parse input as a length-prefixed batch instead of a single frame.
        #[arg(long)]
        batch: bool,
        /// Optional glob filter when inspecting a directory.
        #[arg(long)]
        glob: Option<String>,
        /// Output format.
        #[arg(long, value_enum, default_value_t = OutputFormat::Pretty)]
        format: OutputFormat,
    },
    /// Encode a single packet to a file.
    Encode {
        #[command(subcommand)]
        packet: EncodePacket,
        /// Output file.
        #[arg(long, global = true)]
        out: Option<PathBuf>,
        /// Wrap the frame in a one-element batch.
        #[arg(long, global = true)]
        batch: bool,
    },
}

#[derive(Subcommand)]
enum EncodePacket {
    /// Sparse entity movement.
    MoveActorDelta(MoveArgs),
    /// Screen animation.
    TextureAnimation {
        #[arg(long, allow_negative_numbers = true)]
        animation_type: i32,
    },
}

#[derive(Args)]
struct MoveArgs {
    /// Entity runtime ID.
    #[arg(long)]
    entity: u64,
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    dx: f32,
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    dy: f32,
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    dz: f32,
    /// Rotation deltas in degrees.
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    rx: f32,
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    ry: f32,
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    rz: f32,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    Json,
    Pretty,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Inspect {
            path,
            batch,
            glob,
            format,
        } => {
            if path.is_dir() {
                for entry in collect_entries(&path, glob.as_deref())? {
                    println!("== {} ==", entry.display());
                    inspect_file(&entry, batch, format)?;
                }
            } else {
                inspect_file(&path, batch, format)?;
            }
        }
        Command::Encode { packet, out, batch } => {
            let Some(out) = out else {
                bail!("--out is required for encode");
            };
            let packet = match packet {
                EncodePacket::MoveActorDelta(args) => GamePacket::from(MoveActorDelta::new(
                    EntityRuntimeId::new(args.entity),
                    Vec3::new(args.dx, args.dy, args.dz),
                    Vec3::new(args.rx, args.ry, args.rz),
                )),
                EncodePacket::TextureAnimation { animation_type } => {
                    GamePacket::from(OnScreenTextureAnimation::new(animation_type))
                }
            };
            let bytes = encode_packets(&[packet], batch, &wire::Limits::default())
                .context("encode packet")?;
            fs::write(&out, &bytes).with_context(|| format!("write {}", out.display()))?;
            info!(path = %out.display(), bytes = bytes.len(), "wrote frame");
        }
    }
    Ok(())
}

fn inspect_file(path: &Path, batch: bool, format: OutputFormat) -> Result<()> {
    let bytes = fs::read(path).with_context(|| format!("read {}", path.display()))?;
    let limits = wire::Limits::default();
    let report = if batch {
        inspect_batch(&bytes, &limits)
    } else {
        inspect_frame(&bytes, &limits)
    }
    .with_context(|| format!("decode {}", path.display()))?;

    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&report).context("serialize json")?;
            println!("{json}");
        }
        OutputFormat::Pretty => print!("{}", format_report_pretty(&report)),
    }
    Ok(())
}

fn collect_entries(dir: &Path, glob: Option<&str>) -> Result<Vec<PathBuf>> {
    let pattern = glob
        .map(|value| Pattern::new(value).context("invalid glob pattern"))
        .transpose()?;

    let mut entries = Vec::new();
    for entry in fs::read_dir(dir).with_context(|| format!("read dir {}", dir.display()))? {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        if let Some(pattern) = &pattern {
            let matches_path = pattern.matches_path(&path);
            let matches_name = path
                .file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| pattern.matches(name));
            if !matches_path && !matches_name {
                continue;
            }
        }
        entries.push(path);
    }
    entries.sort();
    Ok(entries)
}
