use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use artfs_core::generate::{Generator, GeneratorConfig};
use artfs_core::manifest::Manifest;
use artfs_core::progress::Progress;

#[derive(Parser)]
#[command(name = "artfs", version, about = "artifact manifest generator")]
struct Cli {
    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    /// Generate a manifest by scanning a local directory
    Generate {
        /// Artifact identifier, e.g. "llama-7b"
        #[arg(long)]
        id: String,
        /// Version tag, e.g. "v1.0"
        #[arg(long)]
        version: String,
        /// Base URL under which every file will be retrievable
        #[arg(long)]
        url_prefix: String,
        /// Path the consumer should fetch eagerly at mount time (repeatable)
        #[arg(long)]
        prefetch: Vec<String>,
        /// Write the manifest here instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
        #[arg(long, default_value_t = false)]
        progress: bool,
        /// Directory to scan
        dir: PathBuf,
    },
    /// Print a summary of an existing manifest
    Show { manifest: PathBuf },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Cmd::Generate { id, version, url_prefix, prefetch, output, progress, dir } => {
            generate(&dir, id, version, url_prefix, prefetch, output.as_deref(), progress)?;
        }
        Cmd::Show { manifest } => show(&manifest)?,
    }
    Ok(())
}

fn generate(
    dir: &Path,
    id: String,
    version: String,
    url_prefix: String,
    prefetch: Vec<String>,
    output: Option<&Path>,
    show_progress: bool,
) -> Result<()> {
    let cfg = GeneratorConfig {
        artifact_id: id,
        version,
        url_prefix,
        prefetch,
        ..Default::default()
    };
    let prog = Progress::new(show_progress);
    prog.start();
    let manifest = Generator::generate_with_progress(dir, &cfg, &prog);
    prog.stop();
    let text = manifest?.to_json_pretty()?;
    match output {
        Some(path) => std::fs::write(path, text.as_bytes())
            .with_context(|| format!("write {}", path.display()))?,
        None => println!("{text}"),
    }
    Ok(())
}

fn show(path: &Path) -> Result<()> {
    let m = Manifest::load(path)?;
    let total: u64 = m.files.iter().map(|f| f.size).sum();
    println!("artifact: {} {}", m.artifact_id, m.version);
    println!("mount:    {}", m.mount_path);
    println!("prefetch: {}", m.prefetch.len());
    println!("files:    {}", m.files.len());
    println!("bytes:    {total}");
    Ok(())
}
