//! Composite templates CLI
//!
//! Usage:
//!   composite-templates [OPTIONS] [NAME]
//!
//! Options:
//!   -m, --manifest <FILE>  Manifest describing the composites (TOML format)
//!   -r, --root <DIR>       Directory fragment paths are relative to
//!   -d, --data <FILE>      JSON data to render with ("-" for stdin)
//!   -l, --list             List composite names and their fragments
//!   --no-autoescape        Disable HTML auto-escaping
//!   -h, --help             Print help

use std::error::Error;
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use clap::Parser;
use tracing_subscriber::EnvFilter;

use composite_templates::{DirSource, FunctionMap, Manifest, TemplateRegistry};

#[derive(Parser)]
#[command(name = "composite-templates")]
#[command(about = "Render composite templates assembled from file fragments")]
struct Cli {
    /// Composite template to render
    #[arg(required_unless_present = "list")]
    name: Option<String>,

    /// Manifest describing the composites (TOML format)
    #[arg(short, long, default_value = "templates.toml")]
    manifest: PathBuf,

    /// Directory fragment paths are relative to (defaults to the manifest's directory)
    #[arg(short, long)]
    root: Option<PathBuf>,

    /// JSON data to render with ("-" reads stdin)
    #[arg(short, long)]
    data: Option<PathBuf>,

    /// List composite names and their fragments
    #[arg(short, long)]
    list: bool,

    /// Disable HTML auto-escaping
    #[arg(long)]
    no_autoescape: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let manifest = match Manifest::from_file(&cli.manifest) {
        Ok(m) => m,
        Err(e) => fail(&format!("loading manifest '{}'", cli.manifest.display()), &e),
    };
    let (spec, mut config) = manifest.into_parts();
    if cli.no_autoescape {
        config = config.with_autoescape(false);
    }

    let root = cli
        .root
        .clone()
        .unwrap_or_else(|| manifest_dir(&cli.manifest));
    tracing::debug!(root = %root.display(), "resolving fragments");

    let registry = match TemplateRegistry::build_with_config(
        DirSource::new(root),
        &spec,
        &FunctionMap::new(),
        &config,
    ) {
        Ok(r) => r,
        Err(e) => fail("building templates", &e),
    };

    if cli.list {
        let mut names: Vec<_> = registry.names().collect();
        names.sort_unstable();
        for name in names {
            let fragments = registry.fragments(name).unwrap_or_default();
            println!("{}: {}", name, fragments.join(", "));
        }
        return;
    }

    let Some(name) = cli.name.as_deref() else {
        return;
    };

    let data = match read_data(cli.data.as_deref()) {
        Ok(d) => d,
        Err(e) => fail("reading data", &*e),
    };

    // Buffered so a failed render leaves stdout untouched
    let output = match registry.render_to_string(name, &data, None) {
        Ok(out) => out,
        Err(e) => fail(&format!("rendering '{}'", name), &e),
    };
    if let Err(e) = io::stdout().lock().write_all(output.as_bytes()) {
        fail("writing output", &e);
    }
}

/// Directory containing the manifest, used as the default fragment root
fn manifest_dir(manifest: &Path) -> PathBuf {
    match manifest.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

/// Read JSON render data from a file, stdin, or default to an empty object
fn read_data(path: Option<&Path>) -> Result<serde_json::Value, Box<dyn Error>> {
    let text = match path {
        None => return Ok(serde_json::Value::Object(Default::default())),
        Some(p) if p == Path::new("-") => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
        Some(p) => fs::read_to_string(p)?,
    };
    Ok(serde_json::from_str(&text)?)
}

/// Print an error with its cause chain and exit
fn fail(context: &str, err: &dyn Error) -> ! {
    eprintln!("Error {}: {}", context, err);
    let mut cause = err.source();
    while let Some(e) = cause {
        eprintln!("  caused by: {}", e);
        cause = e.source();
    }
    std::process::exit(1);
}
