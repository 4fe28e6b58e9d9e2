use clap::{Parser, Subcommand};
use docs_sidebar::{check, config, output, scan};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "docs-sidebar")]
#[command(about = "Generate a documentation sidebar from a content directory")]
#[command(long_about = "\
Generate a documentation sidebar from a content directory

Every subdirectory of the content root becomes a top-level section. Markdown
(.md) and MDX (.mdx) files become links; nested directories become groups.

Content structure:

  src/content/docs/
  ├── index.md                     # Root files are not listed
  ├── getting-started/             # Section
  │   ├── index.md                 # \"Overview\" (or its front-matter title)
  │   └── installation.md          # \"Installation\" → getting-started/installation
  └── reference/                   # Section
      ├── cli.md
      └── api/                     # Has subdirectories → collapsed group
          ├── index.md             # title: front matter labels the group
          └── http/                # No subdirectories → links inlined into api
              └── client.md

Labels:
  Directory:   index front-matter title → directory name (my-dir → \"My Dir\")
  File:        file name (first-steps.md → \"First Steps\")

Run 'docs-sidebar gen-config' to print a documented sidebar.toml.")]
#[command(version)]
struct Cli {
    /// Content directory (overrides content_root from the config file)
    #[arg(long, global = true)]
    source: Option<PathBuf>,

    /// Configuration file [default: sidebar.toml, if present]
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Build the sidebar and emit it as JSON
    Generate {
        /// Write JSON to this file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Build the sidebar and report structural problems
    Check,
    /// Print a stock sidebar.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Generate { output } => {
            let site_config = load_site_config(cli.config.as_deref())?;
            let source = resolve_source(cli.source.as_deref(), &site_config);
            let sidebar = scan::generate_sidebar(&source, &site_config)?;
            let json = serde_json::to_string_pretty(&sidebar)? + "\n";

            match output {
                None => print!("{json}"),
                Some(path) => {
                    println!("==> Scanning {}", source.display());
                    output::print_sidebar_output(&sidebar);
                    if write_if_changed(&path, &json)? {
                        println!("==> Wrote {}", path.display());
                    } else {
                        println!("==> Unchanged {}", path.display());
                    }
                }
            }
        }
        Command::Check => {
            let site_config = load_site_config(cli.config.as_deref())?;
            let source = resolve_source(cli.source.as_deref(), &site_config);
            println!("==> Checking {}", source.display());
            let sidebar = scan::generate_sidebar(&source, &site_config)?;
            output::print_sidebar_output(&sidebar);
            let report = check::check_sidebar(&sidebar);
            output::print_check_report(&report);
            if !report.is_clean() {
                return Err(format!(
                    "{} duplicate slug(s) in {}",
                    report.duplicates.len(),
                    source.display()
                )
                .into());
            }
            println!("==> Content is valid");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// A `--config` path must exist; the default file is optional.
fn load_site_config(cli_config: Option<&Path>) -> Result<config::SidebarConfig, config::ConfigError> {
    match cli_config {
        Some(path) => config::load_required_config(path),
        None => config::load_config(Path::new(config::DEFAULT_CONFIG_FILE)),
    }
}

/// The `--source` flag wins over the configured content root.
fn resolve_source(cli_source: Option<&Path>, site_config: &config::SidebarConfig) -> PathBuf {
    cli_source
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(&site_config.content_root))
}

/// Write `content` to `path` unless the file already holds exactly that.
///
/// Returns whether the file was written.
fn write_if_changed(path: &Path, content: &str) -> std::io::Result<bool> {
    if std::fs::read_to_string(path).is_ok_and(|existing| existing == content) {
        return Ok(false);
    }
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)?;
    Ok(true)
}
