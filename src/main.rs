use clap::{Parser, Subcommand};
use hub_pages::{config, generate, output};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "hub-pages")]
#[command(about = "Generate AI Hub tool and use-case detail pages")]
#[command(long_about = "\
Generate AI Hub tool and use-case detail pages

Reads two JSON collections and writes one HTML page per entry. Run with no
arguments from the site root to regenerate everything.

Site layout:

  ./
  ├── hub.toml                     # Optional config (see gen-config)
  ├── assets/
  │   ├── data.tools.json          # Tool records
  │   ├── data.usecases.json       # Use-case records
  │   ├── styles.css               # Linked from every page
  │   └── app.js                   # Linked from every page
  ├── tools/                       # ← generated: <slug>.html per tool
  └── use-cases/                   # ← generated: <slug>.html per use-case

Slugs come from the record's \"slug\" field, or are derived from its name
(\"AI & ML Tools!!\" → \"ai-and-ml-tools\").

Run 'hub-pages gen-config' to print a documented hub.toml.")]
#[command(version)]
struct Cli {
    /// Site root; data and output paths are relative to it
    #[arg(long, default_value = ".", global = true)]
    root: PathBuf,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Regenerate every tool and use-case page (the default)
    Build,
    /// Load and cross-reference the data without writing pages
    Check,
    /// Print a stock hub.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command.unwrap_or(Command::Build) {
        Command::Build => {
            println!("==> Generating pages in {}", cli.root.display());
            let report = generate::generate(&cli.root)?;
            output::print_generate_output(&report);
        }
        Command::Check => {
            println!("==> Checking {}", cli.root.display());
            let report = generate::check(&cli.root)?;
            output::print_check_output(&report);
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
