//! finalchemy CLI: Command-line interface for the FINAlchemy assistant

use clap::{Parser, Subcommand};
use finalchemy_tui::nav::SECTIONS;
use finalchemy_tui::prompts::SUGGESTED_PROMPTS;

/// Financial assistant chat TUI
#[derive(Parser)]
#[command(name = "finalchemy")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the TUI (default when no command specified)
    Tui,

    /// List the suggested starter prompts
    Prompts {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the sidebar navigation sections
    Sections {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        None | Some(Commands::Tui) => {
            // Default: open TUI
            let rt = tokio::runtime::Runtime::new().expect("Failed to create tokio runtime");
            if let Err(e) = rt.block_on(finalchemy_tui::run_tui()) {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        }
        Some(Commands::Prompts { json }) => {
            cmd_prompts(json);
        }
        Some(Commands::Sections { json }) => {
            cmd_sections(json);
        }
    }
}

fn cmd_prompts(json: bool) {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&SUGGESTED_PROMPTS).expect("failed to serialize")
        );
        return;
    }

    println!("Suggested Prompts\n");
    for prompt in &SUGGESTED_PROMPTS {
        println!("  [{}] {}", prompt.category, prompt.text);
    }
}

fn cmd_sections(json: bool) {
    if json {
        let output: Vec<_> = SECTIONS
            .iter()
            .map(|s| {
                serde_json::json!({
                    "title": s.title,
                    "items": s.items,
                })
            })
            .collect();
        println!(
            "{}",
            serde_json::to_string_pretty(&output).expect("failed to serialize")
        );
        return;
    }

    println!("Navigation Sections\n");
    for section in SECTIONS {
        println!("  {}", section.title);
        for item in section.items {
            println!("    - {item}");
        }
        println!();
    }
}
