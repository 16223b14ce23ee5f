//! pagemark CLI - plain-text manual to PDF renderer

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use pagemark::{plan_file, render_file_with_options, JsonFormat, RenderOptions};

#[derive(Parser)]
#[command(name = "pagemark")]
#[command(version)]
#[command(about = "Render a plain-text manual to a paginated PDF", long_about = None)]
struct Cli {
    /// Input text file
    #[arg(short, long, global = true, value_name = "FILE", default_value = pagemark::DEFAULT_INPUT)]
    input: PathBuf,

    /// Output PDF file
    #[arg(short, long, value_name = "FILE", default_value = pagemark::DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Document title written to the PDF metadata
    #[arg(long, global = true)]
    title: Option<String>,

    /// Caption date as DD/MM/YYYY (defaults to today)
    #[arg(long, global = true, value_name = "DATE")]
    date: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the rendering plan (every draw call and page break) as JSON
    Plan {
        /// Output file (stdout if not specified)
        #[arg(long, value_name = "FILE")]
        to: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Show version information
    Version,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match build_options(cli.title.as_deref(), cli.date.as_deref()) {
        Ok(options) => match cli.command {
            Some(Commands::Plan { to, compact }) => {
                cmd_plan(&cli.input, to.as_deref(), compact, &options)
            }
            Some(Commands::Version) => {
                cmd_version();
                Ok(())
            }
            None => cmd_render(&cli.input, &cli.output, &options),
        },
        Err(e) => Err(e),
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn build_options(
    title: Option<&str>,
    date: Option<&str>,
) -> Result<RenderOptions, Box<dyn std::error::Error>> {
    let mut options = RenderOptions::new();
    if let Some(title) = title {
        options = options.with_title(title);
    }
    if let Some(date) = date {
        options = options.with_date_str(date)?;
    }
    Ok(options)
}

fn cmd_render(
    input: &Path,
    output: &Path,
    options: &RenderOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    log::debug!("Rendering {} -> {}", input.display(), output.display());

    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
    pb.enable_steady_tick(Duration::from_millis(80));
    pb.set_message(format!("Rendering {}...", input.display()));

    let result = render_file_with_options(input, output, options);
    pb.finish_and_clear();
    let stats = result?;

    println!("{} {}", "Saved to".green(), output.display());
    println!(
        "  {} {} pages",
        "├─".dimmed(),
        stats.page_count.to_string().bold()
    );
    println!(
        "  {} {} headings, {} sections",
        "├─".dimmed(),
        stats.heading_count,
        stats.sub_heading_count
    );
    println!(
        "  {} {} list items, {} paragraphs",
        "└─".dimmed(),
        stats.numbered_item_count + stats.bullet_item_count,
        stats.paragraph_count
    );

    Ok(())
}

fn cmd_plan(
    input: &Path,
    output: Option<&Path>,
    compact: bool,
    options: &RenderOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    let plan = plan_file(input, options)?;
    log::debug!(
        "Planned {} draw commands on {} pages",
        plan.commands.len(),
        plan.page_count()
    );

    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };

    let json = pagemark::render::to_json(&plan, format)?;

    if let Some(path) = output {
        fs::write(path, &json)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", json);
    }

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "pagemark".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Plain-text manual to PDF renderer");
    println!();
    println!("License: MIT");
}
