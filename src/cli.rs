use clap::Parser;

use crate::ports::outbound::ImageFormat;

/// Render the dependency graph of a NuGet package archive
#[derive(Parser, Debug)]
#[command(name = "nupkg-graph")]
#[command(version)]
#[command(
    about = "Render the dependency graph of a NuGet package archive as a Graphviz image",
    long_about = None
)]
pub struct Args {
    /// Target package identifier (expects <PACKAGE>.nupkg in the working directory)
    #[arg(short, long)]
    pub package: Option<String>,

    /// Output file path (defaults to <PACKAGE>.png)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Maximum traversal depth
    #[arg(short, long, allow_negative_numbers = true)]
    pub depth: Option<i32>,

    /// Output format: dot, png or svg (defaults to the output path extension)
    #[arg(short, long)]
    pub format: Option<ImageFormat>,

    /// Path to a configuration file (defaults to nupkg-graph.toml in the working directory)
    #[arg(short, long)]
    pub config: Option<String>,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
