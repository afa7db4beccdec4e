use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use snippet::SnippetHook;

#[derive(Parser, Debug)]
#[command(
    name = "snippetc",
    author,
    version,
    about = "Inspect, validate and splice shader snippet files"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List every hook point with its numeric value, tier and builtins.
    Hooks,
    /// List the snippets declared in a snippet file.
    List(ListArgs),
    /// Validate a snippet file and report any issues.
    Check(FileArgs),
    /// Print the spliced source for one hook of a snippet file.
    Splice(SpliceArgs),
}

#[derive(Args, Debug)]
pub struct FileArgs {
    /// Snippet file (TOML).
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}

#[derive(Args, Debug)]
pub struct ListArgs {
    #[command(flatten)]
    pub input: FileArgs,

    /// Emit JSON instead of a table.
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct SpliceArgs {
    #[command(flatten)]
    pub input: FileArgs,

    /// Hook to splice (`vertex`, `fragment`, `texture-coord-transform`,
    /// `layer-fragment`, `texture-lookup`).
    #[arg(long, value_name = "HOOK", value_parser = parse_hook)]
    pub hook: SnippetHook,

    /// Default code the snippets wrap or replace.
    #[arg(
        long = "default",
        value_name = "CODE",
        env = "SNIPPETC_DEFAULT_CODE",
        default_value = ""
    )]
    pub default_code: String,
}

fn parse_hook(raw: &str) -> Result<SnippetHook, String> {
    raw.parse::<SnippetHook>().map_err(|err| err.to_string())
}

pub fn parse() -> Cli {
    Cli::parse()
}
