mod cli;
mod run;

use anyhow::Result;
use cli::Command;

fn main() -> Result<()> {
    let cli = cli::parse();
    run::initialise_tracing();

    match cli.command {
        Command::Hooks => run::print_hooks(),
        Command::List(args) => run::list_snippets(&args.input.file, args.json),
        Command::Check(args) => run::check_file(&args.file),
        Command::Splice(args) => run::splice(&args.input.file, args.hook, &args.default_code),
    }
}
