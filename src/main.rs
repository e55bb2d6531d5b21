use clap::Parser;

use marker_guard::cli::{CheckArgs, Cli, Commands};
use marker_guard::commands::{run_check, run_init, run_rules};
use marker_guard::logging;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet);

    let exit_code = match &cli.command {
        Some(Commands::Check(args)) => run_check(args, &cli),
        Some(Commands::Init(args)) => run_init(args),
        Some(Commands::Rules(args)) => run_rules(args, &cli),
        None => run_check(&CheckArgs::default(), &cli),
    };

    std::process::exit(exit_code);
}
