use clap::Parser;
use postshare::cli::commands::Cli;
use postshare::cli::handlers;

fn main() {
    let cli = Cli::parse();
    postshare::logging::init(cli.verbose);

    if let Err(e) = handlers::dispatch(cli) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
