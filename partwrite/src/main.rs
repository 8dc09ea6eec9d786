use clap::Parser;

fn main() {
    let cli = partwrite::cli::Cli::parse();
    partwrite::logging::init(partwrite::logging::level_from_verbosity(cli.verbose));

    if let Err(err) = partwrite::run(&cli) {
        log::error!("{}", err);
        std::process::exit(err.exit_code());
    }
}
