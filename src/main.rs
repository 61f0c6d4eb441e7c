use clap::Parser;
use passvault::cli::{Cli, Commands};

fn main() {
    passvault::logging::init_tracing();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::List {
            ref search,
            show_passwords,
        } => passvault::cli::commands::list::execute(&cli, search.as_deref(), show_passwords),
        Commands::Add(ref args) => passvault::cli::commands::add::execute(&cli, args),
        Commands::Edit(ref args) => passvault::cli::commands::edit::execute(&cli, args),
        Commands::Delete { number, force } => {
            passvault::cli::commands::delete::execute(&cli, number, force)
        }
        Commands::Show { number } => passvault::cli::commands::show::execute(&cli, number),
        Commands::Copy { number } => passvault::cli::commands::copy::execute(&cli, number),
        Commands::Generate { length } => passvault::cli::commands::generate::execute(&cli, length),
        Commands::Completions { shell } => passvault::cli::commands::completions::execute(shell),
    };

    if let Err(e) = result {
        passvault::cli::output::error(&e.to_string());
        std::process::exit(1);
    }
}
