use colored::Colorize;
use commands::command_argument_builder;
use siteweaver::handlers;
use siteweaver_core::print_banner;

mod commands;

#[tokio::main]
async fn main() {
    let cmd = command_argument_builder();
    let chosen_command = cmd.get_matches();
    let quiet = chosen_command.get_flag("quiet");

    // Show banner unless --quiet flag is set
    if !quiet {
        print_banner();
    }

    match chosen_command.subcommand() {
        Some(("generate", primary_command)) => {
            if let Err(e) = handlers::handle_generate(primary_command, quiet).await {
                eprintln!("{} {}", "✗".red(), e);
                std::process::exit(1);
            }
        }
        None => {
            // No subcommand provided, just show the banner
        }
        _ => unreachable!("clap should ensure we don't get here"),
    }
}
