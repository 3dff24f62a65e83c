//! Entrypoint.

fn main() {
    if let Err(err) = github_labelbot_cli::initialize_command_line() {
        eprintln!("ERROR: {:#}", err);
        std::process::exit(1);
    }
}
