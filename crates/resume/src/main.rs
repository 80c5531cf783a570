use resume_core::init_logging;

mod app;
mod commands;
mod table;

fn main() {
    let app = app::build_cli();
    let matches = app.get_matches();

    // Extract quiet flag before initializing logging
    let quiet = matches.get_flag("quiet");
    init_logging(quiet);

    // run_command already printed the error for the user.
    if commands::run_command(&matches).is_err() {
        std::process::exit(1);
    }
}
