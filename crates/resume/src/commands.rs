use std::io::Write as _;

use clap::ArgMatches;
use tracing::info;

use resume_core::config;
use resume_core::events;
use resume_core::session_ops;
use resume_core::sessions::errors::SessionError;
use resume_core::{ReconcileReport, ResumeConfig, SshRunner, TerminalAppWindows};

use crate::table::{self, TableFormatter};

pub fn run_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    events::log_app_startup();

    let result = dispatch(matches);
    if let Err(e) = &result {
        // User-facing Display message on stderr; main only picks the exit
        // code from here.
        eprintln!("Error: {e}");
        events::log_app_error(e.as_ref());
    }
    result
}

fn dispatch(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    if matches.get_flag("setup") {
        return handle_setup_command();
    }

    let config = config::load_config()?;

    if matches.get_flag("list") {
        handle_list_command(&config)
    } else if matches.get_flag("detach") {
        handle_detach_command(&config)
    } else if matches.get_flag("clear") {
        handle_clear_command(&config)
    } else if let Some(name) = matches.get_one::<String>("remove") {
        handle_remove_command(&config, name)
    } else if let Some(name) = matches.get_one::<String>("name") {
        handle_resume_command(&config, name)
    } else {
        handle_resume_all_command(&config)
    }
}

/// The remote side alone, for pure-read commands.
fn remote_runner(config: &ResumeConfig) -> Result<SshRunner, Box<dyn std::error::Error>> {
    Ok(SshRunner::new(config.require_host()?))
}

/// The production collaborators for one invocation.
fn connect(config: &ResumeConfig) -> Result<(SshRunner, TerminalAppWindows), Box<dyn std::error::Error>> {
    Ok((remote_runner(config)?, TerminalAppWindows::new()))
}

/// Map a report with failures to a non-zero exit; successes were still
/// applied and already printed.
fn finish_report(report: &ReconcileReport) -> Result<(), Box<dyn std::error::Error>> {
    if report.has_failures() {
        return Err(Box::new(SessionError::PartialFailure {
            failed: report.failed_count(),
            total: report.len(),
        }));
    }
    Ok(())
}

fn handle_resume_command(
    config: &ResumeConfig,
    name: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let (runner, windows) = connect(config)?;
    let summary = session_ops::resume_session(&runner, &windows, config, name)?;

    if !summary.existed {
        println!("Created and attached session '{name}'.");
    } else if summary.was_attached {
        println!("Session '{name}' is already attached; focusing its window.");
    } else {
        println!("Resuming existing session '{name}'.");
    }
    Ok(())
}

fn handle_resume_all_command(config: &ResumeConfig) -> Result<(), Box<dyn std::error::Error>> {
    let (runner, windows) = connect(config)?;
    let report = session_ops::resume_detached_sessions(&runner, &windows, config)?;

    if report.is_empty() {
        println!("No detached sessions to resume.");
        return Ok(());
    }

    println!(
        "Resumed {} session(s):",
        report.len() - report.failed_count()
    );
    table::print_report(&report);
    finish_report(&report)
}

fn handle_list_command(config: &ResumeConfig) -> Result<(), Box<dyn std::error::Error>> {
    let runner = remote_runner(config)?;
    let sessions = session_ops::list_sessions(&runner)?;

    if sessions.is_empty() {
        println!("No sessions.");
        return Ok(());
    }

    TableFormatter::new(&sessions).print_table(&sessions);
    Ok(())
}

fn handle_detach_command(config: &ResumeConfig) -> Result<(), Box<dyn std::error::Error>> {
    let (runner, windows) = connect(config)?;
    let report = session_ops::detach_all_sessions(&runner, &windows)?;

    if report.is_empty() {
        println!("No attached sessions.");
        return Ok(());
    }

    println!(
        "Detached {} session(s):",
        report.len() - report.failed_count()
    );
    table::print_report(&report);
    finish_report(&report)
}

fn handle_clear_command(config: &ResumeConfig) -> Result<(), Box<dyn std::error::Error>> {
    let (runner, windows) = connect(config)?;
    let report = session_ops::clear_all_sessions(&runner, &windows)?;

    if report.is_empty() {
        println!("No sessions.");
        return Ok(());
    }

    println!(
        "Killed {} session(s):",
        report.len() - report.failed_count()
    );
    table::print_report(&report);
    finish_report(&report)
}

fn handle_remove_command(
    config: &ResumeConfig,
    name: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let (runner, windows) = connect(config)?;
    session_ops::remove_session(&runner, &windows, name)?;
    println!("Removed session '{name}'.");
    Ok(())
}

fn handle_setup_command() -> Result<(), Box<dyn std::error::Error>> {
    let mut config = config::load_config()?;

    let current = config.ssh_host.clone().unwrap_or_default();
    let prompt = if current.is_empty() {
        "SSH host (e.g. user@hostname): ".to_string()
    } else {
        format!("SSH host [{current}]: ")
    };
    let host_input = prompt_line(&prompt)?;
    let host = if host_input.is_empty() {
        current
    } else {
        host_input
    };
    if host.is_empty() {
        return Err("No host provided".into());
    }
    config.ssh_host = Some(host.clone());

    let default = if config.ssh_agent_forwarding {
        "Y/n"
    } else {
        "y/N"
    };
    let agent_input =
        prompt_line(&format!("Enable SSH agent forwarding (-A)? [{default}]: "))?.to_lowercase();
    config.ssh_agent_forwarding = match agent_input.as_str() {
        "y" | "yes" => true,
        "n" | "no" => false,
        // Enter keeps the current setting
        _ => config.ssh_agent_forwarding,
    };

    config::save_config(&config)?;

    info!(event = "cli.setup_completed", host = %host);
    println!("Saved SSH host: {host}");
    println!(
        "SSH agent forwarding: {}",
        if config.ssh_agent_forwarding {
            "enabled"
        } else {
            "disabled"
        }
    );
    Ok(())
}

fn prompt_line(prompt: &str) -> Result<String, std::io::Error> {
    print!("{prompt}");
    std::io::stdout().flush()?;
    let mut line = String::new();
    std::io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}
