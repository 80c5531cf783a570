use clap::{Arg, ArgAction, ArgGroup, Command};

pub fn build_cli() -> Command {
    Command::new("resume")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Manage tmux sessions on a remote host with dedicated terminal windows")
        .long_about(
            "resume keeps named tmux sessions alive on a remote host and surfaces each one \
             as a dedicated local terminal window. Pass a NAME to create or re-attach a \
             session, one of the mode options for bulk operations, or nothing to reopen \
             every detached session.",
        )
        .arg(
            Arg::new("name")
                .help("Session name to create or attach")
                .index(1),
        )
        .arg(
            Arg::new("setup")
                .long("setup")
                .short('s')
                .help("Configure the SSH host")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("list")
                .long("list")
                .short('l')
                .help("List active sessions")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("remove")
                .long("remove")
                .short('r')
                .value_name("NAME")
                .help("Remove a session"),
        )
        .arg(
            Arg::new("detach")
                .long("detach")
                .short('d')
                .help("Detach all sessions and close their windows")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("clear")
                .long("clear")
                .short('c')
                .help("Kill all sessions and close their windows")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .short('q')
                .help("Only log errors")
                .action(ArgAction::SetTrue),
        )
        // A session name and the mode options are all mutually exclusive;
        // clap rejects any combination as a usage error before we touch the
        // network.
        .group(
            ArgGroup::new("mode")
                .args(["name", "setup", "list", "remove", "detach", "clear"])
                .multiple(false),
        )
}
