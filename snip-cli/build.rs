use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of the copy subcommand's surface from src/main.rs
// We need to duplicate this here since build scripts can't access src/ modules
fn build_cli() -> Command {
    Command::new("snip")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Copy source files as paste-ready snippets")
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a snip.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .subcommand(
            Command::new("copy")
                .about("Copy a file as a snippet (default command)")
                .arg(
                    Arg::new("input")
                        .help("Input file path, or '-' for stdin")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(Arg::new("language").long("language").short('l'))
                .arg(
                    Arg::new("workspace-root")
                        .long("workspace-root")
                        .value_hint(ValueHint::DirPath),
                )
                .arg(Arg::new("format").long("format"))
                .arg(Arg::new("lines").long("lines"))
                .arg(
                    Arg::new("include-path")
                        .long("include-path")
                        .action(ArgAction::SetTrue),
                )
                .arg(Arg::new("no-path").long("no-path").action(ArgAction::SetTrue))
                .arg(Arg::new("stdout").long("stdout").action(ArgAction::SetTrue)),
        )
        .subcommand(Command::new("list-formats"))
        .subcommand(Command::new("list-rules"))
}

fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut cmd = build_cli();

    // Generate completions for bash
    generate_to(Bash, &mut cmd, "snip", &outdir)?;

    // Generate completions for zsh
    generate_to(Zsh, &mut cmd, "snip", &outdir)?;

    // Generate completions for fish
    generate_to(Fish, &mut cmd, "snip", &outdir)?;

    println!("cargo:warning=Shell completions generated in {outdir:?}");

    Ok(())
}
