// Command-line interface for snip
//
// This binary turns a source file (or a line range of it) into a paste-ready
// snippet and puts it on the system clipboard.
//
// The core work is done by the snip-render crate: resolving the effective
// language tag from the file path and rendering the snippet in the configured
// format. This layer collects the inputs (file content, selection, workspace
// root, configuration) and owns the sink (clipboard or stdout).
//
// Usage:
//  snip <file> [--language <tag>] [--workspace-root <dir>]   - Copy a snippet (default)
//  snip copy <file> ...                                      - Same as above (explicit)
//  snip list-formats                                         - List output formats
//  snip list-rules                                           - List language detection rules

use snip_cli::{clipboard, selection, workspace};

use clap::{Arg, ArgAction, Command, ValueHint};
use snip_config::{Loader, SnipConfig};
use snip_render::{language, RendererRegistry, SnippetFormat, SnippetRequest};
use std::fs;
use std::io::Read;
use std::sync::OnceLock;

// Renderers are registered once at startup; the registry is read-only for
// the rest of the process.
static RENDERERS: OnceLock<RendererRegistry> = OnceLock::new();

fn renderers() -> &'static RendererRegistry {
    RENDERERS.get_or_init(RendererRegistry::default)
}

fn build_cli() -> Command {
    Command::new("snip")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Copy source files as paste-ready snippets")
        .long_about(
            "snip renders a source file as a snippet (Markdown fenced block, HTML\n\
            block, or raw text) and copies it to the system clipboard.\n\n\
            The fence language is inferred from the file name where the editor-style\n\
            default would be unhelpful (Android gradle scripts, Dockerfiles, compose\n\
            manifests); everything else uses the tag passed via --language.\n\n\
            Examples:\n  \
            snip src/main.rs --language rust               # Markdown block to clipboard\n  \
            snip src/main.rs --language rust --stdout      # ... to stdout instead\n  \
            snip app.py --language python --format html    # HTML pre/code block\n  \
            snip src/lib.rs --language rust --lines 10:25  # Only lines 10-25\n  \
            snip list-formats                              # Show output formats",
        )
        .arg_required_else_help(true)
        .subcommand_required(false)
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
                .long_about(
                    "Render a file (or a line range of it) as a snippet and copy it to\n\
                    the clipboard.\n\n\
                    The path shown in the snippet is relative to --workspace-root when\n\
                    given; otherwise the input path is shown unchanged.\n\n\
                    Examples:\n  \
                    snip copy src/test.js --language javascript\n  \
                    snip copy android/build.gradle --workspace-root .   # fence says groovy\n  \
                    snip copy notes.txt --format plain --stdout",
                )
                .arg(
                    Arg::new("input")
                        .help("Input file path, or '-' for stdin")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("language")
                        .long("language")
                        .short('l')
                        .help("Default language tag, used when no detection rule matches")
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("workspace-root")
                        .long("workspace-root")
                        .value_name("DIR")
                        .help("Workspace root the snippet path is made relative to")
                        .value_hint(ValueHint::DirPath),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .help("Output format (overrides configuration)")
                        .value_parser(clap::builder::PossibleValuesParser::new([
                            "markdown", "html", "plain",
                        ]))
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("lines")
                        .long("lines")
                        .value_name("START:END")
                        .help("Copy only this 1-based inclusive line range")
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("include-path")
                        .long("include-path")
                        .help("Include the file path in the snippet (overrides configuration)")
                        .action(ArgAction::SetTrue)
                        .conflicts_with("no-path"),
                )
                .arg(
                    Arg::new("no-path")
                        .long("no-path")
                        .help("Omit the file path from the snippet (overrides configuration)")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("stdout")
                        .long("stdout")
                        .help("Write the snippet to stdout instead of the clipboard")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("list-formats")
                .about("List available output formats")
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Emit the listing as JSON")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("list-rules")
                .about("List language detection rules, in evaluation order")
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Emit the listing as JSON")
                        .action(ArgAction::SetTrue),
                ),
        )
}

fn main() {
    // Try to parse args. If no subcommand is provided, inject "copy"
    let args: Vec<String> = std::env::args().collect();

    let cli = build_cli();
    let matches = match cli.clone().try_get_matches_from(&args) {
        Ok(m) => m,
        Err(e) => {
            // Check if this is a "missing subcommand" error by seeing if the
            // first arg looks like a file
            if args.len() > 1
                && !args[1].starts_with('-')
                && args[1] != "copy"
                && args[1] != "list-formats"
                && args[1] != "list-rules"
                && args[1] != "help"
            {
                // Inject "copy" as the subcommand
                let mut new_args = vec![args[0].clone(), "copy".to_string()];
                new_args.extend_from_slice(&args[1..]);

                match cli.try_get_matches_from(&new_args) {
                    Ok(m) => m,
                    Err(e2) => e2.exit(),
                }
            } else {
                e.exit();
            }
        }
    };

    let config = load_cli_config(matches.get_one::<String>("config").map(|s| s.as_str()));

    match matches.subcommand() {
        Some(("copy", sub_matches)) => {
            let input = sub_matches
                .get_one::<String>("input")
                .expect("input is required");

            let options = CopyOptions {
                language: sub_matches
                    .get_one::<String>("language")
                    .map(|s| s.as_str())
                    .unwrap_or("")
                    .to_string(),
                workspace_root: sub_matches.get_one::<String>("workspace-root").cloned(),
                lines: sub_matches.get_one::<String>("lines").cloned(),
                to_stdout: sub_matches.get_flag("stdout"),
            };

            let settings = snippet_settings(
                &config,
                sub_matches.get_one::<String>("format").map(|s| s.as_str()),
                sub_matches.get_flag("include-path"),
                sub_matches.get_flag("no-path"),
            );

            handle_copy_command(input, &options, settings);
        }
        Some(("list-formats", sub_matches)) => {
            handle_list_formats_command(sub_matches.get_flag("json"));
        }
        Some(("list-rules", sub_matches)) => {
            handle_list_rules_command(sub_matches.get_flag("json"));
        }
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            std::process::exit(1);
        }
    }
}

/// Inputs gathered from the copy subcommand's flags
struct CopyOptions {
    language: String,
    workspace_root: Option<String>,
    lines: Option<String>,
    to_stdout: bool,
}

/// Effective snippet settings: configuration plus CLI overrides
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct SnippetSettings {
    format: SnippetFormat,
    include_path: bool,
}

fn snippet_settings(
    config: &SnipConfig,
    format_flag: Option<&str>,
    include_path_flag: bool,
    no_path_flag: bool,
) -> SnippetSettings {
    let format = match format_flag {
        Some(name) => SnippetFormat::from_name(name),
        None => config.snippet.format,
    };
    let include_path = if include_path_flag {
        true
    } else if no_path_flag {
        false
    } else {
        config.snippet.include_file_path
    };
    SnippetSettings {
        format,
        include_path,
    }
}

/// Handle the copy command
fn handle_copy_command(input: &str, options: &CopyOptions, settings: SnippetSettings) {
    let source = read_input(input);

    let content = match &options.lines {
        Some(raw) => {
            let range = selection::parse_line_range(raw).unwrap_or_else(|e| {
                eprintln!("Invalid --lines value: {e}");
                std::process::exit(1);
            });
            match selection::select_lines(&source, range) {
                Some(selected) => selected,
                None => {
                    // Empty selection aborts before anything is rendered;
                    // this is informational, not a failure.
                    println!("No lines in range {range}; nothing copied.");
                    return;
                }
            }
        }
        None => source,
    };

    let relative_path = workspace::relative_to(input, options.workspace_root.as_deref());
    let effective_language = language::resolve(input, &options.language);

    let request = SnippetRequest::new(
        content,
        relative_path,
        effective_language,
        settings.include_path,
    );
    let snippet = renderers().render(settings.format, &request);

    if options.to_stdout {
        print!("{snippet}");
        return;
    }

    match clipboard::copy_to_clipboard(&snippet) {
        Ok(()) => println!("Copied snippet to clipboard."),
        Err(err) => {
            eprintln!("Error copying to clipboard: {err}");
            std::process::exit(1);
        }
    }
}

/// Handle the list-formats command
fn handle_list_formats_command(json: bool) {
    let registry = renderers();

    if json {
        let formats: Vec<_> = registry
            .list_renderers()
            .into_iter()
            .map(|name| {
                let description = registry
                    .get(&name)
                    .map(|r| r.description().to_string())
                    .unwrap_or_default();
                serde_json::json!({ "name": name, "description": description })
            })
            .collect();
        println!("{}", serde_json::Value::Array(formats));
        return;
    }

    println!("Available formats:\n");
    for name in registry.list_renderers() {
        match registry.get(&name) {
            Ok(renderer) => println!("  {:<10} {}", name, renderer.description()),
            Err(_) => println!("  {name}"),
        }
    }
}

/// Handle the list-rules command
fn handle_list_rules_command(json: bool) {
    if json {
        let rules: Vec<_> = language::RULES
            .iter()
            .map(|rule| serde_json::json!({ "name": rule.name, "tag": rule.tag }))
            .collect();
        println!("{}", serde_json::Value::Array(rules));
        return;
    }

    println!("Detection rules (first match wins):\n");
    for rule in language::RULES {
        println!("  {:<16} -> {}", rule.name, rule.tag);
    }
    println!("\nUnmatched paths keep the tag passed via --language.");
}

fn read_input(input: &str) -> String {
    if input == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .unwrap_or_else(|e| {
                eprintln!("Error reading stdin: {e}");
                std::process::exit(1);
            });
        buffer
    } else {
        fs::read_to_string(input).unwrap_or_else(|e| {
            eprintln!("Error reading file '{input}': {e}");
            std::process::exit(1);
        })
    }
}

fn load_cli_config(explicit_path: Option<&str>) -> SnipConfig {
    let loader = Loader::new().with_optional_file("snip.toml");
    let loader = if let Some(path) = explicit_path {
        loader.with_file(path)
    } else {
        loader
    };

    loader.build().unwrap_or_else(|err| {
        eprintln!("Failed to load configuration: {err}");
        std::process::exit(1);
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use snip_config::load_defaults;

    #[test]
    fn settings_default_to_configuration() {
        let config = load_defaults().expect("defaults");
        let settings = snippet_settings(&config, None, false, false);
        assert_eq!(settings.format, SnippetFormat::Markdown);
        assert!(settings.include_path);
    }

    #[test]
    fn format_flag_overrides_configuration() {
        let config = load_defaults().expect("defaults");
        let settings = snippet_settings(&config, Some("html"), false, false);
        assert_eq!(settings.format, SnippetFormat::Html);
    }

    #[test]
    fn no_path_flag_overrides_configuration() {
        let config = load_defaults().expect("defaults");
        let settings = snippet_settings(&config, None, false, true);
        assert!(!settings.include_path);
    }

    #[test]
    fn include_path_flag_wins_over_disabled_config() {
        let config = Loader::new()
            .set_override("snippet.include_file_path", false)
            .expect("override")
            .build()
            .expect("config");
        let settings = snippet_settings(&config, None, true, false);
        assert!(settings.include_path);
    }

    #[test]
    fn unknown_format_flag_value_degrades_to_markdown() {
        // The flag's possible-values list normally catches this, but the
        // settings layer itself never fails.
        let config = load_defaults().expect("defaults");
        let settings = snippet_settings(&config, Some("mystery"), false, false);
        assert_eq!(settings.format, SnippetFormat::Markdown);
    }

    #[test]
    fn renderer_registry_initializes_once() {
        let first = renderers() as *const RendererRegistry;
        let second = renderers() as *const RendererRegistry;
        assert_eq!(first, second);
    }
}
