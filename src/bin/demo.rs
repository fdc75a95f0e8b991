//! Demo binary for adaptui E2E testing.
//!
//! This binary exercises adaptui's public API for PTY-based integration tests.
//! Each subcommand prints what the detected profile makes of one feature, so
//! tests can drive it with different environments.

use adaptui::{
    CheckboxState, DEFAULT_PROGRESS_WIDTH, DiagnosticEvent, DiagnosticSink, format_box,
    format_checklist, format_progress_line, format_role_header, format_status_line, get_theme,
    list_themes, process_cache, render_markdown, set_diagnostic_sink, themed_skin,
};
use std::env;
use std::sync::Arc;

/// Prints diagnostics inline so tests can observe them.
struct StdoutSink;

impl DiagnosticSink for StdoutSink {
    fn emit(&self, event: DiagnosticEvent, detail: &str) {
        println!("[{}] {}", event, detail);
    }
}

fn print_usage() {
    eprintln!("Usage: adaptui-demo <command> [args...]");
    eprintln!("Commands:");
    eprintln!("  profile");
    eprintln!("  resolve <name> [ascii]");
    eprintln!("  border <name>");
    eprintln!("  role <role> [label]");
    eprintln!("  status <status> [message]");
    eprintln!("  checkbox <state>");
    eprintln!("  progress <fraction> [width]");
    eprintln!("  box <title> [lines...]");
    eprintln!("  checklist");
    eprintln!("  theme <id>");
    eprintln!("  themes");
    eprintln!("  markdown <text> [theme]");
    eprintln!("  diagnostics");
}

fn main() {
    // Force color output even in non-TTY (for test capture)
    colored::control::set_override(true);

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        print_usage();
        std::process::exit(1);
    }
    let arg = |i: usize, default: &'static str| -> String {
        args.get(i).cloned().unwrap_or_else(|| default.to_string())
    };

    let cache = process_cache();
    let glyphs = cache.glyphs();
    let theme = get_theme(&env::var("ADAPTUI_THEME").unwrap_or_default());

    match args[1].as_str() {
        "profile" => {
            let caps = cache.get();
            println!("profile={}", caps.profile);
            println!(
                "{}",
                serde_json::to_string_pretty(&caps.to_json()).unwrap_or_default()
            );
        }

        "resolve" => {
            let force_ascii = args.get(3).is_some_and(|s| s == "ascii");
            println!("{}", glyphs.resolve(&arg(2, "info"), force_ascii));
        }

        "border" => {
            println!("{}", glyphs.border(&arg(2, "h")));
        }

        "role" => {
            println!(
                "{}",
                format_role_header(&glyphs, theme, &arg(2, "user"), &arg(3, "You"))
            );
        }

        "status" => {
            println!(
                "{}",
                format_status_line(&glyphs, theme, &arg(2, "info"), &arg(3, "status"))
            );
        }

        "checkbox" => {
            let state = arg(2, "");
            let state = match state.as_str() {
                "true" => CheckboxState::Checked,
                "false" => CheckboxState::Empty,
                other => CheckboxState::from(other),
            };
            println!("{}", glyphs.checkbox(state));
        }

        "progress" => {
            let fraction: f64 = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(0.5);
            let width: usize = args
                .get(3)
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_PROGRESS_WIDTH);
            println!("{}", glyphs.progress_bar(fraction, width));
            println!(
                "{}",
                format_progress_line(&glyphs, "Progress", fraction, width)
            );
        }

        "box" => {
            let title = arg(2, "");
            let lines: Vec<&str> = args.iter().skip(3).map(String::as_str).collect();
            println!("{}", format_box(&glyphs, &title, &lines, 30));
        }

        "checklist" => {
            let items = [
                ("Detect terminal", "checked"),
                ("Resolve glyphs", "current"),
                ("Render UI", "pending"),
            ];
            println!("{}", format_checklist(&glyphs, &items));
        }

        "theme" => {
            let theme = get_theme(&arg(2, ""));
            println!("{} ({})", theme.name, theme.id);
            println!("{}", theme.description);
        }

        "themes" => {
            for summary in list_themes() {
                println!("{}\t{}\t{}", summary.id, summary.name, summary.description);
            }
        }

        "markdown" => {
            let text = arg(2, "**Hello** world!");
            let theme = get_theme(&arg(3, ""));
            let skin = themed_skin(theme, cache.get());
            println!("{}", render_markdown(&skin, &text, 60));
        }

        "diagnostics" => {
            set_diagnostic_sink(Arc::new(StdoutSink));
            let _ = glyphs.resolve("no_such_glyph", false);
            let _ = get_theme("no_such_theme");
        }

        _ => {
            eprintln!("Unknown command: {}", args[1]);
            print_usage();
            std::process::exit(1);
        }
    }
}
