// SPDX-FileCopyrightText: 2026 Merx Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `merx status` command implementation.
//!
//! Lists the built-in plugin catalog and, when the config declares a host
//! environment, the capability check outcome for each plugin.

use std::io::IsTerminal;

use merx_config::model::MerxConfig;
use merx_plugin::{builtin_catalog, check_requirements};

use crate::host::ConfigHost;

/// Run the `merx status` command.
///
/// With `--plain`, disables colored output.
pub fn run_status(config: &MerxConfig, plain: bool) {
    let use_color = !plain && std::io::stdout().is_terminal();
    let host = ConfigHost::from_section(&config.host);

    println!();
    println!("  merx status");
    println!("  {}", "-".repeat(50));

    match config.host.version.as_deref() {
        Some(version) => println!("  host platform {version}"),
        None => {
            println!("  host platform not declared; set [host] version in merx.toml");
            println!("  to evaluate plugin requirements.");
        }
    }
    println!();

    for descriptor in builtin_catalog() {
        let line = match host.as_ref() {
            Some(host) => {
                let gate = check_requirements(&descriptor, host);
                if gate.passed {
                    format_entry(use_color, true, &descriptor.slug, &descriptor.version, "ok")
                } else {
                    let mut line = format_entry(
                        use_color,
                        false,
                        &descriptor.slug,
                        &descriptor.version,
                        "requirements unmet",
                    );
                    for reason in &gate.unmet {
                        line.push_str(&format!("\n        - {reason}"));
                    }
                    line
                }
            }
            None => format!("      {:<26} {:<8} unchecked", descriptor.slug, descriptor.version),
        };
        println!("{line}");
    }

    println!();
}

fn format_entry(use_color: bool, passed: bool, slug: &str, version: &str, note: &str) -> String {
    if use_color {
        use colored::Colorize;
        let symbol = if passed {
            "✓".green().to_string()
        } else {
            "✗".red().to_string()
        };
        format!("    {symbol} {slug:<26} {version:<8} {note}")
    } else {
        let tag = if passed { "[OK]  " } else { "[FAIL]" };
        format!("    {tag} {slug:<26} {version:<8} {note}")
    }
}
