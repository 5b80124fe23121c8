/// CLI argument parsing and command handling.
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};
use crossterm::style::Stylize;

use crate::color;
use crate::scanner::{self, FenceTracker};
use crate::settings::{self, Settings};

#[derive(Parser)]
#[command(
    name = "pillbox",
    version,
    about = "Pillbox - A terminal-based viewer for {{label}} pill badges"
)]
pub struct Cli {
    /// File to open in the interactive viewer.
    pub file: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the badge colors assigned to a label.
    Color {
        label: String,
        /// Uppercase the label before hashing, regardless of the stored
        /// setting.
        #[arg(short = 'i', long = "case-insensitive")]
        case_insensitive: bool,
    },
    /// List the distinct labels in a file with counts and colors.
    Scan { file: PathBuf },
    /// Write the file to stdout with pills rendered as ANSI badges.
    Render { file: PathBuf },
    /// Read or change the stored configuration.
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Share colors across case variants of a label.
    CaseInsensitive { value: Option<bool> },
}

/// Execute a CLI command (color, scan, render, or config).
pub fn run(command: Command, settings: &Settings, settings_path: &Path) -> Result<()> {
    match command {
        Command::Color {
            label,
            case_insensitive,
        } => handle_color(&label, case_insensitive || settings.case_insensitive),
        Command::Scan { file } => handle_scan(&file, settings),
        Command::Render { file } => handle_render(&file, settings),
        Command::Config { command } => handle_config(command, settings, settings_path),
    }
}

fn handle_color(label: &str, case_insensitive: bool) -> Result<()> {
    let pair = color::resolve_colours(label, case_insensitive);
    println!("{}", badge(label, case_insensitive));
    println!("background: {}", pair.background);
    println!("foreground: {}", pair.foreground);
    Ok(())
}

fn handle_scan(file: &Path, settings: &Settings) -> Result<()> {
    let text = fs::read_to_string(file)?;
    let entries = scanner::collect_labels(&text, settings.case_insensitive);
    if entries.is_empty() {
        println!("No {{{{label}}}} tokens found in {}", file.display());
        return Ok(());
    }
    for entry in entries {
        println!(
            "{}  x{}  {} on {}",
            badge(&entry.label, settings.case_insensitive),
            entry.count,
            entry.colors.foreground,
            entry.colors.background,
        );
    }
    Ok(())
}

fn handle_render(file: &Path, settings: &Settings) -> Result<()> {
    let text = fs::read_to_string(file)?;
    let mut fences = FenceTracker::default();
    for line in text.lines() {
        if fences.is_code_line(line) {
            println!("{line}");
            continue;
        }
        let code_spans = scanner::inline_code_spans(line);
        let mut rendered = String::new();
        let mut cursor = 0;
        for token in scanner::scan(line) {
            if scanner::overlaps_code(&code_spans, token.start, token.end) {
                continue;
            }
            rendered.push_str(&line[cursor..token.start]);
            rendered.push_str(&badge(&token.label, settings.case_insensitive));
            cursor = token.end;
        }
        rendered.push_str(&line[cursor..]);
        println!("{rendered}");
    }
    Ok(())
}

fn handle_config(command: ConfigCommand, settings: &Settings, settings_path: &Path) -> Result<()> {
    match command {
        ConfigCommand::CaseInsensitive { value } => match value {
            Some(value) => {
                let updated = Settings {
                    case_insensitive: value,
                };
                settings::save(&updated, settings_path)?;
                println!("case-insensitive set to {value}");
            }
            None => {
                println!("case-insensitive: {}", settings.case_insensitive);
            }
        },
    }
    Ok(())
}

/// An ANSI-styled badge for the label: uppercased text on the pill fill.
fn badge(label: &str, case_insensitive: bool) -> String {
    let pair = color::resolve_colours(label, case_insensitive);
    format!(
        "{}",
        format!(" {} ", label.to_uppercase())
            .with(term_color(&pair.foreground))
            .on(term_color(&pair.background))
    )
}

fn term_color(hex: &str) -> crossterm::style::Color {
    match color::hex_to_rgb(hex) {
        Some((r, g, b)) => crossterm::style::Color::Rgb { r, g, b },
        None => crossterm::style::Color::Reset,
    }
}
