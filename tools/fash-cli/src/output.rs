//! Terminal output for the store CLI.
//!
//! Listings switch to JSON under `--json`; status messages are suppressed
//! there so stdout stays machine-readable.

use std::time::Duration;

use console::{style, Term};
use indicatif::{ProgressBar, ProgressStyle};

const BANNER_WIDTH: usize = 58;

/// Writes store messages to the terminal.
#[derive(Clone)]
pub struct Output {
    verbose: bool,
    json: bool,
    term: Term,
}

impl Output {
    pub fn new(verbose: bool, json: bool) -> Self {
        Self {
            verbose,
            json,
            term: Term::stdout(),
        }
    }

    /// Neutral status line.
    pub fn info(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("ℹ").blue(), msg);
    }

    /// Green confirmation, e.g. after adding a product.
    pub fn success(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("✓").green(), msg);
    }

    /// Yellow notice on stderr.
    pub fn warn(&self, msg: &str) {
        if self.json {
            return;
        }
        eprintln!("{} {}", style("⚠").yellow(), msg);
    }

    /// Red failure message on stderr.
    pub fn error(&self, msg: &str) {
        if self.json {
            eprintln!("{}", serde_json::json!({ "error": msg }));
            return;
        }
        eprintln!("{} {}", style("✗").red(), style(msg).red());
    }

    /// Shown only with `--verbose`.
    pub fn debug(&self, msg: &str) {
        if !self.verbose || self.json {
            return;
        }
        eprintln!("{} {}", style("→").dim(), style(msg).dim());
    }

    /// Section heading.
    pub fn header(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("\n{}", style(msg).bold().underlined());
    }

    /// Print the boxed store banner.
    pub fn banner(&self, title: &str) {
        if self.json {
            return;
        }
        let rule = "_".repeat(BANNER_WIDTH + 2);
        let blank = format!("|{:width$}|", "", width = BANNER_WIDTH);
        println!("{}", rule);
        println!("{}", blank);
        println!(
            "|{}|",
            style(format!("{:^width$}", title, width = BANNER_WIDTH)).bold()
        );
        println!("{}", blank);
        println!("{}", rule);
    }

    /// Print a numbered menu entry.
    pub fn menu_item(&self, number: u32, label: &str) {
        if self.json {
            return;
        }
        println!("{}. {}", number, label);
    }

    /// Print plain text.
    pub fn line(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{}", msg);
    }

    /// Pretty JSON on stdout, printed in every mode.
    pub fn json<T: serde::Serialize>(&self, value: &T) {
        if let Ok(json) = serde_json::to_string_pretty(value) {
            println!("{}", json);
        }
    }

    /// Indented `key: value` line.
    pub fn kv(&self, key: &str, value: &str) {
        if self.json {
            return;
        }
        println!("  {}: {}", style(key).dim(), value);
    }

    /// Left-aligned columns padded to `widths`.
    pub fn table_row(&self, cols: &[&str], widths: &[usize]) {
        if self.json {
            return;
        }
        let formatted: Vec<String> = cols
            .iter()
            .zip(widths.iter())
            .map(|(col, width)| format!("{:width$}", col, width = width))
            .collect();
        println!("  {}", formatted.join("  "));
    }

    /// Show a spinner for `delay`, then clear it.
    pub fn pause(&self, msg: &str, delay: Duration) {
        if self.json || delay.is_zero() {
            return;
        }

        let pb = ProgressBar::new_spinner();
        if let Ok(spinner_style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
            pb.set_style(spinner_style);
        }
        pb.set_message(msg.to_string());
        pb.enable_steady_tick(Duration::from_millis(100));
        std::thread::sleep(delay);
        pb.finish_and_clear();
    }

    /// Clear the terminal, if stdout is one.
    pub fn clear_screen(&self) {
        if self.json || !self.term.is_term() {
            return;
        }
        let _ = self.term.clear_screen();
    }

    /// True under `--json`.
    pub fn is_json(&self) -> bool {
        self.json
    }
}

/// Badge for a stock level.
pub fn stock_badge(stock: i64) -> String {
    match stock {
        0 => style("out of stock").red().to_string(),
        1..=5 => style(stock).yellow().to_string(),
        _ => stock.to_string(),
    }
}
