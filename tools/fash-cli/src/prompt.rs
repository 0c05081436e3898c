//! Line-oriented user input.

use std::io::{BufRead, IsTerminal, Write};

use anyhow::{bail, Result};
use console::Term;
use dialoguer::{theme::SimpleTheme, Confirm, Input, Password, Select};

/// Source of user answers for the interactive session.
pub trait Prompt {
    /// Read a free-form line (menu choices, names).
    fn line(&mut self, prompt: &str) -> Result<String>;

    /// Read a password without echo.
    fn password(&mut self, prompt: &str) -> Result<String>;

    /// Read a whole number, asking again until one is entered.
    fn integer(&mut self, prompt: &str) -> Result<i64>;

    /// Read a decimal number, asking again until one is entered.
    fn decimal(&mut self, prompt: &str) -> Result<f64>;

    /// Ask a yes/no question.
    fn confirm(&mut self, prompt: &str, default: bool) -> Result<bool>;

    /// Pick one of `items`, returning its index.
    fn select(&mut self, prompt: &str, items: &[String]) -> Result<usize>;
}

/// Prompts on the terminal via dialoguer.
pub struct TermPrompt {
    theme: SimpleTheme,
}

impl TermPrompt {
    pub fn new() -> Self {
        Self { theme: SimpleTheme }
    }
}

impl Default for TermPrompt {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompt for TermPrompt {
    fn line(&mut self, prompt: &str) -> Result<String> {
        let value: String = Input::with_theme(&self.theme)
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()?;
        Ok(value.trim().to_string())
    }

    fn password(&mut self, prompt: &str) -> Result<String> {
        Ok(Password::with_theme(&self.theme)
            .with_prompt(prompt)
            .allow_empty_password(true)
            .interact()?)
    }

    fn integer(&mut self, prompt: &str) -> Result<i64> {
        Ok(Input::<i64>::with_theme(&self.theme)
            .with_prompt(prompt)
            .interact_text()?)
    }

    fn decimal(&mut self, prompt: &str) -> Result<f64> {
        Ok(Input::<f64>::with_theme(&self.theme)
            .with_prompt(prompt)
            .validate_with(|value: &f64| -> Result<(), &str> {
                if value.is_finite() {
                    Ok(())
                } else {
                    Err("Enter a finite number")
                }
            })
            .interact_text()?)
    }

    fn confirm(&mut self, prompt: &str, default: bool) -> Result<bool> {
        Ok(Confirm::with_theme(&self.theme)
            .with_prompt(prompt)
            .default(default)
            .interact()?)
    }

    fn select(&mut self, prompt: &str, items: &[String]) -> Result<usize> {
        Ok(Select::with_theme(&self.theme)
            .with_prompt(prompt)
            .items(items)
            .default(0)
            .interact()?)
    }
}

/// Prompts over plain lines, for piped or redirected input.
///
/// Prompts go to `writer`; answers are read one line at a time from
/// `reader`. Unparseable numbers are asked again.
pub struct LinePrompt<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> LinePrompt<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    fn ask(&mut self, prompt: &str) -> Result<String> {
        write!(self.writer, "{}: ", prompt)?;
        self.writer.flush()?;

        let mut answer = String::new();
        if self.reader.read_line(&mut answer)? == 0 {
            bail!("input closed at prompt: {}", prompt);
        }
        Ok(answer.trim().to_string())
    }

    fn ask_parsed<T, F>(&mut self, prompt: &str, hint: &str, parse: F) -> Result<T>
    where
        F: Fn(&str) -> Option<T>,
    {
        loop {
            let answer = self.ask(prompt)?;
            match parse(&answer) {
                Some(value) => return Ok(value),
                None => writeln!(self.writer, "{}", hint)?,
            }
        }
    }
}

impl<R: BufRead, W: Write> Prompt for LinePrompt<R, W> {
    fn line(&mut self, prompt: &str) -> Result<String> {
        self.ask(prompt)
    }

    fn password(&mut self, prompt: &str) -> Result<String> {
        self.ask(prompt)
    }

    fn integer(&mut self, prompt: &str) -> Result<i64> {
        self.ask_parsed(prompt, "Enter a whole number", |answer| answer.parse().ok())
    }

    fn decimal(&mut self, prompt: &str) -> Result<f64> {
        self.ask_parsed(prompt, "Enter a finite number", |answer| {
            answer.parse::<f64>().ok().filter(|value| value.is_finite())
        })
    }

    fn confirm(&mut self, prompt: &str, default: bool) -> Result<bool> {
        let hint = if default { "[Y/n]" } else { "[y/N]" };
        self.ask_parsed(
            &format!("{} {}", prompt, hint),
            "Answer y or n",
            |answer| match answer.to_lowercase().as_str() {
                "" => Some(default),
                "y" | "yes" => Some(true),
                "n" | "no" => Some(false),
                _ => None,
            },
        )
    }

    fn select(&mut self, prompt: &str, items: &[String]) -> Result<usize> {
        for (number, item) in (1..).zip(items) {
            writeln!(self.writer, "  {}. {}", number, item)?;
        }
        self.ask_parsed(prompt, "Enter one of the numbers listed", |answer| {
            answer
                .parse::<usize>()
                .ok()
                .filter(|number| (1..=items.len()).contains(number))
                .map(|number| number - 1)
        })
    }
}

/// True when stdin and stderr are terminals and dialoguer can be used.
pub fn is_interactive() -> bool {
    std::io::stdin().is_terminal() && Term::stderr().is_term()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompt(input: &str) -> LinePrompt<Cursor<Vec<u8>>, Vec<u8>> {
        LinePrompt::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_reads_trimmed_lines() {
        let mut p = prompt("  2 \nuser\nuser123\n");
        assert_eq!(p.line("Enter your choice").unwrap(), "2");
        assert_eq!(p.line("Enter username").unwrap(), "user");
        assert_eq!(p.password("Enter password").unwrap(), "user123");

        let written = String::from_utf8(p.writer).unwrap();
        assert!(written.starts_with("Enter your choice: "));
    }

    #[test]
    fn test_numbers_are_asked_again() {
        let mut p = prompt("ten\n10\nNaN\nabc\n19.99\n");
        assert_eq!(p.integer("Enter Product Stock").unwrap(), 10);
        assert_eq!(p.decimal("Enter Product Price").unwrap(), 19.99);

        let written = String::from_utf8(p.writer).unwrap();
        assert_eq!(written.matches("Enter a whole number").count(), 1);
        assert_eq!(written.matches("Enter a finite number").count(), 2);
    }

    #[test]
    fn test_confirm_and_select() {
        let items = vec!["Shirt (x3)".to_string(), "Hat (x1)".to_string()];
        let mut p = prompt("\nmaybe\ny\n0\n3\n2\n");
        assert!(!p.confirm("Remove an item from the cart?", false).unwrap());
        assert!(p.confirm("Remove an item from the cart?", false).unwrap());
        assert_eq!(p.select("Item to remove", &items).unwrap(), 1);
    }

    #[test]
    fn test_end_of_input_is_an_error() {
        let mut p = prompt("2\n");
        p.line("Enter your choice").unwrap();
        let err = p.line("Enter username").unwrap_err();
        assert!(err.to_string().contains("input closed"));
    }
}
