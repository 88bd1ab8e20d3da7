//! Interactive terminal input.
//!
//! A single [`Console`] owns buffered stdin for the whole session; command
//! handlers borrow it for follow-up prompts. Prompts re-ask on invalid
//! input and surface `None`/errors only when stdin is closed.

use shared::error::{AppError, AppResult};
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

pub struct Console {
    lines: Lines<BufReader<Stdin>>,
}

impl Console {
    pub fn new() -> Self {
        Self {
            lines: BufReader::new(tokio::io::stdin()).lines(),
        }
    }

    /// Print a prompt and read one trimmed line. `None` means stdin closed.
    pub async fn read_line(&mut self, prompt: &str) -> AppResult<Option<String>> {
        show_prompt(prompt)?;
        let line = self
            .lines
            .next_line()
            .await
            .map_err(|e| AppError::internal(format!("Failed to read input: {e}")))?;
        Ok(line.map(|l| l.trim().to_string()))
    }

    /// Read a non-empty line, re-prompting on empty input.
    pub async fn required(&mut self, prompt: &str) -> AppResult<String> {
        loop {
            match self.read_line(prompt).await? {
                None => return Err(input_closed()),
                Some(line) if line.is_empty() => println!("Input cannot be empty."),
                Some(line) => return Ok(line),
            }
        }
    }

    /// Read an optional line; empty input means "keep current value".
    pub async fn optional(&mut self, prompt: &str) -> AppResult<Option<String>> {
        match self.read_line(prompt).await? {
            None => Err(input_closed()),
            Some(line) if line.is_empty() => Ok(None),
            Some(line) => Ok(Some(line)),
        }
    }

    /// Read an integer, re-prompting until one parses.
    pub async fn parse_i64(&mut self, prompt: &str) -> AppResult<i64> {
        loop {
            let line = self.required(prompt).await?;
            match line.parse() {
                Ok(value) => return Ok(value),
                Err(_) => println!("Invalid number: {line}"),
            }
        }
    }

    /// Read a monetary amount, re-prompting until one parses.
    pub async fn parse_money(&mut self, prompt: &str) -> AppResult<f64> {
        loop {
            let line = self.required(prompt).await?;
            match line.trim_start_matches('$').parse() {
                Ok(value) => return Ok(value),
                Err(_) => println!("Invalid amount: {line}"),
            }
        }
    }

    /// Ask a yes/no question, re-prompting until the answer is recognizable.
    pub async fn confirm(&mut self, prompt: &str) -> AppResult<bool> {
        loop {
            let line = self.required(prompt).await?;
            match parse_yes_no(&line) {
                Some(answer) => return Ok(answer),
                None => println!("Please answer y or n."),
            }
        }
    }

    /// Present numbered options and read a choice, returning its index.
    /// Accepts either the option number or its name (case-insensitive).
    pub async fn choose(&mut self, prompt: &str, options: &[&str]) -> AppResult<usize> {
        println!("{prompt}");
        for (i, option) in options.iter().enumerate() {
            println!("  {}. {option}", i + 1);
        }
        loop {
            let line = self.required("Select: ").await?;
            match match_option(&line, options) {
                Some(index) => return Ok(index),
                None => println!("Please choose between 1 and {}.", options.len()),
            }
        }
    }

    /// Like [`choose`](Self::choose), but empty input selects `default`.
    pub async fn choose_or(
        &mut self,
        prompt: &str,
        options: &[&str],
        default: usize,
    ) -> AppResult<usize> {
        println!("{prompt}");
        for (i, option) in options.iter().enumerate() {
            println!("  {}. {option}", i + 1);
        }
        loop {
            match self.read_line("Select: ").await? {
                None => return Err(input_closed()),
                Some(line) if line.is_empty() => return Ok(default),
                Some(line) => match match_option(&line, options) {
                    Some(index) => return Ok(index),
                    None => println!("Please choose between 1 and {}.", options.len()),
                },
            }
        }
    }
}

impl Default for Console {
    fn default() -> Self {
        Self::new()
    }
}

fn show_prompt(prompt: &str) -> AppResult<()> {
    use std::io::Write;
    print!("{prompt}");
    std::io::stdout()
        .flush()
        .map_err(|e| AppError::internal(format!("Failed to flush stdout: {e}")))
}

fn input_closed() -> AppError {
    AppError::invalid_request("Input stream closed")
}

fn parse_yes_no(input: &str) -> Option<bool> {
    match input.to_ascii_lowercase().as_str() {
        "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}

fn match_option(input: &str, options: &[&str]) -> Option<usize> {
    if let Ok(choice) = input.parse::<usize>() {
        return (1..=options.len()).contains(&choice).then(|| choice - 1);
    }
    options
        .iter()
        .position(|option| option.eq_ignore_ascii_case(input))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_yes_no() {
        assert_eq!(parse_yes_no("y"), Some(true));
        assert_eq!(parse_yes_no("YES"), Some(true));
        assert_eq!(parse_yes_no("n"), Some(false));
        assert_eq!(parse_yes_no("No"), Some(false));
        assert_eq!(parse_yes_no("maybe"), None);
        assert_eq!(parse_yes_no(""), None);
    }

    #[test]
    fn test_match_option_by_number_or_name() {
        let options = ["Cash", "Card", "QR", "E-wallet"];
        assert_eq!(match_option("1", &options), Some(0));
        assert_eq!(match_option("4", &options), Some(3));
        assert_eq!(match_option("0", &options), None);
        assert_eq!(match_option("5", &options), None);
        assert_eq!(match_option("cash", &options), Some(0));
        assert_eq!(match_option("E-WALLET", &options), Some(3));
        assert_eq!(match_option("voucher", &options), None);
    }
}
