//! Full data reset, gated behind a confirmation.

use std::io::{BufRead, Write};

use swissscoli_core::Config;

use super::{open_tracker, Output};

const PROMPT: &str = "Möchtest du wirklich alle Daten zurücksetzen? [y/N] ";

fn is_yes(answer: &str) -> bool {
    matches!(
        answer.trim().to_lowercase().as_str(),
        "y" | "yes" | "j" | "ja"
    )
}

fn confirm(input: &mut impl BufRead) -> Result<bool, std::io::Error> {
    eprint!("{PROMPT}");
    std::io::stderr().flush()?;
    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(is_yes(&answer))
}

pub fn run(yes: bool, out: Output) -> Result<(), Box<dyn std::error::Error>> {
    if !yes && !confirm(&mut std::io::stdin().lock())? {
        eprintln!("aborted");
        return Ok(());
    }

    let mut tracker = open_tracker(&Config::load_or_default())?;
    let event = tracker.reset_all()?;
    out.event(&event)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_german_and_english_yes() {
        for answer in ["y\n", "Yes", " ja ", "J"] {
            assert!(is_yes(answer), "{answer:?}");
        }
        for answer in ["", "\n", "n", "nein", "maybe"] {
            assert!(!is_yes(answer), "{answer:?}");
        }
    }

    #[test]
    fn confirm_reads_one_line() {
        let mut input = std::io::Cursor::new(b"ja\nn\n".to_vec());
        assert!(confirm(&mut input).unwrap());
        assert!(!confirm(&mut input).unwrap());
    }
}
