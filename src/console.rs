//! Console collaborator: every prompt and report the game makes goes
//! through [`Console`].

use anyhow::{Context, bail};
use combat::Combatant;
use crossterm::{
    cursor::MoveTo,
    queue,
    terminal::{Clear, ClearType},
};
use std::io::{self, BufRead, StdinLock, Stdout, Write};

/// Trait for the game's input/output layer
pub trait Console {
    /// Present `options` and return the 0-based index of a valid selection.
    /// Invalid input re-prompts; only an I/O failure returns an error.
    fn choose(&mut self, prompt: &str, options: &[&str]) -> anyhow::Result<usize>;

    /// Read one line of free text.
    fn read_line(&mut self, prompt: &str) -> anyhow::Result<String>;

    /// Show a combatant's name and effective stats.
    fn display_stats(&mut self, combatant: &dyn Combatant) -> anyhow::Result<()>;

    /// Report something to the player.
    fn message(&mut self, text: &str) -> anyhow::Result<()>;

    /// Wait until the player has read the screen.
    fn pause(&mut self) -> anyhow::Result<()> {
        Ok(())
    }

    fn clear(&mut self) -> anyhow::Result<()> {
        Ok(())
    }
}

/// Matches player input against a menu: either the 1-based option number or
/// the option label (case-insensitive).
pub fn parse_choice(input: &str, options: &[&str]) -> Option<usize> {
    let input = input.trim();
    if let Ok(number) = input.parse::<usize>() {
        return (1..=options.len()).contains(&number).then(|| number - 1);
    }
    options
        .iter()
        .position(|option| option.eq_ignore_ascii_case(input))
}

/// Line-based console over any reader/writer pair
pub struct TerminalConsole<R, W> {
    input: R,
    output: W,
    clear_screen: bool,
}

impl TerminalConsole<StdinLock<'static>, Stdout> {
    pub fn stdio(clear_screen: bool) -> Self {
        Self::new(io::stdin().lock(), io::stdout(), clear_screen)
    }
}

impl<R: BufRead, W: Write> TerminalConsole<R, W> {
    pub fn new(input: R, output: W, clear_screen: bool) -> Self {
        Self {
            input,
            output,
            clear_screen,
        }
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    fn next_line(&mut self) -> anyhow::Result<String> {
        self.output.flush().context("Failed to flush console")?;
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read from console")?;
        if read == 0 {
            bail!("Console input closed");
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}

impl<R: BufRead, W: Write> Console for TerminalConsole<R, W> {
    fn choose(&mut self, prompt: &str, options: &[&str]) -> anyhow::Result<usize> {
        if options.is_empty() {
            bail!("Menu {:?} has no options", prompt);
        }
        loop {
            writeln!(self.output, "{}", prompt)?;
            for (i, option) in options.iter().enumerate() {
                writeln!(self.output, "{}. {}", i + 1, option)?;
            }
            write!(self.output, "> ")?;

            let line = self.next_line()?;
            match parse_choice(&line, options) {
                Some(index) => return Ok(index),
                None => {
                    tracing::debug!(input = %line, "invalid_menu_input");
                    writeln!(self.output, "Invalid Input")?;
                }
            }
        }
    }

    fn read_line(&mut self, prompt: &str) -> anyhow::Result<String> {
        writeln!(self.output, "{}", prompt)?;
        write!(self.output, "> ")?;
        self.next_line()
    }

    fn display_stats(&mut self, combatant: &dyn Combatant) -> anyhow::Result<()> {
        writeln!(self.output, "Name: {}", combatant.name())?;
        writeln!(self.output, "Health: {}", combatant.health())?;
        writeln!(self.output, "Attack Power: {}", combatant.attack_power())?;
        writeln!(self.output, "Defense Power: {}\n", combatant.defense_power())?;
        Ok(())
    }

    fn message(&mut self, text: &str) -> anyhow::Result<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    fn pause(&mut self) -> anyhow::Result<()> {
        if !self.clear_screen {
            return Ok(());
        }
        write!(self.output, "Press Enter to continue...")?;
        self.next_line().map(drop)
    }

    fn clear(&mut self) -> anyhow::Result<()> {
        if self.clear_screen {
            queue!(self.output, Clear(ClearType::All), MoveTo(0, 0))
                .context("Failed to clear terminal")?;
        }
        Ok(())
    }
}
