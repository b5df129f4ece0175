//! Interactive per-keystroke matching loop.
//!
//! The loop owns the evolving query and the loaded word list; the engine is
//! invoked afresh on every keystroke and holds no state between invocations.
//! One full rank-and-render cycle runs to completion before the next key is
//! read.
//!
//! Keys: printable characters extend the query, Backspace removes the last
//! character, Esc or Ctrl-C exits.

use std::io::{self, Write};

use anyhow::{Context, Result};
use colored::Colorize;
use crossterm::cursor::MoveTo;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::terminal::{self, Clear, ClearType};
use crossterm::QueueableCommand;

use crate::dictionary::WordList;
use crate::rank::{rank, RankOptions};
use crate::render::{render, RenderOptions};

/// Restores cooked mode when dropped, so the terminal recovers even when the
/// loop exits through an error path.
struct RawModeGuard;

impl RawModeGuard {
    fn enable() -> Result<Self> {
        terminal::enable_raw_mode().context("Failed to enable raw terminal mode")?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
    }
}

/// Run the interactive loop until the user exits.
///
/// The word list must already be loaded (and case-folded per
/// `rank_options.case_sensitive`); the loop never mutates it.
pub fn run(
    words: &WordList,
    rank_options: &RankOptions,
    render_options: &RenderOptions,
) -> Result<()> {
    let _guard = RawModeGuard::enable()?;
    let mut stdout = io::stdout();

    let mut query = String::new();
    redraw(&mut stdout, &query, words, rank_options, render_options)?;

    loop {
        match event::read().context("Failed to read terminal event")? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                match key.code {
                    KeyCode::Esc => break,
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => break,
                    KeyCode::Backspace => {
                        query.pop();
                    }
                    KeyCode::Char(c) => query.push(c),
                    _ => continue,
                }
                redraw(&mut stdout, &query, words, rank_options, render_options)?;
            }
            Event::Resize(..) => {
                redraw(&mut stdout, &query, words, rank_options, render_options)?;
            }
            _ => {}
        }
    }

    // Leave the match list in place; just move past it
    writeln!(stdout)?;
    Ok(())
}

/// Clear the screen and repaint header, query, and ranked matches.
///
/// Raw mode is active, so every line ends in an explicit `\r\n`.
fn redraw(
    stdout: &mut impl Write,
    query: &str,
    words: &WordList,
    rank_options: &RankOptions,
    render_options: &RenderOptions,
) -> Result<()> {
    let ranked = rank(query, words.terms(), rank_options)?;
    let lines = render(&ranked, query, render_options)?;

    stdout.queue(Clear(ClearType::All))?.queue(MoveTo(0, 0))?;

    write!(
        stdout,
        "{} to quit, {} to delete ({} words)\r\n\r\n",
        "Esc".bold(),
        "Backspace".bold(),
        words.len()
    )?;
    write!(stdout, "> {}\r\n\r\n", query.bold().cyan())?;

    for line in &lines {
        write!(stdout, "{}\r\n", line)?;
    }

    stdout.flush()?;
    Ok(())
}
