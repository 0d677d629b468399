// UI layer: the interactive entry session. Field prompts go through
// `dialoguer` when attached to a terminal; the poem body is read as raw
// lines so that pasted text arrives untouched. The session itself only
// talks to the `Prompter` trait, which keeps it testable with in-memory
// input.

use crate::config::Config;
use crate::error::{EntryError, Result};
use crate::poem::{self, PoemFields, PoemRecord};
use dialoguer::Input;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::{debug, info};

/// Source of answers and sink for messages during a session.
pub trait Prompter {
    /// Show `prompt` and return the line the user typed (not trimmed).
    fn ask(&mut self, prompt: &str) -> Result<String>;
    /// Read one line of body text without showing a prompt.
    fn read_line(&mut self) -> Result<String>;
    /// Print one line of output.
    fn say(&mut self, text: &str) -> Result<()>;
}

/// Prompter used when stdin is a terminal.
pub struct TerminalPrompter {
    stdin: io::Stdin,
}

impl TerminalPrompter {
    pub fn new() -> Self {
        TerminalPrompter { stdin: io::stdin() }
    }
}

impl Default for TerminalPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for TerminalPrompter {
    fn ask(&mut self, prompt: &str) -> Result<String> {
        // Empty answers select the defaults, so they must be accepted.
        let answer: String = Input::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()?;
        Ok(answer)
    }

    fn read_line(&mut self) -> Result<String> {
        read_stripped(&mut self.stdin.lock())
    }

    fn say(&mut self, text: &str) -> Result<()> {
        println!("{}", text);
        Ok(())
    }
}

/// Line-oriented prompter over any reader/writer pair. Used for piped
/// input and in tests.
pub struct StreamPrompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> StreamPrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        StreamPrompter { input, output }
    }

    /// Give back the writer, e.g. to inspect the transcript.
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Prompter for StreamPrompter<R, W> {
    fn ask(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{}: ", prompt)?;
        self.output.flush()?;
        read_stripped(&mut self.input)
    }

    fn read_line(&mut self) -> Result<String> {
        read_stripped(&mut self.input)
    }

    fn say(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }
}

/// Read a line and drop the line terminator. End of input is an error:
/// every read happens while a prompt is still waiting for an answer.
fn read_stripped<R: BufRead + ?Sized>(input: &mut R) -> Result<String> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(EntryError::InputClosed);
    }
    while line.ends_with('\n') || line.ends_with('\r') {
        line.pop();
    }
    Ok(line)
}

/// Ask for id, title, date, category and location, applying defaults to
/// the empty ones.
pub fn collect_fields<P: Prompter>(prompter: &mut P, config: &Config) -> Result<PoemFields> {
    let raw_id = prompter.ask("Enter poem ID number")?.trim().to_string();
    let title = prompter.ask("Enter poem title")?.trim().to_string();
    let date = prompter
        .ask("Enter date (YYYY-MM-DD) or press Enter for today")?
        .trim()
        .to_string();
    let category = prompter
        .ask(&format!("Enter category (default: {})", config.default_category))?
        .trim()
        .to_string();
    let location = prompter
        .ask(&format!("Enter location (default: {})", config.default_location))?
        .trim()
        .to_string();

    Ok(PoemFields {
        raw_id,
        title,
        date: if date.is_empty() { poem::today() } else { date },
        category: or_default(category, &config.default_category),
        location: or_default(location, &config.default_location),
    })
}

fn or_default(value: String, default: &str) -> String {
    if value.is_empty() {
        default.to_string()
    } else {
        value
    }
}

/// Read body lines until two consecutive empty lines. A single empty line
/// stays in the poem; the terminating pair does not. A poem cannot contain
/// two blank lines in a row.
pub fn collect_body<P: Prompter>(prompter: &mut P) -> Result<String> {
    let mut lines: Vec<String> = Vec::new();
    let mut empty_run = 0;

    loop {
        let line = prompter.read_line()?;
        if line.is_empty() {
            empty_run += 1;
            if empty_run >= 2 {
                break;
            }
            lines.push(line);
        } else {
            empty_run = 0;
            lines.push(line);
        }
    }

    // The first of the two terminating empty lines was pushed before we
    // knew it ended the body.
    lines.pop();
    Ok(lines.join("\n"))
}

/// One full pass: prompts, body, write, summary. Returns the file written.
pub fn create_poem<P: Prompter>(prompter: &mut P, config: &Config) -> Result<PathBuf> {
    prompter.say("=== Alaska Hoffman Poetry Archive - Poem to JSON Converter ===\n")?;

    let fields = collect_fields(prompter, config)?;
    debug!(raw_id = %fields.raw_id, "metadata collected");

    prompter.say("\nNow paste your poem content (press Enter twice when finished):")?;
    prompter.say(&"=".repeat(50))?;
    let content = collect_body(prompter)?;

    let record = PoemRecord::build(&fields, content)?;
    let path = poem::save(&config.poems_dir, &fields.raw_id, &record)?;

    print_summary(prompter, &path, &record, config)?;
    Ok(path)
}

fn print_summary<P: Prompter>(
    prompter: &mut P,
    path: &std::path::Path,
    record: &PoemRecord,
    config: &Config,
) -> Result<()> {
    prompter.say(&format!("\n✅ Poem saved as: {}", path.display()))?;
    prompter.say(&format!("📝 Title: {}", record.title))?;
    prompter.say(&format!("📅 Date: {}", record.date))?;
    prompter.say(&format!("📍 Location: {}", record.location))?;
    prompter.say(&format!("📂 Category: {}", record.category))?;
    prompter.say("📄 Content preview:")?;
    prompter.say(&"-".repeat(30))?;
    prompter.say(&poem::preview(&record.content, config.preview_chars))?;
    prompter.say(&"-".repeat(30))?;
    Ok(())
}

/// "y" or "yes" in any case means another entry.
pub fn ask_another<P: Prompter>(prompter: &mut P) -> Result<bool> {
    prompter.say("")?;
    let answer = prompter.ask("Create another poem? (y/n)")?.trim().to_lowercase();
    Ok(answer == "y" || answer == "yes")
}

/// Run sessions until the user declines another one. Each pass starts
/// from scratch. Returns the files written, in order.
pub fn run<P: Prompter>(prompter: &mut P, config: &Config) -> Result<Vec<PathBuf>> {
    let mut written = Vec::new();
    loop {
        written.push(create_poem(prompter, config)?);
        if !ask_another(prompter)? {
            break;
        }
        prompter.say(&format!("\n{}\n", "=".repeat(60)))?;
    }
    info!(count = written.len(), "entry session finished");
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompter(input: &str) -> StreamPrompter<Cursor<Vec<u8>>, Vec<u8>> {
        StreamPrompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn body_keeps_single_blank_line() {
        let mut p = prompter("A\n\nB\n\n\n");
        assert_eq!(collect_body(&mut p).unwrap(), "A\n\nB");
    }

    #[test]
    fn body_ends_on_two_consecutive_blank_lines() {
        let mut p = prompter("one\n\ntwo\n\n\nleftover\n");
        let body = collect_body(&mut p).unwrap();
        assert_eq!(body, "one\n\ntwo");
        assert_eq!(body.matches('\n').count(), 2);
        // Nothing past the terminator was consumed.
        assert_eq!(p.read_line().unwrap(), "leftover");
    }

    #[test]
    fn body_accepts_crlf_input() {
        let mut p = prompter("first\r\nsecond\r\n\r\n\r\n");
        assert_eq!(collect_body(&mut p).unwrap(), "first\nsecond");
    }

    #[test]
    fn body_of_only_terminator_is_empty() {
        let mut p = prompter("\n\n");
        assert_eq!(collect_body(&mut p).unwrap(), "");
    }

    #[test]
    fn whitespace_line_is_not_empty() {
        let mut p = prompter("a\n \n\nb\n\n\n");
        assert_eq!(collect_body(&mut p).unwrap(), "a\n \n\nb");
    }

    #[test]
    fn body_eof_is_input_closed() {
        let mut p = prompter("only line\n");
        assert!(matches!(collect_body(&mut p), Err(EntryError::InputClosed)));
    }

    #[test]
    fn fields_are_trimmed_and_defaulted() {
        let mut p = prompter(" 12 \n  Tide  \n\n\n\n");
        let fields = collect_fields(&mut p, &Config::default()).unwrap();
        assert_eq!(fields.raw_id, "12");
        assert_eq!(fields.title, "Tide");
        assert_eq!(fields.date, poem::today());
        assert_eq!(fields.category, "Poetry");
        assert_eq!(fields.location, "Brooklyn, NY");
    }

    #[test]
    fn supplied_fields_are_not_validated() {
        let mut p = prompter("1\nT\nsometime\nHaiku\nKyoto\n");
        let fields = collect_fields(&mut p, &Config::default()).unwrap();
        assert_eq!(fields.date, "sometime");
        assert_eq!(fields.category, "Haiku");
        assert_eq!(fields.location, "Kyoto");
    }

    #[test]
    fn ask_another_accepts_y_and_yes_in_any_case() {
        for answer in ["y", "Y", "yes", "YES", " Yes "] {
            let mut p = prompter(&format!("{}\n", answer));
            assert!(ask_another(&mut p).unwrap(), "{answer:?}");
        }
        for answer in ["n", "", "yep", "no"] {
            let mut p = prompter(&format!("{}\n", answer));
            assert!(!ask_another(&mut p).unwrap(), "{answer:?}");
        }
    }

    #[test]
    fn stream_prompter_writes_prompt_with_colon() {
        let mut p = prompter("x\n");
        assert_eq!(p.ask("Name").unwrap(), "x");
        assert_eq!(String::from_utf8(p.into_output()).unwrap(), "Name: ");
    }
}
