//! Interactive CLI mode
//!
//! The solver suggests each guess; the player types the colors the real game
//! showed.

use crate::catalog::Catalog;
use crate::core::Coloring;
use crate::game::{FeedbackSource, GameError, GameSession, Outcome, SessionConfig, TurnContext};
use crate::output::formatters::{entropy_bar, guesses_word};
use crate::solver::{Selection, Strategy};
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// How many remaining candidates are listed before a prompt
const SHOW_CANDIDATES: usize = 10;

/// Shown once when interactive play starts
const HELP: &str = "
After each guess, enter the colors the game showed:
  - G/g/🟩 or 'green' for the right letter in the right spot
  - Y/y/🟨 or 'yellow' for a letter elsewhere in the word
  - -/_/⬜ or 'grey' for a letter not in the word
";

const FEEDBACK_PROMPT: &str = "Enter feedback (G/Y/-, green,yellow,grey, 'win' or 'quit')";

/// Feedback typed by a person
///
/// Accepts `G/Y/-` symbols, emoji squares, or comma-separated color names.
/// Unreadable input is reported and asked for again; `quit` ends the game.
pub struct HumanFeedback<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> HumanFeedback<R, W> {
    #[must_use]
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn describe_turn(
        &mut self,
        selection: &Selection,
        context: &TurnContext<'_>,
    ) -> io::Result<()> {
        let remaining = context.catalog.len();
        writeln!(self.output, "{}", "─".repeat(60).cyan())?;
        writeln!(
            self.output,
            "Turn {}/{}: {remaining} candidates remaining",
            context.turn, context.max_guesses
        )?;
        writeln!(self.output, "{}", "─".repeat(60).cyan())?;

        if selection.is_sentinel() {
            writeln!(
                self.output,
                "\n{}",
                "No candidates remain! Earlier feedback may be wrong.".red()
            )?;
        }

        writeln!(
            self.output,
            "\n📊 Suggested guess: {}",
            selection.word.text().to_uppercase().bright_yellow().bold()
        )?;
        writeln!(
            self.output,
            "   Entropy: [{}] {:.3} bits\n",
            entropy_bar(selection.score, 30).green(),
            selection.score
        )?;

        if (2..=SHOW_CANDIDATES).contains(&remaining) {
            writeln!(self.output, "Remaining candidates:")?;
            for candidate in context.catalog {
                writeln!(self.output, "  • {}", candidate.text().to_uppercase())?;
            }
            writeln!(self.output)?;
        }
        Ok(())
    }

    fn read_line(&mut self, prompt: &str) -> Result<String, GameError> {
        write!(self.output, "{prompt}: ")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(GameError::Aborted);
        }
        Ok(line.trim().to_string())
    }
}

impl<R: BufRead, W: Write> FeedbackSource for HumanFeedback<R, W> {
    fn feedback(
        &mut self,
        selection: &Selection,
        context: &TurnContext<'_>,
    ) -> Result<Coloring, GameError> {
        self.describe_turn(selection, context)?;

        loop {
            let input = self.read_line(FEEDBACK_PROMPT)?;
            match input.to_lowercase().as_str() {
                "quit" | "q" | "exit" => return Err(GameError::Aborted),
                "win" | "correct" | "solved" => return Ok(Coloring::ALL_CORRECT),
                _ => match Coloring::parse(&input) {
                    Ok(coloring) => return Ok(coloring),
                    Err(err) => writeln!(self.output, "❌ {err}, try again\n")?,
                },
            }
        }
    }
}

/// Run the interactive mode on stdin and stdout
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple<S: Strategy + ?Sized>(
    catalog: &Catalog,
    strategy: &S,
    config: SessionConfig,
) -> Result<(), GameError> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    play_interactive(catalog, strategy, config, stdin.lock(), stdout.lock())
}

/// Play games against a person until they stop
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn play_interactive<S, R, W>(
    catalog: &Catalog,
    strategy: &S,
    config: SessionConfig,
    input: R,
    output: W,
) -> Result<(), GameError>
where
    S: Strategy + ?Sized,
    R: BufRead,
    W: Write,
{
    let mut human = HumanFeedback::new(input, output);

    writeln!(
        human.output,
        "\n{}",
        "Wordle Solver - Interactive Mode".bright_cyan().bold()
    )?;
    writeln!(human.output, "{HELP}")?;

    loop {
        let mut session = GameSession::new(catalog.clone(), strategy, config);
        match session.play(&mut human) {
            Ok(outcome) => report_outcome(&mut human.output, &session, outcome)?,
            Err(GameError::Aborted) => {
                writeln!(human.output, "\n👋 Thanks for playing!\n")?;
                return Ok(());
            }
            Err(err) => return Err(err),
        }

        let again = match human.read_line("Play again? (yes/no)") {
            Ok(answer) => answer.to_lowercase(),
            Err(GameError::Aborted) => String::new(),
            Err(err) => return Err(err),
        };
        if !matches!(again.as_str(), "yes" | "y") {
            writeln!(human.output, "\n👋 Thanks for playing!\n")?;
            return Ok(());
        }
    }
}

fn report_outcome<S: Strategy + ?Sized, W: Write>(
    output: &mut W,
    session: &GameSession<'_, S>,
    outcome: Outcome,
) -> io::Result<()> {
    writeln!(output, "\n{}", "═".repeat(60).bright_cyan())?;
    match outcome {
        Outcome::Solved { guesses } => writeln!(
            output,
            "{}",
            format!("🎉 Solved in {guesses} {}!", guesses_word(guesses))
                .bright_green()
                .bold()
        )?,
        Outcome::Failed { guesses } => writeln!(
            output,
            "{}",
            format!("❌ Out of guesses after {guesses} tries")
                .red()
                .bold()
        )?,
    }

    writeln!(output, "\n  Guess history:")?;
    for (i, record) in session.history().iter().enumerate() {
        writeln!(
            output,
            "    {}. {} {}",
            i + 1,
            record.guess.text().to_uppercase().bold(),
            record.coloring.to_emoji()
        )?;
    }
    writeln!(output, "{}\n", "═".repeat(60).bright_cyan())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::{EntropyStrategy, ScoringPool};
    use crate::wordlists::loader::words_from_slice;
    use std::io::Cursor;

    fn fixture() -> Catalog {
        Catalog::new(words_from_slice(&["crane", "trace", "slate", "place"]))
    }

    fn run(input: &str) -> (Result<(), GameError>, String) {
        let strategy = EntropyStrategy::new(ScoringPool::Sequential);
        let mut output = Vec::new();
        let result = play_interactive(
            &fixture(),
            &strategy,
            SessionConfig::default(),
            Cursor::new(input.as_bytes()),
            &mut output,
        );
        (result, String::from_utf8(output).unwrap())
    }

    #[test]
    fn human_solves_fixture() {
        let (result, output) = run("--G-G\nGGGGG\nno\n");

        assert!(result.is_ok());
        assert!(output.contains("CRANE"));
        assert!(output.contains("Solved in 2 guesses"));
    }

    #[test]
    fn accepts_color_names() {
        let (result, output) = run("grey, grey, green, grey, green\nwin\nno\n");

        assert!(result.is_ok());
        assert!(output.contains("Solved in 2 guesses"));
    }

    #[test]
    fn invalid_feedback_is_asked_again() {
        let (result, output) = run("GGXQG\n--G-G\nGGGGG\nno\n");

        assert!(result.is_ok());
        assert!(output.contains("try again"));
        assert!(output.contains("Solved in 2 guesses"));
    }

    #[test]
    fn quit_ends_the_game() {
        let (result, output) = run("quit\n");

        assert!(result.is_ok());
        assert!(output.contains("Thanks for playing"));
    }

    #[test]
    fn end_of_input_ends_the_game() {
        let (result, _) = run("");
        assert!(result.is_ok());
    }

    #[test]
    fn human_feedback_reads_one_coloring() {
        let catalog = fixture();
        let context = TurnContext {
            turn: 1,
            max_guesses: 6,
            catalog: &catalog,
        };
        let mut human = HumanFeedback::new(Cursor::new("🟩🟨⬜⬜🟩\n"), Vec::new());

        let coloring = human.feedback(&Selection::sentinel(), &context).unwrap();
        assert_eq!(coloring, "GY--G".parse().unwrap());
    }
}
