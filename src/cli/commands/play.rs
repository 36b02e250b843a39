//! Play command - an interactive game against the machine

use std::{
    io::{BufRead, Write},
    path::PathBuf,
};

use anyhow::{Context, Result, bail};
use clap::Parser;
use tracing::{debug, info};

use crate::{
    Error,
    cli::output,
    config::GameConfig,
    tictactoe::{Game, GameOutcome, MachinePlayer, Move, Player},
};

#[derive(Parser, Debug, Default)]
#[command(about = "Play a game against the machine")]
pub struct PlayArgs {
    /// Mark to play (`x` or `o`); asked for when not given here or in the config
    #[arg(long, short = 's')]
    pub symbol: Option<String>,

    /// Move first yourself
    #[arg(long, conflicts_with = "machine_first")]
    pub human_first: bool,

    /// Let the machine make the first move
    #[arg(long)]
    pub machine_first: bool,

    /// Random seed for the machine's opening
    #[arg(long)]
    pub seed: Option<u64>,

    /// JSON configuration file
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut input = stdin.lock();
    let mut out = stdout.lock();

    let config = resolve_config(&args, &mut input, &mut out)?;
    play_game(&config, &mut input, &mut out)?;
    Ok(())
}

/// Build the game configuration: defaults, then the config file, then flags.
///
/// Symbol and turn order are prompted for only when neither a config file nor
/// a flag settles them.
pub fn resolve_config<R: BufRead, W: Write>(
    args: &PlayArgs,
    input: &mut R,
    out: &mut W,
) -> Result<GameConfig> {
    let mut config = match &args.config {
        Some(path) => GameConfig::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => GameConfig::default(),
    };
    let from_file = args.config.is_some();

    match &args.symbol {
        Some(symbol) => {
            let human: Player = symbol
                .parse()
                .with_context(|| format!("Invalid value '{symbol}' for --symbol"))?;
            config = config.with_human(human);
        }
        None if !from_file => config = config.with_human(prompt_symbol(input, out)?),
        None => {}
    }

    if args.human_first || args.machine_first {
        config = config.with_human_first(args.human_first);
    } else if !from_file {
        config = config.with_human_first(prompt_yes_no(
            input,
            out,
            "Would you like to play first? (Y/N): ",
        )?);
    }

    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }

    info!(?config, "resolved game configuration");
    Ok(config)
}

/// Run one game to completion over the given input and output.
pub fn play_game<R: BufRead, W: Write>(
    config: &GameConfig,
    input: &mut R,
    out: &mut W,
) -> Result<GameOutcome> {
    let mut game = Game::new(config);
    let mut machine = MachinePlayer::new(config.seed);
    let roles = game.roles();

    writeln!(out, "{}", output::roles_line(roles))?;

    while !game.outcome().is_over() {
        if game.is_human_turn() {
            writeln!(out, "\nYour turn [{}]", roles.human)?;
            output::write_board(out, game.board())?;
            loop {
                let mv = read_move(input, out)?;
                match game.play_human(mv) {
                    Ok(()) => break,
                    Err(Error::IllegalMove { .. }) => {
                        writeln!(out, "Cell {} is already taken.", mv.number())?;
                    }
                    Err(e) => return Err(e.into()),
                }
            }
        } else {
            writeln!(out, "\nMachine turn [{}]", roles.machine)?;
            let mv = game.play_machine(&mut machine)?;
            writeln!(out, "The machine plays {}.", mv.number())?;
        }
    }

    let outcome = game.outcome();
    writeln!(out)?;
    output::write_board(out, game.board())?;
    writeln!(out, "{}", output::outcome_message(outcome))?;
    Ok(outcome)
}

/// Prompt until a number in 1-9 is entered.
fn read_move<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<Move> {
    loop {
        let line = prompt_line(input, out, "Enter a move (1-9): ")?;
        match line.parse::<usize>().ok().map(Move::from_number) {
            Some(Ok(mv)) => return Ok(mv),
            _ => {
                debug!(input = %line, "rejected move entry");
                writeln!(out, "Please enter a number between 1 and 9.")?;
            }
        }
    }
}

fn prompt_symbol<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<Player> {
    loop {
        let line = prompt_line(input, out, "Would you like to play X or O? ")?;
        if let Ok(player) = line.parse() {
            return Ok(player);
        }
    }
}

fn prompt_yes_no<R: BufRead, W: Write>(input: &mut R, out: &mut W, question: &str) -> Result<bool> {
    loop {
        let line = prompt_line(input, out, question)?;
        match line.to_ascii_lowercase().as_str() {
            "y" | "yes" => return Ok(true),
            "n" | "no" => return Ok(false),
            _ => {}
        }
    }
}

/// Print a prompt and read one trimmed line; fails when input is exhausted.
fn prompt_line<R: BufRead, W: Write>(input: &mut R, out: &mut W, prompt: &str) -> Result<String> {
    write!(out, "{prompt}")?;
    out.flush()?;

    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .context("Failed to read from standard input")?;
    if read == 0 {
        bail!("Input closed before the game finished");
    }
    Ok(line.trim().to_string())
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn run(config: &GameConfig, script: &str) -> (Result<GameOutcome>, String) {
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut out = Vec::new();
        let result = play_game(config, &mut input, &mut out);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_prompts_for_symbol_and_order() {
        let args = PlayArgs::default();
        let mut input = Cursor::new(b"z\no\nmaybe\nn\n".to_vec());
        let mut out = Vec::new();

        let config = resolve_config(&args, &mut input, &mut out).unwrap();
        assert_eq!(config.human, Player::O);
        assert!(!config.human_first);
    }

    #[test]
    fn test_flags_skip_prompts() {
        let args = PlayArgs {
            symbol: Some("O".to_string()),
            machine_first: true,
            seed: Some(5),
            ..PlayArgs::default()
        };
        let mut input = Cursor::new(Vec::new());
        let mut out = Vec::new();

        let config = resolve_config(&args, &mut input, &mut out).unwrap();
        let expected = GameConfig::default()
            .with_human(Player::O)
            .with_human_first(false)
            .with_seed(5);
        assert_eq!(config, expected);
        assert!(out.is_empty());
    }

    #[test]
    fn test_bad_entries_are_reprompted() {
        // Human X opens in the centre; the machine answers in a corner.
        let config = GameConfig::default().with_seed(1);
        let (result, text) = run(&config, "abc\n0\n5\n5\n");

        assert!(text.contains("Please enter a number between 1 and 9."));
        assert!(text.contains("Cell 5 is already taken."));
        // Input runs out mid-game.
        assert!(result.is_err());
    }

    #[test]
    fn test_human_cannot_win() {
        // Human opens in a corner and then plays the first free cell.
        let config = GameConfig::default().with_seed(2);
        let script = "1\n2\n3\n4\n5\n6\n7\n8\n9\n".repeat(5);
        let (result, text) = run(&config, &script);

        let outcome = result.unwrap();
        assert_ne!(outcome, GameOutcome::HumanWin);
        assert!(text.contains(output::outcome_message(outcome)));
    }

    #[test]
    fn test_machine_opens_when_configured() {
        let config = GameConfig::default()
            .with_human(Player::O)
            .with_human_first(false)
            .with_seed(11);
        let (_, text) = run(&config, "");

        let machine_turn = text.find("Machine turn [X]").unwrap();
        assert!(!text[..machine_turn].contains("Your turn"));
    }
}
