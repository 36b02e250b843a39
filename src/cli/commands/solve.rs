//! Solve command - minimax analysis of a single position

use anyhow::{Context, Result, bail};
use clap::Parser;

use crate::{
    cli::output::{self, print_kv, print_section},
    tictactoe::{Board, Cell, Player, Roles, SearchOutcome, Searcher, evaluate_moves},
};

#[derive(Parser, Debug)]
#[command(about = "Show the minimax value of every move in a position")]
pub struct SolveArgs {
    /// Board as 9 cells in row-major order, e.g. "XO./.X./..." ('.' is empty)
    pub board: String,

    /// Side to move (`x` or `o`); inferred from the mark counts when omitted
    #[arg(long)]
    pub to_move: Option<String>,

    /// Mark treated as the human, minimising side
    #[arg(long, default_value = "x")]
    pub human: String,
}

pub fn execute(args: SolveArgs) -> Result<()> {
    let mut board = Board::from_string(&args.board)?;
    let human: Player = args
        .human
        .parse()
        .with_context(|| format!("Invalid value '{}' for --human", args.human))?;
    let roles = Roles::new(human);
    let to_move = match &args.to_move {
        Some(value) => value
            .parse()
            .with_context(|| format!("Invalid value '{value}' for --to-move"))?,
        None => infer_to_move(&board)?,
    };

    print_section("Position");
    println!("{board}");
    print_kv("Human", &roles.human.to_string());
    print_kv("Machine", &roles.machine.to_string());
    print_kv("To move", &to_move.to_string());

    let mut searcher = Searcher::new();
    let outcome = searcher.search(&mut board, to_move, roles);

    print_section("Move values");
    let values = evaluate_moves(&mut board, to_move, roles);
    if values.is_empty() {
        println!("  (position is terminal)");
    }
    for (mv, score) in &values {
        println!(
            "  {} {:<8} {:>+2}  {}",
            mv.number(),
            mv.to_string(),
            score,
            output::describe_score(*score)
        );
    }

    print_section("Result");
    match outcome {
        SearchOutcome::Terminal { score } => {
            print_kv("Outcome", output::describe_score(score));
        }
        SearchOutcome::Move { mv, score } => {
            print_kv("Best move", &format!("{} {}", mv.number(), mv));
            print_kv("Value", output::describe_score(score));
        }
    }
    print_kv("Nodes searched", &searcher.nodes_visited().to_string());

    Ok(())
}

/// Side to move assuming X opened: X when the counts are equal, O when X is one ahead.
pub fn infer_to_move(board: &Board) -> Result<Player> {
    let count = |target: Cell| {
        board
            .cells()
            .iter()
            .flatten()
            .filter(|&&cell| cell == target)
            .count()
    };
    let (x, o) = (count(Cell::X), count(Cell::O));
    match x.checked_sub(o) {
        Some(0) => Ok(Player::X),
        Some(1) => Ok(Player::O),
        _ => bail!("Cannot infer the side to move from X={x}, O={o}; pass --to-move"),
    }
}
