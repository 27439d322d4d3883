//! oxo CLI - tic-tac-toe position analysis with the negamax engine
//!
//! Subcommands:
//! - `analyze`: print a position report (best move, ranked replies) or the
//!   full game tree as JSON
//! - `selfplay`: play engine-vs-engine games from the empty board

use anyhow::Result;
use clap::{Parser, Subcommand};
use oxo::{Board, DEFAULT_CUTOFF_DEPTH, Player, Session, Status, negamax};

#[derive(Parser)]
#[command(name = "oxo")]
#[command(version, about = "Tic-tac-toe board engine and game-tree analyzer", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a position: best move and ranked replies
    Analyze {
        /// Board text: rows of '.', 'X', 'O' separated by whitespace
        #[arg(default_value = "... ... ...")]
        board: String,

        /// Search depth at which alpha-beta pruning engages
        #[arg(long, default_value_t = DEFAULT_CUTOFF_DEPTH)]
        cutoff_depth: usize,

        /// Emit the full game tree as JSON instead of a report
        #[arg(long)]
        json: bool,
    },

    /// Play engine-vs-engine games from the empty board
    Selfplay {
        /// Number of games to play
        #[arg(long, default_value_t = 10)]
        games: usize,

        /// Search depth at which alpha-beta pruning engages
        #[arg(long, default_value_t = DEFAULT_CUTOFF_DEPTH)]
        cutoff_depth: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            board,
            cutoff_depth,
            json,
        } => analyze(&board, cutoff_depth, json),
        Commands::Selfplay {
            games,
            cutoff_depth,
        } => selfplay(games, cutoff_depth),
    }
}

fn analyze(board_text: &str, cutoff_depth: usize, json: bool) -> Result<()> {
    let board = Board::from_text(board_text);
    let tree = negamax(board, cutoff_depth);

    if json {
        println!("{}", serde_json::to_string_pretty(&tree)?);
        return Ok(());
    }

    println!("{board}");
    println!();

    if let Some(winner) = board.winner() {
        println!("{} has won on line {:?}", winner.player, winner.line);
        return Ok(());
    }
    if tree.children.is_empty() {
        println!("Drawn position: no moves remain");
        return Ok(());
    }

    println!("{} to play", board.next_player());
    println!("\nReplies, best first (score from the mover's side):");
    for child in &tree.children {
        let Some(mv) = child.mv else { continue };
        println!("  {} -> {:+}", mv, -child.score);
    }

    Ok(())
}

fn selfplay(games: usize, cutoff_depth: usize) -> Result<()> {
    let mut x_wins = 0usize;
    let mut o_wins = 0usize;
    let mut draws = 0usize;

    for game in 1..=games {
        let mut session = Session::with_cutoff_depth(cutoff_depth);
        while let Some(coord) = session.hint() {
            session.play(coord)?;
        }

        match session.status() {
            Status::Win(Player::X) => {
                x_wins += 1;
                println!("game {game}: X wins");
            }
            Status::Win(Player::O) => {
                o_wins += 1;
                println!("game {game}: O wins");
            }
            Status::Draw => {
                draws += 1;
                println!("game {game}: draw");
            }
            Status::ToPlay(player) => {
                unreachable!("no hint for {player} on a non-terminal board")
            }
        }
    }

    println!("\n{games} games: {x_wins} X wins, {o_wins} O wins, {draws} draws");
    Ok(())
}
