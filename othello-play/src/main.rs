//! Play Othello in the terminal, or replay a transcript of moves.

mod command;

use anyhow::Context;
use clap::Parser;
use command::Command;
use othello_core::{Env, EnvConfig, Legality, Move, PassPolicy, Player};
use std::io::{self, BufRead, Write};

/// Play Othello against yourself in the terminal.
#[derive(Parser)]
#[command(name = "othello-play")]
#[command(about = "Play or replay an Othello game in the terminal")]
struct Args {
    /// How a side without a legal placement gives up its turn: explicit or implicit
    #[arg(long, default_value = "explicit")]
    pass_policy: PassPolicy,

    /// How placements are checked: strict or lenient
    #[arg(long, default_value = "strict")]
    legality: Legality,

    /// Replay these whitespace-separated moves ("D3 C5 PASS") instead of prompting
    #[arg(long)]
    moves: Option<String>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = EnvConfig::default()
        .with_pass_policy(args.pass_policy)
        .with_legality(args.legality);
    log::info!(
        "pass policy: {}, legality: {}",
        config.pass_policy,
        config.legality
    );

    let mut env = Env::with_config(config);
    env.reset();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match args.moves {
        Some(transcript) => replay(&mut env, &transcript)?,
        None => play_interactive(&mut env, io::stdin().lock(), &mut out)?,
    }

    write_result(&env, &mut out)?;
    Ok(())
}

/// Apply every move of a transcript, stopping at the first bad one.
fn replay(env: &mut Env, transcript: &str) -> anyhow::Result<()> {
    for (ply, token) in transcript.split_whitespace().enumerate() {
        let mv: Move = token
            .parse()
            .with_context(|| format!("ply {}: cannot parse {:?}", ply + 1, token))?;
        env.play(mv)
            .with_context(|| format!("ply {}: cannot play {}", ply + 1, mv))?;
    }
    log::info!("replayed {} actions", env.history_size());
    Ok(())
}

/// Prompt for moves until the game ends or the player quits.
fn play_interactive<R: BufRead, W: Write>(env: &mut Env, input: R, out: &mut W) -> io::Result<()> {
    let mut lines = input.lines();

    while !env.is_done() {
        writeln!(out, "\n{}\n", env)?;
        write_moves(env, out)?;
        write!(out, "Enter a move: ")?;
        out.flush()?;

        let line = match lines.next() {
            Some(line) => line?,
            None => break,
        };

        match line.parse::<Command>() {
            Ok(Command::Play(mv)) => {
                if let Err(err) = env.play(mv) {
                    writeln!(out, "{}", err)?;
                    write_moves(env, out)?;
                }
            }
            Ok(Command::Undo) => {
                if let Err(err) = env.undo() {
                    writeln!(out, "{}", err)?;
                }
            }
            Ok(Command::Moves) => write_moves(env, out)?,
            Ok(Command::Reset) => env.reset(),
            Ok(Command::Quit) => break,
            Err(_) => writeln!(out, "Cannot parse move.")?,
        }
    }

    writeln!(out, "\n{}\n", env)
}

fn write_moves<W: Write>(env: &Env, out: &mut W) -> io::Result<()> {
    let moves: Vec<String> = env
        .legal_actions()
        .iter()
        .map(|action| action.mv.to_string())
        .collect();
    writeln!(out, "Legal moves: [{}]", moves.join(", "))
}

fn write_result<W: Write>(env: &Env, out: &mut W) -> io::Result<()> {
    writeln!(
        out,
        "BLACK {} - {} WHITE",
        env.count(Player::Black),
        env.count(Player::White)
    )?;
    if !env.is_done() {
        writeln!(out, "Game unfinished.")
    } else if let Some(winner) = env.winner() {
        writeln!(out, "Winner: {}.", winner)
    } else {
        writeln!(out, "Draw.")
    }
}
