use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use rpn_engine::entry::SEPARATOR;
use rpn_engine::{Operation, RegisterStack, Snapshot};

#[derive(Parser)]
#[command(name = "rpn")]
#[command(about = "Four-register RPN calculator")]
struct Cli {
    #[arg(long, global = true, help = "Print the register snapshot as JSON")]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate the given tokens and print the final registers
    Eval {
        #[arg(
            required = true,
            allow_hyphen_values = true,
            help = "Numbers, operation labels (+, ×, sin, π, ...) or commands (enter, chs, roll, drop, sto:NAME, rcl:NAME)"
        )]
        tokens: Vec<String>,
    },
    /// Read tokens from stdin line by line, printing the registers after each line
    Repl,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Eval { tokens } => {
            let mut stack = RegisterStack::new();
            for token in &tokens {
                apply_token(&mut stack, token)?;
            }
            write_snapshot(&mut io::stdout().lock(), &stack.snapshot(), cli.json)?;
        }
        Commands::Repl => {
            run_repl(
                io::stdin().lock(),
                &mut io::stdout().lock(),
                &mut io::stderr().lock(),
                cli.json,
            )?;
        }
    }

    Ok(())
}

/// Evaluate `input` line by line, writing the snapshot after each line.
///
/// A failing token is reported on `err` and ends its line; the rest of the
/// line is skipped, the pending entry is discarded, and the next line runs
/// on the same registers.
fn run_repl(
    input: impl BufRead,
    out: &mut impl Write,
    err: &mut impl Write,
    json: bool,
) -> Result<()> {
    let mut stack = RegisterStack::new();
    for line in input.lines() {
        let line = line.context("Failed to read input")?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        for token in line.split_whitespace() {
            if let Err(e) = apply_token(&mut stack, token) {
                writeln!(err, "error: {e:#}")?;
                stack.entry_mut().clear();
                break;
            }
        }
        write_snapshot(out, &stack.snapshot(), json)?;
    }
    Ok(())
}

/// Apply one input token to the stack.
///
/// Numbers are typed in and committed. Operation labels commit any pending
/// entry first. Labels nobody recognizes are ignored.
fn apply_token(stack: &mut RegisterStack, token: &str) -> Result<()> {
    if is_number(token) {
        stack.type_number(token);
        return commit(stack, token);
    }

    match token {
        "enter" => commit(stack, token)?,
        "chs" => stack.toggle_sign(),
        _ if is_separator(token) => stack.append_separator(),
        "roll" => stack.roll_up(),
        "drop" => stack.drop(),
        _ => {
            if let Some(name) = token.strip_prefix("sto:") {
                stack.set_var(name);
            } else if let Some(name) = token.strip_prefix("rcl:") {
                if let Some(value) = stack.get_var(name) {
                    stack.roll_push(value);
                }
            } else if let Some(op) = Operation::from_label(token) {
                commit(stack, token)?;
                match op {
                    Operation::Binary(op) => stack.apply_binary(op),
                    Operation::Unary(op) => stack.apply_unary(op),
                    Operation::Nilary(op) => stack.apply_nilary(op),
                }
            } else {
                tracing::debug!(token, "ignoring unknown token");
            }
        }
    }
    Ok(())
}

fn commit(stack: &mut RegisterStack, token: &str) -> Result<()> {
    stack
        .commit()
        .with_context(|| format!("Failed to commit entry at token '{token}'"))
}

/// `12`, `3.5`, `.5`, `-4`: optional leading minus, digits, at most one separator.
fn is_number(token: &str) -> bool {
    let body = token.strip_prefix('-').unwrap_or(token);
    body.chars().any(|c| c.is_ascii_digit())
        && body.chars().all(|c| c.is_ascii_digit() || c == SEPARATOR)
        && body.matches(SEPARATOR).count() <= 1
}

fn is_separator(token: &str) -> bool {
    let mut chars = token.chars();
    chars.next() == Some(SEPARATOR) && chars.next().is_none()
}

fn write_snapshot(out: &mut impl Write, snapshot: &Snapshot, json: bool) -> io::Result<()> {
    if json {
        writeln!(out, "{}", snapshot_json(snapshot))
    } else {
        writeln!(out, "{snapshot}")
    }
}

fn snapshot_json(snapshot: &Snapshot) -> serde_json::Value {
    serde_json::json!({
        "t": register_json(snapshot.t),
        "z": register_json(snapshot.z),
        "y": register_json(snapshot.y),
        "x": register_json(snapshot.x),
        "entry": snapshot.entry,
    })
}

/// JSON has no infinities or NaN; those are written as their text form
/// (`inf`, `-inf`, `NaN`) so they stay distinguishable.
fn register_json(value: f64) -> serde_json::Value {
    if value.is_finite() {
        serde_json::json!(value)
    } else {
        serde_json::Value::String(value.to_string())
    }
}
