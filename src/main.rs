//! Line-based REPL over the task store.
//!
//! Demonstrates the binding-layer contract: every line of input becomes a
//! dispatch, and a subscribed observer re-renders the visible list after
//! every state replacement.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::{Parser, ValueEnum};

use taskstore::commands::{Command, USAGE};
use taskstore::id::{ClockIds, IdSource, SequentialIds};
use taskstore::logging;
use taskstore::tasks::{Filter, TaskActions, TaskId, TaskListState, TaskStore};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum IdStrategy {
    /// Counter-backed ids: 1, 2, 3, ...
    Seq,
    /// Millisecond-clock ids, bumped on same-millisecond calls.
    Clock,
}

#[derive(Debug, Parser)]
#[command(name = "taskstore", about = "Task list REPL backed by a predictable state store")]
struct Args {
    /// Id generation strategy for new tasks.
    #[arg(long, value_enum, default_value = "seq")]
    ids: IdStrategy,

    /// Initial filter (all, pending or completed).
    #[arg(long, default_value = "all")]
    filter: Filter,
}

/// Strategy selected on the command line, behind one `IdSource`.
enum Ids {
    Seq(SequentialIds),
    Clock(ClockIds),
}

impl IdSource for Ids {
    fn next_id(&mut self) -> TaskId {
        match self {
            Ids::Seq(ids) => ids.next_id(),
            Ids::Clock(ids) => ids.next_id(),
        }
    }
}

fn main() -> Result<()> {
    logging::init_tracing();
    let args = Args::parse();

    let store = TaskStore::with_state(TaskListState {
        tasks: Vec::new(),
        filter: args.filter,
    });
    let mut actions = TaskActions::new(match args.ids {
        IdStrategy::Seq => Ids::Seq(SequentialIds::default()),
        IdStrategy::Clock => Ids::Clock(ClockIds::default()),
    });

    let render_handle = store.clone();
    let _redraw = store.subscribe(move || render(&render_handle.get_state()));

    println!("taskstore - type 'help' for commands");
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("> ");
        io::stdout().flush()?;
        let Some(line) = lines.next() else {
            break;
        };

        match Command::parse(&line?) {
            Ok(None) => {}
            Ok(Some(Command::Quit)) => break,
            Ok(Some(Command::Help)) => println!("{USAGE}"),
            Ok(Some(Command::List)) => render(&store.get_state()),
            Ok(Some(Command::Stats)) => {
                let stats = store.select(TaskListState::stats);
                println!(
                    "{} total, {} pending, {} completed",
                    stats.total, stats.pending, stats.completed
                );
            }
            Ok(Some(Command::Dump)) => {
                println!("{}", serde_json::to_string_pretty(&store.get_state())?);
            }
            Ok(Some(Command::Add { text })) => store.dispatch(actions.add(text)),
            Ok(Some(Command::Toggle { id })) => store.dispatch(actions.toggle(id)),
            Ok(Some(Command::Delete { id })) => store.dispatch(actions.delete(id)),
            Ok(Some(Command::Edit { id, text })) => store.dispatch(actions.edit(id, text)),
            Ok(Some(Command::SetFilter { filter })) => store.dispatch(actions.set_filter(filter)),
            Err(err) => println!("error: {err}"),
        }
    }

    Ok(())
}

/// Print the tasks visible under the active filter.
fn render(state: &TaskListState) {
    println!("-- {} --", state.filter);
    let mut any = false;
    for task in state.visible() {
        let mark = if task.completed { "x" } else { " " };
        println!("[{mark}] {:>4}  {}", task.id, task.text);
        any = true;
    }
    if !any {
        println!("(no tasks)");
    }
}
