use {
  anyhow::{Context, ensure},
  arguments::Arguments,
  category::Category,
  chrono::{Local, TimeZone},
  clap::{Parser, Subcommand},
  client::Client,
  command::Command,
  comment_tree::{MAX_DEPTH, TOP_LEVEL_LIMIT},
  item::Item,
  serde::Deserialize,
  std::{
    backtrace::BacktraceStatus,
    io::{self, Write},
    process,
    time::Duration,
  },
  utils::{format_timestamp, truncate},
};

mod arguments;
mod category;
mod client;
mod command;
mod comment_tree;
mod item;
mod item_view;
mod story_list;
#[cfg(test)]
mod test_server;
mod utils;

type Result<T = (), E = anyhow::Error> = std::result::Result<T, E>;

async fn run() -> Result {
  let arguments = Arguments::parse();

  let client = Client::new(Client::API_BASE_URL)?;

  let stdout = io::stdout();

  arguments.command.run(&client, &mut stdout.lock()).await
}

#[tokio::main]
async fn main() {
  if let Err(error) = run().await {
    eprintln!("error: {error}");

    for (i, error) in error.chain().skip(1).enumerate() {
      if i == 0 {
        eprintln!();
        eprintln!("because:");
      }

      eprintln!("- {error}");
    }

    let backtrace = error.backtrace();

    if backtrace.status() == BacktraceStatus::Captured {
      eprintln!("backtrace:");
      eprintln!("{backtrace}");
    }

    process::exit(1);
  }
}
