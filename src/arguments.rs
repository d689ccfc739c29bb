use super::*;

#[derive(Debug, Parser)]
#[command(
  about = "Fetch top/new Hacker News stories, show item details and comments",
  version
)]
pub(crate) struct Arguments {
  #[command(subcommand)]
  pub(crate) command: Command,
}
