use super::*;

#[derive(Debug, Subcommand)]
pub(crate) enum Command {
  /// Show new stories
  New {
    /// Number of stories (default: 10)
    #[arg(default_value_t = 10, long, short)]
    limit: i64,
  },
  /// Show story details and comments
  Show {
    /// Hacker News item ID
    id: u64,
  },
  /// Show top stories
  Top {
    /// Number of stories (default: 10)
    #[arg(default_value_t = 10, long, short)]
    limit: i64,
  },
}

impl Command {
  pub(crate) async fn run(
    self,
    client: &Client,
    out: &mut impl Write,
  ) -> Result {
    match self {
      Self::New { limit } => {
        list_stories(client, Category::New, limit, out).await
      }
      Self::Show { id } => show_item(client, id, out).await,
      Self::Top { limit } => {
        list_stories(client, Category::Top, limit, out).await
      }
    }
  }
}

async fn list_stories(
  client: &Client,
  category: Category,
  limit: i64,
  out: &mut impl Write,
) -> Result {
  ensure!(limit >= 1, "limit must be positive");

  let stories = client.fetch_stories(category, usize::try_from(limit)?).await;

  write!(out, "{}", story_list::render(&stories, category))?;

  Ok(())
}

async fn show_item(
  client: &Client,
  id: u64,
  out: &mut impl Write,
) -> Result {
  let item = client
    .try_fetch_item(id)
    .await
    .with_context(|| format!("failed to fetch item {id}"))?
    .with_context(|| format!("item {id} not found or deleted"))?;

  write!(out, "{}", item_view::render(&item, 0, MAX_DEPTH))?;

  let kids = item.kids.as_deref().unwrap_or_default();

  if !kids.is_empty() {
    writeln!(out, "\n--- Comments ---\n")?;

    for &kid in kids.iter().take(TOP_LEVEL_LIMIT) {
      comment_tree::walk(client, kid, 1, MAX_DEPTH, out).await?;
    }
  }

  Ok(())
}
