use super::*;

pub(crate) const CHILD_LIMIT: usize = 20;

pub(crate) const MAX_DEPTH: usize = 6;

pub(crate) const TOP_LEVEL_LIMIT: usize = 30;

pub(crate) async fn walk(
  client: &Client,
  root: u64,
  depth: usize,
  max_depth: usize,
  out: &mut impl Write,
) -> Result {
  let mut pending = vec![(root, depth)];

  while let Some((id, depth)) = pending.pop() {
    if depth > max_depth {
      continue;
    }

    let Some(comment) = client.fetch_item(id).await else {
      continue;
    };

    write!(out, "{}", item_view::render(&comment, depth, max_depth))?;

    if depth < max_depth
      && let Some(kids) = comment.kids.as_deref()
    {
      // Children are pushed in reverse so they pop in listed order.
      for &kid in kids.iter().take(CHILD_LIMIT).rev() {
        pending.push((kid, depth + 1));
      }
    }
  }

  Ok(())
}
