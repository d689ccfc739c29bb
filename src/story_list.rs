use super::*;

const TITLE_WIDTH: usize = 70;

pub(crate) fn render(stories: &[Item], category: Category) -> String {
  let mut out = String::new();

  out.push_str(&format!(
    "\n{} Stories:\n\n",
    category.label().to_uppercase()
  ));

  for (index, story) in stories.iter().enumerate() {
    let id = story.id.unwrap_or(0);
    let title = truncate(story.title.as_deref().unwrap_or("N/A"), TITLE_WIDTH);
    let score = story.score.unwrap_or(0);
    let by = story.by.as_deref().unwrap_or("unknown");
    let descendants = story.descendants.unwrap_or(0);

    out.push_str(&format!(
      "{:>2}. {id:>8} ({score:>3} pts) {title}\n",
      index + 1
    ));

    out.push_str(&format!("     by {by} | {descendants:>3} comments\n"));
  }

  out.push('\n');

  out
}
