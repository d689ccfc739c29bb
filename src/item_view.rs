use super::*;

const INDENT: &str = "  ";

pub(crate) fn render(item: &Item, depth: usize, max_depth: usize) -> String {
  if depth > max_depth {
    return String::new();
  }

  let indent = INDENT.repeat(depth);

  let mut out = String::new();

  match item.r#type.as_deref() {
    Some("comment") => {
      let author = item.by.as_deref().unwrap_or("N/A");

      out.push_str(&format!("{indent}{author}:\n"));

      let text = html_escape::decode_html_entities(
        item.text.as_deref().unwrap_or_default(),
      );

      for line in text.split('\n') {
        out.push_str(&format!("{indent}{INDENT}{line}\n"));
      }
    }
    Some("story") => {
      let title = item.title.as_deref().unwrap_or("N/A");

      out.push_str(&format!("{indent}Title: {title}\n"));

      if let Some(url) = item.url.as_deref() {
        out.push_str(&format!("{indent}URL: {url}\n"));
      }

      let author = item.by.as_deref().unwrap_or("N/A");

      out.push_str(&format!("{indent}Author: {author}\n"));

      out.push_str(&format!("{indent}Score: {}\n", item.score.unwrap_or(0)));

      let time = item
        .time
        .and_then(format_timestamp)
        .unwrap_or_else(|| "N/A".to_string());

      out.push_str(&format!("{indent}Time: {time}\n"));

      out.push_str(&format!(
        "{indent}Comments: {}\n",
        item.descendants.unwrap_or(0)
      ));
    }
    _ => return String::new(),
  }

  out.push('\n');

  out
}
