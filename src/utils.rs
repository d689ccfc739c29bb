use super::*;

pub(crate) fn format_timestamp(seconds: i64) -> Option<String> {
  Local
    .timestamp_opt(seconds, 0)
    .single()
    .map(|time| time.format("%Y-%m-%d %H:%M").to_string())
}

pub(crate) fn truncate(text: &str, max_chars: usize) -> String {
  if text.chars().count() <= max_chars {
    return text.to_string();
  }

  let mut result = text.chars().take(max_chars).collect::<String>();

  result.push_str("...");

  result
}
