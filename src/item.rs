use super::*;

#[derive(Debug, Default, Deserialize)]
pub(crate) struct Item {
  pub(crate) by: Option<String>,
  pub(crate) descendants: Option<u64>,
  pub(crate) id: Option<u64>,
  pub(crate) kids: Option<Vec<u64>>,
  pub(crate) score: Option<u64>,
  pub(crate) text: Option<String>,
  pub(crate) time: Option<i64>,
  pub(crate) title: Option<String>,
  pub(crate) r#type: Option<String>,
  pub(crate) url: Option<String>,
}

impl Item {
  pub(crate) fn is_story(&self) -> bool {
    self.r#type.as_deref() == Some("story")
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn null_body_deserializes_to_absent_item() {
    let item = serde_json::from_str::<Option<Item>>("null").unwrap();

    assert!(item.is_none());
  }

  #[test]
  fn unknown_fields_are_ignored() {
    let item = serde_json::from_str::<Item>(
      r#"{ "id": 1, "type": "story", "parts": [2, 3] }"#,
    )
    .unwrap();

    assert_eq!(item.id, Some(1));
    assert!(item.is_story());
  }

  #[test]
  fn only_story_type_counts_as_story() {
    let story = Item {
      r#type: Some("story".to_string()),
      ..Item::default()
    };

    let comment = Item {
      r#type: Some("comment".to_string()),
      ..Item::default()
    };

    assert!(story.is_story());
    assert!(!comment.is_story());
    assert!(!Item::default().is_story());
  }
}
