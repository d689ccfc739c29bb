use super::*;

#[derive(Clone)]
pub(crate) struct Client {
  base_url: String,
  client: reqwest::Client,
}

impl Client {
  pub(crate) const API_BASE_URL: &str =
    "https://hacker-news.firebaseio.com/v0";

  const TIMEOUT: Duration = Duration::from_secs(10);

  pub(crate) async fn fetch_item(&self, id: u64) -> Option<Item> {
    self.try_fetch_item(id).await.ok().flatten()
  }

  pub(crate) async fn fetch_stories(
    &self,
    category: Category,
    limit: usize,
  ) -> Vec<Item> {
    if limit == 0 {
      return Vec::new();
    }

    let Ok(ids) = self.fetch_story_ids(category).await else {
      return Vec::new();
    };

    let mut stories = Vec::new();

    for id in ids.into_iter().take(limit) {
      if let Some(item) = self.fetch_item(id).await
        && item.is_story()
      {
        stories.push(item);
      }
    }

    stories
  }

  async fn fetch_story_ids(&self, category: Category) -> Result<Vec<u64>> {
    Ok(
      self
        .client
        .get(format!("{}/{}.json", self.base_url, category.endpoint()))
        .send()
        .await?
        .error_for_status()?
        .json::<Vec<u64>>()
        .await?,
    )
  }

  pub(crate) fn new(base_url: impl Into<String>) -> Result<Self> {
    Ok(Self {
      base_url: base_url.into(),
      client: reqwest::Client::builder().timeout(Self::TIMEOUT).build()?,
    })
  }

  pub(crate) async fn try_fetch_item(&self, id: u64) -> Result<Option<Item>> {
    Ok(
      self
        .client
        .get(format!("{}/item/{id}.json", self.base_url))
        .send()
        .await?
        .error_for_status()?
        .json::<Option<Item>>()
        .await?,
    )
  }
}
