use super::*;

#[derive(Debug, Deserialize)]
pub(crate) struct FeedDocument {
  #[serde(default)]
  pub(crate) items: Vec<FeedEntry>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct FeedEntry {
  content_html: Option<String>,
  content_text: Option<String>,
  date_published: Option<String>,
  #[serde(default, deserialize_with = "deserialize_optional_string")]
  id: Option<String>,
  summary: Option<String>,
  title: Option<String>,
  url: Option<String>,
}

impl FeedEntry {
  const DESCRIPTION_LENGTH: usize = 160;

  const TITLE_LENGTH: usize = 80;

  fn content(&self) -> Option<String> {
    if let Some(text) = self.content_text.as_deref().map(str::trim)
      && !text.is_empty()
    {
      return Some(text.to_string());
    }

    let html = self.content_html.as_deref()?;

    html2text::from_read(html.as_bytes(), usize::MAX)
      .ok()
      .map(|text| text.trim().to_string())
      .filter(|text| !text.is_empty())
      .or_else(|| Some(plain_text(html)))
  }

  fn description(&self) -> Option<String> {
    let summary = self
      .summary
      .as_deref()
      .map(plain_text)
      .filter(|summary| !summary.is_empty())
      .map(|summary| truncate(&summary, Self::DESCRIPTION_LENGTH));

    match (self.date_published.as_deref(), summary) {
      (Some(date), Some(summary)) => Some(format!("{} · {summary}", Self::day(date))),
      (Some(date), None) => Some(Self::day(date).to_string()),
      (None, summary) => summary,
    }
  }

  fn day(timestamp: &str) -> &str {
    timestamp.split('T').next().unwrap_or(timestamp)
  }

  fn title(&self) -> String {
    self
      .title
      .as_deref()
      .map(plain_text)
      .filter(|title| !title.is_empty())
      .or_else(|| {
        self
          .summary
          .as_deref()
          .map(plain_text)
          .filter(|summary| !summary.is_empty())
          .map(|summary| truncate(&summary, Self::TITLE_LENGTH))
      })
      .or_else(|| self.url.clone())
      .or_else(|| self.id.clone())
      .unwrap_or_else(|| "Untitled".into())
  }
}

impl From<FeedEntry> for Item {
  fn from(entry: FeedEntry) -> Self {
    Self {
      content: entry.content(),
      description: entry.description(),
      title: entry.title(),
      url: entry.url.filter(|url| !url.is_empty()),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn parse(json: &str) -> Vec<Item> {
    serde_json::from_str::<FeedDocument>(json)
      .unwrap()
      .items
      .into_iter()
      .map(Item::from)
      .collect()
  }

  #[test]
  fn html_content_is_rendered_as_text() {
    let items = parse(
      r#"{
        "version": "https://jsonfeed.org/version/1.1",
        "title": "Blog",
        "items": [{
          "id": 7,
          "title": "Hello &amp; welcome",
          "url": "https://blog.example/hello",
          "summary": "<p>First <b>post</b></p>",
          "content_html": "<p>Some <em>words</em> here.</p>",
          "date_published": "2024-05-01T10:00:00Z"
        }]
      }"#,
    );

    assert_eq!(items.len(), 1);

    let item = &items[0];

    assert_eq!(item.title, "Hello & welcome");
    assert_eq!(item.description(), "2024-05-01 · First post");
    assert_eq!(item.url.as_deref(), Some("https://blog.example/hello"));
    assert!(item.content().contains("words"));
    assert!(!item.content().contains("<em>"));
  }

  #[test]
  fn plain_text_content_wins_over_html() {
    let items = parse(
      r#"{"items": [{"id": "a", "content_text": "just text", "content_html": "<p>markup</p>"}]}"#,
    );

    assert_eq!(items[0].content(), "just text");
  }

  #[test]
  fn missing_title_falls_back() {
    let items = parse(
      r#"{"items": [
        {"id": "1", "summary": "A short note"},
        {"id": "2", "url": "https://x.example/2"},
        {"id": "3"},
        {}
      ]}"#,
    );

    let titles = items.iter().map(Item::filter_value).collect::<Vec<_>>();

    assert_eq!(titles, ["A short note", "https://x.example/2", "3", "Untitled"]);
    assert_eq!(items[3].content, None);
    assert_eq!(items[3].description, None);
  }

  #[test]
  fn document_without_items_is_empty() {
    assert!(parse(r#"{"version": "https://jsonfeed.org/version/1.1"}"#).is_empty());
  }
}
