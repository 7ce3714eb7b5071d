#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct Item {
  pub(crate) content: Option<String>,
  pub(crate) description: Option<String>,
  pub(crate) title: String,
  pub(crate) url: Option<String>,
}

impl Item {
  pub(crate) fn content(&self) -> &str {
    self.content.as_deref().unwrap_or_default()
  }

  pub(crate) fn description(&self) -> &str {
    self.description.as_deref().unwrap_or_default()
  }

  pub(crate) fn filter_value(&self) -> &str {
    &self.title
  }

  pub(crate) fn new(title: impl Into<String>) -> Self {
    Self {
      title: title.into(),
      ..Self::default()
    }
  }

  #[cfg(test)]
  pub(crate) fn with_content(mut self, content: impl Into<String>) -> Self {
    self.content = Some(content.into());
    self
  }

  pub(crate) fn with_description(
    mut self,
    description: impl Into<String>,
  ) -> Self {
    self.description = Some(description.into());
    self
  }
}
