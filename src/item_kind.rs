#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ItemKind {
  Category,
  Feed,
}

impl ItemKind {
  pub(crate) fn field_labels(self) -> [&'static str; 2] {
    match self {
      Self::Category => ["Name", "Description"],
      Self::Feed => ["Name", "URL"],
    }
  }

  pub(crate) fn label(self) -> &'static str {
    match self {
      Self::Category => "category",
      Self::Feed => "feed",
    }
  }
}
