#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum TabKind {
  Category,
  Feed,
  Welcome,
}

impl TabKind {
  pub(crate) fn icon(self) -> &'static str {
    match self {
      Self::Category => "▤",
      Self::Feed => "◉",
      Self::Welcome => "⌂",
    }
  }
}
