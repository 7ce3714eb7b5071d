use super::*;

#[derive(Clone, Debug)]
pub(crate) enum Message {
  FetchSuccess {
    items: Vec<Item>,
    kind: TabKind,
    title: String,
  },
  Key(KeyEvent),
  Tick { id: usize },
}

impl Message {
  pub(crate) fn is_fetch_for(&self, kind: TabKind, title: &str) -> bool {
    matches!(
      self,
      Self::FetchSuccess { kind: k, title: t, .. } if *k == kind && t == title
    )
  }

  pub(crate) fn is_tick_for(&self, id: usize) -> bool {
    matches!(self, Self::Tick { id: tick } if *tick == id)
  }
}
