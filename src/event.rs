use super::*;

pub(crate) enum Event {
  Changed {
    result: Result<Listing>,
  },
  Fetched {
    kind: TabKind,
    result: Result<Vec<Item>>,
    title: String,
  },
  Tick { id: usize },
}
