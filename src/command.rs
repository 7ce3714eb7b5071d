use super::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Command {
  CreateItem {
    kind: ItemKind,
    path: Vec<String>,
  },
  DeleteItem {
    kind: ItemKind,
    name: String,
  },
  EditItem {
    fields: [String; 2],
    kind: ItemKind,
    path: Vec<String>,
  },
  Fetch {
    kind: TabKind,
    title: String,
  },
  OpenTab {
    kind: TabKind,
    title: String,
  },
  OpenUrl {
    url: String,
  },
  Tick { id: usize },
}
