use super::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Effect {
  Create {
    fields: [String; 2],
    kind: ItemKind,
    path: Vec<String>,
  },
  Delete {
    kind: ItemKind,
    name: String,
  },
  Edit {
    fields: [String; 2],
    kind: ItemKind,
    path: Vec<String>,
  },
  Fetch {
    kind: TabKind,
    title: String,
  },
  OpenUrl {
    url: String,
  },
  Tick { id: usize },
}
