use super::*;

#[derive(Debug)]
pub(crate) struct Listing {
  pub(crate) items: Vec<Item>,
  pub(crate) kind: TabKind,
  pub(crate) title: String,
}
