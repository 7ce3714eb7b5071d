use super::*;

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum FormStep {
  Cancelled,
  Editing,
  Submitted(Effect),
}
