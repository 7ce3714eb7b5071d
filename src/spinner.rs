use super::*;

const FRAMES: &[&str] = &["∙∙∙", "●∙∙", "∙●∙", "∙∙●"];

#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct Spinner {
  frame: usize,
}

impl Spinner {
  pub(crate) const INTERVAL: Duration = Duration::from_millis(143);

  pub(crate) fn tick(self) -> Self {
    Self {
      frame: (self.frame + 1) % FRAMES.len(),
    }
  }

  pub(crate) fn view(self) -> &'static str {
    FRAMES[self.frame % FRAMES.len()]
  }
}
