use super::*;

#[derive(Clone, Debug, Default)]
pub(crate) struct Viewport {
  content: String,
  height: usize,
  lines: Vec<String>,
  offset: usize,
  width: usize,
}

impl Viewport {
  pub(crate) fn content(&self) -> &str {
    &self.content
  }

  pub(crate) fn draw(&self, frame: &mut Frame, area: Rect) {
    let visible = self
      .lines
      .iter()
      .skip(self.offset)
      .take(self.height)
      .map(|line| Line::from(line.clone()))
      .collect::<Vec<_>>();

    frame.render_widget(Paragraph::new(visible), area);
  }

  pub(crate) fn handle_key(&mut self, key: KeyEvent) -> bool {
    let page = self.height().max(1);
    let half = (self.height() / 2).max(1);

    let target = match key.code {
      KeyCode::Down | KeyCode::Char('j') => self.offset.saturating_add(1),
      KeyCode::Up | KeyCode::Char('k') => self.offset.saturating_sub(1),
      KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => {
        self.offset.saturating_add(half)
      }
      KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
        self.offset.saturating_sub(half)
      }
      KeyCode::PageDown | KeyCode::Char(' ') => self.offset.saturating_add(page),
      KeyCode::PageUp => self.offset.saturating_sub(page),
      KeyCode::Home | KeyCode::Char('g') => 0,
      KeyCode::End | KeyCode::Char('G') => self.max_offset(),
      _ => return false,
    };

    self.offset = target.min(self.max_offset());

    true
  }

  pub(crate) fn height(&self) -> usize {
    self.height
  }

  fn max_offset(&self) -> usize {
    self.lines.len().saturating_sub(self.height)
  }

  pub(crate) fn new(width: usize, height: usize) -> Self {
    Self {
      height,
      width,
      ..Self::default()
    }
  }

  pub(crate) fn offset(&self) -> usize {
    self.offset
  }

  fn rewrap(&mut self) {
    self.lines = wrap_paragraphs(&self.content, self.width.max(1));
    self.offset = self.offset.min(self.max_offset());
  }

  pub(crate) fn set_content(&mut self, content: &str) {
    self.content = content.to_string();
    self.offset = 0;
    self.rewrap();
  }

  pub(crate) fn set_size(&mut self, width: usize, height: usize) {
    self.width = width;
    self.height = height;
    self.rewrap();
  }

  pub(crate) fn width(&self) -> usize {
    self.width
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
  }

  fn numbered_lines(count: usize) -> String {
    (0..count)
      .map(|i| format!("line{i}"))
      .collect::<Vec<_>>()
      .join("\n")
  }

  #[test]
  fn scrolling_is_clamped_to_content() {
    let mut viewport = Viewport::new(20, 4);
    viewport.set_content(&numbered_lines(10));

    assert!(viewport.handle_key(key(KeyCode::End)));
    assert_eq!(viewport.offset(), 6);

    assert!(viewport.handle_key(key(KeyCode::Down)));
    assert_eq!(viewport.offset(), 6);

    assert!(viewport.handle_key(key(KeyCode::PageUp)));
    assert_eq!(viewport.offset(), 2);

    assert!(!viewport.handle_key(key(KeyCode::Enter)));
  }

  #[test]
  fn set_content_resets_scroll() {
    let mut viewport = Viewport::new(20, 4);
    viewport.set_content(&numbered_lines(10));
    viewport.handle_key(key(KeyCode::PageDown));
    assert_eq!(viewport.offset(), 4);

    viewport.set_content("short");
    assert_eq!(viewport.offset(), 0);
    assert_eq!(viewport.content(), "short");
  }

  #[test]
  fn set_size_rewraps_and_keeps_scroll_when_possible() {
    let mut viewport = Viewport::new(40, 2);
    viewport.set_content("one two three four five six seven eight");
    assert_eq!(viewport.max_offset(), 0);

    viewport.set_size(9, 2);
    viewport.handle_key(key(KeyCode::Down));
    assert_eq!(viewport.offset(), 1);

    viewport.set_size(5, 2);
    assert_eq!(viewport.offset(), 1);
    assert_eq!(viewport.width(), 5);
    assert_eq!(viewport.height(), 2);
  }
}
