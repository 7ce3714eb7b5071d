use super::*;

const SHORTCUTS: &str = "123456789";

#[derive(Clone, Debug)]
pub(crate) struct ListView<T> {
  height: usize,
  items: Vec<T>,
  numbered: bool,
  offset: usize,
  selected: usize,
  width: usize,
}

impl<T> Default for ListView<T> {
  fn default() -> Self {
    Self {
      height: 0,
      items: Vec::new(),
      numbered: false,
      offset: 0,
      selected: 0,
      width: 0,
    }
  }
}

impl<T> ListView<T> {
  pub(crate) fn height(&self) -> usize {
    self.height
  }

  pub(crate) fn is_empty(&self) -> bool {
    self.items.is_empty()
  }

  pub(crate) fn items(&self) -> &[T] {
    &self.items
  }

  pub(crate) fn len(&self) -> usize {
    self.items.len()
  }

  pub(crate) fn new(items: Vec<T>, width: usize, height: usize) -> Self {
    Self {
      height,
      items,
      numbered: false,
      offset: 0,
      selected: 0,
      width,
    }
  }

  pub(crate) fn numbered(mut self) -> Self {
    self.numbered = true;
    self
  }

  pub(crate) fn offset(&self) -> usize {
    let selected = self.selected_index().unwrap_or(0);

    if self.items.is_empty() {
      0
    } else {
      self.offset.min(selected)
    }
  }

  pub(crate) fn scroll_into_view<F>(&mut self, row_height: F)
  where
    F: Fn(&T) -> usize,
  {
    let Some(selected) = self.selected_index() else {
      self.offset = 0;
      return;
    };

    let mut offset = self.offset.min(selected);

    while offset < selected {
      let used = self.items[offset..=selected]
        .iter()
        .map(&row_height)
        .sum::<usize>();

      if used <= self.height {
        break;
      }

      offset += 1;
    }

    self.offset = offset;
  }

  pub(crate) fn selected_index(&self) -> Option<usize> {
    if self.items.is_empty() {
      None
    } else {
      Some(self.selected.min(self.items.len().saturating_sub(1)))
    }
  }

  pub(crate) fn selected_item(&self) -> Option<&T> {
    self
      .selected_index()
      .and_then(|index| self.items.get(index))
  }

  pub(crate) fn set_items(&mut self, items: Vec<T>) {
    self.items = items;
    self.set_selected(self.selected);
    self.set_offset(self.offset);
  }

  pub(crate) fn set_offset(&mut self, offset: usize) {
    if self.items.is_empty() {
      self.offset = 0;
    } else {
      let max_offset = self.items.len().saturating_sub(1);
      self.offset = offset.min(max_offset);
    }
  }

  pub(crate) fn set_selected(&mut self, index: usize) {
    if self.items.is_empty() {
      self.selected = 0;
    } else {
      self.selected = index.min(self.items.len().saturating_sub(1));
    }
  }

  pub(crate) fn set_size(&mut self, width: usize, height: usize) {
    self.width = width;
    self.height = height;
  }

  pub(crate) fn shortcut(&self, index: usize) -> Option<char> {
    if self.numbered {
      SHORTCUTS.chars().nth(index)
    } else {
      None
    }
  }

  pub(crate) fn shortcut_item(&self, key: &str) -> Option<&T> {
    if !self.numbered {
      return None;
    }

    let mut chars = key.chars();

    let (Some(ch), None) = (chars.next(), chars.next()) else {
      return None;
    };

    SHORTCUTS
      .chars()
      .position(|shortcut| shortcut == ch)
      .and_then(|index| self.items.get(index))
  }

  pub(crate) fn width(&self) -> usize {
    self.width
  }
}

impl ListView<Item> {
  pub(crate) fn draw(&self, frame: &mut Frame, area: Rect, focused: bool) {
    if self.items.is_empty() {
      let empty = Paragraph::new(Line::from(vec![
        Span::raw(BASE_INDENT),
        Span::styled("Nothing here yet.", Style::default().fg(DIM)),
      ]));

      frame.render_widget(empty, area);

      return;
    }

    let rows = self
      .items()
      .iter()
      .enumerate()
      .map(|(index, item)| ListItem::new(self.row_lines(index, item)))
      .collect::<Vec<_>>();

    let highlight = if focused {
      Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
    } else {
      Style::default().add_modifier(Modifier::BOLD)
    };

    let list = List::new(rows).highlight_style(highlight);

    let mut state = ListState::default()
      .with_selected(self.selected_index())
      .with_offset(self.offset());

    frame.render_stateful_widget(list, area, &mut state);
  }

  /// Apply a navigation key. Returns whether the key was used.
  pub(crate) fn handle_key(&mut self, key: KeyEvent) -> bool {
    let current = self.selected_index().unwrap_or(0);
    let page = (self.height() / 3).max(1);

    let target = match key.code {
      KeyCode::Down | KeyCode::Char('j') => current.saturating_add(1),
      KeyCode::Up | KeyCode::Char('k') => current.saturating_sub(1),
      KeyCode::PageDown => current.saturating_add(page),
      KeyCode::PageUp => current.saturating_sub(page),
      KeyCode::Home | KeyCode::Char('g') => 0,
      KeyCode::End | KeyCode::Char('G') => self.items.len().saturating_sub(1),
      _ => return false,
    };

    self.set_selected(target);

    let width = self.width;
    self.scroll_into_view(|item| Self::row_height(item, width));

    true
  }

  fn row_height(item: &Item, width: usize) -> usize {
    2 + Self::wrapped_description(item, width).len()
  }

  fn row_lines(&self, index: usize, item: &Item) -> Vec<Line<'static>> {
    let prefix = self
      .shortcut(index)
      .map_or_else(String::new, |shortcut| format!("{shortcut} "));

    let title_width = self.width.saturating_sub(prefix.chars().count()).max(1);

    let mut lines = vec![Line::from(vec![
      Span::styled(prefix, Style::default().fg(DIM)),
      Span::raw(truncate(item.filter_value(), title_width)),
    ])];

    for line in Self::wrapped_description(item, self.width) {
      lines.push(Line::from(Span::styled(line, Style::default().fg(DIM))));
    }

    lines.push(Line::default());

    lines
  }

  fn wrapped_description(item: &Item, width: usize) -> Vec<String> {
    wrap_text(item.description(), width.max(1))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
  }

  #[test]
  fn selected_index_is_none_when_empty() {
    let view = ListView::<i32>::default();
    assert_eq!(view.selected_index(), None);
    assert!(view.selected_item().is_none());
  }

  #[test]
  fn selection_and_offset_are_clamped_to_bounds() {
    let mut view = ListView::new(vec![1, 2, 3], 10, 10);

    view.set_selected(10);
    assert_eq!(view.selected_index(), Some(2));

    view.set_offset(10);
    assert_eq!(view.offset(), 2);
  }

  #[test]
  fn set_items_keeps_selection_in_bounds() {
    let mut view = ListView::new(vec!["a", "b", "c"], 10, 10);
    view.set_selected(2);

    view.set_items(vec!["x", "y"]);
    assert_eq!(view.selected_item(), Some(&"y"));

    view.set_items(Vec::new());
    assert_eq!(view.selected_index(), None);
  }

  #[test]
  fn scroll_into_view_keeps_selected_row_visible() {
    let mut view = ListView::new((0..10).collect::<Vec<_>>(), 10, 6);

    view.set_selected(5);
    view.scroll_into_view(|_| 3);
    assert_eq!(view.offset(), 4);

    view.set_selected(1);
    view.scroll_into_view(|_| 3);
    assert_eq!(view.offset(), 1);
  }

  #[test]
  fn navigation_keys_move_the_selection() {
    let items = (0..5).map(|i| Item::new(format!("item {i}"))).collect();
    let mut view = ListView::new(items, 20, 30);

    assert!(view.handle_key(key(KeyCode::Down)));
    assert!(view.handle_key(key(KeyCode::Char('j'))));
    assert_eq!(view.selected_index(), Some(2));

    assert!(view.handle_key(key(KeyCode::End)));
    assert_eq!(view.selected_index(), Some(4));

    assert!(view.handle_key(key(KeyCode::Home)));
    assert_eq!(view.selected_index(), Some(0));

    assert!(!view.handle_key(key(KeyCode::Char('x'))));
  }

  #[test]
  fn shortcuts_only_apply_to_numbered_lists() {
    let items = vec![Item::new("first"), Item::new("second")];

    let plain = ListView::new(items.clone(), 20, 10);
    assert_eq!(plain.shortcut_item("2"), None);

    let numbered = ListView::new(items, 20, 10).numbered();
    assert_eq!(numbered.shortcut(1), Some('2'));
    assert_eq!(
      numbered.shortcut_item("2").map(Item::filter_value),
      Some("second")
    );
    assert_eq!(numbered.shortcut_item("3"), None);
    assert_eq!(numbered.shortcut_item("ctrl+2"), None);
  }
}
