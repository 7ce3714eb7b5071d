use super::*;

#[derive(Clone, Debug, Default)]
pub(crate) struct Catalog {
  height: usize,
  list: Option<ListView<Item>>,
  width: usize,
}

impl Catalog {
  pub(crate) fn draw(&self, frame: &mut Frame, area: Rect) {
    let Some(list) = &self.list else {
      draw_loading(frame, area, "Loading...");
      return;
    };

    let block = pane_block(true);
    let inner = block.inner(area);

    frame.render_widget(block, area);

    list.draw(frame, inner, true);
  }

  pub(crate) fn forward(&mut self, key: KeyEvent) {
    if let Some(list) = self.list.as_mut() {
      list.handle_key(key);
    }
  }

  fn inner_size(width: usize, height: usize) -> (usize, usize) {
    (width.saturating_sub(2), height.saturating_sub(CHROME_HEIGHT))
  }

  pub(crate) fn list(&self) -> Option<&ListView<Item>> {
    self.list.as_ref()
  }

  pub(crate) fn loaded(&self) -> bool {
    self.list.is_some()
  }

  /// Name of the selected entry, with the cursor already moved to where it
  /// stays valid once that entry is gone.
  pub(crate) fn prepare_delete(&mut self) -> Option<String> {
    let list = self.list.as_mut()?;

    let name = list.selected_item()?.filter_value().to_string();

    let count = list.len();

    if count == 1 {
      list.set_selected(0);
    } else {
      let index = list.selected_index().unwrap_or(0);
      list.set_selected(index % (count - 1));
    }

    Some(name)
  }

  pub(crate) fn replace(&mut self, items: Vec<Item>) {
    if let Some(list) = self.list.as_mut() {
      list.set_items(items);
      return;
    }

    let (width, height) = Self::inner_size(self.width, self.height);

    self.list = Some(ListView::new(items, width, height).numbered());
  }

  pub(crate) fn selected(&self) -> Option<&Item> {
    self.list.as_ref().and_then(ListView::selected_item)
  }

  pub(crate) fn set_size(&mut self, width: usize, height: usize) {
    self.width = width;
    self.height = height;

    let (width, height) = Self::inner_size(width, height);

    if let Some(list) = self.list.as_mut() {
      list.set_size(width, height);
    }
  }

  pub(crate) fn shortcut(&self, key: KeyEvent) -> Option<&Item> {
    self
      .list
      .as_ref()
      .and_then(|list| list.shortcut_item(&key_name(key)))
  }
}

#[cfg(test)]
mod tests {
  use {super::*, crate::test_support::*};

  fn catalog(names: &[&str]) -> Catalog {
    let mut catalog = Catalog::default();
    catalog.set_size(80, 24);
    catalog.replace(feeds(names));
    catalog
  }

  #[test]
  fn replace_builds_the_list_once_and_then_swaps_items() {
    let mut catalog = Catalog::default();
    assert!(!catalog.loaded());

    catalog.replace(feeds(&["a"]));
    assert!(catalog.loaded());

    catalog.replace(feeds(&["b", "c"]));
    assert_eq!(catalog.list().unwrap().len(), 2);
    assert_eq!(catalog.selected().unwrap().filter_value(), "b");
  }

  #[test]
  fn list_is_sized_inside_its_border() {
    let catalog = catalog(&["a"]);
    let list = catalog.list().unwrap();

    assert_eq!(list.width(), 78);
    assert_eq!(list.height(), 19);
  }

  #[test]
  fn prepare_delete_wraps_the_cursor() {
    let mut catalog = catalog(&["a", "b", "c"]);
    catalog.forward(KeyEvent::new(KeyCode::End, KeyModifiers::NONE));

    assert_eq!(catalog.prepare_delete().as_deref(), Some("c"));
    assert_eq!(catalog.list().unwrap().selected_index(), Some(0));
  }

  #[test]
  fn prepare_delete_on_empty_list_is_none() {
    let mut catalog = catalog(&[]);
    assert_eq!(catalog.prepare_delete(), None);

    let mut unloaded = Catalog::default();
    assert_eq!(unloaded.prepare_delete(), None);
  }
}
