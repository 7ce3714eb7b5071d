use super::*;

#[derive(Clone, Debug)]
pub(crate) struct CategoryTab {
  catalog: Catalog,
  title: String,
}

impl CategoryTab {
  pub(crate) fn draw(&self, frame: &mut Frame, area: Rect) {
    self.catalog.draw(frame, area);
  }

  fn edit_feed(&self) -> Option<Command> {
    let item = self.catalog.selected()?;

    Some(Command::EditItem {
      fields: [
        item.filter_value().to_string(),
        item.description().to_string(),
      ],
      kind: ItemKind::Feed,
      path: vec![self.title.clone(), item.filter_value().to_string()],
    })
  }

  pub(crate) fn help() -> Vec<&'static Binding> {
    CATEGORY_KEYMAP.short_help()
  }

  pub(crate) fn init(&self) -> Vec<Command> {
    vec![Command::Fetch {
      kind: TabKind::Category,
      title: self.title.clone(),
    }]
  }

  pub(crate) fn list(&self) -> Option<&ListView<Item>> {
    self.catalog.list()
  }

  pub(crate) fn loaded(&self) -> bool {
    self.catalog.loaded()
  }

  pub(crate) fn new(title: impl Into<String>) -> Self {
    Self {
      catalog: Catalog::default(),
      title: title.into(),
    }
  }

  fn open_feed(item: &Item) -> Command {
    Command::OpenTab {
      kind: TabKind::Feed,
      title: item.filter_value().to_string(),
    }
  }

  pub(crate) fn set_size(mut self, width: usize, height: usize) -> Self {
    self.catalog.set_size(width, height);
    self
  }

  pub(crate) fn title(&self) -> &str {
    &self.title
  }

  pub(crate) fn update(mut self, message: Message) -> (Self, Vec<Command>) {
    if message.is_fetch_for(TabKind::Category, &self.title) {
      if let Message::FetchSuccess { items, .. } = message {
        debug!(title = %self.title, items = items.len(), "category refreshed");
        self.catalog.replace(items);
      }

      return (self, Vec::new());
    }

    let Message::Key(key) = message else {
      return (self, Vec::new());
    };

    if !self.loaded() {
      return (self, Vec::new());
    }

    let keymap = &CATEGORY_KEYMAP;

    let command = if keymap.select_feed.matches(key) {
      self.catalog.selected().map(Self::open_feed)
    } else if keymap.new_feed.matches(key) {
      Some(Command::CreateItem {
        kind: ItemKind::Feed,
        path: vec![self.title.clone()],
      })
    } else if keymap.edit_feed.matches(key) {
      self.edit_feed()
    } else if keymap.delete_feed.matches(key) {
      self
        .catalog
        .prepare_delete()
        .map(|name| Command::DeleteItem {
          kind: ItemKind::Feed,
          name,
        })
    } else if let Some(item) = self.catalog.shortcut(key) {
      Some(Self::open_feed(item))
    } else {
      self.catalog.forward(key);
      None
    };

    (self, command.into_iter().collect())
  }
}
