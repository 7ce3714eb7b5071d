use super::*;

#[derive(Clone, Debug, Default)]
pub(crate) struct WelcomeTab {
  catalog: Catalog,
}

impl WelcomeTab {
  pub(crate) const TITLE: &str = "Welcome";

  pub(crate) fn draw(&self, frame: &mut Frame, area: Rect) {
    self.catalog.draw(frame, area);
  }

  fn edit_category(&self) -> Option<Command> {
    let item = self.catalog.selected()?;

    Some(Command::EditItem {
      fields: [
        item.filter_value().to_string(),
        item.description().to_string(),
      ],
      kind: ItemKind::Category,
      path: vec![item.filter_value().to_string()],
    })
  }

  pub(crate) fn help() -> Vec<&'static Binding> {
    WELCOME_KEYMAP.short_help()
  }

  pub(crate) fn init() -> Vec<Command> {
    vec![Command::Fetch {
      kind: TabKind::Welcome,
      title: Self::TITLE.into(),
    }]
  }

  pub(crate) fn list(&self) -> Option<&ListView<Item>> {
    self.catalog.list()
  }

  pub(crate) fn loaded(&self) -> bool {
    self.catalog.loaded()
  }

  fn open_category(item: &Item) -> Command {
    Command::OpenTab {
      kind: TabKind::Category,
      title: item.filter_value().to_string(),
    }
  }

  pub(crate) fn set_size(mut self, width: usize, height: usize) -> Self {
    self.catalog.set_size(width, height);
    self
  }

  pub(crate) fn update(mut self, message: Message) -> (Self, Vec<Command>) {
    if message.is_fetch_for(TabKind::Welcome, Self::TITLE) {
      if let Message::FetchSuccess { items, .. } = message {
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

    let keymap = &WELCOME_KEYMAP;

    let command = if keymap.select_category.matches(key) {
      self.catalog.selected().map(Self::open_category)
    } else if keymap.new_category.matches(key) {
      Some(Command::CreateItem {
        kind: ItemKind::Category,
        path: Vec::new(),
      })
    } else if keymap.edit_category.matches(key) {
      self.edit_category()
    } else if keymap.delete_category.matches(key) {
      self
        .catalog
        .prepare_delete()
        .map(|name| Command::DeleteItem {
          kind: ItemKind::Category,
          name,
        })
    } else if let Some(item) = self.catalog.shortcut(key) {
      Some(Self::open_category(item))
    } else {
      self.catalog.forward(key);
      None
    };

    (self, command.into_iter().collect())
  }
}

#[cfg(test)]
mod tests {
  use {super::*, crate::test_support::*};

  fn categories(names: &[&str]) -> Vec<Item> {
    names
      .iter()
      .map(|name| Item::new(*name).with_description(format!("All about {name}")))
      .collect()
  }

  fn loaded_tab(names: &[&str]) -> WelcomeTab {
    let (tab, _) = WelcomeTab::default()
      .set_size(100, 30)
      .update(fetched(TabKind::Welcome, WelcomeTab::TITLE, categories(names)));
    tab
  }

  #[test]
  fn select_opens_a_category_tab() {
    let (_, commands) = loaded_tab(&["News", "Tech"]).update(key(KeyCode::Char('2')));

    assert_eq!(
      commands,
      vec![Command::OpenTab {
        kind: TabKind::Category,
        title: "Tech".into(),
      }]
    );
  }

  #[test]
  fn crud_keys_target_categories() {
    let (_, commands) = loaded_tab(&[]).update(key(KeyCode::Char('n')));
    assert_eq!(
      commands,
      vec![Command::CreateItem {
        kind: ItemKind::Category,
        path: Vec::new(),
      }]
    );

    let (_, commands) = loaded_tab(&["News"]).update(key(KeyCode::Char('e')));
    assert_eq!(
      commands,
      vec![Command::EditItem {
        fields: ["News".into(), "All about News".into()],
        kind: ItemKind::Category,
        path: vec!["News".into()],
      }]
    );

    let (_, commands) = loaded_tab(&["News"]).update(key(KeyCode::Char('d')));
    assert_eq!(
      commands,
      vec![Command::DeleteItem {
        kind: ItemKind::Category,
        name: "News".into(),
      }]
    );
  }

  #[test]
  fn nothing_happens_before_the_first_fetch() {
    let (tab, commands) = WelcomeTab::default().update(key(KeyCode::Char('n')));

    assert!(commands.is_empty());
    assert!(!tab.loaded());
  }
}
