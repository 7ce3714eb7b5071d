use {super::*, ratatui::backend::TestBackend};

pub(crate) fn articles(count: usize) -> Vec<Item> {
  (0..count)
    .map(|i| {
      Item::new(format!("Article {i}"))
        .with_description(format!("Summary {i}"))
        .with_content(format!("Body of article {i}"))
    })
    .collect()
}

pub(crate) fn ctrl(ch: char) -> Message {
  Message::Key(KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL))
}

pub(crate) fn feeds(names: &[&str]) -> Vec<Item> {
  names
    .iter()
    .map(|name| {
      Item::new(*name).with_description(format!("https://{name}.example/feed.json"))
    })
    .collect()
}

pub(crate) fn fetched(kind: TabKind, title: &str, items: Vec<Item>) -> Message {
  Message::FetchSuccess {
    items,
    kind,
    title: title.to_string(),
  }
}

pub(crate) fn key(code: KeyCode) -> Message {
  Message::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

pub(crate) fn render<F>(width: u16, height: u16, draw: F) -> Vec<String>
where
  F: FnOnce(&mut Frame),
{
  let mut terminal =
    Terminal::new(TestBackend::new(width, height)).expect("test terminal");

  terminal.draw(draw).expect("draw succeeds");

  terminal
    .backend()
    .buffer()
    .content
    .chunks(usize::from(width))
    .map(|row| {
      row
        .iter()
        .map(|cell| cell.symbol())
        .collect::<String>()
        .trim_end()
        .to_string()
    })
    .collect()
}

pub(crate) fn tick(id: usize) -> Message {
  Message::Tick { id }
}
