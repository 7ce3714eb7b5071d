use super::*;

const PANE_PADDING: usize = 4;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) enum Pane {
  #[default]
  List,
  Preview,
}

#[derive(Clone, Debug)]
pub(crate) struct FeedTab {
  height: usize,
  id: usize,
  panes: Option<Panes>,
  pending: Option<Vec<Item>>,
  preview_open: bool,
  selected: Pane,
  spinner: Spinner,
  title: String,
  width: usize,
}

#[derive(Clone, Debug)]
struct Panes {
  list: ListView<Item>,
  preview: Viewport,
}

impl FeedTab {
  fn accept(mut self, items: Vec<Item>) -> Self {
    if self.loaded() || self.pending.is_some() {
      debug!(title = %self.title, "ignoring repeated feed fetch");
      return self;
    }

    self.pending = Some(items);

    self.load_pending()
  }

  pub(crate) fn draw(&self, frame: &mut Frame, area: Rect) {
    let (Some(list), Some(preview)) = (self.list(), self.preview()) else {
      draw_loading(
        frame,
        area,
        &format!("{} Loading feed {}", self.spinner.view(), self.title),
      );
      return;
    };

    let list_width = to_u16(list.width().saturating_add(2));

    let columns = Layout::default()
      .direction(Direction::Horizontal)
      .constraints([Constraint::Length(list_width), Constraint::Min(0)])
      .split(area);

    let list_focused =
      !self.is_preview_open() || self.selected_pane() == Pane::List;

    let list_block = pane_block(list_focused);
    let list_area = list_block.inner(columns[0]);
    frame.render_widget(list_block, columns[0]);
    list.draw(frame, list_area, list_focused);

    if !self.is_preview_open() {
      return;
    }

    let preview_block = pane_block(!list_focused);
    let preview_area = preview_block.inner(columns[1]);
    frame.render_widget(preview_block, columns[1]);
    preview.draw(frame, preview_area);
  }

  fn forward(mut self, key: KeyEvent) -> Self {
    if let Some(panes) = self.panes.as_mut() {
      match self.selected {
        Pane::List => {
          panes.list.handle_key(key);
        }
        Pane::Preview => {
          panes.preview.handle_key(key);
        }
      }
    }

    self
  }

  pub(crate) fn help() -> Vec<&'static Binding> {
    FEED_KEYMAP.short_help()
  }

  pub(crate) fn init(&self) -> Vec<Command> {
    vec![
      Command::Fetch {
        kind: TabKind::Feed,
        title: self.title.clone(),
      },
      self.tick(),
    ]
  }

  pub(crate) fn is_preview_open(&self) -> bool {
    self.preview_open
  }

  fn layout(width: usize, height: usize) -> (usize, usize, usize) {
    let list_width = width / 4;
    let preview_width = width.saturating_sub(list_width + PANE_PADDING);
    let pane_height = height.saturating_sub(CHROME_HEIGHT);

    (list_width, preview_width, pane_height)
  }

  pub(crate) fn list(&self) -> Option<&ListView<Item>> {
    self.panes.as_ref().map(|panes| &panes.list)
  }

  fn load_pending(mut self) -> Self {
    if self.loaded() || self.width == 0 || self.height == 0 {
      return self;
    }

    let Some(items) = self.pending.take() else {
      return self;
    };

    let (list_width, preview_width, pane_height) =
      Self::layout(self.width, self.height);

    debug!(
      title = %self.title,
      items = items.len(),
      list_width,
      preview_width,
      "feed tab loaded"
    );

    self.panes = Some(Panes {
      list: ListView::new(items, list_width, pane_height),
      preview: Viewport::new(preview_width, pane_height),
    });

    self
  }

  pub(crate) fn loaded(&self) -> bool {
    self.panes.is_some()
  }

  pub(crate) fn new(id: usize, title: impl Into<String>) -> Self {
    Self {
      height: 0,
      id,
      panes: None,
      pending: None,
      preview_open: false,
      selected: Pane::List,
      spinner: Spinner::default(),
      title: title.into(),
      width: 0,
    }
  }

  fn open_in_browser(&self) -> Vec<Command> {
    self
      .list()
      .and_then(ListView::selected_item)
      .and_then(|item| item.url.clone())
      .filter(|url| !url.is_empty())
      .map(|url| Command::OpenUrl { url })
      .into_iter()
      .collect()
  }

  fn open_preview(mut self) -> Self {
    let Some(panes) = self.panes.as_mut() else {
      return self;
    };

    let Some(item) = panes.list.selected_item() else {
      return self;
    };

    let content = item.content().to_string();

    panes.preview.set_content(&content);

    self.preview_open = true;

    self
  }

  pub(crate) fn preview(&self) -> Option<&Viewport> {
    self.panes.as_ref().map(|panes| &panes.preview)
  }

  pub(crate) fn selected_pane(&self) -> Pane {
    self.selected
  }

  pub(crate) fn set_size(mut self, width: usize, height: usize) -> Self {
    self.width = width;
    self.height = height;

    let (list_width, preview_width, pane_height) =
      Self::layout(width, height);

    if let Some(panes) = self.panes.as_mut() {
      panes.list.set_size(list_width, pane_height);
      panes.preview.set_size(preview_width, pane_height);
    }

    self.load_pending()
  }

  fn switch_pane(mut self) -> Self {
    if !self.preview_open {
      return self;
    }

    self.selected = match self.selected {
      Pane::List => Pane::Preview,
      Pane::Preview => Pane::List,
    };

    self
  }

  fn tick(&self) -> Command {
    Command::Tick { id: self.id }
  }

  pub(crate) fn title(&self) -> &str {
    &self.title
  }

  pub(crate) fn update(mut self, message: Message) -> (Self, Vec<Command>) {
    if message.is_fetch_for(TabKind::Feed, &self.title) {
      if let Message::FetchSuccess { items, .. } = message {
        return (self.accept(items), Vec::new());
      }

      return (self, Vec::new());
    }

    if message.is_tick_for(self.id) {
      if self.loaded() {
        return (self, Vec::new());
      }

      self.spinner = self.spinner.tick();

      let tick = self.tick();

      return (self, vec![tick]);
    }

    let Message::Key(key) = message else {
      return (self, Vec::new());
    };

    if !self.loaded() {
      return (self, Vec::new());
    }

    if FEED_KEYMAP.open_article.matches(key) {
      return (self.open_preview(), Vec::new());
    }

    if FEED_KEYMAP.switch_pane.matches(key) {
      return (self.switch_pane(), Vec::new());
    }

    if FEED_KEYMAP.open_in_browser.matches(key) {
      let commands = self.open_in_browser();
      return (self, commands);
    }

    (self.forward(key), Vec::new())
  }
}
