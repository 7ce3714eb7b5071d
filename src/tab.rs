use super::*;

#[derive(Clone, Debug)]
pub(crate) enum Tab {
  Category(CategoryTab),
  Feed(FeedTab),
  Welcome(WelcomeTab),
}

impl Tab {
  pub(crate) fn draw(&self, frame: &mut Frame, area: Rect) {
    match self {
      Self::Category(tab) => tab.draw(frame, area),
      Self::Feed(tab) => tab.draw(frame, area),
      Self::Welcome(tab) => tab.draw(frame, area),
    }
  }

  pub(crate) fn help(&self) -> Vec<&'static Binding> {
    match self {
      Self::Category(_) => CategoryTab::help(),
      Self::Feed(_) => FeedTab::help(),
      Self::Welcome(_) => WelcomeTab::help(),
    }
  }

  pub(crate) fn init(&self) -> Vec<Command> {
    match self {
      Self::Category(tab) => tab.init(),
      Self::Feed(tab) => tab.init(),
      Self::Welcome(_) => WelcomeTab::init(),
    }
  }

  pub(crate) fn kind(&self) -> TabKind {
    match self {
      Self::Category(_) => TabKind::Category,
      Self::Feed(_) => TabKind::Feed,
      Self::Welcome(_) => TabKind::Welcome,
    }
  }

  pub(crate) fn loaded(&self) -> bool {
    match self {
      Self::Category(tab) => tab.loaded(),
      Self::Feed(tab) => tab.loaded(),
      Self::Welcome(tab) => tab.loaded(),
    }
  }

  /// Build an unloaded tab. `id` tells this instance's spinner ticks apart
  /// from those of a closed tab with the same title. Welcome tabs have a
  /// fixed title, so `title` is ignored for them.
  pub(crate) fn new(id: usize, kind: TabKind, title: &str) -> Self {
    match kind {
      TabKind::Category => Self::Category(CategoryTab::new(title)),
      TabKind::Feed => Self::Feed(FeedTab::new(id, title)),
      TabKind::Welcome => Self::Welcome(WelcomeTab::default()),
    }
  }

  pub(crate) fn set_size(self, width: usize, height: usize) -> Self {
    match self {
      Self::Category(tab) => Self::Category(tab.set_size(width, height)),
      Self::Feed(tab) => Self::Feed(tab.set_size(width, height)),
      Self::Welcome(tab) => Self::Welcome(tab.set_size(width, height)),
    }
  }

  pub(crate) fn title(&self) -> &str {
    match self {
      Self::Category(tab) => tab.title(),
      Self::Feed(tab) => tab.title(),
      Self::Welcome(_) => WelcomeTab::TITLE,
    }
  }

  pub(crate) fn update(self, message: Message) -> (Self, Vec<Command>) {
    match self {
      Self::Category(tab) => {
        let (tab, commands) = tab.update(message);
        (Self::Category(tab), commands)
      }
      Self::Feed(tab) => {
        let (tab, commands) = tab.update(message);
        (Self::Feed(tab), commands)
      }
      Self::Welcome(tab) => {
        let (tab, commands) = tab.update(message);
        (Self::Welcome(tab), commands)
      }
    }
  }
}
