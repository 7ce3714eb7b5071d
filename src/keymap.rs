use super::*;

const CLOSE_TAB: Binding = Binding {
  description: "Close tab",
  keys: &["c", "ctrl+w"],
  label: "c/ctrl+w",
};

const CYCLE_TABS: Binding = Binding {
  description: "Cycle tabs",
  keys: &["tab"],
  label: "tab",
};

pub(crate) static APP_KEYMAP: AppKeymap = AppKeymap {
  close_tab: CLOSE_TAB,
  cycle_tabs: CYCLE_TABS,
  help: Binding {
    description: "Help",
    keys: &["?"],
    label: "?",
  },
  quit: Binding {
    description: "Quit",
    keys: &["q", "ctrl+c"],
    label: "q/ctrl+c",
  },
};

pub(crate) static CATEGORY_KEYMAP: CategoryKeymap = CategoryKeymap {
  close_tab: CLOSE_TAB,
  cycle_tabs: CYCLE_TABS,
  delete_feed: Binding {
    description: "Delete",
    keys: &["d", "ctrl+d"],
    label: "d/ctrl+d",
  },
  edit_feed: Binding {
    description: "Edit",
    keys: &["e", "ctrl+e"],
    label: "e/ctrl+e",
  },
  new_feed: Binding {
    description: "New",
    keys: &["n", "ctrl+n"],
    label: "n/ctrl+n",
  },
  select_feed: Binding {
    description: "Open",
    keys: &["enter"],
    label: "enter",
  },
};

pub(crate) static FEED_KEYMAP: FeedKeymap = FeedKeymap {
  close_tab: CLOSE_TAB,
  cycle_tabs: CYCLE_TABS,
  open_article: Binding {
    description: "Read",
    keys: &["enter"],
    label: "enter",
  },
  open_in_browser: Binding {
    description: "Open in browser",
    keys: &["o"],
    label: "o",
  },
  switch_pane: Binding {
    description: "Switch pane",
    keys: &["left", "right"],
    label: "←/→",
  },
};

pub(crate) static WELCOME_KEYMAP: WelcomeKeymap = WelcomeKeymap {
  cycle_tabs: CYCLE_TABS,
  delete_category: Binding {
    description: "Delete",
    keys: &["d", "ctrl+d"],
    label: "d/ctrl+d",
  },
  edit_category: Binding {
    description: "Edit",
    keys: &["e", "ctrl+e"],
    label: "e/ctrl+e",
  },
  new_category: Binding {
    description: "New",
    keys: &["n", "ctrl+n"],
    label: "n/ctrl+n",
  },
  select_category: Binding {
    description: "Open",
    keys: &["enter"],
    label: "enter",
  },
};

pub(crate) struct AppKeymap {
  pub(crate) close_tab: Binding,
  pub(crate) cycle_tabs: Binding,
  pub(crate) help: Binding,
  pub(crate) quit: Binding,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Binding {
  pub(crate) description: &'static str,
  pub(crate) keys: &'static [&'static str],
  pub(crate) label: &'static str,
}

pub(crate) struct CategoryKeymap {
  pub(crate) close_tab: Binding,
  pub(crate) cycle_tabs: Binding,
  pub(crate) delete_feed: Binding,
  pub(crate) edit_feed: Binding,
  pub(crate) new_feed: Binding,
  pub(crate) select_feed: Binding,
}

pub(crate) struct FeedKeymap {
  pub(crate) close_tab: Binding,
  pub(crate) cycle_tabs: Binding,
  pub(crate) open_article: Binding,
  pub(crate) open_in_browser: Binding,
  pub(crate) switch_pane: Binding,
}

pub(crate) struct WelcomeKeymap {
  pub(crate) cycle_tabs: Binding,
  pub(crate) delete_category: Binding,
  pub(crate) edit_category: Binding,
  pub(crate) new_category: Binding,
  pub(crate) select_category: Binding,
}

impl AppKeymap {
  pub(crate) fn full_help(&self) -> Vec<&Binding> {
    vec![&self.close_tab, &self.cycle_tabs, &self.help, &self.quit]
  }
}

impl Binding {
  pub(crate) fn matches(&self, key: KeyEvent) -> bool {
    let name = key_name(key);
    self.keys.iter().any(|candidate| *candidate == name)
  }
}

impl CategoryKeymap {
  pub(crate) fn short_help(&self) -> Vec<&Binding> {
    vec![
      &self.close_tab,
      &self.cycle_tabs,
      &self.select_feed,
      &self.new_feed,
      &self.edit_feed,
      &self.delete_feed,
    ]
  }
}

impl FeedKeymap {
  pub(crate) fn short_help(&self) -> Vec<&Binding> {
    vec![
      &self.close_tab,
      &self.cycle_tabs,
      &self.open_article,
      &self.switch_pane,
      &self.open_in_browser,
    ]
  }
}

impl WelcomeKeymap {
  pub(crate) fn short_help(&self) -> Vec<&Binding> {
    vec![
      &self.cycle_tabs,
      &self.select_category,
      &self.new_category,
      &self.edit_category,
      &self.delete_category,
    ]
  }
}
