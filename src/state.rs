use super::*;

pub(crate) struct State {
  active: usize,
  form: Option<Form>,
  height: usize,
  help: HelpView,
  message: String,
  next_id: usize,
  pending_effects: Vec<Effect>,
  tabs: Vec<Tab>,
  transient_message: Option<TransientMessage>,
  width: usize,
}

impl State {
  pub(crate) fn active(&self) -> usize {
    self.active
  }

  pub(crate) fn active_tab(&self) -> Option<&Tab> {
    self.tabs.get(self.active)
  }

  fn base_message(&self) -> String {
    match &self.transient_message {
      Some(transient) if self.message == transient.current() => {
        transient.original().to_string()
      }
      _ => self.message.clone(),
    }
  }

  fn broadcast(&mut self, message: &Message) {
    let mut commands = Vec::new();

    self.tabs = std::mem::take(&mut self.tabs)
      .into_iter()
      .map(|tab| {
        let (tab, emitted) = tab.update(message.clone());
        commands.extend(emitted);
        tab
      })
      .collect();

    self.run_commands(commands);
  }

  fn close_active_tab(&mut self) {
    let Some(tab) = self.active_tab() else {
      return;
    };

    if tab.kind() == TabKind::Welcome {
      return;
    }

    info!(kind = ?tab.kind(), title = tab.title(), "closing tab");

    self.tabs.remove(self.active);

    self.active = self.active.min(self.tabs.len().saturating_sub(1));
  }

  fn cycle_tabs(&mut self) {
    let tab_count = self.tabs.len();

    if tab_count != 0 {
      self.active = (self.active + 1) % tab_count;
    }
  }

  fn finish_form(&mut self, form: Form) {
    self.message = form.message_backup;
  }

  pub(crate) fn form(&self) -> Option<&Form> {
    self.form.as_ref()
  }

  pub(crate) fn handle_event(&mut self, event: Event) {
    match event {
      Event::Changed { result } => match result {
        Ok(listing) => {
          self.broadcast(&Message::FetchSuccess {
            items: listing.items,
            kind: listing.kind,
            title: listing.title,
          });
        }
        Err(error) => {
          warn!("could not save changes: {error:#}");
          self.set_transient_message(format!("Could not save changes: {error}"));
        }
      },
      Event::Fetched {
        kind,
        result,
        title,
      } => match result {
        Ok(items) => {
          debug!(?kind, title = %title, items = items.len(), "fetch finished");
          self.broadcast(&Message::FetchSuccess { items, kind, title });
        }
        Err(error) => {
          warn!(?kind, title = %title, "fetch failed: {error:#}");
          self.set_transient_message(format!("Could not load {title}: {error}"));
        }
      },
      Event::Tick { id } => {
        self.broadcast(&Message::Tick { id });
      }
    }
  }

  fn handle_form_key(&mut self, key: KeyEvent) {
    let Some(form) = self.form.as_mut() else {
      return;
    };

    match form.handle_key(key) {
      FormStep::Cancelled => {
        if let Some(form) = self.form.take() {
          self.finish_form(form);
        }
      }
      FormStep::Editing => {
        self.message = form.prompt();
      }
      FormStep::Submitted(effect) => {
        if let Some(form) = self.form.take() {
          self.finish_form(form);
        }

        self.pending_effects.push(effect);
      }
    }
  }

  pub(crate) fn handle_key(&mut self, key: KeyEvent) -> Dispatch {
    debug_assert!(
      self.pending_effects.is_empty(),
      "key dispatch should start without pending effects"
    );

    let mut should_exit = false;

    if self.form.is_some() {
      self.handle_form_key(key);
    } else if self.help.is_visible() {
      if APP_KEYMAP.quit.matches(key) {
        should_exit = true;
      } else if APP_KEYMAP.help.matches(key) || key.code == KeyCode::Esc {
        self.help.hide(&mut self.message);
      }
    } else if APP_KEYMAP.quit.matches(key) {
      should_exit = true;
    } else if APP_KEYMAP.help.matches(key) {
      self.help.show(&mut self.message);
    } else if APP_KEYMAP.close_tab.matches(key) {
      self.close_active_tab();
    } else if APP_KEYMAP.cycle_tabs.matches(key) {
      self.cycle_tabs();
    } else {
      self.update_active(Message::Key(key));
    }

    Dispatch {
      effects: self.take_effects(),
      should_exit,
    }
  }

  pub(crate) fn help(&self) -> &HelpView {
    &self.help
  }

  pub(crate) fn new() -> Self {
    let welcome = Tab::new(0, TabKind::Welcome, WelcomeTab::TITLE);

    let commands = welcome.init();

    let mut state = Self {
      active: 0,
      form: None,
      height: 0,
      help: HelpView::new(),
      message: String::new(),
      next_id: 1,
      pending_effects: Vec::new(),
      tabs: vec![welcome],
      transient_message: None,
      width: 0,
    };

    state.run_commands(commands);

    state
  }

  fn open_form(&mut self, form: Form) {
    self.message = form.prompt();
    self.form = Some(form);
  }

  fn open_tab(&mut self, kind: TabKind, title: &str) {
    if let Some(index) = self
      .tabs
      .iter()
      .position(|tab| tab.kind() == kind && tab.title() == title)
    {
      self.active = index;
      return;
    }

    let id = self.next_id;
    self.next_id += 1;

    info!(id, ?kind, title, "opening tab");

    let tab = Tab::new(id, kind, title).set_size(self.width, self.height);

    let commands = tab.init();

    let index = (self.active + 1).min(self.tabs.len());

    self.tabs.insert(index, tab);

    self.active = index;

    self.run_commands(commands);
  }

  pub(crate) fn resize(&mut self, width: usize, height: usize) {
    self.width = width;
    self.height = height;

    self.tabs = std::mem::take(&mut self.tabs)
      .into_iter()
      .map(|tab| tab.set_size(width, height))
      .collect();
  }

  fn run_commands(&mut self, commands: Vec<Command>) {
    for command in commands {
      match command {
        Command::CreateItem { kind, path } => {
          let backup = self.base_message();
          self.open_form(Form::create(kind, path, backup));
        }
        Command::DeleteItem { kind, name } => {
          self.pending_effects.push(Effect::Delete { kind, name });
        }
        Command::EditItem { fields, kind, path } => {
          let backup = self.base_message();
          self.open_form(Form::edit(kind, path, fields, backup));
        }
        Command::Fetch { kind, title } => {
          self.pending_effects.push(Effect::Fetch { kind, title });
        }
        Command::OpenTab { kind, title } => self.open_tab(kind, &title),
        Command::OpenUrl { url } => {
          self.pending_effects.push(Effect::OpenUrl { url });
        }
        Command::Tick { id } => {
          self.pending_effects.push(Effect::Tick { id });
        }
      }
    }
  }

  pub(crate) fn set_transient_message(&mut self, message: String) {
    let original = self.transient_message.as_ref().map_or_else(
      || self.message.clone(),
      |transient| transient.original().to_string(),
    );

    self.transient_message =
      Some(TransientMessage::new(message.clone(), original));

    self.message = message;
  }

  pub(crate) fn status(&self) -> String {
    if !self.message.is_empty() {
      return self.message.clone();
    }

    let mut bindings = self.active_tab().map(Tab::help).unwrap_or_default();

    bindings.push(&APP_KEYMAP.help);

    help_line(&bindings)
  }

  pub(crate) fn tabs(&self) -> &[Tab] {
    &self.tabs
  }

  pub(crate) fn take_effects(&mut self) -> Vec<Effect> {
    std::mem::take(&mut self.pending_effects)
  }

  fn update_active(&mut self, message: Message) {
    if self.active >= self.tabs.len() {
      return;
    }

    let tab = self.tabs.remove(self.active);

    let (tab, commands) = tab.update(message);

    self.tabs.insert(self.active, tab);

    self.run_commands(commands);
  }

  pub(crate) fn update_transient_message(&mut self) {
    if let Some(transient) = self.transient_message.clone() {
      if self.message != transient.current() {
        self.transient_message = None;
      } else if transient.is_expired() {
        self.message = transient.original().to_string();
        self.transient_message = None;
      }
    }
  }
}
