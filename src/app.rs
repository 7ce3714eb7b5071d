use super::*;

pub(crate) struct App {
  client: Client,
  event_rx: UnboundedReceiver<Event>,
  event_tx: UnboundedSender<Event>,
  handle: Handle,
  state: State,
}

impl App {
  const POLL_INTERVAL: Duration = Duration::from_millis(50);

  fn draw(state: &State, frame: &mut Frame) {
    let layout = Layout::default()
      .direction(Direction::Vertical)
      .constraints([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
      ])
      .split(frame.area());

    let titles = state
      .tabs()
      .iter()
      .map(|tab| {
        Line::from(format!(
          "{BASE_INDENT}{} {}{BASE_INDENT}",
          tab.kind().icon(),
          truncate(tab.title(), 24)
        ))
      })
      .collect::<Vec<_>>();

    let tabs = Tabs::new(titles)
      .select(state.active())
      .style(Style::default().fg(DIM))
      .highlight_style(Style::default().fg(ACCENT).add_modifier(Modifier::BOLD))
      .divider(Span::raw("│"));

    frame.render_widget(tabs, layout[0]);

    if let Some(tab) = state.active_tab() {
      tab.draw(frame, layout[2]);
    }

    let status_color = if state.form().is_some() { ACCENT } else { DIM };

    let status = Paragraph::new(format!("{BASE_INDENT}{}", state.status()))
      .style(Style::default().fg(status_color));

    frame.render_widget(status, layout[3]);

    let tab_help = state.active_tab().map(Tab::help).unwrap_or_default();

    state.help().draw(frame, &tab_help);
  }

  fn execute_effect(&mut self, effect: Effect) {
    match effect {
      Effect::Create { fields, kind, path } => {
        self.spawn_change(move |client| client.create(kind, &path, &fields));
      }
      Effect::Delete { kind, name } => {
        self.spawn_change(move |client| client.delete(kind, &name));
      }
      Effect::Edit { fields, kind, path } => {
        self.spawn_change(move |client| client.edit(kind, &path, &fields));
      }
      Effect::Fetch { kind, title } => {
        let (client, sender) = (self.client.clone(), self.event_tx.clone());

        self.handle.spawn(async move {
          let result = client.fetch(kind, &title).await;

          let _ = sender.send(Event::Fetched {
            kind,
            result,
            title,
          });
        });
      }
      Effect::OpenUrl { url } => match webbrowser::open(&url) {
        Ok(()) => {
          info!(url = %url, "opened in browser");
          self.state.set_transient_message(format!(
            "Opened in browser: {}",
            truncate(&url, 80)
          ));
        }
        Err(error) => {
          warn!(url = %url, "could not open browser: {error}");
          self
            .state
            .set_transient_message(format!("Could not open link: {error}"));
        }
      },
      Effect::Tick { id } => {
        let sender = self.event_tx.clone();

        self.handle.spawn(async move {
          tokio::time::sleep(Spinner::INTERVAL).await;
          let _ = sender.send(Event::Tick { id });
        });
      }
    }
  }

  pub(crate) fn new(client: Client) -> Self {
    let (event_tx, event_rx) = mpsc::unbounded_channel();

    Self {
      client,
      event_rx,
      event_tx,
      handle: Handle::current(),
      state: State::new(),
    }
  }

  fn process_pending_events(&mut self) {
    self.state.update_transient_message();

    while let Ok(event) = self.event_rx.try_recv() {
      self.state.handle_event(event);
    }

    for effect in self.state.take_effects() {
      self.execute_effect(effect);
    }
  }

  pub(crate) fn run(
    &mut self,
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
  ) -> Result {
    let size = terminal.size()?;

    self
      .state
      .resize(usize::from(size.width), usize::from(size.height));

    loop {
      self.process_pending_events();

      terminal.draw(|frame| Self::draw(&self.state, frame))?;

      if !crossterm_event::poll(Self::POLL_INTERVAL)? {
        continue;
      }

      match crossterm_event::read()? {
        CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => {
          let dispatch = self.state.handle_key(key);

          for effect in dispatch.effects {
            self.execute_effect(effect);
          }

          if dispatch.should_exit {
            break;
          }
        }
        CrosstermEvent::Resize(width, height) => {
          debug!(width, height, "terminal resized");
          self.state.resize(usize::from(width), usize::from(height));
        }
        _ => {}
      }
    }

    Ok(())
  }

  fn spawn_change<F>(&self, change: F)
  where
    F: FnOnce(&Client) -> Result<Listing> + Send + 'static,
  {
    let (client, sender) = (self.client.clone(), self.event_tx.clone());

    self.handle.spawn_blocking(move || {
      let _ = sender.send(Event::Changed {
        result: change(&client),
      });
    });
  }
}

#[cfg(test)]
mod tests {
  use {super::*, crate::test_support::render};

  fn state() -> State {
    let mut state = State::new();
    state.take_effects();
    state.resize(80, 20);
    state
  }

  #[test]
  fn frame_shows_tabs_body_and_status() {
    let mut state = state();

    state.handle_event(Event::Fetched {
      kind: TabKind::Welcome,
      result: Ok(vec![Item::new("News")]),
      title: WelcomeTab::TITLE.into(),
    });

    let lines = render(80, 20, |frame| App::draw(&state, frame));

    assert!(lines[0].contains("⌂ Welcome"));
    assert!(lines[2..19].iter().any(|line| line.contains("1 News")));
    assert!(lines[19].contains("enter Open"));
  }

  #[test]
  fn loading_body_sits_below_the_tab_bar() {
    let state = state();

    let lines = render(80, 20, |frame| App::draw(&state, frame));

    assert_eq!(lines[3], "   Loading...");
  }

  #[test]
  fn help_overlay_is_drawn_on_top() {
    let mut state = state();

    state.handle_key(KeyEvent::new(KeyCode::Char('?'), KeyModifiers::NONE));

    let text = render(80, 24, |frame| App::draw(&state, frame)).join("\n");

    assert!(text.contains(HELP_TITLE));
    assert!(text.contains(HELP_STATUS));
  }
}
