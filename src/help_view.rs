use super::*;

pub(crate) struct HelpView {
  message_backup: Option<String>,
  visible: bool,
}

impl HelpView {
  const NAVIGATION: &[(&str, &str)] = &[
    ("↑/k ↓/j", "Move up or down"),
    ("pgup/pgdn", "Page up or down"),
    ("ctrl+u/d", "Half page in the article"),
    ("home/end", "First or last"),
    ("1-9", "Open a numbered item"),
  ];

  pub(crate) fn draw(&self, frame: &mut Frame, tab_help: &[&Binding]) {
    if !self.visible {
      return;
    }

    let lines = Self::lines(tab_help);

    let area = Self::help_area(frame.area(), &lines);

    frame.render_widget(Clear, area);

    let help = Paragraph::new(lines.join("\n"))
      .block(
        Block::default()
          .title(HELP_TITLE)
          .borders(Borders::ALL)
          .border_type(BorderType::Rounded)
          .border_style(Style::default().fg(ACCENT)),
      )
      .wrap(Wrap { trim: false });

    frame.render_widget(help, area);
  }

  fn help_area(area: Rect, lines: &[String]) -> Rect {
    let max_line_width = lines
      .iter()
      .map(|line| line.chars().count())
      .max()
      .unwrap_or(0);

    let desired_width = to_u16(max_line_width.saturating_add(2)).max(1);

    let desired_height = to_u16(lines.len().saturating_add(2)).max(1);

    let available_width = area.width.saturating_sub(2).max(1);
    let available_height = area.height.saturating_sub(2).max(1);

    let width = available_width.clamp(1, desired_width).min(area.width);
    let height = available_height.clamp(1, desired_height).min(area.height);

    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;

    Rect::new(x, y, width, height)
  }

  pub(crate) fn hide(&mut self, message: &mut String) {
    if !self.visible {
      return;
    }

    *message = self.message_backup.take().unwrap_or_default();

    self.visible = false;
  }

  pub(crate) fn is_visible(&self) -> bool {
    self.visible
  }

  fn lines(tab_help: &[&Binding]) -> Vec<String> {
    fn row(label: &str, description: &str) -> String {
      format!("  {label:<11} {description}")
    }

    let app_help = APP_KEYMAP.full_help();

    let mut lines = vec!["Tabs:".to_string()];

    lines.extend(
      app_help
        .iter()
        .map(|binding| row(binding.label, binding.description)),
    );

    let tab_only = tab_help
      .iter()
      .filter(|binding| !app_help.contains(*binding))
      .collect::<Vec<_>>();

    if !tab_only.is_empty() {
      lines.push(String::new());
      lines.push("This tab:".into());
      lines.extend(
        tab_only
          .iter()
          .map(|binding| row(binding.label, binding.description)),
      );
    }

    lines.push(String::new());
    lines.push("Lists and articles:".into());
    lines.extend(
      Self::NAVIGATION
        .iter()
        .map(|(label, description)| row(label, description)),
    );

    lines
  }

  pub(crate) fn new() -> Self {
    Self {
      message_backup: None,
      visible: false,
    }
  }

  pub(crate) fn show(&mut self, message: &mut String) {
    if self.visible {
      return;
    }

    self.message_backup = Some(message.clone());

    *message = HELP_STATUS.into();

    self.visible = true;
  }
}

#[cfg(test)]
mod tests {
  use {super::*, crate::test_support::render};

  #[test]
  fn show_and_hide_swap_the_status_message() {
    let mut help = HelpView::new();
    let mut message = "before".to_string();

    help.show(&mut message);
    assert!(help.is_visible());
    assert_eq!(message, HELP_STATUS);

    help.show(&mut message);
    help.hide(&mut message);
    assert!(!help.is_visible());
    assert_eq!(message, "before");
  }

  #[test]
  fn lines_list_tab_keys_once() {
    let lines = HelpView::lines(&FEED_KEYMAP.short_help());

    let cycle = lines.iter().filter(|line| line.contains("Cycle tabs")).count();

    assert_eq!(cycle, 1);
    assert!(lines.iter().any(|line| line.contains("Open in browser")));
  }

  #[test]
  fn hidden_help_draws_nothing() {
    let help = HelpView::new();

    let lines = render(40, 10, |frame| help.draw(frame, &[]));

    assert!(lines.iter().all(String::is_empty));
  }

  #[test]
  fn visible_help_draws_a_titled_box() {
    let mut help = HelpView::new();
    help.show(&mut String::new());

    let text = render(60, 24, |frame| {
      help.draw(frame, &WELCOME_KEYMAP.short_help());
    })
    .join("\n");

    assert!(text.contains(HELP_TITLE));
    assert!(text.contains("Quit"));
  }
}
