use super::*;

pub(crate) fn deserialize_optional_string<'de, D>(
  deserializer: D,
) -> Result<Option<String>, D::Error>
where
  D: Deserializer<'de>,
{
  let value = Option::<Value>::deserialize(deserializer)?;

  match value {
    None | Some(Value::Null) => Ok(None),
    Some(Value::String(s)) => Ok(Some(s)),
    Some(Value::Number(n)) => Ok(Some(n.to_string())),
    Some(Value::Bool(b)) => Err(de::Error::invalid_type(
      Unexpected::Bool(b),
      &"string or number",
    )),
    Some(Value::Array(_)) => Err(de::Error::invalid_type(
      Unexpected::Seq,
      &"string or number",
    )),
    Some(Value::Object(_)) => Err(de::Error::invalid_type(
      Unexpected::Map,
      &"string or number",
    )),
  }
}

pub(crate) fn draw_loading(frame: &mut Frame, area: Rect, message: &str) {
  if area.width <= 3 || area.height <= 1 {
    return;
  }

  let line = Rect::new(area.x + 3, area.y + 1, area.width - 3, 1);

  frame.render_widget(Paragraph::new(message.to_string()), line);
}

pub(crate) fn help_line(bindings: &[&Binding]) -> String {
  bindings
    .iter()
    .map(|binding| format!("{} {}", binding.label, binding.description))
    .collect::<Vec<_>>()
    .join(" • ")
}

pub(crate) fn key_name(key: KeyEvent) -> String {
  let base = match key.code {
    KeyCode::Backspace => "backspace".to_string(),
    KeyCode::BackTab => "shift+tab".to_string(),
    KeyCode::Char(' ') => "space".to_string(),
    KeyCode::Char(ch) => ch.to_string(),
    KeyCode::Delete => "delete".to_string(),
    KeyCode::Down => "down".to_string(),
    KeyCode::End => "end".to_string(),
    KeyCode::Enter => "enter".to_string(),
    KeyCode::Esc => "esc".to_string(),
    KeyCode::F(n) => format!("f{n}"),
    KeyCode::Home => "home".to_string(),
    KeyCode::Left => "left".to_string(),
    KeyCode::PageDown => "pgdown".to_string(),
    KeyCode::PageUp => "pgup".to_string(),
    KeyCode::Right => "right".to_string(),
    KeyCode::Tab => "tab".to_string(),
    KeyCode::Up => "up".to_string(),
    _ => String::new(),
  };

  let mut name = String::new();

  if key.modifiers.contains(KeyModifiers::CONTROL) {
    name.push_str("ctrl+");
  }

  if key.modifiers.contains(KeyModifiers::ALT) {
    name.push_str("alt+");
  }

  name.push_str(&base);

  name
}

pub(crate) fn pane_block(focused: bool) -> Block<'static> {
  let color = if focused { ACCENT } else { DIM };

  Block::default()
    .borders(Borders::ALL)
    .border_type(BorderType::Rounded)
    .border_style(Style::default().fg(color))
}

pub(crate) fn plain_text(text: &str) -> String {
  let mut cleaned = String::with_capacity(text.len());
  let mut inside_tag = false;
  let mut last_was_space = false;

  for ch in text.chars() {
    match ch {
      '<' => {
        inside_tag = true;

        if !last_was_space {
          cleaned.push(' ');
          last_was_space = true;
        }
      }
      '>' => {
        inside_tag = false;
      }
      _ if inside_tag => {}
      _ if ch.is_whitespace() => {
        if !last_was_space {
          cleaned.push(' ');
          last_was_space = true;
        }
      }
      _ => {
        cleaned.push(ch);
        last_was_space = false;
      }
    }
  }

  let decoded = html_escape::decode_html_entities(cleaned.trim());

  decoded.split_whitespace().collect::<Vec<_>>().join(" ")
}

pub(crate) fn truncate(text: &str, max_chars: usize) -> String {
  if text.chars().count() <= max_chars {
    return text.to_string();
  }

  let mut result = String::new();

  for (idx, ch) in text.chars().enumerate() {
    if idx >= max_chars {
      result.push_str("...");
      break;
    }

    result.push(ch);
  }

  result.trim_end().to_string()
}

pub(crate) fn to_u16(value: usize) -> u16 {
  u16::try_from(value).unwrap_or(u16::MAX)
}

pub(crate) fn wrap_paragraphs(text: &str, width: usize) -> Vec<String> {
  let mut lines = Vec::new();

  for paragraph in text.lines() {
    if paragraph.trim().is_empty() {
      lines.push(String::new());
    } else {
      lines.extend(wrap_text(paragraph, width));
    }
  }

  lines
}

pub(crate) fn wrap_text(text: &str, width: usize) -> Vec<String> {
  if text.is_empty() {
    return Vec::new();
  }

  let mut lines = Vec::new();
  let mut current = String::new();
  let mut current_width = 0;

  for word in text.split_whitespace() {
    let word_width = word.chars().count();

    if current.is_empty() {
      current.push_str(word);
      current_width = word_width;
    } else if current_width + 1 + word_width <= width {
      current.push(' ');
      current.push_str(word);
      current_width += 1 + word_width;
    } else {
      lines.push(current);
      current = word.to_string();
      current_width = word_width;
    }
  }

  if !current.is_empty() {
    lines.push(current);
  }

  if lines.is_empty() {
    vec![text.to_string()]
  } else {
    lines
  }
}

#[cfg(test)]
mod tests {
  use {super::*, serde::Deserialize};

  #[derive(Deserialize, Debug, PartialEq)]
  struct OptionalWrapper {
    #[serde(deserialize_with = "deserialize_optional_string")]
    value: Option<String>,
  }

  fn parse_value(input: &str) -> Result<Option<String>, serde_json::Error> {
    serde_json::from_str::<OptionalWrapper>(input).map(|wrapper| wrapper.value)
  }

  #[test]
  fn deserialize_optional_string_supports_string_numbers_and_null() {
    assert_eq!(
      parse_value(r#"{"value": "hello"}"#).unwrap(),
      Some("hello".to_string())
    );

    assert_eq!(
      parse_value(r#"{"value": 42}"#).unwrap(),
      Some("42".to_string())
    );

    assert_eq!(parse_value(r#"{"value": null}"#).unwrap(), None);

    assert!(
      parse_value(r#"{"value": true}"#).is_err(),
      "bools should fail deserialization"
    );
  }

  #[test]
  fn help_line_joins_labels_and_descriptions() {
    assert_eq!(
      help_line(&[&APP_KEYMAP.cycle_tabs, &APP_KEYMAP.help]),
      "tab Cycle tabs • ? Help"
    );
  }

  #[test]
  fn key_name_prefixes_modifiers() {
    assert_eq!(
      key_name(KeyEvent::new(KeyCode::Char('w'), KeyModifiers::CONTROL)),
      "ctrl+w"
    );

    assert_eq!(
      key_name(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)),
      "enter"
    );

    assert_eq!(
      key_name(KeyEvent::new(KeyCode::Char('3'), KeyModifiers::NONE)),
      "3"
    );
  }

  #[test]
  fn plain_text_strips_tags_and_decodes_entities() {
    assert_eq!(
      plain_text(
        "<p>Hello &amp; <i>goodbye</i></p>\n<ul><li>First</li><li>Second</li></ul>"
      ),
      "Hello & goodbye First Second"
    );
  }

  #[test]
  fn plain_text_decodes_numeric_entities() {
    assert_eq!(
      plain_text("https:&#x2F;&#x2F;example.com&#47;path"),
      "https://example.com/path"
    );
  }

  #[test]
  fn truncate_appends_ellipsis_when_exceeding_limit() {
    assert_eq!(truncate("This is a longer line", 4), "This...");
    assert_eq!(truncate("exact", 5), "exact");
  }

  #[test]
  fn wrap_paragraphs_keeps_blank_separators() {
    assert_eq!(
      wrap_paragraphs("one two three\n\nfour", 7),
      vec![
        "one two".to_string(),
        "three".to_string(),
        String::new(),
        "four".to_string(),
      ]
    );
  }

  #[test]
  fn wrap_text_wraps_longer_text() {
    assert_eq!(
      wrap_text("hello brave new world", 11),
      vec!["hello brave".to_string(), "new world".to_string()]
    );
  }

  #[test]
  fn wrap_text_returns_empty_for_empty_input() {
    assert_eq!(wrap_text("", 10), Vec::<String>::new());
  }
}
