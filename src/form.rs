use super::*;

#[derive(Debug)]
pub(crate) struct Form {
  current: usize,
  editing: bool,
  fields: [String; 2],
  kind: ItemKind,
  pub(crate) message_backup: String,
  path: Vec<String>,
}

impl Form {
  pub(crate) fn create(
    kind: ItemKind,
    path: Vec<String>,
    message_backup: String,
  ) -> Self {
    Self {
      current: 0,
      editing: false,
      fields: [String::new(), String::new()],
      kind,
      message_backup,
      path,
    }
  }

  pub(crate) fn edit(
    kind: ItemKind,
    path: Vec<String>,
    fields: [String; 2],
    message_backup: String,
  ) -> Self {
    Self {
      editing: true,
      fields,
      ..Self::create(kind, path, message_backup)
    }
  }

  pub(crate) fn handle_key(&mut self, key: KeyEvent) -> FormStep {
    match key.code {
      KeyCode::Esc => FormStep::Cancelled,
      KeyCode::Enter | KeyCode::Tab => {
        if self.current + 1 < self.fields.len() {
          self.current += 1;
          FormStep::Editing
        } else {
          FormStep::Submitted(self.submission())
        }
      }
      KeyCode::BackTab => {
        self.current = self.current.saturating_sub(1);
        FormStep::Editing
      }
      KeyCode::Backspace => {
        self.fields[self.current].pop();
        FormStep::Editing
      }
      KeyCode::Char(ch) => {
        let modifiers = key.modifiers;

        if modifiers.contains(KeyModifiers::CONTROL)
          || modifiers.contains(KeyModifiers::ALT)
          || modifiers.contains(KeyModifiers::SUPER)
        {
          return FormStep::Editing;
        }

        self.fields[self.current].push(ch);

        FormStep::Editing
      }
      _ => FormStep::Editing,
    }
  }

  pub(crate) fn prompt(&self) -> String {
    let verb = if self.editing { "Edit" } else { "New" };

    let label = self.kind.field_labels()[self.current];

    format!(
      "{verb} {} › {label}: {}▏",
      self.kind.label(),
      self.fields[self.current]
    )
  }

  fn submission(&self) -> Effect {
    let (fields, kind, path) =
      (self.fields.clone(), self.kind, self.path.clone());

    if self.editing {
      Effect::Edit { fields, kind, path }
    } else {
      Effect::Create { fields, kind, path }
    }
  }
}
