use {
  anyhow::{Context, anyhow, bail},
  app::App,
  arguments::Arguments,
  catalog::Catalog,
  category_tab::CategoryTab,
  clap::Parser,
  client::Client,
  command::Command,
  crossterm::{
    event as crossterm_event,
    event::{
      Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers,
    },
    execute,
    style::Stylize,
    terminal::{
      EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
      enable_raw_mode,
    },
  },
  dispatch::Dispatch,
  effect::Effect,
  event::Event,
  feed_document::FeedDocument,
  feed_tab::FeedTab,
  form::Form,
  form_step::FormStep,
  help_view::HelpView,
  item::Item,
  item_kind::ItemKind,
  keymap::{
    APP_KEYMAP, Binding, CATEGORY_KEYMAP, FEED_KEYMAP, WELCOME_KEYMAP,
  },
  list_view::ListView,
  listing::Listing,
  message::Message,
  ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{
      Block, BorderType, Borders, Clear, List, ListItem, ListState, Paragraph,
      Tabs, Wrap,
    },
  },
  serde::{
    Deserialize, Deserializer, Serialize,
    de::{self, Unexpected},
  },
  serde_json::Value,
  spinner::Spinner,
  state::State,
  std::{
    backtrace::BacktraceStatus,
    env, fs,
    io::{self, IsTerminal, Stdout},
    path::{Path, PathBuf},
    process,
    sync::{Arc, Mutex, MutexGuard},
    time::{Duration, Instant},
  },
  subscriptions::Subscriptions,
  tab::Tab,
  tab_kind::TabKind,
  tokio::{
    runtime::Handle,
    sync::mpsc::{self, UnboundedReceiver, UnboundedSender},
  },
  tracing::{debug, info, warn},
  tracing_subscriber::EnvFilter,
  transient_message::TransientMessage,
  utils::{
    deserialize_optional_string, draw_loading, help_line, key_name,
    pane_block, plain_text, to_u16, truncate, wrap_paragraphs, wrap_text,
  },
  viewport::Viewport,
  welcome_tab::WelcomeTab,
};

mod app;
mod arguments;
mod catalog;
mod category_tab;
mod client;
mod command;
mod dispatch;
mod effect;
mod event;
mod feed_document;
mod feed_tab;
mod form;
mod form_step;
mod help_view;
mod item;
mod item_kind;
mod keymap;
mod list_view;
mod listing;
mod message;
mod spinner;
mod state;
mod subscriptions;
mod tab;
mod tab_kind;
#[cfg(test)]
mod test_support;
mod transient_message;
mod utils;
mod viewport;
mod welcome_tab;

const ACCENT: Color = Color::Cyan;

const BASE_INDENT: &str = " ";

/// Rows of a tab's area that hold no pane content: the tab bar, its
/// spacer, the status line and the pane borders.
const CHROME_HEIGHT: usize = 5;

const DIM: Color = Color::DarkGray;

const HELP_STATUS: &str = "Press ? or esc to close help";
const HELP_TITLE: &str = "Help";

type Result<T = (), E = anyhow::Error> = std::result::Result<T, E>;

fn initialize_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
  enable_raw_mode().context("could not enable raw mode")?;

  let mut stdout = io::stdout();
  execute!(stdout, EnterAlternateScreen)?;

  Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

fn restore_terminal(
  terminal: &mut Terminal<CrosstermBackend<Stdout>>,
) -> Result {
  disable_raw_mode()?;

  execute!(terminal.backend_mut(), LeaveAlternateScreen)?;

  terminal.show_cursor()?;

  Ok(())
}

async fn run() -> Result {
  let arguments = Arguments::parse();

  arguments.initialize_logging()?;

  let path = arguments.subscriptions_path()?;

  let subscriptions =
    Subscriptions::load(path).context("could not load subscriptions")?;

  let mut terminal = initialize_terminal()?;

  let mut app = App::new(Client::new(subscriptions));

  let result = app.run(&mut terminal);

  restore_terminal(&mut terminal)?;

  info!("exiting");

  result
}

#[tokio::main]
async fn main() {
  if let Err(error) = run().await {
    let use_color = io::stderr().is_terminal();

    if use_color {
      eprintln!("{} {error}", "error:".bold().red());
    } else {
      eprintln!("error: {error}");
    }

    for (i, error) in error.chain().skip(1).enumerate() {
      if i == 0 {
        eprintln!();

        if use_color {
          eprintln!("{}", "because:".bold().red());
        } else {
          eprintln!("because:");
        }
      }

      if use_color {
        eprintln!("{} {error}", "-".bold().red());
      } else {
        eprintln!("- {error}");
      }
    }

    let backtrace = error.backtrace();

    if backtrace.status() == BacktraceStatus::Captured {
      if use_color {
        eprintln!("{}", "backtrace:".bold().red());
      } else {
        eprintln!("backtrace:");
      }

      eprintln!("{backtrace}");
    }

    process::exit(1);
  }
}
