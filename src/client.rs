use super::*;

#[derive(Clone)]
pub(crate) struct Client {
  client: reqwest::Client,
  subscriptions: Arc<Mutex<Subscriptions>>,
}

impl Client {
  pub(crate) fn create(
    &self,
    kind: ItemKind,
    path: &[String],
    fields: &[String; 2],
  ) -> Result<Listing> {
    let [name, detail] = fields;

    let mut subscriptions = self.subscriptions()?;

    match kind {
      ItemKind::Category => {
        subscriptions.add_category(name, detail)?;
        info!(name = %name.trim(), "created category");
        Self::listing(&subscriptions, TabKind::Welcome, WelcomeTab::TITLE)
      }
      ItemKind::Feed => {
        let category = Self::segment(path, 0)?;
        subscriptions.add_feed(category, name, detail)?;
        info!(name = %name.trim(), category, "created feed");
        Self::listing(&subscriptions, TabKind::Category, category)
      }
    }
  }

  pub(crate) fn delete(&self, kind: ItemKind, name: &str) -> Result<Listing> {
    let mut subscriptions = self.subscriptions()?;

    match kind {
      ItemKind::Category => {
        subscriptions.remove_category(name)?;
        info!(name, "deleted category");
        Self::listing(&subscriptions, TabKind::Welcome, WelcomeTab::TITLE)
      }
      ItemKind::Feed => {
        let category = subscriptions.remove_feed(name)?;
        info!(name, category = %category, "deleted feed");
        Self::listing(&subscriptions, TabKind::Category, &category)
      }
    }
  }

  pub(crate) fn edit(
    &self,
    kind: ItemKind,
    path: &[String],
    fields: &[String; 2],
  ) -> Result<Listing> {
    let [name, detail] = fields;

    let mut subscriptions = self.subscriptions()?;

    match kind {
      ItemKind::Category => {
        let old_name = Self::segment(path, 0)?;
        subscriptions.edit_category(old_name, name, detail)?;
        info!(old_name, name = %name.trim(), "edited category");
        Self::listing(&subscriptions, TabKind::Welcome, WelcomeTab::TITLE)
      }
      ItemKind::Feed => {
        let category = Self::segment(path, 0)?;
        let old_name = Self::segment(path, 1)?;
        subscriptions.edit_feed(category, old_name, name, detail)?;
        info!(old_name, name = %name.trim(), category, "edited feed");
        Self::listing(&subscriptions, TabKind::Category, category)
      }
    }
  }

  pub(crate) async fn fetch(&self, kind: TabKind, title: &str) -> Result<Vec<Item>> {
    match kind {
      TabKind::Category => self.subscriptions()?.feeds(title),
      TabKind::Feed => {
        let url = self.subscriptions()?.feed_url(title)?;
        self.fetch_feed(&url).await
      }
      TabKind::Welcome => Ok(self.subscriptions()?.categories()),
    }
  }

  async fn fetch_feed(&self, url: &str) -> Result<Vec<Item>> {
    debug!(url, "downloading feed");

    let document = self
      .client
      .get(url)
      .send()
      .await
      .with_context(|| format!("could not reach {url}"))?
      .error_for_status()?
      .json::<FeedDocument>()
      .await
      .with_context(|| format!("{url} is not a JSON feed"))?;

    Ok(document.items.into_iter().map(Item::from).collect())
  }

  fn listing(
    subscriptions: &Subscriptions,
    kind: TabKind,
    title: &str,
  ) -> Result<Listing> {
    let items = match kind {
      TabKind::Category => subscriptions.feeds(title)?,
      TabKind::Feed => bail!("feed listings come from the network"),
      TabKind::Welcome => subscriptions.categories(),
    };

    Ok(Listing {
      items,
      kind,
      title: title.to_string(),
    })
  }

  pub(crate) fn new(subscriptions: Subscriptions) -> Self {
    Self {
      client: reqwest::Client::new(),
      subscriptions: Arc::new(Mutex::new(subscriptions)),
    }
  }

  fn segment(path: &[String], index: usize) -> Result<&str> {
    path
      .get(index)
      .map(String::as_str)
      .ok_or_else(|| anyhow!("item path `{}` is too short", path.join("/")))
  }

  fn subscriptions(&self) -> Result<MutexGuard<'_, Subscriptions>> {
    self
      .subscriptions
      .lock()
      .map_err(|_| anyhow!("subscription store is poisoned"))
  }
}
