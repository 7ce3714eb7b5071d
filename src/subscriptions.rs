use super::*;

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
struct CategoryEntry {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  description: Option<String>,
  #[serde(default)]
  feeds: Vec<FeedEntry>,
  name: String,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
struct FeedEntry {
  name: String,
  url: String,
}

#[derive(Debug)]
pub(crate) struct Subscriptions {
  categories: Vec<CategoryEntry>,
  path: PathBuf,
}

impl Subscriptions {
  pub(crate) fn add_category(
    &mut self,
    name: &str,
    description: &str,
  ) -> Result {
    let name = Self::validate_name(name)?;

    if self.categories.iter().any(|category| category.name == name) {
      bail!("category `{name}` already exists");
    }

    self.categories.push(CategoryEntry {
      description: Self::optional(description),
      feeds: Vec::new(),
      name,
    });

    self.persist()
  }

  pub(crate) fn add_feed(&mut self, category: &str, name: &str, url: &str) -> Result {
    let name = Self::validate_name(name)?;

    if self.feed_url(&name).is_ok() {
      bail!("feed `{name}` already exists");
    }

    self.category_mut(category)?.feeds.push(FeedEntry {
      name,
      url: url.trim().to_string(),
    });

    self.persist()
  }

  pub(crate) fn categories(&self) -> Vec<Item> {
    self
      .categories
      .iter()
      .map(|category| Item {
        description: category.description.clone(),
        ..Item::new(category.name.clone())
      })
      .collect()
  }

  fn category_mut(&mut self, name: &str) -> Result<&mut CategoryEntry> {
    self
      .categories
      .iter_mut()
      .find(|category| category.name == name)
      .ok_or_else(|| anyhow!("no category named `{name}`"))
  }

  pub(crate) fn default_path() -> Result<PathBuf> {
    if let Ok(path) = env::var("FEEDS_SUBSCRIPTIONS_FILE") {
      return Ok(PathBuf::from(path));
    }

    let base_dir = if let Ok(dir) = env::var("XDG_CONFIG_HOME") {
      PathBuf::from(dir)
    } else if let Ok(home) = env::var("HOME") {
      PathBuf::from(home).join(".config")
    } else {
      env::current_dir()?.join(".config")
    };

    Ok(base_dir.join("feeds").join("subscriptions.json"))
  }

  pub(crate) fn edit_category(
    &mut self,
    old_name: &str,
    name: &str,
    description: &str,
  ) -> Result {
    let name = Self::validate_name(name)?;

    if name != old_name
      && self.categories.iter().any(|category| category.name == name)
    {
      bail!("category `{name}` already exists");
    }

    let category = self.category_mut(old_name)?;

    category.name = name;
    category.description = Self::optional(description);

    self.persist()
  }

  pub(crate) fn edit_feed(
    &mut self,
    category: &str,
    old_name: &str,
    name: &str,
    url: &str,
  ) -> Result {
    let name = Self::validate_name(name)?;

    if name != old_name && self.feed_url(&name).is_ok() {
      bail!("feed `{name}` already exists");
    }

    let feed = self
      .category_mut(category)?
      .feeds
      .iter_mut()
      .find(|feed| feed.name == old_name)
      .ok_or_else(|| anyhow!("no feed named `{old_name}` in `{category}`"))?;

    feed.name = name;
    feed.url = url.trim().to_string();

    self.persist()
  }

  fn ensure_parent_dir(path: &Path) -> Result {
    if let Some(parent) = path.parent() {
      fs::create_dir_all(parent)?;
    }

    Ok(())
  }

  pub(crate) fn feed_url(&self, name: &str) -> Result<String> {
    self
      .categories
      .iter()
      .flat_map(|category| &category.feeds)
      .find(|feed| feed.name == name)
      .map(|feed| feed.url.clone())
      .ok_or_else(|| anyhow!("no feed named `{name}`"))
  }

  pub(crate) fn feeds(&self, category: &str) -> Result<Vec<Item>> {
    let category = self
      .categories
      .iter()
      .find(|entry| entry.name == category)
      .ok_or_else(|| anyhow!("no category named `{category}`"))?;

    Ok(
      category
        .feeds
        .iter()
        .map(|feed| {
          Item::new(feed.name.clone()).with_description(feed.url.clone())
        })
        .collect(),
    )
  }

  pub(crate) fn load(path: PathBuf) -> Result<Self> {
    let categories = if path.exists() {
      let data = fs::read(&path)
        .with_context(|| format!("could not read {}", path.display()))?;

      if data.is_empty() {
        Vec::new()
      } else {
        serde_json::from_slice::<Vec<CategoryEntry>>(&data)
          .with_context(|| format!("could not parse {}", path.display()))?
      }
    } else {
      Vec::new()
    };

    info!(path = %path.display(), categories = categories.len(), "loaded subscriptions");

    Ok(Self { categories, path })
  }

  fn optional(text: &str) -> Option<String> {
    let trimmed = text.trim();

    if trimmed.is_empty() {
      None
    } else {
      Some(trimmed.to_string())
    }
  }

  fn persist(&self) -> Result {
    Self::ensure_parent_dir(&self.path)?;

    let serialized = serde_json::to_vec_pretty(&self.categories)?;

    fs::write(&self.path, serialized)
      .with_context(|| format!("could not write {}", self.path.display()))?;

    Ok(())
  }

  pub(crate) fn remove_category(&mut self, name: &str) -> Result {
    let position = self
      .categories
      .iter()
      .position(|category| category.name == name)
      .ok_or_else(|| anyhow!("no category named `{name}`"))?;

    self.categories.remove(position);

    self.persist()
  }

  /// Remove the feed called `name`, returning the category it was in.
  pub(crate) fn remove_feed(&mut self, name: &str) -> Result<String> {
    for category in &mut self.categories {
      if let Some(position) = category.feeds.iter().position(|feed| feed.name == name) {
        category.feeds.remove(position);

        let category = category.name.clone();

        self.persist()?;

        return Ok(category);
      }
    }

    bail!("no feed named `{name}`")
  }

  fn validate_name(name: &str) -> Result<String> {
    let name = name.trim();

    if name.is_empty() {
      bail!("name cannot be empty");
    }

    Ok(name.to_string())
  }
}
