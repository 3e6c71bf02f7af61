//! Localization switcher and translatable page texts

use avtorend_core::prelude::*;
use avtorend_core::LocaleDictionary;

/// Which attribute of a node a translation key fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeAttr {
    Text,
    Placeholder,
    Title,
}

/// A piece of page text tagged with a translation key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslatableNode {
    pub key: String,
    pub attr: NodeAttr,
    pub value: String,
}

/// All translatable texts on the page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageTexts {
    nodes: Vec<TranslatableNode>,
}

const BUILTIN_TEXTS: &[(&str, NodeAttr, &str)] = &[
    ("nav.home", NodeAttr::Text, "Главная"),
    ("nav.fleet", NodeAttr::Text, "Автопарк"),
    ("nav.conditions", NodeAttr::Text, "Условия"),
    ("nav.about", NodeAttr::Text, "О нас"),
    ("nav.contacts", NodeAttr::Text, "Контакты"),
    ("menu.title", NodeAttr::Text, "Меню"),
    ("menu.open", NodeAttr::Title, "Открыть меню"),
    ("menu.close", NodeAttr::Title, "Закрыть меню"),
    ("hero.title", NodeAttr::Text, "Аренда автомобилей"),
    ("hero.subtitle", NodeAttr::Text, "Без залога на эконом-класс, подача 24/7"),
    ("search.placeholder", NodeAttr::Placeholder, "Марка или модель"),
    ("fleet.title", NodeAttr::Text, "Наш автопарк"),
    ("fleet.all", NodeAttr::Text, "Все"),
    ("fleet.loading", NodeAttr::Text, "Загрузка…"),
    ("fleet.empty", NodeAttr::Text, "Автомобили не найдены"),
    ("fleet.error", NodeAttr::Text, "Не удалось загрузить автопарк"),
    ("fleet.per_day", NodeAttr::Text, "₽/сутки"),
    ("fleet.seats", NodeAttr::Text, "мест"),
    ("fleet.unavailable", NodeAttr::Text, "Занят"),
    ("car.transmission.automatic", NodeAttr::Text, "Автомат"),
    ("car.transmission.manual", NodeAttr::Text, "Механика"),
    ("car.transmission.cvt", NodeAttr::Text, "Вариатор"),
    ("car.transmission.semi_automatic", NodeAttr::Text, "Робот"),
    ("detail.back", NodeAttr::Text, "Назад"),
    ("detail.deposit", NodeAttr::Text, "Залог"),
    ("detail.horsepower", NodeAttr::Text, "л.с."),
    ("detail.features", NodeAttr::Text, "Комплектация"),
    ("detail.not_found", NodeAttr::Text, "Автомобиль не найден"),
    ("footer.hint", NodeAttr::Text, "m меню · ←/→ категории · Enter подробнее · L язык · q выход"),
];

impl PageTexts {
    /// Texts shipped with the client, shown until a dictionary arrives.
    pub fn builtin() -> Self {
        BUILTIN_TEXTS
            .iter()
            .map(|&(key, attr, value)| TranslatableNode {
                key: key.to_string(),
                attr,
                value: value.to_string(),
            })
            .collect()
    }

    pub fn nodes(&self) -> &[TranslatableNode] {
        &self.nodes
    }

    pub fn get(&self, key: &str, attr: NodeAttr) -> Option<&str> {
        self.nodes
            .iter()
            .find(|n| n.key == key && n.attr == attr)
            .map(|n| n.value.as_str())
    }

    /// Text content for `key`, or the key itself when untagged.
    pub fn text<'a>(&'a self, key: &'a str) -> &'a str {
        self.get(key, NodeAttr::Text).unwrap_or(key)
    }

    pub fn placeholder<'a>(&'a self, key: &'a str) -> &'a str {
        self.get(key, NodeAttr::Placeholder).unwrap_or(key)
    }

    pub fn title<'a>(&'a self, key: &'a str) -> &'a str {
        self.get(key, NodeAttr::Title).unwrap_or(key)
    }

    /// Overwrite every node whose key is in `dictionary`.
    ///
    /// Nodes with no entry keep their current value. Returns the number of
    /// nodes updated.
    pub fn apply(&mut self, dictionary: &LocaleDictionary) -> usize {
        let mut updated = 0;
        for node in &mut self.nodes {
            if let Some(value) = dictionary.get(&node.key) {
                node.value = value.to_string();
                updated += 1;
            }
        }
        updated
    }
}

impl FromIterator<TranslatableNode> for PageTexts {
    fn from_iter<I: IntoIterator<Item = TranslatableNode>>(iter: I) -> Self {
        Self {
            nodes: iter.into_iter().collect(),
        }
    }
}

/// A dictionary fetch the switcher is waiting for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleRequest {
    pub seq: u64,
    pub code: String,
}

/// Tracks the active language and drops out-of-order dictionary responses.
#[derive(Debug, Clone)]
pub struct LocaleSwitcher {
    supported: Vec<String>,
    current: String,
    latest: Option<LocaleRequest>,
    next_seq: u64,
}

impl LocaleSwitcher {
    pub fn new(supported: Vec<String>, current: impl Into<String>) -> Self {
        Self {
            supported,
            current: current.into(),
            latest: None,
            next_seq: 1,
        }
    }

    /// Language whose dictionary is currently applied.
    pub fn current(&self) -> &str {
        &self.current
    }

    pub fn supported(&self) -> &[String] {
        &self.supported
    }

    /// Code of the switch still in flight, if any.
    pub fn pending(&self) -> Option<&str> {
        self.latest.as_ref().map(|r| r.code.as_str())
    }

    pub fn is_supported(&self, code: &str) -> bool {
        self.supported.iter().any(|s| s == code)
    }

    /// Language after the current (or pending) one, wrapping.
    pub fn next_code(&self) -> Option<&str> {
        if self.supported.is_empty() {
            return None;
        }
        let active = self.pending().unwrap_or(&self.current);
        let index = self
            .supported
            .iter()
            .position(|s| s == active)
            .map(|i| (i + 1) % self.supported.len())
            .unwrap_or(0);
        self.supported.get(index).map(String::as_str)
    }

    /// Start a switch to `code`. Supersedes any switch still in flight.
    pub fn request(&mut self, code: &str) -> Result<LocaleRequest> {
        if !self.is_supported(code) {
            return Err(Error::unsupported_language(code));
        }
        let request = LocaleRequest {
            seq: self.next_seq,
            code: code.to_string(),
        };
        self.next_seq += 1;
        self.latest = Some(request.clone());
        debug!("Language switch #{} to '{}'", request.seq, code);
        Ok(request)
    }

    fn is_latest(&self, seq: u64) -> bool {
        self.latest.as_ref().is_some_and(|r| r.seq == seq)
    }

    /// Apply the dictionary for switch `seq` if it is still the latest.
    ///
    /// Returns the number of nodes updated, or `None` for a stale response.
    pub fn complete(
        &mut self,
        seq: u64,
        dictionary: &LocaleDictionary,
        texts: &mut PageTexts,
    ) -> Option<usize> {
        if !self.is_latest(seq) {
            debug!("Dropping stale dictionary for switch #{}", seq);
            return None;
        }
        let request = self.latest.take()?;
        let updated = texts.apply(dictionary);
        self.current = request.code;
        info!(
            "Applied '{}' dictionary ({} of {} nodes)",
            self.current,
            updated,
            texts.nodes().len()
        );
        Some(updated)
    }

    /// Record a failed fetch. Current texts stay as they are.
    pub fn fail(&mut self, seq: u64, error: &str) -> bool {
        if !self.is_latest(seq) {
            return false;
        }
        if let Some(request) = self.latest.take() {
            warn!("Could not load '{}' dictionary: {}", request.code, error);
        }
        true
    }
}
