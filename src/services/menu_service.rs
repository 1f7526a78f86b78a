// ============================================================================
// MENU SERVICE - fetch with fallback
// ============================================================================
// remote (optional) -> menu-new.json -> menu.json (legacy, upgraded)
// One attempt per source, first success wins, no retries.
// ============================================================================

use gloo_net::http::Request;

use super::error::MenuLoadError;
use crate::config::AppConfig;
use crate::models::legacy::LegacyMenuDocument;
use crate::models::menu::MenuDocument;

/// A place a menu document can come from.
/// `Ok(None)` means "no data here", which is not a failure.
#[allow(async_fn_in_trait)]
pub trait MenuSource {
    fn name(&self) -> &str;
    async fn fetch(&self) -> Result<Option<MenuDocument>, MenuLoadError>;
}

/// GET `url` as text. `None` on 404 when `missing_is_empty`.
async fn get_text(url: &str, missing_is_empty: bool) -> Result<Option<String>, MenuLoadError> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| MenuLoadError::Network(e.to_string()))?;

    if missing_is_empty && response.status() == 404 {
        return Ok(None);
    }
    if !response.ok() {
        return Err(MenuLoadError::Http {
            status: response.status(),
            text: response.status_text(),
        });
    }

    response
        .text()
        .await
        .map(Some)
        .map_err(|e| MenuLoadError::Network(e.to_string()))
}

/// Rejects documents carrying a negative price so the next source is tried
fn checked(document: MenuDocument) -> Result<MenuDocument, MenuLoadError> {
    match document.first_invalid_price() {
        Some(item) => Err(MenuLoadError::Parse(format!("negative price on item {}", item.id))),
        None => Ok(document),
    }
}

pub fn parse_current(text: &str) -> Result<MenuDocument, MenuLoadError> {
    checked(serde_json::from_str(text)?)
}

pub fn parse_legacy(text: &str, restaurant_name: &str) -> Result<MenuDocument, MenuLoadError> {
    let legacy: LegacyMenuDocument = serde_json::from_str(text)?;
    checked(legacy.into_menu_document(restaurant_name))
}

/// Preferred source. Unconfigured or 404 means no data.
#[derive(Clone, Debug)]
pub struct RemoteMenuSource {
    url: Option<String>,
}

impl RemoteMenuSource {
    pub fn new(url: Option<String>) -> Self {
        Self { url }
    }
}

impl MenuSource for RemoteMenuSource {
    fn name(&self) -> &str {
        "remote"
    }

    async fn fetch(&self) -> Result<Option<MenuDocument>, MenuLoadError> {
        let Some(url) = self.url.as_deref() else {
            return Ok(None);
        };
        match get_text(url, true).await? {
            Some(text) => parse_current(&text).map(Some),
            None => Ok(None),
        }
    }
}

/// Bundled current-format file
#[derive(Clone, Debug)]
pub struct StaticMenuSource {
    path: String,
}

impl StaticMenuSource {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

impl MenuSource for StaticMenuSource {
    fn name(&self) -> &str {
        &self.path
    }

    async fn fetch(&self) -> Result<Option<MenuDocument>, MenuLoadError> {
        let text = get_text(&self.path, false).await?.ok_or(MenuLoadError::NoData)?;
        parse_current(&text).map(Some)
    }
}

/// Bundled legacy-format file, upgraded on the fly
#[derive(Clone, Debug)]
pub struct LegacyMenuSource {
    path: String,
    restaurant_name: String,
}

impl LegacyMenuSource {
    pub fn new(path: impl Into<String>, restaurant_name: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            restaurant_name: restaurant_name.into(),
        }
    }
}

impl MenuSource for LegacyMenuSource {
    fn name(&self) -> &str {
        &self.path
    }

    async fn fetch(&self) -> Result<Option<MenuDocument>, MenuLoadError> {
        let text = get_text(&self.path, false).await?.ok_or(MenuLoadError::NoData)?;
        parse_legacy(&text, &self.restaurant_name).map(Some)
    }
}

/// Tries each source once, in order. Only the last failure is returned,
/// wrapped in `AllSourcesExhausted`.
pub async fn load_menu<P, C, L>(primary: &P, current: &C, legacy: &L) -> Result<MenuDocument, MenuLoadError>
where
    P: MenuSource,
    C: MenuSource,
    L: MenuSource,
{
    match primary.fetch().await {
        Ok(Some(doc)) => {
            log::info!("✅ [MENU] Loaded from {}", primary.name());
            return Ok(doc);
        }
        Ok(None) => log::info!("📋 [MENU] {} has no data, using static files", primary.name()),
        Err(e) => log::warn!("⚠️ [MENU] {} unavailable: {}", primary.name(), e),
    }

    match current.fetch().await {
        Ok(Some(doc)) => {
            log::info!("✅ [MENU] Loaded from {}", current.name());
            return Ok(doc);
        }
        Ok(None) => log::warn!("⚠️ [MENU] {} returned no data, trying legacy format", current.name()),
        Err(e) => log::warn!("⚠️ [MENU] {} unavailable ({}), trying legacy format", current.name(), e),
    }

    match legacy.fetch().await {
        Ok(Some(doc)) => {
            log::info!("✅ [MENU] Loaded legacy menu from {} ({} categories)", legacy.name(), doc.menu.len());
            Ok(doc)
        }
        Ok(None) => Err(MenuLoadError::AllSourcesExhausted(Box::new(MenuLoadError::NoData))),
        Err(e) => {
            log::error!("❌ [MENU] {} unavailable: {}", legacy.name(), e);
            Err(MenuLoadError::AllSourcesExhausted(Box::new(e)))
        }
    }
}

/// The three configured sources
#[derive(Clone, Debug)]
pub struct MenuService {
    remote: RemoteMenuSource,
    current: StaticMenuSource,
    legacy: LegacyMenuSource,
}

impl MenuService {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            remote: RemoteMenuSource::new(config.menu_remote_url.clone()),
            current: StaticMenuSource::new(config.menu_data_path.clone()),
            legacy: LegacyMenuSource::new(config.legacy_menu_data_path.clone(), config.restaurant_name.clone()),
        }
    }

    pub async fn load(&self) -> Result<MenuDocument, MenuLoadError> {
        load_menu(&self.remote, &self.current, &self.legacy).await
    }
}
