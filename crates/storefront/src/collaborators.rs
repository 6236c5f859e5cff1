//! External collaborators: cart, notifications, navigation.
//!
//! The pages only depend on these traits. A missing cart or notifier is a
//! normal runtime condition, so pages hold them as `Option` and check before
//! calling.

use std::sync::{Arc, Mutex};

use fairway_core::ProductReference;
use fairway_products::CartLine;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CartError {
    #[error("cart rejected the line: {0}")]
    Rejected(String),
}

/// The external cart the detail page hands lines to.
pub trait CartApi: Send + Sync {
    fn add_item(&self, line: CartLine) -> Result<(), CartError>;
}

/// Process-local cart. Adding a line whose id is already present bumps its
/// quantity instead of adding a second row.
#[derive(Debug, Default)]
pub struct InMemoryCart {
    lines: Mutex<Vec<CartLine>>,
}

impl InMemoryCart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<CartLine> {
        self.lines.lock().map(|lines| lines.clone()).unwrap_or_default()
    }
}

impl CartApi for InMemoryCart {
    fn add_item(&self, line: CartLine) -> Result<(), CartError> {
        let mut lines = self
            .lines
            .lock()
            .map_err(|_| CartError::Rejected("cart state is poisoned".to_string()))?;

        match lines.iter_mut().find(|existing| existing.id == line.id) {
            Some(existing) => existing.quantity += line.quantity,
            None => lines.push(line),
        }
        Ok(())
    }
}

/// Toast-style notifications.
pub trait Notifier: Send + Sync {
    fn success(&self, message: &str);
    fn warning(&self, message: &str);
    fn error(&self, message: &str);
}

/// Notifier that writes to the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn success(&self, message: &str) {
        tracing::info!(notification = "success", "{message}");
    }

    fn warning(&self, message: &str) {
        tracing::warn!(notification = "warning", "{message}");
    }

    fn error(&self, message: &str) {
        tracing::error!(notification = "error", "{message}");
    }
}

/// Optional notifier; without one, messages only reach the log at debug.
#[derive(Clone, Default)]
pub struct Notifications(Option<Arc<dyn Notifier>>);

impl Notifications {
    pub fn new(notifier: Option<Arc<dyn Notifier>>) -> Self {
        Self(notifier)
    }

    pub fn none() -> Self {
        Self(None)
    }

    pub fn success(&self, message: &str) {
        match &self.0 {
            Some(notifier) => notifier.success(message),
            None => tracing::debug!("no notifier for success: {message}"),
        }
    }

    pub fn warning(&self, message: &str) {
        match &self.0 {
            Some(notifier) => notifier.warning(message),
            None => tracing::debug!("no notifier for warning: {message}"),
        }
    }

    pub fn error(&self, message: &str) {
        match &self.0 {
            Some(notifier) => notifier.error(message),
            None => tracing::debug!("no notifier for error: {message}"),
        }
    }
}

/// Page location: read query parameters, go somewhere else.
pub trait Navigator: Send + Sync {
    fn query_param(&self, name: &str) -> Option<String>;
    fn navigate(&self, url: &str);
}

/// Navigator over a location string (`"producto.html?ref=AFG-P001"`).
#[derive(Debug, Default)]
pub struct LocationNavigator {
    location: Mutex<String>,
}

impl LocationNavigator {
    pub fn new(location: impl Into<String>) -> Self {
        Self {
            location: Mutex::new(location.into()),
        }
    }

    pub fn location(&self) -> String {
        self.location
            .lock()
            .map(|location| location.clone())
            .unwrap_or_default()
    }
}

impl Navigator for LocationNavigator {
    fn query_param(&self, name: &str) -> Option<String> {
        let location = self.location();
        let (_, query) = location.split_once('?')?;
        url::form_urlencoded::parse(query.as_bytes())
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.into_owned())
    }

    fn navigate(&self, url: &str) {
        tracing::info!(url, "navigating");
        if let Ok(mut location) = self.location.lock() {
            *location = url.to_string();
        }
    }
}

/// Link to the detail page of `reference`.
pub fn detail_url(detail_page: &str, reference: &ProductReference) -> String {
    let query = url::form_urlencoded::Serializer::new(String::new())
        .append_pair("ref", reference.as_str())
        .finish();
    format!("{detail_page}?{query}")
}
