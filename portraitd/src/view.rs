//! Server-side views.
//!
//! A view is an HTML file with `{{ name }}` placeholders. Every placeholder
//! must have a slot; leftovers are a render error rather than silently
//! shipped to the browser.

use std::collections::BTreeMap;
use std::path::Path;

use portrait::config::STAGE_CONFIG_ELEMENT_ID;

use crate::config::ServerConfig;
use crate::error::ServerError;

pub const PORTRAIT_VIEW: &str = "portrait";

/// Value substituted for one placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Slot {
    /// HTML-escaped text, safe in element content and quoted attributes.
    Text(String),
    /// Inline JSON for a `<script type="application/json">` body.
    Json(String),
}

impl Slot {
    fn write_to(&self, out: &mut String) {
        match self {
            Slot::Text(text) => escape_html(text, out),
            // Only `</` can end a script element early.
            Slot::Json(json) => out.push_str(&json.replace("</", "<\\/")),
        }
    }
}

pub type Slots = BTreeMap<&'static str, Slot>;

#[derive(Debug, Clone)]
pub struct View {
    name: String,
    source: String,
}

impl View {
    pub fn new(name: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            source: source.into(),
        }
    }

    /// Read `<dir>/<name>.html`.
    pub fn load(dir: &Path, name: &str) -> Result<Self, ServerError> {
        let path = dir.join(format!("{name}.html"));
        let source = std::fs::read_to_string(&path)
            .map_err(|source| ServerError::Read { path, source })?;
        Ok(Self::new(name, source))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn render(&self, slots: &Slots) -> Result<String, ServerError> {
        let mut out = String::with_capacity(self.source.len() + 256);
        let mut rest = self.source.as_str();

        while let Some(open) = rest.find("{{") {
            out.push_str(&rest[..open]);
            let after_open = &rest[open + 2..];
            let close = after_open
                .find("}}")
                .ok_or_else(|| self.error("unterminated `{{` placeholder"))?;

            let key = after_open[..close].trim();
            let slot = slots
                .get(key)
                .ok_or_else(|| self.error(format!("no value for placeholder `{key}`")))?;
            slot.write_to(&mut out);

            rest = &after_open[close + 2..];
        }
        out.push_str(rest);
        Ok(out)
    }

    fn error(&self, reason: impl Into<String>) -> ServerError {
        ServerError::Render {
            view: self.name.clone(),
            reason: reason.into(),
        }
    }
}

/// Slots for the portrait view. The values are fixed for the lifetime of the
/// process; nothing comes from the request.
pub fn portrait_slots(config: &ServerConfig) -> Result<Slots, ServerError> {
    let stage_json = serde_json::to_string(&config.stage)?;

    let mut slots = Slots::new();
    slots.insert("title", Slot::Text(config.title.clone()));
    slots.insert("audio_id", Slot::Text(config.stage.audio_id.clone()));
    slots.insert("audio_src", Slot::Text(config.stage.audio_src.clone()));
    slots.insert(
        "container_class",
        Slot::Text(config.stage.container_class.clone()),
    );
    slots.insert("client_js", Slot::Text(config.client_js.clone()));
    slots.insert("stage_config_id", Slot::Text(STAGE_CONFIG_ELEMENT_ID.to_string()));
    slots.insert("stage_json", Slot::Json(stage_json));
    Ok(slots)
}

fn escape_html(text: &str, out: &mut String) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
}
