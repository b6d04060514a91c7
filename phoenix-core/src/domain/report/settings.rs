//! Report settings and their resolution from the external settings store.
//!
//! The store is a single named key holding a JSON blob, written by the
//! presentation layer. Resolution is deliberately un-memoized: every
//! synthesis request reads the blob again so a settings change during a
//! pending request can never leak stale configuration into the next one.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Key under which the presentation layer persists [`ReportSettings`].
pub const SETTINGS_KEY: &str = "phoenix_ai_settings";

/// External key-value settings collaborator.
pub trait SettingsStore: Send + Sync {
    fn read(&self, key: &str) -> Option<String>;
}

/// Session-scoped settings store backed by a map, for use where no external
/// persistence exists (and in tests).
#[derive(Debug, Clone, Default)]
pub struct InMemorySettingsStore {
    entries: HashMap<String, String>,
}

impl InMemorySettingsStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn write(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }
}

impl SettingsStore for InMemorySettingsStore {
    fn read(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportTone {
    Professional,
    Concise,
    Technical,
}

impl ReportTone {
    /// Fixed presentation-style phrase embedded in the prompt.
    pub fn style_phrase(&self) -> &'static str {
        match self {
            ReportTone::Professional => "Chuyên nghiệp và đầy đủ",
            ReportTone::Concise => "Ngắn gọn, đi thẳng vào vấn đề",
            ReportTone::Technical => "Kỹ thuật sâu, sử dụng thuật ngữ chuyên ngành",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReportLanguage {
    #[serde(rename = "vi")]
    Vi,
    #[serde(rename = "en")]
    En,
}

impl ReportLanguage {
    pub fn display_name(&self) -> &'static str {
        match self {
            ReportLanguage::Vi => "Tiếng Việt",
            ReportLanguage::En => "English",
        }
    }
}

/// What the generated report should emphasize and how it should read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSettings {
    pub risk_assessment: bool,
    pub resource_optimization: bool,
    pub progress_forecasting: bool,
    pub report_tone: ReportTone,
    pub language: ReportLanguage,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            risk_assessment: true,
            resource_optimization: false,
            progress_forecasting: true,
            report_tone: ReportTone::Professional,
            language: ReportLanguage::Vi,
        }
    }
}

impl ReportSettings {
    /// Resolves the current settings from the store.
    ///
    /// A missing key yields the defaults. So does an unreadable blob, as the
    /// whole default object rather than a partial merge: corrupt
    /// configuration must never block report generation.
    pub fn resolve(store: &impl SettingsStore) -> Self {
        match store.read(SETTINGS_KEY) {
            Some(raw) => serde_json::from_str(&raw).unwrap_or_else(|err| {
                warn!(%err, "stored report settings unreadable, falling back to defaults");
                Self::default()
            }),
            None => Self::default(),
        }
    }

    /// Enabled focus lines in their fixed order: risk, resources, forecasting.
    /// Disabled flags contribute nothing.
    pub fn focus_instructions(&self) -> Vec<&'static str> {
        let mut lines = Vec::new();
        if self.risk_assessment {
            lines.push(
                "- Đánh giá rủi ro: Xác định các mối nguy về an toàn, pháp lý hoặc tiến độ.",
            );
        }
        if self.resource_optimization {
            lines.push("- Tối ưu hóa nguồn lực: Phân tích hiệu quả sử dụng nhân công và vật tư.");
        }
        if self.progress_forecasting {
            lines.push(
                "- Dự báo tiến độ: Dự đoán ngày hoàn thành dựa trên tốc độ thi công hiện tại.",
            );
        }
        lines
    }
}
