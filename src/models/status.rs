use serde::Serialize;
use std::collections::HashMap;

/// Color used for any status label that has no entry in the map
pub const FALLBACK_COLOR: &str = "#A9A9A9";

/// The six status labels the dashboard knows how to color
///
/// Status values in the data are free text; this enum only names the subset
/// that ships with a default color. Anything else is still counted and shown,
/// it just resolves to the fallback color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum KnownStatus {
    OnSchedule,
    Delayed,
    Critical,
    Paused,
    Completed,
    InProgress,
}

impl KnownStatus {
    pub const ALL: [KnownStatus; 6] = [
        KnownStatus::OnSchedule,
        KnownStatus::Delayed,
        KnownStatus::Critical,
        KnownStatus::Paused,
        KnownStatus::Completed,
        KnownStatus::InProgress,
    ];

    /// Label as it appears in the project export
    pub fn data_label(&self) -> &'static str {
        match self {
            KnownStatus::OnSchedule => "em dia",
            KnownStatus::Delayed => "atrasado",
            KnownStatus::Critical => "critico",
            KnownStatus::Paused => "pausado",
            KnownStatus::Completed => "concluido",
            KnownStatus::InProgress => "andamento",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            KnownStatus::OnSchedule => "on-schedule",
            KnownStatus::Delayed => "delayed",
            KnownStatus::Critical => "critical",
            KnownStatus::Paused => "paused",
            KnownStatus::Completed => "completed",
            KnownStatus::InProgress => "in-progress",
        }
    }

    pub fn default_color(&self) -> &'static str {
        match self {
            KnownStatus::OnSchedule => "#2E8B57",
            KnownStatus::Delayed => "#FF8C00",
            KnownStatus::Critical => "#DC143C",
            KnownStatus::Paused => "#708090",
            KnownStatus::Completed => "#4682B4",
            KnownStatus::InProgress => "#3CB371",
        }
    }
}

/// Status label -> display color, with a fallback for unmapped labels
///
/// Lookup is exact string match; no case or whitespace folding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusColorMap {
    colors: HashMap<String, String>,
    fallback: String,
}

impl StatusColorMap {
    /// An empty map: every status resolves to the fallback
    pub fn empty() -> Self {
        Self {
            colors: HashMap::new(),
            fallback: FALLBACK_COLOR.to_string(),
        }
    }

    pub fn set(&mut self, status: impl Into<String>, color: impl Into<String>) {
        self.colors.insert(status.into(), color.into());
    }

    pub fn set_fallback(&mut self, color: impl Into<String>) {
        self.fallback = color.into();
    }

    /// Color used for unmapped statuses
    pub(crate) fn fallback(&self) -> &str {
        &self.fallback
    }

    /// Color for a status, if it is mapped
    pub fn get(&self, status: &str) -> Option<&str> {
        self.colors.get(status).map(String::as_str)
    }

    /// Color for a status, falling back when unmapped
    pub fn resolve(&self, status: &str) -> &str {
        self.get(status).unwrap_or(&self.fallback)
    }
}

impl Default for StatusColorMap {
    fn default() -> Self {
        let mut map = Self::empty();
        for status in KnownStatus::ALL {
            map.set(status.data_label(), status.default_color());
            map.set(status.as_str(), status.default_color());
        }
        map
    }
}

/// Check a `#RRGGBB` color literal
pub fn is_hex_color(value: &str) -> bool {
    value.len() == 7
        && value.starts_with('#')
        && value[1..].chars().all(|c| c.is_ascii_hexdigit())
}
