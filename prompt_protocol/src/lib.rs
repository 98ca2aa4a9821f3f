use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// One prompt field. The first seven are context-specific categories; quality
/// draws from a pool shared by every context.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum FieldSpec {
    Medium,
    Style,
    Lighting,
    Camera,
    Material,
    Artist,
    Color,
    Quality,
}

impl FieldSpec {
    pub const ALL: [FieldSpec; 8] = [
        FieldSpec::Medium,
        FieldSpec::Style,
        FieldSpec::Lighting,
        FieldSpec::Camera,
        FieldSpec::Material,
        FieldSpec::Artist,
        FieldSpec::Color,
        FieldSpec::Quality,
    ];

    /// Category fields in composition order (quality excluded).
    pub const CATEGORIES: [FieldSpec; 7] = [
        FieldSpec::Medium,
        FieldSpec::Style,
        FieldSpec::Lighting,
        FieldSpec::Camera,
        FieldSpec::Material,
        FieldSpec::Artist,
        FieldSpec::Color,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FieldSpec::Medium => "medium",
            FieldSpec::Style => "style",
            FieldSpec::Lighting => "lighting",
            FieldSpec::Camera => "camera",
            FieldSpec::Material => "material",
            FieldSpec::Artist => "artist",
            FieldSpec::Color => "color",
            FieldSpec::Quality => "quality",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FieldSpec::Medium => "Medium",
            FieldSpec::Style => "Style",
            FieldSpec::Lighting => "Lighting",
            FieldSpec::Camera => "Camera",
            FieldSpec::Material => "Material",
            FieldSpec::Artist => "Artist",
            FieldSpec::Color => "Color",
            FieldSpec::Quality => "Quality",
        }
    }

    pub fn is_category(self) -> bool {
        !matches!(self, FieldSpec::Quality)
    }
}

impl fmt::Display for FieldSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldSpec {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        FieldSpec::ALL
            .into_iter()
            .find(|f| f.as_str().eq_ignore_ascii_case(t))
            .ok_or_else(|| format!("unknown field: {t:?}"))
    }
}

/// State of a single field: unset, a value from the catalog, or free text.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case", tag = "kind", content = "value")]
pub enum Selection {
    #[default]
    None,
    Catalog(String),
    Custom(String),
}

impl Selection {
    pub fn catalog(value: impl Into<String>) -> Self {
        Selection::Catalog(value.into())
    }

    pub fn custom(text: impl Into<String>) -> Self {
        Selection::Custom(text.into())
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Selection::None)
    }
}

static UNSET: Selection = Selection::None;

/// Per-field selections. Fields without an entry read as `Selection::None`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(transparent)]
pub struct Selections(BTreeMap<FieldSpec, Selection>);

impl Selections {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: FieldSpec) -> &Selection {
        self.0.get(&field).unwrap_or(&UNSET)
    }

    pub fn set(&mut self, field: FieldSpec, selection: Selection) {
        if selection.is_none() {
            self.0.remove(&field);
        } else {
            self.0.insert(field, selection);
        }
    }

    pub fn with(mut self, field: FieldSpec, selection: Selection) -> Self {
        self.set(field, selection);
        self
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Every field in fixed order, including unset ones.
    pub fn iter(&self) -> impl Iterator<Item = (FieldSpec, &Selection)> + '_ {
        FieldSpec::ALL.into_iter().map(move |f| (f, self.get(f)))
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum FormatMode {
    #[default]
    Standard,
    Natural,
}

impl FormatMode {
    pub fn as_str(self) -> &'static str {
        match self {
            FormatMode::Standard => "standard",
            FormatMode::Natural => "natural",
        }
    }
}

impl fmt::Display for FormatMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FormatMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "standard" | "std" | "list" => Ok(FormatMode::Standard),
            "natural" | "nl" | "prose" => Ok(FormatMode::Natural),
            other => Err(format!("unknown format mode: {other:?}")),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PromptRequest {
    pub subject: String,
    pub context: String,
    #[serde(default)]
    pub selections: Selections,
    #[serde(default)]
    pub format: FormatMode,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PromptResult {
    pub positive: String,
    pub negative: String,
}
