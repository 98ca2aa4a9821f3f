use crate::modules::error::PromptError;
use crate::modules::protocol::FieldSpec;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use std::sync::OnceLock;

pub const DEFAULT_NEGATIVE_PROMPT: &str =
    "blurry, low quality, watermark, text, signature, bad anatomy, deformed";

pub const QUALITY_OPTIONS: &[&str] = &[
    "4k",
    "8k",
    "High Detail",
    "Masterpiece",
    "Trending on ArtStation",
    "Raw Photo",
];

#[derive(Clone, Copy)]
struct ContextDef {
    key: &'static str,
    medium: &'static [&'static str],
    style: &'static [&'static str],
    lighting: &'static [&'static str],
    camera: &'static [&'static str],
    material: &'static [&'static str],
    artist: &'static [&'static str],
    color: &'static [&'static str],
    subjects: &'static [&'static str],
}

const REFERENCE_CONTEXTS: &[ContextDef] = &[
    ContextDef {
        key: "scifi",
        medium: &["Digital Painting", "3D Render", "Unreal Engine 5", "Concept Art", "Blueprint", "Matte Painting"],
        style: &["Cyberpunk", "Biomechanical", "Retro-Futurism", "Hard Surface", "Post-Apocalyptic", "Solarpunk"],
        lighting: &["Neon Lights", "Bioluminescence", "Holographic Glow", "Cold Sterile Light", "Volumetric Fog"],
        camera: &["Wide Angle", "Isometric", "Drone View", "Macro Detail", "Cinematic Shot"],
        material: &["Brushed Steel", "Carbon Fiber", "Translucent Polymer", "Rusty Metal", "Chrome"],
        artist: &["Syd Mead", "H.R. Giger", "Simon Stålenhag", "Beeple"],
        color: &["Cyan and Magenta", "Orange and Teal", "Monochrome Green", "High Contrast Black & White"],
        subjects: &["A rogue AI android", "A massive space station", "A cybernetic tiger", "A futuristic racer"],
    },
    ContextDef {
        key: "fantasy",
        medium: &["Oil Painting", "Watercolor", "Ink Drawing", "Fantasy Illustration", "Tapestry Style"],
        style: &["High Fantasy", "Dark Souls Style", "Ethereal", "Grimdark", "Studio Ghibli", "D&D Art"],
        lighting: &["God Rays", "Candlelight", "Magical Aura", "Moonlight", "Firelight"],
        camera: &["Low Angle (Heroic)", "Portrait", "Landscape Panorama", "Dutch Angle"],
        material: &["Worn Leather", "Damascus Steel", "Velvet", "Stone and Moss", "Crystal"],
        artist: &["Greg Rutkowski", "Frank Frazetta", "Yoshitaka Amano", "Alan Lee"],
        color: &["Earth Tones", "Gold and Purple", "Blood Red", "Pastel Dream"],
        subjects: &["An ancient dragon", "A hidden elven temple", "A warrior with a glowing sword", "A magical potion shop"],
    },
    ContextDef {
        key: "photo",
        medium: &["Photography", "Polaroid", "Editorial Shot", "Candid Shot"],
        style: &["Photorealistic", "Cinematic", "Noir", "Vintage 1980s", "Minimalist"],
        lighting: &["Golden Hour", "Studio Softbox", "Rembrandt Lighting", "Natural Light", "Flash Photography"],
        camera: &["85mm Lens", "35mm Lens", "Bokeh Depth of Field", "Fisheye", "Macro Lens"],
        material: &["Skin Texture", "Fabric Detail", "Realistic Water", "Dust Particles"],
        artist: &["Annie Leibovitz", "Steve McCurry", "Ansel Adams"],
        color: &["Kodak Portra 400", "Black and White", "Desaturated", "Warm Tones"],
        subjects: &["A portrait of an old sailor", "A rainy city street", "A woman in a red dress", "A vintage car"],
    },
    ContextDef {
        key: "arch",
        medium: &["Architectural Photography", "ArchViz Render", "Floor Plan"],
        style: &["Brutalism", "Mid-Century Modern", "Bauhaus", "Industrial", "Scandinavian"],
        lighting: &["Natural Window Light", "Warm Interior Lights", "Sunset", "Overcast Soft"],
        camera: &["2-Point Perspective", "Wide Angle Interior", "Aerial View"],
        material: &["Concrete", "Mahogany Wood", "Marble", "Exposed Brick", "Glass"],
        artist: &["Zaha Hadid Style", "Frank Lloyd Wright Style"],
        color: &["Neutral Beiges", "White on White", "Dark Moody"],
        subjects: &["A modern glass mansion", "An abandoned factory", "A cozy wooden cabin", "A futuristic library"],
    },
    ContextDef {
        key: "horror",
        medium: &["Found Footage", "Oil Painting", "Grainy Photo", "Charcoal Sketch"],
        style: &["Lovecraftian", "Body Horror", "Liminal Space", "Gothic"],
        lighting: &["Single Light Source", "Flickering Light", "Pitch Black shadows", "Red Emergency Light"],
        camera: &["Dutch Angle", "Security Camera", "Blurry Motion"],
        material: &["Viscera", "Rusted Metal", "Rotting Wood", "Fog"],
        artist: &["Zdzisław Beksiński", "Junji Ito"],
        color: &["Desaturated Green", "Blood Red", "Sepia", "Void Black"],
        subjects: &["A haunted asylum", "A monster in the mist", "A creepy doll", "A dark ritual"],
    },
];

fn owned(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

/// A named theme: seven category option lists plus suggested subjects.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Context {
    pub key: String,
    pub medium: Vec<String>,
    pub style: Vec<String>,
    pub lighting: Vec<String>,
    pub camera: Vec<String>,
    pub material: Vec<String>,
    pub artist: Vec<String>,
    pub color: Vec<String>,
    #[serde(default)]
    pub subjects: Vec<String>,
}

impl Context {
    fn from_def(def: &ContextDef) -> Self {
        Self {
            key: def.key.to_string(),
            medium: owned(def.medium),
            style: owned(def.style),
            lighting: owned(def.lighting),
            camera: owned(def.camera),
            material: owned(def.material),
            artist: owned(def.artist),
            color: owned(def.color),
            subjects: owned(def.subjects),
        }
    }

    /// Options for a category field; `None` for quality.
    pub fn options(&self, field: FieldSpec) -> Option<&[String]> {
        let list = match field {
            FieldSpec::Medium => &self.medium,
            FieldSpec::Style => &self.style,
            FieldSpec::Lighting => &self.lighting,
            FieldSpec::Camera => &self.camera,
            FieldSpec::Material => &self.material,
            FieldSpec::Artist => &self.artist,
            FieldSpec::Color => &self.color,
            FieldSpec::Quality => return None,
        };
        Some(list.as_slice())
    }
}

/// On-disk catalog document.
#[derive(Serialize, Deserialize, Debug, Clone)]
struct CatalogFile {
    #[serde(default = "default_negative_prompt")]
    negative_prompt: String,
    quality: Vec<String>,
    contexts: Vec<Context>,
}

fn default_negative_prompt() -> String {
    DEFAULT_NEGATIVE_PROMPT.to_string()
}

/// Read-only table of contexts, the shared quality pool and the negative prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    contexts: Vec<Context>,
    quality: Vec<String>,
    negative_prompt: String,
}

static REFERENCE: OnceLock<Catalog> = OnceLock::new();

impl Catalog {
    /// Builds and validates a catalog. Context order is kept as given.
    pub fn new(
        contexts: Vec<Context>,
        quality: Vec<String>,
        negative_prompt: impl Into<String>,
    ) -> Result<Self, PromptError> {
        let catalog = Self {
            contexts,
            quality,
            negative_prompt: negative_prompt.into(),
        };
        catalog.validate()?;
        Ok(catalog)
    }

    /// The built-in five-context catalog, built on first use.
    pub fn reference() -> &'static Catalog {
        REFERENCE.get_or_init(|| {
            log::debug!("initializing reference catalog ({} contexts)", REFERENCE_CONTEXTS.len());
            Catalog {
                contexts: REFERENCE_CONTEXTS.iter().map(Context::from_def).collect(),
                quality: owned(QUALITY_OPTIONS),
                negative_prompt: DEFAULT_NEGATIVE_PROMPT.to_string(),
            }
        })
    }

    pub fn from_json_str(raw: &str) -> Result<Self, PromptError> {
        let file: CatalogFile = serde_json::from_str(raw)?;
        Self::new(file.contexts, file.quality, file.negative_prompt)
    }

    pub fn load(path: &Path) -> Result<Self, PromptError> {
        let raw = std::fs::read_to_string(path).map_err(|source| PromptError::CatalogIo {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_json_str(&raw)?;
        log::debug!(
            "loaded catalog from {} ({} contexts)",
            path.display(),
            catalog.contexts.len()
        );
        Ok(catalog)
    }

    pub fn to_json_string(&self) -> Result<String, PromptError> {
        let file = CatalogFile {
            negative_prompt: self.negative_prompt.clone(),
            quality: self.quality.clone(),
            contexts: self.contexts.clone(),
        };
        Ok(serde_json::to_string_pretty(&file)?)
    }

    fn validate(&self) -> Result<(), PromptError> {
        if self.contexts.is_empty() {
            return Err(PromptError::InvalidCatalog("no contexts defined".to_string()));
        }

        let mut keys = HashSet::new();
        for ctx in &self.contexts {
            let key = normalize_key(&ctx.key);
            if key.is_empty() {
                return Err(PromptError::InvalidCatalog("blank context key".to_string()));
            }
            if !keys.insert(key) {
                return Err(PromptError::InvalidCatalog(format!(
                    "duplicate context key {:?}",
                    ctx.key
                )));
            }
            for field in FieldSpec::CATEGORIES {
                let options = ctx.options(field).unwrap_or_default();
                if options.is_empty() {
                    return Err(PromptError::InvalidCatalog(format!(
                        "context {:?} has no {field} options",
                        ctx.key
                    )));
                }
                check_options(options, &format!("{field} in context {:?}", ctx.key))?;
            }
        }

        check_options(&self.quality, "quality")
    }

    /// Context keys in definition order.
    pub fn contexts(&self) -> Vec<&str> {
        self.contexts.iter().map(|c| c.key.as_str()).collect()
    }

    pub fn context(&self, key: &str) -> Result<&Context, PromptError> {
        let wanted = normalize_key(key);
        self.contexts
            .iter()
            .find(|c| normalize_key(&c.key) == wanted)
            .ok_or_else(|| PromptError::UnknownContext(key.to_string()))
    }

    pub fn has_context(&self, key: &str) -> bool {
        self.context(key).is_ok()
    }

    pub fn options_for(&self, key: &str, field: FieldSpec) -> Result<&[String], PromptError> {
        let ctx = self.context(key)?;
        ctx.options(field).ok_or(PromptError::UnknownField(field))
    }

    pub fn quality_options(&self) -> &[String] {
        &self.quality
    }

    pub fn subjects_for(&self, key: &str) -> Result<&[String], PromptError> {
        Ok(&self.context(key)?.subjects)
    }

    pub fn default_negative_prompt(&self) -> &str {
        &self.negative_prompt
    }

    /// Options a field can take in a context, quality included.
    pub fn selectable_options(&self, key: &str, field: FieldSpec) -> Result<&[String], PromptError> {
        match field {
            FieldSpec::Quality => {
                self.context(key)?;
                Ok(self.quality_options())
            }
            _ => self.options_for(key, field),
        }
    }

    pub fn contains_option(
        &self,
        key: &str,
        field: FieldSpec,
        value: &str,
    ) -> Result<bool, PromptError> {
        Ok(self
            .selectable_options(key, field)?
            .iter()
            .any(|o| o == value))
    }
}

fn normalize_key(key: &str) -> String {
    key.trim().to_ascii_lowercase()
}

fn check_options(options: &[String], what: &str) -> Result<(), PromptError> {
    let mut seen = HashSet::new();
    for o in options {
        if o.trim().is_empty() {
            return Err(PromptError::InvalidCatalog(format!("blank option in {what}")));
        }
        if !seen.insert(o.as_str()) {
            return Err(PromptError::InvalidCatalog(format!(
                "duplicate option {o:?} in {what}"
            )));
        }
    }
    Ok(())
}
