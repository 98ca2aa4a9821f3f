use prompt_core::protocol::{FieldSpec, FormatMode};
use prompt_core::Catalog;
use std::borrow::Cow;
use std::path::{Path, PathBuf};

pub const CATALOG_ENV: &str = "PROMPT_CATALOG";
pub const FORMAT_ENV: &str = "PROMPT_FORMAT";

/// `--catalog` wins over `PROMPT_CATALOG`; neither means the built-in catalog.
pub fn catalog_path(flag: Option<PathBuf>) -> Option<PathBuf> {
    flag.or_else(|| {
        std::env::var(CATALOG_ENV)
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .map(PathBuf::from)
    })
}

pub fn load_catalog(path: Option<&Path>) -> anyhow::Result<Cow<'static, Catalog>> {
    match path {
        Some(p) => {
            tracing::info!("using catalog {}", p.display());
            Ok(Cow::Owned(Catalog::load(p)?))
        }
        None => Ok(Cow::Borrowed(Catalog::reference())),
    }
}

pub fn format_mode(flag: Option<FormatMode>) -> FormatMode {
    if let Some(f) = flag {
        return f;
    }
    let Ok(raw) = std::env::var(FORMAT_ENV) else {
        return FormatMode::default();
    };
    parse_format_env(&raw)
}

fn parse_format_env(raw: &str) -> FormatMode {
    match raw.parse::<FormatMode>() {
        Ok(f) => f,
        Err(e) => {
            tracing::warn!("{FORMAT_ENV}: {e}, falling back to standard");
            FormatMode::default()
        }
    }
}

/// Parses `field=value` as used by `--pick` and `--custom`.
pub fn parse_assignment(raw: &str) -> Result<(FieldSpec, String), String> {
    let (field, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected FIELD=VALUE, got {raw:?}"))?;
    let field: FieldSpec = field.parse()?;
    Ok((field, value.to_string()))
}
