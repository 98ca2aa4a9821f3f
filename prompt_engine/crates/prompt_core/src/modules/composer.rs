use crate::modules::catalog::Catalog;
use crate::modules::error::PromptError;
use crate::modules::field_resolver::FieldResolver;
use crate::modules::protocol::{FieldSpec, FormatMode, PromptRequest, PromptResult};

const SEPARATOR: &str = ", ";

/// Builds the positive prompt from a request; the negative prompt always comes
/// from the catalog.
pub struct Composer<'a> {
    catalog: &'a Catalog,
}

impl<'a> Composer<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    pub fn compose(&self, request: &PromptRequest) -> Result<PromptResult, PromptError> {
        let subject = request.subject.trim();
        if subject.is_empty() {
            return Err(PromptError::MissingSubject);
        }

        let mut parts: Vec<String> = Vec::with_capacity(FieldSpec::ALL.len() + 1);
        parts.push(subject.to_string());

        for field in FieldSpec::CATEGORIES {
            let Some(value) = FieldResolver::resolve(request.selections.get(field)) else {
                continue;
            };
            parts.push(match request.format {
                FormatMode::Standard => value.to_string(),
                FormatMode::Natural => natural_fragment(field, value),
            });
        }

        if let Some(quality) = FieldResolver::resolve(request.selections.get(FieldSpec::Quality)) {
            parts.push(quality.to_string());
        }

        let positive = parts.join(SEPARATOR);
        log::debug!("composed {} fragment(s) ({} mode)", parts.len(), request.format);

        Ok(PromptResult {
            positive,
            negative: self.catalog.default_negative_prompt().to_string(),
        })
    }
}

fn natural_fragment(field: FieldSpec, value: &str) -> String {
    match field {
        FieldSpec::Lighting => format!("with {value} lighting"),
        FieldSpec::Style => format!("in {value} style"),
        FieldSpec::Artist => format!("by {value}"),
        FieldSpec::Camera => format!("viewed from {value}"),
        _ => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::natural_fragment;
    use crate::modules::protocol::FieldSpec;

    #[test]
    fn natural_fragment_rewrites_only_four_fields() {
        assert_eq!(natural_fragment(FieldSpec::Lighting, "Moonlight"), "with Moonlight lighting");
        assert_eq!(natural_fragment(FieldSpec::Style, "Noir"), "in Noir style");
        assert_eq!(natural_fragment(FieldSpec::Artist, "Alan Lee"), "by Alan Lee");
        assert_eq!(natural_fragment(FieldSpec::Camera, "Fisheye"), "viewed from Fisheye");

        for field in [FieldSpec::Medium, FieldSpec::Material, FieldSpec::Color, FieldSpec::Quality] {
            assert_eq!(natural_fragment(field, "Velvet"), "Velvet");
        }
    }
}
