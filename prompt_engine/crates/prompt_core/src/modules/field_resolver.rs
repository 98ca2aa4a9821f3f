use crate::modules::protocol::Selection;

/// Turns a field's selection into the text it contributes, if any.
///
/// Catalog values are passed through untouched; membership in the active
/// context is the caller's job (see `PromptSession::select`). Custom text is
/// trimmed, and whitespace-only text counts as no selection.
pub struct FieldResolver;

impl FieldResolver {
    pub fn resolve(selection: &Selection) -> Option<&str> {
        match selection {
            Selection::None => None,
            Selection::Catalog(value) if value.is_empty() => None,
            Selection::Catalog(value) => Some(value.as_str()),
            Selection::Custom(text) => {
                let t = text.trim();
                if t.is_empty() {
                    None
                } else {
                    Some(t)
                }
            }
        }
    }
}
