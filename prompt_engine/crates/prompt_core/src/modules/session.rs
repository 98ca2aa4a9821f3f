use crate::modules::catalog::Catalog;
use crate::modules::composer::Composer;
use crate::modules::error::PromptError;
use crate::modules::protocol::{
    FieldSpec, FormatMode, PromptRequest, PromptResult, Selection, Selections,
};
use crate::modules::randomizer::{DrawSource, RandomDraw, Randomizer};

/// Editable prompt state on top of a catalog: active context, subject,
/// per-field selections and output format.
#[derive(Debug, Clone)]
pub struct PromptSession<'a> {
    catalog: &'a Catalog,
    context: String,
    subject: String,
    selections: Selections,
    format: FormatMode,
}

impl<'a> PromptSession<'a> {
    pub fn new(catalog: &'a Catalog, context: &str) -> Result<Self, PromptError> {
        let key = catalog.context(context)?.key.clone();
        Ok(Self {
            catalog,
            context: key,
            subject: String::new(),
            selections: Selections::new(),
            format: FormatMode::default(),
        })
    }

    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    pub fn context(&self) -> &str {
        &self.context
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn format(&self) -> FormatMode {
        self.format
    }

    pub fn selection(&self, field: FieldSpec) -> &Selection {
        self.selections.get(field)
    }

    pub fn selections(&self) -> &Selections {
        &self.selections
    }

    /// Switches context. Every field goes back to `None`, custom text included,
    /// since option lists differ per context.
    pub fn load_context(&mut self, context: &str) -> Result<(), PromptError> {
        let key = self.catalog.context(context)?.key.clone();
        self.context = key;
        self.selections.clear();
        Ok(())
    }

    pub fn set_subject(&mut self, subject: impl Into<String>) {
        self.subject = subject.into();
    }

    pub fn set_format(&mut self, format: FormatMode) {
        self.format = format;
    }

    pub fn select(&mut self, field: FieldSpec, selection: Selection) -> Result<(), PromptError> {
        if let Selection::Catalog(value) = &selection {
            if !self.catalog.contains_option(&self.context, field, value)? {
                return Err(PromptError::UnknownOption {
                    field,
                    value: value.clone(),
                });
            }
        }
        self.selections.set(field, selection);
        Ok(())
    }

    /// Randomizes context, subject and every field. The current subject is
    /// kept when the drawn context has no subject suggestions.
    pub fn randomize<D: DrawSource + ?Sized>(
        &mut self,
        source: &mut D,
    ) -> Result<RandomDraw, PromptError> {
        let draw = Randomizer::randomize(self.catalog, source)?;
        self.load_context(&draw.context)?;
        if let Some(subject) = &draw.subject {
            self.subject = subject.clone();
        }
        for (field, selection) in draw.selections.iter() {
            self.select(field, selection.clone())?;
        }
        Ok(draw)
    }

    pub fn request(&self) -> PromptRequest {
        PromptRequest {
            subject: self.subject.clone(),
            context: self.context.clone(),
            selections: self.selections.clone(),
            format: self.format,
        }
    }

    pub fn generate(&self) -> Result<PromptResult, PromptError> {
        Composer::new(self.catalog).compose(&self.request())
    }
}
