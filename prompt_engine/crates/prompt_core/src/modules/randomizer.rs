use crate::modules::catalog::Catalog;
use crate::modules::error::PromptError;
use crate::modules::protocol::{FieldSpec, Selection, Selections};
use serde::Serialize;

/// Source of uniform index draws. Any `rand::Rng` works; tests plug in a
/// scripted source to check the draw order.
pub trait DrawSource {
    /// Returns an index in `0..len`. Never called with `len == 0`.
    fn draw_index(&mut self, len: usize) -> usize;
}

impl<R: rand::Rng + ?Sized> DrawSource for R {
    fn draw_index(&mut self, len: usize) -> usize {
        self.gen_range(0..len)
    }
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct RandomDraw {
    pub context: String,
    pub subject: Option<String>,
    pub selections: Selections,
}

pub struct Randomizer;

impl Randomizer {
    /// Draw order is fixed: context, subject (only when the context has
    /// suggestions), the seven category fields in composition order, quality.
    pub fn randomize<D: DrawSource + ?Sized>(
        catalog: &Catalog,
        source: &mut D,
    ) -> Result<RandomDraw, PromptError> {
        let keys = catalog.contexts();
        let Some(&context) = pick(source, &keys) else {
            return Err(PromptError::InvalidCatalog("no contexts defined".to_string()));
        };

        let subject = pick(source, catalog.subjects_for(context)?).cloned();

        let mut selections = Selections::new();
        for field in FieldSpec::ALL {
            let options = catalog.selectable_options(context, field)?;
            match pick(source, options) {
                Some(value) => selections.set(field, Selection::catalog(value.as_str())),
                None => log::warn!("context {context:?} has no {field} options; leaving it unset"),
            }
        }

        log::debug!(
            "randomized context={context} subject={subject:?} fields={}",
            selections.iter().filter(|(_, s)| !s.is_none()).count()
        );

        Ok(RandomDraw {
            context: context.to_string(),
            subject,
            selections,
        })
    }
}

fn pick<'a, T, D: DrawSource + ?Sized>(source: &mut D, values: &'a [T]) -> Option<&'a T> {
    if values.is_empty() {
        return None;
    }
    values.get(source.draw_index(values.len()))
}
