use prompt_core::catalog::Context;
use prompt_core::protocol::{FieldSpec, Selection};
use prompt_core::{Catalog, DrawSource, Randomizer};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Replays scripted indices and records the range of every draw.
struct ScriptedSource {
    script: Vec<usize>,
    calls: Vec<usize>,
}

impl ScriptedSource {
    fn new(script: &[usize]) -> Self {
        Self {
            script: script.to_vec(),
            calls: Vec::new(),
        }
    }
}

impl DrawSource for ScriptedSource {
    fn draw_index(&mut self, len: usize) -> usize {
        let next = self.script.get(self.calls.len()).copied().unwrap_or(0);
        self.calls.push(len);
        next.min(len - 1)
    }
}

#[test]
fn draws_context_subject_categories_then_quality() {
    let catalog = Catalog::reference();
    // fantasy is the second context; then subject 2, then one index per field.
    let mut source = ScriptedSource::new(&[1, 2, 0, 1, 2, 3, 4, 0, 1, 5]);

    let draw = Randomizer::randomize(catalog, &mut source).unwrap();

    // Ranges: 5 contexts, 4 subjects, fantasy's seven category lists, 6 quality tags.
    assert_eq!(source.calls, vec![5, 4, 5, 6, 5, 4, 5, 4, 4, 6]);

    assert_eq!(draw.context, "fantasy");
    assert_eq!(draw.subject.as_deref(), Some("A warrior with a glowing sword"));
    let expect = [
        (FieldSpec::Medium, "Oil Painting"),
        (FieldSpec::Style, "Dark Souls Style"),
        (FieldSpec::Lighting, "Magical Aura"),
        (FieldSpec::Camera, "Dutch Angle"),
        (FieldSpec::Material, "Crystal"),
        (FieldSpec::Artist, "Greg Rutkowski"),
        (FieldSpec::Color, "Gold and Purple"),
        (FieldSpec::Quality, "Raw Photo"),
    ];
    for (field, value) in expect {
        assert_eq!(draw.selections.get(field), &Selection::catalog(value), "{field}");
    }
}

#[test]
fn no_subject_draw_when_pool_is_empty() {
    let one = |s: &str| vec![s.to_string()];
    let ctx = Context {
        key: "bare".to_string(),
        medium: one("Pencil"),
        style: one("Loose"),
        lighting: one("Daylight"),
        camera: one("Close-up"),
        material: one("Paper"),
        artist: one("Anonymous"),
        color: one("Grey"),
        subjects: Vec::new(),
    };
    let catalog = Catalog::new(vec![ctx], Vec::new(), "blurry").unwrap();
    let mut source = ScriptedSource::new(&[]);

    let draw = Randomizer::randomize(&catalog, &mut source).unwrap();

    // Context, then seven categories; no subject draw and no quality draw.
    assert_eq!(source.calls, vec![1, 1, 1, 1, 1, 1, 1, 1]);
    assert_eq!(draw.subject, None);
    assert_eq!(draw.selections.get(FieldSpec::Quality), &Selection::None);
    assert_eq!(draw.selections.get(FieldSpec::Color), &Selection::catalog("Grey"));
}

#[test]
fn seeded_rng_is_reproducible_and_in_catalog() {
    let catalog = Catalog::reference();
    let a = Randomizer::randomize(catalog, &mut StdRng::seed_from_u64(7)).unwrap();
    let b = Randomizer::randomize(catalog, &mut StdRng::seed_from_u64(7)).unwrap();
    assert_eq!(a, b);

    let subject = a.subject.as_deref().unwrap();
    assert!(catalog.subjects_for(&a.context).unwrap().iter().any(|s| s == subject));
    for (field, selection) in a.selections.iter() {
        let Selection::Catalog(value) = selection else {
            panic!("{field} not drawn from catalog: {selection:?}");
        };
        assert!(catalog.contains_option(&a.context, field, value).unwrap());
    }
}

#[test]
fn every_context_is_reachable() {
    let catalog = Catalog::reference();
    let mut rng = StdRng::seed_from_u64(42);
    let mut seen = std::collections::HashSet::new();
    for _ in 0..200 {
        seen.insert(Randomizer::randomize(catalog, &mut rng).unwrap().context);
    }
    assert_eq!(seen.len(), catalog.contexts().len());
}
