use prompt_core::protocol::{FieldSpec, FormatMode, Selection};
use prompt_core::{Catalog, PromptError, PromptSession};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn select_and_generate() {
    let mut s = PromptSession::new(Catalog::reference(), "SCIFI").unwrap();
    assert_eq!(s.context(), "scifi");

    s.set_subject("A rogue AI android");
    s.select(FieldSpec::Style, Selection::catalog("Cyberpunk")).unwrap();
    s.select(FieldSpec::Lighting, Selection::catalog("Neon Lights")).unwrap();
    s.select(FieldSpec::Quality, Selection::catalog("4k")).unwrap();

    assert_eq!(
        s.generate().unwrap().positive,
        "A rogue AI android, Cyberpunk, Neon Lights, 4k"
    );

    s.set_format(FormatMode::Natural);
    assert_eq!(
        s.generate().unwrap().positive,
        "A rogue AI android, in Cyberpunk style, with Neon Lights lighting, 4k"
    );
}

#[test]
fn rejects_values_from_another_context() {
    let mut s = PromptSession::new(Catalog::reference(), "photo").unwrap();
    let err = s
        .select(FieldSpec::Style, Selection::catalog("Cyberpunk"))
        .unwrap_err();
    assert!(matches!(
        err,
        PromptError::UnknownOption { field: FieldSpec::Style, ref value } if value == "Cyberpunk"
    ));
    assert_eq!(s.selection(FieldSpec::Style), &Selection::None);

    // Free text is never checked against the catalog.
    s.select(FieldSpec::Style, Selection::custom("Cyberpunk")).unwrap();
    assert_eq!(s.selection(FieldSpec::Style), &Selection::custom("Cyberpunk"));
}

#[test]
fn switching_context_resets_every_field() {
    let mut s = PromptSession::new(Catalog::reference(), "fantasy").unwrap();
    s.set_subject("An ancient dragon");
    s.select(FieldSpec::Medium, Selection::catalog("Watercolor")).unwrap();
    s.select(FieldSpec::Color, Selection::custom("emerald")).unwrap();
    s.select(FieldSpec::Quality, Selection::catalog("8k")).unwrap();

    s.load_context("horror").unwrap();

    assert_eq!(s.context(), "horror");
    assert!(s.selections().is_empty());
    assert_eq!(s.subject(), "An ancient dragon");
    assert_eq!(s.generate().unwrap().positive, "An ancient dragon");
}

#[test]
fn unknown_context_leaves_state_alone() {
    assert!(matches!(
        PromptSession::new(Catalog::reference(), "western"),
        Err(PromptError::UnknownContext(_))
    ));

    let mut s = PromptSession::new(Catalog::reference(), "arch").unwrap();
    s.select(FieldSpec::Material, Selection::catalog("Marble")).unwrap();
    assert!(s.load_context("western").is_err());
    assert_eq!(s.context(), "arch");
    assert_eq!(s.selection(FieldSpec::Material), &Selection::catalog("Marble"));
}

#[test]
fn randomize_fills_everything() {
    let catalog = Catalog::reference();
    let mut s = PromptSession::new(catalog, "scifi").unwrap();
    s.select(FieldSpec::Artist, Selection::custom("nobody")).unwrap();

    let draw = s.randomize(&mut StdRng::seed_from_u64(3)).unwrap();

    assert_eq!(s.context(), draw.context);
    assert_eq!(Some(s.subject()), draw.subject.as_deref());
    assert_eq!(s.selections(), &draw.selections);
    for field in FieldSpec::ALL {
        assert!(matches!(s.selection(field), Selection::Catalog(_)), "{field}");
    }

    let out = s.generate().unwrap();
    assert!(out.positive.starts_with(s.subject()));
    assert_eq!(out.positive.split(", ").count(), 1 + FieldSpec::ALL.len());
}

#[test]
fn request_snapshot() {
    let mut s = PromptSession::new(Catalog::reference(), "photo").unwrap();
    s.set_subject("A rainy city street");
    s.select(FieldSpec::Camera, Selection::catalog("35mm Lens")).unwrap();
    let req = s.request();
    assert_eq!(req.context, "photo");
    assert_eq!(req.subject, "A rainy city street");
    assert_eq!(req.selections.get(FieldSpec::Camera), &Selection::catalog("35mm Lens"));
    assert_eq!(req.format, FormatMode::Standard);
}
