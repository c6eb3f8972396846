//! Integration tests for annotations and their appearance dictionaries.

use acroform_oxide::annotations::{AnnotationObject, AppearanceEntry};
use acroform_oxide::geometry::Rect;
use acroform_oxide::object::{Dictionary, Object, ObjectRef};
use acroform_oxide::{AnnotationFlags, AnnotationSubtype, DictionaryObject, Document, Error, FlagBitset};

/// Annotation with invisible, hidden and no_view set.
fn setup() -> (Document, ObjectRef) {
    let mut doc = Document::new();
    let mut annot = Dictionary::new();
    annot.insert("Type".to_string(), Object::name("Annot"));
    annot.insert("F".to_string(), Object::Integer(0b100011));
    let annot_ref = doc.add(Object::Dictionary(annot));
    (doc, annot_ref)
}

fn empty_stream() -> Object {
    Object::Stream {
        dict: Dictionary::new(),
        data: bytes::Bytes::new(),
    }
}

fn dict_of(entries: Vec<(&str, Object)>) -> Object {
    Object::Dictionary(
        entries
            .into_iter()
            .map(|(key, value)| (key.to_string(), value))
            .collect(),
    )
}

#[test]
fn test_annotation_must_be_indirect() {
    let (mut doc, annot_ref) = setup();
    let annot = doc.annotation(annot_ref).unwrap();
    assert!(annot.must_be_indirect());
}

#[test]
fn test_appearance_is_returned_verbatim() {
    let (mut doc, annot_ref) = setup();
    let mut annot = doc.annotation(annot_ref).unwrap();
    assert!(annot.appearance().is_none());
    annot.set("AP", Object::name("yes")).unwrap();
    assert_eq!(annot.appearance(), Some(&Object::name("yes")));
    // Not a dictionary, so nothing to resolve
    assert!(annot.normal_appearance().is_none());
}

#[test]
fn test_has_renderable_appearance() {
    let (mut doc, annot_ref) = setup();
    let mut annot = doc.annotation(annot_ref).unwrap();
    assert!(!annot.has_renderable_appearance());

    annot
        .set("AP", dict_of(vec![("N", Object::Dictionary(Dictionary::new()))]))
        .unwrap();
    assert!(!annot.has_renderable_appearance());

    annot.set("AP", dict_of(vec![("N", empty_stream())])).unwrap();
    assert!(annot.has_renderable_appearance());

    annot
        .set("AP", dict_of(vec![("N", dict_of(vec![("okay", empty_stream())]))]))
        .unwrap();
    assert!(annot.has_renderable_appearance());

    annot
        .set(
            "AP",
            dict_of(vec![(
                "N",
                dict_of(vec![("okay", empty_stream()), ("Off", Object::name("other"))]),
            )]),
        )
        .unwrap();
    assert!(!annot.has_renderable_appearance());

    // With a current state only that state matters
    annot.set_appearance_state("okay").unwrap();
    assert!(annot.has_renderable_appearance());
    annot.set_appearance_state("Off").unwrap();
    assert!(!annot.has_renderable_appearance());
}

#[test]
fn test_indirect_appearance_stream_is_resolved() {
    let (mut doc, annot_ref) = setup();
    let stream_ref = doc.add_stream(Dictionary::new(), b"q Q".to_vec());
    let mut annot = doc.annotation(annot_ref).unwrap();
    annot
        .set("AP", dict_of(vec![("N", Object::Reference(stream_ref))]))
        .unwrap();

    assert!(annot.has_renderable_appearance());
    match annot.normal_appearance() {
        Some(AppearanceEntry::Direct(stream)) => {
            assert_eq!(stream.stream_data(), Some(&b"q Q"[..]));
        },
        other => panic!("unexpected appearance {:?}", other),
    }
}

#[test]
fn test_rollover_and_down_fall_back_to_normal() {
    let (mut doc, annot_ref) = setup();
    let normal = doc.add_stream(Dictionary::new(), b"n".to_vec());
    let rollover = doc.add_stream(Dictionary::new(), b"r".to_vec());
    let down = doc.add_stream(Dictionary::new(), b"d".to_vec());
    let mut annot = doc.annotation(annot_ref).unwrap();
    annot
        .set(
            "AP",
            dict_of(vec![
                ("N", Object::Reference(normal)),
                ("R", Object::Reference(rollover)),
                ("D", Object::Reference(down)),
            ]),
        )
        .unwrap();

    let data = |entry: Option<AppearanceEntry<'_>>| {
        entry
            .and_then(|entry| entry.stream_for_state(None))
            .and_then(Object::stream_data)
            .map(<[u8]>::to_vec)
    };
    assert_eq!(data(annot.normal_appearance()), Some(b"n".to_vec()));
    assert_eq!(data(annot.rollover_appearance()), Some(b"r".to_vec()));
    assert_eq!(data(annot.down_appearance()), Some(b"d".to_vec()));

    annot
        .set("AP", dict_of(vec![("N", Object::Reference(normal))]))
        .unwrap();
    assert_eq!(data(annot.rollover_appearance()), Some(b"n".to_vec()));
    assert_eq!(data(annot.down_appearance()), Some(b"n".to_vec()));
}

#[test]
fn test_fallback_to_normal_depends_only_on_missing_entry() {
    let (mut doc, annot_ref) = setup();
    let rollover = doc.add_stream(Dictionary::new(), b"r".to_vec());
    let mut annot = doc.annotation(annot_ref).unwrap();

    annot
        .set("AP", dict_of(vec![("R", Object::Reference(rollover))]))
        .unwrap();
    let data = annot
        .rollover_appearance()
        .and_then(|entry| entry.stream_for_state(None))
        .and_then(Object::stream_data)
        .map(<[u8]>::to_vec);
    assert_eq!(data, Some(b"r".to_vec()));
    assert!(annot.normal_appearance().is_none());
    assert!(annot.down_appearance().is_none());

    annot.set("AP", dict_of(vec![])).unwrap();
    assert!(annot.normal_appearance().is_none());
    assert!(annot.rollover_appearance().is_none());
    assert!(annot.down_appearance().is_none());
}

#[test]
fn test_flags() {
    let (mut doc, annot_ref) = setup();
    let annot = doc.annotation(annot_ref).unwrap();
    assert_eq!(annot.flags(), vec!["invisible", "hidden", "no_view"]);
    assert!(annot.flagged("hidden").unwrap());
    assert!(!annot.flagged("locked").unwrap());
    assert!(annot.is_flagged(AnnotationFlags::INVISIBLE | AnnotationFlags::NO_VIEW));
}

#[test]
fn test_negative_flags_integer_has_no_flags() {
    let (mut doc, annot_ref) = setup();
    let mut annot = doc.annotation(annot_ref).unwrap();
    annot.set("F", Object::Integer(-1)).unwrap();
    assert!(annot.flags().is_empty());
    assert!(!annot.flagged("hidden").unwrap());

    annot.flag("print", false).unwrap();
    assert_eq!(annot.get("F"), Some(&Object::Integer(4)));
}

#[test]
fn test_flagged_rejects_unknown_name() {
    let (mut doc, annot_ref) = setup();
    let annot = doc.annotation(annot_ref).unwrap();
    assert!(matches!(annot.flagged("unknown"), Err(Error::UnknownFlagName(_))));
    assert!(matches!(annot.flagged("HIDDEN"), Err(Error::UnknownFlagName(_))));
}

#[test]
fn test_flag_and_unflag() {
    let (mut doc, annot_ref) = setup();
    let mut annot = doc.annotation(annot_ref).unwrap();
    annot.flag("locked", false).unwrap();
    assert_eq!(annot.flags(), vec!["invisible", "hidden", "no_view", "locked"]);

    annot.flag("locked", true).unwrap();
    assert_eq!(annot.flags(), vec!["locked"]);
    assert_eq!(annot.get("F"), Some(&Object::Integer(128)));

    annot.unflag("locked").unwrap();
    assert!(annot.flags().is_empty());
    assert_eq!(annot.get("F"), Some(&Object::Integer(0)));
}

#[test]
fn test_created_annotation_is_linked_to_page() {
    let mut doc = Document::new();
    let page = doc.add_page(Rect::new(0.0, 0.0, 612.0, 792.0)).unwrap();
    let annot_ref = doc
        .add_annotation(page, "Square", Rect::new(10.0, 20.0, 30.0, 40.0))
        .unwrap();
    assert_eq!(doc.page_annotations(page).unwrap(), vec![annot_ref]);

    let mut annot = doc.annotation(annot_ref).unwrap();
    assert_eq!(annot.subtype(), AnnotationSubtype::Square);
    assert_eq!(annot.rect(), Some(Rect::new(10.0, 20.0, 30.0, 40.0)));
    assert_eq!(annot.flags(), vec!["print"]);

    annot.set_contents("Größe").unwrap();
    assert_eq!(annot.contents().unwrap().as_deref(), Some("Größe"));
}
