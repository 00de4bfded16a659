mod common;

use common::Scratch;
use shelf_classifier::{
    ClassificationLabel, Content, EncodeError, ExemplarSet, Message, PromptLanguage,
    PromptTemplate, Role, build_messages, encode_image,
};

fn parts(message: &Message) -> &[shelf_classifier::ContentPart] {
    match message.content.as_ref() {
        Some(Content::Parts(parts)) => parts,
        other => panic!("expected content parts, got {other:?}"),
    }
}

#[test]
fn test_five_turns_in_fixed_role_order() {
    let scratch = Scratch::new();
    let exemplars = scratch.exemplars();
    let query = scratch.write("query.png", b"\x89PNG query");

    let messages = build_messages(&exemplars, &query, &PromptTemplate::default()).unwrap();

    let roles: Vec<Role> = messages.iter().map(|m| m.role).collect();
    assert_eq!(
        roles,
        vec![Role::System, Role::User, Role::User, Role::User, Role::User]
    );
    assert!(matches!(messages[0].content, Some(Content::Text(_))));
}

#[test]
fn test_exemplar_turns_pair_caption_with_image() {
    let scratch = Scratch::new();
    let exemplars = scratch.exemplars();
    let query = scratch.write("query.jpg", b"query");
    let template = PromptTemplate::bundled(PromptLanguage::En);

    let messages = build_messages(&exemplars, &query, &template).unwrap();

    for (turn, label) in messages[1..4].iter().zip([
        ClassificationLabel::Organized,
        ClassificationLabel::PartiallyOrganized,
        ClassificationLabel::Disorganized,
    ]) {
        let parts = parts(turn);
        assert_eq!(parts.len(), 2);
        assert_eq!(parts[0].as_text(), Some(template.caption(label)));

        let expected = encode_image(exemplars.get(label)).unwrap().data_url();
        assert_eq!(parts[1].as_image_url(), Some(expected.as_str()));
    }
}

#[test]
fn test_final_turn_carries_query_image() {
    let scratch = Scratch::new();
    let exemplars = scratch.exemplars();
    let query = scratch.write("query.png", b"\x89PNG the query");
    let template = PromptTemplate::default();

    let messages = build_messages(&exemplars, &query, &template).unwrap();
    let last = parts(&messages[4]);

    assert_eq!(last[0].as_text(), Some(&*template.query_instruction));

    let query_url = encode_image(&query).unwrap().data_url();
    assert_eq!(last[1].as_image_url(), Some(query_url.as_str()));
    assert!(query_url.starts_with("data:image/png;base64,"));

    for (_, path) in exemplars.iter() {
        let exemplar_url = encode_image(path).unwrap().data_url();
        assert_ne!(last[1].as_image_url(), Some(exemplar_url.as_str()));
    }
}

#[test]
fn test_system_turn_is_template_text() {
    let scratch = Scratch::new();
    let exemplars = scratch.exemplars();
    let query = scratch.write("q.jpg", b"q");
    let template = PromptTemplate::default();

    let messages = build_messages(&exemplars, &query, &template).unwrap();
    assert_eq!(messages[0].text().as_deref(), Some(&*template.system));
}

#[test]
fn test_identical_inputs_give_identical_output() {
    let scratch = Scratch::new();
    let exemplars = scratch.exemplars();
    let query = scratch.write("query.jpg", b"same bytes");
    let template = PromptTemplate::default();

    let first = build_messages(&exemplars, &query, &template).unwrap();
    let second = build_messages(&exemplars, &query, &template).unwrap();
    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn test_missing_query_aborts_build() {
    let scratch = Scratch::new();
    let exemplars = scratch.exemplars();
    let missing = scratch.missing("nope.jpg");

    let err = build_messages(&exemplars, &missing, &PromptTemplate::default()).unwrap_err();
    assert!(matches!(err, EncodeError::NotFound { ref path } if path == &missing));
}

#[test]
fn test_missing_exemplar_aborts_build() {
    let scratch = Scratch::new();
    let query = scratch.write("query.jpg", b"query");
    scratch.write("Organizado.jpg", b"o");
    scratch.write("Desorganizado.jpg", b"d");
    let exemplars = ExemplarSet::from_dir(scratch.path());

    let err = build_messages(&exemplars, &query, &PromptTemplate::default()).unwrap_err();
    assert_eq!(err.path(), exemplars.partial.as_path());
}

#[test]
fn test_wire_shape_of_exemplar_turn() {
    let scratch = Scratch::new();
    let exemplars = scratch.exemplars();
    let query = scratch.write("query.jpg", b"query");

    let messages = build_messages(&exemplars, &query, &PromptTemplate::default()).unwrap();
    let value = serde_json::to_value(&messages[1]).unwrap();

    assert_eq!(value["role"], "user");
    assert_eq!(value["content"][0]["type"], "text");
    assert_eq!(value["content"][1]["type"], "image_url");
    assert!(
        value["content"][1]["image_url"]["url"]
            .as_str()
            .unwrap()
            .starts_with("data:image/jpeg;base64,")
    );
}
