use chrono::{TimeZone, Utc};
use panote_core::{Alignment, Draft, FormatToken, Formatting, Note};

fn sample_note() -> Note {
    Note {
        id: 7,
        title: "Meeting notes".to_string(),
        content: "agenda items".to_string(),
        created_at: Utc.with_ymd_and_hms(2024, 5, 1, 9, 30, 0).unwrap(),
    }
}

#[test]
fn from_tokens_mixes_styles_with_one_alignment() {
    let formatting = Formatting::from_tokens(&[
        FormatToken::Bold,
        FormatToken::Underline,
        FormatToken::Center,
    ]);

    assert_eq!(
        formatting,
        Formatting {
            bold: true,
            italic: false,
            underline: true,
            align: Alignment::Center,
        }
    );
}

#[test]
fn from_tokens_defaults_alignment_to_left() {
    let formatting = Formatting::from_tokens(&[FormatToken::Italic]);
    assert_eq!(formatting.align, Alignment::Left);
    assert!(formatting.italic);
}

#[test]
fn empty_token_set_means_unstyled() {
    assert_eq!(Formatting::from_tokens(&[]), Formatting::default());
}

#[test]
fn active_tokens_round_trips_through_from_tokens() {
    let formatting = Formatting {
        bold: true,
        italic: true,
        underline: false,
        align: Alignment::Right,
    };

    let tokens = formatting.active_tokens();
    assert_eq!(
        tokens,
        [FormatToken::Bold, FormatToken::Italic, FormatToken::Right]
    );
    assert_eq!(Formatting::from_tokens(&tokens), formatting);
}

#[test]
fn token_names_parse_back_to_themselves() {
    let all = [
        FormatToken::Bold,
        FormatToken::Italic,
        FormatToken::Underline,
        FormatToken::Left,
        FormatToken::Center,
        FormatToken::Right,
    ];
    for token in all {
        assert_eq!(FormatToken::parse(token.as_str()), Some(token));
    }
    assert_eq!(FormatToken::parse("strikethrough"), None);
}

#[test]
fn for_note_seeds_fields_and_resets_formatting() {
    let note = sample_note();
    let draft = Draft::for_note(&note);

    assert_eq!(draft.id, Some(note.id));
    assert_eq!(draft.title, note.title);
    assert_eq!(draft.content, note.content);
    assert_eq!(draft.formatting, Formatting::default());
    assert!(draft.is_update());
}

#[test]
fn new_draft_is_blank_create() {
    let draft = Draft::new();
    assert_eq!(draft.id, None);
    assert!(draft.title.is_empty());
    assert!(draft.content.is_empty());
    assert!(!draft.is_update());
}

#[test]
fn append_transcript_space_separates_existing_content() {
    let mut draft = Draft::new();

    draft.append_transcript("hello");
    assert_eq!(draft.content, "hello");

    draft.content = "foo".to_string();
    draft.append_transcript("hello");
    assert_eq!(draft.content, "foo hello");
}

#[test]
fn draft_serialization_uses_expected_wire_fields() {
    let mut draft = Draft::for_note(&sample_note());
    draft.formatting = Formatting::from_tokens(&[FormatToken::Bold, FormatToken::Center]);

    let json = serde_json::to_value(&draft).unwrap();
    assert_eq!(json["id"], 7);
    assert_eq!(json["title"], "Meeting notes");
    assert_eq!(json["content"], "agenda items");
    assert_eq!(json["formatting"]["bold"], true);
    assert_eq!(json["formatting"]["italic"], false);
    assert_eq!(json["formatting"]["underline"], false);
    assert_eq!(json["formatting"]["align"], "center");

    let decoded: Draft = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, draft);
}

#[test]
fn note_serialization_round_trips() {
    let note = sample_note();
    let json = serde_json::to_value(&note).unwrap();
    assert_eq!(json["id"], 7);
    assert_eq!(json["title"], "Meeting notes");

    let decoded: Note = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, note);
}
