use quartermaster_bot::interactions::ids::{component_id, CustomId};

#[test]
fn parse_three_segments() {
    let cid = CustomId::parse("multi:add:abc123").expect("should parse");
    assert_eq!(cid.route, "multi");
    assert_eq!(cid.action, "add");
    assert_eq!(cid.token, "abc123");
    assert_eq!(cid.extra, None);
}

#[test]
fn parse_with_extra() {
    let cid = CustomId::parse("wish:remove:tok:7").expect("should parse");
    assert_eq!(cid.extra.as_deref(), Some("7"));
}

#[test]
fn extra_keeps_embedded_colons() {
    // Only the first three separators split; the tail is opaque.
    let cid = CustomId::parse("a:b:c:d:e").expect("should parse");
    assert_eq!(cid.extra.as_deref(), Some("d:e"));
}

#[test]
fn parse_rejects_incomplete_ids() {
    assert!(CustomId::parse("").is_none());
    assert!(CustomId::parse("multi").is_none());
    assert!(CustomId::parse("multi:add").is_none());
    assert!(CustomId::parse("multi::tok").is_none());
    assert!(CustomId::parse(":add:tok").is_none());
    assert!(CustomId::parse("multi:add:").is_none());
}

#[test]
fn encode_round_trips() {
    let original = CustomId::with_extra("nuke", "refresh", "tok42", "3");
    let decoded = CustomId::parse(&original.encode()).expect("should parse");
    assert_eq!(decoded, original);
}

#[test]
fn component_id_shorthand_matches_encode() {
    assert_eq!(
        component_id("level", "up", "tok"),
        CustomId::new("level", "up", "tok").encode()
    );
}
