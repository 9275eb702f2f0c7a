use super::*;

#[test]
fn reply_request_serializes_text_field() {
    let req = ReplyRequest { text: "What is 2+2?".to_owned() };
    let json = serde_json::to_value(&req).unwrap();
    assert_eq!(json, serde_json::json!({ "text": "What is 2+2?" }));
}

#[test]
fn reply_response_deserializes_reply_field() {
    let resp: ReplyResponse = serde_json::from_str(r#"{"reply":"4"}"#).unwrap();
    assert_eq!(resp.reply, "4");
}

#[test]
fn reply_response_missing_field_is_error() {
    assert!(serde_json::from_str::<ReplyResponse>("{}").is_err());
}
