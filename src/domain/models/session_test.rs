use super::ChatSession;
use super::UNTITLED_SESSION;
use crate::domain::models::ChatMessage;

#[test]
fn it_titles_from_first_user_message() {
    let messages = vec![
        ChatMessage::user("Best time to visit Badrinath?"),
        ChatMessage::user("And Kedarnath?"),
    ];
    let session = ChatSession::new("1", &messages);

    assert_eq!(session.title, "Best time to visit Badrinath?...");
    assert_eq!(session.messages.len(), 2);
}

#[test]
fn it_truncates_title_to_fifty_chars() {
    let text = "a".repeat(80);
    let title = ChatSession::title_from_messages(&[ChatMessage::user(&text)]);

    assert_eq!(title, format!("{}...", "a".repeat(50)));
}

#[test]
fn it_truncates_on_char_boundaries() {
    let text = "केदारनाथ मंदिर के बारे में बताइए, यात्रा कब शुरू होती है और रास्ता कैसा है";
    let title = ChatSession::title_from_messages(&[ChatMessage::user(text)]);

    let expected = format!("{}...", text.chars().take(50).collect::<String>());
    assert_eq!(title, expected);
}

#[test]
fn it_titles_without_user_messages() {
    assert_eq!(ChatSession::title_from_messages(&[]), UNTITLED_SESSION);
}
