use super::SlashCommand;

#[test]
fn it_parse_empty_string() {
    assert!(SlashCommand::parse("").is_none());
}

#[test]
fn it_parse_space_only() {
    assert!(SlashCommand::parse("   ").is_none());
}

#[test]
fn it_parse_single_slash() {
    assert!(SlashCommand::parse("/").is_none());
}

#[test]
fn it_parse_regular_message() {
    assert!(SlashCommand::parse("Tell me about Kedarnath temple").is_none());
}

#[test]
fn it_parse_valid_prefix() {
    let cmd = SlashCommand::parse("/q");
    assert!(cmd.is_some());
    assert_eq!(cmd.unwrap().command, "/q");
}

#[test]
fn it_is_quit() {
    assert!(SlashCommand::parse("/quit").unwrap().is_quit());
    assert!(SlashCommand::parse("/exit").unwrap().is_quit());
    assert!(!SlashCommand::parse("/new").unwrap().is_quit());
}

#[test]
fn it_is_new_chat() {
    assert!(SlashCommand::parse("/n").unwrap().is_new_chat());
    assert!(SlashCommand::parse("/new").unwrap().is_new_chat());
}

#[test]
fn it_is_history() {
    assert!(SlashCommand::parse("/ls").unwrap().is_history());
    assert!(SlashCommand::parse("/history").unwrap().is_history());
}

#[test]
fn it_is_load_with_id() {
    let cmd = SlashCommand::parse("/load 1714521600000").unwrap();
    assert!(cmd.is_load());
    assert_eq!(cmd.first_arg(), Some("1714521600000"));
}

#[test]
fn it_is_delete_without_id() {
    let cmd = SlashCommand::parse("/d").unwrap();
    assert!(cmd.is_delete());
    assert_eq!(cmd.first_arg(), None);
}

#[test]
fn it_is_language() {
    let cmd = SlashCommand::parse("  /lang   hi ").unwrap();
    assert!(cmd.is_language());
    assert_eq!(cmd.args, vec!["hi".to_string()]);
}

#[test]
fn it_is_voice() {
    assert!(SlashCommand::parse("/v").unwrap().is_voice());
    assert!(SlashCommand::parse("/voice").unwrap().is_voice());
}

#[test]
fn it_is_help() {
    assert!(SlashCommand::parse("/h").unwrap().is_help());
    assert!(SlashCommand::parse("/help").unwrap().is_help());
}
