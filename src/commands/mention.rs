//! Direct mention extraction.
//!
//! A message is addressed to the bot when it *starts* with a Slack user
//! mention, e.g. `<@U0123ABC> status`. Mentions anywhere else in the text do
//! not count.

/// Result of looking for a leading mention in a message.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ParsedMention {
    /// Mentioned user id, `None` when the message does not start with a mention
    pub mentioned_id: Option<String>,
    /// First line of text after the mention, trimmed
    pub remainder: String,
}

/// Extracts the leading `<@USERID>` mention of a message.
///
/// The match is anchored at the very start of the text and case-sensitive.
/// Only user ids count: they start with `U` or `W`, so `<@>` and other ids
/// are rejected.
/// Slack may append a display label to the id (`<@U123|foodcon>`); the label
/// is dropped. Only the first line after the mention is kept as the remainder.
///
/// Never fails: anything that does not start with a well-formed mention yields
/// `mentioned_id == None` and an empty remainder.
///
/// # Examples
///
/// ```text
/// "<@U123> set 2 samosas kitchen" -> (Some("U123"), "set 2 samosas kitchen")
/// "hey <@U123> status"            -> (None, "")
/// ```
pub fn extract_mention(text: &str) -> ParsedMention {
    let Some(rest) = text.strip_prefix("<@") else {
        return ParsedMention::default();
    };

    let Some((mention, remainder)) = rest.split_once('>') else {
        return ParsedMention::default();
    };

    // A mention never spans lines
    if mention.contains('\n') {
        return ParsedMention::default();
    }

    let user_id = mention.split('|').next().unwrap_or_default();

    // User ids start with U, or W on Enterprise Grid
    if user_id.len() < 2 || !user_id.starts_with(['U', 'W']) {
        return ParsedMention::default();
    }
    let first_line = remainder.lines().next().unwrap_or_default();

    ParsedMention {
        mentioned_id: Some(user_id.to_owned()),
        remainder: first_line.trim().to_owned(),
    }
}
