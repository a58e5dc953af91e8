//! Per-event command dispatch.
//!
//! The [`Dispatcher`] runs one inbound event through the whole command engine:
//!
//! ```text
//! InboundEvent → gate → Commander::parse → Commander::parse_command → StatusStore::apply → Reply
//! ```
//!
//! It owns the [`StatusStore`]. Events are dispatched one at a time by a
//! single task, so the store needs no lock. Running several dispatchers or
//! dispatching from several tasks would need the store behind a mutex.

use log::{debug, info};

use crate::{
    commands::{CommandContext, CommandParseError, Commander},
    events::{BotIdentity, InboundEvent},
    status::{Status, StatusStore},
};

/// A reply to post in a channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    /// Channel to post in, the channel of the command
    pub channel: String,
    /// Text to post
    pub text: String,
}

/// Turns inbound events into replies, updating the FOODCON status on the way.
#[derive(Debug)]
pub struct Dispatcher {
    /// Command parser and executor
    commander: Commander,
    /// The FOODCON status, mutated only here
    store: StatusStore,
}

impl Dispatcher {
    /// Creates a dispatcher for the bot `identity`, with an unset status.
    pub fn new(identity: BotIdentity) -> Self {
        Dispatcher {
            commander: Commander::new(identity),
            store: StatusStore::new(),
        }
    }

    /// Processes one event and returns the reply to post, if any.
    ///
    /// Returns `None`, leaving the status untouched, when the event is not a
    /// plain user message (edits, joins, bot messages carry a subtype) or does
    /// not start with a mention of the bot. Every other message gets exactly
    /// one reply, including unrecognized commands and invalid arguments.
    pub fn dispatch(&mut self, event: &InboundEvent) -> Option<Reply> {
        if !event.is_user_message() {
            debug!("ignore {:?} event in {}", event.kind, event.channel);
            return None;
        }

        let command = match self.commander.parse(&event.text) {
            Ok(command) => command,
            // Return silently if the message is not for the bot
            Err(CommandParseError::NotForBot) => return None,
            Err(CommandParseError::InvalidCommand(message)) => {
                info!("invalid command in {}: {:?}", event.channel, event.text);
                return Some(Reply {
                    channel: event.channel.clone(),
                    text: message,
                });
            }
        };

        info!("handling {:?} from {}", command, event.channel);

        let context = CommandContext {
            status: self.store.snapshot(),
        };
        let result = self.commander.parse_command(&command, &context);

        if let Some(update) = result.status_update {
            self.store.apply(update);
        }

        Some(Reply {
            channel: event.channel.clone(),
            text: result.response,
        })
    }

    /// Returns the current status.
    pub fn status(&self) -> Status {
        self.store.snapshot()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{events::EventKind, status::AlertLevel};

    const CHANNEL: &str = "CFOOD";

    fn create_dispatcher() -> Dispatcher {
        Dispatcher::new(BotIdentity::new("UFOODCON"))
    }

    /// Dispatches a message addressed to the bot and returns the reply text.
    fn send(dispatcher: &mut Dispatcher, command: &str) -> Option<String> {
        let event = InboundEvent::message(CHANNEL, &format!("<@UFOODCON> {command}"));
        dispatcher.dispatch(&event).map(|reply| reply.text)
    }

    #[test]
    fn test_status_on_fresh_state() {
        let mut dispatcher = create_dispatcher();

        assert_eq!(
            send(&mut dispatcher, "status").as_deref(),
            Some("WE ARE CURRENTLY AT *FOODCON 5* | *LOCATION*: No location *FOOD*: No food")
        );
        assert_eq!(dispatcher.status(), Status::default());
    }

    #[test]
    fn test_set_full_then_status() {
        let mut dispatcher = create_dispatcher();

        assert_eq!(
            send(&mut dispatcher, "set 3 pizza lab").as_deref(),
            Some("FOODCON 3: pizza available at lab! Enjoy!")
        );
        assert_eq!(
            send(&mut dispatcher, "status").as_deref(),
            Some("WE ARE CURRENTLY AT *FOODCON 3* | *LOCATION*: lab *FOOD*: pizza")
        );
    }

    #[test]
    fn test_set_full_updates_status() {
        let mut dispatcher = create_dispatcher();

        let reply = dispatcher
            .dispatch(&InboundEvent::message(
                CHANNEL,
                "<@UFOODCON> set 2 samosas kitchen",
            ))
            .unwrap();

        assert_eq!(
            reply,
            Reply {
                channel: CHANNEL.to_owned(),
                text: "FOODCON 2: samosas available at kitchen! Enjoy!".to_owned(),
            }
        );
        assert_eq!(
            dispatcher.status(),
            Status {
                level: Some(AlertLevel::Two),
                item: Some("samosas".to_owned()),
                location: Some("kitchen".to_owned()),
            }
        );
    }

    #[test]
    fn test_set_full_missing_args_keeps_status() {
        let mut dispatcher = create_dispatcher();
        send(&mut dispatcher, "set 1 cake reception");
        let before = dispatcher.status();

        assert_eq!(
            send(&mut dispatcher, "set 2 samosas").as_deref(),
            Some("Incorrect number of arguments. Please try again with: set level food location")
        );
        assert_eq!(dispatcher.status(), before);
    }

    #[test]
    fn test_set_full_invalid_level_keeps_status() {
        let mut dispatcher = create_dispatcher();

        assert_eq!(
            send(&mut dispatcher, "set 7 samosas kitchen").as_deref(),
            Some("Invalid FOODCON level. Please pick a level between 1 and 5.")
        );
        assert_eq!(dispatcher.status(), Status::default());
    }

    #[test]
    fn test_set_level_raised() {
        let mut dispatcher = create_dispatcher();
        send(&mut dispatcher, "food cake");

        assert_eq!(
            send(&mut dispatcher, "set 2").as_deref(),
            Some(":alert: FOODCON RAISED TO FOODCON 2. I REPEAT. *FOODCON 2*. :alert:")
        );
        assert_eq!(dispatcher.status().level, Some(AlertLevel::Two));
        assert_eq!(dispatcher.status().item.as_deref(), Some("cake"));
    }

    #[test]
    fn test_level_keyword() {
        let mut dispatcher = create_dispatcher();
        send(&mut dispatcher, "level 4");

        assert_eq!(dispatcher.status().level, Some(AlertLevel::Four));
    }

    #[test]
    fn test_set_level_five_twice() {
        let mut dispatcher = create_dispatcher();
        send(&mut dispatcher, "set 1 pizza lab");

        let expected = Status {
            level: Some(AlertLevel::Five),
            item: Some("No food".to_owned()),
            location: Some("No location".to_owned()),
        };

        assert_eq!(
            send(&mut dispatcher, "set 5").as_deref(),
            Some("FOODCON SET TO FOODCON5. I REPEAT. *FOODCON 5*. STAND DOWN.")
        );
        assert_eq!(dispatcher.status(), expected);

        send(&mut dispatcher, "set 5");
        assert_eq!(dispatcher.status(), expected);
    }

    #[test]
    fn test_set_level_out_of_range() {
        let mut dispatcher = create_dispatcher();

        for command in ["set 6", "set 0"] {
            assert_eq!(
                send(&mut dispatcher, command).as_deref(),
                Some("Not sure what you mean. Stop it. Get some help, try *help*.")
            );
        }
        assert_eq!(dispatcher.status(), Status::default());
    }

    #[test]
    fn test_food_and_location() {
        let mut dispatcher = create_dispatcher();

        assert_eq!(
            send(&mut dispatcher, "food Leftover Cake").as_deref(),
            Some("OK, got it. Sounds tasty :eyes:")
        );
        assert_eq!(
            send(&mut dispatcher, "location Kitchen").as_deref(),
            Some("OK, got it. I'll be paying a visit :eyes:")
        );
        assert_eq!(
            send(&mut dispatcher, "status").as_deref(),
            Some("WE ARE CURRENTLY AT *FOODCON 5* | *LOCATION*: kitchen *FOOD*: leftover cake")
        );
    }

    #[test]
    fn test_boi() {
        let mut dispatcher = create_dispatcher();

        assert_eq!(
            send(&mut dispatcher, "boi").as_deref(),
            Some("https://i.imgur.com/rLgVcmk.gif")
        );
        assert_eq!(dispatcher.status(), Status::default());
    }

    #[test]
    fn test_help() {
        let mut dispatcher = create_dispatcher();

        let reply = send(&mut dispatcher, "HELP").unwrap();
        assert!(reply.starts_with("FOODCON App"));
    }

    #[test]
    fn test_unrecognized() {
        let mut dispatcher = create_dispatcher();

        assert_eq!(
            send(&mut dispatcher, "what's for lunch?").as_deref(),
            Some("Not sure what you mean. Stop it. Get some help, try *help*.")
        );
    }

    #[test]
    fn test_ignore_event_with_subtype() {
        let mut dispatcher = create_dispatcher();
        let event = InboundEvent {
            has_subtype: true,
            ..InboundEvent::message(CHANNEL, "<@UFOODCON> set 1 pizza lab")
        };

        assert_eq!(dispatcher.dispatch(&event), None);
        assert_eq!(dispatcher.status(), Status::default());
    }

    #[test]
    fn test_ignore_non_message_event() {
        let mut dispatcher = create_dispatcher();
        let event = InboundEvent {
            kind: EventKind::Other("channel_joined".to_owned()),
            ..InboundEvent::message(CHANNEL, "<@UFOODCON> set 1 pizza lab")
        };

        assert_eq!(dispatcher.dispatch(&event), None);
        assert_eq!(dispatcher.status(), Status::default());
    }

    #[test]
    fn test_ignore_messages_not_for_bot() {
        let mut dispatcher = create_dispatcher();

        for text in [
            "set 1 pizza lab",
            "<@USOMEONE> set 1 pizza lab",
            "hey <@UFOODCON> set 1 pizza lab",
            "",
        ] {
            assert_eq!(dispatcher.dispatch(&InboundEvent::message(CHANNEL, text)), None);
        }
        assert_eq!(dispatcher.status(), Status::default());
    }

    #[test]
    fn test_reply_goes_to_event_channel() {
        let mut dispatcher = create_dispatcher();

        let reply = dispatcher
            .dispatch(&InboundEvent::message("COTHER", "<@UFOODCON> status"))
            .unwrap();

        assert_eq!(reply.channel, "COTHER");
    }
}
