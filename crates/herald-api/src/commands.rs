//! The guild slash-command set.

use herald_infra::discord::types::{
    CommandDefinition, CommandOptionDefinition, OPTION_TYPE_INTEGER,
};

pub const START: &str = "startsession";
pub const SCHEDULE: &str = "schedulesession";
pub const END: &str = "endsession";

/// Name of the required timestamp option on `schedulesession`.
pub const TIME_OPTION: &str = "time";

/// Definitions pushed to Discord by `herald register`.
pub fn definitions() -> Vec<CommandDefinition> {
    vec![
        CommandDefinition {
            name: START,
            description: "Start a session",
            options: Vec::new(),
        },
        CommandDefinition {
            name: SCHEDULE,
            description: "Schedule a session",
            options: vec![CommandOptionDefinition {
                kind: OPTION_TYPE_INTEGER,
                name: TIME_OPTION,
                description: "Unix timestamp for when to start the session",
                required: true,
            }],
        },
        CommandDefinition {
            name: END,
            description: "Ends the current session",
            options: Vec::new(),
        },
    ]
}
