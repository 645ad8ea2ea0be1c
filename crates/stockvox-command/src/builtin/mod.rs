// SPDX-FileCopyrightText: 2026 Stockvox Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Built-in commands for the inventory assistant.
//!
//! Registration order matters: matching is first-wins over substrings, so
//! the navigation groups shadow later phrases that contain them.

pub mod conversation;
pub mod data;
pub mod navigation;

pub use conversation::{GREETINGS, HELP_TEXT};
pub use data::{StatsReport, describe};

use tracing::info;

use crate::interpreter::CommandInterpreter;

/// Registers every built-in command group.
pub fn register_builtins(interp: &mut CommandInterpreter) {
    navigation::register(interp);
    data::register(interp);
    conversation::register(interp);
    info!(
        phrases = interp.triggers().len(),
        "built-in commands registered"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::CommandOutcome;
    use stockvox_core::{InventoryStats, Route};
    use stockvox_test_utils::RecordingHost;

    fn assistant() -> CommandInterpreter {
        let mut interp = CommandInterpreter::new();
        register_builtins(&mut interp);
        interp
    }

    fn executed(outcome: CommandOutcome) -> String {
        match outcome {
            CommandOutcome::Executed { trigger } => trigger,
            other => panic!("expected execution, got {other:?}"),
        }
    }

    #[test]
    fn registers_all_phrases_in_order() {
        let interp = assistant();
        assert_eq!(interp.triggers().len(), 59);
        assert_eq!(interp.triggers().phrases().next(), Some("dashboard"));
        assert_eq!(interp.triggers().phrases().last(), Some("bye"));
    }

    #[test]
    fn navigation_routes_and_confirms() {
        let mut interp = assistant();
        let mut host = RecordingHost::new();

        let trigger = executed(interp.process_command("go to dashboard", &mut host));
        assert_eq!(trigger, "dashboard");
        assert_eq!(host.routes(), vec![Route::Dashboard]);
        assert_eq!(host.spoken(), vec!["Navigating to dashboard"]);
    }

    #[test]
    fn items_shadows_add_new_items() {
        let mut interp = assistant();
        let mut host = RecordingHost::new();

        let trigger = executed(interp.process_command("add new items", &mut host));
        assert_eq!(trigger, "items");
        assert_eq!(host.routes(), vec![Route::Items]);
    }

    #[test]
    fn financial_reports_beats_analytics_reports() {
        let mut interp = assistant();
        let mut host = RecordingHost::new();

        // "reports" (analytics) is registered before "financial".
        let trigger = executed(interp.process_command("financial reports", &mut host));
        assert_eq!(trigger, "reports");
        assert_eq!(host.routes(), vec![Route::Analytics]);
    }

    #[test]
    fn system_commands() {
        let mut interp = assistant();
        let mut host = RecordingHost::new();

        interp.process_command("reload", &mut host);
        interp.process_command("go back", &mut host);
        assert_eq!(host.reloads(), 1);
        assert_eq!(host.back_requests(), 1);
    }

    #[test]
    fn data_commands_use_host_stats() {
        let mut interp = assistant();
        let mut host = RecordingHost::new().with_stats(InventoryStats {
            total_items: 12,
            total_value: 1234.5,
            total_quantity: 80,
            fresh_count: 4,
        });

        interp.process_command("item count", &mut host);
        interp.process_command("inventory value", &mut host);
        interp.process_command("overview", &mut host);
        assert_eq!(
            host.spoken(),
            vec![
                "You have 12 total items in your inventory.",
                "Your total inventory value is $1234.50.",
                "You have 12 items worth $1234.50. 4 items are fresh.",
            ]
        );
    }

    #[test]
    fn data_commands_without_stats() {
        let mut interp = assistant();
        let mut host = RecordingHost::new();

        interp.process_command("total value", &mut host);
        assert_eq!(
            host.spoken(),
            vec!["Unable to retrieve inventory statistics at the moment."]
        );
    }

    #[test]
    fn search_trigger_extracts_term() {
        let mut interp = assistant();
        let mut host = RecordingHost::new();

        let trigger = executed(interp.process_command("search for bananas", &mut host));
        assert_eq!(trigger, "search");
        assert_eq!(host.searches(), vec!["bananas"]);
    }

    #[test]
    fn stop_clears_listening() {
        let mut interp = assistant();
        interp.set_listening(true);
        let mut host = RecordingHost::new();

        interp.process_command("stop listening", &mut host);
        assert!(!interp.is_listening());
        assert_eq!(host.stop_requests(), 1);
        assert_eq!(host.spoken(), vec!["Voice assistant stopped"]);
    }

    #[test]
    fn greeting_is_one_of_the_known_lines() {
        let mut interp = assistant();
        let mut host = RecordingHost::new();

        interp.process_command("hello", &mut host);
        let spoken = host.spoken();
        assert_eq!(spoken.len(), 1);
        assert!(GREETINGS.contains(&spoken[0].as_str()));
    }

    #[test]
    fn help_speaks_help_text() {
        let mut interp = assistant();
        let mut host = RecordingHost::new();

        interp.process_command("what can you do", &mut host);
        assert_eq!(host.spoken(), vec![HELP_TEXT]);
    }
}
