// SPDX-FileCopyrightText: 2026 Stockvox Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `stockvox shell` command implementation.
//!
//! A readline prompt stands in for speech capture: every line is handed to
//! the command interpreter as a full-confidence utterance, and spoken
//! responses are printed. Navigation is tracked so "go back" works.

use colored::Colorize;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use stockvox_command::CommandInterpreter;
use stockvox_command::builtin::register_builtins;
use stockvox_config::StockvoxConfig;
use stockvox_core::{AssistantHost, InventoryItem, InventoryStats, Role, Route, StockvoxError};
use tracing::info;

/// Terminal-backed host. Prints what the assistant says and keeps a page
/// stack for navigation.
pub struct TerminalHost {
    name: String,
    current: Route,
    back_stack: Vec<Route>,
    stats: Option<InventoryStats>,
}

impl TerminalHost {
    pub fn new(name: impl Into<String>, stats: Option<InventoryStats>) -> Self {
        Self {
            name: name.into(),
            current: Route::Home,
            back_stack: Vec::new(),
            stats,
        }
    }

    pub fn current_route(&self) -> Route {
        self.current
    }
}

impl AssistantHost for TerminalHost {
    fn speak(&mut self, text: &str) {
        println!("{}: {text}", self.name.cyan().bold());
    }

    fn navigate(&mut self, route: Route) {
        if route != self.current {
            self.back_stack.push(self.current);
            self.current = route;
        }
        println!("{}", format!("-> {}", route.path()).dimmed());
    }

    fn search(&mut self, term: &str) {
        println!("{}", format!("[search] {term}").dimmed());
    }

    fn reload(&mut self) {
        println!("{}", format!("[reload] {}", self.current.path()).dimmed());
    }

    fn go_back(&mut self) {
        if let Some(previous) = self.back_stack.pop() {
            self.current = previous;
        }
        println!("{}", format!("<- {}", self.current.path()).dimmed());
    }

    fn stop_listening(&mut self) {
        println!("{}", "[microphone off]".dimmed());
    }

    fn inventory_stats(&self) -> Option<InventoryStats> {
        self.stats.clone()
    }
}

/// Runs the `stockvox shell` interactive prompt.
///
/// Exits on `/quit`, Ctrl+C, Ctrl+D, or when a command stops listening.
pub fn run_shell(
    config: &StockvoxConfig,
    inventory: Option<&[InventoryItem]>,
) -> Result<(), StockvoxError> {
    let mut interpreter = CommandInterpreter::from_config(&config.assistant);
    register_builtins(&mut interpreter);
    interpreter.set_listening(true);

    let stats = inventory.map(InventoryStats::from_items);
    let mut host = TerminalHost::new(&config.assistant.name, stats);

    let mut rl = DefaultEditor::new()
        .map_err(|e| StockvoxError::Internal(format!("failed to initialize readline: {e}")))?;

    println!(
        "{} {}",
        format!("{} shell", config.assistant.name).bold().green(),
        format!("({})", interpreter.language()).dimmed()
    );
    println!(
        "Type {} for commands, {} for the conversation, {} to exit.\n",
        "help".yellow(),
        "/history".yellow(),
        "/quit".yellow()
    );

    let prompt = format!("{}> ", "you".green());
    loop {
        match rl.readline(&prompt) {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(trimmed);

                match trimmed {
                    "/quit" | "/exit" => break,
                    "/history" => print_history(&interpreter),
                    "/clear" => interpreter.clear_conversation_history(),
                    "/test" => interpreter.test_voice(&mut host),
                    _ => {
                        interpreter.handle_utterance(trimmed, None, &mut host);
                        if !interpreter.is_listening() {
                            break;
                        }
                    }
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => {
                eprintln!("{}: {e}", "error".red());
                break;
            }
        }
    }

    interpreter.set_listening(false);
    info!(last_command = interpreter.last_command(), "shell closed");
    Ok(())
}

fn print_history(interpreter: &CommandInterpreter) {
    for entry in interpreter.conversation_history() {
        let who = match entry.role {
            Role::User => "you".green(),
            Role::Assistant => "assistant".cyan(),
        };
        println!(
            "{} {who}: {}",
            entry.timestamp.format("%H:%M:%S").to_string().dimmed(),
            entry.text
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navigation_and_back_track_pages() {
        let mut host = TerminalHost::new("stockvox", None);
        host.navigate(Route::Dashboard);
        host.navigate(Route::Items);
        host.go_back();
        assert_eq!(host.current_route(), Route::Dashboard);
        host.go_back();
        assert_eq!(host.current_route(), Route::Home);
        host.go_back();
        assert_eq!(host.current_route(), Route::Home);
    }

    #[test]
    fn same_page_navigation_does_not_stack() {
        let mut host = TerminalHost::new("stockvox", None);
        host.navigate(Route::Items);
        host.navigate(Route::Items);
        host.go_back();
        assert_eq!(host.current_route(), Route::Home);
    }

    #[test]
    fn configured_language_reaches_interpreter() {
        let mut config = StockvoxConfig::default();
        config.assistant.language = "es-MX".into();
        let interpreter = CommandInterpreter::from_config(&config.assistant);
        assert_eq!(interpreter.language(), "es-MX");
    }

    #[test]
    fn stop_command_ends_listening() {
        let mut interpreter = CommandInterpreter::new();
        register_builtins(&mut interpreter);
        interpreter.set_listening(true);
        let mut host = TerminalHost::new("stockvox", None);
        interpreter.handle_utterance("stop listening", None, &mut host);
        assert!(!interpreter.is_listening());
    }

    #[test]
    fn inventory_backs_spoken_stats() {
        let items = stockvox_test_utils::fixtures::produce_inventory();
        let host = TerminalHost::new("stockvox", Some(InventoryStats::from_items(&items)));
        let stats = host.inventory_stats().unwrap();
        assert_eq!(stats.total_items, 4);
        assert_eq!(stats.fresh_count, 2);
    }
}
