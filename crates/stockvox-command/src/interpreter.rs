// SPDX-FileCopyrightText: 2026 Stockvox Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Utterance-to-action interpretation.
//!
//! Matching order: registered triggers (first substring hit wins) >
//! "search for X" extraction > word-overlap suggestions > generic fallback.

use std::sync::Arc;

use stockvox_config::AssistantConfig;
use stockvox_core::{AssistantHost, ConversationEntry};
use tracing::{debug, info, warn};

use crate::context::ActionContext;
use crate::history::ConversationHistory;
use crate::search::extract_search_term;
use crate::trigger::{CommandAction, IntoTriggers, TriggerTable, normalize};

/// Default cap on suggestions offered for an unmatched utterance.
pub const DEFAULT_SUGGESTION_LIMIT: usize = 3;

/// Recognition language used until one is configured.
pub const DEFAULT_LANGUAGE: &str = "en-US";

const NOT_UNDERSTOOD: &str =
    "I didn't understand that command. Say \"help\" to see what I can do.";

const SELF_TEST: &str = "Voice assistant is working correctly! I can understand commands like \
\"go to dashboard\", \"total items\", or \"search for products\". Try talking to me!";

/// What happened to an utterance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    /// A registered trigger fired.
    Executed { trigger: String },
    /// No trigger fired, but a search term was extracted and dispatched.
    Searched { term: String },
    /// Nothing matched; these phrases were offered instead.
    Suggested { suggestions: Vec<String> },
    /// Nothing matched and nothing resembled the utterance.
    NotUnderstood,
}

/// Failures reported by the speech capture layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecognitionError {
    NoSpeech,
    AudioCapture,
    NotAllowed,
    Other(String),
}

impl RecognitionError {
    /// Map a capture-layer error code to a variant.
    pub fn from_code(code: &str) -> Self {
        match code {
            "no-speech" => Self::NoSpeech,
            "audio-capture" => Self::AudioCapture,
            "not-allowed" => Self::NotAllowed,
            other => Self::Other(other.to_string()),
        }
    }

    /// What the assistant says when this error occurs.
    pub fn message(&self) -> &'static str {
        match self {
            Self::NoSpeech => "I didn't hear anything. Please try again.",
            Self::AudioCapture => "Microphone access denied. Please check your permissions.",
            Self::NotAllowed => {
                "Voice recognition not allowed. Please enable microphone permissions."
            }
            Self::Other(_) => "Voice recognition error occurred. Please try again.",
        }
    }
}

/// Trigger-phrase command interpreter with conversation state.
///
/// Construct one per assistant and pass it by reference; it holds no global
/// state. Hosts sharing it across threads must serialize access.
pub struct CommandInterpreter {
    triggers: TriggerTable,
    history: ConversationHistory,
    last_command: String,
    is_listening: bool,
    suggestion_limit: usize,
    language: String,
}

impl CommandInterpreter {
    /// An interpreter with no commands and default limits.
    pub fn new() -> Self {
        Self::with_limits(
            crate::history::DEFAULT_HISTORY_LIMIT,
            DEFAULT_SUGGESTION_LIMIT,
        )
    }

    pub fn with_limits(history_limit: usize, suggestion_limit: usize) -> Self {
        Self {
            triggers: TriggerTable::new(),
            history: ConversationHistory::new(history_limit),
            last_command: String::new(),
            is_listening: false,
            suggestion_limit: suggestion_limit.max(1),
            language: DEFAULT_LANGUAGE.to_string(),
        }
    }

    pub fn from_config(config: &AssistantConfig) -> Self {
        let mut interp = Self::with_limits(config.history_limit, config.suggestion_limit);
        interp.set_language(&config.language);
        interp
    }

    /// BCP-47 tag the host should hand to its speech recognizer.
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Change the recognition language. A blank tag is ignored.
    pub fn set_language(&mut self, language: &str) {
        let language = language.trim();
        if language.is_empty() {
            warn!("ignoring blank recognition language");
            return;
        }
        debug!(language, "recognition language set");
        self.language = language.to_string();
    }

    /// Bind every phrase in `triggers` to one shared action.
    ///
    /// Re-registering an existing phrase replaces its action (last write wins).
    /// An action reports failure by returning `Err`; the interpreter logs it
    /// and tries the next match. A panicking action is not caught and ends
    /// the command cycle.
    pub fn add_command<T, F>(&mut self, triggers: T, action: F)
    where
        T: IntoTriggers,
        F: Fn(&mut ActionContext<'_>) -> Result<(), stockvox_core::StockvoxError>
            + Send
            + Sync
            + 'static,
    {
        self.add_shared_command(triggers, Arc::new(action));
    }

    /// Like [`add_command`](Self::add_command) for an already shared action.
    pub fn add_shared_command<T: IntoTriggers>(&mut self, triggers: T, action: CommandAction) {
        for phrase in triggers.into_triggers() {
            if !self.triggers.insert(&phrase, Arc::clone(&action)) {
                warn!(phrase = phrase.as_str(), "ignoring blank trigger phrase");
            }
        }
    }

    /// Entry point for a recognized (or typed) utterance.
    ///
    /// Records it as the last command and a user history entry, then
    /// interprets it.
    pub fn handle_utterance(
        &mut self,
        transcript: &str,
        confidence: Option<f32>,
        host: &mut dyn AssistantHost,
    ) -> CommandOutcome {
        let normalized = normalize(transcript);
        debug!(
            transcript = normalized.as_str(),
            confidence = confidence.unwrap_or(1.0),
            "utterance received"
        );
        self.last_command = normalized.clone();
        self.history
            .push(ConversationEntry::user(normalized.clone(), confidence));
        self.process_command(&normalized, host)
    }

    /// Interpret an utterance and run at most one action.
    pub fn process_command(
        &mut self,
        transcript: &str,
        host: &mut dyn AssistantHost,
    ) -> CommandOutcome {
        let transcript = normalize(transcript);

        let candidates: Vec<(String, CommandAction)> = self
            .triggers
            .matching(&transcript)
            .map(|(t, a)| (t.to_string(), Arc::clone(a)))
            .collect();

        for (trigger, action) in candidates {
            let mut ctx = ActionContext::new(&transcript, host);
            let result = action(&mut ctx);
            let (spoken, stop_requested) = ctx.finish();

            for line in spoken {
                self.history.push(ConversationEntry::assistant(line));
            }
            if stop_requested {
                self.is_listening = false;
            }

            match result {
                Ok(()) => {
                    debug!(trigger = trigger.as_str(), "command executed");
                    self.history
                        .push(ConversationEntry::assistant(format!("Executed: {trigger}")));
                    return CommandOutcome::Executed { trigger };
                }
                Err(e) => {
                    warn!(
                        trigger = trigger.as_str(),
                        error = %e,
                        "command action failed, trying next match"
                    );
                }
            }
        }

        if let Some(term) = extract_search_term(&transcript) {
            let term = term.to_string();
            self.speak(host, &format!("Searching for {term}"));
            host.search(&term);
            return CommandOutcome::Searched { term };
        }

        let suggestions = self
            .triggers
            .suggestions(&transcript, self.suggestion_limit);
        if suggestions.is_empty() {
            self.speak(host, NOT_UNDERSTOOD);
            CommandOutcome::NotUnderstood
        } else {
            self.speak(
                host,
                &format!(
                    "I didn't understand \"{transcript}\". Did you mean: {}?",
                    suggestions.join(", or ")
                ),
            );
            CommandOutcome::Suggested { suggestions }
        }
    }

    /// Speak through the host and record the line as assistant history.
    pub fn speak(&mut self, host: &mut dyn AssistantHost, text: &str) {
        host.speak(text);
        self.history.push(ConversationEntry::assistant(text));
    }

    /// React to a capture-layer failure.
    pub fn handle_recognition_error(
        &mut self,
        error: &RecognitionError,
        host: &mut dyn AssistantHost,
    ) {
        warn!(error = ?error, "voice recognition error");
        self.is_listening = false;
        self.speak(host, error.message());
    }

    /// Speak a fixed sentence confirming the assistant works.
    pub fn test_voice(&mut self, host: &mut dyn AssistantHost) {
        self.speak(host, SELF_TEST);
    }

    pub fn set_listening(&mut self, listening: bool) {
        if listening != self.is_listening {
            info!(listening, "voice capture state changed");
        }
        self.is_listening = listening;
    }

    pub fn is_listening(&self) -> bool {
        self.is_listening
    }

    /// The most recent entries, oldest first.
    pub fn conversation_history(&self) -> &[ConversationEntry] {
        self.history.recent()
    }

    pub fn clear_conversation_history(&mut self) {
        self.history.clear();
    }

    pub fn last_command(&self) -> &str {
        &self.last_command
    }

    pub fn triggers(&self) -> &TriggerTable {
        &self.triggers
    }
}

impl Default for CommandInterpreter {
    fn default() -> Self {
        Self::new()
    }
}
