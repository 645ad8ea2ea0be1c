// SPDX-FileCopyrightText: 2026 Stockvox Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Help, stop, and small talk.

use rand::seq::SliceRandom;

use crate::interpreter::CommandInterpreter;

pub const HELP_TEXT: &str = "I can help you navigate and manage your inventory. \
Here are some commands you can try:

Navigation: \"go to dashboard\", \"show items\", \"add item\", \"analytics\", \"financial reports\"

Data: \"total items\", \"inventory value\", \"inventory status\"

Search: \"search for laptops\"

System: \"refresh page\", \"go back\"

Just speak naturally and I'll understand!";

pub const GREETINGS: &[&str] = &[
    "Hello! How can I help you with your inventory?",
    "Hi there! What would you like me to do?",
    "Hey! I'm ready to assist you.",
    "Hello! Ask me anything about your inventory system.",
];

pub fn register(interp: &mut CommandInterpreter) {
    interp.add_command(["help", "what can you do", "commands", "show help"], |ctx| {
        ctx.speak(HELP_TEXT);
        Ok(())
    });

    interp.add_command(["stop", "stop listening", "quit"], |ctx| {
        ctx.stop_listening();
        ctx.speak("Voice assistant stopped");
        Ok(())
    });

    interp.add_command(["hello", "hi", "hey"], |ctx| {
        let greeting = GREETINGS
            .choose(&mut rand::thread_rng())
            .copied()
            .unwrap_or(GREETINGS[0]);
        ctx.speak(greeting);
        Ok(())
    });

    interp.add_command(["thank you", "thanks"], |ctx| {
        ctx.speak("You're welcome! Happy to help.");
        Ok(())
    });

    interp.add_command(["goodbye", "bye"], |ctx| {
        ctx.speak("Goodbye! Talk to you later.");
        Ok(())
    });
}
