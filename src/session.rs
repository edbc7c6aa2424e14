/// Interactive console session
///
/// Owns the wizard flow and a pair of channels: one fed by a stdin reader
/// thread, one fed by message-expiry timers. The flow is only ever touched
/// from the session loop, so there is a single logical thread of control.

use crossbeam_channel::{select, unbounded, Receiver, Sender};
use std::io::BufRead;
use std::thread;

use crate::gateway::AccountService;
use crate::wizard::{
    ActionOutcome, MessageKind, WizardAction, WizardFlow, WizardStep, MESSAGE_TTL,
};

/// What a line of user input asks for
#[derive(Debug, Clone, PartialEq, Eq)]
enum LineCommand {
    /// Value for the current step, followed by submit
    Input(String),
    Back,
    Reset,
    Quit,
    /// Blank line, just re-render
    Nothing,
}

fn parse_line(line: &str) -> LineCommand {
    let trimmed = line.trim();
    match trimmed.to_ascii_lowercase().as_str() {
        "" => LineCommand::Nothing,
        "back" => LineCommand::Back,
        "reset" => LineCommand::Reset,
        "quit" | "exit" => LineCommand::Quit,
        _ => LineCommand::Input(trimmed.to_string()),
    }
}

/// Console session driving a wizard flow
pub struct Session<S: AccountService> {
    flow: WizardFlow<S>,
    expiry_tx: Sender<u64>,
    expiry_rx: Receiver<u64>,
    /// Highest message generation a clear has been scheduled for
    scheduled_generation: u64,
}

impl<S: AccountService> Session<S> {
    pub fn new(flow: WizardFlow<S>) -> Self {
        let (expiry_tx, expiry_rx) = unbounded();
        Self {
            flow,
            expiry_tx,
            expiry_rx,
            scheduled_generation: 0,
        }
    }

    /// Run the session until the user quits or input ends
    pub fn run(&mut self) {
        let lines_rx = spawn_stdin_reader();

        self.render();
        loop {
            select! {
                recv(lines_rx) -> line => {
                    let Ok(line) = line else {
                        // stdin closed
                        break;
                    };
                    if !self.handle_line(&line) {
                        break;
                    }
                    self.render();
                }
                recv(self.expiry_rx) -> generation => {
                    if let Ok(generation) = generation {
                        self.flow.apply(WizardAction::MessageExpired { generation });
                        self.render();
                    }
                }
            }
        }

        log::info!("Session ended");
    }

    /// Returns false when the session should end
    fn handle_line(&mut self, line: &str) -> bool {
        let outcome = match parse_line(line) {
            LineCommand::Quit => return false,
            LineCommand::Nothing => return true,
            LineCommand::Back => self.flow.apply(WizardAction::Back),
            LineCommand::Reset => self.flow.apply(WizardAction::Reset),
            LineCommand::Input(value) => {
                self.store_input(value);
                self.flow.apply(WizardAction::Submit)
            }
        };

        if let ActionOutcome::Blocked { reason } = &outcome {
            println!("  ({})", reason);
        }

        self.schedule_pending_clear();
        true
    }

    /// Route the entered value to the current step's field
    fn store_input(&mut self, value: String) {
        match self.flow.current_step() {
            WizardStep::Phone => self.flow.state_mut().set_phone_number(value),
            WizardStep::Email => self.flow.state_mut().set_email(value),
            WizardStep::Code => self.flow.state_mut().set_verification_code(value),
            WizardStep::Done => {}
        }
    }

    /// Schedule an auto-clear for a freshly shown message.
    ///
    /// Each timer carries the generation it was scheduled for; the state
    /// ignores stale generations, so a newer message effectively cancels the
    /// older message's pending clear.
    fn schedule_pending_clear(&mut self) {
        let Some(generation) = self.flow.state().status().map(|s| s.generation) else {
            return;
        };
        if generation <= self.scheduled_generation {
            return;
        }

        self.scheduled_generation = generation;
        let tx = self.expiry_tx.clone();
        thread::spawn(move || {
            thread::sleep(MESSAGE_TTL);
            // Receiver gone means the session already ended
            let _ = tx.send(generation);
        });
    }

    fn render(&self) {
        let step = self.flow.current_step();
        println!();
        println!(
            "── Step {}/{}: {} ──",
            step.number(),
            WizardStep::total_steps(),
            step.title()
        );
        println!("   {}", step.description());

        if let Some(status) = self.flow.state().status() {
            match status.kind {
                MessageKind::Success => println!("✓ {}", status.text),
                MessageKind::Error => println!("✗ {}", status.text),
            }
        }

        match step {
            WizardStep::Phone => println!("Enter phone number (or 'quit'):"),
            WizardStep::Email => println!("Enter email address (or 'back', 'quit'):"),
            WizardStep::Code => println!("Enter verification code (or 'back', 'quit'):"),
            WizardStep::Done => println!("Type 'reset' to delete another account, or 'quit':"),
        }
    }
}

/// Read stdin lines on a dedicated thread so the session loop can also wake
/// up for message-expiry timers.
fn spawn_stdin_reader() -> Receiver<String> {
    let (tx, rx) = unbounded();

    thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            match line {
                Ok(line) => {
                    if tx.send(line).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    log::warn!("stdin read failed: {}", e);
                    break;
                }
            }
        }
    });

    rx
}
