// src/app.rs

use std::io::{self, BufRead, Write};

use crate::screens;
use crate::services::SchedulingApi;

/// One entry in the navigation history, with the payload the screen needs.
/// The customer id travels here, never in any persisted state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Welcome,
    Schedule { customer_id: String },
    MySchedules { customer_id: String },
}

/// What a screen asks the shell to do once it is done.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    Push(Screen),
    Back,
    /// Forced return to the initial screen, dropping the history.
    Home,
    Quit,
}

/// Line-oriented terminal wrapper. Screens only talk to this, which keeps
/// them scriptable in tests.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Console { input, output }
    }

    pub fn say(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{}", text)
    }

    /// Prompts for one line. None means the input ended.
    pub fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}: ", label)?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Blocking alert: holds the flow until the user acknowledges it.
    pub fn alert(&mut self, title: &str, message: &str) -> io::Result<()> {
        writeln!(self.output, "\n[ {} ] {}", title, message)?;
        write!(self.output, "[ OK ] ")?;
        self.output.flush()?;
        let mut line = String::new();
        self.input.read_line(&mut line)?;
        Ok(())
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

/// Drives the screen stack until the user quits or the input ends.
pub async fn run<R: BufRead, W: Write>(
    api: &dyn SchedulingApi,
    console: &mut Console<R, W>,
) -> anyhow::Result<()> {
    let mut stack = vec![Screen::Welcome];
    loop {
        let current = match stack.last() {
            Some(screen) => screen.clone(),
            None => return Ok(()),
        };
        let transition = match current {
            Screen::Welcome => screens::welcome::run(api, console).await?,
            Screen::Schedule { customer_id } => {
                screens::schedule::run(api, console, &customer_id).await?
            }
            Screen::MySchedules { customer_id } => {
                screens::my_schedules::run(api, console, &customer_id).await?
            }
        };
        apply(&mut stack, transition);
    }
}

/// Back pops the history when there is one, otherwise lands on the initial
/// screen.
fn apply(stack: &mut Vec<Screen>, transition: Transition) {
    match transition {
        Transition::Push(screen) => stack.push(screen),
        Transition::Back => {
            stack.pop();
            if stack.is_empty() {
                stack.push(Screen::Welcome);
            }
        }
        Transition::Home => {
            stack.clear();
            stack.push(Screen::Welcome);
        }
        Transition::Quit => stack.clear(),
    }
}
