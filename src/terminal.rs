//! Terminal surface: renders view snapshots to stdout and turns typed
//! commands into flow operations.

use std::io::Write;
use std::str::FromStr;
use std::sync::Arc;

use async_trait::async_trait;
use rsvp_app::{FlowError, RsvpFlow};
use rsvp_core::ports::FlowViewPort;
use rsvp_core::{AttendingAnswer, Language, RsvpStep, RsvpView, WEDDING};
use rsvp_infra::InMemorySessionHistory;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tracing::debug;

pub const HELP: &str = "commands: start | name <text> | yes | no | address <text> | submit | \
back | forward | lang [en|ko] | dismiss | help | quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Start,
    Name(String),
    Attending(AttendingAnswer),
    Address(String),
    Submit,
    Back,
    Forward,
    /// `None` toggles.
    Lang(Option<Language>),
    Dismiss,
    Help,
    Quit,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("empty command")]
    Empty,
    #[error("unknown command: {0}")]
    Unknown(String),
    #[error("unknown language: {0}")]
    UnknownLanguage(String),
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        match word.to_ascii_lowercase().as_str() {
            "" => Err(CommandError::Empty),
            "start" => Ok(Self::Start),
            "name" => Ok(Self::Name(rest.to_string())),
            "yes" => Ok(Self::Attending(AttendingAnswer::Yes)),
            "no" => Ok(Self::Attending(AttendingAnswer::No)),
            "address" => Ok(Self::Address(rest.to_string())),
            "submit" => Ok(Self::Submit),
            "back" => Ok(Self::Back),
            "forward" => Ok(Self::Forward),
            "lang" if rest.is_empty() => Ok(Self::Lang(None)),
            "lang" => Language::from_code(rest)
                .map(|language| Self::Lang(Some(language)))
                .ok_or_else(|| CommandError::UnknownLanguage(rest.to_string())),
            "dismiss" => Ok(Self::Dismiss),
            "help" => Ok(Self::Help),
            "quit" | "exit" => Ok(Self::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

impl Command {
    /// Commands whose flow operation resolves only once the form endpoint
    /// has answered.
    pub fn waits_for_endpoint(&self) -> bool {
        matches!(self, Command::Attending(_) | Command::Submit)
    }
}

/// Renders every published view as a block of text.
pub struct TerminalRenderer<W> {
    out: std::sync::Mutex<W>,
}

impl TerminalRenderer<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W> TerminalRenderer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: std::sync::Mutex::new(out),
        }
    }
}

#[async_trait]
impl<W: Write + Send> FlowViewPort for TerminalRenderer<W> {
    async fn render(&self, view: RsvpView) {
        let text = render_view(&view);
        if let Ok(mut out) = self.out.lock() {
            // A closed stdout leaves nothing to report to.
            let _ = writeln!(out, "{text}");
            let _ = out.flush();
        }
    }
}

pub fn render_view(view: &RsvpView) -> String {
    let s = view.strings();
    let mut lines: Vec<String> = Vec::new();

    match view.step {
        RsvpStep::Landing => {
            lines.push(s.landing.kicker.to_string());
            lines.push(format!("== {} ==", s.landing.title));
            lines.push(format!("{} · {}", s.landing.date, s.landing.time));
            lines.push(format!("{}, {}", s.landing.venue, s.landing.city));
            lines.push(format!("  {}", WEDDING.venue_map_url));
            lines.push(s.landing.invitation.to_string());
            lines.push(format!("[start] {}", s.landing.cta));
        }
        RsvpStep::Rsvp => {
            lines.push(format!("== {} ==", s.rsvp.title));
            lines.push(s.rsvp.names_prompt.to_string());
            lines.push(format!("[name] {}", field(&view.name, s.rsvp.name_placeholder)));
            lines.push(s.rsvp.attending_question.to_string());
            if view.is_submitting {
                lines.push(s.rsvp.sending.to_string());
            } else if view.can_pick_attending {
                lines.push(format!("[yes] {}   [no] {}", s.rsvp.yes, s.rsvp.no));
            }
            lines.push(s.rsvp.note.to_string());
        }
        RsvpStep::Address => {
            lines.push(format!("== {} ==", s.address.title));
            lines.push(s.address.question.to_string());
            lines.push(format!(
                "[address] {}",
                field(&view.address, s.address.placeholder)
            ));
            if view.is_submitting {
                lines.push(s.address.sending.to_string());
            } else if view.can_submit_address {
                lines.push(format!("[submit] {}", s.address.submit));
            }
        }
        RsvpStep::ThanksNo | RsvpStep::ThanksYes => {
            lines.push(format!("== {} ==", s.thanks.title));
            lines.push(s.thanks.body.to_string());
        }
    }

    if let Some(error) = view.visible_error() {
        lines.push(format!("! {error}  [dismiss] {}", s.errors.dismiss));
    }
    if view.is_fading {
        lines.push("...".to_string());
    }
    lines.push(format!("[lang] {}", s.switch_language));

    lines.join("\n")
}

fn field(value: &str, placeholder: &str) -> String {
    if value.is_empty() {
        format!("<{placeholder}>")
    } else {
        value.to_string()
    }
}

/// Read commands from stdin until `quit` or end of input.
pub async fn run_terminal(
    flow: Arc<RsvpFlow>,
    history: Arc<InMemorySessionHistory>,
) -> anyhow::Result<()> {
    println!("{HELP}");
    run_commands(flow, history, BufReader::new(tokio::io::stdin())).await
}

/// Execute one command per input line.
///
/// Commands that wait for the form endpoint run on their own task, so the
/// next line is read while the request is in flight. The flow itself
/// rejects a second submission meanwhile.
pub async fn run_commands<R>(
    flow: Arc<RsvpFlow>,
    history: Arc<InMemorySessionHistory>,
    input: R,
) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = input.lines();

    while let Some(line) = lines.next_line().await? {
        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(CommandError::Empty) => continue,
            Err(err) => {
                println!("{err}\n{HELP}");
                continue;
            }
        };
        if command == Command::Quit {
            break;
        }
        if command.waits_for_endpoint() {
            let flow = Arc::clone(&flow);
            let history = Arc::clone(&history);
            tokio::spawn(async move {
                if let Err(err) = execute(&flow, &history, command).await {
                    debug!(error = %err, "command dropped");
                }
            });
            continue;
        }
        execute(&flow, &history, command).await?;
    }

    Ok(())
}

async fn execute(
    flow: &RsvpFlow,
    history: &InMemorySessionHistory,
    command: Command,
) -> Result<(), FlowError> {
    match command {
        Command::Start => flow.start_rsvp().await?,
        Command::Name(name) => flow.set_name(name).await?,
        Command::Attending(answer) => flow.pick_attending(answer).await?,
        Command::Address(address) => flow.set_address(address).await?,
        Command::Submit => flow.submit_address().await?,
        Command::Back => match history.back() {
            Some(entry) => flow.navigate(&entry).await?,
            None => {
                debug!("already at the first history entry");
                return Ok(());
            }
        },
        Command::Forward => match history.forward() {
            Some(entry) => flow.navigate(&entry).await?,
            None => {
                debug!("already at the last history entry");
                return Ok(());
            }
        },
        Command::Lang(Some(language)) => flow.set_language(language).await?,
        Command::Lang(None) => flow.toggle_language().await?,
        Command::Dismiss => flow.dismiss_error().await?,
        Command::Help => {
            println!("{HELP}");
            return Ok(());
        }
        Command::Quit => return Ok(()),
    };
    Ok(())
}
