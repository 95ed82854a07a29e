use std::rc::Rc;

use dioxus::prelude::*;
use shared_types::WindowId;

use crate::components::styles::TERMINAL_STYLES;
use crate::interop::date_label;

pub const BANNER: &str = "Web Windows Terminal. Type `help` to list commands.";
pub const HELP_TEXT: &str = "Commands: help, echo, date, whoami, clear, ls";

/// Scrollback and command history for one terminal window.
#[derive(Debug, Clone, PartialEq)]
pub struct ShellSession {
    lines: Vec<String>,
    history: Vec<String>,
    history_cursor: Option<usize>,
}

impl Default for ShellSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ShellSession {
    pub fn new() -> Self {
        Self {
            lines: vec![BANNER.to_string()],
            history: Vec::new(),
            history_cursor: None,
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Executes one submitted line. Blank input is ignored.
    pub fn run(&mut self, raw: &str) {
        let cmd = raw.trim();
        if cmd.is_empty() {
            return;
        }
        self.history.push(cmd.to_string());
        self.history_cursor = None;
        self.lines.push(format!("> {cmd}"));

        let mut words = cmd.split_whitespace();
        let name = words.next().unwrap_or_default();
        let args: Vec<&str> = words.collect();

        match name {
            "help" => self.lines.push(HELP_TEXT.to_string()),
            "echo" => self.lines.push(args.join(" ")),
            "date" => self.lines.push(date_label()),
            "whoami" => self.lines.push("guest".to_string()),
            "clear" => self.lines.clear(),
            "ls" => self.lines.push("apps: notepad terminal files about".to_string()),
            other => self.lines.push(format!("Command not found: {other}")),
        }
    }

    /// Steps back through submitted commands, stopping at the oldest.
    pub fn history_prev(&mut self) -> Option<String> {
        if self.history.is_empty() {
            return None;
        }
        let index = match self.history_cursor {
            Some(0) => 0,
            Some(i) => i - 1,
            None => self.history.len() - 1,
        };
        self.history_cursor = Some(index);
        self.history.get(index).cloned()
    }

    /// Steps forward; past the newest entry the input line is blank again.
    pub fn history_next(&mut self) -> Option<String> {
        let index = self.history_cursor? + 1;
        if index >= self.history.len() {
            self.history_cursor = None;
            return Some(String::new());
        }
        self.history_cursor = Some(index);
        self.history.get(index).cloned()
    }
}

#[component]
pub fn TerminalView(window_id: WindowId) -> Element {
    let mut session = use_signal(ShellSession::new);
    let mut input = use_signal(String::new);
    let mut input_element = use_signal(|| None::<Rc<MountedData>>);
    let scroll_id = format!("terminal-{window_id}");

    {
        let scroll_id = scroll_id.clone();
        use_effect(move || {
            let _ = session.read().lines().len();
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };
            if let Some(element) = document.get_element_by_id(&scroll_id) {
                element.set_scroll_top(element.scroll_height());
            }
        });
    }

    let focus_input = move |_| {
        if let Some(element) = input_element() {
            spawn(async move {
                let _ = element.set_focus(true).await;
            });
        }
    };

    let lines = session.read().lines().to_vec();

    rsx! {
        style { {TERMINAL_STYLES} }

        div {
            id: "{scroll_id}",
            class: "terminal",
            onclick: focus_input,

            for (i, line) in lines.iter().enumerate() {
                div { key: "{i}", class: "terminal-line", "{line}" }
            }

            div {
                class: "terminal-line terminal-prompt",
                span { "$ " }
                input {
                    class: "terminal-input",
                    autofocus: true,
                    spellcheck: "false",
                    value: "{input}",
                    onmounted: move |e| input_element.set(Some(e.data())),
                    oninput: move |e| input.set(e.value()),
                    onkeydown: move |e| match e.key() {
                        Key::Enter => {
                            let line = input();
                            session.write().run(&line);
                            input.set(String::new());
                        }
                        Key::ArrowUp => {
                            e.prevent_default();
                            if let Some(previous) = session.write().history_prev() {
                                input.set(previous);
                            }
                        }
                        Key::ArrowDown => {
                            e.prevent_default();
                            if let Some(next) = session.write().history_next() {
                                input.set(next);
                            }
                        }
                        _ => {}
                    },
                }
            }
        }
    }
}
