//! # Text Console
//!
//! The line-oriented terminal protocol: a menu, `Label: ` prompts answered by
//! one line each, and result messages separated by blank lines.
//!
//! Generic over the reader and writer so the same code serves stdin/stdout
//! and in-memory buffers in tests.

use colored::*;
use roster_common::config::Config;
use roster_common::console::Console;
use roster_common::employee::Employee;
use roster_common::error::RosterError;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::menu::MenuChoice;

pub const TITLE: &str = "Employee Management System";
pub const FAREWELL: &str = "Exiting Employee Management System. Goodbye!";
pub const NO_EMPLOYEES: &str = "No employees found.";

const MENU_WIDTH: usize = 30;
const LIST_HEADER: &str = "--- Employee List ---";

mod colors {
    use colored::Color;

    pub const SEPARATOR: Color = Color::BrightBlack;
    pub const PRIMARY: Color = Color::BrightGreen;
    pub const ACCENT: Color = Color::Cyan;
    pub const SUCCESS: Color = Color::Green;
    pub const ERROR: Color = Color::Red;
}

pub struct TextConsole<R, W> {
    reader: R,
    writer: W,
    config: Config,
}

impl<R, W> TextConsole<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    pub fn new(reader: R, writer: W, config: Config) -> Self {
        Self {
            reader,
            writer,
            config,
        }
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    fn paint(&self, text: &str, color: Color) -> String {
        if self.config.color {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn bold(&self, text: String) -> String {
        if self.config.color {
            text.bold().to_string()
        } else {
            text
        }
    }

    async fn write(&mut self, text: &str) -> anyhow::Result<()> {
        self.writer.write_all(text.as_bytes()).await?;
        self.writer.flush().await?;
        Ok(())
    }

    /// A message set off from the previous output by a blank line.
    async fn message(&mut self, text: String) -> anyhow::Result<()> {
        self.write(&format!("\n{text}\n")).await
    }
}

#[async_trait::async_trait]
impl<R, W> Console for TextConsole<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    async fn show_menu(&mut self) -> anyhow::Result<()> {
        let fat = self.paint(&"=".repeat(MENU_WIDTH), colors::SEPARATOR);
        let thin = self.paint(&"-".repeat(MENU_WIDTH), colors::SEPARATOR);
        let title = self.bold(self.paint(TITLE, colors::PRIMARY));

        let mut menu = format!("\n{fat}\n{title}\n{fat}\n");
        for choice in MenuChoice::ALL {
            let key = self.paint(choice.key(), colors::ACCENT);
            menu.push_str(&format!("{key}. {}\n", choice.label()));
        }
        menu.push_str(&thin);
        menu.push('\n');

        self.write(&menu).await
    }

    async fn prompt(&mut self, label: &str) -> anyhow::Result<Option<String>> {
        self.write(label).await?;

        // Invalid UTF-8 becomes U+FFFD rather than an error.
        let mut buf = Vec::new();
        if self.reader.read_until(b'\n', &mut buf).await? == 0 {
            return Ok(None);
        }

        let line = String::from_utf8_lossy(&buf);
        Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
    }

    async fn show_employees(&mut self, employees: &[Employee]) -> anyhow::Result<()> {
        let mut out = format!("\n{}\n", self.paint(LIST_HEADER, colors::PRIMARY));

        if employees.is_empty() {
            out.push_str(NO_EMPLOYEES);
            out.push('\n');
        }
        for (idx, employee) in employees.iter().enumerate() {
            out.push_str(&format!(
                "{}. Name: {}, ID: {}\n",
                idx + 1,
                employee.name,
                employee.id
            ));
        }

        out.push_str(&self.paint(&"-".repeat(LIST_HEADER.len()), colors::SEPARATOR));
        out.push('\n');
        self.write(&out).await
    }

    async fn show_success(&mut self, message: &str) -> anyhow::Result<()> {
        let text = self.paint(message, colors::SUCCESS);
        self.message(text).await
    }

    async fn show_error(&mut self, err: &RosterError) -> anyhow::Result<()> {
        let text = self.paint(&err.to_string(), colors::ERROR);
        self.message(text).await
    }

    async fn farewell(&mut self) -> anyhow::Result<()> {
        let text = self.paint(FAREWELL, colors::PRIMARY);
        self.message(text).await
    }
}
