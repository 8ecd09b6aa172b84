use roster_common::config::Config;
use roster_common::employee::Employee;
use roster_core::console::TextConsole;
use roster_core::service::RosterService;
use roster_core::session::Session;

/// The menu block followed by the choice prompt, as it appears on stdout.
pub const MENU: &str = "\n==============================\n\
                        Employee Management System\n\
                        ==============================\n\
                        1. Add Employee\n\
                        2. List Employees\n\
                        3. Remove Employee\n\
                        4. Exit\n\
                        ------------------------------\n\
                        Enter your choice: ";

pub const GOODBYE: &str = "\nExiting Employee Management System. Goodbye!\n";

pub struct Transcript {
    pub output: String,
    pub employees: Vec<Employee>,
}

impl Transcript {
    pub fn ids(&self) -> Vec<&str> {
        self.employees.iter().map(|e| e.id.as_str()).collect()
    }

    pub fn menus(&self) -> usize {
        self.output.matches(MENU).count()
    }
}

/// Runs a whole seeded session over `input` with colours off.
pub async fn run_script(input: &str) -> anyhow::Result<Transcript> {
    run_bytes(input.as_bytes()).await
}

/// Like [`run_script`], for input that need not be valid UTF-8.
pub async fn run_bytes(input: &[u8]) -> anyhow::Result<Transcript> {
    let console = TextConsole::new(input, Vec::new(), Config::plain());
    let mut session = Session::new(RosterService::seeded(), console);
    session.run().await?;

    let employees = session.employees().to_vec();
    let output = String::from_utf8(session.into_console().into_writer())?;
    Ok(Transcript { output, employees })
}

pub fn listing(rows: &[(&str, &str)]) -> String {
    let mut out = String::from("\n--- Employee List ---\n");
    if rows.is_empty() {
        out.push_str("No employees found.\n");
    }
    for (idx, (name, id)) in rows.iter().enumerate() {
        out.push_str(&format!("{}. Name: {name}, ID: {id}\n", idx + 1));
    }
    out.push_str("---------------------\n");
    out
}
