// UI layer: the menu navigator.
//
// Each screen draws itself, handles one selection and names the screen to
// show next. `Navigator::run` drives that loop until `Screen::Exit`, so long
// sessions never grow the call stack.

use crate::calc::{self, Operation};
use crate::console::Console;
use crate::files::{self, FileName};
use crate::system::SystemInfo;
use anyhow::{Context, Result};
use log::{debug, info};
use std::path::PathBuf;
use std::time::Instant;

/// The screens of the application. `Exit` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Main,
    Files,
    Calculator,
    SystemInfo,
    Exit,
}

/// Main menu entries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainChoice {
    FileOperations,
    Calculator,
    SystemInfo,
    Exit,
}

impl MainChoice {
    pub fn label(&self) -> &'static str {
        match self {
            MainChoice::FileOperations => "File Operations",
            MainChoice::Calculator => "Calculator",
            MainChoice::SystemInfo => "System Info",
            MainChoice::Exit => "Exit",
        }
    }

    pub fn all() -> [MainChoice; 4] {
        [
            MainChoice::FileOperations,
            MainChoice::Calculator,
            MainChoice::SystemInfo,
            MainChoice::Exit,
        ]
    }
}

/// File menu entries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileChoice {
    List,
    Create,
    Read,
    Back,
}

impl FileChoice {
    pub fn label(&self) -> &'static str {
        match self {
            FileChoice::List => "List directory contents",
            FileChoice::Create => "Create new file",
            FileChoice::Read => "Read file",
            FileChoice::Back => BACK_LABEL,
        }
    }

    pub fn all() -> [FileChoice; 4] {
        [
            FileChoice::List,
            FileChoice::Create,
            FileChoice::Read,
            FileChoice::Back,
        ]
    }
}

/// Calculator menu entries: one per operation, then Back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalcChoice {
    Op(Operation),
    Back,
}

impl CalcChoice {
    pub fn label(&self) -> &'static str {
        match self {
            CalcChoice::Op(op) => op.name(),
            CalcChoice::Back => BACK_LABEL,
        }
    }

    pub fn all() -> Vec<CalcChoice> {
        let mut choices: Vec<CalcChoice> = Operation::all().into_iter().map(CalcChoice::Op).collect();
        choices.push(CalcChoice::Back);
        choices
    }
}

pub const BACK_LABEL: &str = "Back to main menu";
pub const NO_FILES: &str = "No files found in current directory.";
pub const PRESS_ANY_KEY: &str = "Press any key to continue...";

/// Show `choices` through the console and map the picked index back.
fn choose<C: Console, T: Copy>(
    console: &mut C,
    prompt: &str,
    choices: &[T],
    label: fn(&T) -> &'static str,
) -> Result<T> {
    let labels: Vec<&str> = choices.iter().map(label).collect();
    let index = console.select(prompt, &labels)?;
    let choice = choices
        .get(index)
        .copied()
        .with_context(|| format!("selection {} out of range for '{}'", index, prompt))?;
    debug!("'{}' -> {}", prompt, labels[index]);
    Ok(choice)
}

/// Navigator context: the console it talks to, the directory file
/// operations act on, and when the process started.
pub struct Navigator<C: Console> {
    console: C,
    cwd: PathBuf,
    started: Instant,
}

impl<C: Console> Navigator<C> {
    pub fn new(console: C, cwd: impl Into<PathBuf>, started: Instant) -> Self {
        Navigator {
            console,
            cwd: cwd.into(),
            started,
        }
    }

    pub fn console(&self) -> &C {
        &self.console
    }

    pub fn into_console(self) -> C {
        self.console
    }

    /// Run from `start` until the user picks Exit. Errors from the file
    /// system or the console end the loop and are returned as-is.
    pub fn run(&mut self, start: Screen) -> Result<()> {
        let mut screen = start;
        while screen != Screen::Exit {
            screen = self.step(screen)?;
        }
        Ok(())
    }

    /// Show one screen and return the next one.
    pub fn step(&mut self, screen: Screen) -> Result<Screen> {
        info!("entering {:?}", screen);
        match screen {
            Screen::Main => self.main_menu(),
            Screen::Files => self.file_menu(),
            Screen::Calculator => self.calculator_menu(),
            Screen::SystemInfo => self.system_info(),
            Screen::Exit => Ok(Screen::Exit),
        }
    }

    fn main_menu(&mut self) -> Result<Screen> {
        self.banner(
            "=== MAIN MENU ===",
            &[
                "Welcome to the Interactive Console Application!",
                "This application demonstrates:",
                "1. File operations on the current directory",
                "2. Mathematical calculations",
                "3. System information display",
                "4. clap for command parsing",
                "5. dialoguer for interactive menus\n",
            ],
        )?;

        let choice = choose(
            &mut self.console,
            "Choose an option:",
            &MainChoice::all(),
            MainChoice::label,
        )?;
        Ok(match choice {
            MainChoice::FileOperations => Screen::Files,
            MainChoice::Calculator => Screen::Calculator,
            MainChoice::SystemInfo => Screen::SystemInfo,
            MainChoice::Exit => {
                self.console.println("Goodbye!")?;
                Screen::Exit
            }
        })
    }

    fn file_menu(&mut self) -> Result<Screen> {
        self.banner(
            "=== FILE OPERATIONS ===",
            &["This menu allows you to perform file operations in the current directory"],
        )?;

        let choice = choose(
            &mut self.console,
            "Choose file operation:",
            &FileChoice::all(),
            FileChoice::label,
        )?;
        match choice {
            FileChoice::List => self.list_directory()?,
            FileChoice::Create => self.create_file()?,
            FileChoice::Read => self.read_file()?,
            FileChoice::Back => return Ok(Screen::Main),
        }
        Ok(Screen::Files)
    }

    fn list_directory(&mut self) -> Result<()> {
        let entries = files::list_entries(&self.cwd)?;
        self.console.println("\nCurrent directory contents:")?;
        for entry in &entries {
            self.console.println(&entry.to_string())?;
        }
        self.press_any_key()
    }

    fn create_file(&mut self) -> Result<()> {
        let name: FileName = self.console.filename("Enter filename:")?;
        let content = self.console.text("Enter file content:")?;

        files::write_file(&self.cwd, &name, &content)?;
        self.console
            .println(&format!("File \"{}\" created successfully!", name))?;
        self.press_any_key()
    }

    fn read_file(&mut self) -> Result<()> {
        let names = files::regular_files(&self.cwd)?;
        if names.is_empty() {
            self.console.println(NO_FILES)?;
            return self.press_any_key();
        }

        let labels: Vec<&str> = names.iter().map(String::as_str).collect();
        let index = self.console.select("Select file to read:", &labels)?;
        let name = names
            .get(index)
            .with_context(|| format!("selection {} out of range", index))?;

        // The file may have vanished since it was listed; that error
        // propagates like any other.
        let content = files::read_file(&self.cwd, name)?;
        self.console.println(&format!("\nContent of \"{}\":", name))?;
        self.console.println(&files::rule())?;
        self.console.println(&content)?;
        self.console.println(&files::rule())?;
        self.press_any_key()
    }

    fn calculator_menu(&mut self) -> Result<Screen> {
        self.banner("=== CALCULATOR ===", &["Perform mathematical calculations"])?;

        let choice = choose(
            &mut self.console,
            "Choose operation:",
            &CalcChoice::all(),
            CalcChoice::label,
        )?;
        let op = match choice {
            CalcChoice::Op(op) => op,
            CalcChoice::Back => return Ok(Screen::Main),
        };

        let lhs = self.console.number("Enter first number:")?;
        let rhs = self.console.number("Enter second number:")?;
        debug!("{:?}({}, {})", op, lhs, rhs);

        self.console
            .println(&format!("\n{}", calc::result_line(op, lhs, rhs)))?;
        self.press_any_key()?;
        Ok(Screen::Calculator)
    }

    // Returns to Main, unlike Files and Calculator which return to
    // themselves.
    fn system_info(&mut self) -> Result<Screen> {
        self.banner(
            "=== SYSTEM INFORMATION ===",
            &["Displaying current system information:\n"],
        )?;

        let info = SystemInfo::collect(&self.cwd, self.started.elapsed());
        for line in info.lines() {
            self.console.println(&line)?;
        }
        self.press_any_key()?;
        Ok(Screen::Main)
    }

    fn press_any_key(&mut self) -> Result<()> {
        self.console.println(&format!("\n{}", PRESS_ANY_KEY))?;
        self.console.wait_for_key()
    }

    fn banner(&mut self, title: &str, lines: &[&str]) -> Result<()> {
        self.console.clear()?;
        self.console.println(title)?;
        for line in lines {
            self.console.println(line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::{Answer, ScriptedConsole};
    use tempfile::TempDir;

    fn select(label: &str) -> Answer {
        Answer::Select(label.to_string())
    }

    fn navigator(dir: &TempDir, answers: Vec<Answer>) -> Navigator<ScriptedConsole> {
        Navigator::new(ScriptedConsole::new(answers), dir.path(), Instant::now())
    }

    #[test]
    fn test_menu_labels_in_order() {
        let main: Vec<_> = MainChoice::all().iter().map(MainChoice::label).collect();
        assert_eq!(main, ["File Operations", "Calculator", "System Info", "Exit"]);
        let calc: Vec<_> = CalcChoice::all().iter().map(CalcChoice::label).collect();
        assert_eq!(calc, ["Add", "Subtract", "Multiply", "Divide", BACK_LABEL]);
        assert_eq!(FileChoice::all()[3].label(), BACK_LABEL);
    }

    #[test]
    fn test_main_menu_transitions() {
        let dir = TempDir::new().unwrap();
        let cases = [
            ("File Operations", Screen::Files),
            ("Calculator", Screen::Calculator),
            ("System Info", Screen::SystemInfo),
            ("Exit", Screen::Exit),
        ];
        for (label, next) in cases {
            let mut nav = navigator(&dir, vec![select(label)]);
            assert_eq!(nav.step(Screen::Main).unwrap(), next);
        }
    }

    #[test]
    fn test_back_returns_to_main() {
        let dir = TempDir::new().unwrap();
        let mut nav = navigator(&dir, vec![select(BACK_LABEL)]);
        assert_eq!(nav.step(Screen::Files).unwrap(), Screen::Main);
        let mut nav = navigator(&dir, vec![select(BACK_LABEL)]);
        assert_eq!(nav.step(Screen::Calculator).unwrap(), Screen::Main);
    }

    #[test]
    fn test_calculator_returns_to_itself() {
        let dir = TempDir::new().unwrap();
        let mut nav = navigator(
            &dir,
            vec![select("Multiply"), Answer::Number(6.0), Answer::Number(7.0), Answer::Key],
        );
        assert_eq!(nav.step(Screen::Calculator).unwrap(), Screen::Calculator);
        assert!(nav
            .console()
            .output()
            .iter()
            .any(|l| l == "Result: 6 Multiply 7 = 42"));
    }

    #[test]
    fn test_system_info_returns_to_main() {
        let dir = TempDir::new().unwrap();
        let mut nav = navigator(&dir, vec![Answer::Key]);
        assert_eq!(nav.step(Screen::SystemInfo).unwrap(), Screen::Main);
        let out = nav.console().output();
        assert!(out.iter().any(|l| l.starts_with("Platform: ")));
        assert!(out.iter().any(|l| l.starts_with("Uptime: ")));
    }

    #[test]
    fn test_exit_prints_goodbye() {
        let dir = TempDir::new().unwrap();
        let mut nav = navigator(&dir, vec![select("Exit")]);
        nav.run(Screen::Main).unwrap();
        assert_eq!(nav.console().output().last().map(String::as_str), Some("Goodbye!"));
    }

    #[test]
    fn test_each_menu_clears_screen() {
        let dir = TempDir::new().unwrap();
        let mut nav = navigator(&dir, vec![select("Calculator"), select(BACK_LABEL), select("Exit")]);
        nav.run(Screen::Main).unwrap();
        assert_eq!(nav.console().clears(), 3);
    }
}
