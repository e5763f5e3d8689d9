use log::warn;
use reedline::{Reedline, Signal};

use phonebook::{
    phone,
    PhoneType,
};

use crate::prompt::QuestionPrompt;

/// Typing this at any prompt inside a sub-flow returns to the menu.
pub(crate) const CANCEL: &str = "0";

pub(crate) struct Console {
    editor  : Reedline,
    title   : String,
    yes     : String,
    no      : String,
}

impl Console {
    /// `title` names the open data file and is shown on the right of every prompt.
    pub(crate) fn new(title: &str, yes: &str, no: &str) -> Self {
        Self {
            editor  : Reedline::create(),
            title   : title.to_string(),
            yes     : yes.to_lowercase(),
            no      : no.to_lowercase(),
        }
    }

    /// Reads one trimmed line. Ctrl-C, Ctrl-D and read failures give `None`.
    pub(crate) fn read(&mut self, label: &str) -> Option<String> {
        match self.editor.read_line(&QuestionPrompt::new(label, &self.title)) {
            Ok(Signal::Success(line)) => Some(line.trim().to_string()),
            Ok(_) => None,
            Err(e) => {
                warn!("Reading input error: {e}");
                None
            }
        }
    }

    /// Same as `read`, with the cancel token also giving `None`.
    pub(crate) fn ask(&mut self, label: &str) -> Option<String> {
        self.read(label).filter(|v| v != CANCEL)
    }

    pub(crate) fn confirm(&mut self, question: &str) -> Option<bool> {
        let label = format!("{} ({}/{}, {} for menu)", question, self.yes, self.no, CANCEL);
        loop {
            let answer = self.ask(&label)?.to_lowercase();
            if answer == self.yes {
                return Some(true);
            }
            if answer == self.no {
                return Some(false);
            }
            println!("Please answer '{}' for yes or '{}' for no.", self.yes, self.no);
        }
    }

    /// Asks for a 1-based position among `count` items and returns it 0-based.
    pub(crate) fn choose(&mut self, label: &str, count: usize) -> Option<usize> {
        loop {
            let answer = self.ask(label)?;
            match answer.parse::<usize>() {
                Ok(n) if n >= 1 && n <= count => return Some(n - 1),
                _ => println!("Invalid number, enter 1 to {} or {} for menu.", count, CANCEL),
            }
        }
    }

    pub(crate) fn phone_number(&mut self, label: &str, min_digits: usize) -> Option<String> {
        loop {
            let number = self.ask(label)?;
            if phone::validate(&number, min_digits) {
                return Some(number);
            }
            print_format_hint(min_digits);
        }
    }

    /// Like `phone_number`, but an empty answer keeps the old number (`Some(None)`).
    pub(crate) fn phone_number_or_keep(&mut self, label: &str, min_digits: usize) -> Option<Option<String>> {
        loop {
            let number = self.ask(label)?;
            if number.is_empty() {
                return Some(None);
            }
            if phone::validate(&number, min_digits) {
                return Some(Some(number));
            }
            print_format_hint(min_digits);
        }
    }

    pub(crate) fn phone_type(&mut self) -> Option<PhoneType> {
        loop {
            print_type_menu();
            let answer = self.ask("Number type (0 for menu)")?;
            match type_from_choice(&answer) {
                Some(v) => return Some(v),
                None => println!("Choose 1, 2 or 3."),
            }
        }
    }

    pub(crate) fn phone_type_or_keep(&mut self, current: PhoneType) -> Option<PhoneType> {
        loop {
            print_type_menu();
            let answer = self.ask(&format!("Number type ({}, Enter to keep)", current))?;
            if answer.is_empty() {
                return Some(current);
            }
            match type_from_choice(&answer) {
                Some(v) => return Some(v),
                None => println!("Choose 1, 2 or 3, or press Enter."),
            }
        }
    }
}

fn type_from_choice(answer: &str) -> Option<PhoneType> {
    answer.parse::<usize>().ok()
        .filter(|v| *v >= 1)
        .and_then(|v| PhoneType::ALL.get(v - 1).copied())
}

fn print_type_menu() {
    let items = PhoneType::ALL.iter()
        .enumerate()
        .map(|(i, v)| format!("{} - {}", i + 1, v))
        .collect::<Vec<_>>();
    println!("Number type: {}", items.join(", "));
}

fn print_format_hint(min_digits: usize) {
    println!(
        "Invalid number format. Allowed: an optional leading '+', digits, and '#' after at least {} digits.",
        min_digits
    );
}
