// 🖥️ Sessions - one interactive program per exercise
//
// Each session prints an optional demo section, then prompts until it has
// valid input. Library errors become a printed message and a re-prompt here;
// only end of input stops a session early.

use crate::age::classify_age;
use crate::billing::{self, calculate_power_bill, Bill, CustomerClass};
use crate::config::Config;
use crate::credentials::{check_password, CredentialStore, DEMO_USERS};
use crate::error::{AuthError, LabError, LabResult};
use crate::factorial::{self, FactorialMethod};
use crate::prompt::{PromptError, PromptResult, Prompter};
use crate::sorter::{self, ListInput, SortOrder};
use crate::student::Student;
use crate::temperature::{convert, TemperatureUnit};
use std::io::{self, BufRead, Write};
use tracing::info;

pub const FAREWELL: &str = "Program terminated by user.";

// ============================================================================
// EXERCISE SELECTION
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exercise {
    Factorial,
    Sort,
    Bill,
    Auth,
    Temperature,
    Age,
    Student,
}

impl Exercise {
    pub const ALL: [Exercise; 7] = [
        Exercise::Factorial,
        Exercise::Sort,
        Exercise::Bill,
        Exercise::Auth,
        Exercise::Temperature,
        Exercise::Age,
        Exercise::Student,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Exercise::Factorial => "Factorial calculator",
            Exercise::Sort => "List sorter",
            Exercise::Bill => "Power bill calculator",
            Exercise::Auth => "User registration and login",
            Exercise::Temperature => "Temperature converter",
            Exercise::Age => "Age classifier",
            Exercise::Student => "Student record",
        }
    }

    /// Menu entries are numbered from 1 in `ALL` order
    pub fn from_menu_choice(choice: &str) -> Option<Exercise> {
        let index: usize = choice.trim().parse().ok()?;
        index.checked_sub(1).and_then(|i| Exercise::ALL.get(i).copied())
    }

    pub fn run<R: BufRead, W: Write>(&self, p: &mut Prompter<R, W>, config: &Config) -> PromptResult<()> {
        info!(exercise = self.title(), "starting session");
        match self {
            Exercise::Factorial => factorial_session(p, config),
            Exercise::Sort => sort_session(p, config),
            Exercise::Bill => bill_session(p, config),
            Exercise::Auth => auth_session(p, config),
            Exercise::Temperature => temperature_session(p, config),
            Exercise::Age => age_session(p),
            Exercise::Student => student_session(p),
        }
    }
}

/// Run one exercise, or the menu when `exercise` is `None`.
///
/// End of input ends the program politely; only real I/O failures escape.
pub fn run_interactive<R: BufRead, W: Write>(
    exercise: Option<Exercise>,
    p: &mut Prompter<R, W>,
    config: &Config,
) -> io::Result<()> {
    let outcome = match exercise {
        Some(exercise) => exercise.run(p, config),
        None => run_menu(p, config),
    };

    match outcome {
        Ok(()) => Ok(()),
        Err(PromptError::Interrupted) => {
            info!("session interrupted");
            p.say(format!("\n{}", FAREWELL)).map_err(into_io)
        }
        Err(PromptError::Io(e)) => Err(e),
    }
}

fn into_io(e: PromptError) -> io::Error {
    match e {
        PromptError::Io(e) => e,
        PromptError::Interrupted => io::Error::new(io::ErrorKind::UnexpectedEof, "input closed by user"),
    }
}

pub fn run_menu<R: BufRead, W: Write>(p: &mut Prompter<R, W>, config: &Config) -> PromptResult<()> {
    let exit_choice = Exercise::ALL.len() + 1;
    p.heading("Lab Exercises", 30)?;

    loop {
        p.say("")?;
        for (i, exercise) in Exercise::ALL.iter().enumerate() {
            p.say(format!("{}. {}", i + 1, exercise.title()))?;
        }
        p.say(format!("{}. Exit", exit_choice))?;

        let choice = p.ask(&format!("\nEnter your choice (1-{}): ", exit_choice))?;
        match Exercise::from_menu_choice(&choice) {
            Some(exercise) => {
                p.say("")?;
                exercise.run(p, config)?;
            }
            None if choice == exit_choice.to_string() => {
                p.say("Goodbye!")?;
                return Ok(());
            }
            None => p.say(format!("Invalid choice! Please select 1-{}.", exit_choice))?,
        }
    }
}

fn parse_int(s: &str) -> LabResult<i64> {
    s.parse().map_err(|_| LabError::not_a_number(s))
}

fn parse_float(s: &str) -> LabResult<f64> {
    s.parse().map_err(|_| LabError::not_a_number(s))
}

// ============================================================================
// FACTORIAL
// ============================================================================

pub fn factorial_session<R: BufRead, W: Write>(p: &mut Prompter<R, W>, config: &Config) -> PromptResult<()> {
    p.heading("Factorial Calculator", 40)?;

    if config.show_demo {
        for method in [FactorialMethod::Iterative, FactorialMethod::Recursive] {
            p.say(format!("\nTesting {} factorial function:", method.as_str()))?;
            p.rule('-', 40)?;
            for n in factorial::DEMO_INPUTS {
                match method.compute(n) {
                    Ok(result) => p.say(format!("{}! = {}", n, result))?,
                    Err(e) => p.say(format!("Error for {}: {}", n, e))?,
                }
            }
        }
        p.say("")?;
    }

    let n = p.ask_parsed("Enter a non-negative integer to calculate factorial: ", |s| {
        let n = parse_int(s)?;
        if n < 0 {
            return Err(LabError::InvalidValue("Please enter a non-negative integer.".to_string()));
        }
        Ok(n)
    })?;

    match factorial::factorial_iterative(n) {
        Ok(result) => {
            p.say(format!("\nThe factorial of {} is: {}", n, result))?;
            p.say(format!("Mathematical notation: {}! = {}", n, result))?;
            match factorial::factorial_recursive(n) {
                Ok(recursive) => p.say(format!("Recursive result agrees: {}", recursive == result))?,
                Err(e) => p.say(format!("Recursive check skipped: {}", e))?,
            }
        }
        Err(e) => p.say(format!("Error: {}", e))?,
    }
    Ok(())
}

// ============================================================================
// SORT
// ============================================================================

fn sort_demo<R: BufRead, W: Write>(p: &mut Prompter<R, W>) -> PromptResult<()> {
    p.heading("Sorting Function Demo", 40)?;

    let numbers = sorter::demo_numbers();
    p.say("\nExample 1: Sorting numbers in ascending order")?;
    p.rule('-', 45)?;
    p.say(format!("Input:  {}", numbers))?;
    p.say(format!("Output: {}", numbers.sorted(SortOrder::Ascending)))?;

    p.say("\nExample 2: Sorting numbers in descending order")?;
    p.rule('-', 45)?;
    p.say(format!("Input:  {}", numbers))?;
    p.say(format!("Output: {}", numbers.sorted(SortOrder::Descending)))?;

    let words = sorter::demo_words();
    p.say("\nExample 3: Sorting strings")?;
    p.rule('-', 30)?;
    p.say(format!("Input:  {}", words))?;
    p.say(format!("Output: {}", words.sorted(SortOrder::Ascending)))?;

    let mixed = sorter::demo_mixed();
    p.say("\nExample 4: Sorting mixed data (strings)")?;
    p.rule('-', 40)?;
    p.say(format!("Input:  {}", mixed))?;
    p.say(format!("Output: {}", mixed.sorted(SortOrder::Ascending)))?;

    p.say("")
}

pub fn sort_session<R: BufRead, W: Write>(p: &mut Prompter<R, W>, config: &Config) -> PromptResult<()> {
    if config.show_demo {
        sort_demo(p)?;
    }

    p.heading("Interactive Sorting", 40)?;
    p.say("Enter elements separated by spaces (e.g., 5 2 8 1 9):")?;
    let line = p.ask("Enter your list: ")?;

    let Some(input) = ListInput::parse(&line) else {
        p.say("No input provided.")?;
        return Ok(());
    };

    info!(len = input.len(), element_type = input.element_type(), "sorting user list");
    p.say(format!("\nYour input: {}", input))?;
    p.say(format!("Ascending:  {}", input.sorted(SortOrder::Ascending)))?;
    p.say(format!("Descending: {}", input.sorted(SortOrder::Descending)))
}

// ============================================================================
// BILL
// ============================================================================

fn print_bill<R: BufRead, W: Write>(p: &mut Prompter<R, W>, bill: &Bill, config: &Config) -> PromptResult<()> {
    if config.json {
        match serde_json::to_string_pretty(bill) {
            Ok(json) => p.say(json),
            Err(e) => p.say(format!("Error: could not serialize bill: {}", e)),
        }
    } else {
        p.say("")?;
        p.say(bill)
    }
}

pub fn bill_session<R: BufRead, W: Write>(p: &mut Prompter<R, W>, config: &Config) -> PromptResult<()> {
    if config.show_demo {
        p.heading("Power Bill Calculation Examples", 40)?;
        for (i, (label, units, class)) in billing::demo_bills().into_iter().enumerate() {
            p.say(format!("\nExample {}: {}", i + 1, label))?;
            match calculate_power_bill(units, class) {
                Ok(bill) => print_bill(p, &bill, config)?,
                Err(e) => p.say(format!("Error: {}", e))?,
            }
        }
        p.say("")?;
    }

    p.heading("Power Bill Calculator", 30)?;
    let units = p.ask_parsed("Enter units consumed: ", |s| {
        let units = parse_float(s)?;
        if !units.is_finite() {
            return Err(LabError::not_a_number(s));
        }
        if units < 0.0 {
            return Err(LabError::InvalidValue("Units cannot be negative. Please try again.".to_string()));
        }
        Ok(units)
    })?;

    p.say("\nCustomer Types:")?;
    for (i, class) in CustomerClass::ALL.iter().enumerate() {
        p.say(format!("{}. {}", i + 1, class.title()))?;
    }
    let class = p.ask_parsed("Select customer type (1/2/3): ", |s| match s {
        "1" | "2" | "3" => s.parse::<CustomerClass>(),
        _ => Err(LabError::InvalidValue("Please select 1, 2, or 3.".to_string())),
    })?;

    match calculate_power_bill(units, class) {
        Ok(bill) => print_bill(p, &bill, config),
        Err(e) => p.say(format!("Error: {}", e)),
    }
}

// ============================================================================
// AUTH
// ============================================================================

fn auth_demo<R: BufRead, W: Write>(p: &mut Prompter<R, W>) -> PromptResult<CredentialStore> {
    p.heading("Demo: Registration and Login System", 40)?;

    p.say("\n--- Demo Registration ---")?;
    let store = CredentialStore::with_demo_users();
    for (username, _) in DEMO_USERS {
        if store.contains(username) {
            p.say(format!("Registered: {}", username))?;
        }
    }

    p.say("\n--- Demo Login ---")?;
    let (username, password) = DEMO_USERS[0];
    match store.login(username, password) {
        Ok(_) => p.say(format!("Login successful for: {}", username))?,
        Err(_) => p.say(format!("Login failed for: {}", username))?,
    }
    match store.login(username, "wrongpass") {
        Ok(_) => p.say(format!("Login successful for: {}", username))?,
        Err(e) => p.say(format!("Login failed for: {} ({})", username, e))?,
    }

    p.say("")?;
    p.rule('=', 50)?;
    Ok(store)
}

fn register_user<R: BufRead, W: Write>(p: &mut Prompter<R, W>, store: &mut CredentialStore) -> PromptResult<bool> {
    p.say("\n=== USER REGISTRATION ===")?;

    let username = p.ask("Enter username: ")?;
    if let Err(e) = store.check_username(&username) {
        p.say(format!("Error: {}", e))?;
        return Ok(false);
    }

    let password = p.ask("Enter password: ")?;
    if let Err(e) = check_password(&password) {
        p.say(format!("Error: {}", e))?;
        return Ok(false);
    }

    let confirm = p.ask("Confirm password: ")?;
    match store.register(&username, &password, &confirm) {
        Ok(credential) => {
            p.say(format!("Success: User '{}' registered successfully!", credential.username))?;
            Ok(true)
        }
        Err(e) => {
            p.say(format!("Error: {}", e))?;
            Ok(false)
        }
    }
}

fn login_user<R: BufRead, W: Write>(p: &mut Prompter<R, W>, store: &CredentialStore) -> PromptResult<bool> {
    p.say("\n=== USER LOGIN ===")?;

    let username = p.ask("Enter username: ")?;
    if !store.contains(&username) {
        p.say(format!("Error: {}", AuthError::UnknownUsername))?;
        return Ok(false);
    }

    let password = p.ask("Enter password: ")?;
    match store.login(&username, &password) {
        Ok(credential) => {
            p.say(format!("Success: Welcome back, {}!", credential.username))?;
            Ok(true)
        }
        Err(e) => {
            p.say(format!("Error: {}", e))?;
            Ok(false)
        }
    }
}

fn display_users<R: BufRead, W: Write>(p: &mut Prompter<R, W>, store: &CredentialStore) -> PromptResult<()> {
    p.say("\n=== REGISTERED USERS ===")?;
    if store.is_empty() {
        p.say("No users registered yet.")?;
    } else {
        for username in store.usernames() {
            p.say(format!("Username: {}", username))?;
        }
    }
    p.rule('=', 25)
}

pub fn auth_session<R: BufRead, W: Write>(p: &mut Prompter<R, W>, config: &Config) -> PromptResult<()> {
    let mut store = if config.show_demo {
        auth_demo(p)?
    } else {
        CredentialStore::new()
    };

    p.heading("User Authentication System", 30)?;
    loop {
        p.say("\nChoose an option:")?;
        p.say("1. Register new user")?;
        p.say("2. Login user")?;
        p.say("3. Display all users")?;
        p.say("4. Exit")?;

        let choice = p.ask("\nEnter your choice (1-4): ")?;
        match choice.as_str() {
            "1" => {
                register_user(p, &mut store)?;
            }
            "2" => {
                login_user(p, &store)?;
            }
            "3" => display_users(p, &store)?,
            "4" => {
                p.say("Goodbye!")?;
                return Ok(());
            }
            _ => p.say("Invalid choice! Please select 1-4.")?,
        }
    }
}

// ============================================================================
// TEMPERATURE / AGE / STUDENT
// ============================================================================

pub fn temperature_session<R: BufRead, W: Write>(p: &mut Prompter<R, W>, config: &Config) -> PromptResult<()> {
    p.heading("Temperature Converter", 24)?;
    let units: Vec<String> = TemperatureUnit::ALL
        .iter()
        .map(|u| format!("{} ({})", u.symbol(), u.name()))
        .collect();
    p.say(format!("Supported units: {}", units.join(", ")))?;

    let from = p.ask_parsed("From unit (C/F/K): ", |s| s.parse::<TemperatureUnit>())?;
    let to = p.ask_parsed("To unit (C/F/K): ", |s| s.parse::<TemperatureUnit>())?;
    let value = p.ask_parsed("Enter value: ", parse_float)?;

    match convert(value, from, to, Some(config.precision)) {
        Ok(result) => p.say(format!("Result: {:?} {}", result, to.symbol())),
        Err(e) => p.say(format!("Error: {}", e)),
    }
}

pub fn age_session<R: BufRead, W: Write>(p: &mut Prompter<R, W>) -> PromptResult<()> {
    let age = p.ask_parsed("Enter age: ", parse_int)?;
    p.say(format!("Age group: {}", classify_age(age)))
}

pub fn student_session<R: BufRead, W: Write>(p: &mut Prompter<R, W>) -> PromptResult<()> {
    let name = p.ask("Enter student name: ")?;
    let roll_no = p.ask("Enter roll number: ")?;
    let student = p.ask_parsed("Enter marks: ", |s| Student::parse(&name, &roll_no, s))?;

    p.say(format!("Student class: {}", std::any::type_name::<Student>()))?;
    p.say(student.display())
}
