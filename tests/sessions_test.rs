//! Interactive sessions driven through in-memory input/output

use lab_exercises::{run_interactive, Config, Exercise, Prompter};
use std::io::Cursor;

fn run(exercise: Option<Exercise>, config: &Config, input: &str) -> String {
    let mut prompter = Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
    run_interactive(exercise, &mut prompter, config).unwrap();
    String::from_utf8(prompter.into_output()).unwrap()
}

fn quiet() -> Config {
    Config::default().with_demo(false)
}

// ============================================================================
// FACTORIAL
// ============================================================================

#[test]
fn test_factorial_reprompts_until_non_negative() {
    let out = run(Some(Exercise::Factorial), &quiet(), "abc\n-3\n5\n");

    assert!(out.contains("Error: 'abc' is not a valid number"));
    assert!(out.contains("Error: Please enter a non-negative integer."));
    assert!(out.contains("The factorial of 5 is: 120"));
    assert!(out.contains("Mathematical notation: 5! = 120"));
    assert!(out.contains("Recursive result agrees: true"));
}

#[test]
fn test_factorial_demo_lists_both_methods() {
    let out = run(Some(Exercise::Factorial), &Config::default(), "0\n");

    assert!(out.contains("Testing iterative factorial function:"));
    assert!(out.contains("Testing recursive factorial function:"));
    assert_eq!(out.matches("10! = 3628800").count(), 2);
}

// ============================================================================
// SORT
// ============================================================================

#[test]
fn test_sort_numbers_both_ways() {
    let out = run(Some(Exercise::Sort), &quiet(), "5 2 8 1 9\n");

    assert!(out.contains("Your input: [5, 2, 8, 1, 9]"));
    assert!(out.contains("Ascending:  [1, 2, 5, 8, 9]"));
    assert!(out.contains("Descending: [9, 8, 5, 2, 1]"));
}

#[test]
fn test_sort_words() {
    let out = run(Some(Exercise::Sort), &quiet(), "pear apple fig\n");
    assert!(out.contains("Ascending:  ['apple', 'fig', 'pear']"));
}

#[test]
fn test_sort_empty_input() {
    let out = run(Some(Exercise::Sort), &quiet(), "\n");
    assert!(out.contains("No input provided."));
}

#[test]
fn test_sort_demo() {
    let out = run(Some(Exercise::Sort), &Config::default(), "\n");
    assert!(out.contains("Output: [11, 12, 22, 25, 34, 64, 90]"));
    assert!(out.contains("Output: [90, 64, 34, 25, 22, 12, 11]"));
    assert!(out.contains("Output: ['apple', 'banana', 'blueberry', 'cherry', 'date']"));
    assert!(!out.contains('"'));
}

// ============================================================================
// BILL
// ============================================================================

#[test]
fn test_bill_reprompts_then_prints_receipt() {
    let out = run(Some(Exercise::Bill), &quiet(), "abc\n-5\n150\n9\n1\n");

    assert!(out.contains("Error: 'abc' is not a valid number"));
    assert!(out.contains("Error: Units cannot be negative. Please try again."));
    assert!(out.contains("Error: Please select 1, 2, or 3."));
    assert!(out.contains("SLAB1: 100.00 units × ₹3.50 = ₹350.00"));
    assert!(out.contains("SLAB2: 50.00 units × ₹4.50 = ₹225.00"));
    assert!(!out.contains("SLAB3"));
    assert!(out.contains("TOTAL AMOUNT:      ₹668.75"));
}

#[test]
fn test_bill_json_output() {
    let config = quiet().with_json(true);
    let out = run(Some(Exercise::Bill), &config, "0\n2\n");

    assert!(out.contains("\"customer_type\": \"commercial\""));
    assert!(out.contains("\"subtotal\": 100.0"));
    assert!(out.contains("\"slab_details\": []"));
}

#[test]
fn test_bill_demo_examples() {
    let out = run(Some(Exercise::Bill), &Config::default(), "");

    assert!(out.contains("Example 1: Residential Customer (150 units)"));
    assert!(out.contains("Example 3: Industrial Customer (800 units)"));
    assert!(out.contains("Customer Type:     Industrial"));
}

// ============================================================================
// AUTH
// ============================================================================

#[test]
fn test_auth_register_login_flow() {
    let input = [
        "1", "ab", // too short
        "1", "alice", "secret1", "secret1", // ok
        "1", "alice", // duplicate
        "2", "alice", "wrong", // bad password
        "2", "alice", "secret1", // ok
        "2", "nobody", // unknown
        "3", "7", "4",
    ]
    .join("\n")
        + "\n";

    let out = run(Some(Exercise::Auth), &quiet(), &input);

    assert!(out.contains("Error: Username must be at least 3 characters long!"));
    assert!(out.contains("Success: User 'alice' registered successfully!"));
    assert!(out.contains("Error: Username already exists!"));
    assert!(out.contains("Error: Incorrect password!"));
    assert!(out.contains("Success: Welcome back, alice!"));
    assert!(out.contains("Error: Username not found!"));
    assert!(out.contains("Username: alice"));
    assert!(out.contains("Invalid choice! Please select 1-4."));
    assert!(out.trim_end().ends_with("Goodbye!"));
}

#[test]
fn test_auth_password_rules() {
    let input = "1\nalice\n123\n1\nalice\nsecret1\nsecret2\n3\n4\n";
    let out = run(Some(Exercise::Auth), &quiet(), input);

    assert!(out.contains("Error: Password must be at least 6 characters long!"));
    assert!(out.contains("Error: Passwords do not match!"));
    assert!(out.contains("No users registered yet."));
}

#[test]
fn test_auth_demo_seeds_users() {
    let out = run(Some(Exercise::Auth), &Config::default(), "3\n4\n");

    assert!(out.contains("Registered: john_doe"));
    assert!(out.contains("Login successful for: john_doe"));
    assert!(out.contains("Login failed for: john_doe (Incorrect password!)"));
    assert!(out.contains("Username: admin"));
}

// ============================================================================
// TEMPERATURE / AGE / STUDENT
// ============================================================================

#[test]
fn test_temperature_conversion() {
    let out = run(Some(Exercise::Temperature), &quiet(), "x\nC\nfahrenheit\nwarm\n0\n");

    assert!(out.contains("Error: Unsupported unit. Use one of: C/Celsius, F/Fahrenheit, K/Kelvin"));
    assert!(out.contains("Error: 'warm' is not a valid number"));
    assert!(out.contains("Supported units: C (Celsius), F (Fahrenheit), K (Kelvin)"));
    assert!(out.contains("Result: 32.0 F"));
}

#[test]
fn test_temperature_negative_kelvin() {
    let out = run(Some(Exercise::Temperature), &quiet(), "K\nC\n-1\n");
    assert!(out.contains("Error: Kelvin cannot be negative."));
}

#[test]
fn test_temperature_precision() {
    let config = quiet().with_precision(0);
    let out = run(Some(Exercise::Temperature), &config, "C\nF\n36.6\n");
    assert!(out.contains("Result: 98.0 F"));
}

#[test]
fn test_age_classification() {
    let out = run(Some(Exercise::Age), &quiet(), "old\n13\n");

    assert!(out.contains("Error: 'old' is not a valid number"));
    assert!(out.contains("Age group: Teen"));
}

#[test]
fn test_age_negative() {
    let out = run(Some(Exercise::Age), &quiet(), "-1\n");
    assert!(out.contains("Age group: Invalid age"));
}

#[test]
fn test_student_record() {
    let out = run(Some(Exercise::Student), &quiet(), "Asha\nCS-042\neighty\n87.5\n");

    assert!(out.contains("Error: 'eighty' is not a valid number"));
    assert!(out.contains("Student class:"));
    assert!(out.contains("Details of the student:\nName: Asha\nRoll No: CS-042\nMarks: 87.5"));
}

// ============================================================================
// MENU / INTERRUPT
// ============================================================================

#[test]
fn test_menu_dispatch_and_exit() {
    let out = run(None, &quiet(), "9\n6\n30\n8\n");

    assert!(out.contains("Invalid choice! Please select 1-8."));
    assert!(out.contains("Age group: Adult"));
    assert!(out.trim_end().ends_with("Goodbye!"));
}

#[test]
fn test_closed_input_says_farewell() {
    let out = run(Some(Exercise::Age), &quiet(), "");
    assert!(out.trim_end().ends_with("Program terminated by user."));

    let out = run(None, &quiet(), "6\n");
    assert!(out.trim_end().ends_with("Program terminated by user."));
}
