// Every execution error halts the run, reports the offending line to the
// sink, and prints the error exit message.

use std::time::Duration;

use stepasm::interpreter::engine::{Interpreter, RunState, EXIT_WITH_ERROR};
use stepasm::machine::MachineConfig;
use stepasm::program::Program;
use stepasm::sink::EventLog;

fn test_config() -> MachineConfig {
    MachineConfig {
        step_delay: Duration::ZERO,
        ..MachineConfig::default()
    }
}

fn run_with(source: &str, config: MachineConfig) -> (Interpreter<Program>, EventLog) {
    let mut interpreter = Interpreter::new(Program::new(source), config);
    let mut log = EventLog::new();
    interpreter.get_ready_to_run(&mut log);
    interpreter.fast_forward(&mut log);
    (interpreter, log)
}

/// Run to the halt and return the single reported (line, message) pair.
fn run_to_error(source: &str) -> (usize, String) {
    let (interpreter, log) = run_with(source, test_config());

    assert_eq!(interpreter.state(), RunState::Halted);
    assert_eq!(
        log.printed().last().copied(),
        Some(EXIT_WITH_ERROR),
        "halt must print the error exit message"
    );

    let errors = log.errors();
    assert_eq!(errors.len(), 1, "expected exactly one reported error");
    (errors[0].0, errors[0].1.to_string())
}

#[test]
fn unrecognized_opcode() {
    let (line, message) = run_to_error("FOO 1 2");
    assert_eq!(line, 0);
    assert!(message.contains("Unrecognized opcode 'FOO'"));
}

#[test]
fn wrong_argument_count() {
    let (_, message) = run_to_error("ADD 1 2");
    assert!(message.contains("ADD expects 3 arguments, got 2"));
}

#[test]
fn destination_must_be_a_register() {
    let (_, message) = run_to_error("MOV 5 9");
    assert!(message.contains("Expected a register, got '9'"));
}

#[test]
fn undeclared_register_as_destination() {
    let (_, message) = run_to_error("MOV 5 R9");
    assert!(message.contains("Expected a register, got 'R9'"));
}

#[test]
fn operand_that_is_neither_register_nor_literal() {
    let (_, message) = run_to_error("ADD R9 1 R0");
    assert!(message.contains("'R9' is neither a register nor an integer literal"));
}

#[test]
fn literal_outside_the_configured_range() {
    let (_, message) = run_to_error("MOV 99999 R0");
    assert!(message.contains("Number 99999 outside the bounds [-32768, 32767]"));
}

#[test]
fn arithmetic_overflow_on_store() {
    let (_, message) = run_to_error("ADD 32767 1 R0");
    assert!(message.contains("Number 32768 outside the bounds"));
}

#[test]
fn shift_amount_out_of_range() {
    let (_, message) = run_to_error("ASL 1 64 R0");
    assert!(message.contains("Number 64 outside the bounds"));
}

#[test]
fn non_printable_append_value() {
    let (_, message) = run_to_error("APND 10");
    assert!(message.contains("Value 10 outside the printable ASCII range"));
}

#[test]
fn string_buffer_overflow() {
    let config = MachineConfig {
        buffer_capacity: 2,
        ..test_config()
    };
    let (interpreter, log) = run_with("APND 65\nAPND 66\nAPND 67", config);

    assert_eq!(interpreter.state(), RunState::Halted);
    let errors = log.errors();
    assert_eq!(errors[0].0, 2);
    assert!(errors[0].1.contains("String buffer full (2 characters)"));
}

#[test]
fn undeclared_label() {
    let (_, message) = run_to_error("BR NOWHERE");
    assert!(message.contains("Reference to undeclared label 'NOWHERE'"));
}

#[test]
fn line_literal_below_one() {
    let (_, message) = run_to_error("BR 0");
    assert!(message.contains("Reference to undeclared label '0'"));
}

#[test]
fn label_declaration_with_whitespace() {
    let (line, message) = run_to_error("MOV 1 R0\nBAD LABEL:");
    // Reported against the declaration line, found during the label scan
    assert_eq!(line, 1);
    assert!(message.contains("contains whitespace"));
}

#[test]
fn error_is_reported_against_the_executed_line() {
    let (line, _) = run_to_error("MOV 1 R0\n# comment\nFOO");
    assert_eq!(line, 2);
}

#[test]
fn halted_engine_ignores_further_steps() {
    let (mut interpreter, _) = run_with("FOO", test_config());
    assert_eq!(interpreter.state(), RunState::Halted);

    let mut log = EventLog::new();
    assert_eq!(interpreter.step(&mut log), RunState::Halted);
    assert!(log.events.is_empty());
}
