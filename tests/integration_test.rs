// Integration tests for the assembly execution engine

use std::time::Duration;

use stepasm::interpreter::engine::{Interpreter, RunState, EXIT_NORMAL, EXIT_WITH_ERROR};
use stepasm::machine::registers::MH;
use stepasm::machine::{MachineConfig, Word};
use stepasm::program::Program;
use stepasm::sink::{Event, EventLog};

fn test_config() -> MachineConfig {
    MachineConfig {
        step_delay: Duration::ZERO,
        ..MachineConfig::default()
    }
}

/// Run a program to completion (or halt) and return the engine and event log.
fn run(source: &str) -> (Interpreter<Program>, EventLog) {
    let mut interpreter = Interpreter::new(Program::new(source), test_config());
    let mut log = EventLog::new();
    interpreter.get_ready_to_run(&mut log);
    interpreter.fast_forward(&mut log);
    (interpreter, log)
}

fn register(interpreter: &Interpreter<Program>, name: &str) -> Word {
    let id = interpreter
        .registers()
        .resolve(name)
        .expect("register not declared");
    interpreter.registers().get(id)
}

#[test]
fn mov_copies_literals_and_registers() {
    let (interpreter, log) = run("MOV 5 R0\nMOV R0 R1");

    assert_eq!(interpreter.state(), RunState::Finished);
    assert_eq!(register(&interpreter, "R0"), 5);
    assert_eq!(register(&interpreter, "R1"), 5);
    assert_eq!(log.printed(), vec![EXIT_NORMAL]);
}

#[test]
fn add_and_sub_compute_into_the_destination() {
    let (interpreter, _) = run("ADD 3 4 R0\nSUB 4 3 R1\nSUB 3 4 R2");

    assert_eq!(register(&interpreter, "R0"), 7);
    assert_eq!(register(&interpreter, "R1"), 1);
    assert_eq!(register(&interpreter, "R2"), -1);
}

#[test]
fn shifts_are_arithmetic() {
    let (interpreter, _) = run("ASL 3 2 R0\nASR 12 2 R1\nASR -8 1 R2");

    assert_eq!(interpreter.state(), RunState::Finished);
    assert_eq!(register(&interpreter, "R0"), 12);
    assert_eq!(register(&interpreter, "R1"), 3);
    assert_eq!(register(&interpreter, "R2"), -4);
}

#[test]
fn taken_branch_resumes_after_the_label() {
    let source = "MOV 1 R0\nBEQ R0 1 SKIP\nMOV 9 R0\nSKIP:";
    let (interpreter, _) = run(source);

    assert_eq!(interpreter.state(), RunState::Finished);
    assert_eq!(register(&interpreter, "R0"), 1);
}

#[test]
fn untaken_branch_falls_through() {
    let source = "MOV 1 R0\nBNE R0 1 SKIP\nMOV 9 R0\nSKIP:";
    let (interpreter, _) = run(source);

    assert_eq!(register(&interpreter, "R0"), 9);
}

#[test]
fn ordered_comparisons() {
    let source = "\
MOV 0 R2
BGT 2 1 A
MOV 1 R2
A:
BLT 1 2 B
MOV 1 R2
B:";
    let (interpreter, _) = run(source);

    // Both branches taken, so R2 is never overwritten
    assert_eq!(register(&interpreter, "R2"), 0);
}

#[test]
fn branch_to_line_literal_resumes_after_that_line() {
    let source = "BR 2\nMOV 1 R0\nMOV 2 R0";
    let (interpreter, _) = run(source);

    assert_eq!(interpreter.state(), RunState::Finished);
    assert_eq!(register(&interpreter, "R0"), 2);
}

#[test]
fn duplicate_label_branches_to_the_last_declaration() {
    let source = "\
BR L
L:
MOV 1 R0
BR END
L:
MOV 2 R0
END:";
    let (interpreter, _) = run(source);

    assert_eq!(interpreter.state(), RunState::Finished);
    assert_eq!(register(&interpreter, "R0"), 2);
}

#[test]
fn infinite_loop_keeps_running() {
    let mut interpreter = Interpreter::new(Program::new("LOOP:\nBR LOOP"), test_config());
    let mut log = EventLog::new();
    interpreter.get_ready_to_run(&mut log);

    for _ in 0..10_000 {
        interpreter.step(&mut log);
    }

    assert_eq!(interpreter.state(), RunState::Running);
    assert!(interpreter.has_next_line());
    assert!(log.printed().is_empty());
}

#[test]
fn store_and_load_go_through_the_memory_head() {
    let (interpreter, _) = run("STORE 9\nLOAD R0");

    assert_eq!(interpreter.memory().cell(0), 9);
    assert_eq!(register(&interpreter, "R0"), 9);
}

#[test]
fn moving_the_memory_head_addresses_other_cells() {
    let (interpreter, _) = run("MOV 5 MH\nSTORE 7");

    assert_eq!(interpreter.memory().cell(5), 7);
    assert_eq!(interpreter.memory().cell(0), 0);
}

#[test]
fn corrupted_memory_head_halts_after_the_step() {
    let (interpreter, log) = run("SUB MH 1 MH");

    assert_eq!(interpreter.state(), RunState::Halted);
    let errors = log.errors();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].0, 0);
    assert!(errors[0].1.contains("Memory head -1"));
    assert_eq!(log.printed(), vec![EXIT_WITH_ERROR]);
}

#[test]
fn apnd_and_prnt_emit_the_staged_text() {
    let (interpreter, log) = run("APND 72\nAPND 73\nAPND 33\nPRNT");

    assert_eq!(log.printed(), vec!["HI!", EXIT_NORMAL]);
    assert_eq!(interpreter.buffer().cursor(), 0);
    assert_eq!(interpreter.buffer().contents(), "");
}

#[test]
fn dump_discards_without_printing() {
    let (_, log) = run("APND 65\nDUMP\nAPND 66\nPRNT");

    assert_eq!(log.printed(), vec!["B", EXIT_NORMAL]);
}

#[test]
fn clr_signals_a_console_clear() {
    let (_, log) = run("APND 65\nPRNT\nCLR");

    assert!(log.events.contains(&Event::ConsoleCleared));
}

#[test]
fn comments_labels_and_blank_lines_are_skipped() {
    let source = "\

# leading comment
START:
MOV 3 R0

# trailing comment
";
    let (interpreter, _) = run(source);

    assert_eq!(interpreter.state(), RunState::Finished);
    assert_eq!(register(&interpreter, "R0"), 3);
}

#[test]
fn opcodes_registers_and_labels_are_case_insensitive() {
    let source = "mov 5 r0\nbr end\nMOV 9 R0\nEnd:";
    let (interpreter, _) = run(source);

    assert_eq!(register(&interpreter, "R0"), 5);
}

#[test]
fn source_without_executable_lines_halts_as_empty() {
    let (interpreter, log) = run("# only a comment\n\nLABEL:");

    assert_eq!(interpreter.state(), RunState::Halted);
    assert!(log.errors()[0].1.contains("no executable line"));
    assert_eq!(log.printed(), vec![EXIT_WITH_ERROR]);
}

#[test]
fn reset_clears_registers_but_preserves_memory() {
    let source = "MOV 3 MH\nSTORE 42\nMOV 7 R0";
    let mut interpreter = Interpreter::new(Program::new(source), test_config());
    let mut log = EventLog::new();
    interpreter.get_ready_to_run(&mut log);
    interpreter.fast_forward(&mut log);

    assert_eq!(register(&interpreter, "R0"), 7);
    assert_eq!(interpreter.memory().cell(3), 42);

    interpreter.get_ready_to_run(&mut log);

    assert_eq!(interpreter.state(), RunState::Ready);
    assert_eq!(register(&interpreter, "R0"), 0);
    assert_eq!(interpreter.registers().get(MH), 0);
    assert_eq!(interpreter.buffer().cursor(), 0);
    // Main memory survives the reset
    assert_eq!(interpreter.memory().cell(3), 42);
}

#[test]
fn current_line_events_track_the_program_counter() {
    let source = "MOV 1 R0\n# comment\nMOV 2 R0";
    let mut interpreter = Interpreter::new(Program::new(source), test_config());
    let mut log = EventLog::new();
    interpreter.get_ready_to_run(&mut log);

    assert_eq!(interpreter.pc(), 0);

    interpreter.step(&mut log);
    // The comment line is stepped over in one advance
    assert_eq!(interpreter.pc(), 2);

    interpreter.step(&mut log);
    assert_eq!(interpreter.state(), RunState::Finished);

    let visited: Vec<usize> = log
        .events
        .iter()
        .filter_map(|e| match e {
            Event::CurrentLine(line) => Some(*line),
            _ => None,
        })
        .collect();
    assert_eq!(visited, vec![0, 2]);
}

#[test]
fn step_is_a_noop_once_the_run_ended() {
    let (mut interpreter, _) = run("MOV 1 R0");
    assert_eq!(interpreter.state(), RunState::Finished);

    let mut log = EventLog::new();
    let state = interpreter.step(&mut log);

    assert_eq!(state, RunState::Finished);
    assert!(log.events.is_empty());
}
