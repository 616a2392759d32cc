// Run the shipped demo programs end to end.

use std::fs;
use std::path::Path;
use std::time::Duration;

use stepasm::interpreter::engine::{Interpreter, RunState, EXIT_NORMAL};
use stepasm::machine::MachineConfig;
use stepasm::program::Program;
use stepasm::sink::EventLog;

fn load_demo(name: &str) -> Interpreter<Program> {
    let path = Path::new("demos").join(name);
    let source = fs::read_to_string(&path).expect("failed to read demo file");
    let config = MachineConfig {
        step_delay: Duration::ZERO,
        ..MachineConfig::default()
    };
    Interpreter::new(Program::new(&source), config)
}

#[test]
fn hello_prints_a_greeting() {
    let mut interpreter = load_demo("hello.asm");
    let mut log = EventLog::new();
    interpreter.get_ready_to_run(&mut log);
    interpreter.fast_forward(&mut log);

    assert_eq!(interpreter.state(), RunState::Finished);
    assert_eq!(log.printed(), vec!["HI!", EXIT_NORMAL]);
}

#[test]
fn countdown_prints_five_to_one() {
    let mut interpreter = load_demo("countdown.asm");
    let mut log = EventLog::new();
    interpreter.get_ready_to_run(&mut log);
    interpreter.fast_forward(&mut log);

    assert_eq!(interpreter.state(), RunState::Finished);
    assert_eq!(log.printed(), vec!["5", "4", "3", "2", "1", EXIT_NORMAL]);
}

#[test]
fn fibonacci_fills_the_first_ten_cells() {
    let mut interpreter = load_demo("fibonacci.asm");
    let mut log = EventLog::new();
    interpreter.get_ready_to_run(&mut log);
    interpreter.fast_forward(&mut log);

    assert_eq!(interpreter.state(), RunState::Finished);
    let expected = [0, 1, 1, 2, 3, 5, 8, 13, 21, 34];
    for (address, value) in expected.iter().enumerate() {
        assert_eq!(interpreter.memory().cell(address), *value);
    }
}

#[test]
fn loop_demo_never_finishes() {
    let mut interpreter = load_demo("loop.asm");
    let mut log = EventLog::new();
    interpreter.get_ready_to_run(&mut log);

    for _ in 0..100 {
        interpreter.step(&mut log);
    }

    assert_eq!(interpreter.state(), RunState::Running);
}
