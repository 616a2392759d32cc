// stepasm: stepping interpreter for an educational assembly language

use std::fs;
use std::io;
use std::path::Path;
use std::time::Duration;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use stepasm::interpreter::engine::{Interpreter, RunState};
use stepasm::machine::{MachineConfig, Word};
use stepasm::program::Program;
use stepasm::sink::Sink;
use stepasm::ui::App;

fn usage(program_name: &str) -> ! {
    eprintln!("Usage: {} <file.asm> [options]", program_name);
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --run              Run to completion without the TUI");
    eprintln!("  --registers N      Number of general registers (default 7)");
    eprintln!("  --memory N         Main memory size in cells (default 10000)");
    eprintln!("  --buffer N         String buffer capacity (default 256)");
    eprintln!("  --range MIN MAX    Representable number range (default -32768 32767)");
    eprintln!("  --delay MS         Step delay in play mode, milliseconds (default 25)");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  {} demos/hello.asm", program_name);
    eprintln!("  {} demos/countdown.asm --run", program_name);
    std::process::exit(1);
}

/// Sink for headless mode: program output to stdout, error reports to stderr.
struct StdoutSink;

impl Sink for StdoutSink {
    fn print(&mut self, text: &str) {
        println!("{}", text);
    }

    fn report_error(&mut self, line: usize, message: &str) {
        eprintln!("line {}: {}", line + 1, message);
    }
}

struct CliArgs {
    file: String,
    headless: bool,
    config: MachineConfig,
}

fn parse_args(args: &[String], program_name: &str) -> CliArgs {
    let mut file = None;
    let mut headless = false;
    let mut config = MachineConfig::default();

    let next_value = |i: &mut usize, flag: &str| -> String {
        *i += 1;
        match args.get(*i) {
            Some(v) => v.clone(),
            None => {
                eprintln!("Error: {} requires a value", flag);
                usage(program_name);
            }
        }
    };

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--run" => headless = true,
            "--registers" => {
                config.register_count = parse_number(&next_value(&mut i, "--registers"), program_name);
            }
            "--memory" => {
                config.memory_len = parse_number(&next_value(&mut i, "--memory"), program_name);
            }
            "--buffer" => {
                config.buffer_capacity = parse_number(&next_value(&mut i, "--buffer"), program_name);
            }
            "--range" => {
                config.min_number = parse_word(&next_value(&mut i, "--range"), program_name);
                config.max_number = parse_word(&next_value(&mut i, "--range"), program_name);
            }
            "--delay" => {
                let ms: u64 = parse_number(&next_value(&mut i, "--delay"), program_name) as u64;
                config.step_delay = Duration::from_millis(ms);
            }
            other if other.starts_with("--") => {
                eprintln!("Error: Unknown option '{}'", other);
                usage(program_name);
            }
            other => {
                if file.replace(other.to_string()).is_some() {
                    eprintln!("Error: Multiple input files given");
                    usage(program_name);
                }
            }
        }
        i += 1;
    }

    if config.min_number >= config.max_number {
        eprintln!("Error: --range MIN must be below MAX");
        usage(program_name);
    }

    let file = match file {
        Some(f) => f,
        None => {
            eprintln!("Error: No input file provided");
            usage(program_name);
        }
    };

    CliArgs {
        file,
        headless,
        config,
    }
}

fn parse_number(value: &str, program_name: &str) -> usize {
    match value.parse() {
        Ok(n) => n,
        Err(_) => {
            eprintln!("Error: '{}' is not a valid number", value);
            usage(program_name);
        }
    }
}

fn parse_word(value: &str, program_name: &str) -> Word {
    match value.parse() {
        Ok(n) => n,
        Err(_) => {
            eprintln!("Error: '{}' is not a valid number", value);
            usage(program_name);
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().collect();
    let program_name = args
        .first()
        .map(|s| s.as_str())
        .unwrap_or("stepasm")
        .to_string();

    if args.len() < 2 {
        eprintln!("Error: No input file provided");
        usage(&program_name);
    }

    let cli = parse_args(&args[1..], &program_name);

    if !Path::new(&cli.file).exists() {
        eprintln!("Error: File '{}' not found", cli.file);
        std::process::exit(1);
    }

    let source = fs::read_to_string(&cli.file)?;
    let program = Program::new(&source);

    if cli.headless {
        let mut interpreter = Interpreter::new(program, cli.config);
        let mut sink = StdoutSink;
        interpreter.get_ready_to_run(&mut sink);
        interpreter.fast_forward(&mut sink);
        if interpreter.state() == RunState::Halted {
            std::process::exit(1);
        }
        return Ok(());
    }

    eprintln!(
        "Loaded {} ({} lines)",
        cli.file,
        program.lines().len()
    );

    let interpreter = Interpreter::new(program, cli.config);

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(interpreter);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}
