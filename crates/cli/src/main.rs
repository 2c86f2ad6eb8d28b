//! RV32I instruction set simulator CLI.
//!
//! This binary provides a single entry point for both simulation modes. It performs:
//! 1. **Batch run:** Load a program directory (`instruction_mem.bin` plus
//!    optional `data_mem.bin`) and execute it until `ebreak` or a fault.
//! 2. **Interactive shell:** With no program directory, read instruction
//!    words from stdin and execute them one at a time.

use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::{fs, process};

use rv32_core::isa::disasm;
use rv32_core::sim::loader;
use rv32_core::{Config, Cpu};

const PROMPT: &str = "rv32> ";

#[derive(Parser, Debug)]
#[command(
    name = "rv32sim",
    author,
    version,
    about = "RV32I RISC-V instruction set simulator",
    long_about = "Run a program directory, or start an interactive shell.\n\nA program directory holds instruction_mem.bin (raw RV32I code, loaded at the start PC) and optionally data_mem.bin (loaded at the data base address).\n\nExamples:\n  rv32sim programs/fib\n  rv32sim programs/fib --steps 1000 --trace\n  rv32sim          # interactive shell"
)]
struct Cli {
    /// Program directory holding instruction_mem.bin and optional data_mem.bin.
    image_dir: Option<PathBuf>,

    /// Retire at most this many instructions.
    #[arg(long)]
    steps: Option<u64>,

    /// Echo each instruction before it executes.
    #[arg(long)]
    trace: bool,

    /// JSON configuration file.
    #[arg(long, short)]
    config: Option<PathBuf>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let mut config = match cli.config {
        Some(path) => load_config(&path),
        None => Config::default(),
    };
    if cli.steps.is_some() {
        config.max_steps = cli.steps;
    }
    config.trace_instructions |= cli.trace;

    let code = match cli.image_dir {
        Some(dir) => run_image(&config, &dir),
        None => run_shell(&config),
    };
    process::exit(code);
}

/// Reads and parses a JSON configuration file, exiting with code 1 on error.
fn load_config(path: &Path) -> Config {
    let text = fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading config {}: {}", path.display(), e);
        process::exit(1);
    });
    Config::from_json(&text).unwrap_or_else(|e| {
        eprintln!("Error parsing config {}: {}", path.display(), e);
        process::exit(1);
    })
}

/// Runs a program directory to completion.
///
/// Loads the images, then loops on `step` until `ebreak`, the step cap, or a
/// fault. On a fault, dumps state and returns 1.
fn run_image(config: &Config, dir: &Path) -> i32 {
    let mut cpu = match loader::boot(config, dir) {
        Ok(cpu) => cpu,
        Err(e) => {
            eprintln!("Error loading {}: {}", dir.display(), e);
            return 1;
        }
    };

    println!("[*] Executing: {}", dir.display());
    let mut steps = 0u64;
    while !cpu.halted {
        if let Some(cap) = config.max_steps {
            if steps >= cap {
                println!("\n[*] Step limit reached after {steps} instructions");
                break;
            }
        }
        if config.trace_instructions {
            if let Ok(word) = cpu.mem.read_word(cpu.pc) {
                println!("[{:#010x}] {}", cpu.pc, disasm::disassemble(word));
            }
        }
        if let Err(fault) = cpu.step() {
            eprintln!("\n[!] FATAL: {fault}");
            if let Ok(word) = cpu.mem.read_word(cpu.pc) {
                eprintln!("    at [{:#010x}] {}", cpu.pc, disasm::disassemble(word));
            }
            cpu.dump_state();
            return 1;
        }
        steps += 1;
    }

    if cpu.halted {
        println!("\n[*] Halted after {steps} instructions");
    }
    0
}

/// Runs the interactive shell until `quit`, end of input, or `ebreak`.
///
/// Each line is either a shell command (`regs`, `mem`, `pc`, `dump`, `quit`)
/// or an instruction word in decimal or `0x`-prefixed hexadecimal, which is
/// decoded and executed at the current program counter.
fn run_shell(config: &Config) -> i32 {
    let mut cpu = Cpu::new(
        match config.mem_limit {
            Some(limit) => rv32_core::Memory::bounded(limit),
            None => rv32_core::Memory::new(),
        },
        config.start_pc,
    );

    println!("RV32I interactive shell. Enter an instruction word or a command (regs, mem, pc, dump, quit).");
    let stdin = io::stdin();
    loop {
        print!("{PROMPT}");
        io::stdout().flush().ok();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }

        match line.trim() {
            "" => {}
            "quit" | "q" | "exit" => break,
            "pc" => println!("pc  = {:#010x}", cpu.pc),
            "regs" => cpu.regs.dump(),
            "mem" => {
                for (addr, byte) in cpu.mem.populated() {
                    println!("[{addr:#010x}] = {byte:#04x}  {byte:#010b}");
                }
            }
            "dump" => cpu.dump_state(),
            word => match parse_word(word) {
                Some(raw) => {
                    if let Err(fault) = cpu.execute_word(raw) {
                        eprintln!("[!] FATAL: {fault}");
                        cpu.dump_state();
                        return 1;
                    }
                    println!("executed: {}", disasm::disassemble(raw));
                    if cpu.halted {
                        println!("[*] Halted");
                        return 0;
                    }
                }
                None => eprintln!("unrecognized input: {word}"),
            },
        }
    }
    0
}

/// Parses an instruction word in decimal or `0x`-prefixed hexadecimal.
fn parse_word(text: &str) -> Option<u32> {
    if let Some(hex) = text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        u32::from_str_radix(hex, 16).ok()
    } else {
        text.parse().ok()
    }
}
