mod common;

use bit::lang::parse;
use bit::mach::{ByteSink, Runtime};
use common::run;
use std::collections::VecDeque;

#[test]
fn test_print_one_and_halt() {
    assert_eq!(run("LINE NUMBER ZERO CODE PRINT ONE", &[]).unwrap(), [1]);
}

#[test]
fn test_goto_chains_lines() {
    let source = "LINE NUMBER ZERO CODE PRINT ZERO GOTO ONE \
                  LINE NUMBER ONE CODE PRINT ONE";
    assert_eq!(run(source, &[]).unwrap(), [0, 1]);
}

#[test]
fn test_conditional_branch_follows_jump_register() {
    let source = "LINE NUMBER ZERO CODE READ \
                  GOTO ONE IF THE JUMP REGISTER IS ZERO \
                  GOTO ONE ZERO IF THE JUMP REGISTER IS ONE \
                  LINE NUMBER ONE CODE PRINT ZERO \
                  LINE NUMBER ONE ZERO CODE PRINT ONE";
    assert_eq!(run(source, &[1]).unwrap(), [1]);
    assert_eq!(run(source, &[0]).unwrap(), [0]);
}

#[test]
fn test_single_arm_miss_halts() {
    let source = "LINE NUMBER ZERO CODE READ \
                  GOTO ONE IF THE JUMP REGISTER IS ONE \
                  LINE NUMBER ONE CODE PRINT ONE";
    assert!(run(source, &[0]).unwrap().is_empty());
    assert_eq!(run(source, &[1]).unwrap(), [1]);
}

#[test]
fn test_computed_target_writes_through_address() {
    // Writes into cell 5 through THE ADDRESS OF, reads it back through
    // THE VALUE AT, and branches on the result.
    let source = "LINE NUMBER ZERO CODE THE ADDRESS OF ONE ZERO ONE EQUALS ONE GOTO ONE \
                  LINE NUMBER ONE CODE THE JUMP REGISTER EQUALS THE VALUE AT ONE ZERO ONE \
                  GOTO ONE ZERO IF THE JUMP REGISTER IS ONE \
                  LINE NUMBER ONE ZERO CODE PRINT ONE";
    assert_eq!(run(source, &[]).unwrap(), [1]);
}

#[test]
fn test_indirect_goto_reads_line_number_from_memory() {
    let source = "LINE NUMBER ZERO CODE VARIABLE ONE EQUALS ONE ONE GOTO ONE \
                  LINE NUMBER ONE CODE PRINT ZERO GOTO VARIABLE ONE \
                  LINE NUMBER ONE ONE CODE PRINT ONE";
    assert_eq!(run(source, &[]).unwrap(), [0, 1]);
}

#[test]
fn test_read_into_jump_register_via_variable() {
    let source = "LINE NUMBER ZERO CODE READ GOTO ONE \
                  LINE NUMBER ONE CODE VARIABLE ZERO EQUALS THE JUMP REGISTER GOTO ONE ZERO \
                  LINE NUMBER ONE ZERO CODE THE JUMP REGISTER EQUALS \
                  VARIABLE ZERO NAND VARIABLE ZERO \
                  GOTO ONE ONE IF THE JUMP REGISTER IS ONE \
                  GOTO ONE ZERO ZERO IF THE JUMP REGISTER IS ZERO \
                  LINE NUMBER ONE ONE CODE PRINT ZERO \
                  LINE NUMBER ONE ZERO ZERO CODE PRINT ONE";
    // NAND of the read bit with itself inverts it.
    assert_eq!(run(source, &[0]).unwrap(), [0]);
    assert_eq!(run(source, &[1]).unwrap(), [1]);
}

#[test]
fn test_missing_goto_target_line() {
    let source = "LINE NUMBER ZERO CODE PRINT ONE GOTO ONE ZERO";
    let error = run(source, &[]).unwrap_err();
    assert_eq!(
        error.to_string(),
        "RUNTIME ERROR: No line exists with number 2."
    );
}

#[test]
fn test_invalid_input_bit() {
    let error = run("LINE NUMBER ZERO CODE READ", &[2]).unwrap_err();
    assert_eq!(error.to_string(), "RUNTIME ERROR: Invalid value read.");
}

#[test]
fn test_exhausted_input() {
    let error = run("LINE NUMBER ZERO CODE READ", &[]).unwrap_err();
    assert_eq!(
        error.to_string(),
        "RUNTIME ERROR: No bit available to read."
    );
}

#[test]
fn test_nand_of_constants_is_a_type_error() {
    let source = "LINE NUMBER ZERO CODE THE JUMP REGISTER EQUALS ZERO NAND ZERO";
    let error = run(source, &[]).unwrap_err();
    assert_eq!(
        error.to_string(),
        "RUNTIME ERROR: The NAND operator requires bit values."
    );
}

#[test]
fn test_jump_register_rejects_address_values() {
    let source = "LINE NUMBER ZERO CODE THE JUMP REGISTER EQUALS THE ADDRESS OF ONE";
    let error = run(source, &[]).unwrap_err();
    assert_eq!(
        error.to_string(),
        "RUNTIME ERROR: The jump register can't store address-of-a-bit values."
    );
}

#[test]
fn test_memory_is_cleared_between_runs() {
    // Prints 1 if cell zero still holds a bit from the previous run,
    // otherwise stores one there and prints 0.
    let source = "LINE NUMBER ZERO CODE THE JUMP REGISTER EQUALS THE VALUE AT ZERO \
                  GOTO ONE IF THE JUMP REGISTER IS ONE \
                  GOTO ONE ZERO IF THE JUMP REGISTER IS ZERO \
                  LINE NUMBER ONE CODE PRINT ONE \
                  LINE NUMBER ONE ZERO CODE VARIABLE ZERO EQUALS ONE GOTO ONE ONE \
                  LINE NUMBER ONE ONE CODE PRINT ZERO";
    let program = parse(source).unwrap();
    let mut runtime = Runtime::new(VecDeque::new(), Vec::new());
    runtime.run(&program).unwrap();
    runtime.run(&program).unwrap();
    assert_eq!(runtime.into_output(), [0, 0]);
}

#[test]
fn test_bit_addition_program() {
    let source = include_str!("../programs/bit_addition.bit");
    assert_eq!(run(source, &[0, 0]).unwrap(), [0]);
    assert_eq!(run(source, &[0, 1]).unwrap(), [1]);
    assert_eq!(run(source, &[1, 0]).unwrap(), [1]);
    assert_eq!(run(source, &[1, 1]).unwrap(), [1, 0]);
}

#[test]
fn test_hello_world_program() {
    let source = include_str!("../programs/hello_world.bit");
    let bits = run(source, &[]).unwrap();
    assert_eq!(bits.len(), 96);
    assert_eq!(&bits[..8], [0, 1, 0, 0, 1, 0, 0, 0]);
}

#[test]
fn test_hello_world_packed_to_ascii() {
    let program = parse(include_str!("../programs/hello_world.bit")).unwrap();
    let mut runtime = Runtime::new(VecDeque::new(), ByteSink::new(Vec::new()));
    runtime.run(&program).unwrap();
    assert_eq!(runtime.into_output().into_inner(), b"Hello world!");
}
