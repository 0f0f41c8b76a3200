//! Built-in demo program

use bytecode_system::Program;

/// Prints ten terms of the Fibonacci sequence, 1 through 89
///
/// Memory cell 0 holds the loop counter, cells 1 and 2 the last two terms.
pub const FIBONACCI: &str = "\
// Initialize counter and operands
0x01, 10, 0x01, 0, 0x07,            // PUSH 10; PUSH 0; STORE
0x01,  1, 0x01, 1, 0x07,            // PUSH  1; PUSH 1; STORE
0x01,  0, 0x01, 2, 0x07,            // PUSH  0; PUSH 2; STORE

// Next term is the sum of the last two
0x01, 1, 0x06,                      // PUSH 1; LOAD
0x01, 2, 0x06,                      // PUSH 2; LOAD
0x04,                               // OVER
0x10,                               // ADD
0x03, 0x0F,                         // DUP; OUT
0x01, 1, 0x07,                      // PUSH 1; STORE
0x01, 2, 0x07,                      // PUSH 2; STORE

// Decrement the counter and loop until it reaches zero
0x01, 0, 0x06,                      // PUSH 0; LOAD
0x01, 1, 0x11,                      // SUB 1
0x03, 0x01, 0, 0x07,                // DUP; PUSH 0; STORE
0x01, -29, 0x0A,                    // PUSH -29; JNZ
";

/// The demo as a program
pub fn fibonacci() -> Program {
    Program::parse(FIBONACCI)
}
