//! Program - the read-only memory image
//!
//! Opcodes and their literal operands are stored inline, in the order in
//! which they are fetched.

use crate::listing;
use crate::opcode::Opcode;
use crate::value::Value;
use core_types::Number;
use std::fmt;

/// A program image: the machine's read-only memory
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Program {
    /// ROM cells, opcodes interleaved with literals
    cells: Vec<Value>,
}

impl Program {
    /// Create a new empty program
    pub fn new() -> Self {
        Self { cells: Vec::new() }
    }

    /// Build a program from raw cells
    pub fn from_cells(cells: Vec<Value>) -> Self {
        Self { cells }
    }

    /// Build a program from numbers
    ///
    /// ```
    /// use bytecode_system::Program;
    ///
    /// let program = Program::from_numbers([0x01, 2, 0x01, 3, 0x10, 0x0F]);
    /// assert_eq!(program.len(), 6);
    /// ```
    pub fn from_numbers<I, N>(numbers: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Number>,
    {
        numbers
            .into_iter()
            .map(|n| Value::Number(n.into()))
            .collect()
    }

    /// Parse a text listing
    ///
    /// See [`crate::listing`] for the accepted syntax.
    pub fn parse(source: &str) -> Self {
        listing::parse(source)
    }

    /// Emit an opcode
    pub fn emit(&mut self, opcode: Opcode) {
        self.cells.push(Value::from(opcode));
    }

    /// Emit `PUSH literal`
    pub fn emit_push(&mut self, literal: impl Into<Number>) {
        self.emit(Opcode::Push);
        self.cells.push(Value::Number(literal.into()));
    }

    /// Append a raw cell
    pub fn push_cell(&mut self, cell: Value) {
        self.cells.push(cell);
    }

    /// Get the cell at a ROM index
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.cells.get(index)
    }

    /// All cells in ROM order
    pub fn cells(&self) -> &[Value] {
        &self.cells
    }

    /// Number of ROM cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Check if the program has no cells
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Render one instruction per line
    ///
    /// Cells that do not decode to an opcode are shown as `.data`.
    ///
    /// ```
    /// use bytecode_system::Program;
    ///
    /// let program = Program::from_numbers([0x01, 7, 0x0F]);
    /// assert_eq!(program.disassemble(), "0000  PUSH 7\n0002  OUT\n");
    /// ```
    pub fn disassemble(&self) -> String {
        self.disassembly().to_string()
    }

    /// Lazily formatted disassembly, for writing straight to an output
    pub fn disassembly(&self) -> Disassembly<'_> {
        Disassembly { program: self }
    }
}

/// One line per instruction: address, mnemonic and inline literal
///
/// Cells that do not decode to an opcode print as `.data`; a literal missing
/// at the end of ROM prints as `?`.
#[derive(Debug, Clone, Copy)]
pub struct Disassembly<'a> {
    program: &'a Program,
}

impl fmt::Display for Disassembly<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cells = &self.program.cells;
        let mut pc = 0;

        while pc < cells.len() {
            let cell = &cells[pc];
            match cell.as_number().and_then(|n| Opcode::decode(n).ok()) {
                Some(op) => {
                    write!(f, "{:04x}  {}", pc, op)?;
                    for offset in 1..=op.literal_count() {
                        match cells.get(pc + offset) {
                            Some(literal) => write!(f, " {}", literal)?,
                            None => f.write_str(" ?")?,
                        }
                    }
                    pc += 1 + op.literal_count();
                }
                None => {
                    write!(f, "{:04x}  .data {}", pc, cell)?;
                    pc += 1;
                }
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

impl FromIterator<Value> for Program {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}
