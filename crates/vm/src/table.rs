//! The character → instruction registry.

use funge_common::{Cell, Vector};
use rustc_hash::FxHashMap;

/// One executable instruction.
///
/// Literal-pushing and direction-setting instructions carry their
/// operand as data, so each table entry is bound to its own value when
/// the table is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    /// Digits `0`-`9` and hex `a`-`f`: push the carried literal.
    Push(i64),
    /// `'` — step once, push the character code found there.
    FetchChar,
    /// `"` — toggle string mode.
    ToggleString,

    /// `+`
    Add,
    /// `-` — second-popped minus first-popped.
    Sub,
    /// `*`
    Mul,
    /// `/` — floor division; division by zero pushes 0.
    Div,
    /// `%` — floor modulo, sign follows the divisor; zero pushes 0.
    Mod,
    /// `!` — pop, push 1 if zero else 0.
    Not,
    /// `` ` `` — pop a, pop b, push 1 if b > a else 0.
    Greater,

    /// `$` — discard the top value.
    Discard,
    /// `:` — duplicate the top value.
    Duplicate,
    /// `\` — swap the top two values.
    Swap,
    /// `n` — clear the active stack.
    ClearStack,
    /// `{` — pop a count, push a fresh active stack.
    BeginBlock,
    /// `}` — pop a count, drop the active stack; reflects when only
    /// one stack remains.
    EndBlock,

    /// `> < ^ v` — set delta to the carried unit vector.
    Go(Vector),
    /// `r` — reverse the delta.
    Reverse,
    /// `x` — pop a vector (y then x) and make it the delta.
    SetDelta,
    /// `#` — skip over the next cell without executing it.
    Trampoline,
    /// `_` — pop; go right on zero, left otherwise.
    HorizontalIf,
    /// `|` — pop; go down on zero, up otherwise.
    VerticalIf,

    /// `g` — pop y, pop x, push the cell at (x, y).
    Get,
    /// `p` — pop y, pop x, pop a value, write it at (x, y).
    Put,

    /// `,` — pop and emit as one character.
    OutputChar,
    /// `.` — pop and emit as a decimal rendering plus one space.
    OutputInt,
    /// `t` — fork a child IP with reflected delta.
    Split,
    /// `@` — terminate the executing IP.
    Kill,
    /// Space — a true no-op; consumes a normal tick.
    Nop,
}

/// Immutable-after-build registry mapping character codes to
/// instructions.
///
/// Built once and handed to the scheduler at construction. Alternate
/// or extended instruction sets register through
/// [`InstructionTable::register`] before the table is put to use;
/// characters with no entry execute as no-ops.
#[derive(Debug, Clone)]
pub struct InstructionTable {
    entries: FxHashMap<i64, Op>,
}

impl InstructionTable {
    /// An empty table.
    pub fn empty() -> Self {
        InstructionTable {
            entries: FxHashMap::default(),
        }
    }

    /// The standard instruction set implemented by this machine.
    pub fn standard() -> Self {
        let mut table = Self::empty();

        // Each digit entry carries its own literal, bound here at
        // construction time.
        for digit in 0..=9i64 {
            table.register(
                char::from(b'0' + digit as u8),
                Op::Push(digit),
            );
        }
        // Funge-98 hex digits: a-f push 10 through 15.
        for (offset, ch) in ('a'..='f').enumerate() {
            table.register(ch, Op::Push(10 + offset as i64));
        }

        table.register('\'', Op::FetchChar);
        table.register('"', Op::ToggleString);

        table.register('+', Op::Add);
        table.register('-', Op::Sub);
        table.register('*', Op::Mul);
        table.register('/', Op::Div);
        table.register('%', Op::Mod);
        table.register('!', Op::Not);
        table.register('`', Op::Greater);

        table.register('$', Op::Discard);
        table.register(':', Op::Duplicate);
        table.register('\\', Op::Swap);
        table.register('n', Op::ClearStack);
        table.register('{', Op::BeginBlock);
        table.register('}', Op::EndBlock);

        table.register('>', Op::Go(Vector::RIGHT));
        table.register('<', Op::Go(Vector::LEFT));
        table.register('^', Op::Go(Vector::UP));
        table.register('v', Op::Go(Vector::DOWN));
        table.register('r', Op::Reverse);
        table.register('x', Op::SetDelta);
        table.register('#', Op::Trampoline);
        table.register('_', Op::HorizontalIf);
        table.register('|', Op::VerticalIf);

        table.register('g', Op::Get);
        table.register('p', Op::Put);

        table.register(',', Op::OutputChar);
        table.register('.', Op::OutputInt);
        table.register('t', Op::Split);
        table.register('@', Op::Kill);
        table.register(' ', Op::Nop);

        table
    }

    /// Add or replace an entry.
    ///
    /// This is the seam through which the rest of the standard set and
    /// fingerprint-style extensions attach without touching the
    /// scheduler.
    pub fn register(&mut self, ch: char, op: Op) {
        self.entries.insert(ch as i64, op);
    }

    /// The instruction for a cell, if one is registered.
    pub fn get(&self, cell: Cell) -> Option<Op> {
        self.entries.get(&cell.value()).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
