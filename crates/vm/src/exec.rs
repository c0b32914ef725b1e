//! Instruction semantics: how each [`Op`] transforms an IP.

use funge_common::{Cell, Vector};
use funge_space::ProgramSpace;

use crate::ip::{Ip, IpIdGen};
use crate::sink::OutputSink;
use crate::table::Op;

/// The result of executing one instruction.
///
/// Dispatch is a total function: the executing IP either survives,
/// survives and spawns a child, or terminates. There is no fault path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The IP survives.
    Continue(Ip),
    /// `t` — the IP survives and a child joins the population on the
    /// next tick.
    Fork { parent: Ip, child: Ip },
    /// `@` — the IP leaves the live set.
    Terminate,
}

/// Floor division: rounds toward negative infinity. Division by zero
/// yields 0.
fn floor_div(b: i64, a: i64) -> i64 {
    if a == 0 {
        return 0;
    }
    let q = b.wrapping_div(a);
    let r = b.wrapping_rem(a);
    if r != 0 && (r < 0) != (a < 0) {
        q - 1
    } else {
        q
    }
}

/// Floor modulo: the result's sign follows the divisor. Modulo by zero
/// yields 0.
fn floor_mod(b: i64, a: i64) -> i64 {
    if a == 0 {
        return 0;
    }
    let r = b.wrapping_rem(a);
    if r != 0 && (r < 0) != (a < 0) {
        r.wrapping_add(a)
    } else {
        r
    }
}

/// Pop `a` (the top), pop `b`, push `f(b, a)`.
fn binary(ip: &mut Ip, f: impl FnOnce(i64, i64) -> i64) {
    let a = ip.stacks.active_mut().pop();
    let b = ip.stacks.active_mut().pop();
    ip.stacks.active_mut().push(f(b, a));
}

impl Op {
    /// Execute this instruction on `ip`.
    ///
    /// The uniform post-instruction advance along the delta is the
    /// scheduler's job; instructions that move further (`#`, `'`) take
    /// their extra steps here.
    pub fn execute(
        self,
        mut ip: Ip,
        space: &mut ProgramSpace,
        sink: &mut dyn OutputSink,
        ids: &mut IpIdGen,
    ) -> Outcome {
        match self {
            // ---- Literals ----
            Op::Push(value) => ip.stacks.active_mut().push(value),
            Op::FetchChar => {
                ip.step(space);
                let cell = space.read(ip.location);
                ip.stacks.active_mut().push(cell.value());
            }
            Op::ToggleString => ip.string_mode = !ip.string_mode,

            // ---- Arithmetic ----
            Op::Add => binary(&mut ip, |b, a| b.wrapping_add(a)),
            Op::Sub => binary(&mut ip, |b, a| b.wrapping_sub(a)),
            Op::Mul => binary(&mut ip, |b, a| b.wrapping_mul(a)),
            Op::Div => binary(&mut ip, floor_div),
            Op::Mod => binary(&mut ip, floor_mod),
            Op::Not => {
                let value = ip.stacks.active_mut().pop();
                ip.stacks
                    .active_mut()
                    .push(if value == 0 { 1 } else { 0 });
            }
            Op::Greater => binary(&mut ip, |b, a| i64::from(b > a)),

            // ---- Stack manipulation ----
            Op::Discard => {
                ip.stacks.active_mut().pop();
            }
            Op::Duplicate => ip.stacks.active_mut().duplicate_top(),
            Op::Swap => ip.stacks.active_mut().swap_top_two(),
            Op::ClearStack => ip.stacks.active_mut().clear(),
            Op::BeginBlock => {
                let count = ip.stacks.active_mut().pop();
                ip.stacks.begin_block(count);
            }
            Op::EndBlock => {
                // With a lone stack `}` acts as `r`, without popping.
                if ip.stacks.depth() > 1 {
                    let count = ip.stacks.active_mut().pop();
                    ip.stacks.end_block(count);
                } else {
                    ip.reflect();
                }
            }

            // ---- Movement ----
            Op::Go(delta) => ip.delta = delta,
            Op::Reverse => ip.reflect(),
            Op::SetDelta => {
                let y = ip.stacks.active_mut().pop();
                let x = ip.stacks.active_mut().pop();
                ip.delta = Vector::new(x, y);
            }
            Op::Trampoline => ip.step(space),
            Op::HorizontalIf => {
                let value = ip.stacks.active_mut().pop();
                ip.delta = if value == 0 {
                    Vector::RIGHT
                } else {
                    Vector::LEFT
                };
            }
            Op::VerticalIf => {
                let value = ip.stacks.active_mut().pop();
                ip.delta = if value == 0 { Vector::DOWN } else { Vector::UP };
            }

            // ---- Program space ----
            Op::Get => {
                let y = ip.stacks.active_mut().pop();
                let x = ip.stacks.active_mut().pop();
                let cell = space.read(Vector::new(x, y));
                ip.stacks.active_mut().push(cell.value());
            }
            Op::Put => {
                let y = ip.stacks.active_mut().pop();
                let x = ip.stacks.active_mut().pop();
                let value = ip.stacks.active_mut().pop();
                space.write(Vector::new(x, y), Cell(value));
            }

            // ---- I/O and lifecycle ----
            Op::OutputChar => {
                let value = ip.stacks.active_mut().pop();
                let ch = Cell(value)
                    .to_char()
                    .unwrap_or(char::REPLACEMENT_CHARACTER);
                sink.emit(ch);
            }
            Op::OutputInt => {
                let value = ip.stacks.active_mut().pop();
                for ch in value.to_string().chars() {
                    sink.emit(ch);
                }
                sink.emit(' ');
            }
            Op::Split => {
                let mut child = ip.fork(ids.next_id());
                child.step(space);
                return Outcome::Fork { parent: ip, child };
            }
            Op::Kill => return Outcome::Terminate,
            Op::Nop => {}
        }

        Outcome::Continue(ip)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn floor_div_rounds_toward_negative_infinity() {
        assert_eq!(floor_div(7, 2), 3);
        assert_eq!(floor_div(-7, 2), -4);
        assert_eq!(floor_div(7, -2), -4);
        assert_eq!(floor_div(-7, -2), 3);
        assert_eq!(floor_div(6, 3), 2);
        assert_eq!(floor_div(-6, 3), -2);
    }

    #[test]
    fn floor_div_by_zero_yields_zero() {
        assert_eq!(floor_div(42, 0), 0);
        assert_eq!(floor_div(-42, 0), 0);
        assert_eq!(floor_div(0, 0), 0);
    }

    #[test]
    fn floor_mod_sign_follows_divisor() {
        assert_eq!(floor_mod(7, 2), 1);
        assert_eq!(floor_mod(-7, 2), 1);
        assert_eq!(floor_mod(7, -2), -1);
        assert_eq!(floor_mod(-7, -2), -1);
        assert_eq!(floor_mod(6, 3), 0);
    }

    #[test]
    fn floor_mod_by_zero_yields_zero() {
        assert_eq!(floor_mod(42, 0), 0);
        assert_eq!(floor_mod(0, 0), 0);
    }

    #[test]
    fn division_and_modulo_reconstruct_the_dividend() {
        for b in -50..=50 {
            for a in [-7, -3, -1, 1, 2, 5, 9] {
                assert_eq!(floor_div(b, a) * a + floor_mod(b, a), b);
            }
        }
    }
}
