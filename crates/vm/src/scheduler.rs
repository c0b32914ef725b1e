//! Deterministic round-robin scheduling of the live IP population.

use funge_space::ProgramSpace;

use crate::error::RuntimeError;
use crate::exec::Outcome;
use crate::ip::{Ip, IpIdGen};
use crate::sink::OutputSink;
use crate::table::InstructionTable;

const QUOTE: i64 = '"' as i64;

/// Advances every live IP by exactly one instruction per tick.
///
/// Visitation order is ascending IP id. IPs spawned during a tick are
/// appended after the surviving population — fresh ids are strictly
/// ascending, so the live list stays sorted — and first execute on the
/// following tick. The shared space mutates in visitation order, which
/// makes same-tick read-after-write reproducible.
pub struct Scheduler<'a> {
    space: ProgramSpace,
    table: &'a InstructionTable,
    sink: &'a mut dyn OutputSink,
    ips: Vec<Ip>,
    ids: IpIdGen,
    ticks: u64,
}

impl<'a> Scheduler<'a> {
    /// A scheduler over `space` with the single initial IP at the
    /// origin.
    pub fn new(
        space: ProgramSpace,
        table: &'a InstructionTable,
        sink: &'a mut dyn OutputSink,
    ) -> Self {
        let mut ids = IpIdGen::new();
        let initial = Ip::initial(ids.next_id());
        Scheduler {
            space,
            table,
            sink,
            ips: vec![initial],
            ids,
            ticks: 0,
        }
    }

    /// The live IPs, in visitation order.
    pub fn ips(&self) -> &[Ip] {
        &self.ips
    }

    /// The shared program space.
    pub fn space(&self) -> &ProgramSpace {
        &self.space
    }

    /// Ticks executed so far.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Execute one tick: every currently-live IP steps exactly once.
    ///
    /// Returns false once the population is empty, without counting a
    /// tick.
    pub fn tick(&mut self) -> bool {
        if self.ips.is_empty() {
            return false;
        }
        self.ticks += 1;

        let current = std::mem::take(&mut self.ips);
        let mut survivors = Vec::with_capacity(current.len());
        let mut spawned = Vec::new();

        for ip in current {
            match self.step_ip(ip) {
                Outcome::Continue(ip) => survivors.push(ip),
                Outcome::Fork { parent, child } => {
                    survivors.push(parent);
                    spawned.push(child);
                }
                Outcome::Terminate => {}
            }
        }

        survivors.extend(spawned);
        self.ips = survivors;
        !self.ips.is_empty()
    }

    /// Execute one instruction for one IP.
    fn step_ip(&mut self, mut ip: Ip) -> Outcome {
        let cell = self.space.read(ip.location);

        // String mode bypasses the table for everything except the
        // closing quote.
        if ip.string_mode && cell.value() != QUOTE {
            ip.stacks.active_mut().push(cell.value());
            ip.step(&self.space);
            return Outcome::Continue(ip);
        }

        let outcome = match self.table.get(cell) {
            Some(op) => op.execute(ip, &mut self.space, &mut *self.sink, &mut self.ids),
            // Unregistered characters execute as no-ops.
            None => Outcome::Continue(ip),
        };

        // The uniform post-instruction advance.
        match outcome {
            Outcome::Continue(mut ip) => {
                ip.step(&self.space);
                Outcome::Continue(ip)
            }
            Outcome::Fork { mut parent, child } => {
                parent.step(&self.space);
                Outcome::Fork { parent, child }
            }
            Outcome::Terminate => Outcome::Terminate,
        }
    }

    /// Run until the population dies. Returns the tick count.
    ///
    /// A program that never terminates keeps this looping; use
    /// [`Scheduler::run_bounded`] to hand in an external budget.
    pub fn run(&mut self) -> u64 {
        while self.tick() {}
        self.ticks
    }

    /// Run until the population dies or the total tick count reaches
    /// `max_ticks`.
    pub fn run_bounded(&mut self, max_ticks: u64) -> Result<u64, RuntimeError> {
        while self.ticks < max_ticks {
            if !self.tick() {
                return Ok(self.ticks);
            }
        }
        if self.ips.is_empty() {
            Ok(self.ticks)
        } else {
            Err(RuntimeError::TickBudgetExhausted {
                limit: max_ticks,
                live: self.ips.len(),
            })
        }
    }
}
