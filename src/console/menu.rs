//! The interactive payroll menu.

use std::io::{self, BufRead, Write};

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use tracing::{debug, info};

use crate::calculation::format_amount;
use crate::config::Limits;
use crate::error::{PayrollError, PayrollResult};
use crate::models::Position;
use crate::registry::PayrollRegistry;

use super::input::Prompter;

const MENU: &str = "\
=== Payroll department menu ===
1. Add work type
2. List work types
3. Add worker
4. List workers
5. Add work record to a worker
6. Calculate salary by surname
7. Show total payout to all workers
0. Exit
===============================";

/// A menu entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Leave the menu loop.
    Exit,
    /// Add a work type.
    AddWorkType,
    /// List all work types.
    ListWorkTypes,
    /// Add a worker.
    AddWorker,
    /// List all workers.
    ListWorkers,
    /// Attach a work record to a worker.
    AddWorkRecord,
    /// Show the salary of a worker found by surname.
    SalaryBySurname,
    /// Show the total payout.
    TotalPayout,
}

impl Command {
    /// Maps a menu number to its command.
    pub fn from_choice(choice: u32) -> Option<Self> {
        match choice {
            0 => Some(Command::Exit),
            1 => Some(Command::AddWorkType),
            2 => Some(Command::ListWorkTypes),
            3 => Some(Command::AddWorker),
            4 => Some(Command::ListWorkers),
            5 => Some(Command::AddWorkRecord),
            6 => Some(Command::SalaryBySurname),
            7 => Some(Command::TotalPayout),
            _ => None,
        }
    }
}

/// Drives a [`PayrollRegistry`] from a line-oriented text menu.
///
/// The console owns the registry for the lifetime of the session. Prompt
/// bounds come from the registry's limits, or the defaults when it has none.
pub struct Console<R, W> {
    registry: PayrollRegistry,
    limits: Limits,
    prompter: Prompter<R, W>,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console over the given registry and streams.
    pub fn new(registry: PayrollRegistry, input: R, output: W) -> Self {
        let limits = registry.limits().cloned().unwrap_or_default();
        Self {
            registry,
            limits,
            prompter: Prompter::new(input, output),
        }
    }

    /// Returns the registry.
    pub fn registry(&self) -> &PayrollRegistry {
        &self.registry
    }

    /// Consumes the console and returns its output stream.
    pub fn into_output(self) -> W {
        self.prompter.into_output()
    }

    /// Runs the menu loop until the user exits or input ends.
    pub fn run(&mut self) -> PayrollResult<()> {
        info!("Payroll console started");
        loop {
            match self.step() {
                Ok(true) => continue,
                Ok(false) => break,
                Err(PayrollError::Io(err)) if err.kind() == io::ErrorKind::UnexpectedEof => {
                    debug!("Input closed");
                    writeln!(self.prompter.output())?;
                    break;
                }
                Err(err) => return Err(err),
            }
        }
        writeln!(self.prompter.output(), "Program finished.")?;
        info!("Payroll console finished");
        Ok(())
    }

    /// Shows the menu and executes one command. Returns `false` on exit.
    fn step(&mut self) -> PayrollResult<bool> {
        writeln!(self.prompter.output(), "\n{}", MENU)?;
        let choice = self
            .prompter
            .read_int_in_range("Choose a menu item: ", 0, 7)?;

        match Command::from_choice(choice) {
            Some(Command::Exit) => {
                writeln!(self.prompter.output(), "Exiting.")?;
                return Ok(false);
            }
            Some(Command::AddWorkType) => self.add_work_type()?,
            Some(Command::ListWorkTypes) => self.list_work_types()?,
            Some(Command::AddWorker) => self.add_worker()?,
            Some(Command::ListWorkers) => self.list_workers()?,
            Some(Command::AddWorkRecord) => self.add_work_record()?,
            Some(Command::SalaryBySurname) => self.salary_by_surname()?,
            Some(Command::TotalPayout) => self.total_payout()?,
            None => writeln!(self.prompter.output(), "Invalid choice.")?,
        }
        Ok(true)
    }

    fn report(&mut self, err: &PayrollError) -> PayrollResult<()> {
        writeln!(self.prompter.output(), "Error: {}", err)?;
        Ok(())
    }

    fn add_work_type(&mut self) -> PayrollResult<()> {
        let name = self.prompter.read_non_empty("Enter work type name: ")?;
        let rate = self
            .prompter
            .read_positive_decimal("Enter rate (payment per unit): ", self.limits.max_rate)?;

        match self.registry.add_work_type(&name, rate) {
            Ok(id) => writeln!(self.prompter.output(), "Work type added, ID = {}", id)?,
            Err(err) => self.report(&err)?,
        }
        Ok(())
    }

    fn list_work_types(&mut self) -> PayrollResult<()> {
        let out = self.prompter.output();
        let work_types = self.registry.work_types();
        if work_types.is_empty() {
            writeln!(out, "The work type list is empty.")?;
            return Ok(());
        }
        writeln!(out, "Work types:")?;
        writeln!(out, "{:<5}{:<25}{:<10}", "ID", "Name", "Rate")?;
        for work_type in work_types {
            writeln!(
                out,
                "{:<5}{:<25}{:<10}",
                work_type.id(),
                work_type.name(),
                format_amount(work_type.rate())
            )?;
        }
        Ok(())
    }

    fn add_worker(&mut self) -> PayrollResult<()> {
        let surname = self.prompter.read_non_empty("Enter worker surname: ")?;

        writeln!(self.prompter.output(), "Choose a position:")?;
        for (index, position) in Position::ALL.iter().enumerate() {
            writeln!(self.prompter.output(), "{}. {}", index + 1, position)?;
        }
        let choice = self
            .prompter
            .read_int_in_range("Your choice (1-3): ", 1, Position::ALL.len() as u32)?;
        let position = Position::ALL[(choice - 1) as usize];

        match self.registry.add_worker(&surname, position) {
            Ok(id) => writeln!(self.prompter.output(), "Worker added. ID = {}", id)?,
            Err(err) => self.report(&err)?,
        }
        Ok(())
    }

    fn list_workers(&mut self) -> PayrollResult<()> {
        let out = self.prompter.output();
        let workers = self.registry.workers();
        if workers.is_empty() {
            writeln!(out, "The worker list is empty.")?;
            return Ok(());
        }
        writeln!(out, "Workers:")?;
        for worker in workers {
            writeln!(
                out,
                "ID: {} | Surname: {} | Position: {}",
                worker.id(),
                worker.surname(),
                worker.position()
            )?;
        }
        Ok(())
    }

    fn add_work_record(&mut self) -> PayrollResult<()> {
        self.list_workers()?;
        let worker_id = self.prompter.read_int_in_range(
            "Enter the ID of the worker to add a record for: ",
            1,
            self.limits.max_id,
        )?;
        let surname = match self.registry.find_worker(worker_id) {
            Ok(worker) => worker.surname().to_string(),
            Err(_) => {
                writeln!(self.prompter.output(), "No worker with this ID.")?;
                return Ok(());
            }
        };

        self.list_work_types()?;
        let work_type_id =
            self.prompter
                .read_int_in_range("Enter the work type ID: ", 1, self.limits.max_id)?;
        let work_type_name = match self.registry.find_work_type(work_type_id) {
            Ok(work_type) => work_type.name().to_string(),
            Err(_) => {
                writeln!(self.prompter.output(), "No work type with this ID.")?;
                return Ok(());
            }
        };

        let max_quantity = self.limits.max_quantity.trunc().to_u32().unwrap_or(u32::MAX);
        let quantity = self.prompter.read_positive_int_limited(
            &format!(
                "Enter the number of completed units (whole number, at most {}): ",
                max_quantity
            ),
            max_quantity,
        )?;

        match self
            .registry
            .add_work_record(worker_id, work_type_id, Decimal::from(quantity))
        {
            Ok(()) => writeln!(
                self.prompter.output(),
                "Record added: {} completed {} unit(s) of '{}'",
                surname,
                quantity,
                work_type_name
            )?,
            Err(err) => self.report(&err)?,
        }
        Ok(())
    }

    fn salary_by_surname(&mut self) -> PayrollResult<()> {
        let surname = self
            .prompter
            .read_non_empty("Enter the surname of the worker: ")?;
        match self.registry.salary_by_surname(&surname) {
            Ok(salary) => writeln!(
                self.prompter.output(),
                "Salary of {} = {}",
                surname,
                format_amount(salary)
            )?,
            Err(_) => writeln!(
                self.prompter.output(),
                "No worker with surname '{}' found.",
                surname
            )?,
        }
        Ok(())
    }

    fn total_payout(&mut self) -> PayrollResult<()> {
        let total = self.registry.total_payout();
        writeln!(
            self.prompter.output(),
            "Total payout to all workers = {}",
            format_amount(total)
        )?;
        Ok(())
    }
}
