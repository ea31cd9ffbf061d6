use crate::core::factory::{FactorySettings, ObjectFactory};
use crate::core::inventory::Inventory;
use crate::domain::model::StatusFormat;
use crate::domain::objects::QuantumObject;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{DepotError, Result};
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use std::io::{BufRead, Write};

const MENU: &str = "\nQUANTUM DEPOT CONTROL PANEL
1. Add New Object (Random)
2. List Entire Inventory
3. Analyze Object (ID)
4. Emergency Cooling (ID, coolable objects only)
5. Exit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    AddRandom,
    ListAll,
    Analyze(String),
    Cool(String),
    Exit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Running,
    Exited,
    /// Terminal: a collapse ends the run for every object, not just one.
    Collapsed,
}

/// Single-threaded command dispatcher over one inventory.
pub struct Session<R: Rng = ChaCha8Rng> {
    inventory: Inventory,
    factory: ObjectFactory<R>,
    format: StatusFormat,
    state: SessionState,
}

impl Session<ChaCha8Rng> {
    pub fn from_config<C: ConfigProvider + ?Sized>(config: &C) -> Result<Self> {
        let settings = FactorySettings::from_provider(config);
        Ok(Self::new(
            ObjectFactory::seeded(settings)?,
            config.status_format(),
        ))
    }
}

impl<R: Rng> Session<R> {
    pub fn new(factory: ObjectFactory<R>, format: StatusFormat) -> Self {
        Self {
            inventory: Inventory::new(),
            factory,
            format,
            state: SessionState::Running,
        }
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    /// Direct access for shells that build objects themselves.
    pub fn inventory_mut(&mut self) -> &mut Inventory {
        &mut self.inventory
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == SessionState::Running
    }

    /// Runs one command and returns the lines to show. A collapse moves the
    /// session to [`SessionState::Collapsed`] and every later call fails with
    /// [`DepotError::SessionTerminated`].
    pub fn execute(&mut self, command: Command) -> Result<Vec<String>> {
        if !self.is_running() {
            tracing::warn!("Ignoring {:?}: session is {:?}", command, self.state);
            return Err(DepotError::SessionTerminated);
        }

        tracing::debug!("Executing {:?}", command);
        match command {
            Command::AddRandom => self.add_random(),
            Command::ListAll => self.list_all(),
            Command::Analyze(id) => self.analyze(&id),
            Command::Cool(id) => self.cool(&id),
            Command::Exit => {
                self.state = SessionState::Exited;
                tracing::info!("Session exited with {} objects", self.inventory.len());
                Ok(vec!["Shutting down safely...".to_string()])
            }
        }
    }

    fn add_random(&mut self) -> Result<Vec<String>> {
        let object = self.factory.generate_unique(&self.inventory)?;
        let line = format!("Added -> {}", self.render(object.as_ref())?);
        self.inventory.add(object)?;
        Ok(vec![line])
    }

    fn list_all(&self) -> Result<Vec<String>> {
        if self.inventory.is_empty() {
            return Ok(vec!["Inventory is empty.".to_string()]);
        }
        let mut lines = self
            .inventory
            .list_all()
            .map(|object| self.render(object))
            .collect::<Result<Vec<_>>>()?;
        lines.push(format!(
            "System active | Inventory: {} objects | Critical: {}",
            self.inventory.len(),
            self.inventory.coolable_count()
        ));
        Ok(lines)
    }

    fn analyze(&mut self, id: &str) -> Result<Vec<String>> {
        let format = self.format;
        let Some(object) = self.inventory.find_by_id_mut(id) else {
            return Ok(vec![not_found(id)]);
        };

        match object.analyze() {
            Ok(report) => {
                let status = format.render(&object.snapshot())?;
                Ok(vec![report, format!("Analysis complete. {}", status)])
            }
            Err(e) => {
                if e.is_fatal() {
                    self.state = SessionState::Collapsed;
                }
                Err(e)
            }
        }
    }

    fn cool(&mut self, id: &str) -> Result<Vec<String>> {
        let format = self.format;
        let Some(object) = self.inventory.find_by_id_mut(id) else {
            return Ok(vec![not_found(id)]);
        };

        match object.as_coolable_mut() {
            Some(coolable) => {
                coolable.cool();
                let status = format.render(&coolable.snapshot())?;
                Ok(vec![format!("Emergency cooling applied. {}", status)])
            }
            None => {
                tracing::warn!("Cooling rejected for {} ({})", id, object.kind());
                Err(DepotError::NotCoolableError { id: id.to_string() })
            }
        }
    }

    fn render(&self, object: &dyn QuantumObject) -> Result<String> {
        self.format.render(&object.snapshot())
    }
}

fn not_found(id: &str) -> String {
    tracing::debug!("No object with id {}", id);
    "Object not found.".to_string()
}

/// Drives a session from a menu on `input`/`output` until exit, end of input,
/// or collapse. A collapse is reported on `output` and returned as the error.
/// A session that has already stopped fails with
/// [`DepotError::SessionTerminated`] without reading any input.
pub fn run_console<R, I, W>(session: &mut Session<R>, input: I, output: &mut W) -> Result<()>
where
    R: Rng,
    I: BufRead,
    W: Write,
{
    if !session.is_running() {
        tracing::warn!("Console refused: session is {:?}", session.state());
        return Err(DepotError::SessionTerminated);
    }

    let mut lines = input.lines();

    while session.is_running() {
        writeln!(output, "{}", MENU)?;
        write!(output, "Your choice: ")?;
        output.flush()?;

        let Some(choice) = lines.next().transpose()? else {
            session.execute(Command::Exit)?;
            break;
        };

        let command = match choice.trim() {
            "1" => Command::AddRandom,
            "2" => Command::ListAll,
            "3" | "4" => {
                write!(output, "Object ID: ")?;
                output.flush()?;
                let Some(id) = lines.next().transpose()? else {
                    session.execute(Command::Exit)?;
                    break;
                };
                let id = id.trim().to_string();
                if choice.trim() == "3" {
                    Command::Analyze(id)
                } else {
                    Command::Cool(id)
                }
            }
            "5" => Command::Exit,
            _ => {
                writeln!(output, "Invalid choice.")?;
                continue;
            }
        };

        match session.execute(command) {
            Ok(messages) => {
                for message in messages {
                    writeln!(output, "{}", message)?;
                }
            }
            Err(e) if e.is_fatal() => {
                if let DepotError::CollapseError { report, .. } = &e {
                    writeln!(output, "{}", report)?;
                }
                writeln!(output, "SYSTEM COLLAPSED! EVACUATION INITIATED...")?;
                writeln!(output, "{}", e)?;
                output.flush()?;
                return Err(e);
            }
            Err(e) => {
                tracing::warn!("Command rejected: {}", e);
                writeln!(output, "{}", e.user_friendly_message())?;
            }
        }
    }

    output.flush()?;
    Ok(())
}
