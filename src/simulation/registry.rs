//! Ordered, name-keyed collection of bodies
//!
//! The registry owns every [`Body`]. Insertion order is kept (it only
//! matters for drawing order). Two invariants hold at all times once the
//! registry is built:
//! - no two bodies share a name (names are stored trimmed),
//! - at least one body is present.
//!
//! Mutations requested while a frame is running go through [`BodyCommand`]s
//! queued with [`BodyRegistry::submit`] and applied in one batch by
//! [`BodyRegistry::apply_pending`], so the physics pass always iterates a
//! collection of stable length.

use thiserror::Error;
use tracing::{debug, info, warn};

use super::states::{Body, BodyId, ColorChannel, NVec2, Rgb};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("object name must not be empty")]
    EmptyName,

    #[error("an object named '{0}' already exists")]
    DuplicateName(String),

    #[error("cannot delete '{0}': at least one object must remain")]
    LastBodyProtected(String),

    #[error("no object named '{0}'")]
    NotFound(String),

    #[error("a scenario needs at least one object")]
    NoBodies,
}

/// Everything needed to create a body
#[derive(Debug, Clone, PartialEq)]
pub struct NewBody {
    pub name: String,
    pub radius: f64,
    pub color: Rgb,
    pub x: NVec2,
    pub m: f64,
    pub v: NVec2,
}

/// A single editable field and its new value
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BodyEdit {
    Radius(f64),
    Mass(f64),
    Channel(ColorChannel, i64),
}

/// Mutation requested by the GUI layer
#[derive(Debug, Clone, PartialEq)]
pub enum BodyCommand {
    Create(NewBody),
    Delete(String),
    Edit(String, BodyEdit),
}

/// What an applied command did
#[derive(Debug, Clone, PartialEq)]
pub enum CommandApplied {
    Created(BodyId),
    Deleted(BodyId),
    Edited(BodyId),
    /// Delete of a body that was already gone
    Ignored,
}

pub type CommandReport = Result<CommandApplied, RegistryError>;

/// Message for the user about the most recent command outcome
///
/// A rejection sets the message; the next command that changes the registry
/// clears it. Ignored deletes leave it as it is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandFeedback {
    message: Option<String>,
}

impl CommandFeedback {
    /// Fold one frame of reports, in the order they were applied
    pub fn record(&mut self, reports: &[CommandReport]) {
        for report in reports {
            match report {
                Ok(CommandApplied::Ignored) => {}
                Ok(_) => self.message = None,
                Err(e) => self.message = Some(e.to_string()),
            }
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

#[derive(Debug, Clone)]
pub struct BodyRegistry {
    bodies: Vec<Body>,
    pending: Vec<BodyCommand>,
    next_id: u32,
}

impl BodyRegistry {
    /// Build a registry from an initial set of bodies, in order
    /// Fails on an empty set or on the first invalid / duplicate name
    pub fn from_bodies<I>(seed: I) -> Result<Self, RegistryError>
    where
        I: IntoIterator<Item = NewBody>,
    {
        let mut registry = Self {
            bodies: Vec::new(),
            pending: Vec::new(),
            next_id: 0,
        };
        for body in seed {
            registry.insert_body(body)?;
        }
        if registry.bodies.is_empty() {
            return Err(RegistryError::NoBodies);
        }
        Ok(registry)
    }

    /// Append a new body at the end of the registry
    ///
    /// The name is trimmed before validation; radius and mass are clamped.
    pub fn insert(
        &mut self,
        name: &str,
        radius: f64,
        color: Rgb,
        x: NVec2,
        m: f64,
        v: NVec2,
    ) -> Result<BodyId, RegistryError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(RegistryError::EmptyName);
        }
        if self.position_of(name).is_some() {
            return Err(RegistryError::DuplicateName(name.to_string()));
        }

        let id = BodyId(self.next_id);
        self.next_id += 1;
        self.bodies.push(Body::new(id, name, radius, color, x, m, v));
        info!(object = name, id = id.0, "object created");
        Ok(id)
    }

    pub fn insert_body(&mut self, body: NewBody) -> Result<BodyId, RegistryError> {
        self.insert(&body.name, body.radius, body.color, body.x, body.m, body.v)
    }

    /// Remove exactly one body by name and hand it back
    /// The last remaining body is never removed
    pub fn remove(&mut self, name: &str) -> Result<Body, RegistryError> {
        let name = name.trim();
        let index = self
            .position_of(name)
            .ok_or_else(|| RegistryError::NotFound(name.to_string()))?;
        if self.bodies.len() <= 1 {
            return Err(RegistryError::LastBodyProtected(name.to_string()));
        }
        let body = self.bodies.remove(index);
        info!(object = name, id = body.id.0, "object deleted");
        Ok(body)
    }

    /// Change one appearance / mass field, clamped to its range
    pub fn edit(&mut self, name: &str, edit: BodyEdit) -> Result<BodyId, RegistryError> {
        let name = name.trim();
        let body = self
            .bodies
            .iter_mut()
            .find(|b| b.name == name)
            .ok_or_else(|| RegistryError::NotFound(name.to_string()))?;

        match edit {
            BodyEdit::Radius(radius) => body.set_radius(radius),
            BodyEdit::Mass(m) => body.set_mass(m),
            BodyEdit::Channel(channel, value) => body.set_color_channel(channel, value),
        }
        Ok(body.id)
    }

    /// Queue a mutation; nothing changes until `apply_pending`
    pub fn submit(&mut self, command: BodyCommand) {
        self.pending.push(command);
    }

    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Apply every queued command in submission order
    ///
    /// Deleting a body that is already gone is reported as
    /// [`CommandApplied::Ignored`]; every other rejection is returned as an error
    /// and leaves the registry untouched.
    pub fn apply_pending(&mut self) -> Vec<CommandReport> {
        let pending = std::mem::take(&mut self.pending);
        pending
            .into_iter()
            .map(|command| self.apply(command))
            .collect()
    }

    fn apply(&mut self, command: BodyCommand) -> CommandReport {
        let report = match command {
            BodyCommand::Create(body) => self.insert_body(body).map(CommandApplied::Created),
            BodyCommand::Delete(name) => match self.remove(&name) {
                Ok(body) => Ok(CommandApplied::Deleted(body.id)),
                Err(RegistryError::NotFound(name)) => {
                    debug!(object = %name, "delete of missing object ignored");
                    Ok(CommandApplied::Ignored)
                }
                Err(e) => Err(e),
            },
            BodyCommand::Edit(name, edit) => self.edit(&name, edit).map(CommandApplied::Edited),
        };
        if let Err(e) = &report {
            warn!(error = %e, "object command rejected");
        }
        report
    }

    pub fn get(&self, name: &str) -> Option<&Body> {
        self.position_of(name.trim()).map(|i| &self.bodies[i])
    }

    pub fn get_by_id(&self, id: BodyId) -> Option<&Body> {
        self.bodies.iter().find(|b| b.id == id)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Bodies in stored order
    pub fn iter(&self) -> impl Iterator<Item = &Body> {
        self.bodies.iter()
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    /// Mutable access for the physics pass; the length cannot change through a slice
    pub(crate) fn bodies_mut(&mut self) -> &mut [Body] {
        &mut self.bodies
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn total_mass(&self) -> f64 {
        self.bodies.iter().map(Body::mass).sum()
    }

    pub fn total_momentum(&self) -> NVec2 {
        self.bodies
            .iter()
            .fold(NVec2::zeros(), |p, b| p + b.momentum())
    }

    pub fn center_of_mass(&self) -> NVec2 {
        let weighted = self
            .bodies
            .iter()
            .fold(NVec2::zeros(), |acc, b| acc + b.x * b.mass());
        weighted / self.total_mass()
    }

    pub fn kinetic_energy(&self) -> f64 {
        self.bodies.iter().map(Body::kinetic_energy).sum()
    }

    fn position_of(&self, name: &str) -> Option<usize> {
        self.bodies.iter().position(|b| b.name == name)
    }
}
