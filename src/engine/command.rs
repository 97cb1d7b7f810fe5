//! The engine's complete interactive vocabulary.
//!
//! Every user-facing operation — whether triggered by a library-tile
//! click, a pointer gesture, or a programmatic call — is represented as a
//! [`DesignCommand`]. Consumers construct commands and pass them to
//! [`DesignEngine::execute`](super::DesignEngine::execute).

use glam::Vec2;

use super::DesignEngine;
use crate::catalog::BeadPrototype;
use crate::error::BeadloopError;
use crate::input::DropOutcome;
use crate::strand::BeadInstanceId;

/// A discrete or parameterized operation the engine can perform.
///
/// The engine never cares *how* a command was triggered — UI, tests, and
/// scripted flows all look identical:
///
/// ```ignore
/// engine.execute(DesignCommand::AddBead { prototype });
/// engine.execute(DesignCommand::DragMove { position });
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum DesignCommand {
    /// Place a bead from the catalog onto the loop.
    AddBead {
        /// Catalog entry to place.
        prototype: BeadPrototype,
    },

    /// Remove a placed bead outright (the library's delete affordance, as
    /// opposed to drag-to-remove).
    RemoveBead {
        /// Instance to remove.
        instance: BeadInstanceId,
    },

    /// Pick up a placed bead.
    DragStart {
        /// Instance to pick up.
        instance: BeadInstanceId,
    },

    /// Move the held bead to a pointer position, loop-local pixels.
    DragMove {
        /// Pointer position.
        position: Vec2,
    },

    /// Release the held bead and resolve the drop.
    DragEnd,

    /// Remove every bead and start over.
    ClearLoop,
}

/// What a successfully executed command did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    /// A bead was placed.
    Added(BeadInstanceId),
    /// A bead was removed.
    Removed(BeadInstanceId),
    /// A drag started or moved.
    Dragging,
    /// A drag ended; `None` when no drag was active.
    Dropped(Option<DropOutcome>),
    /// The loop was cleared.
    Cleared,
}

impl DesignEngine {
    /// Execute a command against the session.
    ///
    /// # Errors
    ///
    /// Forwards the underlying operation's error; see
    /// [`add_bead`](Self::add_bead), [`remove_bead`](Self::remove_bead),
    /// and the drag methods.
    pub fn execute(
        &mut self,
        command: DesignCommand,
    ) -> Result<CommandOutcome, BeadloopError> {
        match command {
            DesignCommand::AddBead { prototype } => {
                self.add_bead(prototype).map(CommandOutcome::Added)
            }
            DesignCommand::RemoveBead { instance } => self
                .remove_bead(instance)
                .map(|bead| CommandOutcome::Removed(bead.id())),
            DesignCommand::DragStart { instance } => {
                self.drag_start(instance)?;
                Ok(CommandOutcome::Dragging)
            }
            DesignCommand::DragMove { position } => {
                self.drag_move(position);
                Ok(CommandOutcome::Dragging)
            }
            DesignCommand::DragEnd => {
                self.drag_end().map(CommandOutcome::Dropped)
            }
            DesignCommand::ClearLoop => {
                self.clear_loop();
                Ok(CommandOutcome::Cleared)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::test_prototype;

    #[test]
    fn commands_mirror_direct_calls() {
        let mut engine = DesignEngine::new();
        let outcome = engine
            .execute(DesignCommand::AddBead {
                prototype: test_prototype("a", 10.0),
            })
            .unwrap();
        let CommandOutcome::Added(id) = outcome else {
            panic!("expected Added, got {outcome:?}");
        };
        assert_eq!(engine.bead_count(), 1);

        let outcome = engine
            .execute(DesignCommand::RemoveBead { instance: id })
            .unwrap();
        assert_eq!(outcome, CommandOutcome::Removed(id));
        assert_eq!(engine.bead_count(), 0);
    }

    #[test]
    fn drag_commands_round_trip() {
        let mut engine = DesignEngine::new();
        let CommandOutcome::Added(id) = engine
            .execute(DesignCommand::AddBead {
                prototype: test_prototype("a", 10.0),
            })
            .unwrap()
        else {
            panic!("expected Added");
        };

        assert_eq!(
            engine
                .execute(DesignCommand::DragStart { instance: id })
                .unwrap(),
            CommandOutcome::Dragging
        );
        assert_eq!(
            engine
                .execute(DesignCommand::DragMove {
                    position: Vec2::new(3.0, 3.0),
                })
                .unwrap(),
            CommandOutcome::Dragging
        );
        let outcome = engine.execute(DesignCommand::DragEnd).unwrap();
        assert!(matches!(outcome, CommandOutcome::Dropped(Some(_))));
    }

    #[test]
    fn clear_command_empties_the_loop() {
        let mut engine = DesignEngine::new();
        let _ = engine
            .execute(DesignCommand::AddBead {
                prototype: test_prototype("a", 10.0),
            })
            .unwrap();
        assert_eq!(
            engine.execute(DesignCommand::ClearLoop).unwrap(),
            CommandOutcome::Cleared
        );
        assert_eq!(engine.bead_count(), 0);
    }
}
