//! Teams that players may belong to.

/// Identifies a team. Players hold a shared reference to their team and never modify it.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Team {
    id: u32,
}

impl Team {
    /// Construct a team with the given ID.
    pub fn new(id: u32) -> Self {
        Self { id }
    }

    /// Get the ID of this team.
    pub fn id(&self) -> u32 {
        self.id
    }
}
