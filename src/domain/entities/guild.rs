/// A named role inside a guild
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Role {
    pub id: String,
    pub name: String,
}

impl Role {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Snapshot of a guild as returned by the platform
#[derive(Debug, Clone, Default)]
pub struct GuildInfo {
    pub id: String,
    pub name: String,
    pub roles: Vec<Role>,
}

impl GuildInfo {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            roles: Vec::new(),
        }
    }

    pub fn with_role(mut self, role: Role) -> Self {
        self.roles.push(role);
        self
    }

    /// Id of the first role whose name matches exactly, or an empty id
    /// when the guild has no such role. The platform rejects the empty id.
    pub fn role_id_by_name(&self, name: &str) -> &str {
        self.roles
            .iter()
            .find(|r| r.name == name)
            .map(|r| r.id.as_str())
            .unwrap_or("")
    }
}
