/// External command this tool depends on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    Homebrew,
    Jq,
    Ccusage,
    Git,
}

impl Tool {
    /// Executable name looked up on the search path.
    pub fn program(&self) -> &'static str {
        match self {
            Tool::Homebrew => "brew",
            Tool::Jq => "jq",
            Tool::Ccusage => "ccusage",
            Tool::Git => "git",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Tool::Homebrew => "Homebrew",
            Tool::Jq => "jq",
            Tool::Ccusage => "ccusage",
            Tool::Git => "git",
        }
    }
}

/// Snapshot of the host environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemInfo {
    pub platform: String,
    pub is_macos: bool,
    pub homebrew: bool,
    pub jq: bool,
    pub ccusage: bool,
    pub git: bool,
}

impl SystemInfo {
    pub fn has(&self, tool: Tool) -> bool {
        match tool {
            Tool::Homebrew => self.homebrew,
            Tool::Jq => self.jq,
            Tool::Ccusage => self.ccusage,
            Tool::Git => self.git,
        }
    }
}
