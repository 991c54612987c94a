/// Top-level screens reachable from the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Section {
    #[default]
    Housing,
    Navigator,
    Shops,
    Subscription,
    Community,
}

impl Section {
    /// Header order.
    pub const ALL: [Section; 5] = [
        Self::Housing,
        Self::Navigator,
        Self::Shops,
        Self::Subscription,
        Self::Community,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Self::Housing => "housing",
            Self::Navigator => "navigator",
            Self::Shops => "shops",
            Self::Subscription => "subscription",
            Self::Community => "community",
        }
    }

    /// Resolve a section id. Anything unrecognized falls back to Housing.
    pub fn from_id(id: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|s| s.id().eq_ignore_ascii_case(id.trim()))
            .unwrap_or_default()
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Housing => "Housing",
            Self::Navigator => "Navigator",
            Self::Shops => "Local Shops",
            Self::Subscription => "Plans",
            Self::Community => "Community",
        }
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|s| *s == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
