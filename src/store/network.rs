/// Network indicator shown next to the grid toolbar.
///
/// Only `Idle -> Loading -> Idle` is ever driven. `Committing` is part of
/// the indicator's vocabulary but the grid is read-only, so nothing
/// enters it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NetworkStatus {
    #[default]
    Idle,
    Loading,
    Committing,
}

impl NetworkStatus {
    pub fn text(&self) -> &'static str {
        match self {
            NetworkStatus::Idle => "Idle",
            NetworkStatus::Loading => "Loading",
            NetworkStatus::Committing => "Committing",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            NetworkStatus::Idle => "green",
            NetworkStatus::Loading => "blue",
            NetworkStatus::Committing => "red",
        }
    }

    pub fn label(&self) -> String {
        format!("Network status: {}", self.text())
    }
}
