#[derive(Clone, Debug)]
pub struct LobbyConfig {
    /// Text sent with `waiting` while a connection sits in the waiting slot.
    pub waiting_message: String,
}

impl Default for LobbyConfig {
    fn default() -> Self {
        Self {
            waiting_message: "Waiting for another player...".to_owned(),
        }
    }
}
