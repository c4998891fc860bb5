/// Configuration module for the power menu popup.
///
/// This module provides the compiled-in settings of the popup, including:
/// - The ordered list of power actions shown as buttons
/// - The geometry constants used to size and lay out the window
/// - The window title
/// - The well-known path the chosen action is written to
///
/// Nothing here is read from disk, the command line or the environment.
/// The action list in particular is fixed at build time.
///
/// # Example
///
/// ```rust
/// use power_menu::config::PopupConfig;
///
/// let config = PopupConfig::default();
/// let actions = config.validate().expect("default actions are never empty");
/// assert_eq!(actions.get(2), Some("Restart"));
/// ```
use crate::layout::Geometry;
use std::path::PathBuf;
use thiserror::Error;

/// Power actions in display order, top to bottom
pub const POWER_ACTIONS: [&str; 5] = ["Lock Screen", "Sleep", "Restart", "Shut Down", "Log Out"];

/// Window title shown in the popup's title bar
pub const WINDOW_TITLE: &str = "Power";

/// File name of the result file inside the temporary directory
pub const RESULT_FILE_NAME: &str = ".sketchybar_power_choice";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("the action list is empty; the popup needs at least one action to show")]
    EmptyActionList,
}

/// Ordered, non-empty list of action labels
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionList {
    labels: Vec<String>,
}

impl ActionList {
    pub fn new<I, S>(labels: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();
        if labels.is_empty() {
            return Err(ConfigError::EmptyActionList);
        }
        Ok(ActionList { labels })
    }

    /// Number of actions; always at least one
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.labels.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(String::as_str)
    }
}

/// Popup configuration storing every compiled-in setting
#[derive(Clone, Debug)]
pub struct PopupConfig {
    /// Action labels in display order
    pub actions: Vec<String>,
    /// Window and button dimensions
    pub geometry: Geometry,
    pub title: String,
    /// Where the chosen action is written
    pub result_path: PathBuf,
}

impl Default for PopupConfig {
    fn default() -> Self {
        PopupConfig {
            actions: POWER_ACTIONS.iter().map(|a| a.to_string()).collect(),
            geometry: Geometry::default(),
            title: WINDOW_TITLE.to_string(),
            result_path: result_file_path(),
        }
    }
}

impl PopupConfig {
    /// Check the configuration before any window is created
    pub fn validate(&self) -> Result<ActionList, ConfigError> {
        ActionList::new(self.actions.iter().cloned())
    }
}

/// Get the well-known result file path
/// Returns /tmp/.sketchybar_power_choice on Unix, where pollers expect it
/// regardless of $TMPDIR
pub fn result_file_path() -> PathBuf {
    #[cfg(unix)]
    {
        PathBuf::from("/tmp").join(RESULT_FILE_NAME)
    }

    #[cfg(not(unix))]
    {
        std::env::temp_dir().join(RESULT_FILE_NAME)
    }
}
