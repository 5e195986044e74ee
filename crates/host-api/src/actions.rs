use crate::error::HostError;
use crate::object::Guid;

/// Where a navigated-to view appears.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Placement {
    /// Replace the current content area.
    #[default]
    Content,
    /// Open in a popup over the current content.
    Popup,
    /// Open as a blocking modal dialog.
    Modal,
}

/// Context passed along when opening a view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewOptions {
    pub context_guid: Guid,
    pub context_entity: String,
    pub placement: Placement,
}

/// Invocation of named server-side actions against selected objects.
pub trait ActionRunner {
    /// Run the named action with the given object selection.
    ///
    /// Failure is a terminal outcome for the triggering interaction; callers
    /// surface the error and wait for the next interaction.
    fn invoke(&mut self, action: &str, guids: &[Guid]) -> Result<(), HostError>;
}

/// Opening of named views with a bound context object.
pub trait Navigator {
    /// Open the named view, placing it according to `options.placement`.
    fn open_view(&mut self, view: &str, options: ViewOptions) -> Result<(), HostError>;
}
