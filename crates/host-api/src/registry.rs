use crate::error::WidgetRegistryError;
use crate::widget::{WidgetDescriptor, WidgetPlugin};

/// A widget implementation tracked by the registry.
pub struct RegisteredWidget {
    descriptor: &'static WidgetDescriptor,
    widget: Box<dyn WidgetPlugin>,
}

impl RegisteredWidget {
    /// Descriptor the widget registered under.
    #[must_use]
    pub fn descriptor(&self) -> &'static WidgetDescriptor {
        self.descriptor
    }

    /// Borrow the widget implementation.
    #[must_use]
    pub fn widget(&self) -> &dyn WidgetPlugin {
        self.widget.as_ref()
    }

    /// Mutably borrow the widget implementation.
    pub fn widget_mut(&mut self) -> &mut dyn WidgetPlugin {
        self.widget.as_mut()
    }
}

/// Registry of widget implementations available to the host.
///
/// Registration order is preserved; hosts iterate in that order when driving
/// lifecycle calls and rendering.
#[derive(Default)]
pub struct WidgetRegistry {
    entries: Vec<RegisteredWidget>,
}

impl WidgetRegistry {
    /// Create a registry without any widgets registered.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a widget implementation under its declared identifier.
    pub fn register<W>(&mut self, widget: W) -> Result<(), WidgetRegistryError>
    where
        W: WidgetPlugin + 'static,
    {
        let descriptor = widget.descriptor();
        if self.entries.iter().any(|entry| entry.descriptor.id == descriptor.id) {
            return Err(WidgetRegistryError::DuplicateId { id: descriptor.id });
        }
        self.entries.push(RegisteredWidget {
            descriptor,
            widget: Box::new(widget),
        });
        Ok(())
    }

    /// Number of registered widgets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up a registered widget by identifier.
    #[must_use]
    pub fn by_id(&mut self, id: &str) -> Option<&mut RegisteredWidget> {
        self.entries.iter_mut().find(|entry| entry.descriptor.id == id)
    }

    /// Iterate over registered widgets.
    pub fn iter(&self) -> impl Iterator<Item = &RegisteredWidget> {
        self.entries.iter()
    }

    /// Iterate mutably over registered widgets.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut RegisteredWidget> {
        self.entries.iter_mut()
    }
}

#[cfg(test)]
mod tests;
