use super::*;
use crate::subscription::ChangeEvent;
use crate::widget::HostContext;
use ratatui::Frame;
use ratatui::layout::Rect;

struct TestWidget {
    descriptor: &'static WidgetDescriptor,
}

static FIRST_DESCRIPTOR: WidgetDescriptor = WidgetDescriptor {
    id: "first",
    name: "First widget",
};

static SECOND_DESCRIPTOR: WidgetDescriptor = WidgetDescriptor {
    id: "second",
    name: "Second widget",
};

impl WidgetPlugin for TestWidget {
    fn descriptor(&self) -> &'static WidgetDescriptor {
        self.descriptor
    }

    fn mount(&mut self, _host: HostContext<'_>) -> Result<(), crate::WidgetError> {
        Ok(())
    }

    fn update(&mut self, _host: HostContext<'_>, _object: Option<crate::Guid>) {}

    fn notify(&mut self, _host: HostContext<'_>, _event: &ChangeEvent) {}

    fn click(&mut self, _host: HostContext<'_>) {}

    fn render(&mut self, _frame: &mut Frame<'_>, _area: Rect) {}

    fn unmount(&mut self, _host: HostContext<'_>) {}
}

#[test]
fn registers_widgets_in_order() {
    let mut registry = WidgetRegistry::new();
    registry
        .register(TestWidget {
            descriptor: &FIRST_DESCRIPTOR,
        })
        .expect("first registration");
    registry
        .register(TestWidget {
            descriptor: &SECOND_DESCRIPTOR,
        })
        .expect("second registration");

    let ids: Vec<_> = registry.iter().map(|entry| entry.descriptor().id).collect();
    assert_eq!(ids, vec!["first", "second"]);
}

#[test]
fn rejects_duplicate_identifiers() {
    let mut registry = WidgetRegistry::new();
    registry
        .register(TestWidget {
            descriptor: &FIRST_DESCRIPTOR,
        })
        .expect("first registration");

    let error = registry
        .register(TestWidget {
            descriptor: &FIRST_DESCRIPTOR,
        })
        .expect_err("duplicate registration must fail");
    assert_eq!(error, WidgetRegistryError::DuplicateId { id: "first" });
}

#[test]
fn finds_widgets_by_identifier() {
    let mut registry = WidgetRegistry::new();
    registry
        .register(TestWidget {
            descriptor: &FIRST_DESCRIPTOR,
        })
        .expect("registration");

    assert!(registry.by_id("first").is_some());
    assert!(registry.by_id("absent").is_none());
    assert_eq!(registry.len(), 1);
    assert!(!registry.is_empty());
}
