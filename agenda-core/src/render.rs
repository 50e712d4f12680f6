//! Event renderer lookup.
//!
//! Drawing is left to the presentation layer. The core only decides which
//! renderer handles an event: the first registered renderer whose kind
//! matches [`CalendarEvent::kind`], else the fallback.

use crate::event::{CalendarEvent, DEFAULT_EVENT_KIND};

pub trait EventRenderer<E> {
    /// Event kind this renderer handles.
    fn kind(&self) -> &str;

    /// Rendered row, or `None` when the row should be hidden.
    fn render(&self, event: &E) -> Option<String>;
}

/// Plain-text renderer used when nothing else is registered.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainEventRenderer;

impl<E: CalendarEvent> EventRenderer<E> for PlainEventRenderer {
    fn kind(&self) -> &str {
        DEFAULT_EVENT_KIND
    }

    fn render(&self, event: &E) -> Option<String> {
        if event.is_placeholder() && !event.show_placeholders() {
            return None;
        }

        if event.location().is_empty() {
            Some(event.title().to_string())
        } else {
            Some(format!("{} ({})", event.title(), event.location()))
        }
    }
}

pub struct RendererRegistry<E> {
    renderers: Vec<Box<dyn EventRenderer<E>>>,
    fallback: Box<dyn EventRenderer<E>>,
}

impl<E: CalendarEvent + 'static> Default for RendererRegistry<E> {
    fn default() -> Self {
        RendererRegistry::new(PlainEventRenderer)
    }
}

impl<E: CalendarEvent> RendererRegistry<E> {
    pub fn new(fallback: impl EventRenderer<E> + 'static) -> Self {
        RendererRegistry {
            renderers: Vec::new(),
            fallback: Box::new(fallback),
        }
    }

    pub fn add(&mut self, renderer: impl EventRenderer<E> + 'static) {
        self.renderers.push(Box::new(renderer));
    }

    pub fn len(&self) -> usize {
        self.renderers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.renderers.is_empty()
    }

    pub fn renderer_for(&self, event: &E) -> &dyn EventRenderer<E> {
        self.renderers
            .iter()
            .find(|r| r.kind() == event.kind())
            .map(|r| r.as_ref())
            .unwrap_or(self.fallback.as_ref())
    }

    pub fn render(&self, event: &E) -> Option<String> {
        self.renderer_for(event).render(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::BaseCalendarEvent;
    use chrono::NaiveDate;

    struct Shouting;

    impl EventRenderer<BaseCalendarEvent> for Shouting {
        fn kind(&self) -> &str {
            "all-day"
        }

        fn render(&self, event: &BaseCalendarEvent) -> Option<String> {
            Some(event.title.to_uppercase())
        }
    }

    fn event(title: &str) -> BaseCalendarEvent {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();
        BaseCalendarEvent::new(title, "", start, start)
    }

    #[test]
    fn falls_back_when_kind_is_unregistered() {
        let mut registry = RendererRegistry::default();
        registry.add(Shouting);

        assert_eq!(registry.render(&event("lunch")).as_deref(), Some("lunch"));
        assert_eq!(registry.render(&event("offsite").all_day()).as_deref(), Some("OFFSITE"));
    }

    #[test]
    fn first_matching_renderer_wins() {
        struct Quiet;
        impl EventRenderer<BaseCalendarEvent> for Quiet {
            fn kind(&self) -> &str {
                "all-day"
            }
            fn render(&self, _: &BaseCalendarEvent) -> Option<String> {
                None
            }
        }

        let mut registry = RendererRegistry::default();
        registry.add(Quiet);
        registry.add(Shouting);
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.render(&event("offsite").all_day()), None);
    }

    #[test]
    fn plain_renderer_hides_suppressed_placeholders() {
        let mut placeholder = BaseCalendarEvent::empty();
        placeholder.set_title("No events".to_string());
        placeholder.set_placeholder(true);

        placeholder.set_show_placeholders(false);
        assert_eq!(PlainEventRenderer.render(&placeholder), None);

        placeholder.set_show_placeholders(true);
        assert_eq!(PlainEventRenderer.render(&placeholder).as_deref(), Some("No events"));
    }

    #[test]
    fn plain_renderer_appends_location() {
        let mut e = event("Dentist");
        e.set_location("Main St".to_string());
        assert_eq!(PlainEventRenderer.render(&e).as_deref(), Some("Dentist (Main St)"));
    }
}
