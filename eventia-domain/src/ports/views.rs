use crate::entities::Event;

/// The container events are painted into.
pub trait EventView: Send + Sync {
    fn clear(&self);
    fn show_loading(&self);
    fn render_events(&self, events: &[Event]);
}
