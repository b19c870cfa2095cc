use crate::visibility::FormVisibility;


pub trait StaticEvent {
    const EVENT_TYPE: &'static str;

    fn unchecked_from_event(event: web_sys::Event) -> Self;
}


/// An element whose shown/hidden state is a single presentation marker.
pub trait FormTarget {
    fn visibility(&self) -> FormVisibility;

    /// Flips the marker and returns the resulting state.
    fn toggle(&self) -> FormVisibility;

    fn scroll_into_view(&self);
}


/// A clickable control.
///
/// The returned listener keeps the handler attached for as long as the page
/// lives, even if it is dropped.
pub trait Trigger {
    type Listener;

    fn on_click<F>(&self, callback: F) -> Self::Listener where F: FnMut() + 'static;
}
