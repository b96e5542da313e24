/// Marker trait for intents: key presses routed to a dialog, picker
/// selections, open/close requests.
pub trait Intent: Send + 'static {}
