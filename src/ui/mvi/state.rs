/// Marker trait for UI state.
///
/// `Default` is the closed/hidden state so that a reducer can take the
/// current value out with `std::mem::take`.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
