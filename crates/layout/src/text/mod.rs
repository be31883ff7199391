mod wrapper;

pub use wrapper::TextMeasurer;
