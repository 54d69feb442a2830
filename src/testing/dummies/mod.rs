mod histograms;

pub use histograms::{histogram_of, samples_of, uniform_histogram};
