pub mod catalog;
pub mod combine;

pub use catalog::{format_widths, PanelCatalog};
pub use combine::{
    best_combination_with_fillers, best_combination_without_fillers, Combination, FillerCombination,
    FitStatus,
};
