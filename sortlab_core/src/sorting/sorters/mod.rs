pub mod insertion_sorter;
pub mod merge_sorter;
pub mod quick_sorter;
pub mod selection_sorter;
pub mod std_sorter;
