pub mod timing_table;

pub use timing_table::TimingTable;
