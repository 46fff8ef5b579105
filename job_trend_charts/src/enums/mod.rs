pub mod chart_key;
