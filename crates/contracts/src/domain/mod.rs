pub mod a001_catalog;
