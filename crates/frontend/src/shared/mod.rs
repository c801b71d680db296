pub mod ad_gate;
pub mod app_settings;
pub mod config_sync;
pub mod downloads;
pub mod file_reader;
pub mod icons;
pub mod list_utils;
pub mod modal_frame;
pub mod storage;
pub mod theme;
pub mod toast;
