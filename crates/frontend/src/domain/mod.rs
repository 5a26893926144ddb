pub mod a001_detection;
pub mod a002_data_model;
pub mod a003_alert;
pub mod a004_destination;
pub mod a005_log_source;
pub mod a006_compliance_source;
pub mod a007_custom_log;
pub mod a008_global_module;
pub mod a009_analysis_pack;
pub mod a010_resource;
