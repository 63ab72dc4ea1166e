pub mod sysinfo_source;
