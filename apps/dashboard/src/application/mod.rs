pub mod record_sample;
